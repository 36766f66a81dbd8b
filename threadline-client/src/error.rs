use crate::api::{CommentId, Error as ApiError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("locally persisted comments are malformed")]
    MalformedLocalComments(#[source] serde_json::Error),

    #[error("failed accessing the local comment store")]
    Storage(#[source] anyhow::Error),

    /// The comment was reached twice while walking down from the root
    #[error("comment {0} is its own ancestor")]
    ReplyCycle(CommentId),
}

impl Error {
    pub fn is_empty_body(&self) -> bool {
        matches!(self, Error::Api(ApiError::EmptyBody))
    }
}
