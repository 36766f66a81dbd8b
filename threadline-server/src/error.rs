use std::{io, path::PathBuf};

use threadline_api::Error as ApiError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The feed file could not be read or parsed
    #[error("serving comment feed {path:?}")]
    Feed {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    fn is_missing_feed(&self) -> bool {
        match self {
            Error::Feed { source, .. } => source
                .chain()
                .filter_map(|e| e.downcast_ref::<io::Error>())
                .any(|e| e.kind() == io::ErrorKind::NotFound),
            Error::Api(_) => false,
        }
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let err = match self {
            ref err if err.is_missing_feed() => {
                tracing::warn!(?err, "comment feed file is gone");
                ApiError::NotFound(String::from("comment feed"))
            }
            Error::Feed { path, source } => {
                tracing::error!(?path, err = ?source, "comment feed is unusable");
                ApiError::Unknown(String::from("Comment feed is unavailable, see server logs"))
            }
            Error::Api(err) => {
                tracing::info!("returning error to client: {err}");
                err
            }
        };
        (err.status_code(), err.contents()).into_response()
    }
}
