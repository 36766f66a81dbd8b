use std::fmt;

use crate::Error;

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(transparent)]
pub struct CommentId(pub i64);

impl CommentId {
    /// Parent id of top-level comments
    pub const ROOT: CommentId = CommentId(0);

    pub fn is_root(&self) -> bool {
        *self == CommentId::ROOT
    }
}

impl Default for CommentId {
    fn default() -> CommentId {
        CommentId::ROOT
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(
    Clone,
    Debug,
    Eq,
    PartialEq,
    bolero::generator::TypeGenerator,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Comment {
    pub id: CommentId,

    /// `CommentId::ROOT` for top-level comments
    #[serde(default)]
    pub parent_id: CommentId,

    pub author_name: String,

    /// Seconds since the unix epoch
    pub date_time: i64,

    pub body: String,
}

/// Payload returned by the remote comment source
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentsFeed {
    pub comments: Vec<Comment>,
}

/// A comment the local user asked to post, not yet assigned an id
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    body: String,
    parent_id: CommentId,
}

impl NewComment {
    /// Fails with `Error::EmptyBody` if `body` is empty or only whitespace
    pub fn new(body: impl Into<String>, parent_id: Option<CommentId>) -> Result<NewComment, Error> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(Error::EmptyBody);
        }
        Ok(NewComment {
            body,
            parent_id: parent_id.unwrap_or(CommentId::ROOT),
        })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn parent_id(&self) -> CommentId {
        self.parent_id
    }

    pub fn into_comment(self, id: CommentId, author_name: String, date_time: i64) -> Comment {
        Comment {
            id,
            parent_id: self.parent_id,
            author_name,
            date_time,
            body: self.body,
        }
    }
}
