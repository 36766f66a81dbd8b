mod comment;
pub use comment::{Comment, CommentId, CommentsFeed, NewComment};

mod error;
pub use error::Error;

mod time;
pub use time::{format_date, DATE_FORMAT};

/// Key under which the locally-added comments are persisted
pub const STORAGE_KEY: &str = "comments";

/// Display name used for comments written by the local user
pub const LOCAL_AUTHOR: &str = "Teacup";
