mod config;
pub use config::Config;

mod error;
pub use error::Error;

mod focus;
pub use focus::{FocusChange, ReplyBox, ReplyFocus};

mod merge;
pub use merge::merge;

mod source;
pub use source::{fetch_remote, LocalStore, NotificationKind, Notifier, RemoteSource};

mod store;
pub use store::CommentStore;

mod tree;
pub use tree::{build_forest, Forest, ReplyNode};

pub mod view;

pub mod api {
    pub use threadline_api::*;
}
