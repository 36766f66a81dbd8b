mod app;
pub use app::{App, AppMsg};

mod comment_card;
pub use comment_card::CommentCard;

mod comment_tree;
pub use comment_tree::CommentTree;

mod loading_banner;
pub use loading_banner::LoadingBanner;

mod new_comment_form;
pub use new_comment_form::NewCommentForm;

mod reply_box;
pub use reply_box::ReplyBox;

mod toast;
pub use toast::{Toast, ToastList, ToastNotifier};
