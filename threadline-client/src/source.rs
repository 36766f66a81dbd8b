use async_trait::async_trait;
use futures::{channel::oneshot, pin_mut, select_biased, FutureExt};

use crate::api::Comment;

/// Where the shared comments come from
#[async_trait(?Send)]
pub trait RemoteSource {
    async fn fetch_comments(&self) -> anyhow::Result<Vec<Comment>>;
}

/// A string-keyed durable slot store, scoped to the running client
pub trait LocalStore {
    /// Returns `None` if `key` was never written
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Fire-and-forget user notifications
pub trait Notifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str);
}

/// Fetches remote comments unless `cancel`'s receiving end goes away first.
///
/// Returns `None` when cancelled: the consumer was torn down and the result must
/// not be applied anywhere. A fetch that completes after the receiver went away
/// is cancelled too.
pub async fn fetch_remote<R>(
    source: &R,
    mut cancel: oneshot::Sender<()>,
) -> Option<anyhow::Result<Vec<Comment>>>
where
    R: ?Sized + RemoteSource,
{
    let res = {
        let fetch = source.fetch_comments().fuse();
        let cancellation = cancel.cancellation().fuse();
        pin_mut!(fetch, cancellation);
        select_biased! {
            _ = cancellation => None,
            res = fetch => Some(res),
        }
    };
    match res {
        Some(res) if !cancel.is_canceled() => Some(res),
        _ => {
            tracing::debug!("comment fetch cancelled, dropping its result");
            None
        }
    }
}
