use std::collections::HashSet;

use anyhow::Context;
use futures::channel::oneshot;

use crate::{
    api::{Comment, CommentId, NewComment},
    build_forest, fetch_remote, merge, Config, Error, Forest, LocalStore, NotificationKind,
    Notifier, RemoteSource,
};

/// Owner of the canonical comment collection and the only writer of persisted comments.
///
/// Loading is split in two halves so that a UI can run the remote fetch detached
/// from the store: `start_loading` reads the local comments, `finish_loading` merges
/// them with whatever the remote source returned. `load` does both in one go.
///
/// `append` takes `&mut self`, which serializes id assignment.
pub struct CommentStore<S, N> {
    config: Config,
    storage: S,
    notifier: N,
    remote: Vec<Comment>,
    local: Vec<Comment>,
    comments: Vec<Comment>,
    loading: bool,
}

impl<S, N> CommentStore<S, N>
where
    S: LocalStore,
    N: Notifier,
{
    pub fn new(config: Config, storage: S, notifier: N) -> CommentStore<S, N> {
        CommentStore {
            config,
            storage,
            notifier,
            remote: Vec::new(),
            local: Vec::new(),
            comments: Vec::new(),
            loading: false,
        }
    }

    /// Marks the store as loading and reads the locally persisted comments.
    ///
    /// Malformed persisted data is reported as `Error::MalformedLocalComments` and
    /// ends the load.
    pub fn start_loading(&mut self) -> Result<(), Error> {
        self.loading = true;
        match self.read_local() {
            Ok(local) => {
                tracing::debug!(num_local = local.len(), "read locally persisted comments");
                self.local = local;
                Ok(())
            }
            Err(e) => {
                self.loading = false;
                Err(e)
            }
        }
    }

    /// Merges the remote fetch result with the local comments read by `start_loading`.
    ///
    /// A failed fetch counts as zero remote comments: it is logged and the user is
    /// notified, but the load still completes.
    pub fn finish_loading(&mut self, remote: anyhow::Result<Vec<Comment>>) -> &[Comment] {
        self.loading = false;
        self.remote = match remote {
            Ok(remote) => remote,
            Err(err) => {
                tracing::warn!(?err, "Getting comments: error occurred. Try later :(");
                self.notifier.notify(
                    NotificationKind::Error,
                    "Comments unavailable:",
                    "Getting comments failed. Try later :(",
                );
                Vec::new()
            }
        };
        self.comments = merge(&self.remote, &self.local);
        tracing::debug!(
            num_remote = self.remote.len(),
            num_local = self.local.len(),
            num_comments = self.comments.len(),
            "comments loaded"
        );
        &self.comments
    }

    /// Loads remote and local comments into the canonical collection.
    ///
    /// Returns `Ok(None)` without touching the collection if `cancel`'s receiver was
    /// dropped before the remote fetch resolved.
    pub async fn load<R>(
        &mut self,
        source: &R,
        cancel: oneshot::Sender<()>,
    ) -> Result<Option<&[Comment]>, Error>
    where
        R: ?Sized + RemoteSource,
    {
        self.start_loading()?;
        match fetch_remote(source, cancel).await {
            Some(remote) => Ok(Some(self.finish_loading(remote))),
            None => {
                self.loading = false;
                Ok(None)
            }
        }
    }

    /// Posts a comment as the local user, dated now
    pub fn append(&mut self, new: NewComment) -> Result<Comment, Error> {
        self.append_at(new, chrono::Utc::now().timestamp())
    }

    /// Posts a comment as the local user with an explicit `date_time`.
    ///
    /// The new id is the collection size plus one, skipping forward past ids that
    /// are already taken. Nothing changes in memory if persisting fails.
    pub fn append_at(&mut self, new: NewComment, date_time: i64) -> Result<Comment, Error> {
        let comment = new.into_comment(self.next_id(), self.config.author_name.clone(), date_time);
        let mut local = self.local.clone();
        local.push(comment.clone());
        self.persist(&local)?;
        self.local = local;
        self.comments = merge(&self.remote, &self.local);
        tracing::debug!(id = %comment.id, parent_id = %comment.parent_id, "appended comment");
        self.notifier
            .notify(NotificationKind::Success, "New comment:", "Sent!");
        Ok(comment)
    }

    /// The canonical collection: unique ids, first-seen order
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Comments read from, or written to, the local store
    pub fn local_comments(&self) -> &[Comment] {
        &self.local
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn find(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    pub fn forest(&self) -> Result<Forest, Error> {
        build_forest(&self.comments, CommentId::ROOT)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn next_id(&self) -> CommentId {
        let taken = self.comments.iter().map(|c| c.id).collect::<HashSet<_>>();
        let mut id = CommentId(self.comments.len() as i64 + 1);
        while taken.contains(&id) {
            id.0 += 1;
        }
        id
    }

    fn read_local(&self) -> Result<Vec<Comment>, Error> {
        let raw = self
            .storage
            .read(&self.config.storage_key)
            .with_context(|| format!("reading key {:?}", self.config.storage_key))
            .map_err(Error::Storage)?;
        match raw {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(Error::MalformedLocalComments),
        }
    }

    fn persist(&mut self, local: &[Comment]) -> Result<(), Error> {
        let json = serde_json::to_string(local)
            .context("serializing local comments")
            .map_err(Error::Storage)?;
        self.storage
            .write(&self.config.storage_key, &json)
            .with_context(|| format!("writing key {:?}", self.config.storage_key))
            .map_err(Error::Storage)
    }
}
