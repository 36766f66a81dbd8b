use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    time::Duration,
};

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use threadline_client::{
    api::{Comment, CommentsFeed},
    LocalStore, NotificationKind, Notifier, RemoteSource,
};

/// Artificial latency of the mock source, so loading states are visible
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// In-memory remote source serving a fixed feed
pub struct MockSource {
    feed: CommentsFeed,
    delay: Duration,
    failing: Cell<bool>,
    fetches: Cell<usize>,
}

impl MockSource {
    pub fn new(comments: Vec<Comment>) -> MockSource {
        MockSource {
            feed: CommentsFeed { comments },
            delay: DEFAULT_DELAY,
            failing: Cell::new(false),
            fetches: Cell::new(0),
        }
    }

    /// Parses a `{ "comments": [...] }` document
    pub fn from_json(json: &str) -> anyhow::Result<MockSource> {
        let feed: CommentsFeed = serde_json::from_str(json).context("parsing comments feed")?;
        Ok(MockSource::new(feed.comments))
    }

    pub fn with_delay(mut self, delay: Duration) -> MockSource {
        self.delay = delay;
        self
    }

    /// Makes every following fetch fail, until called again with `false`
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Return the number of fetches started so far
    pub fn test_num_fetches(&self) -> usize {
        self.fetches.get()
    }
}

#[async_trait(?Send)]
impl RemoteSource for MockSource {
    async fn fetch_comments(&self) -> anyhow::Result<Vec<Comment>> {
        self.fetches.set(self.fetches.get() + 1);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.failing.get() {
            tracing::debug!("mock source failing fetch on purpose");
            return Err(anyhow!("mock source is set to fail"));
        }
        Ok(self.feed.comments.clone())
    }
}

/// In-memory local store that remembers every write
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    writes: Vec<(String, String)>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// Pre-fills `key` without counting it as a write
    pub fn with_raw(mut self, key: &str, value: &str) -> MemoryStore {
        self.slots.insert(String::from(key), String::from(value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(|v| v as &str)
    }

    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }
}

impl LocalStore for MemoryStore {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.writes.push((String::from(key), String::from(value)));
        self.slots.insert(String::from(key), String::from(value));
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Notifier keeping every notification for later inspection
#[derive(Debug, Default)]
pub struct RecordingNotifier(RefCell<Vec<Notification>>);

impl RecordingNotifier {
    pub fn new() -> RecordingNotifier {
        RecordingNotifier::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.0.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        self.0.borrow_mut().push(Notification {
            kind,
            title: String::from(title),
            message: String::from(message),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_reads_feed_documents() {
        let source = MockSource::from_json(
            r#"{"comments":[{"id":1,"parent_id":0,"author_name":"A","date_time":1000,"body":"hi"}]}"#,
        )
        .expect("parsing feed");
        assert_eq!(source.feed.comments.len(), 1);
        assert_eq!(source.delay, DEFAULT_DELAY);

        assert!(MockSource::from_json(r#"{"comments":"#).is_err());
    }

    #[test]
    fn memory_store_counts_writes_not_prefills() {
        let mut store = MemoryStore::new().with_raw("comments", "[]");
        assert_eq!(store.read("comments").expect("reading").as_deref(), Some("[]"));
        store.write("comments", "[1]").expect("writing");
        assert_eq!(store.get("comments"), Some("[1]"));
        assert_eq!(store.writes().len(), 1);
    }
}
