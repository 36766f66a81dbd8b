use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use anyhow::Context;
use threadline_api::CommentsFeed;

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub feed: FeedFile,
    pub delay: Delay,
}

/// Feed file, re-read on every request so edits show up without a restart
#[derive(Clone, Debug)]
pub struct FeedFile(pub Arc<PathBuf>);

/// Latency added before answering feed requests
#[derive(Clone, Copy, Debug)]
pub struct Delay(pub Duration);

pub async fn load_feed(path: &Path) -> anyhow::Result<CommentsFeed> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading feed file {:?}", path))?;
    let feed: CommentsFeed = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing feed file {:?}", path))?;

    let mut seen = HashSet::new();
    let duplicates = feed.comments.iter().filter(|c| !seen.insert(c.id)).count();
    if duplicates > 0 {
        // clients deduplicate, so this is served as-is
        tracing::warn!(duplicates, "feed file holds duplicate comment ids");
    }
    Ok(feed)
}
