use anyhow::{anyhow, Context};
use async_trait::async_trait;
use threadline_client::{
    api::{Comment, CommentsFeed, Error as ApiError},
    RemoteSource,
};

/// The static comment feed served next to the page
pub struct FeedSource {
    url: String,
}

impl FeedSource {
    pub fn new(url: impl Into<String>) -> FeedSource {
        FeedSource { url: url.into() }
    }
}

#[async_trait(?Send)]
impl RemoteSource for FeedSource {
    async fn fetch_comments(&self) -> anyhow::Result<Vec<Comment>> {
        let resp = crate::CLIENT
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("fetching comment feed from {}", self.url))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await.context("reading error response")?;
            return Err(match ApiError::parse(&body) {
                Ok(err) => anyhow!(err),
                Err(_) => anyhow!("comment feed answered {status}"),
            });
        }
        let feed: CommentsFeed = resp.json().await.context("parsing comment feed")?;
        tracing::info!(num_comments = feed.comments.len(), "fetched comment feed");
        Ok(feed.comments)
    }
}
