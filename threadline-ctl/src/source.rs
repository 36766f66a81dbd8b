use anyhow::{anyhow, Context};
use async_trait::async_trait;
use threadline_client::{
    api::{Comment, CommentsFeed, Error as ApiError},
    RemoteSource,
};

pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(host: &str) -> HttpSource {
        HttpSource {
            client: reqwest::Client::new(),
            url: format!("{}/api/comments", host.trim_end_matches('/')),
        }
    }
}

#[async_trait(?Send)]
impl RemoteSource for HttpSource {
    async fn fetch_comments(&self) -> anyhow::Result<Vec<Comment>> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("requesting {}", self.url))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await.context("reading error body")?;
            return Err(match ApiError::parse(&body) {
                Ok(err) => anyhow!(err),
                Err(_) => anyhow!("server answered {status}"),
            });
        }
        let feed: CommentsFeed = resp.json().await.context("parsing comment feed")?;
        tracing::debug!(num_comments = feed.comments.len(), "fetched comment feed");
        Ok(feed.comments)
    }
}
