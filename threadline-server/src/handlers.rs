use std::path::PathBuf;

use axum::{extract::State, http::Uri, Json};
use threadline_api::{CommentsFeed, Error as ApiError};

use crate::{load_feed, Delay, Error, FeedFile};

pub async fn fetch_comments(
    State(FeedFile(path)): State<FeedFile>,
    State(Delay(delay)): State<Delay>,
) -> Result<Json<CommentsFeed>, Error> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let feed = load_feed(&path).await.map_err(|source| Error::Feed {
        path: PathBuf::clone(&path),
        source,
    })?;
    tracing::debug!(num_comments = feed.comments.len(), "serving comment feed");
    Ok(Json(feed))
}

pub async fn not_found(uri: Uri) -> Error {
    Error::Api(ApiError::NotFound(uri.path().to_string()))
}
