use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{routing::get, Router};

mod error;
pub use error::Error;

mod feed;
pub use feed::{load_feed, AppState, Delay, FeedFile};

mod handlers;

mod fuzz;

#[derive(structopt::StructOpt)]
struct Opt {
    /// Address to listen on
    #[structopt(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,

    /// JSON file holding a `{ "comments": [...] }` feed
    #[structopt(long, env = "THREADLINE_FEED")]
    feed: PathBuf,

    /// Artificial latency added to every feed response
    #[structopt(long, default_value = "1000")]
    delay_ms: u64,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/comments", get(handlers::fetch_comments))
        .route("/assets/comments.json", get(handlers::fetch_comments))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let opt = <Opt as structopt::StructOpt>::from_args();

    let feed = load_feed(&opt.feed).await?;
    tracing::info!(num_comments = feed.comments.len(), feed = ?opt.feed, "feed file is valid");

    let state = AppState {
        feed: FeedFile(Arc::new(opt.feed)),
        delay: Delay(Duration::from_millis(opt.delay_ms)),
    };

    tracing::info!("listening on {}", opt.listen);
    axum::Server::bind(&opt.listen)
        .serve(app(state).into_make_service())
        .await
        .context("serving axum webserver")
}
