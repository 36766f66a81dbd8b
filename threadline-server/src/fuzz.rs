#![cfg(test)]

use std::{io::Write, panic::AssertUnwindSafe, sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{self, request, StatusCode},
    Router,
};
use threadline_api::{CommentsFeed, Error as ApiError};
use tower::{Service, ServiceExt};

use crate::*;

macro_rules! do_tokio_test {
    ( $name:ident, $typ:ty, $fn:expr ) => {
        #[test]
        fn $name() {
            let runtime = AssertUnwindSafe(
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .expect("failed initializing tokio runtime"),
            );
            bolero::check!()
                .with_type::<$typ>()
                .cloned()
                .for_each(move |v| {
                    let () = runtime.block_on($fn(v));
                })
        }
    };
}

const FEED: &str = r#"{"comments":[
    {"id":1,"parent_id":0,"author_name":"A","date_time":1000,"body":"hi"},
    {"id":2,"parent_id":1,"author_name":"B","date_time":1001,"body":"hello"}
]}"#;

fn feed_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("creating tempfile");
    file.write_all(contents.as_bytes())
        .expect("writing feed tempfile");
    file
}

fn test_app(file: &tempfile::NamedTempFile) -> Router {
    app(AppState {
        feed: FeedFile(Arc::new(file.path().to_path_buf())),
        delay: Delay(Duration::ZERO),
    })
}

async fn get(app: &mut Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = request::Builder::new()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("building request");
    app.ready().await.expect("waiting for app to be ready");
    let resp = app.call(req).await.expect("running request");
    let status = resp.status();
    let body = hyper::body::to_bytes(resp.into_body())
        .await
        .expect("recovering resp bytes");
    (status, body.to_vec())
}

#[tokio::test]
async fn serves_the_feed() {
    let file = feed_file(FEED);
    let mut app = test_app(&file);
    for uri in ["/api/comments", "/assets/comments.json"] {
        let (status, body) = get(&mut app, uri).await;
        assert_eq!(status, StatusCode::OK);
        let feed: CommentsFeed = serde_json::from_slice(&body).expect("parsing feed");
        assert_eq!(feed.comments.len(), 2);
        assert_eq!(feed.comments[1].parent_id.0, 1);
    }
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let file = feed_file(FEED);
    let (status, body) = get(&mut test_app(&file), "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        ApiError::parse(&body).expect("parsing error body"),
        ApiError::NotFound(String::from("/api/nope"))
    );
}

#[tokio::test]
async fn broken_feed_file_is_an_internal_error() {
    let file = feed_file("{\"comments\": [");
    let (status, body) = get(&mut test_app(&file), "/api/comments").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(matches!(
        ApiError::parse(&body).expect("parsing error body"),
        ApiError::Unknown(_)
    ));
}

#[tokio::test]
async fn missing_feed_file_is_not_found() {
    let dir = tempfile::tempdir().expect("creating tempdir");
    let mut app = app(AppState {
        feed: FeedFile(Arc::new(dir.path().join("comments.json"))),
        delay: Delay(Duration::ZERO),
    });
    let (status, body) = get(&mut app, "/api/comments").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        ApiError::parse(&body).expect("parsing error body"),
        ApiError::NotFound(String::from("comment feed"))
    );
}

#[tokio::test]
async fn load_feed_accepts_duplicates() {
    let file = feed_file(
        r#"{"comments":[
            {"id":1,"parent_id":0,"author_name":"A","date_time":1,"body":"x"},
            {"id":1,"parent_id":0,"author_name":"A","date_time":1,"body":"y"}
        ]}"#,
    );
    let feed = load_feed(file.path()).await.expect("loading feed");
    assert_eq!(feed.comments.len(), 2);
}

do_tokio_test!(fuzz_routes, String, |path: String| async move {
    let file = feed_file(FEED);
    let mut app = test_app(&file);
    let uri = format!("/{}", path.trim_start_matches('/'));
    if uri.parse::<http::Uri>().is_err() {
        return;
    }
    let (status, body) = get(&mut app, &uri).await;
    match status {
        StatusCode::OK => {
            serde_json::from_slice::<CommentsFeed>(&body).expect("parsing feed");
        }
        _ => {
            ApiError::parse(&body)
                .unwrap_or_else(|err| panic!("parsing error response body {err}, body is {body:?}"));
        }
    }
});
