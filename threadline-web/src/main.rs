use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};

mod api;
mod storage;
mod ui;
mod util;

/// Where the shared comment feed is fetched from, relative to the page
const FEED_URL: &str = match option_env!("THREADLINE_FEED_URL") {
    Some(url) => url,
    None => "assets/comments.json",
};

lazy_static::lazy_static! {
    static ref CLIENT: ClientWithMiddleware = {
        let policy = ExponentialBackoff::builder().build_with_max_retries(3);
        reqwest_middleware::ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy(policy))
            .build()
    };
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<ui::App>::new().render();
}
