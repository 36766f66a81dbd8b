const NUM_COMMENTS: usize = 200;

fn main() -> Result<(), serde_json::Error> {
    let n = std::env::args()
        .nth(1)
        .and_then(|n| n.parse().ok())
        .unwrap_or(NUM_COMMENTS);
    let feed = tests::generate_feed(&mut rand::thread_rng(), n);
    println!("{}", serde_json::to_string_pretty(&feed)?);
    Ok(())
}
