use rand::Rng;
use threadline_api::{Comment, CommentId, CommentsFeed};

const AUTHORS: &[&str] = &["Alice", "Bob", "Carol", "Dmitri", "Eun-ji", "Farid"];

const FIRST_DATE: i64 = 1_600_000_000;
const MAX_DATE_STEP: i64 = 3 * 3600;
const MAX_BODY_WORDS: usize = 40;

/// Share of comments that start a new thread instead of replying
const TOP_LEVEL_RATIO: f64 = 0.3;

/// Random feed of `n` comments, with ids `1..=n` and replies always pointing at
/// an earlier comment, so that every comment is reachable from the root.
pub fn generate_feed(rng: &mut impl Rng, n: usize) -> CommentsFeed {
    let mut date_time = FIRST_DATE;
    let comments = (1..=n as i64)
        .map(|id| {
            date_time += rng.gen_range(1..=MAX_DATE_STEP);
            let parent_id = match id == 1 || rng.gen_bool(TOP_LEVEL_RATIO) {
                true => CommentId::ROOT,
                false => CommentId(rng.gen_range(1..id)),
            };
            let author_name = String::from(AUTHORS[rng.gen_range(0..AUTHORS.len())]);
            let num_words = rng.gen_range(1..=MAX_BODY_WORDS);
            Comment {
                id: CommentId(id),
                parent_id,
                author_name,
                date_time,
                body: lipsum::lipsum_words_with_rng(&mut *rng, num_words),
            }
        })
        .collect();
    CommentsFeed { comments }
}
