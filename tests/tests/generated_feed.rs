use rand::{rngs::StdRng, SeedableRng};
use threadline_client::{api::CommentId, build_forest};

#[test]
fn generated_feeds_form_a_single_forest() {
    bolero::check!()
        .with_type::<(u64, u8)>()
        .cloned()
        .for_each(|(seed, n)| {
            let feed = tests::generate_feed(&mut StdRng::seed_from_u64(seed), n as usize);
            assert_eq!(feed.comments.len(), n as usize);
            let forest = build_forest(&feed.comments, CommentId::ROOT).expect("building forest");
            assert_eq!(forest.len(), feed.comments.len());
        });
}

#[test]
fn bodies_are_never_blank() {
    let feed = tests::generate_feed(&mut StdRng::seed_from_u64(42), 50);
    assert!(feed.comments.iter().all(|c| !c.body.trim().is_empty()));
}
