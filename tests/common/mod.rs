use post_classifier::{PostBatch, RawPost};
use std::fs;

pub const FIXTURE_PATH: &str = "tests/fixtures/posts.json";

/// Raw posts from the shared fixture.
#[allow(dead_code)]
pub fn fixture_posts() -> Vec<RawPost> {
    let json = fs::read_to_string(FIXTURE_PATH).expect("Failed to read fixture");
    serde_json::from_str(&json).expect("Failed to parse fixture")
}

/// Fixture posts, classified.
#[allow(dead_code)]
pub fn fixture_batch() -> PostBatch {
    PostBatch::load_from_file(FIXTURE_PATH).expect("Failed to load fixture batch")
}
