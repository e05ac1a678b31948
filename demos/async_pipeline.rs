//! Async Pipeline Example
//!
//! The REST pipeline with suspend-aware chaining.
//!
//! Run with: `cargo run --example async_pipeline --features async`

use checked_rail::prelude::*;

failure_payload! {
    pub struct RestError => "Rest Client Error";
}

async fn hit_rest_api(url: &'static str) -> Checked<&'static str, RestError> {
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    if url.is_empty() {
        Checked::failure(RestError::from("empty url"))
    } else {
        Checked::success("im fine")
    }
}

async fn word_count(body: &'static str) -> Checked<usize, RestError> {
    Checked::success(body.split_whitespace().count())
}

#[tokio::main]
async fn main() {
    let words = hit_rest_api("example.com").and_then_async(word_count).await;
    println!("words: {:?}", words.ok());

    let fallback = hit_rest_api("")
        .or_else_async(|e| async move {
            println!("recovering from: {}", e.explain());
            Checked::<&'static str, RestError>::success("cached body")
        })
        .and_then_async(word_count)
        .await;
    println!("fallback words: {:?}", fallback.ok());
}
