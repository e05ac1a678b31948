//! REST Pipeline Example
//!
//! Chains a fake REST call, a JSON-parse stub and a print routine.
//!
//! Run with: `cargo run --example rest_pipeline`

use std::collections::BTreeMap;

use checked_rail::prelude::*;

failure_payload! {
    /// Transport-level failure.
    pub struct RestError => "Rest Client Error";

    /// Decoding failure.
    pub struct JsonParseError => "Json Parse Error";
}

/// Stands in for a network call.
fn hit_rest_api(url: &str) -> Checked<String, RestError> {
    if url.is_empty() {
        return Checked::failure(RestError::from("empty url"));
    }
    Checked::success(String::from("im fine"))
}

/// Stands in for a JSON decoder.
fn parse_json(body: &str) -> Checked<BTreeMap<String, String>, JsonParseError> {
    if body.is_empty() {
        return Checked::failure(JsonParseError::from("unexpected end of input"));
    }
    Checked::success(BTreeMap::from([(String::from("foo"), String::from("bar"))]))
}

fn print_foo(json: BTreeMap<String, String>) {
    println!("{json:?}");
}

fn fetch(url: &str) -> Checked<BTreeMap<String, String>, JsonParseError> {
    hit_rest_api(url)
        .map_err(|e| JsonParseError::from_message(e.explain()))
        .and_then(|body| parse_json(&body))
}

fn main() {
    println!("=== checked-rail REST pipeline ===\n");

    // Happy path: every step succeeds.
    fetch("example.com").if_ok(print_foo);

    // Failing path, reported without unwrapping.
    fetch("").if_err(|e| println!("{}", e.explain()));

    // Failing path with a fallback value.
    let recovered: Checked<_, JsonParseError> = fetch("").or_else(|_| {
        Checked::success(BTreeMap::from([(String::from("foo"), String::from("baz"))]))
    });
    recovered.if_ok(print_foo);

    // Wrapping a native fault.
    let status: Checked<u16, RestError> = attempt(|| "5xx".parse::<u16>());
    println!("status: {}", status.explain_err().unwrap_or_default());
}
