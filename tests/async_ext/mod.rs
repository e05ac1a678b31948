//! Integration tests for async extensions.

#[cfg(feature = "async")]
mod combinator_tests;
