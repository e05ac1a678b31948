//! Async extensions for checked-rail.
//!
//! Suspend-aware counterparts of [`Checked::and_then`](crate::Checked::and_then)
//! and [`Checked::or_else`](crate::Checked::or_else) for futures resolving to a
//! [`Checked`](crate::Checked). The short-circuit algebra is identical to the
//! sync forms: `and_then_async` stops at the first `Err`, `or_else_async`
//! stops at the first `Ok`.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! checked-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use checked_rail::async_ext::FutureCheckedExt;
//! use checked_rail::Checked;
//!
//! async fn fetch(id: u32) -> Checked<String, &'static str> {
//!     if id == 0 { Checked::failure("no id") } else { Checked::success(format!("user{id}")) }
//! }
//!
//! async fn lookup(id: u32) -> Checked<usize, &'static str> {
//!     fetch(id).and_then_async(|name| async move { Checked::success(name.len()) }).await
//! }
//! ```

mod combinators;
mod future_ext;

pub use combinators::{AndThenAsync, OrElseAsync};
pub use future_ext::FutureCheckedExt;
