//! A disjoint success/failure container with a full combinator surface.
//!
//! [`Checked<T, E>`] holds exactly one of a success value (`Ok`) or a failure
//! value (`Err`). Fallible steps are composed with [`Checked::and_then`] and
//! [`Checked::or_else`], transformed with [`Checked::map`] and
//! [`Checked::map_err`], and terminated by exactly one explicit exit such as
//! [`Checked::unwrap_or`] or [`Checked::if_ok`].
//!
//! Failure values usually implement [`FailurePayload`], which gives them a
//! uniform way to be built from a message or a caught fault and to explain
//! themselves as one line of text.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use checked_rail::Checked;
//!
//! fn sq(x: u32) -> Checked<u32, u32> {
//!     Checked::success(x * x)
//! }
//!
//! fn fail(x: u32) -> Checked<u32, u32> {
//!     Checked::failure(x)
//! }
//!
//! assert_eq!(Checked::success(2).and_then(sq).and_then(sq), Checked::Ok(16));
//! assert_eq!(Checked::success(2).and_then(fail).and_then(sq), Checked::Err(2));
//! assert_eq!(Checked::failure(3).or_else(sq).or_else(fail), Checked::Ok(9));
//! ```
//!
//! ## Explainable Payloads
//!
//! ```
//! use checked_rail::{failure_payload, Checked, FailurePayload};
//!
//! failure_payload! {
//!     /// Transport-level failure.
//!     pub struct RestError => "Rest Client Error";
//! }
//!
//! let result: Checked<String, RestError> = Checked::failure(RestError::from("timeout"));
//! assert_eq!(result.explain_err().as_deref(), Some("Rest Client Error: timeout"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub(crate) mod alloc_type;

/// Immutable success and failure carriers
pub mod carrier;
/// The `Checked` container and its combinators
pub mod checked;
/// Payload declaration macros
pub mod macros;
/// The failure payload capability
pub mod payload;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Bridges from `core::result::Result`
pub mod traits;

/// Suspend-aware chaining (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Structured failure logging (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use carrier::{Failure, Success};
pub use checked::Checked;
pub use payload::{FailurePayload, FailureSource};
pub use traits::{attempt, ResultExt};
