//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use checked_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`failure_payload!`]
//! - **Types**: [`Checked`], [`Success`], [`Failure`], [`FailureSource`]
//! - **Traits**: [`FailurePayload`], [`ResultExt`]
//! - **Functions**: [`attempt`]
//! - **Async** (feature `async`): [`FutureCheckedExt`](crate::async_ext::FutureCheckedExt)
//! - **Tracing** (feature `tracing`): [`TraceFailure`](crate::tracing_ext::TraceFailure)
//!
//! # Examples
//!
//! ```
//! use checked_rail::prelude::*;
//!
//! failure_payload! {
//!     pub struct LookupError => "Lookup Error";
//! }
//!
//! fn find(id: u32) -> Checked<&'static str, LookupError> {
//!     match id {
//!         1 => Checked::success("alice"),
//!         _ => Checked::failure(LookupError::from_message(format!("no user {id}"))),
//!     }
//! }
//!
//! assert_eq!(find(1).unwrap_or("nobody"), "alice");
//! assert_eq!(find(2).explain_err().as_deref(), Some("Lookup Error: no user 2"));
//! ```

pub use crate::failure_payload;

pub use crate::carrier::{Failure, Success};
pub use crate::checked::Checked;
pub use crate::payload::{FailurePayload, FailureSource};
pub use crate::traits::{attempt, ResultExt};

#[cfg(feature = "async")]
pub use crate::async_ext::FutureCheckedExt;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TraceFailure;
