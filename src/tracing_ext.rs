//! Tracing integration for checked-rail.
//!
//! Emits structured `tracing` events for the outcome of a fallible step
//! without changing the value flowing through the chain.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! checked-rail = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use checked_rail::prelude::*;
//!
//! failure_payload! {
//!     pub struct RestError => "Rest Client Error";
//! }
//!
//! let fetched: Checked<&str, RestError> =
//!     Checked::failure(RestError::from("timeout")).trace_failure("hit_rest_api");
//! assert!(fetched.is_err());
//! ```

use tracing::{trace, warn, Span};

use crate::checked::Checked;
use crate::payload::FailurePayload;

/// Logs the outcome of a [`Checked`] step through `tracing`.
pub trait TraceFailure: Sized {
    /// Emits a `WARN` event with the failure's explanation on `Err`, and a
    /// `TRACE` event on `Ok`. Returns `self` unchanged.
    ///
    /// # Arguments
    ///
    /// * `operation` - Name of the step, recorded as the `operation` field
    fn trace_failure(self, operation: &str) -> Self;

    /// Like [`trace_failure`](Self::trace_failure), but records the name of
    /// the current span instead of an explicit operation name.
    fn trace_failure_in_span(self) -> Self {
        let span = Span::current();
        let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
        self.trace_failure(name)
    }
}

impl<T, E: FailurePayload> TraceFailure for Checked<T, E> {
    fn trace_failure(self, operation: &str) -> Self {
        match &self {
            Checked::Ok(_) => trace!(operation, "step succeeded"),
            Checked::Err(error) => {
                let reason = error.explain();
                warn!(operation, reason = %reason, "step failed");
            },
        }
        self
    }
}
