//! The failure payload capability.
//!
//! A failure payload is the value carried by [`Checked::Err`](crate::Checked::Err).
//! Any type can serve as one, but types that implement [`FailurePayload`] get a
//! uniform construction path (from a message or from a caught fault) and a
//! one-line explanation conventionally prefixed with a category label.
//!
//! # Examples
//!
//! ```
//! use checked_rail::payload::{Explanation, FailurePayload, FailureSource};
//!
//! struct JsonParseError {
//!     source: FailureSource,
//! }
//!
//! impl FailurePayload for JsonParseError {
//!     fn from_source(source: FailureSource) -> Self {
//!         Self { source }
//!     }
//!
//!     fn explain(&self) -> Explanation {
//!         self.source.explain_as("Json Parse Error")
//!     }
//! }
//!
//! let err = JsonParseError::from_message("unexpected end of input");
//! assert_eq!(err.explain(), "Json Parse Error: unexpected end of input");
//! ```

mod source;

pub use source::FailureSource;

use crate::alloc_type::{Cow, String};

/// Owned explanation text returned by [`FailurePayload::explain`].
pub type Explanation = String;

/// Capability every explainable failure payload provides.
///
/// The two required methods have no default implementation, so a payload
/// type has to opt in explicitly.
///
/// Most payload types are declared with [`failure_payload!`](crate::failure_payload),
/// which implements this trait together with `Display` and `Error`.
pub trait FailurePayload: Sized {
    /// Builds the payload from a message or a caught fault.
    ///
    /// This never fails: every [`FailureSource`] shape is accepted.
    fn from_source(source: FailureSource) -> Self;

    /// Renders a one-line, human-readable explanation.
    ///
    /// Conventionally formatted as `"<Category>: <detail>"`.
    fn explain(&self) -> Explanation;

    /// Builds the payload from a descriptive message.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::{failure_payload, FailurePayload};
    ///
    /// failure_payload! {
    ///     pub struct RestError => "Rest Client Error";
    /// }
    ///
    /// let err = RestError::from_message("connection refused");
    /// assert_eq!(err.explain(), "Rest Client Error: connection refused");
    /// ```
    #[inline]
    fn from_message<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::from_source(FailureSource::message(message))
    }

    /// Builds the payload from a caught native fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::{failure_payload, FailurePayload};
    ///
    /// failure_payload! {
    ///     pub struct JsonParseError => "Json Parse Error";
    /// }
    ///
    /// let fault = "x1".parse::<u8>().unwrap_err();
    /// let err = JsonParseError::from_fault(fault);
    /// assert_eq!(err.explain(), "Json Parse Error: invalid digit found in string");
    /// ```
    #[inline]
    fn from_fault<F>(fault: F) -> Self
    where
        F: core::error::Error + Send + Sync + 'static,
    {
        Self::from_source(FailureSource::fault(fault))
    }
}
