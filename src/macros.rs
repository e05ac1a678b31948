//! Macros for declaring [`FailurePayload`](crate::FailurePayload) types.
//!
//! - [`macro@crate::failure_payload`] - Declares a payload struct tagged with a
//!   category label, implementing `FailurePayload`, `Display`, `Debug` and
//!   `core::error::Error` in one go.
//!
//! # Examples
//!
//! ```
//! use checked_rail::{failure_payload, Checked, FailurePayload};
//!
//! failure_payload! {
//!     /// Transport-level failure.
//!     pub struct RestError => "Rest Client Error";
//!
//!     /// Decoding failure.
//!     pub struct JsonParseError => "Json Parse Error";
//! }
//!
//! let fetched: Checked<String, RestError> = Checked::failure("timeout".into());
//! let decoded = fetched.map_err(|e| JsonParseError::from_message(e.explain()));
//!
//! assert_eq!(
//!     decoded.explain_err().as_deref(),
//!     Some("Json Parse Error: Rest Client Error: timeout")
//! );
//! ```

/// Declares one or more failure payload types.
///
/// Each declaration produces a struct wrapping a
/// [`FailureSource`](crate::FailureSource) and implements:
///
/// - [`FailurePayload`](crate::FailurePayload), with `explain()` rendering
///   `"<Category>: <detail>"`
/// - `Display` (same text as `explain()`) and `Debug`
/// - `core::error::Error`, exposing a wrapped fault through `source()`
/// - `From<&'static str>`, `From<String>` and `From<FailureSource>`, all
///   treated as the payload's source
///
/// The category label is also available as the associated constant `CATEGORY`.
///
/// # Syntax
///
/// ```text
/// failure_payload! {
///     $(#[attr])* $vis struct $Name => "Category Label";
///     ...
/// }
/// ```
///
/// # Examples
///
/// ```
/// use checked_rail::{failure_payload, FailurePayload};
///
/// failure_payload! {
///     pub struct StorageError => "Storage Error";
/// }
///
/// let err = StorageError::from("disk full");
/// assert_eq!(StorageError::CATEGORY, "Storage Error");
/// assert_eq!(err.to_string(), "Storage Error: disk full");
/// assert_eq!(err.explain(), err.to_string());
/// ```
#[macro_export]
macro_rules! failure_payload {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident => $category:literal;)+) => {
        $(
            $(#[$meta])*
            $vis struct $name {
                source: $crate::FailureSource,
            }

            impl $name {
                /// Category label prefixed to every explanation.
                pub const CATEGORY: &'static str = $category;

                /// Borrows the source this payload was built from.
                #[allow(dead_code)]
                pub fn failure_source(&self) -> &$crate::FailureSource {
                    &self.source
                }
            }

            impl $crate::FailurePayload for $name {
                #[inline]
                fn from_source(source: $crate::FailureSource) -> Self {
                    Self { source }
                }

                fn explain(&self) -> $crate::payload::Explanation {
                    self.source.explain_as(Self::CATEGORY)
                }
            }

            impl ::core::fmt::Display for $name {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::write!(f, "{}: {}", Self::CATEGORY, self.source)
                }
            }

            impl ::core::fmt::Debug for $name {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.debug_struct(::core::stringify!($name))
                        .field("category", &Self::CATEGORY)
                        .field("source", &self.source)
                        .finish()
                }
            }

            impl ::core::error::Error for $name {
                fn source(&self) -> ::core::option::Option<&(dyn ::core::error::Error + 'static)> {
                    self.source
                        .as_fault()
                        .map(|fault| fault as &(dyn ::core::error::Error + 'static))
                }
            }

            impl ::core::convert::From<$crate::FailureSource> for $name {
                #[inline]
                fn from(source: $crate::FailureSource) -> Self {
                    Self { source }
                }
            }

            impl ::core::convert::From<&'static str> for $name {
                #[inline]
                fn from(message: &'static str) -> Self {
                    Self { source: $crate::FailureSource::from(message) }
                }
            }

            impl ::core::convert::From<$crate::payload::Explanation> for $name {
                #[inline]
                fn from(message: $crate::payload::Explanation) -> Self {
                    Self { source: $crate::FailureSource::from(message) }
                }
            }
        )+
    };
}
