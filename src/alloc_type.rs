//! Owned types used by payloads, taken from `std` or `alloc`.

#[cfg(not(feature = "std"))]
pub use alloc::{borrow::Cow, boxed::Box, format, string::String};
#[cfg(feature = "std")]
pub use std::{borrow::Cow, boxed::Box, format, string::String};
