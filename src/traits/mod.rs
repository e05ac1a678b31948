//! Bridges from `core::result::Result` into [`Checked`](crate::Checked).
//!
//! - [`ResultExt`]: `.into_checked()` and `.checked_as::<P>()` on any `Result`
//! - [`attempt`]: runs a fallible closure and wraps its fault into a payload
//!
//! # Examples
//!
//! ```
//! use checked_rail::traits::ResultExt;
//! use checked_rail::{failure_payload, Checked};
//!
//! failure_payload! {
//!     pub struct ConfigError => "Config Error";
//! }
//!
//! let port: Checked<u16, ConfigError> = "80a".parse::<u16>().checked_as();
//! assert_eq!(
//!     port.explain_err().as_deref(),
//!     Some("Config Error: invalid digit found in string")
//! );
//! ```

pub mod result_ext;

pub use result_ext::{attempt, ResultExt};
