//! Immutable holders for a success value or a failure value.
//!
//! A carrier is how a finished computation hands its outcome to a
//! [`Checked`]: wrap the value in [`Success`] or [`Failure`] and convert.
//!
//! # Examples
//!
//! ```
//! use checked_rail::{Checked, Failure, Success};
//!
//! let ok: Checked<u8, &str> = Checked::from(Success::new(7));
//! let err: Checked<u8, &str> = Checked::from(Failure::new("nope"));
//!
//! assert!(ok.is_ok());
//! assert!(err.is_err());
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::checked::Checked;

/// Holds exactly one success value.
///
/// The value can be read but never replaced once the carrier exists.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Success<T>(T);

impl<T> Success<T> {
    /// Wraps a success value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrows the held value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.0
    }

    /// Unwraps the carrier.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Holds exactly one failure value.
///
/// `E` is usually a [`FailurePayload`](crate::FailurePayload), though this is
/// not required.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Failure<E>(E);

impl<E> Failure<E> {
    /// Wraps a failure value.
    #[inline]
    pub const fn new(error: E) -> Self {
        Self(error)
    }

    /// Borrows the held value.
    #[inline]
    pub const fn get(&self) -> &E {
        &self.0
    }

    /// Unwraps the carrier.
    #[inline]
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<T, E> From<Success<T>> for Checked<T, E> {
    #[inline]
    fn from(carrier: Success<T>) -> Self {
        Checked::Ok(carrier.0)
    }
}

impl<T, E> From<Failure<E>> for Checked<T, E> {
    #[inline]
    fn from(carrier: Failure<E>) -> Self {
        Checked::Err(carrier.0)
    }
}
