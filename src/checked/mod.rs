//! The [`Checked`] container.
//!
//! `Checked<T, E>` is a closed sum of exactly two variants: `Ok(T)` for a
//! successful computation and `Err(E)` for a failed one. Every combinator
//! consumes the receiver and returns a new value; nothing mutates a
//! `Checked` in place.
//!
//! # Examples
//!
//! ```
//! use checked_rail::Checked;
//!
//! let parsed: Checked<i32, String> = Checked::success("42")
//!     .and_then(|s: &str| match s.parse::<i32>() {
//!         Ok(n) => Checked::success(n),
//!         Err(e) => Checked::failure(e.to_string()),
//!     })
//!     .map(|n| n * 2);
//!
//! assert_eq!(parsed.unwrap_or(0), 84);
//! ```

mod convert;
mod iter;

pub use self::iter::{IntoIter, Iter};

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::alloc_type::String;
use crate::carrier::{Failure, Success};
use crate::payload::FailurePayload;

/// Either a success value `T` or a failure value `E`, never both and never
/// neither.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure value type, usually a [`FailurePayload`]
///
/// # Variants
///
/// * `Ok(T)` - Contains a success value
/// * `Err(E)` - Contains a failure value
///
/// # Examples
///
/// ```
/// use checked_rail::Checked;
///
/// let ok = Checked::<i32, &str>::success(1);
/// assert!(ok.is_ok());
///
/// let err = Checked::<i32, &str>::failure("bad");
/// assert!(err.is_err());
/// ```
#[must_use = "this `Checked` may be an `Err` variant, which should be handled"]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Checked<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Checked<T, E> {
    /// Creates an `Ok` value. Shorthand for `Checked::from(Success::new(value))`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates an `Err` value. Shorthand for `Checked::from(Failure::new(error))`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// assert!(Checked::<i32, ()>::success(3).is_ok());
    /// assert!(!Checked::<i32, ()>::failure(()).is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    ///
    /// Always equal to `!self.is_ok()`.
    #[must_use]
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Converts into `Option<T>`, discarding any failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// assert_eq!(Checked::<i32, &str>::success(2).ok(), Some(2));
    /// assert_eq!(Checked::<i32, &str>::failure("x").ok(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts into `Option<E>`, discarding any success.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// assert_eq!(Checked::<i32, &str>::success(2).err(), None);
    /// assert_eq!(Checked::<i32, &str>::failure("x").err(), Some("x"));
    /// ```
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Borrows the contents as `Checked<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Checked<&T, &E> {
        match self {
            Self::Ok(value) => Checked::Ok(value),
            Self::Err(error) => Checked::Err(error),
        }
    }

    /// Mutably borrows the contents as `Checked<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Checked<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Checked::Ok(value),
            Self::Err(error) => Checked::Err(error),
        }
    }

    /// Splits into the matching carrier.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// let carrier = Checked::<i32, &str>::failure("x").into_carrier();
    /// assert_eq!(carrier.unwrap_err().into_inner(), "x");
    /// ```
    #[inline]
    pub fn into_carrier(self) -> Result<Success<T>, Failure<E>> {
        match self {
            Self::Ok(value) => Ok(Success::new(value)),
            Self::Err(error) => Err(Failure::new(error)),
        }
    }

    /// Returns the success value, panicking with a custom message on `Err`.
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Err`, with `msg` followed by the failure's
    /// `Debug` rendering.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use checked_rail::Checked;
    ///
    /// let x: Checked<u32, &str> = Checked::failure("emergency failure");
    /// x.expect("testing expect"); // panics with `testing expect: "emergency failure"`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => unwrap_failed(msg, &error),
        }
    }

    /// Returns the success value.
    ///
    /// Prefer [`unwrap_or`](Self::unwrap_or), [`unwrap_or_else`](Self::unwrap_or_else)
    /// or an explicit `match` when failure is a real possibility.
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Err`, with a message containing the
    /// failure's `Debug` rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// assert_eq!(Checked::<u32, &str>::success(2).unwrap(), 2);
    /// ```
    ///
    /// ```should_panic
    /// use checked_rail::Checked;
    ///
    /// Checked::<u32, &str>::failure("boom").unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                unwrap_failed("called `Checked::unwrap()` on an `Err` value", &error)
            },
        }
    }

    /// Returns the failure value, panicking with a custom message on `Ok`.
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Ok`, with `msg` followed by the success
    /// value's `Debug` rendering.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => unwrap_failed(msg, &value),
            Self::Err(error) => error,
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// assert_eq!(Checked::<u32, &str>::failure("x").unwrap_err(), "x");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => {
                unwrap_failed("called `Checked::unwrap_err()` on an `Ok` value", &value)
            },
            Self::Err(error) => error,
        }
    }

    /// Returns the success value or `default`.
    ///
    /// `default` is evaluated eagerly; use [`unwrap_or_else`](Self::unwrap_or_else)
    /// when it is expensive to build.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// assert_eq!(Checked::<u32, &str>::success(9).unwrap_or(2), 9);
    /// assert_eq!(Checked::<u32, &str>::failure("e").unwrap_or(2), 2);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the failure.
    ///
    /// # Arguments
    ///
    /// * `f` - Called with the failure value only when this is an `Err`
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// let len = Checked::<usize, &str>::failure("four").unwrap_or_else(|e| e.len());
    /// assert_eq!(len, 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Maps the success value, carrying a failure through unchanged.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `T` to type `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// let doubled = Checked::<i32, &str>::success(21).map(|x| x * 2);
    /// assert_eq!(doubled, Checked::Ok(42));
    ///
    /// let untouched = Checked::<i32, &str>::failure("e").map(|x| x * 2);
    /// assert_eq!(untouched, Checked::Err("e"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Checked<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Checked::Ok(f(value)),
            Self::Err(error) => Checked::Err(error),
        }
    }

    /// Maps the failure value, carrying a success through unchanged.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the failure value from type `E` to type `O`
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// let coded = Checked::<i32, i32>::failure(13).map_err(|x| format!("code:{x}"));
    /// assert_eq!(coded, Checked::Err("code:13".to_string()));
    /// ```
    #[inline]
    pub fn map_err<O, F>(self, f: F) -> Checked<T, O>
    where
        F: FnOnce(E) -> O,
    {
        match self {
            Self::Ok(value) => Checked::Ok(value),
            Self::Err(error) => Checked::Err(f(error)),
        }
    }

    /// Runs `f` on the success value and returns its output.
    ///
    /// `f` is called at most once, and never for an `Err`. The output is
    /// returned as `Some`; callers interested only in the side effect can
    /// discard it.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// let mut seen = Vec::new();
    /// let out = Checked::<i32, &str>::success(5).if_ok(|x| {
    ///     seen.push(x);
    ///     x + 1
    /// });
    ///
    /// assert_eq!(out, Some(6));
    /// assert_eq!(seen, vec![5]);
    /// ```
    #[inline]
    pub fn if_ok<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Some(f(value)),
            Self::Err(_) => None,
        }
    }

    /// Runs `f` on the failure value and returns its output.
    ///
    /// The dual of [`if_ok`](Self::if_ok): `f` is never called for an `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// let logged = Checked::<i32, &str>::failure("disk full").if_err(|e| e.len());
    /// assert_eq!(logged, Some(9));
    ///
    /// let skipped = Checked::<i32, &str>::success(1).if_err(|e| e.len());
    /// assert_eq!(skipped, None);
    /// ```
    #[inline]
    pub fn if_err<O, F>(self, f: F) -> Option<O>
    where
        F: FnOnce(E) -> O,
    {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(f(error)),
        }
    }

    /// Chains a fallible step onto a success value.
    ///
    /// On `Ok`, the result is whatever `f` returns. On `Err`, `f` is not
    /// called and the failure is carried through, so a chain of `and_then`
    /// stops at its first `Err`.
    ///
    /// # Arguments
    ///
    /// * `f` - The next fallible step
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// fn halve(x: u32) -> Checked<u32, &'static str> {
    ///     if x % 2 == 0 {
    ///         Checked::success(x / 2)
    ///     } else {
    ///         Checked::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Checked::success(8).and_then(halve).and_then(halve), Checked::Ok(2));
    /// assert_eq!(Checked::success(6).and_then(halve).and_then(halve), Checked::Err("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Checked<U, E>
    where
        F: FnOnce(T) -> Checked<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Checked::Err(error),
        }
    }

    /// Chains a recovery step onto a failure value.
    ///
    /// On `Err`, the result is whatever `f` returns. On `Ok`, `f` is not
    /// called and the success is carried through, so a chain of `or_else`
    /// stops at its first `Ok`.
    ///
    /// # Arguments
    ///
    /// * `f` - The recovery step, which may itself fail with a new type `O`
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// let recovered: Checked<i32, ()> =
    ///     Checked::<i32, &str>::failure("missing").or_else(|_| Checked::success(0));
    /// assert_eq!(recovered, Checked::Ok(0));
    /// ```
    #[inline]
    pub fn or_else<O, F>(self, f: F) -> Checked<T, O>
    where
        F: FnOnce(E) -> Checked<T, O>,
    {
        match self {
            Self::Ok(value) => Checked::Ok(value),
            Self::Err(error) => f(error),
        }
    }
}

impl<T, E: FailurePayload> Checked<T, E> {
    /// Returns the failure's explanation, if this is an `Err`.
    #[must_use]
    pub fn explain_err(&self) -> Option<String> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error.explain()),
        }
    }

    /// Returns the success value, panicking with the failure's explanation.
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Err`.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use checked_rail::{failure_payload, Checked};
    ///
    /// failure_payload! {
    ///     pub struct RestError => "Rest Client Error";
    /// }
    ///
    /// // panics with `Rest Client Error: 503`
    /// Checked::<(), RestError>::failure(RestError::from("503")).unwrap_explained();
    /// ```
    #[track_caller]
    pub fn unwrap_explained(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => explained_failed(&error.explain()),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_failed(msg: &str, value: &dyn fmt::Debug) -> ! {
    panic!("{msg}: {value:?}")
}

#[cold]
#[inline(never)]
#[track_caller]
fn explained_failed(explanation: &str) -> ! {
    panic!("{explanation}")
}
