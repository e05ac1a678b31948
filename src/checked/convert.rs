//! Lossless conversions between [`Checked`] and `core::result::Result`.
//!
//! # Examples
//!
//! ```
//! use checked_rail::Checked;
//!
//! let checked: Checked<i32, &str> = Ok(5).into();
//! assert_eq!(checked, Checked::Ok(5));
//!
//! let back: Result<i32, &str> = Checked::failure("e").into();
//! assert_eq!(back, Err("e"));
//! ```

use crate::checked::Checked;

impl<T, E> From<Result<T, E>> for Checked<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Checked::Ok(value),
            Err(error) => Checked::Err(error),
        }
    }
}

impl<T, E> From<Checked<T, E>> for Result<T, E> {
    #[inline]
    fn from(checked: Checked<T, E>) -> Self {
        checked.into_result()
    }
}

impl<T, E> Checked<T, E> {
    /// Converts into a standard `Result`, e.g. to use the `?` operator at an
    /// API boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_rail::Checked;
    ///
    /// fn parse(input: &str) -> Result<u8, String> {
    ///     let n = Checked::from(input.parse::<u8>())
    ///         .map_err(|e| e.to_string())
    ///         .into_result()?;
    ///     Ok(n + 1)
    /// }
    ///
    /// assert_eq!(parse("1"), Ok(2));
    /// assert!(parse("x").is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}
