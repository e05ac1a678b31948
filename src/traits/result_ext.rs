//! Extension trait for moving standard `Result` values onto the checked rail.

use crate::checked::Checked;
use crate::payload::{FailurePayload, FailureSource};

/// Extension methods on `Result<T, X>`.
///
/// # Examples
///
/// ## Keeping the Error Type
///
/// ```
/// use checked_rail::traits::ResultExt;
/// use checked_rail::Checked;
///
/// let checked = Err::<i32, &str>("nope").into_checked();
/// assert_eq!(checked, Checked::Err("nope"));
/// ```
///
/// ## Wrapping a Fault into a Payload
///
/// ```
/// use checked_rail::traits::ResultExt;
/// use checked_rail::{failure_payload, Checked};
///
/// failure_payload! {
///     pub struct JsonParseError => "Json Parse Error";
/// }
///
/// let n: Checked<i64, JsonParseError> = "12".parse::<i64>().checked_as();
/// assert_eq!(n.ok(), Some(12));
/// ```
pub trait ResultExt<T, X> {
    /// Converts into a [`Checked`] with the same error type.
    fn into_checked(self) -> Checked<T, X>;

    /// Converts into a [`Checked`], wrapping the error as a caught fault of
    /// payload type `P`.
    ///
    /// The original error stays reachable through
    /// [`FailureSource::as_fault`].
    fn checked_as<P>(self) -> Checked<T, P>
    where
        P: FailurePayload,
        X: core::error::Error + Send + Sync + 'static;
}

impl<T, X> ResultExt<T, X> for Result<T, X> {
    #[inline]
    fn into_checked(self) -> Checked<T, X> {
        Checked::from(self)
    }

    #[inline]
    fn checked_as<P>(self) -> Checked<T, P>
    where
        P: FailurePayload,
        X: core::error::Error + Send + Sync + 'static,
    {
        match self {
            Ok(value) => Checked::Ok(value),
            Err(fault) => Checked::Err(P::from_source(FailureSource::fault(fault))),
        }
    }
}

/// Runs a fallible closure, wrapping a returned fault into payload `P`.
///
/// # Arguments
///
/// * `f` - The fallible operation
///
/// # Examples
///
/// ```
/// use checked_rail::{attempt, failure_payload, Checked};
///
/// failure_payload! {
///     pub struct RestError => "Rest Client Error";
/// }
///
/// let status: Checked<u16, RestError> = attempt(|| "70000".parse::<u16>());
/// assert_eq!(
///     status.explain_err().as_deref(),
///     Some("Rest Client Error: number too large to fit in target type")
/// );
/// ```
#[inline]
pub fn attempt<P, T, X, F>(f: F) -> Checked<T, P>
where
    P: FailurePayload,
    X: core::error::Error + Send + Sync + 'static,
    F: FnOnce() -> Result<T, X>,
{
    f().checked_as()
}
