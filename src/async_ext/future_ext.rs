//! Extension trait for `Future<Output = Checked<T, E>>`.

use core::future::Future;

use crate::checked::Checked;

use super::combinators::{AndThenAsync, OrElseAsync};

/// Chaining methods for futures that resolve to a [`Checked`].
///
/// The continuation is never called on the short-circuit side, so no future
/// is created for it and nothing is polled.
///
/// # Examples
///
/// ```rust
/// use checked_rail::prelude::*;
///
/// async fn square(x: u32) -> Checked<u32, u32> {
///     Checked::success(x * x)
/// }
///
/// async fn example() {
///     let out = async { Checked::<u32, u32>::success(2) }
///         .and_then_async(square)
///         .and_then_async(square)
///         .await;
///     assert_eq!(out, Checked::Ok(16));
/// }
/// ```
pub trait FutureCheckedExt<T, E>: Future<Output = Checked<T, E>> + Sized {
    /// Awaits `self`, then on `Ok(t)` awaits `f(t)`.
    ///
    /// On `Err(e)` the output is `Err(e)` and `f` is dropped uncalled.
    ///
    /// # Arguments
    ///
    /// * `f` - Builds the next fallible step from the success value
    fn and_then_async<U, F, Fut>(self, f: F) -> AndThenAsync<Self, Fut, F>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Checked<U, E>>;

    /// Awaits `self`, then on `Err(e)` awaits `f(e)`.
    ///
    /// On `Ok(t)` the output is `Ok(t)` and `f` is dropped uncalled.
    ///
    /// # Arguments
    ///
    /// * `f` - Builds the recovery step from the failure value
    fn or_else_async<O, F, Fut>(self, f: F) -> OrElseAsync<Self, Fut, F>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Checked<T, O>>;
}

impl<Src, T, E> FutureCheckedExt<T, E> for Src
where
    Src: Future<Output = Checked<T, E>>,
{
    #[inline]
    fn and_then_async<U, F, Fut>(self, f: F) -> AndThenAsync<Self, Fut, F>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Checked<U, E>>,
    {
        AndThenAsync::new(self, f)
    }

    #[inline]
    fn or_else_async<O, F, Fut>(self, f: F) -> OrElseAsync<Self, Fut, F>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Checked<T, O>>,
    {
        OrElseAsync::new(self, f)
    }
}
