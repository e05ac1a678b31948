//! Futures returned by [`FutureCheckedExt`](super::FutureCheckedExt).

use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::checked::Checked;

pin_project! {
    /// Future for [`FutureCheckedExt::and_then_async`](super::FutureCheckedExt::and_then_async).
    ///
    /// # Panics
    ///
    /// Polling again after it returned `Poll::Ready` panics.
    #[must_use = "futures do nothing unless polled"]
    pub struct AndThenAsync<Src, Fut, F> {
        #[pin]
        source: Src,
        #[pin]
        next: Option<Fut>,
        f: Option<F>,
    }
}

impl<Src, Fut, F> AndThenAsync<Src, Fut, F> {
    #[inline]
    pub(crate) fn new(source: Src, f: F) -> Self {
        Self { source, next: None, f: Some(f) }
    }
}

impl<Src, Fut, F, T, U, E> Future for AndThenAsync<Src, Fut, F>
where
    Src: Future<Output = Checked<T, E>>,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Checked<U, E>>,
{
    type Output = Checked<U, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            if let Some(next) = this.next.as_mut().as_pin_mut() {
                let output = ready!(next.poll(cx));
                this.next.set(None);
                return Poll::Ready(output);
            }

            assert!(this.f.is_some(), "`AndThenAsync` polled after completion");

            match ready!(this.source.as_mut().poll(cx)) {
                Checked::Ok(value) => {
                    let f = this.f.take().expect("continuation present until source completes");
                    this.next.set(Some(f(value)));
                },
                Checked::Err(error) => {
                    this.f.take();
                    return Poll::Ready(Checked::Err(error));
                },
            }
        }
    }
}

impl<Src, Fut, F, T, U, E> FusedFuture for AndThenAsync<Src, Fut, F>
where
    Src: Future<Output = Checked<T, E>>,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Checked<U, E>>,
{
    fn is_terminated(&self) -> bool {
        self.f.is_none() && self.next.is_none()
    }
}

pin_project! {
    /// Future for [`FutureCheckedExt::or_else_async`](super::FutureCheckedExt::or_else_async).
    ///
    /// # Panics
    ///
    /// Polling again after it returned `Poll::Ready` panics.
    #[must_use = "futures do nothing unless polled"]
    pub struct OrElseAsync<Src, Fut, F> {
        #[pin]
        source: Src,
        #[pin]
        next: Option<Fut>,
        f: Option<F>,
    }
}

impl<Src, Fut, F> OrElseAsync<Src, Fut, F> {
    #[inline]
    pub(crate) fn new(source: Src, f: F) -> Self {
        Self { source, next: None, f: Some(f) }
    }
}

impl<Src, Fut, F, T, E, O> Future for OrElseAsync<Src, Fut, F>
where
    Src: Future<Output = Checked<T, E>>,
    F: FnOnce(E) -> Fut,
    Fut: Future<Output = Checked<T, O>>,
{
    type Output = Checked<T, O>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            if let Some(next) = this.next.as_mut().as_pin_mut() {
                let output = ready!(next.poll(cx));
                this.next.set(None);
                return Poll::Ready(output);
            }

            assert!(this.f.is_some(), "`OrElseAsync` polled after completion");

            match ready!(this.source.as_mut().poll(cx)) {
                Checked::Ok(value) => {
                    this.f.take();
                    return Poll::Ready(Checked::Ok(value));
                },
                Checked::Err(error) => {
                    let f = this.f.take().expect("continuation present until source completes");
                    this.next.set(Some(f(error)));
                },
            }
        }
    }
}

impl<Src, Fut, F, T, E, O> FusedFuture for OrElseAsync<Src, Fut, F>
where
    Src: Future<Output = Checked<T, E>>,
    F: FnOnce(E) -> Fut,
    Fut: Future<Output = Checked<T, O>>,
{
    fn is_terminated(&self) -> bool {
        self.f.is_none() && self.next.is_none()
    }
}
