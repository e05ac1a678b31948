//! Tests for FutureCheckedExt.

use checked_rail::async_ext::{AndThenAsync, OrElseAsync};
use checked_rail::prelude::*;
use futures_core::future::FusedFuture;
use std::future::{ready, Future, Ready};
use std::pin::pin;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};

async fn sq(x: i64) -> Checked<i64, i64> {
    tokio::task::yield_now().await;
    Checked::success(x * x)
}

async fn err(x: i64) -> Checked<i64, i64> {
    Checked::failure(x)
}

struct NoopWake;

impl Wake for NoopWake {
    fn wake(self: Arc<Self>) {}
}

fn noop_waker() -> Waker {
    Waker::from(Arc::new(NoopWake))
}

fn start(value: Checked<i64, i64>) -> Ready<Checked<i64, i64>> {
    ready(value)
}

#[test]
fn combinator_futures_are_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    type Src = Ready<Checked<i32, ()>>;
    type Next = Ready<Checked<i32, i32>>;

    assert_send::<AndThenAsync<Src, Src, fn(i32) -> Src>>();
    assert_sync::<AndThenAsync<Src, Src, fn(i32) -> Src>>();
    assert_send::<OrElseAsync<Src, Next, fn(()) -> Next>>();
    assert_sync::<OrElseAsync<Src, Next, fn(()) -> Next>>();
}

#[tokio::test]
async fn and_then_async_short_circuits_on_first_err() {
    let ok = || start(Checked::success(2));

    assert_eq!(ok().and_then_async(sq).and_then_async(sq).await, Checked::Ok(16));
    assert_eq!(ok().and_then_async(sq).and_then_async(err).await, Checked::Err(4));
    assert_eq!(ok().and_then_async(err).and_then_async(sq).await, Checked::Err(2));

    let failed = start(Checked::failure(3)).and_then_async(sq).and_then_async(sq);
    assert_eq!(failed.await, Checked::Err(3));
}

#[tokio::test]
async fn or_else_async_short_circuits_on_first_ok() {
    let failed = || start(Checked::failure(3));

    let ok = start(Checked::success(2)).or_else_async(sq).or_else_async(sq);
    assert_eq!(ok.await, Checked::Ok(2));
    assert_eq!(failed().or_else_async(sq).or_else_async(err).await, Checked::Ok(9));
    assert_eq!(failed().or_else_async(err).or_else_async(err).await, Checked::Err(3));
}

#[tokio::test]
async fn continuation_is_not_called_on_short_circuit_side() {
    let calls = AtomicU32::new(0);

    let out = start(Checked::failure(1))
        .and_then_async(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            ready(Checked::success(x))
        })
        .await;
    assert_eq!(out, Checked::Err(1));

    let out = start(Checked::success(1))
        .or_else_async(|e| {
            calls.fetch_add(1, Ordering::SeqCst);
            ready(Checked::<i64, i64>::failure(e))
        })
        .await;
    assert_eq!(out, Checked::Ok(1));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn error_type_changes_through_or_else_async() {
    let out: Checked<i64, String> = start(Checked::failure(7))
        .or_else_async(|code| async move { Checked::failure(format!("E{code}")) })
        .await;
    assert_eq!(out, Checked::Err("E7".to_string()));
}

#[test]
fn terminated_after_ready() {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    let mut fut =
        pin!(start(Checked::success(3)).and_then_async(|x| ready(Checked::success(x + 1))));
    assert!(!fut.is_terminated());
    assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(Checked::Ok(4)));
    assert!(fut.is_terminated());

    let mut fut =
        pin!(start(Checked::success(3)).or_else_async(|e| ready(Checked::<i64, i64>::failure(e))));
    assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(Checked::Ok(3)));
    assert!(fut.is_terminated());
}

#[test]
#[should_panic(expected = "`AndThenAsync` polled after completion")]
fn polling_after_completion_panics() {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    let mut fut =
        pin!(start(Checked::failure(3)).and_then_async(|x| ready(Checked::<i64, i64>::success(x))));
    assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(Checked::Err(3)));
    let _ = fut.as_mut().poll(&mut cx);
}
