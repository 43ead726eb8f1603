//! Timed races, driven by tokio's paused clock so the timings are exact.

use race_any::prelude::*;
use race_any::{race_any, Outcome};
use std::future::{self, Future};
use std::pin::Pin;
use tokio::time::{sleep, timeout, Duration, Instant};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

fn reject_after<T: Send + 'static>(
    millis: u64,
    reason: &'static str,
) -> BoxFuture<'static, Result<T, &'static str>> {
    Box::pin(async move {
        sleep(Duration::from_millis(millis)).await;
        Err(reason)
    })
}

fn fulfil_after<T: Send + 'static>(
    millis: u64,
    value: T,
) -> BoxFuture<'static, Result<T, &'static str>> {
    Box::pin(async move {
        sleep(Duration::from_millis(millis)).await;
        Ok(value)
    })
}

#[tokio::test(start_paused = true)]
async fn all_rejected_keeps_input_order() {
    let start = Instant::now();
    let outcome = vec![reject_after::<()>(500, "first"), reject_after(100, "second")]
        .race_any()
        .unwrap()
        .await;
    assert!(start.elapsed() >= Duration::from_millis(500));
    assert_eq!(outcome.failure().unwrap().into_inner(), ["first", "second"]);
}

#[tokio::test(start_paused = true)]
async fn waits_for_slow_success() {
    let start = Instant::now();
    let outcome = vec![fulfil_after(500, "A"), reject_after(100, "second")]
        .race_any()
        .unwrap()
        .await;
    assert!(start.elapsed() >= Duration::from_millis(500));
    assert_eq!(outcome, Outcome::Success { value: "A", index: 0 });
}

#[tokio::test(start_paused = true)]
async fn immediate_success_ignores_pending() {
    let start = Instant::now();
    let futures: Vec<BoxFuture<'static, Result<&str, &str>>> = vec![
        Box::pin(future::pending::<Result<&str, &str>>()),
        Box::pin(future::ready(Ok::<_, &str>("fast"))),
        Box::pin(future::pending::<Result<&str, &str>>()),
    ];
    let outcome = futures.race_any().unwrap().await;
    assert!(start.elapsed() < Duration::from_millis(1));
    assert_eq!(outcome, Outcome::Success { value: "fast", index: 1 });
}

#[tokio::test(start_paused = true)]
async fn earliest_success_wins() {
    let start = Instant::now();
    let outcome = [
        fulfil_after(300, "slow"),
        fulfil_after(100, "fast"),
        reject_after(50, "broken"),
    ]
    .race_any()
    .unwrap()
    .await;
    assert!(start.elapsed() >= Duration::from_millis(100));
    assert!(start.elapsed() < Duration::from_millis(300));
    assert_eq!(outcome, Outcome::Success { value: "fast", index: 1 });
}

#[tokio::test(start_paused = true)]
async fn tuple_of_different_futures() {
    let a = async {
        sleep(Duration::from_millis(200)).await;
        Err::<u32, _>("a")
    };
    let b = async {
        sleep(Duration::from_millis(100)).await;
        Err("b")
    };
    let c = fulfil_after(300, 3u32);
    let outcome = (a, b, c).race_any().unwrap().await;
    assert_eq!(outcome.into_indexed_result(), Ok((2, 3)));
}

#[tokio::test(start_paused = true)]
async fn from_iterator() {
    let futures = (0..5u64).map(|n| async move {
        sleep(Duration::from_millis(100 * (5 - n))).await;
        if n % 2 == 0 {
            Ok(n)
        } else {
            Err(n)
        }
    });
    let outcome = race_any(futures).unwrap().await;
    assert_eq!(outcome, Outcome::Success { value: 4, index: 4 });
}

#[tokio::test(start_paused = true)]
async fn deadline_joins_the_failures() {
    let start = Instant::now();
    let outcome = vec![
        reject_after::<()>(100, "a"),
        reject_after(200, "b"),
        reject_after(1000, "deadline elapsed"),
    ]
    .race_any()
    .unwrap()
    .await;
    assert!(start.elapsed() >= Duration::from_millis(1000));
    let errors = outcome.failure().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[2], "deadline elapsed");
}

#[tokio::test(start_paused = true)]
async fn deadline_does_not_rescue_a_pending_future() {
    let futures: Vec<BoxFuture<'static, Result<(), &str>>> = vec![
        Box::pin(future::pending::<Result<(), &str>>()),
        reject_after(100, "deadline elapsed"),
    ];
    let race = futures.race_any().unwrap();
    assert!(timeout(Duration::from_secs(60), race).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn deadline_loses_to_success() {
    let outcome = fulfil_after(100, "in time")
        .race_any_with(reject_after(1000, "deadline elapsed"))
        .await;
    assert_eq!(outcome.into_result(), Ok("in time"));
}
