use futures_time::task::sleep;
use futures_time::time::Duration;
use race_any::prelude::*;
use race_any::Outcome;
use tracing_subscriber::filter::LevelFilter;

use std::error::Error;

/// Race two attempts which both fail, then print the aggregated failure.
///
/// Run with `--features tracing` to also see the events emitted while racing.
#[async_std::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .init();

    let first = async {
        sleep(Duration::from_millis(500)).await;
        Err::<(), _>("first")
    };
    let second = async {
        sleep(Duration::from_millis(100)).await;
        Err::<(), _>("second")
    };

    match (first, second).race_any()?.await {
        Outcome::Success { value, index } => println!("future {index} succeeded: {value:?}"),
        // Prints `["first", "second"]`: input order, not the order of failure.
        Outcome::AllFailed(errors) => println!("{errors}: {errors:?}"),
    }

    // The same race, with a deadline that a third attempt beats.
    let slow = async {
        sleep(Duration::from_secs(10)).await;
        Ok::<_, &str>("slow")
    };
    let fast = async {
        sleep(Duration::from_millis(50)).await;
        Ok("fast")
    };
    let deadline = async {
        sleep(Duration::from_secs(1)).await;
        Err("deadline elapsed")
    };
    let outcome = (slow, fast, deadline).race_any()?.await;
    println!("{:?}", outcome.into_indexed_result()?);

    Ok(())
}
