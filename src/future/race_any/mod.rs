use core::future::Future;

pub(crate) mod array;
pub(crate) mod tuple;
pub(crate) mod vec;

mod error;
mod outcome;

pub use error::{AggregateError, EmptyInputError};
pub use outcome::Outcome;

/// Wait for the first future to complete successfully.
///
/// Awaits multiple fallible futures concurrently, returning as soon as one of
/// them resolves to `Ok`. If all of them resolve to `Err`, every error is
/// returned in input order.
pub trait RaceAny {
    /// The value of a successful future.
    type Ok;

    /// The error type of the futures.
    type Error;

    /// The [`Future`] implementation returned by this method.
    type Future: Future<Output = Outcome<Self::Ok, Self::Error>>;

    /// Wait for the first future to complete successfully.
    ///
    /// Polls every future concurrently. The first future to resolve to
    /// `Ok(value)` settles the race as [`Outcome::Success`], carrying the
    /// value and the position of that future; failures that arrive earlier
    /// are discarded. Once a future succeeds the remaining futures are no
    /// longer polled, and are dropped together with the returned future.
    ///
    /// If every future resolves to `Err`, the race settles as
    /// [`Outcome::AllFailed`] only after the last one has failed. The errors
    /// are ordered by input position, not by the order in which they arrived.
    /// A future which never completes keeps the race pending unless another
    /// future succeeds.
    ///
    /// All futures must resolve to the same `Result<T, E>` type.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] without polling anything if there are no
    /// futures to race.
    ///
    /// # Examples
    ///
    /// ```
    /// use race_any::prelude::*;
    /// use race_any::Outcome;
    /// use std::future;
    ///
    /// # futures_lite::future::block_on(async {
    /// let futures = vec![
    ///     future::ready(Err("oh no")),
    ///     future::ready(Ok("hello")),
    /// ];
    /// let outcome = futures.race_any()?.await;
    /// assert_eq!(outcome, Outcome::Success { value: "hello", index: 1 });
    /// # Ok::<(), race_any::EmptyInputError>(())
    /// # }).unwrap();
    /// ```
    fn race_any(self) -> Result<Self::Future, EmptyInputError>;
}
