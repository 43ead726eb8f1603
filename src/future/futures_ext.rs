use core::future::IntoFuture;
use futures_core::Future;

use super::race_any::tuple::RaceAny2;

/// An extension trait for the `Future` trait.
pub trait FutureExt: Future {
    /// Wait for the first of two fallible futures to complete successfully.
    ///
    /// A pair of futures is never empty, so unlike [`RaceAny::race_any`] this
    /// returns the future directly. The winning future is reported with index
    /// `0` for `self` and `1` for `other`.
    ///
    /// [`RaceAny::race_any`]: crate::future::RaceAny::race_any
    ///
    /// # Example
    ///
    /// ```
    /// use race_any::prelude::*;
    /// use race_any::Outcome;
    /// use std::future;
    ///
    /// # futures_lite::future::block_on(async {
    /// let primary = future::ready(Err::<&str, _>("connection refused"));
    /// let fallback = future::ready(Ok("connected"));
    ///
    /// let outcome = primary.race_any_with(fallback).await;
    /// assert_eq!(outcome, Outcome::Success { value: "connected", index: 1 });
    /// # });
    /// ```
    fn race_any_with<T, E, S2>(self, other: S2) -> RaceAny2<T, E, Self, S2::IntoFuture>
    where
        Self: Future<Output = Result<T, E>> + Sized,
        S2: IntoFuture<Output = Result<T, E>>;
}

impl<F1> FutureExt for F1
where
    F1: Future,
{
    fn race_any_with<T, E, S2>(self, other: S2) -> RaceAny2<T, E, Self, S2::IntoFuture>
    where
        Self: Future<Output = Result<T, E>> + Sized,
        S2: IntoFuture<Output = Result<T, E>>,
    {
        RaceAny2::new(self, other.into_future())
    }
}
