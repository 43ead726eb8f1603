use core::fmt;
use core::ops::Deref;
use std::error::Error;
use std::vec::Vec;

/// The failure reasons of every raced future, in input order.
///
/// Returned inside [`Outcome::AllFailed`] when none of the raced futures
/// succeeded. `errors[i]` is always the error produced by the `i`th future,
/// regardless of the order in which the futures failed.
///
/// # Examples
///
/// ```
/// use race_any::prelude::*;
/// use std::future;
///
/// # futures_lite::future::block_on(async {
/// let futures = vec![
///     future::ready(Err::<(), _>("first")),
///     future::ready(Err("second")),
/// ];
/// let errors = futures.race_any()?.await.failure().unwrap();
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0], "first");
/// assert_eq!(errors.to_string(), "all 2 futures failed");
/// # Ok::<(), race_any::EmptyInputError>(())
/// # }).unwrap();
/// ```
///
/// [`Outcome::AllFailed`]: crate::Outcome::AllFailed
#[derive(Clone, PartialEq, Eq)]
pub struct AggregateError<E> {
    inner: Vec<E>,
}

impl<E> AggregateError<E> {
    /// Collect the reasons of a fully-failed race.
    ///
    /// Every slot must be filled, so that `inner[i]` is the reason of
    /// future `i`.
    pub(crate) fn from_slots(slots: impl IntoIterator<Item = Option<E>>) -> Self {
        let inner = slots
            .into_iter()
            .map(|slot| match slot {
                Some(err) => err,
                None => unreachable!("a race settled as failed while a future was still pending"),
            })
            .collect();
        Self { inner }
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no errors.
    ///
    /// This never holds for an error produced by a race, since races over
    /// zero futures are rejected up front with [`EmptyInputError`].
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the errors, in input order.
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.inner.iter()
    }

    /// Consume the aggregate and return the errors, in input order.
    pub fn into_inner(self) -> Vec<E> {
        self.inner
    }
}

impl<E: fmt::Debug> fmt::Debug for AggregateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

impl<E> fmt::Display for AggregateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "all {} futures failed", self.inner.len())
    }
}

impl<E> Deref for AggregateError<E> {
    type Target = [E];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<E> IntoIterator for AggregateError<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a AggregateError<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<E: fmt::Debug> Error for AggregateError<E> {}

/// The error returned when racing an empty set of futures.
///
/// A race over nothing can neither succeed nor fail, so it is rejected before
/// any future is polled.
///
/// ```
/// use race_any::{prelude::*, EmptyInputError};
/// use std::future::Ready;
///
/// let futures: Vec<Ready<Result<u8, ()>>> = vec![];
/// assert_eq!(futures.race_any().unwrap_err(), EmptyInputError);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyInputError;

impl fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot race an empty set of futures")
    }
}

impl Error for EmptyInputError {}
