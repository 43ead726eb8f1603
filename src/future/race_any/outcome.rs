use super::AggregateError;

/// The settled result of racing fallible futures.
///
/// Either the first future to succeed, along with its position in the input,
/// or the errors of every future when none of them succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// A future completed with `Ok(value)` before any other did.
    Success {
        /// The value the future resolved to.
        value: T,
        /// The position of the future in the raced collection.
        index: usize,
    },
    /// Every future completed with an error.
    AllFailed(AggregateError<E>),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if one of the futures succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns `true` if all of the futures failed.
    pub fn is_all_failed(&self) -> bool {
        matches!(self, Self::AllFailed(_))
    }

    /// The position of the winning future, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Success { index, .. } => Some(*index),
            Self::AllFailed(_) => None,
        }
    }

    /// The value of the winning future, if any.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::AllFailed(_) => None,
        }
    }

    /// The aggregated errors, if every future failed.
    pub fn failure(self) -> Option<AggregateError<E>> {
        match self {
            Self::Success { .. } => None,
            Self::AllFailed(errors) => Some(errors),
        }
    }

    /// Convert into a `Result`, dropping the index of the winning future.
    ///
    /// ```
    /// use race_any::prelude::*;
    /// use std::future;
    ///
    /// # futures_lite::future::block_on(async {
    /// let a = future::ready(Err::<&str, _>("oops"));
    /// let b = future::ready(Ok("hello"));
    /// let res = (a, b).race_any()?.await.into_result();
    /// assert_eq!(res.unwrap(), "hello");
    /// # Ok::<(), race_any::EmptyInputError>(())
    /// # }).unwrap();
    /// ```
    pub fn into_result(self) -> Result<T, AggregateError<E>> {
        match self {
            Self::Success { value, .. } => Ok(value),
            Self::AllFailed(errors) => Err(errors),
        }
    }

    /// Convert into a `Result`, keeping the index of the winning future.
    pub fn into_indexed_result(self) -> Result<(usize, T), AggregateError<E>> {
        self.into()
    }
}

impl<T, E> From<Outcome<T, E>> for Result<(usize, T), AggregateError<E>> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success { value, index } => Ok((index, value)),
            Outcome::AllFailed(errors) => Err(errors),
        }
    }
}
