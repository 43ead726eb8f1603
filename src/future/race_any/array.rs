use super::{AggregateError, EmptyInputError, Outcome, RaceAny as RaceAnyTrait};
use crate::utils::{self, trace_event, Indexer};

use core::array;
use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project::pin_project;

/// A future which waits for the first future to complete successfully.
///
/// This `struct` is created by the [`race_any`] method on the [`RaceAny`] trait. See
/// its documentation for more.
///
/// [`race_any`]: crate::future::RaceAny::race_any
/// [`RaceAny`]: crate::future::RaceAny
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct RaceAny<Fut, T, E, const N: usize>
where
    Fut: Future<Output = Result<T, E>>,
{
    done: bool,
    pending: usize,
    indexer: Indexer<N>,
    errors: [Option<E>; N],
    #[pin]
    futures: [Fut; N],
}

impl<Fut, T, E, const N: usize> fmt::Debug for RaceAny<Fut, T, E, N>
where
    Fut: Future<Output = Result<T, E>> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.futures.iter()).finish()
    }
}

impl<Fut, T, E, const N: usize> Future for RaceAny<Fut, T, E, N>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        assert!(!*this.done, "`RaceAny` polled after completing");

        let mut futures = utils::pin_project_array(this.futures);
        for index in this.indexer.iter() {
            if this.errors[index].is_some() {
                continue;
            }
            if let Poll::Ready(output) = futures[index].as_mut().poll(cx) {
                match output {
                    Ok(value) => {
                        *this.done = true;
                        trace_event!(debug, index, "race settled by a successful future");
                        return Poll::Ready(Outcome::Success { value, index });
                    }
                    Err(err) => {
                        trace_event!(trace, index, "raced future failed");
                        this.errors[index] = Some(err);
                        *this.pending -= 1;
                    }
                }
            }
        }

        if *this.pending == 0 {
            *this.done = true;
            trace_event!(debug, failed = N, "race settled with every future failed");
            let errors = AggregateError::from_slots(this.errors.iter_mut().map(Option::take));
            Poll::Ready(Outcome::AllFailed(errors))
        } else {
            Poll::Pending
        }
    }
}

impl<Fut, T, E, const N: usize> FusedFuture for RaceAny<Fut, T, E, N>
where
    Fut: Future<Output = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

impl<Fut, T, E, const N: usize> RaceAnyTrait for [Fut; N]
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Ok = T;
    type Error = E;
    type Future = RaceAny<Fut::IntoFuture, T, E, N>;

    fn race_any(self) -> Result<Self::Future, EmptyInputError> {
        if N == 0 {
            return Err(EmptyInputError);
        }
        Ok(RaceAny {
            done: false,
            pending: N,
            indexer: Indexer::new(),
            errors: array::from_fn(|_| None),
            futures: self.map(IntoFuture::into_future),
        })
    }
}
