use super::{AggregateError, EmptyInputError, Outcome, RaceAny as RaceAnyTrait};
use crate::utils::{self, trace_event, WakerVec};

use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};
use std::boxed::Box;
use std::vec::Vec;

use futures_core::future::FusedFuture;
use pin_project::pin_project;

/// A future which waits for the first future to complete successfully.
///
/// This `struct` is created by the [`race_any`] method on the [`RaceAny`] trait. See
/// its documentation for more.
///
/// Only the futures whose wakers fired since the last poll are polled again.
///
/// [`race_any`]: crate::future::RaceAny::race_any
/// [`RaceAny`]: crate::future::RaceAny
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct RaceAny<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Whether the outcome has been returned
    done: bool,
    /// The number of futures which have not failed yet
    pending: usize,
    /// The error of each future, filled in as futures fail
    errors: Vec<Option<E>>,
    /// The waker of each future, all sharing a single readiness set
    wakers: WakerVec,
    futures: Pin<Box<[Fut]>>,
}

impl<Fut, T, E> RaceAny<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    pub(crate) fn new(futures: Vec<Fut>) -> Self {
        let len = futures.len();
        Self {
            done: false,
            pending: len,
            errors: (0..len).map(|_| None).collect(),
            wakers: WakerVec::new(len),
            futures: futures.into_boxed_slice().into(),
        }
    }
}

impl<Fut, T, E> fmt::Debug for RaceAny<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.futures.iter()).finish()
    }
}

impl<Fut, T, E> Future for RaceAny<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        assert!(!*this.done, "`RaceAny` polled after completing");

        let mut readiness = this.wakers.readiness().lock().unwrap();
        readiness.set_waker(cx.waker());
        if !readiness.any_ready() {
            // Nothing is ready yet
            return Poll::Pending;
        }

        let futures = utils::iter_pin_mut(this.futures.as_mut()).zip(this.wakers.iter());
        for (index, (fut, waker)) in futures.enumerate() {
            // Failed futures are never polled again, their slot holds the error.
            if !readiness.clear_ready(index) || this.errors[index].is_some() {
                continue;
            }

            // unlock readiness so we don't deadlock when polling
            drop(readiness);

            let mut cx = Context::from_waker(waker);

            if let Poll::Ready(output) = fut.poll(&mut cx) {
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

            readiness = this.wakers.readiness().lock().unwrap();
        }
        drop(readiness);

        if *this.pending == 0 {
            *this.done = true;
            trace_event!(
                debug,
                failed = this.errors.len(),
                "race settled with every future failed"
            );
            let errors = AggregateError::from_slots(this.errors.drain(..));
            Poll::Ready(Outcome::AllFailed(errors))
        } else {
            Poll::Pending
        }
    }
}

impl<Fut, T, E> FusedFuture for RaceAny<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

impl<Fut, T, E> RaceAnyTrait for Vec<Fut>
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Ok = T;
    type Error = E;
    type Future = RaceAny<Fut::IntoFuture, T, E>;

    fn race_any(self) -> Result<Self::Future, EmptyInputError> {
        if self.is_empty() {
            return Err(EmptyInputError);
        }
        Ok(RaceAny::new(
            self.into_iter().map(IntoFuture::into_future).collect(),
        ))
    }
}
