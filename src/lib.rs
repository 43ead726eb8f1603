//! Wait for the first of several fallible futures to succeed.
//!
//! Given a set of futures which each resolve to a `Result`, [`race_any`]
//! polls all of them concurrently and settles as soon as any one of them
//! returns `Ok`, reporting the value together with the position of the future
//! that produced it. Errors that arrive before that are discarded. If every
//! future fails, the errors of all of them are returned together, in the
//! order the futures were given, no matter in which order they failed.
//!
//! The futures are polled in place by the returned future: nothing is
//! spawned, and the combinator works on any executor.
//!
//! # Operations
//!
//! This library provides the following operations on vecs, arrays, and tuples:
//!
//! - [`future::RaceAny`]: Wait for the first successful future to complete.
//! - [`future::FutureExt::race_any_with`]: Race two futures against each other.
//! - [`race_any()`]: Race every future produced by an iterator.
//!
//! # Examples
//!
//! Await the first of two slow operations to succeed:
//! ```rust
//! use race_any::prelude::*;
//! use race_any::Outcome;
//! use futures_lite::future::{block_on, yield_now};
//!
//! block_on(async {
//!     let a = async {
//!         yield_now().await;
//!         Ok::<_, &str>("A")
//!     };
//!     let b = async { Err::<&str, _>("b failed") };
//!
//!     let outcome = (a, b).race_any().unwrap().await;
//!     assert_eq!(outcome, Outcome::Success { value: "A", index: 0 });
//! })
//! ```
//!
//! When all of them fail, every error is kept:
//! ```rust
//! use race_any::prelude::*;
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! block_on(async {
//!     let futures = vec![
//!         future::ready(Err::<(), _>("first")),
//!         future::ready(Err("second")),
//!     ];
//!     let errors = futures.race_any().unwrap().await.failure().unwrap();
//!     assert_eq!(errors.into_inner(), ["first", "second"]);
//! })
//! ```
//!
//! # Features
//!
//! - `tracing`: emit [`tracing`](https://docs.rs/tracing) events when a raced
//!   future fails and when a race settles. Off by default.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]
#![allow(non_snake_case)]

mod utils;

use core::future::IntoFuture;

/// The race-any prelude.
pub mod prelude {
    pub use super::future::FutureExt as _;
    pub use super::future::RaceAny as _;
}

pub mod future;

pub use future::{AggregateError, EmptyInputError, Outcome};

/// Helper functions and types for tuples.
pub mod tuple {
    pub use crate::future::race_any::tuple::{
        RaceAny1, RaceAny10, RaceAny11, RaceAny12, RaceAny2, RaceAny3, RaceAny4, RaceAny5,
        RaceAny6, RaceAny7, RaceAny8, RaceAny9,
    };
}

/// Helper functions and types for fixed-length arrays.
pub mod array {
    pub use crate::future::race_any::array::RaceAny;
}

/// Helper functions and types for contiguous growable array type with heap-allocated contents,
/// written `Vec<T>`.
pub mod vec {
    pub use crate::future::race_any::vec::RaceAny;
}

/// Race every future yielded by an iterator.
///
/// This collects the futures into a `Vec` and calls [`RaceAny::race_any`] on
/// it.
///
/// [`RaceAny::race_any`]: future::RaceAny::race_any
///
/// # Errors
///
/// Returns [`EmptyInputError`] if the iterator yields nothing.
///
/// # Examples
///
/// ```
/// use race_any::race_any;
///
/// # futures_lite::future::block_on(async {
/// let attempts = (0..4u8).map(|n| async move {
///     if n == 3 { Ok(n) } else { Err(format!("attempt {n} failed")) }
/// });
/// let outcome = race_any(attempts)?.await;
/// assert_eq!(outcome.index(), Some(3));
/// # Ok::<(), race_any::EmptyInputError>(())
/// # }).unwrap();
/// ```
pub fn race_any<I, T, E>(
    futures: I,
) -> Result<vec::RaceAny<<I::Item as IntoFuture>::IntoFuture, T, E>, EmptyInputError>
where
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
{
    future::RaceAny::race_any(futures.into_iter().collect::<Vec<_>>())
}
