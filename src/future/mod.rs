//! Asynchronous basic functionality.
//!
//! Please see the fundamental `async` and `await` keywords and the [async book]
//! for more information on asynchronous programming in Rust.
//!
//! [async book]: https://rust-lang.github.io/async-book/
//!
//! # Racing fallible futures
//!
//! Often a value can be obtained from several sources, and it doesn't matter
//! which one provides it: a mirror, a replica, a retry with a different
//! strategy. [`RaceAny`] runs all of them concurrently and returns the first
//! one that _succeeds_. Only if every one of them fails does it fail too,
//! returning all of the errors at once.
//!
//! It can be used on vectors, arrays, and tuples of futures, as long as they
//! all resolve to the same `Result<T, E>`:
//!
//! | Input               | Future returned          | Empty input           |
//! | ---                 | ---                      | ---                   |
//! | `Vec<Fut>`          | [`vec::RaceAny`]         | [`EmptyInputError`]   |
//! | `[Fut; N]`          | [`array::RaceAny`]       | [`EmptyInputError`] when `N == 0` |
//! | `(Fut1, .., FutN)`  | [`tuple::RaceAny2`] etc. | not possible          |
//!
//! The output of each of them is an [`Outcome`]:
//!
//! | Variant                         | When does it return?                   |
//! | ---                             | ---                                    |
//! | `Outcome::Success { value, index }` | As soon as any future returns `Ok` |
//! | `Outcome::AllFailed(errors)`    | When the last future returns `Err`     |
//!
//! # Timeouts
//!
//! There is no built-in timeout. To bound a race, add a future which fails
//! once a deadline passes. Note that this only helps when every other future
//! eventually fails as well; a future which never completes keeps the race
//! pending regardless.
//!
//! ```
//! use race_any::prelude::*;
//! use async_io::Timer;
//! use std::time::Duration;
//!
//! # futures_lite::future::block_on(async {
//! let attempt = async {
//!     Timer::after(Duration::from_millis(10)).await;
//!     Err::<(), _>("unreachable")
//! };
//! let deadline = async {
//!     Timer::after(Duration::from_millis(20)).await;
//!     Err("deadline elapsed")
//! };
//! let errors = (attempt, deadline).race_any()?.await.failure().unwrap();
//! assert_eq!(errors[1], "deadline elapsed");
//! # Ok::<(), race_any::EmptyInputError>(())
//! # }).unwrap();
//! ```
//!
//! [`vec::RaceAny`]: crate::vec::RaceAny
//! [`array::RaceAny`]: crate::array::RaceAny
//! [`tuple::RaceAny2`]: crate::tuple::RaceAny2
pub use futures_ext::FutureExt;
pub use race_any::{AggregateError, EmptyInputError, Outcome, RaceAny};

mod futures_ext;
pub(crate) mod race_any;
