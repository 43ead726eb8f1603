use super::{AggregateError, EmptyInputError, Outcome, RaceAny as RaceAnyTrait};
use crate::utils::{self, trace_event, Indexer};

use core::array;
use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project::pin_project;

macro_rules! impl_race_any_tuple {
    ($StructName:ident $($F:ident)+) => {
        /// The number of futures raced by `$StructName`. Consts and types live in
        /// different namespaces, so the struct name doubles as the const name.
        #[allow(non_upper_case_globals)]
        const $StructName: usize = utils::tuple_len!($($F,)*);

        /// A future which waits for the first future to complete successfully.
        ///
        /// This `struct` is created by the [`race_any`] method on the [`RaceAny`] trait. See
        /// its documentation for more.
        ///
        /// [`race_any`]: crate::future::RaceAny::race_any
        /// [`RaceAny`]: crate::future::RaceAny
        #[must_use = "futures do nothing unless you `.await` or poll them"]
        #[allow(non_snake_case)]
        #[pin_project]
        pub struct $StructName<T, ERR, $($F),*>
        where
            $( $F: Future<Output = Result<T, ERR>>, )*
        {
            done: bool,
            pending: usize,
            indexer: Indexer<{ $StructName }>,
            errors: [Option<ERR>; $StructName],
            $( #[pin] $F: $F, )*
        }

        impl<T, ERR, $($F),*> $StructName<T, ERR, $($F),*>
        where
            $( $F: Future<Output = Result<T, ERR>>, )*
        {
            #[allow(non_snake_case)]
            pub(crate) fn new($($F: $F),*) -> Self {
                Self {
                    done: false,
                    pending: $StructName,
                    indexer: Indexer::new(),
                    errors: array::from_fn(|_| None),
                    $($F),*
                }
            }
        }

        impl<T, ERR, $($F),*> fmt::Debug for $StructName<T, ERR, $($F),*>
        where
            $( $F: Future<Output = Result<T, ERR>> + fmt::Debug, )*
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple("RaceAny")
                    $(.field(&self.$F))*
                    .finish()
            }
        }

        impl<T, ERR, $($F),*> RaceAnyTrait for ($($F,)*)
        where
            $( $F: IntoFuture<Output = Result<T, ERR>>, )*
        {
            type Ok = T;
            type Error = ERR;
            type Future = $StructName<T, ERR, $($F::IntoFuture),*>;

            #[allow(non_snake_case)]
            fn race_any(self) -> Result<Self::Future, EmptyInputError> {
                let ($($F,)*): ($($F,)*) = self;
                Ok($StructName::new($($F.into_future()),*))
            }
        }

        impl<T, ERR, $($F),*> Future for $StructName<T, ERR, $($F),*>
        where
            $( $F: Future<Output = Result<T, ERR>>, )*
        {
            type Output = Outcome<T, ERR>;

            fn poll(
                self: Pin<&mut Self>, cx: &mut Context<'_>
            ) -> Poll<Self::Output> {
                let mut this = self.project();

                assert!(!*this.done, "`RaceAny` polled after completing");

                #[repr(usize)]
                enum Indexes {
                    $($F),*
                }

                for index in this.indexer.iter() {
                    if this.errors[index].is_some() {
                        continue;
                    }
                    $(
                        if index == Indexes::$F as usize {
                            if let Poll::Ready(output) = this.$F.as_mut().poll(cx) {
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
                            continue;
                        }
                    )*
                }

                if *this.pending == 0 {
                    *this.done = true;
                    trace_event!(
                        debug,
                        failed = $StructName,
                        "race settled with every future failed"
                    );
                    let errors = AggregateError::from_slots(this.errors.iter_mut().map(Option::take));
                    Poll::Ready(Outcome::AllFailed(errors))
                } else {
                    Poll::Pending
                }
            }
        }

        impl<T, ERR, $($F),*> FusedFuture for $StructName<T, ERR, $($F),*>
        where
            $( $F: Future<Output = Result<T, ERR>>, )*
        {
            fn is_terminated(&self) -> bool {
                self.done
            }
        }
    };
}

impl_race_any_tuple! { RaceAny1 A }
impl_race_any_tuple! { RaceAny2 A B }
impl_race_any_tuple! { RaceAny3 A B C }
impl_race_any_tuple! { RaceAny4 A B C D }
impl_race_any_tuple! { RaceAny5 A B C D E }
impl_race_any_tuple! { RaceAny6 A B C D E F }
impl_race_any_tuple! { RaceAny7 A B C D E F G }
impl_race_any_tuple! { RaceAny8 A B C D E F G H }
impl_race_any_tuple! { RaceAny9 A B C D E F G H I }
impl_race_any_tuple! { RaceAny10 A B C D E F G H I J }
impl_race_any_tuple! { RaceAny11 A B C D E F G H I J K }
impl_race_any_tuple! { RaceAny12 A B C D E F G H I J K L }
