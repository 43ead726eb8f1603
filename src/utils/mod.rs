//! Utilities to implement the different futures of this crate.

mod indexer;
mod pin;
mod trace;
mod tuple;
mod wakers;

pub(crate) use indexer::Indexer;
pub(crate) use pin::{iter_pin_mut, pin_project_array};
pub(crate) use trace::trace_event;
pub(crate) use tuple::tuple_len;
pub(crate) use wakers::WakerVec;
