use std::sync::Arc;
use std::sync::Mutex;
use std::task::Waker;

use super::{InlineWakerVec, ReadinessVec};

/// A collection of wakers, one per racing future, sharing one readiness set.
#[derive(Debug)]
pub(crate) struct WakerVec {
    wakers: Vec<Waker>,
    readiness: Arc<Mutex<ReadinessVec>>,
}

impl WakerVec {
    /// Create a new instance of `WakerVec`.
    pub(crate) fn new(len: usize) -> Self {
        let readiness = Arc::new(Mutex::new(ReadinessVec::new(len)));
        let wakers = (0..len)
            .map(|i| Arc::new(InlineWakerVec::new(i, readiness.clone())).into())
            .collect();
        Self { wakers, readiness }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, index: usize) -> Option<&Waker> {
        self.wakers.get(index)
    }

    /// Iterate over the wakers, in the order of the futures they belong to.
    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Waker> {
        self.wakers.iter()
    }

    /// Access the `Readiness`.
    pub(crate) fn readiness(&self) -> &Mutex<ReadinessVec> {
        self.readiness.as_ref()
    }
}
