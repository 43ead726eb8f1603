use core::ops;

/// Yields every index in `0..N` once per poll, starting one position further
/// along each time, so that no future is always polled first.
#[derive(Debug)]
pub(crate) struct Indexer<const N: usize> {
    offset: usize,
}

impl<const N: usize> Indexer<N> {
    pub(crate) fn new() -> Self {
        Self { offset: 0 }
    }

    /// The indices to poll this round. Advances the starting point for the
    /// next call.
    pub(crate) fn iter(&mut self) -> IndexIter<N> {
        let offset = self.offset;
        if N > 0 {
            self.offset = (offset + 1) % N;
        }
        IndexIter {
            range: 0..N,
            offset,
        }
    }
}

pub(crate) struct IndexIter<const N: usize> {
    range: ops::Range<usize>,
    offset: usize,
}

impl<const N: usize> Iterator for IndexIter<N> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|pos| (pos + self.offset) % N)
    }
}
