use crate::SearchRange;
use portable_atomic::{AtomicU64, Ordering};

/// Shared claim counter over a [`SearchRange`].
///
/// Each [`Cursor::claim`] is a single relaxed fetch-and-increment, so every
/// value in the range is handed to exactly one caller without locking. Which
/// caller gets which value is unspecified.
#[derive(Debug)]
pub struct Cursor {
    #[cfg(feature = "cache-padded")]
    next: crossbeam_utils::CachePadded<AtomicU64>,
    #[cfg(not(feature = "cache-padded"))]
    next: AtomicU64,
    end: u64,
}

impl Cursor {
    pub fn new(range: SearchRange) -> Self {
        Self {
            #[cfg(feature = "cache-padded")]
            next: crossbeam_utils::CachePadded::new(AtomicU64::new(range.start())),
            #[cfg(not(feature = "cache-padded"))]
            next: AtomicU64::new(range.start()),
            end: range.end(),
        }
    }

    /// Claims the next unprocessed value, or `None` once the range is
    /// exhausted.
    ///
    /// Exhausted claims keep advancing the counter. It starts at most at
    /// `MAX_N`, so it cannot wrap within any realistic number of calls.
    #[inline]
    pub fn claim(&self) -> Option<u64> {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        (n <= self.end).then_some(n)
    }
}
