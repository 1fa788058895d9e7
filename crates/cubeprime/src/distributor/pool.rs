//! Scoped worker pool over a shared claim cursor.
//!
//! [`WorkDistributor::run`] spawns a fixed number of OS threads inside a
//! [`std::thread::scope`]. Every worker repeatedly claims the next `n` from a
//! shared [`Cursor`], searches it, and pushes the line into a private buffer.
//! When the cursor runs dry the worker takes the merge lock exactly once and
//! appends its whole buffer. After the scope joins every worker, the merged
//! lines are sorted by `n`, so output order never depends on scheduling.

use super::mutex::Mutex;
use crate::{
    CancellationToken, Cursor, Error, PrimalityOracle, PrimeTest, Result, ResultCollection,
    ResultLine, SearchRange, Sieve, find_decomposition,
};
use std::thread;

/// Default pool size: available hardware parallelism, never less than two.
pub fn default_workers() -> usize {
    num_cpus::get().max(2)
}

/// Splits a [`SearchRange`] across a pool of worker threads.
///
/// The sieve is borrowed, not cloned; all workers read the same instance.
///
/// # Example
///
/// ```
/// use cubeprime::{SearchRange, Sieve, WorkDistributor};
///
/// let sieve = Sieve::new(100_000);
/// let range = SearchRange::new(3, 6).unwrap();
/// let results = WorkDistributor::new(&sieve).workers(4).run(range).unwrap();
///
/// let lines: Vec<String> = results.iter().map(ToString::to_string).collect();
/// assert_eq!(lines, [
///     "3^3 = 27 = 3 + 5 + 19",
///     "4^3 = 64 = 2 + 3 + 59",
///     "5^3 = 125 = 3 + 13 + 109",
///     "6^3 = 216 = 2 + 3 + 211",
/// ]);
/// ```
#[derive(Clone, Debug)]
pub struct WorkDistributor<'a> {
    sieve: &'a Sieve,
    workers: usize,
    cancellation: Option<CancellationToken>,
}

impl<'a> WorkDistributor<'a> {
    /// Creates a distributor sized by [`default_workers`].
    pub fn new(sieve: &'a Sieve) -> Self {
        Self {
            sieve,
            workers: default_workers(),
            cancellation: None,
        }
    }

    /// Overrides the pool size. Zero is treated as one.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Lets `token` stop the run between claims.
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Searches every `n` in `range` and returns the lines sorted by `n`.
    ///
    /// # Errors
    ///
    /// - [`Error::Cancelled`] if the cancellation token fired before every
    ///   value was claimed.
    /// - [`Error::LockPoisoned`] (std mutex only) if a worker panicked while
    ///   merging.
    ///
    /// A panic inside a worker is re-raised on the calling thread.
    pub fn run(&self, range: SearchRange) -> Result<ResultCollection> {
        self.run_with(range, PrimalityOracle::new(self.sieve))
    }

    /// Like [`run`](Self::run), but checks large candidates with `oracle`
    /// instead of the default [`PrimalityOracle`]. Each worker gets its own
    /// copy.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            skip_all,
            fields(start = range.start(), end = range.end(), workers = self.workers)
        )
    )]
    pub fn run_with<P>(&self, range: SearchRange, oracle: P) -> Result<ResultCollection>
    where
        P: PrimeTest + Copy + Send,
    {
        let cursor = Cursor::new(range);
        let merged = Mutex::new(Vec::with_capacity(range.len()));

        #[cfg(feature = "tracing")]
        tracing::debug!("Spawning {} workers", self.workers);

        let processed = thread::scope(|s| {
            let handles: Vec<_> = (0..self.workers)
                .map(|worker_id| {
                    let worker = Worker {
                        _id: worker_id,
                        cursor: &cursor,
                        sieve: self.sieve,
                        oracle,
                        cancellation: self.cancellation.as_ref(),
                        merged: &merged,
                    };
                    s.spawn(move || worker.run())
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .sum::<Result<usize>>()
        })?;

        if processed < range.len() {
            #[cfg(feature = "tracing")]
            tracing::warn!(processed, total = range.len(), "Search cancelled");
            return Err(Error::Cancelled { processed });
        }

        #[cfg(feature = "parking-lot")]
        let lines = merged.into_inner();
        #[cfg(not(feature = "parking-lot"))]
        let lines = merged.into_inner()?;

        let collection = ResultCollection::from_unsorted(lines);

        #[cfg(feature = "tracing")]
        tracing::info!(
            lines = collection.len(),
            found = collection.found(),
            not_found = collection.not_found(),
            "Search complete"
        );

        Ok(collection)
    }
}

/// Searches `range` with the default pool size.
pub fn search_range(range: SearchRange, sieve: &Sieve) -> Result<ResultCollection> {
    WorkDistributor::new(sieve).run(range)
}

/// Everything one worker thread needs, borrowed from the enclosing scope.
struct Worker<'s, 'a, P> {
    _id: usize,
    cursor: &'s Cursor,
    sieve: &'a Sieve,
    oracle: P,
    cancellation: Option<&'s CancellationToken>,
    merged: &'s Mutex<Vec<ResultLine>>,
}

impl<P: PrimeTest + Copy> Worker<'_, '_, P> {
    /// Claims and searches until the cursor is exhausted or the run is
    /// cancelled, then merges once. Returns the number of values processed.
    fn run(self) -> Result<usize> {
        #[cfg(feature = "tracing")]
        tracing::trace!("Worker {} started", self._id);

        let mut local = Vec::new();
        loop {
            if self.cancellation.is_some_and(CancellationToken::is_cancelled) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Worker {} observed cancellation", self._id);
                break;
            }
            let Some(n) = self.cursor.claim() else {
                break;
            };
            local.push(find_decomposition(n, self.sieve, self.oracle));
        }

        let processed = local.len();
        {
            #[cfg(feature = "parking-lot")]
            let mut merged = self.merged.lock();
            #[cfg(not(feature = "parking-lot"))]
            let mut merged = self.merged.lock()?;
            merged.append(&mut local);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Worker {} stopped after {processed} values", self._id);

        Ok(processed)
    }
}
