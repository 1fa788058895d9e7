/// A result type defaulting to this crate's [`Error`].
///
/// The search itself is infallible; errors only come from validating input,
/// parsing result lines, or coordinating the worker pool.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `cubeprime` can emit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The first value of the range is below 3 or above [`MAX_N`].
    ///
    /// [`MAX_N`]: crate::MAX_N
    #[error("start n ({start}) must be in 3..={max}")]
    StartOutOfRange { start: u64, max: u64 },

    /// The last value of the range precedes `start` or exceeds [`MAX_N`].
    ///
    /// [`MAX_N`]: crate::MAX_N
    #[error("end n ({end}) must be in {start}..={max}")]
    EndOutOfRange { start: u64, end: u64, max: u64 },

    /// A range endpoint could not be parsed as an unsigned integer.
    #[error("invalid {field}: {input:?} is not an unsigned integer")]
    InvalidNumber { field: &'static str, input: String },

    /// A rendered result line could not be parsed back.
    #[error("malformed result line: {line:?}")]
    InvalidResultLine { line: String },

    /// The run was cancelled before every value in the range was claimed.
    #[error("search cancelled after {processed} values")]
    Cancelled { processed: usize },

    /// The merge lock was **poisoned** by a worker that panicked while holding
    /// it.
    ///
    /// When the `parking-lot` feature is enabled, mutexes do **not** poison,
    /// so this variant is never produced.
    #[cfg(not(feature = "parking-lot"))]
    #[error("result collection lock poisoned")]
    LockPoisoned,
}

#[cfg(not(feature = "parking-lot"))]
impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::LockPoisoned
    }
}
