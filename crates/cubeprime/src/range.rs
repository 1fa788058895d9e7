use crate::{Error, Result};
use core::ops::RangeInclusive;

/// Smallest `n` the search accepts.
pub const MIN_N: u64 = 3;

/// Largest `n` whose cube fits in a `u64`.
pub const MAX_N: u64 = 2_642_245;

/// A validated, closed interval `[start, end]` of values to search.
///
/// Construction goes through [`SearchRange::new`] (or [`SearchRange::parse`]),
/// which enforces `MIN_N <= start <= end <= MAX_N`. Every `n` in a range can
/// therefore be cubed in 64 bits without overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchRange {
    start: u64,
    end: u64,
}

impl SearchRange {
    /// Validates `start` and `end`.
    ///
    /// # Errors
    ///
    /// - [`Error::StartOutOfRange`] if `start` is outside `MIN_N..=MAX_N`.
    /// - [`Error::EndOutOfRange`] if `end` is outside `start..=MAX_N`.
    ///
    /// # Example
    ///
    /// ```
    /// use cubeprime::{Error, MAX_N, SearchRange};
    ///
    /// let range = SearchRange::new(3, 10).unwrap();
    /// assert_eq!(range.len(), 8);
    /// assert!(matches!(SearchRange::new(2, 10), Err(Error::StartOutOfRange { .. })));
    /// assert!(matches!(SearchRange::new(5, MAX_N + 1), Err(Error::EndOutOfRange { .. })));
    /// ```
    pub fn new(start: u64, end: u64) -> Result<Self> {
        Self::check_start(start)?;
        if end < start || end > MAX_N {
            return Err(Error::EndOutOfRange {
                start,
                end,
                max: MAX_N,
            });
        }
        Ok(Self { start, end })
    }

    /// Validates a lone start value, before the end is known.
    ///
    /// Interactive callers use this to reject a bad start without asking for
    /// an end.
    pub fn check_start(start: u64) -> Result<u64> {
        if !(MIN_N..=MAX_N).contains(&start) {
            return Err(Error::StartOutOfRange { start, max: MAX_N });
        }
        Ok(start)
    }

    /// Parses and validates both endpoints from text.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = parse_endpoint("start n", start)?;
        let end = parse_endpoint("end n", end)?;
        Self::new(start, end)
    }

    pub const fn start(&self) -> u64 {
        self.start
    }

    pub const fn end(&self) -> u64 {
        self.end
    }

    /// Number of values in the range. Never zero.
    pub const fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Always `false`; a validated range holds at least one value.
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn contains(&self, n: u64) -> bool {
        self.start <= n && n <= self.end
    }

    pub fn iter(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }
}

impl IntoIterator for SearchRange {
    type Item = u64;
    type IntoIter = RangeInclusive<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parses one endpoint, labelling failures with `field`.
pub fn parse_endpoint(field: &'static str, input: &str) -> Result<u64> {
    input.trim().parse().map_err(|_| Error::InvalidNumber {
        field,
        input: input.trim().to_owned(),
    })
}
