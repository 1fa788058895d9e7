/// Default upper bound (inclusive) of the prime sieve.
pub const SIEVE_LIMIT: u32 = 100_000_000;

/// A sieve of Eratosthenes over `0..=limit`.
///
/// The sieve is built once and is immutable afterwards, so a single instance
/// can be shared by reference across any number of worker threads without
/// synchronization. It serves two roles:
///
/// - an O(1) primality oracle for values up to [`Sieve::limit`] via
///   [`Sieve::is_prime_small`], and
/// - an ascending, restartable list of every prime up to the limit via
///   [`Sieve::primes`].
///
/// # Example
///
/// ```
/// use cubeprime::Sieve;
///
/// let sieve = Sieve::new(30);
/// assert_eq!(sieve.primes(), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// assert!(sieve.is_prime_small(29));
/// assert!(!sieve.is_prime_small(27));
/// ```
#[derive(Clone, Debug)]
pub struct Sieve {
    // composite[x] == true  <=>  x is not prime
    composite: Vec<bool>,
    primes: Vec<u32>,
}

impl Sieve {
    /// Builds the sieve for every integer in `0..=limit`.
    ///
    /// Memory use is one byte per integer plus four bytes per prime, so the
    /// default [`SIEVE_LIMIT`] costs roughly 120 MB.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug"))]
    pub fn new(limit: u32) -> Self {
        let len = limit as usize + 1;
        let mut composite = vec![false; len];
        for slot in composite.iter_mut().take(2) {
            *slot = true;
        }

        let mut i = 2_usize;
        while i * i < len {
            if !composite[i] {
                for multiple in (i * i..len).step_by(i) {
                    composite[multiple] = true;
                }
            }
            i += 1;
        }

        let primes: Vec<u32> = composite
            .iter()
            .enumerate()
            .skip(2)
            .filter(|&(_, &is_composite)| !is_composite)
            .map(|(x, _)| x as u32)
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(limit, primes = primes.len(), "sieve built");

        Self { composite, primes }
    }

    /// Returns `true` if `x` is prime.
    ///
    /// # Panics
    ///
    /// The caller must guarantee `x <= self.limit()`; larger values index out
    /// of bounds.
    #[inline]
    pub fn is_prime_small(&self, x: u32) -> bool {
        !self.composite[x as usize]
    }

    /// All primes `<= self.limit()`, ascending and without duplicates.
    #[inline]
    pub fn primes(&self) -> &[u32] {
        &self.primes
    }

    /// The inclusive upper bound this sieve was built for.
    #[inline]
    pub fn limit(&self) -> u32 {
        (self.composite.len() - 1) as u32
    }
}

impl Default for Sieve {
    /// Builds the sieve up to [`SIEVE_LIMIT`].
    fn default() -> Self {
        Self::new(SIEVE_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial_division(x: u32) -> bool {
        if x < 2 {
            return false;
        }
        let x = x as u64;
        let mut d = 2_u64;
        while d * d <= x {
            if x % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    #[test]
    fn agrees_with_trial_division() {
        let sieve = Sieve::new(20_000);
        for x in 0..=sieve.limit() {
            assert_eq!(sieve.is_prime_small(x), trial_division(x), "x = {x}");
        }
    }

    #[test]
    fn primes_match_unmarked_indices() {
        let sieve = Sieve::new(10_000);
        let expected: Vec<u32> = (0..=sieve.limit())
            .filter(|&x| sieve.is_prime_small(x))
            .collect();
        assert_eq!(sieve.primes(), expected.as_slice());
        assert!(sieve.primes().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(sieve.primes().len(), 1229);
    }

    #[test]
    fn zero_and_one_are_not_prime() {
        let sieve = Sieve::new(1);
        assert!(!sieve.is_prime_small(0));
        assert!(!sieve.is_prime_small(1));
        assert!(sieve.primes().is_empty());
        assert_eq!(sieve.limit(), 1);
    }

    #[test]
    fn limit_is_inclusive() {
        let sieve = Sieve::new(97);
        assert_eq!(sieve.limit(), 97);
        assert!(sieve.is_prime_small(97));
        assert_eq!(sieve.primes().last(), Some(&97));
    }

    #[test]
    fn primes_can_be_iterated_repeatedly() {
        let sieve = Sieve::new(100);
        let first: u32 = sieve.primes().iter().sum();
        let second: u32 = sieve.primes().iter().sum();
        assert_eq!(first, 1060);
        assert_eq!(first, second);
    }
}
