use crate::Sieve;

/// Values up to this bound are answered by the sieve instead of Miller-Rabin.
pub const SMALL_PRIME_BOUND: u64 = 10_000_000;

/// Witness bases for the strong-probable-prime test.
///
/// Exact below 341,550,071,728,321, the smallest strong pseudoprime to all of
/// them. Search output is defined in terms of this set, so it must not change.
const WITNESSES: [u64; 7] = [2, 3, 5, 7, 11, 13, 17];

/// A primality test over the full `u64` domain.
///
/// This is the seam [`find_decomposition`] is generic over, so alternative
/// oracles (e.g. trial division in tests) can be swapped in.
///
/// [`find_decomposition`]: crate::find_decomposition
pub trait PrimeTest {
    /// Returns `true` if `n` is prime.
    fn is_prime(&self, n: u64) -> bool;
}

impl<T: PrimeTest + ?Sized> PrimeTest for &T {
    #[inline]
    fn is_prime(&self, n: u64) -> bool {
        (**self).is_prime(n)
    }
}

/// Deterministic primality oracle backed by a [`Sieve`].
///
/// Small inputs are a table lookup; everything above
/// [`SMALL_PRIME_BOUND`] (or above the sieve's limit, if that is smaller) runs
/// a strong-probable-prime test against a fixed witness set.
///
/// The oracle only borrows the sieve, so it is `Copy` and can be handed to
/// every worker.
#[derive(Clone, Copy, Debug)]
pub struct PrimalityOracle<'a> {
    sieve: &'a Sieve,
}

impl<'a> PrimalityOracle<'a> {
    pub const fn new(sieve: &'a Sieve) -> Self {
        Self { sieve }
    }

    pub const fn sieve(&self) -> &'a Sieve {
        self.sieve
    }
}

impl PrimeTest for PrimalityOracle<'_> {
    #[inline]
    fn is_prime(&self, n: u64) -> bool {
        is_prime_u64(n, self.sieve)
    }
}

/// Decides primality of any `u64`.
///
/// # Example
///
/// ```
/// use cubeprime::{Sieve, is_prime_u64};
///
/// let sieve = Sieve::new(1_000);
/// assert!(is_prime_u64(997, &sieve));
/// assert!(is_prime_u64(18_446_744_073_709_551_557, &sieve));
/// assert!(!is_prime_u64(18_446_744_073_709_551_615, &sieve));
/// ```
pub fn is_prime_u64(n: u64, sieve: &Sieve) -> bool {
    let small_bound = SMALL_PRIME_BOUND.min(u64::from(sieve.limit()));
    if n <= small_bound {
        return sieve.is_prime_small(n as u32);
    }
    // Only reachable below 4 when the sieve is smaller than that.
    if n < 4 {
        return n >= 2;
    }
    if n & 1 == 0 {
        return false;
    }
    miller_rabin(n)
}

/// Strong-probable-prime test for odd `n >= 5` against [`WITNESSES`].
fn miller_rabin(n: u64) -> bool {
    // n - 1 = 2^r * d with d odd
    let r = (n - 1).trailing_zeros();
    let d = (n - 1) >> r;

    'witness: for a in WITNESSES {
        if a >= n {
            break;
        }
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..r {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// `a * b mod m` through a 128-bit intermediate.
#[inline]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

/// `base^exp mod m` by square-and-multiply.
pub fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial_division(n: u64) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2_u64;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    #[test]
    fn mul_mod_does_not_overflow() {
        let m = u64::MAX - 58; // largest prime below 2^64
        assert_eq!(mul_mod(m - 1, m - 1, m), 1);
        assert_eq!(mul_mod(u64::MAX, u64::MAX, u64::MAX), 0);
        // 2^64 = 2 mod 7, so u64::MAX = 1 mod 7
        assert_eq!(mul_mod(u64::MAX, 2, 7), 2);
    }

    #[test]
    fn pow_mod_matches_small_cases() {
        assert_eq!(pow_mod(2, 10, 1_000), 24);
        assert_eq!(pow_mod(3, 0, 7), 1);
        assert_eq!(pow_mod(5, 3, 1), 0);
        // Fermat: a^(p-1) = 1 mod p
        let p = 1_000_000_007;
        assert_eq!(pow_mod(123_456_789, p - 1, p), 1);
    }

    #[test]
    fn miller_rabin_agrees_with_trial_division() {
        // Exercise the witness path on values well above a tiny sieve.
        let sieve = Sieve::new(10);
        for n in 0..50_000 {
            assert_eq!(is_prime_u64(n, &sieve), trial_division(n), "n = {n}");
        }
    }

    #[test]
    fn miller_rabin_above_the_small_bound() {
        let sieve = Sieve::new(100);
        for n in SMALL_PRIME_BOUND - 2_000..SMALL_PRIME_BOUND + 2_000 {
            assert_eq!(is_prime_u64(n, &sieve), trial_division(n), "n = {n}");
        }
    }

    #[test]
    fn rejects_strong_pseudoprimes() {
        let sieve = Sieve::new(100);
        // Strong pseudoprimes to several of the smaller bases.
        for n in [
            2_047_u64,
            1_373_653,
            25_326_001,
            3_215_031_751,
            2_152_302_898_747,
            3_474_749_660_383,
        ] {
            assert!(!is_prime_u64(n, &sieve), "{n} is composite");
        }
    }

    #[test]
    fn known_large_primes() {
        let sieve = Sieve::new(100);
        for n in [
            1_000_000_007_u64,
            4_294_967_291,
            4_294_967_311,
            2_305_843_009_213_693_951, // 2^61 - 1
            18_446_744_073_709_551_557,
        ] {
            assert!(is_prime_u64(n, &sieve), "{n} is prime");
        }
        assert!(!is_prime_u64(u64::MAX, &sieve));
        assert!(!is_prime_u64(4_294_967_296, &sieve));
        // Product of two primes near 2^32.
        assert!(!is_prime_u64(4_294_967_291 * 4_294_967_279, &sieve));
    }

    #[test]
    fn oracle_agrees_with_sieve_at_the_small_bound() {
        let sieve = Sieve::new(SMALL_PRIME_BOUND as u32);
        for n in SMALL_PRIME_BOUND - 5_000..=SMALL_PRIME_BOUND {
            assert_eq!(
                miller_rabin_or_trivial(n),
                sieve.is_prime_small(n as u32),
                "n = {n}"
            );
            assert_eq!(is_prime_u64(n, &sieve), sieve.is_prime_small(n as u32));
        }
    }

    fn miller_rabin_or_trivial(n: u64) -> bool {
        match n {
            0 | 1 => false,
            2 | 3 => true,
            _ if n & 1 == 0 => false,
            _ => miller_rabin(n),
        }
    }

    fn through_reference<P: PrimeTest>(oracle: P, n: u64) -> bool {
        oracle.is_prime(n)
    }

    #[test]
    fn oracle_is_usable_through_the_trait() {
        let sieve = Sieve::new(1_000);
        let oracle = PrimalityOracle::new(&sieve);
        let by_ref: &dyn PrimeTest = &oracle;
        assert!(by_ref.is_prime(997));
        assert!(!through_reference(&oracle, 999));
        assert_eq!(oracle.sieve().limit(), 1_000);
    }
}
