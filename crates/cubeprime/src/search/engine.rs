use crate::{Decomposition, MAX_N, PrimeTest, ResultLine, Sieve};

/// `n³`, computed in 128 bits.
///
/// The caller guarantees `n <= MAX_N` so the result fits in a `u64`.
#[inline]
pub fn cube(n: u64) -> u64 {
    debug_assert!(n <= MAX_N, "{n}^3 overflows u64");
    (u128::from(n) * u128::from(n) * u128::from(n)) as u64
}

/// Searches for three pairwise-distinct primes summing to `n³`.
///
/// The first match under a fixed order is reported:
///
/// 1. If `n³` is even, try `2 + p + q` for sieve primes `p` ascending, with
///    `q = n³ - 2 - p`, stopping once `q <= p`.
/// 2. Otherwise (or if that fails) try `p + q + r` over sieve primes `p < q`
///    in index order, with `r = n³ - p - q`. The outer loop stops once
///    `3p > n³`; the inner loop stops once `r < q`.
///
/// Candidates beyond the sieve (`q` in phase one, `r` in phase two) are
/// checked with `oracle`. Not finding a decomposition is a valid outcome, not
/// an error.
///
/// # Example
///
/// ```
/// use cubeprime::{PrimalityOracle, Sieve, find_decomposition};
///
/// let sieve = Sieve::new(1_000);
/// let oracle = PrimalityOracle::new(&sieve);
/// assert_eq!(
///     find_decomposition(3, &sieve, oracle).to_string(),
///     "3^3 = 27 = 3 + 5 + 19"
/// );
/// ```
pub fn find_decomposition<P: PrimeTest>(n: u64, sieve: &Sieve, oracle: P) -> ResultLine {
    let m = cube(n);

    let shortcut = match m & 1 {
        0 => with_two(m, sieve, &oracle),
        _ => None,
    };
    let decomposition = shortcut.or_else(|| triple(m, sieve, &oracle));

    match decomposition {
        Some(decomposition) => ResultLine::found(n, m, decomposition),
        None => ResultLine::not_found(n, m),
    }
}

/// Even-cube shortcut: `m = 2 + p + q` with `2 < p < q`.
fn with_two<P: PrimeTest>(m: u64, sieve: &Sieve, oracle: &P) -> Option<Decomposition> {
    for p in sieve.primes().iter().copied().map(u64::from) {
        if p >= m {
            break;
        }
        let Some(q) = m.checked_sub(2 + p) else {
            break;
        };
        if q <= p {
            break;
        }
        if p != 2 && q != 2 && oracle.is_prime(q) {
            return Some(Decomposition::WithTwo { p, q });
        }
    }
    None
}

/// General search: `m = p + q + r` with `p < q < r`.
fn triple<P: PrimeTest>(m: u64, sieve: &Sieve, oracle: &P) -> Option<Decomposition> {
    let primes = sieve.primes();
    for (i, p) in primes.iter().copied().map(u64::from).enumerate() {
        if u128::from(p) * 3 > u128::from(m) {
            break;
        }
        for q in primes[i + 1..].iter().copied().map(u64::from) {
            let Some(r) = m.checked_sub(p + q) else {
                break;
            };
            if r < q {
                break;
            }
            if r != p && r != q && oracle.is_prime(r) {
                return Some(Decomposition::Triple { p, q, r });
            }
        }
    }
    None
}
