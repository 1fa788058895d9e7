use crate::{Error, Result};
use core::{fmt, str::FromStr};

const NOT_FOUND: &str = "NO REPRESENTATION FOUND";

/// Three pairwise-distinct primes summing to a cube.
///
/// The variant records which search phase produced it, which also fixes how
/// the addends are ordered when rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decomposition {
    /// `2 + p + q` with `2 < p < q`, found by the even-cube shortcut.
    WithTwo {
        p: u64,
        q: u64,
    },
    /// `p + q + r` with `p < q < r`, found by the general pair search.
    Triple {
        p: u64,
        q: u64,
        r: u64,
    },
}

impl Decomposition {
    /// The three addends in rendering order.
    pub const fn addends(&self) -> [u64; 3] {
        match *self {
            Self::WithTwo { p, q } => [2, p, q],
            Self::Triple { p, q, r } => [p, q, r],
        }
    }

    /// Sum of the addends, widened so malformed input cannot overflow.
    pub fn sum(&self) -> u128 {
        self.addends().iter().copied().map(u128::from).sum()
    }

    fn from_addends([a, b, c]: [u64; 3]) -> Self {
        if a == 2 {
            Self::WithTwo { p: b, q: c }
        } else {
            Self::Triple { p: a, q: b, r: c }
        }
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.addends();
        write!(f, "{a} + {b} + {c}")
    }
}

/// The outcome of searching a single `n`.
///
/// Renders as either
///
/// ```text
/// <n>^3 = <n³> = <a> + <b> + <c>
/// <n>^3 = <n³>: NO REPRESENTATION FOUND
/// ```
///
/// and parses back from the same text via [`FromStr`].
///
/// # Example
///
/// ```
/// use cubeprime::{Decomposition, ResultLine};
///
/// let line = ResultLine::found(4, 64, Decomposition::WithTwo { p: 3, q: 59 });
/// assert_eq!(line.to_string(), "4^3 = 64 = 2 + 3 + 59");
/// assert_eq!("4^3 = 64 = 2 + 3 + 59".parse::<ResultLine>().unwrap(), line);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResultLine {
    n: u64,
    cube: u64,
    decomposition: Option<Decomposition>,
}

impl ResultLine {
    pub const fn found(n: u64, cube: u64, decomposition: Decomposition) -> Self {
        Self {
            n,
            cube,
            decomposition: Some(decomposition),
        }
    }

    pub const fn not_found(n: u64, cube: u64) -> Self {
        Self {
            n,
            cube,
            decomposition: None,
        }
    }

    /// The searched value; the sort key of a result collection.
    pub const fn n(&self) -> u64 {
        self.n
    }

    pub const fn cube(&self) -> u64 {
        self.cube
    }

    pub const fn decomposition(&self) -> Option<Decomposition> {
        self.decomposition
    }

    pub const fn is_found(&self) -> bool {
        self.decomposition.is_some()
    }
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.decomposition {
            Some(decomposition) => write!(f, "{}^3 = {} = {decomposition}", self.n, self.cube),
            None => write!(f, "{}^3 = {}: {NOT_FOUND}", self.n, self.cube),
        }
    }
}

impl FromStr for ResultLine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::InvalidResultLine { line: s.to_owned() };
        let number = |text: &str| text.trim().parse::<u64>().map_err(|_| malformed());

        let (n, rest) = s.split_once("^3 = ").ok_or_else(malformed)?;
        let n = number(n)?;

        if let Some(cube) = rest.strip_suffix(NOT_FOUND) {
            let cube = cube.strip_suffix(": ").ok_or_else(malformed)?;
            return Ok(Self::not_found(n, number(cube)?));
        }

        let (cube, sum) = rest.split_once(" = ").ok_or_else(malformed)?;
        let mut addends = [0_u64; 3];
        let mut parts = sum.split(" + ");
        for slot in &mut addends {
            *slot = number(parts.next().ok_or_else(malformed)?)?;
        }
        if parts.next().is_some() {
            return Err(malformed());
        }

        Ok(Self::found(
            n,
            number(cube)?,
            Decomposition::from_addends(addends),
        ))
    }
}
