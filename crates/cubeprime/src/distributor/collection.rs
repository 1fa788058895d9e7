use crate::{Result, ResultLine};
use std::io;

/// Every [`ResultLine`] of a run, sorted ascending by `n`.
///
/// Built once all workers have merged their buffers; it is the artifact
/// handed to output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultCollection {
    lines: Vec<ResultLine>,
}

impl ResultCollection {
    /// Sorts `lines` by `n` and wraps them.
    pub fn from_unsorted(mut lines: Vec<ResultLine>) -> Self {
        lines.sort_unstable_by_key(ResultLine::n);
        Self { lines }
    }

    /// Parses newline-delimited result text, e.g. a previously written
    /// results file. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidResultLine`] for the first line that does not
    /// parse.
    ///
    /// [`Error::InvalidResultLine`]: crate::Error::InvalidResultLine
    pub fn parse(text: &str) -> Result<Self> {
        let lines = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::parse::<ResultLine>)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_unsorted(lines))
    }

    pub fn lines(&self) -> &[ResultLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of values with a decomposition.
    pub fn found(&self) -> usize {
        self.lines.iter().filter(|line| line.is_found()).count()
    }

    /// Number of values reported as `NO REPRESENTATION FOUND`.
    pub fn not_found(&self) -> usize {
        self.len() - self.found()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ResultLine> {
        self.lines.iter()
    }

    /// Writes one rendered line per value, each terminated by `\n`.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

impl FromIterator<ResultLine> for ResultCollection {
    fn from_iter<I: IntoIterator<Item = ResultLine>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl IntoIterator for ResultCollection {
    type Item = ResultLine;
    type IntoIter = std::vec::IntoIter<ResultLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultCollection {
    type Item = &'a ResultLine;
    type IntoIter = core::slice::Iter<'a, ResultLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decomposition, Error};

    fn sample() -> ResultCollection {
        [
            ResultLine::found(4, 64, Decomposition::WithTwo { p: 3, q: 59 }),
            ResultLine::not_found(5, 125),
            ResultLine::found(3, 27, Decomposition::Triple { p: 3, q: 5, r: 19 }),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn sorts_by_n() {
        let ns: Vec<_> = sample().iter().map(ResultLine::n).collect();
        assert_eq!(ns, vec![3, 4, 5]);
    }

    #[test]
    fn counts_outcomes() {
        let collection = sample();
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.found(), 2);
        assert_eq!(collection.not_found(), 1);
    }

    #[test]
    fn writes_newline_terminated_lines() {
        let mut out = Vec::new();
        sample().write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "3^3 = 27 = 3 + 5 + 19\n\
             4^3 = 64 = 2 + 3 + 59\n\
             5^3 = 125: NO REPRESENTATION FOUND\n"
        );
    }

    #[test]
    fn parses_written_output() {
        let mut out = Vec::new();
        sample().write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(ResultCollection::parse(&text).unwrap(), sample());
        assert!(ResultCollection::parse("\n\n").unwrap().is_empty());
    }

    #[test]
    fn parse_reports_the_bad_line() {
        assert_eq!(
            ResultCollection::parse("3^3 = 27 = 3 + 5 + 19\ngarbage\n"),
            Err(Error::InvalidResultLine {
                line: "garbage".to_owned()
            })
        );
    }
}
