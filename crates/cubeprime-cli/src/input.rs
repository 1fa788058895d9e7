//! Reads the search range, prompting for any endpoint not given on the command
//! line.

use crate::config::RunConfig;
use anyhow::Context;
use cubeprime::{MAX_N, MIN_N, SearchRange, parse_endpoint};
use std::io::{BufRead, Write};

/// Resolves and validates the range.
///
/// The start is validated before the end is requested, so a bad start never
/// leads to a second prompt.
pub fn read_range<R, W>(
    config: &RunConfig,
    input: &mut R,
    prompt: &mut W,
) -> anyhow::Result<SearchRange>
where
    R: BufRead,
    W: Write,
{
    let start = match &config.start {
        Some(start) => start.clone(),
        None => ask(input, prompt, &format!("start n ({MIN_N}-{MAX_N}): "))?,
    };
    let start = SearchRange::check_start(parse_endpoint("start n", &start)?)?;

    let end = match &config.end {
        Some(end) => end.clone(),
        None => ask(input, prompt, &format!("end n ({start}-{MAX_N}): "))?,
    };
    let end = parse_endpoint("end n", &end)?;

    Ok(SearchRange::new(start, end)?)
}

fn ask<R, W>(input: &mut R, prompt: &mut W, question: &str) -> anyhow::Result<String>
where
    R: BufRead,
    W: Write,
{
    prompt.write_all(question.as_bytes())?;
    prompt.flush()?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read from standard input")?;
    Ok(line)
}
