use anyhow::bail;
use clap::Parser;
use cubeprime::{SMALL_PRIME_BOUND, SIEVE_LIMIT, default_workers};
use std::path::PathBuf;

/// Runtime configuration for the `cubeprime` binary.
///
/// Every flag is optional. Range endpoints that are not supplied here are
/// prompted for on standard input, so running the binary bare reproduces the
/// interactive workflow.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "cubeprime",
    version,
    about = "Writes each cube n^3 in a range as a sum of three distinct primes"
)]
pub struct CliArgs {
    /// First n to search (inclusive).
    ///
    /// Must lie in 3..=2642245. Prompted for when absent.
    ///
    /// Environment variable: `CUBEPRIME_START`
    #[arg(long, env = "CUBEPRIME_START")]
    pub start: Option<String>,

    /// Last n to search (inclusive).
    ///
    /// Must lie in start..=2642245. Prompted for when absent.
    ///
    /// Environment variable: `CUBEPRIME_END`
    #[arg(long, env = "CUBEPRIME_END")]
    pub end: Option<String>,

    /// Number of worker threads.
    ///
    /// Defaults to the available hardware parallelism, with a minimum of two.
    ///
    /// Environment variable: `NUM_WORKERS`
    #[arg(long, env = "NUM_WORKERS")]
    pub workers: Option<usize>,

    /// File the sorted result lines are written to.
    ///
    /// Environment variable: `OUTPUT_PATH`
    #[arg(short, long, env = "OUTPUT_PATH", default_value = "results.txt")]
    pub output: PathBuf,

    /// Inclusive upper bound of the prime sieve.
    ///
    /// Must be at least 10,000,000 so small primality checks stay inside the
    /// sieve. Larger values trade memory for more candidate primes.
    ///
    /// Environment variable: `SIEVE_LIMIT`
    #[arg(long, env = "SIEVE_LIMIT", default_value_t = SIEVE_LIMIT)]
    pub sieve_limit: u32,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub start: Option<String>,
    pub end: Option<String>,
    pub workers: usize,
    pub output: PathBuf,
    pub sieve_limit: u32,
}

impl TryFrom<CliArgs> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let workers = match args.workers {
            Some(0) => bail!("NUM_WORKERS must be greater than 0"),
            Some(workers) => workers,
            None => default_workers(),
        };

        if u64::from(args.sieve_limit) < SMALL_PRIME_BOUND {
            bail!(
                "SIEVE_LIMIT ({}) must be at least {}",
                args.sieve_limit,
                SMALL_PRIME_BOUND
            );
        }

        if args.output.as_os_str().is_empty() {
            bail!("OUTPUT_PATH must not be empty");
        }

        Ok(Self {
            start: args.start,
            end: args.end,
            workers,
            output: args.output,
            sieve_limit: args.sieve_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<RunConfig> {
        let argv = core::iter::once("cubeprime").chain(args.iter().copied());
        let args = CliArgs::try_parse_from(argv)?;
        RunConfig::try_from(args)
    }

    #[test]
    fn defaults_match_interactive_run() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.output, PathBuf::from("results.txt"));
        assert_eq!(config.sieve_limit, SIEVE_LIMIT);
        assert!(config.workers >= 2);
        assert_eq!((config.start, config.end), (None, None));
    }

    #[test]
    fn accepts_explicit_values() {
        let config = parse(&[
            "--start", "3", "--end", "9", "--workers", "1", "-o", "out.txt",
        ])
        .unwrap();
        assert_eq!(config.start.as_deref(), Some("3"));
        assert_eq!(config.end.as_deref(), Some("9"));
        assert_eq!(config.workers, 1);
        assert_eq!(config.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn rejects_zero_workers() {
        assert!(parse(&["--workers", "0"]).is_err());
    }

    #[test]
    fn rejects_small_sieve() {
        assert!(parse(&["--sieve-limit", "9999999"]).is_err());
        assert!(parse(&["--sieve-limit", "10000000"]).is_ok());
    }
}
