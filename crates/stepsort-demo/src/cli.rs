#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually to keep the binary lean. Environment variables with
//! the `STEPSORT_` prefix provide defaults; explicit flags override them.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use stepsort_core::algorithm::AlgorithmKind;
use stepsort_core::config::DEFAULT_LEN;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
stepsort - watch sorting algorithms one comparison at a time

USAGE:
    stepsort-demo [OPTIONS]

OPTIONS:
    --algorithm=N        Start with algorithm N, 1-5 (default: 1)
    --bars=N             Number of bars (default: 150)
    --delay-ms=N         Delay after each step in milliseconds (default: 0)
    --seed=N             Seed for data generation and shuffling
    --exit-after-ms=N    Quit automatically after N milliseconds
    --log-file=PATH      Write tracing output to PATH
    --help, -h           Show this help message
    --version, -V        Show version

ALGORITHMS:
    1  Bubble Sort
    2  Selection Sort
    3  Insertion Sort
    4  Quick Sort
    5  Merge Sort

KEYBINDINGS:
    1-5             Switch algorithm with fresh data
    r               Reshuffle the current bars in place
    Up / Down       Less / more delay per step
    q / Esc         Quit

ENVIRONMENT VARIABLES:
    STEPSORT_ALGORITHM       Override --algorithm
    STEPSORT_BARS            Override --bars
    STEPSORT_DELAY_MS        Override --delay-ms
    STEPSORT_SEED            Override --seed
    STEPSORT_EXIT_AFTER_MS   Override --exit-after-ms
    STEPSORT_LOG_FILE        Override --log-file
    STEPSORT_LOG             Log filter directive (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Algorithm to start with.
    pub algorithm: AlgorithmKind,
    /// Number of bars.
    pub bars: usize,
    /// Initial pacing delay in milliseconds.
    pub delay_ms: u64,
    /// Fixed seed; `None` derives one from the wall clock.
    pub seed: Option<u64>,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
    /// Tracing output file.
    pub log_file: Option<PathBuf>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmKind::BubbleSort,
            bars: DEFAULT_LEN,
            delay_ms: 0,
            seed: None,
            exit_after_ms: 0,
            log_file: None,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Opts),
    Help,
    Version,
}

/// Rejected command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    InvalidValue { flag: &'static str, value: String },
    UnknownArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl Opts {
    /// Parse process arguments and environment, exiting on help, version or
    /// error.
    pub fn parse() -> Self {
        match Self::parse_from(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(Parsed::Run(opts)) => opts,
            Ok(Parsed::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Parsed::Version) => {
                println!("stepsort-demo {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("{err}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` with `lookup` standing in for the environment.
    ///
    /// Malformed environment values are ignored; malformed flags are errors.
    pub fn parse_from<I, S, F>(args: I, lookup: F) -> Result<Parsed, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(kind) = lookup("STEPSORT_ALGORITHM").and_then(|v| parse_algorithm(&v)) {
            opts.algorithm = kind;
        }
        if let Some(n) = lookup("STEPSORT_BARS").and_then(|v| v.parse().ok()) {
            opts.bars = n;
        }
        if let Some(n) = lookup("STEPSORT_DELAY_MS").and_then(|v| v.parse().ok()) {
            opts.delay_ms = n;
        }
        if let Some(n) = lookup("STEPSORT_SEED").and_then(|v| v.parse().ok()) {
            opts.seed = Some(n);
        }
        if let Some(n) = lookup("STEPSORT_EXIT_AFTER_MS").and_then(|v| v.parse().ok()) {
            opts.exit_after_ms = n;
        }
        if let Some(path) = lookup("STEPSORT_LOG_FILE").filter(|v| !v.is_empty()) {
            opts.log_file = Some(PathBuf::from(path));
        }

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Ok(Parsed::Help),
                "--version" | "-V" => return Ok(Parsed::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--algorithm=") {
                        let kind = parse_algorithm(val);
                        opts.algorithm = kind.ok_or_else(|| invalid("--algorithm", val))?;
                    } else if let Some(val) = other.strip_prefix("--bars=") {
                        opts.bars = val.parse().map_err(|_| invalid("--bars", val))?;
                    } else if let Some(val) = other.strip_prefix("--delay-ms=") {
                        opts.delay_ms = val.parse().map_err(|_| invalid("--delay-ms", val))?;
                    } else if let Some(val) = other.strip_prefix("--seed=") {
                        opts.seed = Some(val.parse().map_err(|_| invalid("--seed", val))?);
                    } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                        opts.exit_after_ms =
                            val.parse().map_err(|_| invalid("--exit-after-ms", val))?;
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        opts.log_file = Some(PathBuf::from(val));
                    } else {
                        return Err(CliError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        Ok(Parsed::Run(opts))
    }
}

fn parse_algorithm(value: &str) -> Option<AlgorithmKind> {
    let number = value.parse::<u8>().ok()?;
    AlgorithmKind::from_number(number)
}

fn invalid(flag: &'static str, value: &str) -> CliError {
    CliError::InvalidValue {
        flag,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn run(args: &[&str]) -> Opts {
        match Opts::parse_from(args, no_env).unwrap() {
            Parsed::Run(opts) => opts,
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.algorithm, AlgorithmKind::BubbleSort);
        assert_eq!(opts.bars, 150);
        assert_eq!(opts.delay_ms, 0);
        assert_eq!(opts.seed, None);
        assert_eq!(opts.exit_after_ms, 0);
    }

    #[test]
    fn flags_are_parsed() {
        let opts = run(&[
            "--algorithm=4",
            "--bars=32",
            "--delay-ms=5",
            "--seed=77",
            "--log-file=/tmp/sort.log",
        ]);
        assert_eq!(opts.algorithm, AlgorithmKind::QuickSort);
        assert_eq!(opts.bars, 32);
        assert_eq!(opts.delay_ms, 5);
        assert_eq!(opts.seed, Some(77));
        assert_eq!(opts.log_file, Some(PathBuf::from("/tmp/sort.log")));
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            "STEPSORT_BARS" => Some("20".to_string()),
            "STEPSORT_ALGORITHM" => Some("5".to_string()),
            _ => None,
        };
        let Parsed::Run(opts) = Opts::parse_from(["--bars=10"], env).unwrap() else {
            panic!("expected Run");
        };
        assert_eq!(opts.bars, 10);
        assert_eq!(opts.algorithm, AlgorithmKind::MergeSort);
    }

    #[test]
    fn malformed_environment_is_ignored() {
        let env = |key: &str| (key == "STEPSORT_DELAY_MS").then(|| "soon".to_string());
        let Parsed::Run(opts) = Opts::parse_from(Vec::<String>::new(), env).unwrap() else {
            panic!("expected Run");
        };
        assert_eq!(opts.delay_ms, 0);
    }

    #[test]
    fn out_of_range_algorithm_is_an_error() {
        let err = Opts::parse_from(["--algorithm=6"], no_env).unwrap_err();
        assert_eq!(
            err,
            CliError::InvalidValue {
                flag: "--algorithm",
                value: "6".to_string()
            }
        );
    }

    #[test]
    fn unknown_argument_is_an_error() {
        let err = Opts::parse_from(["--turbo"], no_env).unwrap_err();
        assert_eq!(err.to_string(), "Unknown argument: --turbo");
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(
            Opts::parse_from(["-h", "--bogus"], no_env),
            Ok(Parsed::Help)
        );
        assert_eq!(Opts::parse_from(["--version"], no_env), Ok(Parsed::Version));
    }

    #[test]
    fn help_lists_every_algorithm() {
        for kind in AlgorithmKind::ALL {
            assert!(
                HELP_TEXT.contains(&format!("{}  {}", kind.number(), kind.name())),
                "{kind} missing from help"
            );
        }
    }
}
