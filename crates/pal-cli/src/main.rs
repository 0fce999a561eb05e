use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;

use pal_core::{ValidationResult, Verdict};

const EXIT_OK: i32 = 0;
const EXIT_NEGATIVE: i32 = 1;
const EXIT_ERROR: i32 = 2;

/// pal - Unicode palindrome validator
///
/// Ignores letter case, punctuation, whitespace and diacritics.
#[derive(Parser)]
#[command(name = "pal", version, about, long_about = None)]
struct Cli {
    /// Suppress output; report through the exit code only
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Emit debug logs on stderr (overrides PAL_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate phrases (argument, one per line of --file, or stdin)
    Validate {
        /// Phrase to validate
        phrase: Option<String>,
        /// Read one phrase per line from a file
        #[arg(long, conflicts_with = "phrase")]
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical comparison form of phrases
    Normalize {
        /// Phrase to normalize
        phrase: Option<String>,
        /// Read one phrase per line from a file
        #[arg(long, conflicts_with = "phrase")]
        file: Option<PathBuf>,
    },

    /// Run only the symmetry check on already-canonical text
    Check {
        /// Canonical text, compared codepoint by codepoint as given
        canonical: String,
    },

    /// Show version information
    Version,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("{path}: {source}")]
    Decode {
        path: String,
        source: pal_core::Error,
    },

    #[error("no phrases found in {0}")]
    NoPhrases(String),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            EXIT_ERROR
        }
    };

    process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("PAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<i32, CliError> {
    let quiet = cli.quiet;
    match cli.command {
        Commands::Validate { phrase, file, json } => {
            let phrases = read_phrases(phrase, file.as_deref())?;
            let results: Vec<ValidationResult> =
                phrases.iter().map(|p| pal_core::validate(p)).collect();
            tracing::debug!(count = results.len(), "validated input");

            if !quiet {
                if json {
                    print_json(&phrases, &results);
                } else {
                    for result in &results {
                        println!("{}: {}", paint(result.verdict()), result.canonical());
                    }
                }
            }

            if results.iter().all(ValidationResult::is_palindrome) {
                Ok(EXIT_OK)
            } else {
                Ok(EXIT_NEGATIVE)
            }
        }
        Commands::Normalize { phrase, file } => {
            let phrases = read_phrases(phrase, file.as_deref())?;
            if !quiet {
                for phrase in &phrases {
                    println!("{}", pal_core::normalize(phrase));
                }
            }
            Ok(EXIT_OK)
        }
        Commands::Check { canonical } => {
            if canonical.is_empty() {
                if !quiet {
                    println!("{}", paint(Verdict::Empty));
                }
                return Ok(EXIT_NEGATIVE);
            }
            match pal_core::first_mismatch(&canonical) {
                None => {
                    if !quiet {
                        println!("{}", "symmetric".green());
                    }
                    Ok(EXIT_OK)
                }
                Some(mismatch) => {
                    if !quiet {
                        println!("{}: {}", "asymmetric".red(), mismatch);
                    }
                    Ok(EXIT_NEGATIVE)
                }
            }
        }
        Commands::Version => {
            if !quiet {
                println!("pal {}", env!("CARGO_PKG_VERSION"));
            }
            Ok(EXIT_OK)
        }
    }
}

// ── Input ─────────────────────────────────────────────────

/// Collect phrases from the argument, a file (one per non-blank line), or stdin
fn read_phrases(phrase: Option<String>, file: Option<&Path>) -> Result<Vec<String>, CliError> {
    if let Some(phrase) = phrase {
        return Ok(vec![phrase]);
    }

    match file {
        Some(path) => {
            let label = path.display().to_string();
            let bytes = fs::read(path).map_err(|source| CliError::Io {
                path: label.clone(),
                source,
            })?;
            let text = decode(&bytes, &label)?;
            let phrases: Vec<String> = text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_owned)
                .collect();
            if phrases.is_empty() {
                return Err(CliError::NoPhrases(label));
            }
            Ok(phrases)
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|source| CliError::Io {
                    path: "stdin".into(),
                    source,
                })?;
            let text = decode(&bytes, "stdin")?;
            Ok(vec![text.trim_end_matches(|c| c == '\n' || c == '\r').to_owned()])
        }
    }
}

fn decode<'a>(bytes: &'a [u8], label: &str) -> Result<&'a str, CliError> {
    std::str::from_utf8(bytes).map_err(|e| CliError::Decode {
        path: label.to_owned(),
        source: e.into(),
    })
}

// ── Output ────────────────────────────────────────────────

fn paint(verdict: Verdict) -> colored::ColoredString {
    let text = verdict.to_string();
    match verdict {
        Verdict::Palindrome => text.green(),
        Verdict::NotPalindrome => text.red(),
        Verdict::Empty => text.yellow(),
    }
}

fn print_json(phrases: &[String], results: &[ValidationResult]) {
    let entries: Vec<serde_json::Value> = phrases
        .iter()
        .zip(results)
        .map(|(phrase, result)| {
            serde_json::json!({
                "phrase": phrase,
                "palindrome": result.is_palindrome(),
                "canonical": result.canonical(),
                "verdict": result.verdict(),
            })
        })
        .collect();

    let output = match entries.as_slice() {
        [single] => single.clone(),
        _ => serde_json::Value::Array(entries),
    };
    println!("{}", output);
}
