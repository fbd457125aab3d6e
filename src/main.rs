use std::{fs::File, io, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use palindromy::{Config, Palindromy, input};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "palindromy",
    version,
    about = "Check whether text reads the same forward and backward"
)]
struct Cli {
    /// Texts to check. Standard input is read when none are given.
    text: Vec<String>,

    /// Read the text from a file instead of standard input
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Check every input line separately
    #[arg(long)]
    lines: bool,

    /// Compare whitespace instead of skipping it
    #[arg(long)]
    keep_whitespace: bool,

    /// Compare accented letters verbatim
    #[arg(long)]
    keep_diacritics: bool,

    /// Compare letter case
    #[arg(long)]
    case_sensitive: bool,

    /// Compare punctuation instead of skipping it
    #[arg(long)]
    keep_punctuation: bool,

    /// Characters treated as punctuation (default: POSIX [:punct:])
    #[arg(long, value_name = "CHARS")]
    punctuation: Option<String>,

    /// Treat empty standard input as not a palindrome
    #[arg(long)]
    reject_null: bool,

    /// Do not short-circuit empty text
    #[arg(long)]
    reject_blank: bool,

    /// Print nothing; report through the exit status only
    #[arg(short, long)]
    quiet: bool,

    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::default()
            .with_skip_whitespace(!self.keep_whitespace)
            .with_remove_diacritics(!self.keep_diacritics)
            .with_case_insensitive(!self.case_sensitive)
            .with_remove_punctuation(!self.keep_punctuation)
            .with_null_okay(!self.reject_null)
            .with_blank_string_okay(!self.reject_blank);
        if let Some(marks) = &self.punctuation {
            config = config.with_punctuation_marks(marks.as_str());
        }
        config
    }

    /// Every text to check, in order. `None` is the absent input.
    fn texts(&self) -> Result<Vec<Option<String>>> {
        if !self.text.is_empty() {
            return Ok(self.text.iter().cloned().map(Some).collect());
        }
        match &self.file {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open {}", path.display()))?;
                self.read(file)
                    .with_context(|| format!("cannot read {}", path.display()))
            }
            None => self.read(io::stdin().lock()).context("cannot read standard input"),
        }
    }

    fn read<R: io::Read>(&self, reader: R) -> Result<Vec<Option<String>>, input::InputError> {
        if self.lines {
            Ok(match input::read_lines(reader)? {
                Some(lines) => lines.into_iter().map(Some).collect(),
                None => vec![None],
            })
        } else {
            Ok(vec![input::read_text(reader)?])
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn run(cli: &Cli) -> Result<bool> {
    let checker = Palindromy::new(cli.config());
    tracing::debug!(config = ?checker.config(), "policy");

    let mut all = true;
    for text in cli.texts()? {
        let verdict = checker.check(text.as_deref());
        all &= verdict;
        if !cli.quiet {
            println!("{verdict}");
        }
    }
    Ok(all)
}

/// 0: every text is a palindrome, 1: at least one is not, 2: input error.
fn exit_status(outcome: &Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = run(&cli);
    if let Err(e) = &outcome {
        eprintln!("palindromy: {e:#}");
    }
    ExitCode::from(exit_status(&outcome))
}
