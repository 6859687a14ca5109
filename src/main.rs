//! StringSearch - command line entrypoint.
//!
//! Loads configuration, initializes logging, and runs one search algorithm
//! over a text read from a file, the command line, or standard input.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use stringsearch_lib::algorithms::{Algorithm, Match, Matcher, Symbol};
use stringsearch_lib::config::{
    AlgorithmKind, ConfigLoader, LogConfig, SearchConfig, SearchSettings, SymbolMode, Validate,
    ENV_PREFIX,
};
use stringsearch_lib::error::{AppError, AppResult, ErrorContext, ErrorReporter, TracingErrorReporter};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "stringsearch", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Search a text for a pattern
    Search(SearchArgs),

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Arguments of the `search` subcommand. Unset options fall back to the configuration.
#[derive(clap::Args, Debug)]
struct SearchArgs {
    /// Pattern to search for
    #[clap(short, long)]
    pattern: String,

    /// Read the text from this file
    #[clap(short, long, value_parser, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Search this text (standard input is read when neither --text nor --file is given)
    #[clap(short, long)]
    text: Option<String>,

    /// First offset of the search window
    #[clap(long)]
    start: Option<usize>,

    /// End of the search window (exclusive)
    #[clap(long)]
    end: Option<usize>,

    /// Algorithm to run
    #[clap(short, long, value_enum)]
    algorithm: Option<AlgorithmKind>,

    /// Substitutions tolerated by shift-or
    #[clap(short = 'k', long)]
    mismatches: Option<usize>,

    /// Wildcard symbol for the wildcard algorithms
    #[clap(short, long)]
    wildcard: Option<char>,

    /// Search raw bytes or decoded characters
    #[clap(long, value_enum)]
    symbols: Option<SymbolMode>,

    /// Report every non-overlapping match instead of the first
    #[clap(long)]
    all: bool,

    /// Print the result as JSON
    #[clap(long)]
    json: bool,
}

impl SearchArgs {
    /// Applies command line overrides on top of the configured settings.
    fn settings(&self, configured: &SearchSettings) -> SearchSettings {
        SearchSettings {
            algorithm: self.algorithm.unwrap_or(configured.algorithm),
            wildcard: self.wildcard.unwrap_or(configured.wildcard),
            max_mismatches: self.mismatches.unwrap_or(configured.max_mismatches),
            symbols: self.symbols.unwrap_or(configured.symbols),
        }
    }

    fn read_text(&self) -> AppResult<Vec<u8>> {
        match (&self.file, &self.text) {
            (Some(path), _) => Ok(std::fs::read(path)?),
            (None, Some(text)) => Ok(text.clone().into_bytes()),
            (None, None) => {
                let mut text = Vec::new();
                std::io::stdin().read_to_end(&mut text)?;
                Ok(text)
            }
        }
    }
}

/// JSON form of a search result.
#[derive(Serialize, Debug)]
struct SearchReport {
    algorithm: String,
    symbols: SymbolMode,
    matches: Vec<MatchRecord>,
}

#[derive(Serialize, Debug)]
struct MatchRecord {
    position: usize,
    mismatches: usize,
}

impl From<Match> for MatchRecord {
    fn from(found: Match) -> Self {
        Self {
            position: found.position,
            mismatches: found.mismatches,
        }
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// search results on stdout stay machine readable.
fn init_logging(log: &LogConfig) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| AppError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Runs the matcher over `text[start..end]`.
fn collect_matches<S: Symbol>(
    algorithm: Algorithm,
    text: &[S],
    pattern: &[S],
    start: Option<usize>,
    end: Option<usize>,
    all: bool,
) -> AppResult<Vec<Match>> {
    let matcher = Matcher::new(algorithm, pattern)?;
    let start = start.unwrap_or(0);
    let end = end.unwrap_or(text.len());

    // Also rejects windows outside the text.
    let first = matcher.find_in(text, start, end)?;
    if !all {
        return Ok(first.into_iter().collect());
    }

    Ok(matcher
        .find_iter(&text[start..end])
        .map(|found| Match::new(found.position + start, found.mismatches))
        .collect())
}

/// Executes the `search` subcommand. Returns whether anything matched.
fn search(args: &SearchArgs, config: &SearchConfig) -> AppResult<bool> {
    let settings = args.settings(&config.search);
    settings.validate()?;
    let algorithm = settings.algorithm();

    let text = args.read_text()?;
    info!(%algorithm, symbols = %settings.symbols, text_len = text.len(), "Searching");

    let matches = match settings.symbols {
        SymbolMode::Bytes => collect_matches(
            algorithm,
            &text,
            args.pattern.as_bytes(),
            args.start,
            args.end,
            args.all,
        )?,
        SymbolMode::Chars => {
            let text = String::from_utf8(text)
                .map_err(|e| AppError::Custom(format!("Text is not valid UTF-8: {e}")))?;
            let text: Vec<char> = text.chars().collect();
            let pattern: Vec<char> = args.pattern.chars().collect();
            collect_matches(algorithm, &text, &pattern, args.start, args.end, args.all)?
        }
    };

    let found = !matches.is_empty();
    if args.json {
        let report = SearchReport {
            algorithm: algorithm.to_string(),
            symbols: settings.symbols,
            matches: matches.into_iter().map(MatchRecord::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for found in matches {
            if algorithm.max_mismatches() > 0 {
                println!("{}\t{}", found.position, found.mismatches);
            } else {
                println!("{}", found.position);
            }
        }
    }

    Ok(found)
}

fn run(command: &Command, config: AppResult<SearchConfig>) -> AppResult<ExitCode> {
    match command {
        Command::Search(args) => {
            let config = config?;
            if search(args, &config)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(1))
            }
        }
        Command::Validate => {
            info!("Validating configuration");
            config?;
            println!("Configuration is valid");
            Ok(ExitCode::SUCCESS)
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = SearchConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| AppError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Main entry point for the application.
///
/// Exits with 0 when a search matched (or another command succeeded), 1 when
/// a search found nothing, and 2 on errors.
fn main() -> ExitCode {
    let args = Args::parse();

    let config = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX)
        .load()
        .map_err(AppError::from);

    // Log with defaults when the configuration itself is broken.
    let log = config
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
        return ExitCode::from(2);
    }

    match run(&args.command, config) {
        Ok(code) => code,
        Err(error) => {
            TracingErrorReporter.report(&ErrorContext::new(error, "stringsearch"));
            ExitCode::from(2)
        }
    }
}
