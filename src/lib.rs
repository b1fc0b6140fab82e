//! Hexcast library crate
//!
//! This crate provides the core functionality for the `hexcast` CLI, which
//! turns hex byte tokens (`48 65 6c 6c 6f`) into a `\x`-escaped byte string
//! and the UTF-8 text those bytes spell. It is organized into small modules:
//! `normalize` (token cleanup and blob building), `decode` (blob → bytes →
//! text), `error` (the shared error type) and `clipboard` (cross-platform
//! clipboard helper). The binary `src/main.rs` calls `hexcast_lib::run()`.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `execute()` — run a parsed [`Cli`] against any writer (used by tests).
//! - `convert()` / `write_report()` — the conversion and its printed form.

pub mod clipboard;
pub mod decode;
pub mod error;
pub mod normalize;

use std::io::{self, IsTerminal, Write};

use base64::{Engine as _, engine::general_purpose};
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::clipboard::copy_text;
use crate::decode::decode;
pub use crate::error::ConvertError;
use crate::normalize::normalize;

/// Command-line arguments. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Hex byte tokens, one byte each (`48`, `6c,` and `f` are all accepted)
    pub tokens: Vec<String>,

    /// Copy the decoded text to the clipboard
    #[arg(long = "clipboard", action = ArgAction::SetTrue)]
    pub clipboard: bool,

    /// Also print the raw bytes as base64
    #[arg(long = "base64", action = ArgAction::SetTrue)]
    pub base64: bool,

    /// Fail instead of printing empty output when no tokens are given
    #[arg(long = "require-input", action = ArgAction::SetTrue)]
    pub require_input: bool,

    /// Log each conversion step to stderr (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,
}

/// The normalized blob together with what it decodes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub blob: String,
    pub bytes: Vec<u8>,
    pub text: String,
}

/// Extra lines appended after the decoded text.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportOptions {
    pub base64: bool,
}

/// Normalize `tokens` into a blob and decode it.
///
/// Nothing is printed here, so a failure leaves no partial output behind.
///
/// # Errors
/// [`ConvertError::MalformedHex`] or [`ConvertError::InvalidEncoding`] from
/// the decode step.
pub fn convert<S: AsRef<str>>(tokens: &[S]) -> Result<Conversion, ConvertError> {
    let blob = normalize(tokens);
    debug!(tokens = tokens.len(), blob = %blob, "normalized tokens");
    let decoded = decode(&blob)?;
    debug!(text = %decoded.text, "decoded text");
    Ok(Conversion {
        blob,
        bytes: decoded.bytes,
        text: decoded.text,
    })
}

/// Print the blob, an empty line and the decoded text, plus any extra lines
/// requested in `opts`.
pub fn write_report<W: Write>(
    conversion: &Conversion,
    opts: &ReportOptions,
    out: &mut W,
) -> Result<(), ConvertError> {
    writeln!(out, "{}", conversion.blob)?;
    writeln!(out)?;
    writeln!(out, "{}", conversion.text)?;
    if opts.base64 {
        writeln!(out, "{}", general_purpose::STANDARD.encode(&conversion.bytes))?;
    }
    out.flush()?;
    Ok(())
}

/// Convert and report according to the parsed `cli`, writing to `out`.
///
/// A clipboard failure is printed as a warning and does not fail the call.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<Conversion, ConvertError> {
    if cli.require_input && cli.tokens.is_empty() {
        return Err(ConvertError::Usage("no hex tokens given".into()));
    }

    let conversion = convert(&cli.tokens)?;
    write_report(&conversion, &ReportOptions { base64: cli.base64 }, out)?;

    if cli.clipboard && let Err(e) = copy_text(&conversion.text) {
        eprintln!("warning: failed to copy to clipboard: {}", e);
    }
    Ok(conversion)
}

/// Run the Hexcast CLI.
///
/// Parses arguments, sets up logging on stderr and prints the report to
/// stdout. Errors are printed to stderr as `error: ...` and the process exits
/// with code 1; clap handles bad flags itself (exit code 2).
///
/// ```no_run
/// hexcast_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = execute(&cli, &mut out) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .try_init();
}
