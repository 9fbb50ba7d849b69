//! Command-line arguments for the quote-of-the-day client.
//!
//! The tool takes no options of its own; `clap` only supplies `--help` and
//! `--version`. Parse errors are ignored so that stray arguments never turn
//! into a non-zero exit.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, ignore_errors = true)]
pub struct Args {}
