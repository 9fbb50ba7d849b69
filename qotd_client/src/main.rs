//! Quote of the day — fetches a single quote from ZenQuotes and prints it as
//! `"<quote> - <author>"`. If the provider is slow, unreachable, or returns
//! anything unexpected, a fixed fallback quote is printed instead.
//!
//! Usage example (CLI):
//! ```bash
//! qotd
//! RUST_LOG=debug qotd   # show why the fallback was used
//! ```
//!
//! Exactly one line is written to stdout and the exit code is always 0.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::debug;
use qotd_common::fetch_quote_of_day;
use std::io::{self, Write};
use std::panic;

fn main() {
    init_logger();
    // A panic during the fetch is already turned into the fallback line.
    panic::set_hook(Box::new(|info| debug!("{}", info)));
    let _args = Args::parse();

    let line = fetch_quote_of_day();
    if let Err(e) = writeln!(io::stdout().lock(), "{}", line) {
        debug!("Failed to write quote to stdout: {}", e);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
