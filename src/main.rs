//! # genmakeimpl CLI
//!
//! This is the binary entry point for the `genmakeimpl` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Reporting top-level errors, which exit with status 1.
//!
//! The generation pipeline lives in the `lib.rs` library crate; the binary
//! only resolves configuration and prints results.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
