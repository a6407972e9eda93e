//! # Check Command Implementation
//!
//! This module implements the `check` subcommand, which verifies that the
//! artifact on disk is exactly what `generate` would write for the current
//! configuration.
//!
//! The artifact is rebuilt in memory, with every collision check, and
//! compared byte for byte with the destination file. A missing or stale
//! artifact is an error (exit code 1), which makes the command suitable for
//! CI and pre-commit hooks.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::ErrorKind;

use genmakeimpl::output::{OutputConfig, Status};
use genmakeimpl::phases::orchestrator;
use genmakeimpl::template::PlaceholderEngine;

use super::GeneratorArgs;

/// Verify that the generated artifact is up to date
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `check` command.
pub fn execute(args: CheckArgs, color: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color).with_quiet(args.quiet);
    let config = args.generator.resolve()?;
    let destination = &config.output;

    let expected = orchestrator::build_artifact(&config, &PlaceholderEngine)?.to_bytes();

    let actual = match fs::read(destination) {
        Ok(actual) => actual,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            out.line(
                Status::Failure,
                format!("{} is missing", destination.display()),
            );
            anyhow::bail!(
                "Artifact not found: {} (run `genmakeimpl generate`)",
                destination.display()
            );
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read artifact {}", destination.display()))
        }
    };

    if actual != expected {
        out.line(
            Status::Failure,
            format!("{} is out of date", destination.display()),
        );
        anyhow::bail!(
            "Artifact is stale: {} (run `genmakeimpl generate`)",
            destination.display()
        );
    }

    out.line(
        Status::Success,
        format!(
            "{} is up to date (arities {}..={})",
            destination.display(),
            config.min_arity,
            config.max_arity
        ),
    );
    Ok(())
}
