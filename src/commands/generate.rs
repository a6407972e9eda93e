//! Generate command implementation
//!
//! The generate command runs the complete pipeline:
//! 1. Enumeration of the partitions of every configured arity
//! 2. Planning one signature per partition
//! 3. Collision checking
//! 4. Rendering through the target's templates
//! 5. Atomically writing the artifact to disk

use anyhow::Result;
use clap::Args;
use std::time::Instant;

use genmakeimpl::output::{OutputConfig, Status};
use genmakeimpl::phases::orchestrator;
use genmakeimpl::template::PlaceholderEngine;

use super::GeneratorArgs;

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// Run the full pipeline without writing the artifact
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs, color: &str) -> Result<()> {
    let start_time = Instant::now();
    let out = OutputConfig::from_env_and_flag(color).with_quiet(args.quiet);
    let config = args.generator.resolve()?;

    out.line(
        Status::Start,
        format!(
            "Generating {} factory overloads for arities {}..={}",
            config.target, config.min_arity, config.max_arity
        ),
    );
    if args.verbose {
        out.line(
            Status::Info,
            format!("Destination: {}", config.output.display()),
        );
    }
    if args.dry_run {
        out.line(Status::DryRun, "DRY RUN MODE - the artifact will not be written");
    }

    match orchestrator::execute(&config, &PlaceholderEngine, args.dry_run) {
        Ok(report) => {
            let duration = start_time.elapsed();
            out.line(
                Status::Success,
                format!(
                    "Generated {} overloads in {:.2}s",
                    report.overloads,
                    duration.as_secs_f64()
                ),
            );
            if report.written {
                out.line(
                    Status::Info,
                    format!(
                        "{} bytes written to {}",
                        report.bytes,
                        report.destination.display()
                    ),
                );
            } else {
                out.line(
                    Status::Info,
                    format!(
                        "{} bytes would be written to {}",
                        report.bytes,
                        report.destination.display()
                    ),
                );
            }
            Ok(())
        }
        Err(e) => {
            out.line(Status::Failure, "Generation failed");
            Err(e.into())
        }
    }
}
