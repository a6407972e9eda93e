//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// genmakeimpl - Generate the factory overloads of a dependency-injection container
#[derive(Parser, Debug)]
#[command(name = "genmakeimpl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the factory overload artifact
    Generate(commands::generate::GenerateArgs),

    /// Verify that the artifact on disk is up to date
    Check(commands::check::CheckArgs),

    /// Show the signature plans of one arity
    Plan(commands::plan::PlanArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Logger filter for this run. Quiet commands only report warnings and
    /// errors, whatever `--log-level` says.
    fn log_filter(&self) -> &str {
        let quiet = match &self.command {
            Commands::Generate(args) => args.quiet,
            Commands::Check(args) => args.quiet,
            Commands::Plan(_) | Commands::Completions(_) => false,
        };
        if quiet {
            "warn"
        } else {
            &self.log_level
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Ignored if a logger is already installed
        let _ = env_logger::Builder::new()
            .parse_filters(self.log_filter())
            .format_timestamp(None)
            .try_init();

        match self.command {
            Commands::Generate(args) => commands::generate::execute(args, &self.color),
            Commands::Check(args) => commands::check::execute(args, &self.color),
            Commands::Plan(args) => commands::plan::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
