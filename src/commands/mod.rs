//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `genmakeimpl` command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `genmakeimpl` library.
//!
//! `generate` and `check` share [`GeneratorArgs`], which resolves the run's
//! configuration from flags, environment, config file and defaults.

pub mod check;
pub mod completions;
pub mod generate;
pub mod plan;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use log::debug;

use genmakeimpl::config::{self, GeneratorConfig};
use genmakeimpl::defaults::default_config_path;
use genmakeimpl::target::Target;

/// Options that select what is generated and where it goes.
#[derive(Args, Debug, Clone, Default)]
pub struct GeneratorArgs {
    /// Path to a genmakeimpl.yaml config file (defaults to ./genmakeimpl.yaml if present)
    #[arg(long, value_name = "PATH", env = "GENMAKEIMPL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Artifact destination
    #[arg(short, long, value_name = "PATH", env = "GENMAKEIMPL_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Largest constructor arity to generate
    #[arg(long, value_name = "N", env = "GENMAKEIMPL_MAX_ARITY")]
    pub max_arity: Option<usize>,

    /// Smallest constructor arity to generate (0 adds a parameterless factory)
    #[arg(long, value_name = "N")]
    pub min_arity: Option<usize>,

    /// Language of the artifact
    #[arg(long, value_enum)]
    pub target: Option<Target>,
}

impl GeneratorArgs {
    /// Resolve the configuration of this run.
    ///
    /// Flags and their environment variables take precedence over the config
    /// file, which takes precedence over the built-in defaults.
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let mut resolved = GeneratorConfig::default();

        match &self.config {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Configuration file not found: {}", path.display());
                }
                let file = config::from_file(path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?;
                resolved = resolved.with_file(file);
            }
            None => {
                let path = default_config_path();
                if path.exists() {
                    debug!("Using config file {}", path.display());
                    let file = config::from_file(&path)
                        .with_context(|| format!("Failed to load config from {}", path.display()))?;
                    resolved = resolved.with_file(file);
                }
            }
        }

        if let Some(min_arity) = self.min_arity {
            resolved.min_arity = min_arity;
        }
        if let Some(max_arity) = self.max_arity {
            resolved.max_arity = max_arity;
        }
        if let Some(output) = &self.output {
            resolved.output = output.clone();
        }
        if let Some(target) = self.target {
            resolved.target = target;
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_missing_explicit_config() {
        let args = GeneratorArgs {
            config: Some(PathBuf::from("/nonexistent/genmakeimpl.yaml")),
            ..GeneratorArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_resolve_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("genmakeimpl.yaml");
        fs::write(
            &config_path,
            "min_arity: 0\nmax_arity: 8\noutput: out.hpp\ntarget: rust\n",
        )
        .unwrap();

        let args = GeneratorArgs {
            config: Some(config_path),
            max_arity: Some(3),
            target: Some(Target::Cpp),
            ..GeneratorArgs::default()
        };
        let resolved = args.resolve().unwrap();

        assert_eq!(resolved.min_arity, 0);
        assert_eq!(resolved.max_arity, 3);
        assert_eq!(resolved.output, temp_dir.path().join("out.hpp"));
        assert_eq!(resolved.target, Target::Cpp);
    }

    #[test]
    fn test_resolve_invalid_config_has_context() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("genmakeimpl.yaml");
        fs::write(&config_path, "arity: 3\n").unwrap();

        let args = GeneratorArgs {
            config: Some(config_path),
            ..GeneratorArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load config"));
    }
}
