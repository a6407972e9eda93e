//! # Generator Configuration
//!
//! This module defines the configuration of a generation run and the
//! optional `genmakeimpl.yaml` file it can be loaded from.
//!
//! ## Key Components
//!
//! - **`ConfigFile`**: the on-disk form. Every key is optional and unknown
//!   keys are rejected:
//!
//!   ```yaml
//!   min_arity: 1
//!   max_arity: 16
//!   output: src/common/utilities/config/generated_makeimpl.hpp
//!   target: cpp
//!   ```
//!
//! - **`GeneratorConfig`**: the resolved configuration the pipeline runs on.
//!   It starts from the defaults in [`crate::defaults`], and a config file and
//!   command-line flags are layered on top by the caller.
//!
//! ## Paths
//!
//! A relative `output` in a config file is resolved against the directory
//! containing that file, so a run does not depend on the working directory
//! it was started from.
//!
//! ## Validation
//!
//! `validate` checks the arity bounds and `validate_destination` checks that
//! the artifact can be written. Both run before any generation work.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::defaults::{
    default_output_path, DEFAULT_MAX_ARITY, DEFAULT_MIN_ARITY, MAX_SUPPORTED_ARITY,
};
use crate::error::{Error, Result};
use crate::phases::write::destination_dir;
use crate::target::Target;

/// Contents of a `genmakeimpl.yaml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Smallest arity to generate (0 adds a parameterless factory).
    pub min_arity: Option<usize>,
    /// Largest arity to generate.
    pub max_arity: Option<usize>,
    /// Artifact destination.
    pub output: Option<PathBuf>,
    /// Language of the artifact.
    pub target: Option<Target>,
}

/// Parse the YAML content of a config file.
///
/// An empty document (or one holding only comments) is the empty config.
pub fn parse(yaml_content: &str) -> Result<ConfigFile> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml_content)?;
    if value.is_null() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_value(value).map_err(|e| Error::Config {
        message: format!("Invalid configuration: {}", e),
        hint: Some("Supported keys are min_arity, max_arity, output and target".to_string()),
    })
}

/// Load a config file, resolving a relative `output` against its directory.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file '{}': {}", path.display(), e),
        hint: None,
    })?;
    let mut file = parse(&content)?;

    if let Some(output) = file.output.take() {
        file.output = Some(if output.is_relative() {
            destination_dir(path).join(output)
        } else {
            output
        });
    }
    Ok(file)
}

/// Resolved configuration of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub min_arity: usize,
    pub max_arity: usize,
    pub output: PathBuf,
    pub target: Target,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_arity: DEFAULT_MIN_ARITY,
            max_arity: DEFAULT_MAX_ARITY,
            output: default_output_path(),
            target: Target::default(),
        }
    }
}

impl GeneratorConfig {
    /// Overlay the keys set in a config file.
    pub fn with_file(mut self, file: ConfigFile) -> Self {
        if let Some(min_arity) = file.min_arity {
            self.min_arity = min_arity;
        }
        if let Some(max_arity) = file.max_arity {
            self.max_arity = max_arity;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if let Some(target) = file.target {
            self.target = target;
        }
        self
    }

    /// The arities to generate, ascending.
    pub fn arities(&self) -> RangeInclusive<usize> {
        self.min_arity..=self.max_arity
    }

    /// Check the arity bounds.
    pub fn validate(&self) -> Result<()> {
        if self.max_arity == 0 {
            return Err(Error::Config {
                message: "max_arity must be at least 1".to_string(),
                hint: Some("Use min_arity: 0 to add a parameterless factory".to_string()),
            });
        }
        if self.max_arity > MAX_SUPPORTED_ARITY {
            return Err(Error::Config {
                message: format!(
                    "max_arity {} exceeds the supported maximum of {}",
                    self.max_arity, MAX_SUPPORTED_ARITY
                ),
                hint: Some(format!(
                    "Arity {} alone would emit {} overloads",
                    self.max_arity,
                    1u64 << self.max_arity.min(63)
                )),
            });
        }
        if self.min_arity > self.max_arity {
            return Err(Error::Config {
                message: format!(
                    "min_arity {} is greater than max_arity {}",
                    self.min_arity, self.max_arity
                ),
                hint: None,
            });
        }
        Ok(())
    }

    /// Check that the artifact can be written to `output`.
    ///
    /// The destination's directory must exist and be writable, and the
    /// destination itself must not be a directory.
    pub fn validate_destination(&self) -> Result<()> {
        let output = &self.output;
        if output.is_dir() {
            return Err(Error::Config {
                message: format!("Destination '{}' is a directory", output.display()),
                hint: Some("Pass the path of the file to generate".to_string()),
            });
        }

        let directory = destination_dir(output);
        let metadata = std::fs::metadata(directory).map_err(|e| Error::Config {
            message: format!(
                "Destination directory '{}' is not accessible: {}",
                directory.display(),
                e
            ),
            hint: Some("Create the directory or choose another --output".to_string()),
        })?;
        if !metadata.is_dir() {
            return Err(Error::Config {
                message: format!("'{}' is not a directory", directory.display()),
                hint: None,
            });
        }
        if metadata.permissions().readonly() {
            return Err(Error::Config {
                message: format!("Destination directory '{}' is read-only", directory.display()),
                hint: None,
            });
        }

        let expected = self.target.file_extension();
        if output.extension().and_then(|e| e.to_str()) != Some(expected) {
            warn!(
                "Destination '{}' does not use the .{} extension expected for this target",
                output.display(),
                expected
            );
        }
        Ok(())
    }
}
