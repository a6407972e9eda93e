//! Default values for genmakeimpl configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Default largest constructor arity to generate overloads for.
pub const DEFAULT_MAX_ARITY: usize = 16;

/// Default smallest constructor arity to generate overloads for.
///
/// Arity 0 (a parameterless factory) is supported but must be requested.
pub const DEFAULT_MIN_ARITY: usize = 1;

/// Largest arity the generator accepts.
///
/// Each arity `k` contributes `2^k` overloads, so the artifact roughly
/// doubles with every step past the default.
pub const MAX_SUPPORTED_ARITY: usize = 20;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "genmakeimpl.yaml";

/// Returns the default artifact destination.
///
/// This is the location the consuming project includes the generated
/// header from, relative to the working directory.
pub fn default_output_path() -> PathBuf {
    PathBuf::from("src/common/utilities/config/generated_makeimpl.hpp")
}

/// Returns the default config file path.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}
