//! # Error Handling
//!
//! This module defines the centralized error type for `genmakeimpl`. It uses
//! the `thiserror` library to build an `Error` enum covering every failure a
//! generation run can hit, each with enough context to reproduce it.
//!
//! ## Key Components
//!
//! - **`Error`**: every failure mode of the generator:
//!   - Configuration errors (bad arity bounds, unusable destination,
//!     unreadable config file), reported before any generation work begins.
//!   - Signature collisions, reported with the arity and both offending
//!     partition patterns.
//!   - Artifact write failures, reported with the destination path.
//!   - Template errors, raised when a template names an unbound placeholder.
//!   - Wrapped I/O and YAML errors.
//!
//! - **`Result<T>`**: a type alias for `std::result::Result<T, Error>`.
//!
//! None of these are recoverable within a run. Generation is cheap and
//! deterministic, so the caller fixes the cause and runs again.

use thiserror::Error;

/// Main error type for genmakeimpl operations
#[derive(Error, Debug)]
pub enum Error {
    /// The generator configuration is invalid.
    ///
    /// Raised for arity bounds out of range, a destination whose directory
    /// is missing or read-only, and config files that cannot be read or
    /// parsed. Optionally carries a hint for fixing the configuration.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Config {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// Two planned overloads share a signature key.
    ///
    /// `first` and `second` are the marker patterns of the two partitions,
    /// `key` is the shared signature key.
    #[error("Signature collision at arity {arity}: partitions {first} and {second} share key {key}")]
    Collision {
        arity: usize,
        first: String,
        second: String,
        key: String,
    },

    /// The artifact could not be written to its destination.
    ///
    /// The destination, if it existed, has not been modified.
    #[error("Failed to write artifact '{path}': {message}")]
    Write { path: String, message: String },

    /// A template could not be rendered.
    ///
    /// May include the name of the unbound placeholder.
    #[error("Template processing error: {message}{}", variable.as_ref().map(|v| format!(" (variable: {})", v)).unwrap_or_default())]
    Template {
        message: String,
        /// The template variable that caused the error, if applicable
        variable: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
