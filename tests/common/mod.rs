//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config(configs::SMALL);
//!     fixture.command().arg("generate").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Arities 1 and 2, written to `out.hpp` next to the config.
    pub const SMALL: &str = "max_arity: 2\noutput: out.hpp\n";

    /// Arities 0 through 3 for the Rust target.
    pub const RUST: &str = "min_arity: 0\nmax_arity: 3\noutput: generated.rs\ntarget: rust\n";

    /// Unknown key.
    pub const UNKNOWN_KEY: &str = "max_arty: 2\n";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "max_arity: [2\n";

    /// Inverted arity bounds.
    pub const INVERTED: &str = "min_arity: 4\nmax_arity: 2\noutput: out.hpp\n";
}

/// A temporary working directory with an optional `genmakeimpl.yaml`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `genmakeimpl.yaml` configuration file with the given content.
    #[allow(dead_code)]
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("genmakeimpl.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a file inside the fixture.
    #[allow(dead_code)]
    pub fn join(&self, path: &str) -> PathBuf {
        self.temp_dir.path().join(path)
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command running in this fixture's directory.
    ///
    /// Generator environment variables from the outer environment are
    /// cleared and colors are disabled so output is stable.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("genmakeimpl");
        cmd.current_dir(self.path())
            .env_remove("GENMAKEIMPL_CONFIG")
            .env_remove("GENMAKEIMPL_OUTPUT")
            .env_remove("GENMAKEIMPL_MAX_ARITY")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
