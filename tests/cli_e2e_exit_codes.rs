//! End-to-end tests for CLI exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: General error (configuration, collision, write, stale artifact)
//! - Exit code 2: Invalid command-line usage (handled by clap)

#[allow(dead_code)]
mod common;
use common::prelude::*;

/// Exit code 0 is returned for --help.
#[test]
fn test_exit_code_help() {
    TestFixture::new().command().arg("--help").assert().code(0);
}

/// Exit code 0 is returned for --version.
#[test]
fn test_exit_code_version() {
    TestFixture::new()
        .command()
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("genmakeimpl"));
}

/// Exit code 0 is returned for completions.
#[test]
fn test_exit_code_completions() {
    TestFixture::new()
        .command()
        .args(["completions", "zsh"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("#compdef genmakeimpl"));
}

/// Exit code 1 is returned for an explicitly named config that does not exist.
#[test]
fn test_exit_code_config_not_found() {
    TestFixture::new()
        .command()
        .args(["generate", "--config", "nonexistent.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

/// Exit code 1 is returned for invalid YAML syntax.
#[test]
fn test_exit_code_invalid_yaml() {
    TestFixture::new()
        .with_config(configs::INVALID_YAML)
        .command()
        .arg("generate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config"));
}

/// Exit code 1 is returned for unknown config keys.
#[test]
fn test_exit_code_unknown_config_key() {
    TestFixture::new()
        .with_config(configs::UNKNOWN_KEY)
        .command()
        .arg("generate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("max_arty"));
}

/// Exit code 1 is returned for inverted arity bounds, before any file is written.
#[test]
fn test_exit_code_inverted_bounds() {
    let fixture = TestFixture::new().with_config(configs::INVERTED);

    fixture
        .command()
        .arg("generate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("min_arity 4 is greater than max_arity 2"));

    fixture.child("out.hpp").assert(predicate::path::missing());
}

/// Exit code 1 is returned for a zero maximum arity.
#[test]
fn test_exit_code_zero_max_arity() {
    TestFixture::new()
        .command()
        .args(["generate", "--max-arity", "0", "-o", "out.hpp"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("max_arity must be at least 1"));
}

/// Exit code 2 is returned for an unknown subcommand.
#[test]
fn test_exit_code_invalid_subcommand() {
    TestFixture::new()
        .command()
        .arg("frobnicate")
        .assert()
        .code(2);
}

/// Exit code 2 is returned for a non-numeric arity.
#[test]
fn test_exit_code_invalid_arity_value() {
    TestFixture::new()
        .command()
        .args(["generate", "--max-arity", "many"])
        .assert()
        .code(2);
}

/// Exit code 2 is returned for an unknown target.
#[test]
fn test_exit_code_invalid_target() {
    TestFixture::new()
        .command()
        .args(["generate", "--target", "java"])
        .assert()
        .code(2);
}
