//! Snapshot tests for generated artifacts using insta.
//!
//! To update snapshots after intentional template changes:
//! ```bash
//! cargo insta test --accept
//! ```

use std::path::PathBuf;

use genmakeimpl::config::GeneratorConfig;
use genmakeimpl::phases::orchestrator::build_artifact;
use genmakeimpl::target::Target;
use genmakeimpl::template::PlaceholderEngine;

fn render(min_arity: usize, max_arity: usize, target: Target) -> String {
    let config = GeneratorConfig {
        min_arity,
        max_arity,
        output: PathBuf::from("unused"),
        target,
    };
    let artifact = build_artifact(&config, &PlaceholderEngine).unwrap();
    String::from_utf8(artifact.to_bytes()).unwrap()
}

#[test]
fn test_cpp_artifact_snapshot() {
    let artifact = render(0, 2, Target::Cpp);
    insta::assert_snapshot!("cpp_arities_0_to_2", artifact);
}

#[test]
fn test_rust_artifact_snapshot() {
    let artifact = render(1, 2, Target::Rust);
    insta::assert_snapshot!("rust_arities_1_to_2", artifact);
}
