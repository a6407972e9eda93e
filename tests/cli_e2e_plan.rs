//! End-to-end tests for the `plan` command.

#[allow(dead_code)]
mod common;
use common::prelude::*;

#[test]
fn test_plan_text() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["plan", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arity 2: 4 overloads"))
        .stdout(predicate::str::contains(
            "  10  EI/1  (arg0)        -> (arg0, resolve<T1>)",
        ));
}

#[test]
fn test_plan_json() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["plan", "3", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plans: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let plans = plans.as_array().unwrap();
    assert_eq!(plans.len(), 8);
    assert_eq!(plans[2]["partition"], "010");
    assert_eq!(plans[2]["explicit_args"], serde_json::json!(["arg0"]));
    assert_eq!(plans[2]["call"][1], serde_json::json!({ "ExplicitRef": 0 }));
    assert_eq!(
        plans[2]["call"][2],
        serde_json::json!({ "InjectedResolve": { "position": 2 } })
    );
}

#[test]
fn test_plan_oversized_arity() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["plan", "21"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exceeds the supported maximum"));
}
