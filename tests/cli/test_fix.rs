// Tests for `enumlint check --fix`

use std::fs;

use crate::common::{run_enumlint, setup_project, stdout_of, SUBSCRIPTION_MODEL, TASK_MODEL};

#[test]
fn test_fix_rewrites_array_enum() {
    let (_tmp, root) = setup_project(&[("app/models/task.rb", TASK_MODEL)]);
    let out = run_enumlint(&root, &["check", "--fix"]);

    assert_eq!(
        fs::read_to_string(root.join("app/models/task.rb")).unwrap(),
        "class Task < ApplicationRecord\n  enum not_state: {:open => 0, :done => 1}\nend\n"
    );
    // The negative name itself is still reported.
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout_of(&out).ends_with("1 offense detected, 1 offense corrected\n"));
}

#[test]
fn test_fix_json_reports_corrections() {
    let (_tmp, root) = setup_project(&[("app/models/task.rb", TASK_MODEL)]);
    let out = run_enumlint(&root, &["check", "--fix", "--json"]);
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["command"], "fix");
    assert_eq!(json["corrected_count"], 1);
    assert_eq!(json["files"][0]["corrected"], 1);
}

#[test]
fn test_fix_leaves_hash_enums_alone() {
    let (_tmp, root) = setup_project(&[("app/models/subscription.rb", SUBSCRIPTION_MODEL)]);
    run_enumlint(&root, &["check", "--fix"]);
    assert_eq!(
        fs::read_to_string(root.join("app/models/subscription.rb")).unwrap(),
        SUBSCRIPTION_MODEL
    );
}

#[test]
fn test_fix_twice_is_stable() {
    let (_tmp, root) = setup_project(&[("app/models/task.rb", TASK_MODEL)]);
    run_enumlint(&root, &["check", "--fix"]);
    let first = fs::read_to_string(root.join("app/models/task.rb")).unwrap();
    let out = run_enumlint(&root, &["check", "--fix", "--json"]);
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["corrected_count"], 0);
    assert_eq!(
        fs::read_to_string(root.join("app/models/task.rb")).unwrap(),
        first
    );
}
