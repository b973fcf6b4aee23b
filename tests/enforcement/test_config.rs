// Tests for loading .enumlint/enumlint.json and applying it to the engine

use std::fs;

use enumlint_core::config::{EnumlintConfig, CONFIG_DIR, CONFIG_FILE};
use enumlint_core::types::Severity;
use enumlint_enforce::engine::LintEngine;

use crate::common::{setup_project, SUBSCRIPTION_MODEL, TASK_MODEL};

fn write_config(root: &std::path::Path, json: &str) -> std::path::PathBuf {
    let dir = root.join(CONFIG_DIR);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(CONFIG_FILE), json).unwrap();
    dir
}

#[test]
fn test_partial_config_fills_defaults() {
    let (_tmp, root) = setup_project(&[]);
    let dir = write_config(&root, r#"{"rules": {"Rails/EnumNegative": {"severity": "warning"}}}"#);
    let config = EnumlintConfig::load(&dir);
    let rule = &config.rules.enum_negative;
    assert_eq!(rule.severity, Severity::Warning);
    assert!(rule.enabled);
    assert!(rule.autocorrect);
    assert!(config.exclude.is_empty());
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let (_tmp, root) = setup_project(&[]);
    let dir = write_config(&root, "{ not json");
    let config = EnumlintConfig::load(&dir);
    assert_eq!(config.rules.enum_negative.severity, Severity::Convention);
}

#[test]
fn test_disabled_rule_inspects_files_but_reports_nothing() {
    let (_tmp, root) = setup_project(&[("app/models/subscription.rb", SUBSCRIPTION_MODEL)]);
    let dir = write_config(&root, r#"{"rules": {"Rails/EnumNegative": {"enabled": false}}}"#);
    let engine = LintEngine::with_config(&EnumlintConfig::load(&dir)).unwrap();
    let report = engine.run(&[root.clone()], false);
    assert_eq!(report.files_inspected, 1);
    assert_eq!(report.offense_count, 0);
    assert_eq!(report.status, "ok");
}

#[test]
fn test_autocorrect_off_leaves_file_untouched() {
    let (_tmp, root) = setup_project(&[("app/models/task.rb", TASK_MODEL)]);
    let dir = write_config(&root, r#"{"rules": {"Rails/EnumNegative": {"autocorrect": false}}}"#);
    let engine = LintEngine::with_config(&EnumlintConfig::load(&dir)).unwrap();
    let report = engine.run(&[root.clone()], true);
    assert_eq!(report.corrected_count, 0);
    assert_eq!(report.offense_count, 1);
    assert_eq!(
        fs::read_to_string(root.join("app/models/task.rb")).unwrap(),
        TASK_MODEL
    );
}

#[test]
fn test_exclude_globs_skip_files() {
    let (_tmp, root) = setup_project(&[
        ("app/models/subscription.rb", SUBSCRIPTION_MODEL),
        ("vendor/gems/legacy/model.rb", SUBSCRIPTION_MODEL),
    ]);
    let dir = write_config(&root, r#"{"exclude": ["**/vendor/**"]}"#);
    let engine = LintEngine::with_config(&EnumlintConfig::load(&dir)).unwrap();
    let report = engine.run(&[root.clone()], false);
    assert_eq!(report.files_inspected, 1);
    assert!(report.files[0].path.ends_with("subscription.rb"));
}
