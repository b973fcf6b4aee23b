// Tests for array-to-hash autocorrection of negative enum values

use enumlint_enforce::engine::LintEngine;

use crate::common::TASK_MODEL;

fn fix(source: &str) -> String {
    LintEngine::new().fix_source("m.rb", source).unwrap().text
}

#[test]
fn test_symbol_array_becomes_indexed_hash() {
    assert_eq!(
        fix(TASK_MODEL),
        "class Task < ApplicationRecord\n  enum not_state: {:open => 0, :done => 1}\nend\n"
    );
}

#[test]
fn test_word_array_becomes_string_keys() {
    assert_eq!(
        fix("enum not_color: %w[red green]\n"),
        "enum not_color: {\"red\" => 0, \"green\" => 1}\n"
    );
}

#[test]
fn test_quoted_symbols_are_preserved() {
    assert_eq!(
        fix("enum not_kind: [:'in review', :done?]\n"),
        "enum not_kind: {:\"in review\" => 0, :done? => 1}\n"
    );
}

#[test]
fn test_string_escapes_are_rendered_double_quoted() {
    assert_eq!(
        fix("enum not_label: ['a\"b', 'tab\\there']\n"),
        "enum not_label: {\"a\\\"b\" => 0, \"tab\\\\there\" => 1}\n"
    );
}

#[test]
fn test_other_elements_are_copied_verbatim() {
    assert_eq!(
        fix("enum not_level: [LOW, compute(1), 3]\n"),
        "enum not_level: {LOW => 0, compute(1) => 1, 3 => 2}\n"
    );
}

#[test]
fn test_empty_array_becomes_empty_hash() {
    assert_eq!(fix("enum not_any: []\n"), "enum not_any: {}\n");
}

#[test]
fn test_several_enums_corrected_in_one_pass() {
    let source = "enum(not_a: [:x], ok: [:y], not_b: %i[z w])\n";
    let outcome = LintEngine::new().fix_source("m.rb", source).unwrap();
    assert_eq!(
        outcome.text,
        "enum(not_a: {:x => 0}, ok: [:y], not_b: {:z => 0, :w => 1})\n"
    );
    assert_eq!(outcome.report.corrected, 2);
}

#[test]
fn test_corrected_output_is_clean_of_correctable_offenses() {
    let outcome = LintEngine::new().fix_source("m.rb", TASK_MODEL).unwrap();
    assert!(outcome.report.findings.iter().all(|f| !f.correctable));
    let again = LintEngine::new().fix_source("m.rb", &outcome.text).unwrap();
    assert_eq!(again.text, outcome.text);
}

#[test]
fn test_array_declaration_with_negative_value() {
    let source = "class Subscription\n  enum status: %i[active not_active]\nend\n";
    let outcome = LintEngine::new().fix_source("m.rb", source).unwrap();
    assert_eq!(
        outcome.text,
        "class Subscription\n  enum status: {:active => 0, :not_active => 1}\nend\n"
    );
    assert_eq!(outcome.report.corrected, 1);
}

#[test]
fn test_clean_array_declaration_is_untouched() {
    let source = "enum status: [:active, :archived]\n";
    let outcome = LintEngine::new().fix_source("m.rb", source).unwrap();
    assert_eq!(outcome.text, source);
    assert!(outcome.report.findings.is_empty());
}
