// Tests for which files a run picks up

use enumlint_enforce::engine::LintEngine;

use crate::common::{setup_project, SUBSCRIPTION_MODEL, USER_MODEL};

#[test]
fn test_ruby_file_kinds_are_collected() {
    let (_tmp, root) = setup_project(&[
        ("app/models/user.rb", USER_MODEL),
        ("lib/tasks/cleanup.rake", "task :cleanup do\nend\n"),
        ("enumlint.gemspec", "Gem::Specification.new do |s|\nend\n"),
        ("Gemfile", "source 'https://rubygems.org'\n"),
        ("config.ru", "run Rails.application\n"),
        ("README.md", "enum not_a: [1]\n"),
        ("app/javascript/app.js", "enum(not_a: 1)\n"),
    ]);
    let files = LintEngine::new().collect_files(&[root.clone()]);
    let names: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(&root).unwrap().display().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "Gemfile",
            "app/models/user.rb",
            "config.ru",
            "enumlint.gemspec",
            "lib/tasks/cleanup.rake",
        ]
    );
}

#[test]
fn test_enumlintignore_is_respected() {
    let (_tmp, root) = setup_project(&[
        (".enumlintignore", "db/\n"),
        ("app/models/subscription.rb", SUBSCRIPTION_MODEL),
        ("db/schema.rb", SUBSCRIPTION_MODEL),
    ]);
    let report = LintEngine::new().run(&[root.clone()], false);
    assert_eq!(report.files_inspected, 1);
    assert_eq!(report.offense_count, 1);
}

#[test]
fn test_hidden_directories_are_skipped() {
    let (_tmp, root) = setup_project(&[
        (".bundle/cache/model.rb", SUBSCRIPTION_MODEL),
        ("app/models/user.rb", USER_MODEL),
    ]);
    let report = LintEngine::new().run(&[root.clone()], false);
    assert_eq!(report.files_inspected, 1);
    assert_eq!(report.status, "ok");
}

#[test]
fn test_overlapping_roots_are_deduplicated() {
    let (_tmp, root) = setup_project(&[("app/models/subscription.rb", SUBSCRIPTION_MODEL)]);
    let file = root.join("app/models/subscription.rb");
    let report = LintEngine::new().run(&[file.clone(), file], false);
    assert_eq!(report.files_inspected, 1);
    assert_eq!(report.offense_count, 1);
}
