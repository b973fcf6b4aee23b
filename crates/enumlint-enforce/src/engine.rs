use std::path::{Path, PathBuf};

use enumlint_core::config::{ConfigError, EnumlintConfig};
use enumlint_core::types::Finding;
use enumlint_parsers::ast::{walk, SyntaxTree};
use enumlint_parsers::treesitter::{ParseError, RubyParser};
use enumlint_parsers::walker::FileWalker;
use globset::GlobSet;
use rayon::prelude::*;

use crate::correction::{apply_edits, Edit};
use crate::inspector::{EnumValueInspector, DESCRIPTION, RULE_NAME};
use crate::sink::Corrector;
use crate::types::{FileError, FileReport, LintReport, RuleInfo, RulesResult};

/// Upper bound on parse/correct rounds for one file.
pub const MAX_FIX_PASSES: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Outcome of correcting one source text.
#[derive(Debug, Clone)]
pub struct FixOutcome {
    pub text: String,
    /// Findings remaining after the last pass.
    pub report: FileReport,
}

/// Runs the enum rule over files. Holds no per-file state, so one engine can
/// lint many files in parallel.
pub struct LintEngine {
    inspector: EnumValueInspector,
    enabled: bool,
    exclude: GlobSet,
}

impl Default for LintEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LintEngine {
    pub fn new() -> Self {
        Self {
            inspector: EnumValueInspector::default(),
            enabled: true,
            exclude: GlobSet::empty(),
        }
    }

    /// Create an engine configured from an `EnumlintConfig`.
    pub fn with_config(config: &EnumlintConfig) -> Result<Self, LintError> {
        let rule = &config.rules.enum_negative;
        Ok(Self {
            inspector: EnumValueInspector::from_config(rule),
            enabled: rule.enabled,
            exclude: config.exclude_set()?,
        })
    }

    pub fn rules(config: &EnumlintConfig) -> RulesResult {
        let rule = &config.rules.enum_negative;
        RulesResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "rules".to_string(),
            rules: vec![RuleInfo {
                name: RULE_NAME.to_string(),
                description: DESCRIPTION.to_string(),
                enabled: rule.enabled,
                severity: rule.severity,
                autocorrect: rule.autocorrect,
            }],
        }
    }

    /// Walk a parsed tree and report every offense. Edits go to `corrector`
    /// when one is given.
    pub fn check_tree(
        &self,
        tree: &SyntaxTree,
        mut corrector: Option<&mut dyn Corrector>,
    ) -> Vec<Finding> {
        let mut findings = Vec::new();
        if !self.enabled {
            return findings;
        }
        walk(&tree.root, |node| {
            let corrector: Option<&mut dyn Corrector> = match corrector {
                Some(ref mut c) => Some(&mut **c),
                None => None,
            };
            self.inspector
                .check_node(node, &tree.source, &mut findings, corrector);
        });
        findings
    }

    /// Lint one source text without changing it.
    pub fn lint_source(&self, path: &str, source: &str) -> Result<FileReport, LintError> {
        let tree = parse(path, source)?;
        if tree.has_errors {
            tracing::warn!(path, "syntax errors, results may be incomplete");
        }
        Ok(FileReport {
            path: path.to_string(),
            findings: self.check_tree(&tree, None),
            corrected: 0,
            syntax_error: tree.has_errors,
        })
    }

    /// Lint and correct one source text, re-parsing after each round of edits
    /// until nothing is left to correct.
    pub fn fix_source(&self, path: &str, source: &str) -> Result<FixOutcome, LintError> {
        let mut text = source.to_string();
        let mut corrected = 0u32;
        let mut pass = 0usize;

        loop {
            pass += 1;
            let tree = parse(path, &text)?;
            let mut edits: Vec<Edit> = Vec::new();
            let findings = self.check_tree(&tree, Some(&mut edits));

            if !tree.has_errors && !edits.is_empty() && pass < MAX_FIX_PASSES {
                let result = apply_edits(&text, &edits);
                tracing::debug!(
                    path,
                    pass,
                    applied = result.applied,
                    skipped = result.skipped,
                    "applied corrections"
                );
                if result.applied > 0 {
                    corrected += result.applied;
                    text = result.text;
                    continue;
                }
            }

            if tree.has_errors && !edits.is_empty() {
                tracing::warn!(path, "syntax errors, skipping autocorrection");
            }
            return Ok(FixOutcome {
                text,
                report: FileReport {
                    path: path.to_string(),
                    findings,
                    corrected,
                    syntax_error: tree.has_errors,
                },
            });
        }
    }

    /// Expand roots into Ruby files, dropping excluded paths.
    pub fn collect_files(&self, roots: &[PathBuf]) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = roots
            .iter()
            .flat_map(|root| FileWalker::new(root).walk())
            .filter(|path| !self.is_excluded(path))
            .collect();
        files.sort();
        files.dedup();
        files
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix("./").unwrap_or(path);
        self.exclude.is_match(relative)
    }

    /// Lint (and with `fix`, correct in place) every Ruby file under `roots`.
    pub fn run(&self, roots: &[PathBuf], fix: bool) -> LintReport {
        let files = self.collect_files(roots);
        let command = if fix { "fix" } else { "check" };

        let results: Vec<Result<FileReport, LintError>> = files
            .par_iter()
            .map(|path| self.run_file(path, fix))
            .collect();

        let mut report = LintReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: command.to_string(),
            status: String::new(),
            files_inspected: 0,
            offense_count: 0,
            corrected_count: 0,
            files: Vec::new(),
            errors: Vec::new(),
        };

        for (path, result) in files.iter().zip(results) {
            match result {
                Ok(file_report) => {
                    report.files_inspected += 1;
                    report.offense_count += file_report.findings.len() as u32;
                    report.corrected_count += file_report.corrected;
                    report.files.push(file_report);
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "lint failed");
                    report.errors.push(FileError {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        report.status = if !report.errors.is_empty() {
            "error"
        } else if report.offense_count > 0 {
            "offenses"
        } else {
            "ok"
        }
        .to_string();
        report
    }

    fn run_file(&self, path: &Path, fix: bool) -> Result<FileReport, LintError> {
        let path_str = path.display().to_string();
        tracing::debug!(path = %path_str, "inspecting");
        let source = std::fs::read_to_string(path).map_err(|source| LintError::Read {
            path: path_str.clone(),
            source,
        })?;

        if !fix {
            return self.lint_source(&path_str, &source);
        }

        let outcome = self.fix_source(&path_str, &source)?;
        if outcome.text != source {
            std::fs::write(path, &outcome.text).map_err(|source| LintError::Write {
                path: path_str.clone(),
                source,
            })?;
            tracing::info!(path = %path_str, corrected = outcome.report.corrected, "wrote corrections");
        }
        Ok(outcome.report)
    }
}

fn parse(path: &str, source: &str) -> Result<SyntaxTree, LintError> {
    RubyParser::new()
        .parse(source)
        .map_err(|source| LintError::Parse {
            path: path.to_string(),
            source,
        })
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
