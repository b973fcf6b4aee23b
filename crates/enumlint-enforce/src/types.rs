use enumlint_core::types::{Finding, Severity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "offenses" | "error"
    pub files_inspected: u32,
    pub offense_count: u32,
    pub corrected_count: u32,
    pub files: Vec<FileReport>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<FileError>,
}

impl LintReport {
    pub fn findings(&self) -> impl Iterator<Item = (&FileReport, &Finding)> {
        self.files
            .iter()
            .flat_map(|f| f.findings.iter().map(move |finding| (f, finding)))
    }

    pub fn has_offenses(&self) -> bool {
        self.offense_count > 0
    }
}

/// Findings for a single file, after any corrections were applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub corrected: u32,
    /// The file only parsed with error recovery; corrections were not applied.
    #[serde(default)]
    pub syntax_error: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileError {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesResult {
    pub version: String,
    pub command: String,
    pub rules: Vec<RuleInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub severity: Severity,
    pub autocorrect: bool,
}
