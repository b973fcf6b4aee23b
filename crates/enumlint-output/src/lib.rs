//! Output formatters for enumlint command results.
//!
//! Provides two output modes:
//! - **Human** (default): one line per offense with the offending source line
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use enumlint_enforce::types::{LintReport, RulesResult};

pub trait OutputFormatter {
    fn format_lint(&self, report: &LintReport) -> String;
    fn format_rules(&self, result: &RulesResult) -> String;
}
