use crate::OutputFormatter;
use enumlint_enforce::types::{LintReport, RulesResult};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_lint(&self, report: &LintReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
    fn format_rules(&self, result: &RulesResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
