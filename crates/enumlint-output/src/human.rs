use crate::human_helpers::{format_finding_human, plural};
use crate::OutputFormatter;
use enumlint_enforce::types::{LintReport, RulesResult};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_lint(&self, report: &LintReport) -> String {
        let mut out = String::new();

        for (file, finding) in report.findings() {
            out.push_str(&format_finding_human(&file.path, finding));
        }

        for file in report.files.iter().filter(|f| f.syntax_error) {
            out.push_str(&format!(
                "{}: warning: syntax errors, autocorrection skipped\n",
                file.path
            ));
        }
        for e in &report.errors {
            out.push_str(&format!("{}: error: {}\n", e.path, e.message));
        }

        if !out.is_empty() {
            out.push('\n');
        }

        // Summary line
        out.push_str(&plural(report.files_inspected, "file"));
        out.push_str(" inspected, ");
        if report.offense_count == 0 {
            out.push_str("no offenses detected");
        } else {
            out.push_str(&format!("{} detected", plural(report.offense_count, "offense")));
        }

        if report.command == "fix" {
            if report.corrected_count > 0 {
                out.push_str(&format!(
                    ", {} corrected",
                    plural(report.corrected_count, "offense")
                ));
            }
        } else {
            let correctable = report.findings().filter(|(_, f)| f.correctable).count() as u32;
            if correctable > 0 {
                out.push_str(&format!(
                    ", {} autocorrectable",
                    plural(correctable, "offense")
                ));
            }
        }
        out.push('\n');

        out
    }

    fn format_rules(&self, result: &RulesResult) -> String {
        let mut out = String::new();
        for rule in &result.rules {
            let mut flags = vec![
                if rule.enabled { "enabled" } else { "disabled" }.to_string(),
                rule.severity.to_string(),
            ];
            if rule.autocorrect {
                flags.push("autocorrect".to_string());
            }
            out.push_str(&format!("{} ({})\n", rule.name, flags.join(", ")));
            out.push_str(&format!("  {}\n", rule.description));
        }
        out
    }
}
