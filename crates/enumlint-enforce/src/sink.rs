use enumlint_core::types::{Finding, Span};

use crate::correction::Edit;

/// Receives one finding per offense, in the order the rule reports them.
pub trait DiagnosticSink {
    fn add_offense(&mut self, finding: Finding);
}

impl DiagnosticSink for Vec<Finding> {
    fn add_offense(&mut self, finding: Finding) {
        self.push(finding);
    }
}

/// Receives replacement text for a span. Nothing is applied until the host
/// decides to; see [`crate::correction::apply_edits`].
pub trait Corrector {
    fn replace(&mut self, span: Span, replacement: String);
}

impl Corrector for Vec<Edit> {
    fn replace(&mut self, span: Span, replacement: String) {
        self.push(Edit { span, replacement });
    }
}
