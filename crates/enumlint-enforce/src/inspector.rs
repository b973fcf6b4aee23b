//! `Rails/EnumNegative`: enum values must not start with `not_`.
//!
//! Since Rails 6 every enum value `x` gets a negated scope `not_x`. A value
//! that is itself named `not_x` is shadowed by (or shadows) those generated
//! scopes.
//!
//! ```ruby
//! # bad
//! enum status: { active: 0, not_active: 1, sometimes_active: 2 }
//!
//! # good
//! enum status: { active: 0, inactive: 1, sometimes_active: 2 }
//! ```

use enumlint_core::config::RuleConfig;
use enumlint_core::types::{Finding, Severity};
use enumlint_parsers::ast::{Node, NodeKind, Pair};

use crate::render;
use crate::sink::{Corrector, DiagnosticSink};

pub const RULE_NAME: &str = "Rails/EnumNegative";
pub const MSG: &str =
    "Enum contains values starting with 'not_'. Avoid using 'not_*' named enum values.";
pub const NEGATIVE_PREFIX: &str = "not_";
pub const DESCRIPTION: &str = "Looks for enums with values prefixed with `not_`.";

/// An offending pair found by [`EnumValueInspector::inspect`].
#[derive(Debug, Clone, PartialEq)]
pub struct Offense<'a> {
    /// Node the offense is reported on: the pair's value, or its key when the
    /// value is omitted (`{ not_active: }`).
    pub anchor: &'a Node,
    pub enum_name: String,
}

#[derive(Debug, Clone)]
pub struct EnumValueInspector {
    severity: Severity,
    autocorrect: bool,
}

impl Default for EnumValueInspector {
    fn default() -> Self {
        Self::new(Severity::default(), true)
    }
}

impl EnumValueInspector {
    pub fn new(severity: Severity, autocorrect: bool) -> Self {
        Self {
            severity,
            autocorrect,
        }
    }

    pub fn from_config(config: &RuleConfig) -> Self {
        Self::new(config.severity, config.autocorrect)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Match `enum <hash>`: no receiver, callee `enum`, exactly one argument,
    /// and that argument a hash literal. Returns its pairs in source order.
    pub fn match_enum(node: &Node) -> Option<&[Pair]> {
        match &node.kind {
            NodeKind::Call {
                receiver: None,
                method,
                arguments,
                ..
            } if method == "enum" && arguments.len() == 1 => arguments[0].hash_pairs(),
            _ => None,
        }
    }

    /// Offenses for every pair whose key starts with `not_`, in declaration
    /// order. A pair whose value is a hash (`status: { ... }`) also has that
    /// hash's pairs inspected, one level deep. A pair whose value is an array
    /// is reported once, on the array, when any element is a `not_` literal.
    pub fn inspect<'a>(pairs: &'a [Pair], source: &str) -> Vec<Offense<'a>> {
        let mut offenses = Vec::new();
        for pair in pairs {
            check_pair(pair, source, &mut offenses);
            if let Some(values) = pair.value.as_ref().and_then(Node::hash_pairs) {
                for value_pair in values {
                    check_pair(value_pair, source, &mut offenses);
                }
            }
        }
        offenses
    }

    /// Replacement text for an offending node. Only array value lists can be
    /// rewritten; they become a hash mapping each element to its index.
    pub fn autocorrect(node: &Node, source: &str) -> Option<String> {
        match &node.kind {
            NodeKind::Array(elements) => Some(render::rewrite(elements, source)),
            _ => None,
        }
    }

    /// Run the rule against one node of a tree walk. Non-enum nodes are a no-op.
    pub fn check_node(
        &self,
        node: &Node,
        source: &str,
        sink: &mut dyn DiagnosticSink,
        mut corrector: Option<&mut dyn Corrector>,
    ) {
        let pairs = match Self::match_enum(node) {
            Some(p) => p,
            None => return,
        };

        for offense in Self::inspect(pairs, source) {
            let replacement = if self.autocorrect {
                Self::autocorrect(offense.anchor, source)
            } else {
                None
            };
            let span = offense.anchor.span;

            sink.add_offense(Finding {
                rule: RULE_NAME.to_string(),
                message: MSG.to_string(),
                enum_name: offense.enum_name,
                severity: self.severity,
                span,
                correctable: replacement.is_some(),
                source_line: line_at(source, span.start).to_string(),
            });

            if let (Some(corrector), Some(text)) = (corrector.as_mut(), replacement) {
                corrector.replace(span, text);
            }
        }
    }
}

fn check_pair<'a>(pair: &'a Pair, source: &str, offenses: &mut Vec<Offense<'a>>) {
    let anchor = pair.value.as_ref().unwrap_or(&pair.key);
    let name = enum_name(&pair.key, source);
    if name.starts_with(NEGATIVE_PREFIX) {
        offenses.push(Offense {
            anchor,
            enum_name: name,
        });
        return;
    }

    // `status: [:active, :not_active]` lists the values themselves.
    if let NodeKind::Array(elements) = &anchor.kind {
        let negative = elements
            .iter()
            .filter_map(Node::literal_value)
            .find(|value| value.starts_with(NEGATIVE_PREFIX));
        if let Some(value) = negative {
            offenses.push(Offense {
                anchor,
                enum_name: value.to_string(),
            });
        }
    }
}

/// Literal value for symbol and string keys, raw source text otherwise.
pub fn enum_name(key: &Node, source: &str) -> String {
    match key.literal_value() {
        Some(value) => value.to_string(),
        None => key.source(source).to_string(),
    }
}

fn line_at(source: &str, offset: usize) -> &str {
    let offset = offset.min(source.len());
    let start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let end = source[offset..]
        .find('\n')
        .map_or(source.len(), |i| offset + i);
    source[start..end].trim_end_matches('\r')
}

#[cfg(test)]
#[path = "inspector_tests.rs"]
mod tests;
