use std::path::Path;

use tree_sitter::{Language, Parser};

use crate::ast::SyntaxTree;

mod lower;

pub struct RubyParser {
    parser: Parser,
}

impl RubyParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Parse Ruby source and lower it into the rule-facing AST.
    ///
    /// Syntax errors do not fail the parse; tree-sitter recovers and the
    /// result is flagged with `has_errors`. Nesting deeper than the lowering
    /// limit is cut off and flagged the same way.
    pub fn parse(&mut self, source: &str) -> Result<SyntaxTree, ParseError> {
        let lang = ruby_language();
        self.parser
            .set_language(&lang)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        let tree = self
            .parser
            .parse(source.as_bytes(), None)
            .ok_or(ParseError::ParseFailed)?;

        let ts_root = tree.root_node();
        let lowered = lower::lower(ts_root, source.as_bytes());
        if lowered.truncated {
            tracing::warn!(max_depth = lower::MAX_DEPTH, "nesting too deep, subtrees skipped");
        }

        Ok(SyntaxTree {
            source: source.to_string(),
            root: lowered.root,
            has_errors: ts_root.has_error() || lowered.truncated,
        })
    }
}

impl Default for RubyParser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("language error: {0}")]
    Language(String),
    #[error("parse failed")]
    ParseFailed,
}

fn ruby_language() -> Language {
    tree_sitter_ruby::LANGUAGE.into()
}

/// Whether `path` names a Ruby source file, by extension or conventional file name.
pub fn is_ruby_file(path: &Path) -> bool {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if matches!(ext, "rb" | "rake" | "gemspec" | "ru" | "jbuilder") {
            return true;
        }
    }
    matches!(
        path.file_name().and_then(|n| n.to_str()),
        Some("Gemfile" | "Rakefile" | "Guardfile" | "Capfile")
    )
}
