//! The closed set of node shapes rules match against.
//!
//! The tree-sitter CST is lowered into this form once per file. Only the
//! shapes a rule needs to tell apart get their own variant; everything else is
//! [`NodeKind::Other`], which still carries its children so walks reach calls
//! nested inside classes, blocks, and method bodies.

use enumlint_core::types::Span;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A method call. `receiver` is `None` for bare calls like `enum status: {}`.
    Call {
        receiver: Option<Box<Node>>,
        method: String,
        arguments: Vec<Node>,
        block: Option<Box<Node>>,
    },
    /// A hash literal, either braced or an implicit trailing keyword hash.
    Hash { pairs: Vec<Pair>, splats: Vec<Node> },
    /// An array literal, including `%w[]` and `%i[]` forms.
    Array(Vec<Node>),
    /// A symbol literal with its name (without the leading colon).
    Sym(String),
    /// A non-interpolated string literal with escapes already processed.
    Str(String),
    /// Any other node, tagged with its tree-sitter kind.
    Other {
        kind: &'static str,
        children: Vec<Node>,
    },
}

/// One `key => value` (or `key: value`) entry of a hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub key: Node,
    /// `None` for Ruby 3.1 value omission (`{ active: }`).
    pub value: Option<Node>,
    pub span: Span,
}

/// A parsed file: the source text and its lowered tree.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub source: String,
    pub root: Node,
    /// True when tree-sitter had to recover from syntax errors, or when
    /// nesting was too deep to lower completely.
    pub has_errors: bool,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The original source text of this node.
    pub fn source<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }

    /// Literal value of a symbol or string node.
    pub fn literal_value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Sym(value) | NodeKind::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, NodeKind::Array(_))
    }

    pub fn is_hash(&self) -> bool {
        matches!(self.kind, NodeKind::Hash { .. })
    }

    /// Pairs of a hash node, `None` for every other shape.
    pub fn hash_pairs(&self) -> Option<&[Pair]> {
        match &self.kind {
            NodeKind::Hash { pairs, .. } => Some(pairs),
            _ => None,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Call {
                receiver,
                arguments,
                block,
                ..
            } => receiver
                .iter()
                .map(|r| r.as_ref())
                .chain(arguments.iter())
                .chain(block.iter().map(|b| b.as_ref()))
                .collect(),
            NodeKind::Hash { pairs, splats } => {
                let mut out: Vec<&Node> = Vec::with_capacity(pairs.len() * 2 + splats.len());
                for pair in pairs {
                    out.push(&pair.key);
                    if let Some(value) = &pair.value {
                        out.push(value);
                    }
                }
                out.extend(splats.iter());
                out.sort_by_key(|n| n.span.start);
                out
            }
            NodeKind::Array(elements) => elements.iter().collect(),
            NodeKind::Other { children, .. } => children.iter().collect(),
            NodeKind::Sym(_) | NodeKind::Str(_) => Vec::new(),
        }
    }
}

/// Pre-order walk over `root` and all its descendants.
pub fn walk<'a>(root: &'a Node, mut visit: impl FnMut(&'a Node)) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visit(node);
        let children = node.children();
        stack.extend(children.into_iter().rev());
    }
}
