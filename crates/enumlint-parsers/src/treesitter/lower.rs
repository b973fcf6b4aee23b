//! Lowering from the tree-sitter-ruby CST into [`crate::ast`].

use enumlint_core::types::Span;
use tree_sitter::Node as TsNode;

use crate::ast::{Node, NodeKind, Pair};

/// Deepest CST nesting that is lowered. Nodes below it become childless
/// `Other` nodes and the tree is marked truncated.
pub(super) const MAX_DEPTH: usize = 256;

pub(super) struct Lowered {
    pub root: Node,
    /// Some subtree was cut off at [`MAX_DEPTH`].
    pub truncated: bool,
}

pub(super) fn lower(root: TsNode<'_>, src: &[u8]) -> Lowered {
    let mut lowerer = Lowerer {
        src,
        depth: 0,
        truncated: false,
    };
    let root = lowerer.node(root);
    Lowered {
        root,
        truncated: lowerer.truncated,
    }
}

struct Lowerer<'s> {
    src: &'s [u8],
    depth: usize,
    truncated: bool,
}

impl Lowerer<'_> {
    fn node(&mut self, node: TsNode<'_>) -> Node {
        let span = span_of(node);
        if self.depth >= MAX_DEPTH {
            self.truncated = true;
            let kind = NodeKind::Other {
                kind: node.kind(),
                children: Vec::new(),
            };
            return Node::new(kind, span);
        }
        self.depth += 1;
        let kind = self.kind(node);
        self.depth -= 1;
        Node::new(kind, span)
    }

    fn kind(&mut self, node: TsNode<'_>) -> NodeKind {
        let src = self.src;
        match node.kind() {
            "call" => self.call(node),
            "hash" => self.hash(node),
            "array" | "string_array" | "symbol_array" => NodeKind::Array(self.children(node)),
            "simple_symbol" => {
                let text = text_of(node, src);
                NodeKind::Sym(text.strip_prefix(':').unwrap_or(text).to_string())
            }
            "hash_key_symbol" => NodeKind::Sym(text_of(node, src).to_string()),
            "delimited_symbol" => {
                let text = text_of(node, src);
                let raw = text.starts_with(":'") || text.starts_with("%s");
                match literal_text(node, src, raw) {
                    Some(value) => NodeKind::Sym(value),
                    None => self.other(node),
                }
            }
            "bare_symbol" => match bare_literal(node, src) {
                Some(value) => NodeKind::Sym(value),
                None => self.other(node),
            },
            "string" => {
                let text = text_of(node, src);
                let raw = text.starts_with('\'') || text.starts_with("%q");
                match literal_text(node, src, raw) {
                    Some(value) => NodeKind::Str(value),
                    None => self.other(node),
                }
            }
            "bare_string" => match bare_literal(node, src) {
                Some(value) => NodeKind::Str(value),
                None => self.other(node),
            },
            _ => self.other(node),
        }
    }

    fn other(&mut self, node: TsNode<'_>) -> NodeKind {
        NodeKind::Other {
            kind: node.kind(),
            children: self.children(node),
        }
    }

    fn children(&mut self, node: TsNode<'_>) -> Vec<Node> {
        named_children(node)
            .into_iter()
            .map(|child| self.node(child))
            .collect()
    }

    fn call(&mut self, node: TsNode<'_>) -> NodeKind {
        let receiver = node
            .child_by_field_name("receiver")
            .map(|r| Box::new(self.node(r)));
        let method = node
            .child_by_field_name("method")
            .map(|m| text_of(m, self.src).to_string())
            .unwrap_or_default();
        let arguments = node
            .child_by_field_name("arguments")
            .map(|a| self.arguments(a))
            .unwrap_or_default();
        let block = node
            .child_by_field_name("block")
            .map(|b| Box::new(self.node(b)));

        NodeKind::Call {
            receiver,
            method,
            arguments,
            block,
        }
    }

    /// Lower an `argument_list`. A run of keyword pairs (and `**splat`s) forms a
    /// single implicit hash argument, the way Ruby passes trailing keywords.
    fn arguments(&mut self, list: TsNode<'_>) -> Vec<Node> {
        let mut args = Vec::new();
        let mut implicit = ImplicitHash::default();

        for child in named_children(list) {
            match child.kind() {
                "pair" => {
                    let pair = self.pair(child);
                    implicit.extend(pair.span);
                    implicit.pairs.push(pair);
                }
                "hash_splat_argument" => {
                    let splat = self.node(child);
                    implicit.extend(splat.span);
                    implicit.splats.push(splat);
                }
                _ => {
                    implicit.flush_into(&mut args);
                    args.push(self.node(child));
                }
            }
        }
        implicit.flush_into(&mut args);
        args
    }

    fn hash(&mut self, node: TsNode<'_>) -> NodeKind {
        let mut pairs = Vec::new();
        let mut splats = Vec::new();
        for child in named_children(node) {
            if child.kind() == "pair" {
                pairs.push(self.pair(child));
            } else {
                splats.push(self.node(child));
            }
        }
        NodeKind::Hash { pairs, splats }
    }

    fn pair(&mut self, node: TsNode<'_>) -> Pair {
        let span = span_of(node);
        let key = match node.child_by_field_name("key") {
            Some(k) => self.node(k),
            None => Node::new(
                NodeKind::Other {
                    kind: "missing",
                    children: vec![],
                },
                span,
            ),
        };
        let value = node.child_by_field_name("value").map(|v| self.node(v));
        Pair { key, value, span }
    }
}

/// Keyword pairs collected from an argument list until a positional argument
/// ends the run.
#[derive(Default)]
struct ImplicitHash {
    pairs: Vec<Pair>,
    splats: Vec<Node>,
    span: Option<Span>,
}

impl ImplicitHash {
    fn extend(&mut self, span: Span) {
        self.span = Some(self.span.map_or(span, |s| s.to(span)));
    }

    fn flush_into(&mut self, args: &mut Vec<Node>) {
        if let Some(span) = self.span.take() {
            args.push(Node::new(
                NodeKind::Hash {
                    pairs: std::mem::take(&mut self.pairs),
                    splats: std::mem::take(&mut self.splats),
                },
                span,
            ));
        }
    }
}

/// Contents of a `%w[]`/`%i[]` element, which may or may not carry content children.
fn bare_literal(node: TsNode<'_>, src: &[u8]) -> Option<String> {
    if node.named_child_count() == 0 {
        return Some(text_of(node, src).to_string());
    }
    literal_text(node, src, true)
}

/// Concatenated literal contents of a string-like node, or `None` when it
/// interpolates. `raw` selects single-quote escape rules.
fn literal_text(node: TsNode<'_>, src: &[u8], raw: bool) -> Option<String> {
    let mut out = String::new();
    for child in named_children(node) {
        match child.kind() {
            "string_content" => {
                let text = text_of(child, src);
                if raw {
                    out.push_str(&unescape_single_quoted(text));
                } else {
                    out.push_str(text);
                }
            }
            "escape_sequence" => out.push_str(&unescape_sequence(text_of(child, src))),
            _ => return None,
        }
    }
    Some(out)
}

fn unescape_single_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '\\' || next == '\'' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Decode one double-quoted escape sequence such as `\n`, `\u00e9` or `\x41`.
pub(super) fn unescape_sequence(seq: &str) -> String {
    let body = match seq.strip_prefix('\\') {
        Some(b) => b,
        None => return seq.to_string(),
    };
    let mut chars = body.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };
    let rest = chars.as_str();

    match first {
        'n' => "\n".to_string(),
        't' => "\t".to_string(),
        's' => " ".to_string(),
        'r' => "\r".to_string(),
        'a' => "\x07".to_string(),
        'b' => "\x08".to_string(),
        'e' => "\x1b".to_string(),
        'f' => "\x0c".to_string(),
        'v' => "\x0b".to_string(),
        '\n' => String::new(),
        'u' => decode_unicode(rest).unwrap_or_else(|| body.to_string()),
        'x' => u32::from_str_radix(rest, 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| body.to_string()),
        '0'..='7' => u32::from_str_radix(body, 8)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| body.to_string()),
        _ => body.to_string(),
    }
}

fn decode_unicode(rest: &str) -> Option<String> {
    if let Some(inner) = rest.strip_prefix('{').and_then(|r| r.strip_suffix('}')) {
        inner
            .split_whitespace()
            .map(|cp| u32::from_str_radix(cp, 16).ok().and_then(char::from_u32))
            .collect()
    } else {
        u32::from_str_radix(rest, 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
    }
}

fn named_children(node: TsNode<'_>) -> Vec<TsNode<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| c.kind() != "comment")
        .collect()
}

fn text_of<'a>(node: TsNode<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

fn span_of(node: TsNode<'_>) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span::new(
        node.start_byte(),
        node.end_byte(),
        start.row as u32 + 1,
        start.column as u32 + 1,
        end.row as u32 + 1,
        end.column as u32 + 1,
    )
}
