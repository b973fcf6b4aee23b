//! Rendering Ruby literals for autocorrected source.

use enumlint_parsers::ast::{Node, NodeKind};

/// Rewrite array elements as a hash mapping each element to its zero-based index:
/// `[a, b]` becomes `{a => 0, b => 1}`.
pub fn rewrite(elements: &[Node], source: &str) -> String {
    let pairs = elements
        .iter()
        .enumerate()
        .map(|(index, elem)| format!("{} => {}", render_element(elem, source), index))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{pairs}}}")
}

/// Strings are re-quoted, symbols re-inspected, anything else kept verbatim.
pub fn render_element(elem: &Node, source: &str) -> String {
    match &elem.kind {
        NodeKind::Str(value) => dump_string(value),
        NodeKind::Sym(name) => inspect_symbol(name),
        _ => elem.source(source).to_string(),
    }
}

/// Ruby's `String#dump`: a double-quoted literal that is pure ASCII.
pub fn dump_string(value: &str) -> String {
    quote(value, true)
}

/// Ruby's `Symbol#inspect`: `:name` for plain identifiers and operators,
/// `:"..."` otherwise.
pub fn inspect_symbol(name: &str) -> String {
    if is_plain_symbol(name) {
        format!(":{name}")
    } else {
        format!(":{}", quote(name, false))
    }
}

const OPERATOR_SYMBOLS: &[&str] = &[
    "+", "-", "*", "/", "%", "**", "==", "===", "!=", "=~", "!~", "!", "<", ">", "<=", ">=",
    "<=>", "<<", ">>", "&", "|", "^", "~", "+@", "-@", "[]", "[]=", "`",
];

fn is_plain_symbol(name: &str) -> bool {
    if OPERATOR_SYMBOLS.contains(&name) {
        return true;
    }
    if let Some(rest) = name.strip_prefix("@@") {
        return is_identifier(rest);
    }
    if let Some(rest) = name.strip_prefix('@').or_else(|| name.strip_prefix('$')) {
        return is_identifier(rest);
    }
    let base = name
        .strip_suffix('?')
        .or_else(|| name.strip_suffix('!'))
        .or_else(|| name.strip_suffix('='))
        .unwrap_or(name);
    is_identifier(base)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() || !c.is_ascii() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric() || !c.is_ascii())
}

fn quote(value: &str, ascii_only: bool) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => out.push_str("\\#"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0c' => out.push_str("\\f"),
            '\x0b' => out.push_str("\\v"),
            '\x08' => out.push_str("\\b"),
            '\x07' => out.push_str("\\a"),
            '\x1b' => out.push_str("\\e"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02X}", c as u32)),
            c if c.is_ascii() => out.push(c),
            c if ascii_only || c.is_control() => {
                let cp = c as u32;
                if cp <= 0xFFFF {
                    out.push_str(&format!("\\u{cp:04X}"));
                } else {
                    out.push_str(&format!("\\u{{{cp:X}}}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
