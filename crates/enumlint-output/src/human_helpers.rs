use enumlint_core::types::Finding;

pub(crate) fn format_finding_human(path: &str, f: &Finding) -> String {
    let mut out = format!("{}:{}:{}: {}: ", path, f.span.line, f.span.column, f.severity.code());
    if f.correctable {
        out.push_str("[Correctable] ");
    }
    out.push_str(&format!("{}: {}\n", f.rule, f.message));

    if !f.source_line.is_empty() {
        out.push_str(&f.source_line);
        out.push('\n');
        out.push_str(&caret_line(f));
        out.push('\n');
    }

    out
}

/// Underline for the flagged span, measured in characters of `source_line`.
/// Spans running past the line are cut at the line end.
pub(crate) fn caret_line(f: &Finding) -> String {
    let line = f.source_line.as_str();
    let start = (f.span.column as usize).saturating_sub(1).min(line.len());
    let end = if f.span.end_line == f.span.line {
        (f.span.end_column as usize).saturating_sub(1).min(line.len())
    } else {
        line.len()
    };

    let indent = line.get(..start).map_or(start, |s| s.chars().count());
    let width = line
        .get(start..end.max(start))
        .map_or(1, |s| s.chars().count())
        .max(1);

    format!("{}{}", " ".repeat(indent), "^".repeat(width))
}

pub(crate) fn plural(count: u32, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
