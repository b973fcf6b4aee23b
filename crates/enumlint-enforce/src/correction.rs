use enumlint_core::types::Span;
use serde::{Deserialize, Serialize};

/// Replace the text at `span` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub span: Span,
    pub replacement: String,
}

/// Result of applying a batch of edits to one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corrected {
    pub text: String,
    pub applied: u32,
    /// Edits dropped because they overlapped an earlier one or fell outside the source.
    pub skipped: u32,
}

/// Apply non-overlapping edits in source order.
///
/// When two edits overlap, the one starting first wins and the other is
/// skipped; the next fix pass picks it up again if it still applies.
pub fn apply_edits(source: &str, edits: &[Edit]) -> Corrected {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by_key(|e| (e.span.start, e.span.end));

    let mut text = String::with_capacity(source.len());
    let mut cursor = 0usize;
    let mut applied = 0u32;
    let mut skipped = 0u32;

    for edit in ordered {
        let Span { start, end, .. } = edit.span;
        let in_bounds = end <= source.len()
            && start <= end
            && source.is_char_boundary(start)
            && source.is_char_boundary(end);
        if !in_bounds || start < cursor {
            tracing::debug!(start, end, "skipping overlapping or out-of-range edit");
            skipped += 1;
            continue;
        }
        text.push_str(&source[cursor..start]);
        text.push_str(&edit.replacement);
        cursor = end;
        applied += 1;
    }
    text.push_str(&source[cursor..]);

    Corrected {
        text,
        applied,
        skipped,
    }
}
