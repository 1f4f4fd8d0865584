//! Trigger detection - is the cursor inside an open "@..." context?
//!
//! Works purely on the flat-text coordinate space: a side-effect-free
//! backward scan from the cursor, with token spans acting as opaque barriers.
//! Markers that belong to an already-inserted token never re-trigger.

use std::ops::Range;

/// The character that opens a mention context.
pub const MARKER: char = '@';

/// An active "typing a mention" context: the un-consumed marker's flat
/// offset plus the query typed after it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerContext {
    pub marker_offset: usize,
    pub query: String,
}

/// Scan backward from `cursor` for the nearest marker outside any token.
///
/// Returns `None` when the cursor sits strictly inside a token, when the
/// scan reaches a token span before finding a marker (tokens are opaque: a
/// marker on their far side was either consumed or belongs to a different
/// context), or when no marker precedes the cursor.
pub fn detect(
    cursor: usize,
    flat_text: &str,
    token_spans: &[Range<usize>],
) -> Option<TriggerContext> {
    let chars: Vec<char> = flat_text.chars().collect();
    let cursor = cursor.min(chars.len());

    if token_spans
        .iter()
        .any(|s| s.start < cursor && cursor < s.end)
    {
        return None;
    }

    let mut i = cursor;
    while i > 0 {
        i -= 1;
        if token_spans.iter().any(|s| s.start <= i && i < s.end) {
            return None;
        }
        if chars[i] == MARKER {
            return Some(TriggerContext {
                marker_offset: i,
                query: chars[i + 1..cursor].iter().collect(),
            });
        }
    }

    None
}
