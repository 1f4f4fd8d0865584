//! The Document: the ordered segment list derived from the rendered tree.

use std::ops::Range;

use crate::tree::{RenderNode, RenderTree};

use super::segment::Segment;

/// The normalized segment sequence plus the caches derived from it.
///
/// A Document is rebuilt from the rendered tree after every edit rather than
/// patched incrementally; the tree stays authoritative and the Document can
/// never drift from it. No two adjacent segments are both text runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    segments: Vec<Segment>,
    flat_text: String,
    flat_len: usize,
    token_count: usize,
}

impl Document {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuild the Document from the current tree state.
    pub fn from_tree(tree: &RenderTree) -> Self {
        let mut segments: Vec<Segment> = Vec::with_capacity(tree.nodes().len());
        for node in tree.nodes() {
            match node {
                RenderNode::Text(s) if s.is_empty() => {}
                RenderNode::Text(s) => match segments.last_mut() {
                    Some(Segment::Text { content }) => content.push_str(s),
                    _ => segments.push(Segment::Text { content: s.clone() }),
                },
                RenderNode::Token { identity, label } => segments.push(Segment::Token {
                    identity: identity.clone(),
                    label: label.clone(),
                }),
            }
        }

        let mut flat_text = String::new();
        for seg in &segments {
            seg.push_logical_text(&mut flat_text);
        }
        let flat_len = flat_text.chars().count();
        let token_count = segments.iter().filter(|s| s.is_token()).count();

        Self {
            segments,
            flat_text,
            flat_len,
            token_count,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The flat logical text (tokens rendered as "@label").
    pub fn flat_text(&self) -> &str {
        &self.flat_text
    }

    /// Length of the flat text in chars.
    pub fn flat_len(&self) -> usize {
        self.flat_len
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn is_empty(&self) -> bool {
        self.flat_len == 0
    }

    /// Flat char ranges occupied by tokens, in document order.
    pub fn token_spans(&self) -> Vec<Range<usize>> {
        let mut spans = Vec::with_capacity(self.token_count);
        let mut pos = 0usize;
        for seg in &self.segments {
            let len = seg.logical_len();
            if seg.is_token() {
                spans.push(pos..pos + len);
            }
            pos += len;
        }
        spans
    }

    /// True when `offset` falls strictly inside a token span. Offsets at a
    /// token's boundaries are valid cursor positions and return false.
    pub fn is_inside_token(&self, offset: usize) -> bool {
        self.token_spans()
            .iter()
            .any(|s| s.start < offset && offset < s.end)
    }

    /// The token span covering the char at index `char_index`, if any.
    pub fn token_span_covering(&self, char_index: usize) -> Option<Range<usize>> {
        self.token_spans()
            .into_iter()
            .find(|s| s.start <= char_index && char_index < s.end)
    }

    /// Clamp an offset to the content and move it out of any token interior
    /// (forward, to the token's end).
    pub fn snap_offset(&self, offset: usize) -> usize {
        let offset = offset.min(self.flat_len);
        match self
            .token_spans()
            .into_iter()
            .find(|s| s.start < offset && offset < s.end)
        {
            Some(span) => span.end,
            None => offset,
        }
    }
}
