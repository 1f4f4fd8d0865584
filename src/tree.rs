//! The rendered content tree - the authoritative store for editor content.
//!
//! A `RenderTree` is an ordered list of nodes, each either an editable text
//! run or an atomic mention token. It plays the role a contenteditable
//! surface plays in a browser: edits land here first, and the derived
//! [`Document`](crate::document::Document) is rebuilt from it afterwards.
//!
//! Raw trees may transiently hold empty or adjacent text runs (exactly as a
//! live editing surface would); [`RenderTree::normalize`] restores the merged
//! form. All offsets are counted in characters, never bytes.

use std::ops::Range;

/// A node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    /// An editable plain-text run.
    Text(String),
    /// An atomic mention token. Non-editable; removable only as a whole.
    Token { identity: String, label: String },
}

impl RenderNode {
    pub fn text(content: impl Into<String>) -> Self {
        RenderNode::Text(content.into())
    }

    pub fn token(identity: impl Into<String>, label: impl Into<String>) -> Self {
        RenderNode::Token {
            identity: identity.into(),
            label: label.into(),
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, RenderNode::Token { .. })
    }

    /// Length of this node's contribution to the flat logical text, in chars.
    /// A token contributes its marker plus label ("@label").
    pub fn logical_len(&self) -> usize {
        match self {
            RenderNode::Text(s) => s.chars().count(),
            RenderNode::Token { label, .. } => 1 + label.chars().count(),
        }
    }

    /// Append this node's logical text to `out`.
    pub fn push_logical_text(&self, out: &mut String) {
        match self {
            RenderNode::Text(s) => out.push_str(s),
            RenderNode::Token { label, .. } => {
                out.push(crate::trigger::MARKER);
                out.push_str(label);
            }
        }
    }
}

/// A position in the rendered tree: a node index plus an in-node char offset.
///
/// This is the engine's stand-in for a native selection endpoint (DOM node +
/// offset). Offsets inside a token node are meaningless for cursor purposes
/// and get snapped to the token's boundaries by the offset mapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreePosition {
    pub node: usize,
    pub offset: usize,
}

impl TreePosition {
    pub const fn new(node: usize, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// The ordered node list constituting the editor content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderTree {
    nodes: Vec<RenderNode>,
}

impl RenderTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Build a tree from raw nodes, normalizing adjacent/empty text runs.
    pub fn from_nodes(nodes: Vec<RenderNode>) -> Self {
        let mut tree = Self { nodes };
        tree.normalize();
        tree
    }

    pub fn nodes(&self) -> &[RenderNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.logical_len() == 0
    }

    /// Total logical length in chars.
    pub fn logical_len(&self) -> usize {
        self.nodes.iter().map(RenderNode::logical_len).sum()
    }

    /// The flat logical text: text runs verbatim, tokens as "@label".
    pub fn logical_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.push_logical_text(&mut out);
        }
        out
    }

    /// Drop empty text runs and merge adjacent ones.
    pub fn normalize(&mut self) {
        let mut out: Vec<RenderNode> = Vec::with_capacity(self.nodes.len());
        for node in self.nodes.drain(..) {
            match node {
                RenderNode::Text(s) if s.is_empty() => {}
                RenderNode::Text(s) => match out.last_mut() {
                    Some(RenderNode::Text(prev)) => prev.push_str(&s),
                    _ => out.push(RenderNode::Text(s)),
                },
                token => out.push(token),
            }
        }
        self.nodes = out;
    }

    /// Insert plain text at a flat char offset.
    pub fn insert_text(&mut self, offset: usize, text: &str) {
        self.splice(offset..offset, vec![RenderNode::text(text)]);
    }

    /// Remove a flat char range. Tokens overlapping the range are removed
    /// whole (they cannot be split).
    pub fn remove(&mut self, range: Range<usize>) {
        self.splice(range, Vec::new());
    }

    /// Replace a flat char range with the given nodes, then normalize.
    ///
    /// Text runs straddling a range boundary are split; a token overlapping
    /// the range in any way is dropped in its entirety. Out-of-range bounds
    /// clamp to the content.
    pub fn splice(&mut self, range: Range<usize>, replacement: Vec<RenderNode>) {
        let total = self.logical_len();
        let start = range.start.min(total);
        let end = range.end.clamp(start, total);

        let mut out: Vec<RenderNode> = Vec::with_capacity(self.nodes.len() + replacement.len());
        let mut pending = Some(replacement);
        let mut pos = 0usize;

        for node in self.nodes.drain(..) {
            let len = node.logical_len();
            let node_start = pos;
            let node_end = pos + len;
            pos = node_end;

            if node_end <= start {
                out.push(node);
                continue;
            }

            match node {
                RenderNode::Text(s) => {
                    if node_start < start {
                        out.push(RenderNode::Text(char_prefix(&s, start - node_start)));
                    }
                    if let Some(rep) = pending.take() {
                        out.extend(rep);
                    }
                    if node_end > end {
                        let skip = end.saturating_sub(node_start);
                        out.push(RenderNode::Text(char_suffix(&s, skip)));
                    }
                }
                token => {
                    if let Some(rep) = pending.take() {
                        out.extend(rep);
                    }
                    if node_start >= end {
                        out.push(token);
                    }
                    // A token overlapping [start, end) is dropped whole.
                }
            }
        }

        if let Some(rep) = pending.take() {
            out.extend(rep);
        }

        self.nodes = out;
        self.normalize();
    }

    /// Serialize the rendered form: text runs escaped, tokens as non-editable
    /// anchor elements carrying their identity and the click affordance class.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for node in &self.nodes {
            match node {
                RenderNode::Text(s) => escape_into(s, &mut html),
                RenderNode::Token { identity, label } => {
                    html.push_str(
                        "<a contenteditable=\"false\" class=\"mention-tag\" data-user-id=\"",
                    );
                    escape_into(identity, &mut html);
                    html.push_str("\">@");
                    escape_into(label, &mut html);
                    html.push_str("</a>");
                }
            }
        }
        html
    }
}

/// First `n` chars of `s`.
fn char_prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Everything after the first `n` chars of `s`.
fn char_suffix(s: &str, n: usize) -> String {
    s.chars().skip(n).collect()
}

/// Minimal HTML escaping for the serialized rendered form.
pub(crate) fn escape_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
