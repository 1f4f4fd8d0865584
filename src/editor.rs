//! The mention editor: keeps the rendered tree, the flat text, and the
//! cursor in lockstep, and drives the candidate popup.
//!
//! Control flow for every raw edit: mutate the tree, rebuild the Document
//! from it, recompute the cursor in flat coordinates, then re-run trigger
//! detection to open, update, or close the popup. All operations run to
//! completion synchronously; a rejected edit leaves the tree untouched.

use crate::candidate::Candidate;
use crate::config::EditorOptions;
use crate::document::{from_flat_offset, to_flat_offset, Document};
use crate::events::EditorEvent;
use crate::filter;
use crate::limits;
use crate::popup::{self, Point, PopupState, Rect};
use crate::tree::{RenderNode, RenderTree, TreePosition};
use crate::trigger::{self, MARKER};

/// A key press fed to the editor by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
}

/// An inline mention editor instance.
pub struct MentionsEditor {
    options: EditorOptions,
    /// Authoritative content. Edits land here first.
    tree: RenderTree,
    /// Derived view, rebuilt from the tree after every edit.
    document: Document,
    /// Cursor as a flat char offset, `0..=flat_len`.
    cursor: usize,
    focused: bool,
    popup: Option<PopupState>,
    /// Caret rectangle in screen coordinates, supplied by the host.
    caret_anchor: Rect,
    /// Visible viewport in screen coordinates, supplied by the host.
    viewport: Rect,
    events: Vec<EditorEvent>,
}

impl MentionsEditor {
    /// Create an empty editor.
    pub fn new(options: EditorOptions) -> Self {
        Self::with_value(options, "")
    }

    /// Create an editor pre-filled with `value`. Labels listed in the
    /// options' `default_mentions` that name a known candidate are converted
    /// to tokens once, here; they are never re-derived from text afterwards.
    pub fn with_value(options: EditorOptions, value: &str) -> Self {
        let tree = seed_tree(value, &options);
        let document = Document::from_tree(&tree);
        let cursor = document.flat_len();
        Self {
            options,
            tree,
            document,
            cursor,
            focused: false,
            popup: None,
            caret_anchor: Rect::default(),
            viewport: Rect::new(0, 0, 1024, 768),
            events: Vec::new(),
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Drain the queued host events.
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    // ========================================================================
    // Geometry supplied by the host
    // ========================================================================

    /// Update the visible viewport rectangle.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
        if let Some(state) = &mut self.popup {
            state.position = popup::place(self.caret_anchor, viewport, self.options.popup_edge);
        }
    }

    /// Update the caret rectangle (the popup anchor).
    pub fn set_caret_anchor(&mut self, anchor: Rect) {
        self.caret_anchor = anchor;
        if let Some(state) = &mut self.popup {
            state.position = popup::place(anchor, self.viewport, self.options.popup_edge);
        }
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    /// Move the cursor to a flat offset. Offsets clamp to the content and
    /// snap out of token interiors; trigger detection re-runs.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = self.document.snap_offset(offset);
        self.refresh_trigger();
    }

    /// Move the cursor to a tree position (e.g. from a host hit test).
    pub fn set_tree_cursor(&mut self, position: TreePosition) {
        let offset = to_flat_offset(&self.tree, position);
        self.set_cursor(offset);
    }

    /// The cursor expressed as a tree position.
    pub fn tree_cursor(&self) -> TreePosition {
        from_flat_offset(&self.tree, self.cursor)
    }

    fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut target = self.cursor - 1;
        if let Some(span) = self.document.token_span_covering(target) {
            target = span.start;
        }
        self.cursor = target;
        self.refresh_trigger();
    }

    fn move_right(&mut self) {
        if self.cursor >= self.document.flat_len() {
            return;
        }
        let mut target = self.cursor + 1;
        if self.document.is_inside_token(target) {
            // Jumping over the token we just stepped into.
            if let Some(span) = self.document.token_span_covering(self.cursor) {
                target = span.end;
            }
        }
        self.cursor = target;
        self.refresh_trigger();
    }

    // ========================================================================
    // Raw edits
    // ========================================================================

    /// Insert text at the cursor (typing or paste). The whole edit is
    /// rejected with `TooLong` if the result would exceed `max_length`.
    pub fn insert_text(&mut self, text: &str) {
        let added = text.chars().count();
        if added == 0 {
            return;
        }

        if let Err(e) = limits::check_length(self.document.flat_len() + added, self.options.max_length)
        {
            tracing::debug!(len = self.document.flat_len(), added, "insert rejected");
            self.events.push(EditorEvent::Error(e));
            return;
        }

        self.tree.insert_text(self.cursor, text);
        let new_cursor = self.cursor + added;
        self.apply_edit(new_cursor);
    }

    /// Backspace. A token before the cursor is removed whole.
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let range = match self.document.token_span_covering(self.cursor - 1) {
            Some(span) => span,
            None => self.cursor - 1..self.cursor,
        };
        let new_cursor = range.start;
        self.tree.remove(range);
        self.apply_edit(new_cursor);
    }

    /// Forward delete. A token after the cursor is removed whole.
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.document.flat_len() {
            return;
        }
        let range = match self.document.token_span_covering(self.cursor) {
            Some(span) => span,
            None => self.cursor..self.cursor + 1,
        };
        let new_cursor = range.start;
        self.tree.remove(range);
        self.apply_edit(new_cursor);
    }

    /// Re-derive the Document after a tree mutation, place the cursor, and
    /// re-run trigger detection.
    fn apply_edit(&mut self, new_cursor: usize) {
        self.document = Document::from_tree(&self.tree);
        self.cursor = self.document.snap_offset(new_cursor);
        self.events
            .push(EditorEvent::Changed(self.document.flat_text().to_string()));
        self.refresh_trigger();
    }

    // ========================================================================
    // Trigger and popup
    // ========================================================================

    /// Recompute the trigger context at the current cursor and reconcile the
    /// popup with it.
    fn refresh_trigger(&mut self) {
        let spans = self.document.token_spans();
        match trigger::detect(self.cursor, self.document.flat_text(), &spans) {
            Some(ctx) => {
                let position =
                    popup::place(self.caret_anchor, self.viewport, self.options.popup_edge);
                let filtered_len = filter::filter(&ctx.query, &self.options.candidates).len();
                match &mut self.popup {
                    Some(state) => {
                        state.marker_offset = ctx.marker_offset;
                        state.query = ctx.query;
                        state.position = position;
                        state.clamp_selection(filtered_len);
                    }
                    None => {
                        tracing::debug!(marker = ctx.marker_offset, "popup opened");
                        self.popup = Some(PopupState::open_at(ctx.marker_offset, ctx.query, position));
                        self.events.push(EditorEvent::PopupOpened { position });
                    }
                }
            }
            None => self.close_popup(),
        }
    }

    fn close_popup(&mut self) {
        if self.popup.take().is_some() {
            tracing::debug!("popup closed");
            self.events.push(EditorEvent::PopupClosed);
        }
    }

    pub fn popup(&self) -> Option<&PopupState> {
        self.popup.as_ref()
    }

    pub fn is_popup_open(&self) -> bool {
        self.popup.is_some()
    }

    /// Screen position for the host's popup widget, if open.
    pub fn popup_position(&self) -> Option<Point> {
        self.popup.as_ref().map(|p| p.position)
    }

    /// Candidates matching the current query, in list order.
    pub fn filtered_candidates(&self) -> Vec<&Candidate> {
        match &self.popup {
            Some(state) => filter::filter(&state.query, &self.options.candidates),
            None => Vec::new(),
        }
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.popup.as_ref().map(|p| p.selected_index)
    }

    /// A click that landed outside both the editable surface and the popup.
    pub fn click_outside(&mut self) {
        self.close_popup();
    }

    // ========================================================================
    // Mention insertion
    // ========================================================================

    /// Replace the active trigger span (marker plus query) with a token for
    /// `candidate`, followed by one separating space. No-op without an
    /// active trigger.
    pub fn insert_mention(&mut self, candidate: &Candidate) {
        let marker = match &self.popup {
            Some(state) => state.marker_offset,
            None => return,
        };

        if let Err(e) =
            limits::check_mentions(self.document.token_count() + 1, self.options.max_mentions)
        {
            tracing::debug!(count = self.document.token_count(), "mention rejected");
            self.events.push(EditorEvent::Error(e));
            self.close_popup();
            return;
        }

        // Replacing [marker, cursor) with "@label" plus a trailing space.
        let label_len = candidate.name.chars().count();
        let removed = self.cursor - marker;
        let result_len = self.document.flat_len() - removed + label_len + 2;
        if let Err(e) = limits::check_length(result_len, self.options.max_length) {
            tracing::debug!(result_len, "mention rejected");
            self.events.push(EditorEvent::Error(e));
            return;
        }

        let identity = candidate.identity(self.options.identity_key).to_string();
        self.tree.splice(
            marker..self.cursor,
            vec![
                RenderNode::token(identity, candidate.name.clone()),
                RenderNode::text(" "),
            ],
        );

        tracing::debug!(name = %candidate.name, marker, "mention inserted");
        // Cursor lands after the token and its separating space.
        self.apply_edit(marker + label_len + 2);
        self.events.push(EditorEvent::Mention(candidate.clone()));
        self.close_popup();
    }

    // ========================================================================
    // Keyboard contract
    // ========================================================================

    /// Feed a key press. Returns true when the editor consumed the key (the
    /// host must then suppress the key's default behavior).
    pub fn handle_key(&mut self, key: Key) -> bool {
        if let Some(state) = &mut self.popup {
            match key {
                Key::ArrowUp => {
                    state.select_previous();
                    return true;
                }
                Key::ArrowDown => {
                    let len = filter::filter(&state.query, &self.options.candidates).len();
                    state.select_next(len);
                    return true;
                }
                Key::Enter => {
                    let index = state.selected_index;
                    if let Some(candidate) = self.filtered_candidates().get(index).cloned().cloned()
                    {
                        self.insert_mention(&candidate);
                    }
                    return true;
                }
                Key::Escape => {
                    self.close_popup();
                    return true;
                }
                _ => {}
            }
        }

        match key {
            Key::Char(ch) => {
                self.insert_text(&ch.to_string());
                true
            }
            Key::Backspace => {
                self.delete_backward();
                true
            }
            Key::Delete => {
                self.delete_forward();
                true
            }
            Key::Left => {
                self.move_left();
                true
            }
            Key::Right => {
                self.move_right();
                true
            }
            _ => false,
        }
    }

    // ========================================================================
    // Focus and placeholder
    // ========================================================================

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Whether the rendered form currently shows the placeholder.
    pub fn shows_placeholder(&self) -> bool {
        self.document.is_empty() && !self.focused
    }

    // ========================================================================
    // Token activation
    // ========================================================================

    /// Activate the token at `node_index` (a host click on the rendered
    /// token). Emits the token's identity; never mutates content.
    pub fn token_click(&mut self, node_index: usize) {
        if let Some(RenderNode::Token { identity, .. }) = self.tree.nodes().get(node_index) {
            self.events
                .push(EditorEvent::TokenClicked(identity.clone()));
        }
    }

    // ========================================================================
    // Imperative host operations
    // ========================================================================

    /// The current flat text. Empty when only the placeholder is shown.
    pub fn all_text_content(&self) -> String {
        self.document.flat_text().to_string()
    }

    /// The serialized rendered form. Shows the placeholder text while the
    /// editor is empty and unfocused.
    pub fn all_html_content(&self) -> String {
        if self.shows_placeholder() {
            let mut out = String::new();
            crate::tree::escape_into(&self.options.placeholder.text, &mut out);
            return out;
        }
        self.tree.to_html()
    }

    /// Reset to the empty/placeholder state and close the popup.
    pub fn clear_content(&mut self) {
        let was_empty = self.document.is_empty();
        self.tree = RenderTree::new();
        self.document = Document::empty();
        self.cursor = 0;
        self.close_popup();
        if !was_empty {
            self.events.push(EditorEvent::Changed(String::new()));
        }
    }

    /// The flat text together with the cursor offset into it.
    pub fn text_and_cursor(&self) -> (String, usize) {
        (self.document.flat_text().to_string(), self.cursor)
    }
}

/// Build the initial tree from host-supplied text, tokenizing any
/// `default_mentions` labels that name a known candidate.
fn seed_tree(value: &str, options: &EditorOptions) -> RenderTree {
    if value.is_empty() {
        return RenderTree::new();
    }

    // Longest label first so "@Johnson" is not shadowed by "@John".
    let mut labels: Vec<&str> = options
        .default_mentions
        .iter()
        .map(|m| m.strip_prefix(MARKER).unwrap_or(m))
        .filter(|m| !m.is_empty())
        .collect();
    labels.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    let chars: Vec<char> = value.chars().collect();
    let mut nodes: Vec<RenderNode> = Vec::new();
    let mut run = String::new();
    let mut i = 0usize;

    while i < chars.len() {
        let mut matched = None;
        if chars[i] == MARKER {
            for label in &labels {
                let label_chars: Vec<char> = label.chars().collect();
                let end = i + 1 + label_chars.len();
                if end <= chars.len() && chars[i + 1..end] == label_chars[..] {
                    if let Some(candidate) =
                        options.candidates.iter().find(|c| c.name == **label)
                    {
                        matched = Some((candidate, label_chars.len()));
                        break;
                    }
                }
            }
        }

        match matched {
            Some((candidate, label_len)) => {
                if !run.is_empty() {
                    nodes.push(RenderNode::Text(std::mem::take(&mut run)));
                }
                nodes.push(RenderNode::token(
                    candidate.identity(options.identity_key),
                    candidate.name.clone(),
                ));
                i += 1 + label_len;
            }
            None => {
                run.push(chars[i]);
                i += 1;
            }
        }
    }

    if !run.is_empty() {
        nodes.push(RenderNode::Text(run));
    }
    RenderTree::from_nodes(nodes)
}
