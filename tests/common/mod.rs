//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use mentions::editor::Key;
use mentions::{Candidate, EditorOptions, MentionsEditor};

/// The standard candidate list used across suites.
pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "u1".into(),
            name: "John".into(),
            email: "john@example.com".into(),
            role: "Engineer".into(),
            department: "Platform".into(),
        },
        Candidate::new("u2", "Jane"),
        Candidate::new("u3", "Bob"),
    ]
}

/// Default options with the sample candidates wired in.
pub fn sample_options() -> EditorOptions {
    EditorOptions {
        candidates: sample_candidates(),
        ..Default::default()
    }
}

/// Options with tightened limits.
pub fn limited_options(max_length: usize, max_mentions: usize) -> EditorOptions {
    EditorOptions {
        max_length,
        max_mentions,
        candidates: sample_candidates(),
        ..Default::default()
    }
}

/// A focused editor with the sample candidates.
pub fn test_editor() -> MentionsEditor {
    let mut editor = MentionsEditor::new(sample_options());
    editor.focus();
    editor
}

/// A focused editor pre-typed with `text`.
pub fn test_editor_with_text(text: &str) -> MentionsEditor {
    let mut editor = test_editor();
    type_str(&mut editor, text);
    editor
}

/// Type a string one key at a time.
pub fn type_str(editor: &mut MentionsEditor, text: &str) {
    for ch in text.chars() {
        editor.handle_key(Key::Char(ch));
    }
}
