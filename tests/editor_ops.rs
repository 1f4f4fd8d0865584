//! Editor operation tests - imperative host API, token atomicity, placeholder

mod common;

use common::{sample_candidates, test_editor, test_editor_with_text, type_str};
use mentions::editor::Key;
use mentions::{EditorEvent, EditorOptions, MentionsEditor};

// ========================================================================
// Token atomicity under deletion and movement
// ========================================================================

fn editor_with_token() -> MentionsEditor {
    let mut editor = test_editor_with_text("hi @jo");
    let john = sample_candidates()[0].clone();
    editor.insert_mention(&john);
    // "hi @John " with the token at 3..8
    editor
}

#[test]
fn test_backspace_removes_whole_token() {
    let mut editor = editor_with_token();
    editor.set_cursor(8);
    editor.handle_key(Key::Backspace);

    assert_eq!(editor.all_text_content(), "hi  ");
    assert_eq!(editor.document().token_count(), 0);
    assert_eq!(editor.cursor(), 3);
}

#[test]
fn test_delete_forward_removes_whole_token() {
    let mut editor = editor_with_token();
    editor.set_cursor(3);
    editor.handle_key(Key::Delete);

    assert_eq!(editor.all_text_content(), "hi  ");
    assert_eq!(editor.document().token_count(), 0);
    assert_eq!(editor.cursor(), 3);
}

#[test]
fn test_arrow_left_skips_over_token() {
    let mut editor = editor_with_token();
    editor.set_cursor(8);
    editor.handle_key(Key::Left);
    assert_eq!(editor.cursor(), 3);
}

#[test]
fn test_arrow_right_skips_over_token() {
    let mut editor = editor_with_token();
    editor.set_cursor(3);
    editor.handle_key(Key::Right);
    assert_eq!(editor.cursor(), 8);
}

#[test]
fn test_cursor_never_lands_inside_token() {
    let mut editor = editor_with_token();
    for offset in 0..=editor.document().flat_len() {
        editor.set_cursor(offset);
        assert!(
            !editor.document().is_inside_token(editor.cursor()),
            "cursor {offset} snapped to {}",
            editor.cursor()
        );
    }
}

#[test]
fn test_typing_at_token_boundary_stays_outside() {
    let mut editor = editor_with_token();
    editor.set_cursor(3);
    type_str(&mut editor, "x");

    assert_eq!(editor.all_text_content(), "hi x@John ");
    assert_eq!(editor.document().token_count(), 1);
}

// ========================================================================
// Imperative operations
// ========================================================================

#[test]
fn test_text_and_cursor() {
    let mut editor = test_editor_with_text("hello");
    editor.set_cursor(2);
    assert_eq!(editor.text_and_cursor(), ("hello".to_string(), 2));
}

#[test]
fn test_clear_resets_everything() {
    let mut editor = editor_with_token();
    type_str(&mut editor, "@");
    assert!(editor.is_popup_open());

    editor.clear_content();

    assert_eq!(editor.all_text_content(), "");
    assert_eq!(editor.cursor(), 0);
    assert_eq!(editor.document().token_count(), 0);
    assert!(!editor.is_popup_open());
}

#[test]
fn test_clear_is_idempotent() {
    let mut editor = editor_with_token();
    editor.clear_content();
    editor.take_events();
    editor.clear_content();

    assert_eq!(editor.all_text_content(), "");
    // No spurious change event for an already-empty editor.
    assert_eq!(editor.take_events(), vec![]);
}

#[test]
fn test_html_content_serializes_tokens() {
    let editor = editor_with_token();
    assert_eq!(
        editor.all_html_content(),
        "hi <a contenteditable=\"false\" class=\"mention-tag\" data-user-id=\"u1\">@John</a> "
    );
}

#[test]
fn test_html_content_escapes_text() {
    let editor = test_editor_with_text("a<b>&c");
    assert_eq!(editor.all_html_content(), "a&lt;b&gt;&amp;c");
}

// ========================================================================
// Placeholder
// ========================================================================

#[test]
fn test_placeholder_shown_when_empty_and_blurred() {
    let mut editor = MentionsEditor::new(EditorOptions::default());
    assert!(editor.shows_placeholder());
    assert_eq!(editor.all_html_content(), "请输入内容");
    // The flat text stays empty; the placeholder is presentation only.
    assert_eq!(editor.all_text_content(), "");

    editor.focus();
    assert!(!editor.shows_placeholder());
    assert_eq!(editor.all_html_content(), "");
}

#[test]
fn test_placeholder_hidden_with_content() {
    let mut editor = test_editor_with_text("hi");
    editor.blur();
    assert!(!editor.shows_placeholder());
    assert_eq!(editor.all_html_content(), "hi");
}

// ========================================================================
// Token activation
// ========================================================================

#[test]
fn test_token_click_emits_identity() {
    let mut editor = editor_with_token();
    editor.take_events();

    // Node 1 is the token ("hi " / token / " ").
    editor.token_click(1);

    assert_eq!(
        editor.take_events(),
        vec![EditorEvent::TokenClicked("u1".into())]
    );
    // Activation never mutates content.
    assert_eq!(editor.all_text_content(), "hi @John ");
}

#[test]
fn test_token_click_on_text_node_is_noop() {
    let mut editor = editor_with_token();
    editor.take_events();
    editor.token_click(0);
    editor.token_click(99);
    assert_eq!(editor.take_events(), vec![]);
}

// ========================================================================
// Change events
// ========================================================================

#[test]
fn test_changed_emitted_per_accepted_edit() {
    let mut editor = test_editor();
    editor.take_events();
    type_str(&mut editor, "ab");

    let events = editor.take_events();
    let changes = events
        .iter()
        .filter(|e| matches!(e, EditorEvent::Changed(_)))
        .count();
    assert_eq!(changes, 2);
}

// ========================================================================
// Seeded content
// ========================================================================

#[test]
fn test_seeded_value_with_default_mentions() {
    let options = EditorOptions {
        candidates: sample_candidates(),
        default_mentions: vec!["@John".into(), "@Jane".into()],
        ..Default::default()
    };
    let editor = MentionsEditor::with_value(options, "ping @John and @Jane!");

    assert_eq!(editor.document().token_count(), 2);
    assert_eq!(editor.all_text_content(), "ping @John and @Jane!");
    assert_eq!(editor.cursor(), editor.document().flat_len());
}

#[test]
fn test_seeded_tokens_are_atomic() {
    let options = EditorOptions {
        candidates: sample_candidates(),
        default_mentions: vec!["@John".into()],
        ..Default::default()
    };
    let mut editor = MentionsEditor::with_value(options, "hi @John");
    editor.focus();
    editor.handle_key(Key::Backspace);

    assert_eq!(editor.all_text_content(), "hi ");
    assert_eq!(editor.document().token_count(), 0);
}
