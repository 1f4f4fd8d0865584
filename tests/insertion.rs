//! Mention insertion tests - trigger span replacement, cursor placement, events

mod common;

use common::{sample_candidates, test_editor_with_text, type_str};
use mentions::document::Segment;
use mentions::editor::Key;
use mentions::EditorEvent;

// ========================================================================
// Basic insertion
// ========================================================================

#[test]
fn test_insert_replaces_trigger_span() {
    let mut editor = test_editor_with_text("hi @jo");
    assert_eq!(editor.cursor(), 6);
    assert!(editor.is_popup_open());

    let john = sample_candidates()[0].clone();
    editor.insert_mention(&john);

    assert_eq!(editor.all_text_content(), "hi @John ");
    assert_eq!(editor.cursor(), 9);
    assert!(!editor.is_popup_open());
}

#[test]
fn test_insert_from_bare_marker() {
    let mut editor = test_editor_with_text("@");
    let jane = sample_candidates()[1].clone();
    editor.insert_mention(&jane);

    assert_eq!(editor.all_text_content(), "@Jane ");
    assert_eq!(editor.cursor(), 6);
}

#[test]
fn test_insert_mid_text_keeps_after_text() {
    let mut editor = test_editor_with_text("hi  world");
    editor.set_cursor(3);
    type_str(&mut editor, "@jo");
    assert_eq!(editor.all_text_content(), "hi @jo world");
    assert_eq!(editor.cursor(), 6);

    let john = sample_candidates()[0].clone();
    editor.insert_mention(&john);

    assert_eq!(editor.all_text_content(), "hi @John  world");
    assert_eq!(editor.cursor(), 9);
}

#[test]
fn test_insert_builds_structured_segments() {
    let mut editor = test_editor_with_text("hi @jo");
    let john = sample_candidates()[0].clone();
    editor.insert_mention(&john);

    let segments = editor.document().segments();
    assert_eq!(segments.len(), 3);
    assert_eq!(
        segments[0],
        Segment::Text {
            content: "hi ".into()
        }
    );
    assert_eq!(
        segments[1],
        Segment::Token {
            identity: "u1".into(),
            label: "John".into()
        }
    );
    assert_eq!(
        segments[2],
        Segment::Text {
            content: " ".into()
        }
    );
}

#[test]
fn test_insert_stores_identity_from_configured_key() {
    use mentions::{EditorOptions, IdentityKey, MentionsEditor};

    let options = EditorOptions {
        candidates: sample_candidates(),
        identity_key: IdentityKey::Email,
        ..Default::default()
    };
    let mut editor = MentionsEditor::new(options);
    editor.focus();
    type_str(&mut editor, "@jo");
    let john = sample_candidates()[0].clone();
    editor.insert_mention(&john);

    assert_eq!(
        editor.document().segments()[0],
        Segment::Token {
            identity: "john@example.com".into(),
            label: "John".into()
        }
    );
}

#[test]
fn test_insert_without_trigger_is_noop() {
    let mut editor = test_editor_with_text("hello");
    let john = sample_candidates()[0].clone();
    editor.insert_mention(&john);
    assert_eq!(editor.all_text_content(), "hello");
}

// ========================================================================
// Events
// ========================================================================

#[test]
fn test_insert_emits_changed_and_mention() {
    let mut editor = test_editor_with_text("@jo");
    editor.take_events();

    let john = sample_candidates()[0].clone();
    editor.insert_mention(&john);

    let events = editor.take_events();
    assert!(events.contains(&EditorEvent::Changed("@John ".into())));
    assert!(events.contains(&EditorEvent::Mention(john)));
    assert!(events.contains(&EditorEvent::PopupClosed));
}

// ========================================================================
// Continuing to type after insertion
// ========================================================================

#[test]
fn test_typing_continues_after_token() {
    let mut editor = test_editor_with_text("@jo");
    let john = sample_candidates()[0].clone();
    editor.insert_mention(&john);
    type_str(&mut editor, "hi");

    assert_eq!(editor.all_text_content(), "@John hi");
    assert_eq!(editor.document().token_count(), 1);
}

#[test]
fn test_second_mention_after_first() {
    let mut editor = test_editor_with_text("@jo");
    let john = sample_candidates()[0].clone();
    editor.insert_mention(&john);

    type_str(&mut editor, "@ja");
    assert!(editor.is_popup_open());
    editor.handle_key(Key::Enter);

    assert_eq!(editor.all_text_content(), "@John @Jane ");
    assert_eq!(editor.document().token_count(), 2);
}

#[test]
fn test_enter_inserts_highlighted_candidate() {
    let mut editor = test_editor_with_text("@j");
    // "j" matches John and Jane; highlight the second.
    editor.handle_key(Key::ArrowDown);
    editor.handle_key(Key::Enter);

    assert_eq!(editor.all_text_content(), "@Jane ");
}
