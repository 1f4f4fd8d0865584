//! Events emitted to the host.
//!
//! Each editor instance owns its own event queue; hosts drain it with
//! [`MentionsEditor::take_events`](crate::editor::MentionsEditor::take_events).
//! There is no process-wide callback registry: token activation is dispatched
//! per instance, carrying the token's identity.

use crate::candidate::Candidate;
use crate::limits::LimitError;
use crate::popup::Point;

/// A notification from the editor to its host.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The flat text changed. Carries the new flat text.
    Changed(String),
    /// A candidate was turned into a token.
    Mention(Candidate),
    /// An inserted token was activated (clicked). Carries its identity.
    TokenClicked(String),
    /// An edit was rejected. `LimitError::code()` gives the numeric code.
    Error(LimitError),
    /// The candidate popup opened at the given screen position.
    PopupOpened { position: Point },
    /// The candidate popup closed.
    PopupClosed,
}
