//! mentions - an inline "@mention" editing engine.
//!
//! The engine keeps three representations of editable mixed content in
//! lockstep: the rendered tree (text runs interleaved with atomic mention
//! tokens), the flat logical text (tokens rendered as "@label"), and a
//! cursor offset valid in both. Hosts feed it raw edits and key presses;
//! it detects "@" trigger contexts, filters candidates, splices tokens in
//! atomically, enforces content limits, and computes where the candidate
//! popup belongs on screen.

pub mod candidate;
pub mod config;
pub mod document;
pub mod editor;
pub mod events;
pub mod filter;
pub mod limits;
pub mod popup;
pub mod tracing;
pub mod tree;
pub mod trigger;

// Re-export commonly used types
pub use candidate::{Candidate, IdentityKey};
pub use config::{EditorOptions, Placeholder};
pub use editor::{Key, MentionsEditor};
pub use events::EditorEvent;
pub use limits::LimitError;
pub use popup::{Point, PopupEdge, Rect};
pub use trigger::TriggerContext;
