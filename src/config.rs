//! Editor options.
//!
//! Every field has a default so hosts can construct options from partial
//! YAML (or `..Default::default()` in code). Options are immutable for the
//! lifetime of one editor instance.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::candidate::{Candidate, IdentityKey};
use crate::popup::PopupEdge;

/// Placeholder shown while the editor is empty and unfocused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    #[serde(default = "default_placeholder_text")]
    pub text: String,
    #[serde(default = "default_placeholder_color")]
    pub color: String,
}

fn default_placeholder_text() -> String {
    "请输入内容".to_string()
}

fn default_placeholder_color() -> String {
    "#666".to_string()
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            text: default_placeholder_text(),
            color: default_placeholder_color(),
        }
    }
}

/// Configuration for one editor instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Maximum flat-text length in chars.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Maximum number of mention tokens.
    #[serde(default = "default_max_mentions")]
    pub max_mentions: usize,
    /// The candidate list offered by the popup.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Token labels (with or without a leading '@') to pre-seed from the
    /// initial text. Only labels naming a known candidate become tokens.
    #[serde(default)]
    pub default_mentions: Vec<String>,
    #[serde(default)]
    pub placeholder: Placeholder,
    /// Preferred popup side relative to the caret.
    #[serde(default)]
    pub popup_edge: PopupEdge,
    /// Which candidate field an inserted token stores as its identity.
    #[serde(default)]
    pub identity_key: IdentityKey,
}

fn default_max_length() -> usize {
    200
}

fn default_max_mentions() -> usize {
    10
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            max_mentions: default_max_mentions(),
            candidates: Vec::new(),
            default_mentions: Vec::new(),
            placeholder: Placeholder::default(),
            popup_edge: PopupEdge::default(),
            identity_key: IdentityKey::default(),
        }
    }
}

impl EditorOptions {
    /// Load options from a YAML file, or return defaults if the file is
    /// missing or malformed.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("Options file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(options) => {
                    tracing::info!("Loaded options from {}", path.display());
                    options
                }
                Err(e) => {
                    tracing::warn!("Failed to parse options at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read options at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
