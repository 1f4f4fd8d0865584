//! Candidate records - the entities eligible to become mention tokens.

use serde::{Deserialize, Serialize};

/// A record that can be mentioned (e.g. a user in a team directory).
///
/// Only `name` participates in matching; the remaining fields exist so hosts
/// can render richer list entries and detail views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department: String,
}

impl Candidate {
    /// Create a candidate with just an id and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            role: String::new(),
            department: String::new(),
        }
    }

    /// Value of the field selected by `key`.
    ///
    /// This is what gets stored in an inserted token's identity attribute.
    pub fn identity(&self, key: IdentityKey) -> &str {
        match key {
            IdentityKey::Id => &self.id,
            IdentityKey::Name => &self.name,
            IdentityKey::Email => &self.email,
            IdentityKey::Role => &self.role,
            IdentityKey::Department => &self.department,
        }
    }
}

/// Which candidate field is carried as an inserted token's identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityKey {
    #[default]
    Id,
    Name,
    Email,
    Role,
    Department,
}
