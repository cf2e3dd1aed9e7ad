//! Error types for registry access, validation and rendering.

use std::fmt;

/// What kind of entry a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Category,
    Rule,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => f.write_str("category"),
            Self::Rule => f.write_str("rule"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntryKind, id: String },

    #[error("malformed content at {location}: {reason}")]
    MalformedContent { location: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

impl GuideError {
    pub fn category_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntryKind::Category,
            id: id.into(),
        }
    }

    pub fn rule_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntryKind::Rule,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T, E = GuideError> = std::result::Result<T, E>;
