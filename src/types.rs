//! Core domain types shared across the lookup pipeline.
//!
//! `MonsterData` is the normalised shape every data source must produce,
//! `LookupRequest` is the validated pair of CLI arguments, and
//! `LookupError` covers the failures callers may want to match on.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Result record
// ---------------------------------------------------------------------------

/// A monster as reported by any data source.
///
/// Every source maps its upstream response into exactly these two fields,
/// regardless of what the upstream calls them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterData {
    /// Display name.
    pub name: String,
    /// Absolute URL of an image of the monster.
    pub image_url: String,
}

impl MonsterData {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
        }
    }

    /// Field name/value pairs in display order.
    pub fn fields(&self) -> [(&'static str, &str); 2] {
        [("name", self.name.as_str()), ("image_url", self.image_url.as_str())]
    }
}

// ---------------------------------------------------------------------------
// Lookup request
// ---------------------------------------------------------------------------

/// A validated lookup: which source to use and what to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    selector: String,
    key: String,
}

impl LookupRequest {
    /// Build a request, rejecting missing or blank arguments.
    pub fn new(selector: Option<&str>, key: Option<&str>) -> Result<Self, LookupError> {
        let selector = selector.map(str::trim).filter(|s| !s.is_empty());
        let key = key.map(str::trim).filter(|k| !k.is_empty());

        match (selector, key) {
            (Some(selector), Some(key)) => Ok(Self {
                selector: selector.to_lowercase(),
                key: key.to_string(),
            }),
            (None, _) => Err(LookupError::Usage("missing data source name".into())),
            (_, None) => Err(LookupError::Usage("missing monster name".into())),
        }
    }

    /// Registry key of the requested source, lowercased.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Name to look up.
    pub fn key(&self) -> &str {
        &self.key
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for MONSTERDEX.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Usage error: {0}. Usage: monsterdex <source> <name>")]
    Usage(String),

    #[error("Unknown data source '{requested}' (available: {})", .available.join(", "))]
    UnknownSource {
        requested: String,
        available: Vec<String>,
    },

    #[error("{source_name}: no monster named '{name}'")]
    NotFound { source_name: String, name: String },

    #[error("{source_name}: upstream returned {status}")]
    Upstream { source_name: String, status: u16 },
}
