//! Stat error types.
//!
//! Lenient construction and accessors never fail. These errors come only
//! from strict mapping construction, name parsing, and malformed
//! serialized documents.

use thiserror::Error;

use crate::name::AttrName;
use crate::value::AttrValue;

/// Stat error type.
#[derive(Debug, Error)]
pub enum StatError {
    /// Key is not in the attribute vocabulary.
    #[error("unknown stat attribute: {0}")]
    UnknownAttribute(String),

    /// Value shape cannot be stored in the attribute's field.
    #[error("type mismatch for {name}: expected {expected}, found {found}")]
    TypeMismatch {
        name: AttrName,
        expected: &'static str,
        found: &'static str,
    },

    /// Malformed JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML document.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl StatError {
    /// Create an UnknownAttribute error.
    pub fn unknown_attribute(name: impl Into<String>) -> Self {
        Self::UnknownAttribute(name.into())
    }

    /// Create a TypeMismatch error for a rejected value.
    pub fn type_mismatch(name: AttrName, expected: &'static str, found: &AttrValue) -> Self {
        Self::TypeMismatch {
            name,
            expected,
            found: found.kind(),
        }
    }
}

/// Stat result type.
pub type StatResult<T> = Result<T, StatError>;
