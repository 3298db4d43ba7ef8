//! Mobile record type and store error definitions.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ==============================================================================
// Record
// ==============================================================================

/// A single device record. Two records are equal only when both the IMEI
/// and the model match; the store enforces uniqueness on the IMEI alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mobile {
    #[serde(rename = "identifier")]
    pub imei: String,
    #[serde(rename = "label")]
    pub model: String,
}

impl Mobile {
    pub fn new(imei: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            imei: imei.into(),
            model: model.into(),
        }
    }
}

impl std::fmt::Display for Mobile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.imei, self.model)
    }
}

// ==============================================================================
// Errors
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum MobileStorageError {
    #[error("mobile already in storage: {0}")]
    AlreadyExists(String),

    #[error("nothing to delete: no mobile with IMEI {0}")]
    NothingToDelete(String),

    #[error("failed to write snapshot")]
    WritingFailure(#[source] CoreError),
}
