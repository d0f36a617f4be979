//! Repository trait for the off-chain content store.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::FailureKind;

/// A failed content pointer dereference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ContentError {
    pub kind: FailureKind,
    pub message: String,
}

impl ContentError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(FailureKind::NotFound, message)
    }

    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Unreachable, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Malformed, message)
    }

    /// Whether retrying the same fetch may succeed.
    pub fn is_transient(&self) -> bool {
        self.kind == FailureKind::Unreachable
    }
}

/// Dereferences content pointers into JSON documents.
///
/// # Implementations
///
/// - [`crate::infrastructure::content::HttpContentStore`] - HTTP(S) backed store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetches and parses the document behind `uri`.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] whose kind tells apart a missing document,
    /// an unreachable store and a malformed pointer or body.
    async fn fetch(&self, uri: &str) -> Result<Value, ContentError>;
}
