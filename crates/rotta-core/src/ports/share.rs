//! Clipboard and share collaborator ports.
//!
//! Both are best-effort: a failure is reported back to the caller and leaves
//! the post untouched.

use async_trait::async_trait;

/// Writes text to the user's clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ActionError>;
}

/// Opens a share deep link (WhatsApp or a platform's native composer).
#[async_trait]
pub trait ShareLauncher: Send + Sync {
    async fn open(&self, url: &str) -> Result<(), ActionError>;
}

/// A clipboard or share mechanism failed.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ActionError(pub String);
