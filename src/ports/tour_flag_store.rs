//! Tour Flag Store Port - Interface for the persisted "guided tour shown"
//! flag.
//!
//! The flag is read once at startup and written when the tour is dismissed
//! or completed.

use async_trait::async_trait;

/// Errors that can occur while persisting the tour flag.
#[derive(Debug, thiserror::Error)]
pub enum TourFlagError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for the client-local tour flag.
#[async_trait]
pub trait TourFlagStore: Send + Sync {
    /// Returns true if the guided tour was already shown on this client.
    ///
    /// Implementations should degrade to `false` when the flag cannot be
    /// read, so a broken store only means the tour shows again.
    async fn was_shown(&self) -> bool;

    /// Records that the tour has been shown.
    ///
    /// # Errors
    /// Returns `TourFlagError` if the flag cannot be written.
    async fn mark_shown(&self) -> Result<(), TourFlagError>;
}
