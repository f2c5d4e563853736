//! Branding Provider Port - Interface for fetching per-client branding.

use async_trait::async_trait;

use crate::domain::branding::BrandingFile;

/// Errors that can occur while fetching a branding document.
///
/// Any of these leaves fallback branding in place; resolution failure is
/// never fatal to review generation.
#[derive(Debug, thiserror::Error)]
pub enum BrandingFetchError {
    #[error("Branding request failed: {0}")]
    RequestFailed(String),

    #[error("Branding document not found for client '{0}'")]
    NotFound(String),

    #[error("Branding endpoint returned status {0}")]
    UnexpectedStatus(u16),

    #[error("Failed to decode branding document: {0}")]
    DecodeFailed(String),
}

/// Port for resolving the branding document of a client key.
#[async_trait]
pub trait BrandingProvider: Send + Sync {
    /// Fetch the branding document for the given client key.
    ///
    /// # Errors
    /// Returns `BrandingFetchError` on network, status or decode failure.
    /// One attempt only; callers do not retry.
    async fn fetch(&self, client_key: &str) -> Result<BrandingFile, BrandingFetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_names_the_client() {
        let err = BrandingFetchError::NotFound("joesac".to_string());
        assert!(err.to_string().contains("joesac"));
    }

    #[test]
    fn unexpected_status_error_carries_the_code() {
        let err = BrandingFetchError::UnexpectedStatus(503);
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn decode_error_mentions_decoding() {
        let err = BrandingFetchError::DecodeFailed("expected value".to_string());
        assert!(err.to_string().contains("decode"));
    }
}
