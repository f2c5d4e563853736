//! HTTP Branding Provider - fetches per-client branding JSON.
//!
//! Documents live at `{base_url}/configs/{client_key}.json`. A single GET,
//! no retries and no timeout beyond the client default; a failure simply
//! leaves fallback branding in place.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::branding::BrandingFile;
use crate::ports::{BrandingFetchError, BrandingProvider};

/// Branding provider backed by an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpBrandingProvider {
    base_url: String,
    client: Client,
}

impl HttpBrandingProvider {
    /// Creates a provider rooted at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    fn document_url(&self, client_key: &str) -> String {
        format!(
            "{}/configs/{}.json",
            self.base_url.trim_end_matches('/'),
            client_key
        )
    }
}

#[async_trait]
impl BrandingProvider for HttpBrandingProvider {
    async fn fetch(&self, client_key: &str) -> Result<BrandingFile, BrandingFetchError> {
        let url = self.document_url(client_key);
        tracing::debug!(%url, "fetching branding document");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BrandingFetchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(BrandingFetchError::NotFound(client_key.to_string()));
        }
        if !status.is_success() {
            return Err(BrandingFetchError::UnexpectedStatus(status.as_u16()));
        }

        response
            .json::<BrandingFile>()
            .await
            .map_err(|e| BrandingFetchError::DecodeFailed(e.to_string()))
    }
}
