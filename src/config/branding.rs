//! Branding source configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::branding::DEFAULT_CLIENT_KEY;

/// Where per-client branding documents are fetched from.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandingSourceConfig {
    /// Base URL under which `configs/{key}.json` documents live.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Client key used when none can be derived from the host.
    #[serde(default = "default_client_key")]
    pub default_key: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_client_key() -> String {
    DEFAULT_CLIENT_KEY.to_string()
}

impl Default for BrandingSourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_key: default_client_key(),
        }
    }
}

impl BrandingSourceConfig {
    /// Validates the branding source settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBrandingBaseUrl);
        }
        if self.default_key.trim().is_empty() {
            return Err(ValidationError::EmptyDefaultClientKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(BrandingSourceConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = BrandingSourceConfig {
            base_url: "ftp://example.com".to_string(),
            ..BrandingSourceConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_blank_default_key() {
        let config = BrandingSourceConfig {
            default_key: "  ".to_string(),
            ..BrandingSourceConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
