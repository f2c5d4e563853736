//! Per-deployment branding: company name, service area, review link.
//!
//! Branding is resolved once per session from a small remote JSON document
//! keyed by hostname or query parameter. Until (or unless) resolution
//! succeeds, built-in fallbacks keep composition working; a failed fetch is
//! never fatal.

use serde::{Deserialize, Serialize};

/// Fallback display name used before branding resolves.
pub const FALLBACK_DISPLAY_NAME: &str = "Technician";
/// Fallback service area used before branding resolves.
pub const FALLBACK_SERVICE_AREA: &str = "your city";
/// Fallback review link placeholder.
pub const FALLBACK_REVIEW_LINK: &str = "#";

/// Client key used on local hosts or when none can be derived.
pub const DEFAULT_CLIENT_KEY: &str = "acservicereview";

/// Immutable branding values consumed by the composer and the UI shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingContext {
    pub display_name: String,
    pub service_area: String,
    pub review_link: String,
}

impl Default for BrandingContext {
    fn default() -> Self {
        Self {
            display_name: FALLBACK_DISPLAY_NAME.to_string(),
            service_area: FALLBACK_SERVICE_AREA.to_string(),
            review_link: FALLBACK_REVIEW_LINK.to_string(),
        }
    }
}

impl BrandingContext {
    /// Merges a fetched branding file over the current values.
    ///
    /// All file fields are optional; absent fields keep their previous
    /// value. `company_name` wins over `name` for the display name.
    pub fn merged_with(&self, file: &BrandingFile) -> Self {
        let display_name = file
            .company_name
            .as_deref()
            .or(file.name.as_deref())
            .unwrap_or(&self.display_name)
            .to_string();
        Self {
            display_name,
            service_area: file
                .service_area
                .clone()
                .unwrap_or_else(|| self.service_area.clone()),
            review_link: file
                .google_review_link
                .clone()
                .unwrap_or_else(|| self.review_link.clone()),
        }
    }
}

/// Shape of the remote per-client configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingFile {
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub service_area: Option<String>,
    pub google_review_link: Option<String>,
}

/// Resolves the client key locating the branding document.
///
/// A `config` query parameter wins outright. Otherwise the first hostname
/// label is used for subdomain deployments (three or more labels). Local
/// and loopback hosts, or hosts where nothing can be derived, fall back to
/// [`DEFAULT_CLIENT_KEY`].
pub fn resolve_client_key(hostname: &str, query_param: Option<&str>) -> String {
    if let Some(key) = query_param {
        if !key.is_empty() {
            return key.to_string();
        }
    }

    let is_local =
        hostname == "localhost" || hostname == "127.0.0.1" || !hostname.contains('.');
    if !is_local {
        let labels: Vec<&str> = hostname.split('.').collect();
        if labels.len() > 2 {
            return labels[0].to_string();
        }
    }

    DEFAULT_CLIENT_KEY.to_string()
}
