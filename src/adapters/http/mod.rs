//! HTTP adapters.

mod branding_provider;

pub use branding_provider::HttpBrandingProvider;
