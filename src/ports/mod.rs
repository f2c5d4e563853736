//! Ports: interfaces the application layer depends on, implemented by
//! adapters.

mod branding_provider;
mod tour_flag_store;

pub use branding_provider::{BrandingFetchError, BrandingProvider};
pub use tour_flag_store::{TourFlagError, TourFlagStore};
