//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `REVIEWCRAFT`
//! prefix and `__` (double underscore) separating nested keys.
//!
//! # Example
//!
//! ```no_run
//! use reviewcraft::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod branding;
mod error;
mod wizard;

pub use branding::BrandingSourceConfig;
pub use error::{ConfigError, ValidationError};
pub use wizard::{CompositionTrigger, TopologyChoice, WizardConfig};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Branding document source (base URL, default client key)
    #[serde(default)]
    pub branding: BrandingSourceConfig,

    /// Wizard behavior (topology, restart and composition policies)
    #[serde(default)]
    pub wizard: WizardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (development), then reads variables
    /// such as `REVIEWCRAFT__BRANDING__BASE_URL` and
    /// `REVIEWCRAFT__WIZARD__TOPOLOGY`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("REVIEWCRAFT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.branding.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("REVIEWCRAFT__BRANDING__BASE_URL");
        env::remove_var("REVIEWCRAFT__BRANDING__DEFAULT_KEY");
        env::remove_var("REVIEWCRAFT__WIZARD__TOPOLOGY");
        env::remove_var("REVIEWCRAFT__WIZARD__RESET_SELECTIONS_ON_RESTART");
        env::remove_var("REVIEWCRAFT__WIZARD__COMPOSITION_TRIGGER");
    }

    #[test]
    fn loads_with_all_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();
        assert_eq!(config.branding.base_url, "http://localhost:8080");
        assert_eq!(config.wizard.topology, TopologyChoice::BranchingStandard);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var(
            "REVIEWCRAFT__BRANDING__BASE_URL",
            "https://reviews.example.com",
        );
        env::set_var("REVIEWCRAFT__WIZARD__TOPOLOGY", "linear_compact");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.branding.base_url, "https://reviews.example.com");
        assert_eq!(config.wizard.topology, TopologyChoice::LinearCompact);
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("REVIEWCRAFT__BRANDING__BASE_URL", "not-a-url");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }
}
