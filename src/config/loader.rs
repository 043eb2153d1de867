//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading storefront
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{PricingRates, StorefrontConfig, StorefrontSettings};

/// Loads and provides access to storefront configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── storefront.yaml   # Name, currency, page size
/// └── pricing.yaml      # Multipliers, flat fees and thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use enrollment_pricing::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Weekend surcharge: {}x", loader.rates().weekend.multiplier);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: StorefrontConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if either
    /// file is missing or contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use enrollment_pricing::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), enrollment_pricing::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<StorefrontSettings>(&path.join("storefront.yaml"))?;
        let rates = Self::load_yaml::<PricingRates>(&path.join("pricing.yaml"))?;

        if settings.page_size == 0 {
            return Err(EngineError::ConfigParseError {
                path: path.join("storefront.yaml").display().to_string(),
                message: "page_size must be at least 1".to_string(),
            });
        }

        debug!(path = %path.display(), storefront = %settings.name, "Loaded configuration");

        Ok(Self {
            config: StorefrontConfig::new(settings, rates),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Returns the storefront settings.
    pub fn settings(&self) -> &StorefrontSettings {
        self.config.settings()
    }

    /// Returns the pricing rates.
    pub fn rates(&self) -> &PricingRates {
        self.config.rates()
    }
}
