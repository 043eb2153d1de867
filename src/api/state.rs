//! Application state for the Enrollment Pricing Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::PriceCalculator;
use crate::config::{ConfigLoader, StorefrontSettings};

/// Shared application state.
///
/// Holds only immutable configuration, so handlers never contend on it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    calculator: Arc<PriceCalculator>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let calculator = PriceCalculator::new(config.rates().clone());
        Self {
            config: Arc::new(config),
            calculator: Arc::new(calculator),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the storefront settings.
    pub fn settings(&self) -> &StorefrontSettings {
        self.config.settings()
    }

    /// Returns the price calculator built from the configured rates.
    pub fn calculator(&self) -> &PriceCalculator {
        &self.calculator
    }
}
