//! Configuration loading and management for the Enrollment Pricing Engine.
//!
//! This module loads the storefront settings and the pricing rates from YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use enrollment_pricing::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Storefront: {}", config.settings().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EarlyRegistrationRates, GroupDiscountRates, OptionRates, PricingRates, StorefrontConfig,
    StorefrontSettings, TimeBand, TimeOfDayRates, WeekendRates,
};
