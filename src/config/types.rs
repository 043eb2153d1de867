//! Configuration types for enrollment pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// General storefront settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontSettings {
    /// Display name of the storefront.
    pub name: String,
    /// ISO currency code prices are quoted in.
    pub currency: String,
    /// Number of catalog entries per list page.
    pub page_size: usize,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            name: "Language School".to_string(),
            currency: "RUB".to_string(),
            page_size: 5,
        }
    }
}

/// Weekend surcharge configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekendRates {
    /// Multiplier applied when a course starts on Saturday or Sunday.
    pub multiplier: Decimal,
}

/// Early-registration discount configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarlyRegistrationRates {
    /// Minimum number of days (rounded up) between now and the start date.
    pub min_days_ahead: i64,
    /// Multiplier applied when the booking qualifies.
    pub multiplier: Decimal,
}

/// A range of start hours, both ends inclusive, that carries a flat fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBand {
    /// First start hour in the band.
    pub first_hour: u32,
    /// Last start hour in the band.
    pub last_hour: u32,
    /// Flat fee added for a start in this band.
    pub fee: Decimal,
}

impl TimeBand {
    /// Returns true if `hour` falls in the band.
    pub fn contains(&self, hour: u32) -> bool {
        (self.first_hour..=self.last_hour).contains(&hour)
    }
}

/// Time-of-day fee configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOfDayRates {
    /// Morning band, checked first.
    pub morning: TimeBand,
    /// Evening band, checked when the morning band does not match.
    pub evening: TimeBand,
}

/// Prices of the optional extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionRates {
    /// Multiplier for the intensive course option.
    pub intensive_course_multiplier: Decimal,
    /// Multiplier for the excursions option.
    pub excursions_multiplier: Decimal,
    /// Flat fee per person for supplementary materials.
    pub supplementary_fee_per_person: Decimal,
    /// Flat fee per course week for personalized lessons.
    pub personalized_fee_per_week: Decimal,
}

/// Group discount configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDiscountRates {
    /// Minimum number of persons for the discount.
    pub min_persons: u32,
    /// Multiplier applied to the fee-inclusive total.
    pub multiplier: Decimal,
}

/// All rates, fees and thresholds used by the pricing rules.
///
/// [`PricingRates::default`] returns the storefront's standard price list;
/// `pricing.yaml` carries the same values so they can be changed without a
/// rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRates {
    /// Weekend surcharge.
    pub weekend: WeekendRates,
    /// Early-registration discount.
    pub early_registration: EarlyRegistrationRates,
    /// Time-of-day fees.
    pub time_of_day: TimeOfDayRates,
    /// Option prices.
    pub options: OptionRates,
    /// Group discount.
    pub group_discount: GroupDiscountRates,
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            weekend: WeekendRates {
                multiplier: Decimal::new(15, 1),
            },
            early_registration: EarlyRegistrationRates {
                min_days_ahead: 30,
                multiplier: Decimal::new(9, 1),
            },
            time_of_day: TimeOfDayRates {
                morning: TimeBand {
                    first_hour: 9,
                    last_hour: 11,
                    fee: Decimal::new(400, 0),
                },
                evening: TimeBand {
                    first_hour: 18,
                    last_hour: 20,
                    fee: Decimal::new(1000, 0),
                },
            },
            options: OptionRates {
                intensive_course_multiplier: Decimal::new(12, 1),
                excursions_multiplier: Decimal::new(125, 2),
                supplementary_fee_per_person: Decimal::new(2000, 0),
                personalized_fee_per_week: Decimal::new(1500, 0),
            },
            group_discount: GroupDiscountRates {
                min_persons: 5,
                multiplier: Decimal::new(85, 2),
            },
        }
    }
}

/// The complete storefront configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct StorefrontConfig {
    settings: StorefrontSettings,
    rates: PricingRates,
}

impl StorefrontConfig {
    /// Creates a new StorefrontConfig from its component parts.
    pub fn new(settings: StorefrontSettings, rates: PricingRates) -> Self {
        Self { settings, rates }
    }

    /// Returns the storefront settings.
    pub fn settings(&self) -> &StorefrontSettings {
        &self.settings
    }

    /// Returns the pricing rates.
    pub fn rates(&self) -> &PricingRates {
        &self.rates
    }
}
