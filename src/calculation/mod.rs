//! Calculation logic for the Enrollment Pricing Engine.
//!
//! This module contains the pricing rules, one module each: base cost,
//! weekend surcharge, early-registration discount, time-of-day fee, option
//! multipliers, person-count scaling, flat option fees and the group discount,
//! plus the ordered rule list and the calculator that runs it.

mod base_cost;
mod early_registration;
mod flat_fees;
mod group_discount;
mod option_multipliers;
mod person_count;
mod price_calculator;
mod rounding;
mod rules;
mod time_of_day;
mod weekend_surcharge;

pub use base_cost::{apply_base_cost, base_cost};
pub use early_registration::{apply_early_registration, days_until_start, is_early_registration};
pub use flat_fees::{apply_personalized_fee, apply_supplementary_fee};
pub use group_discount::{apply_group_discount, is_group_enrollment};
pub use option_multipliers::{apply_excursions, apply_intensive_course};
pub use person_count::apply_person_count;
pub use price_calculator::{PriceCalculator, compute_price};
pub use rounding::round_to_currency_unit;
pub use rules::{PRICING_RULES, PricingRule, RuleContext};
pub use time_of_day::{apply_time_of_day_fee, time_band_for};
pub use weekend_surcharge::{apply_weekend_surcharge, is_weekend};
