//! The ordered list of pricing rules.
//!
//! Every rule multiplies or adds onto the running amount, so the order in
//! [`PRICING_RULES`] determines the result. Each rule lives in its own module
//! with a standalone `apply_*` function; [`PricingRule::apply`] dispatches to
//! it with the inputs it needs.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PricingRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{AppliedRule, CourseOffering, EnrollmentSelection, RuleEffect};

use super::base_cost::apply_base_cost;
use super::early_registration::apply_early_registration;
use super::flat_fees::{apply_personalized_fee, apply_supplementary_fee};
use super::group_discount::apply_group_discount;
use super::option_multipliers::{apply_excursions, apply_intensive_course};
use super::person_count::apply_person_count;
use super::time_of_day::apply_time_of_day_fee;
use super::weekend_surcharge::apply_weekend_surcharge;

/// A named pricing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingRule {
    /// `fee_per_hour * week_length * total_length`.
    BaseCost,
    /// Multiplier for a Saturday or Sunday start.
    WeekendSurcharge,
    /// Discount for booking far enough ahead.
    EarlyRegistration,
    /// Flat fee for morning or evening starts.
    TimeOfDayFee,
    /// Multiplier for the intensive course option.
    IntensiveCourse,
    /// Multiplier for the excursions option.
    Excursions,
    /// Scales the per-person amount by the number of persons.
    PersonCount,
    /// Flat per-person fee for supplementary materials.
    SupplementaryFee,
    /// Flat per-week fee for personalized lessons.
    PersonalizedFee,
    /// Discount on the fee-inclusive total for groups.
    GroupDiscount,
}

/// The rules in application order.
///
/// The group discount comes after both flat fees, so it discounts them too.
pub const PRICING_RULES: [PricingRule; 10] = [
    PricingRule::BaseCost,
    PricingRule::WeekendSurcharge,
    PricingRule::EarlyRegistration,
    PricingRule::TimeOfDayFee,
    PricingRule::IntensiveCourse,
    PricingRule::Excursions,
    PricingRule::PersonCount,
    PricingRule::SupplementaryFee,
    PricingRule::PersonalizedFee,
    PricingRule::GroupDiscount,
];

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The course being priced.
    pub course: &'a CourseOffering,
    /// The user's selection.
    pub selection: &'a EnrollmentSelection,
    /// Person count after defaulting (always at least 1).
    pub person_count: u32,
    /// The moment the price is computed at.
    pub now: NaiveDateTime,
    /// Rates, fees and thresholds.
    pub rates: &'a PricingRates,
}

impl PricingRule {
    /// Stable identifier used in the applied-rule trace.
    pub fn id(&self) -> &'static str {
        match self {
            PricingRule::BaseCost => "base_cost",
            PricingRule::WeekendSurcharge => "weekend_surcharge",
            PricingRule::EarlyRegistration => "early_registration",
            PricingRule::TimeOfDayFee => "time_of_day_fee",
            PricingRule::IntensiveCourse => "intensive_course",
            PricingRule::Excursions => "excursions",
            PricingRule::PersonCount => "person_count",
            PricingRule::SupplementaryFee => "supplementary_fee",
            PricingRule::PersonalizedFee => "personalized_fee",
            PricingRule::GroupDiscount => "group_discount",
        }
    }

    /// Human-readable rule name.
    pub fn name(&self) -> &'static str {
        match self {
            PricingRule::BaseCost => "Base Cost",
            PricingRule::WeekendSurcharge => "Weekend Surcharge",
            PricingRule::EarlyRegistration => "Early Registration Discount",
            PricingRule::TimeOfDayFee => "Time of Day Fee",
            PricingRule::IntensiveCourse => "Intensive Course",
            PricingRule::Excursions => "Excursions",
            PricingRule::PersonCount => "Person Count",
            PricingRule::SupplementaryFee => "Supplementary Materials Fee",
            PricingRule::PersonalizedFee => "Personalized Lessons Fee",
            PricingRule::GroupDiscount => "Group Discount",
        }
    }

    /// Applies the rule to the running amount.
    ///
    /// Returns `Ok(None)` when the rule does not fire; the running amount is
    /// then unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] when the new amount does not
    /// fit in a [`Decimal`].
    pub fn apply(
        &self,
        ctx: &RuleContext<'_>,
        amount: Decimal,
        step_number: u32,
    ) -> EngineResult<Option<AppliedRule>> {
        let selection = ctx.selection;
        let rates = ctx.rates;

        match self {
            PricingRule::BaseCost => apply_base_cost(ctx.course, step_number).map(Some),
            PricingRule::WeekendSurcharge => {
                apply_weekend_surcharge(amount, selection.start_date, &rates.weekend, step_number)
            }
            PricingRule::EarlyRegistration => apply_early_registration(
                amount,
                selection.start_date,
                ctx.now,
                &rates.early_registration,
                step_number,
            ),
            PricingRule::TimeOfDayFee => apply_time_of_day_fee(
                amount,
                selection.start_time,
                &rates.time_of_day,
                step_number,
            ),
            PricingRule::IntensiveCourse => apply_intensive_course(
                amount,
                selection.options.intensive_course,
                &rates.options,
                step_number,
            ),
            PricingRule::Excursions => apply_excursions(
                amount,
                selection.options.excursions,
                &rates.options,
                step_number,
            ),
            PricingRule::PersonCount => {
                apply_person_count(amount, ctx.person_count, step_number).map(Some)
            }
            PricingRule::SupplementaryFee => apply_supplementary_fee(
                amount,
                selection.options.supplementary,
                ctx.person_count,
                &rates.options,
                step_number,
            ),
            PricingRule::PersonalizedFee => apply_personalized_fee(
                amount,
                selection.options.personalized,
                ctx.course.total_length,
                &rates.options,
                step_number,
            ),
            PricingRule::GroupDiscount => apply_group_discount(
                amount,
                ctx.person_count,
                &rates.group_discount,
                step_number,
            ),
        }
    }

    /// Builds the trace entry for this rule.
    ///
    /// `reasoning` receives the amount after the effect.
    pub(crate) fn record(
        self,
        step_number: u32,
        amount_before: Decimal,
        effect: RuleEffect,
        input: serde_json::Value,
        reasoning: impl FnOnce(Decimal) -> String,
    ) -> EngineResult<AppliedRule> {
        let amount_after = effect
            .apply(amount_before)
            .ok_or_else(|| self.overflow(amount_before))?;
        Ok(AppliedRule {
            step_number,
            rule_id: self.id().to_string(),
            rule_name: self.name().to_string(),
            effect,
            amount_before,
            amount_after,
            input,
            output: serde_json::json!({
                "effect": effect,
                "amount": amount_after,
            }),
            reasoning: reasoning(amount_after),
        })
    }

    /// The error for an amount this rule cannot represent.
    pub(crate) fn overflow(self, amount: Decimal) -> EngineError {
        EngineError::CalculationError {
            message: format!(
                "{} overflowed the amount range at {}",
                self.name(),
                amount.normalize()
            ),
        }
    }
}

impl std::fmt::Display for PricingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
