//! Enrollment price computation.
//!
//! This module runs the rules in [`PRICING_RULES`] over a course and a
//! selection, collects the trace of fired rules, and rounds the result.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PricingRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{CourseOffering, EnrollmentSelection, PriceBreakdown, PricingWarning};

use super::base_cost::base_cost;
use super::early_registration::is_early_registration;
use super::group_discount::is_group_enrollment;
use super::rounding::round_to_currency_unit;
use super::rules::{PRICING_RULES, RuleContext};

/// Computes the price of enrolling in `course` with `selection`, as of `now`.
///
/// Pure and deterministic: identical inputs give an identical breakdown.
/// Missing optional input never fails; a missing date skips the weekend and
/// early-registration rules, a missing time skips the time-of-day fee, and a
/// person count below 1 is priced as 1 with a warning.
///
/// # Errors
///
/// Returns [`EngineError::MissingCourse`] when `course` is `None`, and
/// [`EngineError::CalculationError`] when an intermediate amount does not fit
/// in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use enrollment_pricing::calculation::compute_price;
/// use enrollment_pricing::config::PricingRates;
/// use enrollment_pricing::models::{CourseOffering, EnrollmentSelection};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let course = CourseOffering {
///     id: 1,
///     name: "English for Beginners".to_string(),
///     description: String::new(),
///     teacher: String::new(),
///     level: "beginner".to_string(),
///     fee_per_hour: Decimal::new(100, 0),
///     week_length: 10,
///     total_length: 4,
///     start_dates: vec![],
/// };
/// let now = NaiveDateTime::parse_from_str("2026-01-01 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let breakdown = compute_price(
///     Some(&course),
///     &EnrollmentSelection::default(),
///     now,
///     &PricingRates::default(),
/// )
/// .unwrap();
/// assert_eq!(breakdown.base_cost, Decimal::new(4000, 0));
/// assert_eq!(breakdown.total, Decimal::new(4000, 0));
/// ```
pub fn compute_price(
    course: Option<&CourseOffering>,
    selection: &EnrollmentSelection,
    now: NaiveDateTime,
    rates: &PricingRates,
) -> EngineResult<PriceBreakdown> {
    let course = course.ok_or(EngineError::MissingCourse)?;

    let (person_count, defaulted) = selection.effective_person_count();
    let mut warnings = selection_warnings(course, selection);
    if defaulted {
        warnings.push(PricingWarning::new(
            "PERSON_COUNT_DEFAULTED",
            "Person count is missing or not a positive whole number; priced for 1 person",
        ));
    }

    let ctx = RuleContext {
        course,
        selection,
        person_count,
        now,
        rates,
    };

    let mut amount = Decimal::ZERO;
    let mut applied_rules = Vec::new();
    for rule in PRICING_RULES {
        let step_number = applied_rules.len() as u32 + 1;
        if let Some(applied) = rule.apply(&ctx, amount, step_number)? {
            debug!(
                course_id = course.id,
                rule_id = %applied.rule_id,
                amount_after = %applied.amount_after,
                "Pricing rule applied"
            );
            amount = applied.amount_after;
            applied_rules.push(applied);
        }
    }

    let total = round_to_currency_unit(amount);
    debug!(
        course_id = course.id,
        rules_applied = applied_rules.len(),
        warnings = warnings.len(),
        %total,
        "Price computed"
    );

    Ok(PriceBreakdown {
        course_id: course.id,
        base_cost: base_cost(course)?,
        applied_rules,
        unrounded_total: amount,
        total,
        person_count,
        early_registration: selection
            .start_date
            .is_some_and(|date| is_early_registration(date, now, &rates.early_registration)),
        group_enrollment: is_group_enrollment(person_count, &rates.group_discount),
        warnings,
    })
}

/// Flags a date or time the course does not actually offer.
///
/// Pricing still proceeds with the selected values.
fn selection_warnings(
    course: &CourseOffering,
    selection: &EnrollmentSelection,
) -> Vec<PricingWarning> {
    let mut warnings = Vec::new();

    match (selection.start_date, selection.start_time) {
        (Some(date), _) if !course.offers_date(date) => {
            warnings.push(PricingWarning::new(
                "DATE_NOT_OFFERED",
                format!("Course {} does not start on {}", course.id, date),
            ));
        }
        (Some(date), Some(time)) if !course.offers_slot(date, time) => {
            warnings.push(PricingWarning::new(
                "SLOT_NOT_OFFERED",
                format!(
                    "Course {} does not start at {} on {}",
                    course.id,
                    time.format("%H:%M"),
                    date
                ),
            ));
        }
        _ => {}
    }

    warnings
}

/// Prices enrollments against a fixed set of rates.
///
/// # Example
///
/// ```no_run
/// use enrollment_pricing::calculation::PriceCalculator;
/// use enrollment_pricing::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let calculator = PriceCalculator::new(loader.rates().clone());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriceCalculator {
    rates: PricingRates,
}

impl PriceCalculator {
    /// Creates a calculator for the given rates.
    pub fn new(rates: PricingRates) -> Self {
        Self { rates }
    }

    /// Returns the rates this calculator prices with.
    pub fn rates(&self) -> &PricingRates {
        &self.rates
    }

    /// Computes the price; see [`compute_price`].
    pub fn quote(
        &self,
        course: Option<&CourseOffering>,
        selection: &EnrollmentSelection,
        now: NaiveDateTime,
    ) -> EngineResult<PriceBreakdown> {
        compute_price(course, selection, now, &self.rates)
    }
}
