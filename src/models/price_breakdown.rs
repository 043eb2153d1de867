//! Price breakdown models for the Enrollment Pricing Engine.
//!
//! This module contains the [`PriceBreakdown`] type and the structures that
//! record, rule by rule, how a total was derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a pricing rule changed the running amount.
///
/// # Example
///
/// ```
/// use enrollment_pricing::models::RuleEffect;
/// use rust_decimal::Decimal;
///
/// let effect = RuleEffect::Multiply(Decimal::new(15, 1));
/// assert_eq!(effect.apply(Decimal::new(4000, 0)), Some(Decimal::new(6000, 0)));
/// assert_eq!(effect.apply(Decimal::MAX), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum RuleEffect {
    /// Replaces the running amount (used for the base cost).
    Set(Decimal),
    /// Multiplies the running amount.
    Multiply(Decimal),
    /// Adds a flat amount.
    Add(Decimal),
}

impl RuleEffect {
    /// Applies the effect to a running amount.
    ///
    /// Returns `None` if the result does not fit in a [`Decimal`].
    pub fn apply(&self, amount: Decimal) -> Option<Decimal> {
        match *self {
            RuleEffect::Set(value) => Some(value),
            RuleEffect::Multiply(factor) => amount.checked_mul(factor),
            RuleEffect::Add(fee) => amount.checked_add(fee),
        }
    }
}

/// A single pricing rule that fired, in application order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedRule {
    /// The sequential step number (1-based, counting only fired rules).
    pub step_number: u32,
    /// The stable identifier of the rule.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// What the rule did to the running amount.
    pub effect: RuleEffect,
    /// Running amount before the rule.
    pub amount_before: Decimal,
    /// Running amount after the rule.
    pub amount_after: Decimal,
    /// The inputs the rule's decision was based on.
    pub input: serde_json::Value,
    /// What the rule produced.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A non-fatal observation made while pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

impl PricingWarning {
    /// Creates a warning.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The computed price of one enrollment and the trace of how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// The course that was priced.
    pub course_id: u64,
    /// Hourly-rate-derived cost before any modifier.
    pub base_cost: Decimal,
    /// Rules that fired, in application order.
    pub applied_rules: Vec<AppliedRule>,
    /// Total before rounding.
    pub unrounded_total: Decimal,
    /// Total rounded to a whole currency unit; used for display and submission.
    pub total: Decimal,
    /// Person count the price was computed for.
    pub person_count: u32,
    /// Whether the start date qualified for the early-registration discount.
    pub early_registration: bool,
    /// Whether the booking qualified for the group discount.
    pub group_enrollment: bool,
    /// Non-fatal observations about the input.
    pub warnings: Vec<PricingWarning>,
}

impl PriceBreakdown {
    /// Returns the rule ids that fired, in order.
    pub fn rule_ids(&self) -> Vec<&str> {
        self.applied_rules
            .iter()
            .map(|rule| rule.rule_id.as_str())
            .collect()
    }

    /// Returns the applied rule with the given id, if it fired.
    pub fn applied(&self, rule_id: &str) -> Option<&AppliedRule> {
        self.applied_rules.iter().find(|rule| rule.rule_id == rule_id)
    }

    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|warning| warning.code == code)
    }
}
