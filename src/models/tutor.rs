//! Tutor model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tutor available for private booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    /// Catalog identifier of the tutor.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Qualification level (e.g. "native", "advanced").
    #[serde(default)]
    pub language_level: String,
    /// Languages the tutor teaches in.
    #[serde(default)]
    pub languages_spoken: Vec<String>,
    /// Years of teaching experience.
    #[serde(default)]
    pub work_experience: u32,
    /// Hourly price of a private lesson.
    pub price_per_hour: Decimal,
}
