//! Savings result models.
//!
//! This module contains the [`SavingsResult`] type returned for every
//! evaluated calculation, together with the display strings the
//! presentation layer renders next to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{FormulaVariant, OrganizationKind};
use crate::calculation::{SavingsBreakdown, SavingsInputs};

/// Identifies the organization a result was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRef {
    /// Which table the organization comes from.
    pub kind: OrganizationKind,
    /// Health-system ID or hospital CCN.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Pre-formatted strings for the result panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsDisplay {
    /// Estimated savings as currency, e.g. `$2,479,849.60`.
    pub savings: String,
    /// Badge naming the formula that was applied.
    pub badge: String,
    /// One-line recap of the inputs used.
    pub inputs_summary: String,
}

/// The complete result of a savings calculation.
///
/// # Example
///
/// ```
/// use savings_engine::calculation::{savings_breakdown, SavingsInputs};
/// use savings_engine::models::{
///     FormulaVariant, OrganizationKind, OrganizationRef, SavingsDisplay, SavingsResult,
/// };
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let inputs = SavingsInputs::new(Decimal::from(40), Decimal::from(90), Decimal::from(10));
/// let result = SavingsResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     organization: OrganizationRef {
///         kind: OrganizationKind::Hospital,
///         id: "010001".to_string(),
///         name: "Southeast Health Medical Center".to_string(),
///     },
///     formula: FormulaVariant::Standard,
///     inputs,
///     breakdown: savings_breakdown(inputs, FormulaVariant::Standard).unwrap(),
///     display: SavingsDisplay {
///         savings: "$2,479,849.60".to_string(),
///         badge: "STANDARD FORMULA".to_string(),
///         inputs_summary: String::new(),
///     },
/// };
/// assert_eq!(result.savings(), result.breakdown.savings);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The organization the calculation is for.
    pub organization: OrganizationRef,
    /// The formula that was applied.
    pub formula: FormulaVariant,
    /// The inputs the calculation ran on.
    pub inputs: SavingsInputs,
    /// Every intermediate term of the formula.
    pub breakdown: SavingsBreakdown,
    /// Formatted strings for display.
    pub display: SavingsDisplay,
}

impl SavingsResult {
    /// Returns the net estimated savings.
    pub fn savings(&self) -> rust_decimal::Decimal {
        self.breakdown.savings
    }
}
