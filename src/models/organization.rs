//! Organization models and related types.
//!
//! This module defines the two kinds of organization a user can pick from,
//! health systems and individual hospitals, along with the financial
//! defaults each record carries into the calculator.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Which reference table an organization belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationKind {
    /// A multi-hospital health system, keyed by health-system ID.
    HealthSystem,
    /// An individual hospital, keyed by CMS Certification Number.
    Hospital,
}

impl fmt::Display for OrganizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrganizationKind::HealthSystem => write!(f, "Health System"),
            OrganizationKind::Hospital => write!(f, "Hospital"),
        }
    }
}

/// The savings formula a record is evaluated with.
///
/// The variant comes from the record's `Agency>Staff` flag and is never
/// user-editable. `true` selects [`FormulaVariant::Standard`], `false`
/// selects [`FormulaVariant::Alt`].
///
/// # Example
///
/// ```
/// use savings_engine::models::FormulaVariant;
///
/// assert_eq!(FormulaVariant::from_flag(true), FormulaVariant::Standard);
/// assert_eq!(FormulaVariant::from_flag(false).label(), "ALT FORMULA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaVariant {
    /// Agency rate used as reported.
    Standard,
    /// Agency rate inflated by 20% before the differential is taken.
    Alt,
}

impl FormulaVariant {
    /// Maps the per-record boolean flag to a formula variant.
    pub fn from_flag(agency_above_staff: bool) -> Self {
        if agency_above_staff {
            FormulaVariant::Standard
        } else {
            FormulaVariant::Alt
        }
    }

    /// Badge text shown next to the result.
    pub fn label(&self) -> &'static str {
        match self {
            FormulaVariant::Standard => "STANDARD FORMULA",
            FormulaVariant::Alt => "ALT FORMULA",
        }
    }
}

/// Financial defaults used to seed the calculator inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialDefaults {
    /// Hourly cost of staff labor.
    pub staff_labor_rate: Decimal,
    /// Hourly cost of agency labor.
    pub agency_labor_rate: Decimal,
    /// Estimated number of additional RNs needed (fractional).
    pub estimated_rn_need: Decimal,
    /// Formula selected by the record's flag.
    pub formula: FormulaVariant,
    /// Reported agency labor FTEs, when the dataset carries them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency_labor_fte: Option<Decimal>,
}

/// A health system row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSystem {
    /// Health-system identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Total staffed beds across the system.
    pub bed_size: Decimal,
    /// States the system operates in, as reported.
    pub states: String,
    /// Number of affiliated hospitals.
    pub affiliated_hospitals: u32,
    /// Financial defaults.
    pub defaults: FinancialDefaults,
}

/// A hospital row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hospital {
    /// CMS Certification Number.
    pub ccn: String,
    /// Display name.
    pub name: String,
    /// Staffed beds.
    pub bed_size: Decimal,
    /// Two-letter state code.
    pub state: String,
    /// Parent health system, if the hospital is affiliated with one.
    #[serde(default)]
    pub health_system_name: Option<String>,
    /// Financial defaults.
    pub defaults: FinancialDefaults,
}

/// Either kind of organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Organization {
    /// A health system.
    HealthSystem(HealthSystem),
    /// An individual hospital.
    Hospital(Hospital),
}

impl Organization {
    /// Returns which table this organization comes from.
    pub fn kind(&self) -> OrganizationKind {
        match self {
            Organization::HealthSystem(_) => OrganizationKind::HealthSystem,
            Organization::Hospital(_) => OrganizationKind::Hospital,
        }
    }

    /// Returns the health-system ID or the hospital CCN.
    pub fn id(&self) -> &str {
        match self {
            Organization::HealthSystem(hs) => &hs.id,
            Organization::Hospital(h) => &h.ccn,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        match self {
            Organization::HealthSystem(hs) => &hs.name,
            Organization::Hospital(h) => &h.name,
        }
    }

    /// Returns the raw bed size.
    pub fn bed_size(&self) -> Decimal {
        match self {
            Organization::HealthSystem(hs) => hs.bed_size,
            Organization::Hospital(h) => h.bed_size,
        }
    }

    /// Returns the bed size rounded half-to-even to a whole number.
    ///
    /// # Example
    ///
    /// ```
    /// use savings_engine::models::{FinancialDefaults, FormulaVariant, Hospital, Organization};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let hospital = Organization::Hospital(Hospital {
    ///     ccn: "010001".to_string(),
    ///     name: "Southeast Health Medical Center".to_string(),
    ///     bed_size: Decimal::from_str("332.5").unwrap(),
    ///     state: "AL".to_string(),
    ///     health_system_name: None,
    ///     defaults: FinancialDefaults {
    ///         staff_labor_rate: Decimal::from_str("42.10").unwrap(),
    ///         agency_labor_rate: Decimal::from_str("95.00").unwrap(),
    ///         estimated_rn_need: Decimal::from_str("12.3").unwrap(),
    ///         formula: FormulaVariant::Standard,
    ///         agency_labor_fte: None,
    ///     },
    /// });
    /// assert_eq!(hospital.rounded_bed_size(), Decimal::from(332));
    /// ```
    pub fn rounded_bed_size(&self) -> Decimal {
        self.bed_size()
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
    }

    /// Returns the record's financial defaults.
    pub fn defaults(&self) -> &FinancialDefaults {
        match self {
            Organization::HealthSystem(hs) => &hs.defaults,
            Organization::Hospital(h) => &h.defaults,
        }
    }

    /// Returns the formula this record is evaluated with.
    pub fn formula(&self) -> FormulaVariant {
        self.defaults().formula
    }
}

impl From<HealthSystem> for Organization {
    fn from(hs: HealthSystem) -> Self {
        Organization::HealthSystem(hs)
    }
}

impl From<Hospital> for Organization {
    fn from(h: Hospital) -> Self {
        Organization::Hospital(h)
    }
}
