//! Read-only panels shown beside a calculation.
//!
//! Builds the labelled metadata rows for the selected organization, the
//! data and calculation notes, and the one-line recap of the inputs.

use serde::{Deserialize, Serialize};

use crate::calculation::{ANNUAL_HOURS_PER_FTE, HORIZON_YEARS, SavingsInputs};
use crate::config::NotesConfig;
use crate::models::Organization;

use super::format::{format_currency, format_rn_need, round_one_decimal};

/// Shown when an optional value is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// A labelled read-only value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoRow {
    /// Field label.
    pub label: String,
    /// Formatted value.
    pub value: String,
}

impl InfoRow {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Returns the metadata rows for an organization, in display order.
pub fn info_rows(organization: &Organization) -> Vec<InfoRow> {
    let bed_size = organization.rounded_bed_size().to_string();
    match organization {
        Organization::HealthSystem(hs) => vec![
            InfoRow::new("Health System Name", hs.name.as_str()),
            InfoRow::new("Bed Size", bed_size),
            InfoRow::new("States", hs.states.as_str()),
            InfoRow::new("Affiliated Hospitals", hs.affiliated_hospitals.to_string()),
        ],
        Organization::Hospital(h) => vec![
            InfoRow::new("Hospital Name", h.name.as_str()),
            InfoRow::new("Bed Size", bed_size),
            InfoRow::new("State", h.state.as_str()),
            InfoRow::new(
                "Health Care Affiliation",
                h.health_system_name.as_deref().unwrap_or(NOT_AVAILABLE),
            ),
        ],
    }
}

/// Returns the data-source and horizon notes for an organization.
pub fn calculation_notes(organization: &Organization, notes: &NotesConfig) -> Vec<String> {
    let agency_fte = organization
        .defaults()
        .agency_labor_fte
        .map(|fte| format!("{:.1}", round_one_decimal(fte)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    vec![
        format!(
            "All rate and staffing information pulled from {}. Agency FTE use ({}) assumes {}% RN mix at {} hours annually.",
            notes.data_source, agency_fte, notes.rn_mix_percent, ANNUAL_HOURS_PER_FTE
        ),
        format!("Savings estimated over a {}-year period.", HORIZON_YEARS),
    ]
}

/// Returns the one-line recap of the inputs a result was computed from.
pub fn inputs_summary(inputs: &SavingsInputs) -> String {
    format!(
        "Staff Labor Rate: {}, Agency Labor Rate: {}, Estimated RN Need: {}",
        format_currency(inputs.staff_rate),
        format_currency(inputs.agency_rate),
        format_rn_need(inputs.rn_need)
    )
}
