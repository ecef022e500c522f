//! Calculator session.
//!
//! A session owns the current selection and the three editable inputs.
//! Selecting an organization resets the inputs to that record's defaults;
//! the record itself is never modified.

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{SavingsInputs, savings_breakdown};
use crate::display::{format_currency, inputs_summary, round_one_decimal};
use crate::error::EngineResult;
use crate::models::{
    FormulaVariant, Organization, OrganizationRef, SavingsDisplay, SavingsResult,
};

use super::input::{EditOutcome, EditableInput};

/// One user's calculator state.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    selection: Organization,
    staff_rate: EditableInput,
    agency_rate: EditableInput,
    rn_need: EditableInput,
}

impl CalculatorSession {
    /// Starts a session with `organization` selected.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use savings_engine::data::ReferenceData;
    /// use savings_engine::models::OrganizationKind;
    /// use savings_engine::session::CalculatorSession;
    ///
    /// let data = ReferenceData::load("./config/health_system.csv", "./config/all_hospitals.csv")?;
    /// let org = data.organization(OrganizationKind::Hospital, "160045")?;
    ///
    /// let mut session = CalculatorSession::new(org);
    /// session.edit_rn_need("12.5");
    /// println!("{}", session.evaluate()?.display.savings);
    /// # Ok::<(), savings_engine::error::EngineError>(())
    /// ```
    pub fn new(organization: Organization) -> Self {
        let defaults = organization.defaults();
        let staff_rate = EditableInput::new(defaults.staff_labor_rate);
        let agency_rate = EditableInput::new(defaults.agency_labor_rate);
        let rn_need = EditableInput::with_normalizer(defaults.estimated_rn_need, round_one_decimal);

        Self {
            selection: organization,
            staff_rate,
            agency_rate,
            rn_need,
        }
    }

    /// Switches to another organization and resets every input.
    pub fn select(&mut self, organization: Organization) {
        debug!(
            kind = %organization.kind(),
            id = %organization.id(),
            "Selected organization"
        );
        *self = Self::new(organization);
    }

    /// Returns the selected organization.
    pub fn selection(&self) -> &Organization {
        &self.selection
    }

    /// Edits the staff labor rate.
    pub fn edit_staff_rate(&mut self, text: &str) -> EditOutcome {
        self.staff_rate.edit(text)
    }

    /// Edits the agency labor rate.
    pub fn edit_agency_rate(&mut self, text: &str) -> EditOutcome {
        self.agency_rate.edit(text)
    }

    /// Edits the estimated RN need; accepted values are rounded to one decimal.
    pub fn edit_rn_need(&mut self, text: &str) -> EditOutcome {
        self.rn_need.edit(text)
    }

    /// Returns the live input values.
    pub fn inputs(&self) -> SavingsInputs {
        SavingsInputs::new(
            self.staff_rate.value(),
            self.agency_rate.value(),
            self.rn_need.value(),
        )
    }

    /// Returns the formula the selected record is evaluated with.
    pub fn formula(&self) -> FormulaVariant {
        self.selection.formula()
    }

    /// Runs the calculation on the live inputs.
    ///
    /// Fails with [`InvalidInput`](crate::error::EngineError::InvalidInput)
    /// when the edited values push the result outside the representable
    /// range; the session is unchanged.
    pub fn evaluate(&self) -> EngineResult<SavingsResult> {
        let inputs = self.inputs();
        let formula = self.formula();
        let breakdown = savings_breakdown(inputs, formula).inspect_err(|err| {
            warn!(
                kind = %self.selection.kind(),
                id = %self.selection.id(),
                error = %err,
                "Savings out of range"
            );
        })?;

        info!(
            kind = %self.selection.kind(),
            id = %self.selection.id(),
            formula = formula.label(),
            savings = %breakdown.savings,
            "Evaluated savings"
        );

        let display = SavingsDisplay {
            savings: format_currency(breakdown.savings),
            badge: formula.label().to_string(),
            inputs_summary: inputs_summary(&inputs),
        };

        Ok(SavingsResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            organization: OrganizationRef {
                kind: self.selection.kind(),
                id: self.selection.id().to_string(),
                name: self.selection.name().to_string(),
            },
            formula,
            inputs,
            breakdown,
            display,
        })
    }
}
