//! Core data models for the Staffing Savings Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod organization;
mod savings_result;

pub use organization::{
    FinancialDefaults, FormulaVariant, HealthSystem, Hospital, Organization, OrganizationKind,
};
pub use savings_result::{OrganizationRef, SavingsDisplay, SavingsResult};
