//! Calculation logic for the Staffing Savings Engine.
//!
//! This module contains the two savings formulas, the breakdown of their
//! intermediate terms, and the fixed domain constants they use.

mod savings;

pub use savings::{
    ALT_AGENCY_RATE_MULTIPLIER, ANNUAL_HOURS_PER_FTE, EMPLOYER_FICA_RATE, HORIZON_YEARS,
    PROGRAM_COST_PER_FTE, SavingsBreakdown, SavingsInputs, compute_savings, compute_savings_alt,
    savings_breakdown,
};
