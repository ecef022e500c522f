//! Display formatting for the Staffing Savings Engine.
//!
//! This module turns results and records into the strings a presentation
//! layer renders: currency amounts, the formula badge, metadata rows and
//! the data/calculation notes.

mod format;
mod panels;

pub use format::{format_currency, format_rn_need, round_one_decimal};
pub use panels::{InfoRow, NOT_AVAILABLE, calculation_notes, info_rows, inputs_summary};
