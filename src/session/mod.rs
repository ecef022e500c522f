//! Calculator sessions for the Staffing Savings Engine.
//!
//! A session tracks which organization is selected and the live values of
//! the editable inputs seeded from it.

mod calculator;
mod input;

pub use calculator::CalculatorSession;
pub use input::{EditOutcome, EditableInput, ParsePolicy};
