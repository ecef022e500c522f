//! HTTP API module for the Staffing Savings Engine.
//!
//! This module provides the REST endpoints for browsing the reference
//! tables and calculating savings for a selected organization.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, FieldValue, HospitalQuery};
pub use response::{ApiError, ApiErrorResponse, OrganizationOption, OrganizationView};
pub use state::AppState;
