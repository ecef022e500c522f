//! Response types for the Staffing Savings Engine API.
//!
//! This module defines the selector and record views returned by the
//! lookup endpoints, the error response structures, and the mapping from
//! engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::SavingsInputs;
use crate::config::NotesConfig;
use crate::display::{InfoRow, calculation_notes, info_rows};
use crate::error::EngineError;
use crate::models::{FormulaVariant, Organization, OrganizationKind};
use crate::session::CalculatorSession;

/// One entry of an organization selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationOption {
    /// Health-system ID or hospital CCN.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Everything the page shows for a selected organization before any edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationView {
    /// Which table the organization comes from.
    pub kind: OrganizationKind,
    /// Health-system ID or hospital CCN.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Formula the record is evaluated with.
    pub formula: FormulaVariant,
    /// Badge text for the formula.
    pub badge: String,
    /// Values the editable inputs start from.
    pub inputs: SavingsInputs,
    /// Read-only metadata rows.
    pub info: Vec<InfoRow>,
    /// Data and calculation notes.
    pub notes: Vec<String>,
}

impl OrganizationView {
    /// Builds the view for an organization.
    pub fn new(organization: Organization, notes: &NotesConfig) -> Self {
        let info = info_rows(&organization);
        let notes = calculation_notes(&organization, notes);
        let session = CalculatorSession::new(organization);
        let selection = session.selection();

        Self {
            kind: selection.kind(),
            id: selection.id().to_string(),
            name: selection.name().to_string(),
            formula: session.formula(),
            badge: session.formula().label().to_string(),
            inputs: session.inputs(),
            info,
            notes,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an organization not found error response.
    pub fn organization_not_found(kind: OrganizationKind, id: &str) -> Self {
        Self::with_details(
            "ORGANIZATION_NOT_FOUND",
            format!("{} not found: {}", kind, id),
            format!("No {} with identifier '{}' is in the reference data", kind, id),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::OrganizationNotFound { kind, id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::organization_not_found(kind, &id),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input '{}': {}", field, message),
                    "The request contains an invalid value",
                ),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        error.to_string(),
                    ),
                }
            }
            EngineError::DatasetNotFound { .. }
            | EngineError::DatasetParseError { .. }
            | EngineError::DuplicateOrganization { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATA_ERROR",
                    "Reference data error",
                    error.to_string(),
                ),
            },
        }
    }
}
