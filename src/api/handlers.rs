//! HTTP request handlers for the Staffing Savings Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{OrganizationKind, SavingsResult};
use crate::session::CalculatorSession;

use super::request::{CalculationRequest, HospitalQuery};
use super::response::{ApiError, ApiErrorResponse, OrganizationOption, OrganizationView};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health-systems", get(list_health_systems))
        .route("/health-systems/:id", get(get_health_system))
        .route("/hospitals", get(list_hospitals))
        .route("/hospitals/states", get(list_hospital_states))
        .route("/hospitals/:ccn", get(get_hospital))
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for GET /health-systems.
async fn list_health_systems(State(state): State<AppState>) -> Json<Vec<OrganizationOption>> {
    let options = state
        .data()
        .health_systems()
        .iter()
        .map(|hs| OrganizationOption {
            id: hs.id.clone(),
            name: hs.name.clone(),
        })
        .collect();
    Json(options)
}

/// Handler for GET /health-systems/:id.
async fn get_health_system(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    organization_view(&state, OrganizationKind::HealthSystem, &id)
}

/// Handler for GET /hospitals/states.
async fn list_hospital_states(State(state): State<AppState>) -> Json<Vec<String>> {
    let states = state
        .data()
        .hospital_states()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(states)
}

/// Handler for GET /hospitals.
///
/// Lists every hospital, or only those in `?state=` when given.
async fn list_hospitals(State(state): State<AppState>, Query(query): Query<HospitalQuery>) -> Response {
    let data = state.data();
    let hospitals: Vec<_> = match query.state.as_deref().map(str::trim) {
        None => data.hospitals().iter().collect(),
        Some("") => {
            return ApiErrorResponse::from(EngineError::InvalidInput {
                field: "state".to_string(),
                message: "must not be empty".to_string(),
            })
            .into_response();
        }
        Some(code) => data.hospitals_in_state(code),
    };

    let options: Vec<OrganizationOption> = hospitals
        .into_iter()
        .map(|h| OrganizationOption {
            id: h.ccn.clone(),
            name: h.name.clone(),
        })
        .collect();
    json_response(StatusCode::OK, options)
}

/// Handler for GET /hospitals/:ccn.
async fn get_hospital(State(state): State<AppState>, Path(ccn): Path<String>) -> Response {
    organization_view(&state, OrganizationKind::Hospital, &ccn)
}

fn organization_view(state: &AppState, kind: OrganizationKind, id: &str) -> Response {
    match state.data().organization(kind, id) {
        Ok(organization) => {
            json_response(StatusCode::OK, OrganizationView::new(organization, state.notes()))
        }
        Err(err) => {
            warn!(kind = %kind, id = %id, "Organization not found");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /calculate endpoint.
///
/// Selects the named organization, applies any edited inputs, and returns
/// the savings result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") || body_text.contains("unknown variant") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let start_time = Instant::now();
    match perform_calculation(&state, &request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                kind = %request.kind,
                id = %request.id,
                savings = %result.savings(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs one calculation through a fresh session.
fn perform_calculation(
    state: &AppState,
    request: &CalculationRequest,
) -> Result<SavingsResult, EngineError> {
    let organization = state.data().organization(request.kind, &request.id)?;
    let mut session = CalculatorSession::new(organization);

    if let Some(value) = &request.staff_rate {
        session.edit_staff_rate(&value.as_text());
    }
    if let Some(value) = &request.agency_rate {
        session.edit_agency_rate(&value.as_text());
    }
    if let Some(value) = &request.rn_need {
        session.edit_rn_need(&value.as_text());
    }

    session.evaluate()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}
