//! HTTP request handlers for the wage comparison API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_abn_scenario, calculate_tfn_scenario, compare_scenarios, comparison_summary,
    get_fifo_roster, get_overtime_multiplier, FIFO_ROSTERS, OVERTIME_MULTIPLIERS, TAX_YEAR,
};
use crate::config::ConfigLoader;
use crate::error::EngineError;
use crate::models::ComparisonInput;

use super::request::CompareRequest;
use super::response::{
    ApiError, ApiErrorResponse, ComparisonResponse, HealthResponse, ScenarioResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/compare", post(compare_handler))
        .route("/tfn", post(tfn_handler))
        .route("/abn", post(abn_handler))
        .route("/rosters", get(list_rosters_handler))
        .route("/rosters/:id", get(get_roster_handler))
        .route("/overtime-multipliers", get(list_multipliers_handler))
        .route("/overtime-multipliers/:id", get(get_multiplier_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /compare.
///
/// Runs both scenarios and returns the side-by-side table with a verdict.
async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing comparison request");

    let input = match parse_input(correlation_id, payload, state.config()) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let comparison = compare_scenarios(&input);
    let summary = comparison_summary(&comparison);

    info!(
        correlation_id = %correlation_id,
        hourly_rate = %input.hourly_rate,
        fifo = input.fifo.is_some(),
        overtime = input.overtime.is_some(),
        annual_difference = %comparison.annual_difference,
        duration_us = start_time.elapsed().as_micros(),
        "Comparison completed successfully"
    );

    json_response(StatusCode::OK, ComparisonResponse::new(comparison, summary))
}

/// Handler for POST /tfn.
async fn tfn_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing TFN scenario request");

    let input = match parse_input(correlation_id, payload, state.config()) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let result = calculate_tfn_scenario(
        input.hourly_rate,
        input.hours_per_week,
        input.weeks_per_year,
        &input.tfn_options(),
    );

    info!(
        correlation_id = %correlation_id,
        gross_annual = %result.gross_annual,
        net_take_home = %result.net_take_home,
        "TFN scenario completed successfully"
    );

    json_response(StatusCode::OK, ScenarioResponse::new(result))
}

/// Handler for POST /abn.
async fn abn_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ABN scenario request");

    let input = match parse_input(correlation_id, payload, state.config()) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let result = calculate_abn_scenario(
        input.hourly_rate,
        input.hours_per_week,
        input.weeks_per_year,
        &input.abn_options(),
    );

    info!(
        correlation_id = %correlation_id,
        gross_annual = %result.gross_annual,
        net_take_home = %result.net_take_home,
        "ABN scenario completed successfully"
    );

    json_response(StatusCode::OK, ScenarioResponse::new(result))
}

/// Handler for GET /rosters.
async fn list_rosters_handler() -> Response {
    json_response(StatusCode::OK, FIFO_ROSTERS.as_slice())
}

/// Handler for GET /rosters/:id.
async fn get_roster_handler(Path(id): Path<String>) -> Response {
    match get_fifo_roster(&id) {
        Some(roster) => json_response(StatusCode::OK, roster),
        None => {
            warn!(roster_id = %id, "FIFO roster not found");
            error_response(EngineError::RosterNotFound { id })
        }
    }
}

/// Handler for GET /overtime-multipliers.
async fn list_multipliers_handler() -> Response {
    json_response(StatusCode::OK, OVERTIME_MULTIPLIERS.as_slice())
}

/// Handler for GET /overtime-multipliers/:id.
async fn get_multiplier_handler(Path(id): Path<String>) -> Response {
    match get_overtime_multiplier(&id) {
        Some(multiplier) => json_response(StatusCode::OK, multiplier),
        None => {
            warn!(multiplier_id = %id, "Overtime multiplier not found");
            error_response(EngineError::MultiplierNotFound { id })
        }
    }
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok".to_string(),
            service: state.config().service().name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            tax_year: TAX_YEAR.to_string(),
        },
    )
}

/// Turns the request body into engine input, or the error response to send.
fn parse_input(
    correlation_id: Uuid,
    payload: Result<Json<CompareRequest>, JsonRejection>,
    config: &ConfigLoader,
) -> Result<ComparisonInput, Response> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return Err(json_response(StatusCode::BAD_REQUEST, error));
        }
    };

    let input = request.into_input(config).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Request validation failed"
        );
        error_response(err)
    })?;

    // Unknown ids are not rejected; the engine falls back for them.
    if let Some(fifo) = &input.fifo {
        if get_fifo_roster(&fifo.roster_id).is_none() {
            warn!(
                correlation_id = %correlation_id,
                roster_id = %fifo.roster_id,
                "Unknown FIFO roster, using default working weeks and no allowance"
            );
        }
    }
    if let Some(overtime) = &input.overtime {
        if get_overtime_multiplier(&overtime.multiplier_id).is_none() {
            warn!(
                correlation_id = %correlation_id,
                multiplier_id = %overtime.multiplier_id,
                "Unknown overtime multiplier, overtime pay will be zero"
            );
        }
    }

    Ok(input)
}

fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
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
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}
