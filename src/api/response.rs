//! Response types for the wage comparison API.
//!
//! This module defines the success envelopes, the error response
//! structures and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::TAX_YEAR;
use crate::error::EngineError;
use crate::models::WageComparison;

/// Body of a successful `/compare` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    /// Unique id for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// Crate version that produced the figures.
    pub engine_version: String,
    /// Income year the tax tables belong to.
    pub tax_year: String,
    /// Both scenarios and the table rows.
    pub comparison: WageComparison,
    /// One-line verdict.
    pub summary: String,
}

impl ComparisonResponse {
    /// Wraps a comparison with a fresh id and timestamp.
    pub fn new(comparison: WageComparison, summary: String) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            tax_year: TAX_YEAR.to_string(),
            comparison,
            summary,
        }
    }
}

/// Body of a successful `/tfn` or `/abn` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResponse<T> {
    /// Unique id for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// Crate version that produced the figures.
    pub engine_version: String,
    /// Income year the tax tables belong to.
    pub tax_year: String,
    /// The scenario breakdown.
    pub result: T,
}

impl<T> ScenarioResponse<T> {
    /// Wraps a scenario result with a fresh id and timestamp.
    pub fn new(result: T) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            tax_year: TAX_YEAR.to_string(),
            result,
        }
    }
}

/// Body of the `/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `ok` while the service is answering.
    pub status: String,
    /// Configured service name.
    pub service: String,
    /// Crate version.
    pub engine_version: String,
    /// Income year the tax tables belong to.
    pub tax_year: String,
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
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::InvalidInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("Check the value supplied for '{}'", field),
                ),
            },
            EngineError::RosterNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "ROSTER_NOT_FOUND",
                    message,
                    format!("Supported rosters are listed at /rosters; '{}' is not one", id),
                ),
            },
            EngineError::MultiplierNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "MULTIPLIER_NOT_FOUND",
                    message,
                    format!(
                        "Supported multipliers are listed at /overtime-multipliers; '{}' is not one",
                        id
                    ),
                ),
            },
        }
    }
}
