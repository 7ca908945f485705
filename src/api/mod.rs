//! HTTP API module for the wage comparison engine.
//!
//! This module exposes the ABN vs TFN comparison, the single-scenario
//! calculations and the roster and multiplier tables over REST.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CompareRequest;
pub use response::{ApiError, ComparisonResponse, HealthResponse, ScenarioResponse};
pub use state::AppState;
