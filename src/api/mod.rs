//! HTTP API module for the Activity Engine.
//!
//! This module provides the REST API endpoints for classifying activity
//! records and building range overviews.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ClassifyRequest, OverviewRequest, validate_records};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
