//! HTTP request handlers for the Activity Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::classification::{build_overview, classify_records};

use super::request::{ClassifyRequest, OverviewRequest, validate_records};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/overview", post(overview_handler))
        .with_state(state)
}

/// Handler for POST /classify endpoint.
///
/// Classifies every record and returns one result per record, in input
/// order, with both the unified status and the legacy verdict.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classification request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = validate_records(&request.records) {
        warn!(correlation_id = %correlation_id, error = %err, "Record validation failed");
        return ApiErrorResponse::from(err).into_response();
    }

    let start_time = Instant::now();
    let report = classify_records(&request.records, request.active_tab, state.config());
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        records = report.results.len(),
        active_tab = ?report.active_tab,
        duration_us = duration.as_micros(),
        "Classification completed successfully"
    );

    json_ok(report)
}

/// Handler for POST /overview endpoint.
///
/// Summarizes the records per employee for the requested range and returns
/// the status counts.
async fn overview_handler(
    State(state): State<AppState>,
    payload: Result<Json<OverviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overview request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = validate_records(&request.records) {
        warn!(correlation_id = %correlation_id, error = %err, "Record validation failed");
        return ApiErrorResponse::from(err).into_response();
    }

    let start_time = Instant::now();
    match build_overview(
        &request.records,
        request.active_tab,
        request.range,
        request.anchor_date,
        state.config(),
    ) {
        Ok(overview) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                range = %overview.range,
                employees = overview.employees.len(),
                duration_us = duration.as_micros(),
                "Overview completed successfully"
            );
            json_ok(overview)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Overview failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
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
    };

    ApiErrorResponse::bad_request(error).into_response()
}
