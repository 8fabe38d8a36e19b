//! HTTP request handlers for the criteria API.
//!
//! Creation and preview replay the request body through a fresh [`Wizard`],
//! so a remote draft passes exactly the gates an interactive one would.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::WizardConfig;
use crate::models::CriteriaId;
use crate::registry::CriteriaFilter;
use crate::wizard::{Transition, Wizard};

use super::request::CriteriaRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/criteria", get(list_handler).post(create_handler))
        .route("/criteria/preview", post(preview_handler))
        .route("/criteria/:id", get(get_handler))
        .with_state(state)
}

/// Handler for `POST /criteria`.
///
/// Runs the wizard to step 4 and commits the draft to the registry.
async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CriteriaRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create criteria request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id).into_response(),
    };

    let start_time = Instant::now();
    let mut wizard = match run_to_preview(&request, state.config(), correlation_id) {
        Ok(wizard) => wizard,
        Err(error) => return error.into_response(),
    };

    match wizard.commit(state.registry()) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                criteria_id = %record.id,
                classification = %record.classification,
                duration_us = start_time.elapsed().as_micros(),
                "Criteria created"
            );
            json_response(StatusCode::CREATED, &record)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Commit failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /criteria/preview`.
///
/// Runs the wizard to step 4 and returns the preview without committing.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<CriteriaRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing preview request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id).into_response(),
    };

    match run_to_preview(&request, state.config(), correlation_id) {
        Ok(wizard) => json_response(StatusCode::OK, &wizard.preview()),
        Err(error) => error.into_response(),
    }
}

/// Handler for `GET /criteria`.
async fn list_handler(
    State(state): State<AppState>,
    filter: Result<Query<CriteriaFilter>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let filter = match filter {
        Ok(Query(filter)) => filter,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid list query");
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(rejection.body_text()),
            }
            .into_response();
        }
    };

    let records = state.registry().list(&filter);
    info!(
        correlation_id = %correlation_id,
        category = ?filter.category,
        active_only = filter.active_only,
        count = records.len(),
        "Listed criteria"
    );
    json_response(StatusCode::OK, &records)
}

/// Handler for `GET /criteria/:id`.
async fn get_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, criteria_id = %id, "Fetching criteria");

    let found = id
        .parse::<CriteriaId>()
        .and_then(|id| state.registry().get_by_id(&id));

    match found {
        Ok(record) => json_response(StatusCode::OK, &record),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Criteria lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Replays a request through a new wizard up to the preview step.
fn run_to_preview(
    request: &CriteriaRequest,
    config: Arc<WizardConfig>,
    correlation_id: Uuid,
) -> Result<Wizard, ApiErrorResponse> {
    let mut wizard = Wizard::with_config(config);

    request.apply_basic_info(&mut wizard)?;
    advance(&mut wizard, request.accept_rollover, correlation_id)?;

    request.apply_criteria(&mut wizard)?;
    advance(&mut wizard, request.accept_rollover, correlation_id)?;

    request.apply_work_types(&mut wizard)?;
    advance(&mut wizard, request.accept_rollover, correlation_id)?;

    Ok(wizard)
}

fn advance(
    wizard: &mut Wizard,
    accept_rollover: bool,
    correlation_id: Uuid,
) -> Result<(), ApiErrorResponse> {
    let step = wizard.current_step().map_or(0, |step| step.number());

    match wizard.next()? {
        Transition::Moved(_) => Ok(()),
        Transition::Blocked(reason) => {
            warn!(correlation_id = %correlation_id, step, reason = %reason, "Draft blocked");
            Err(ApiErrorResponse::blocked(step, &reason))
        }
        Transition::AwaitingConfirmation(reason) if accept_rollover => {
            wizard.confirm_rollover()?;
            info!(correlation_id = %correlation_id, reason = %reason, "Confirmation accepted");
            Ok(())
        }
        Transition::AwaitingConfirmation(reason) => {
            warn!(correlation_id = %correlation_id, reason = %reason, "Confirmation required");
            Err(ApiErrorResponse::confirmation_required(reason))
        }
    }
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
