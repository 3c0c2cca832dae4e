// HTTP handlers grouped by audience.

pub mod ingredients;
pub mod orders;
pub mod pages;

use crate::domain::access::AccessRole;
use crate::domain::errors::PartyError;
use crate::interface_adapters::protocol::ErrorResponse;
use crate::interface_adapters::state::AppState;
use axum::{Json, http::StatusCode};

pub type ApiError = (StatusCode, Json<ErrorResponse>);

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

// Maps domain errors to HTTP responses.
pub(crate) fn map_party_error(err: PartyError) -> ApiError {
    match err {
        PartyError::InvalidToken => error_response(StatusCode::FORBIDDEN, "Invalid token"),
        PartyError::NameRequired => error_response(StatusCode::BAD_REQUEST, "Name required"),
        PartyError::InvalidCategory => error_response(StatusCode::BAD_REQUEST, "Invalid category"),
        PartyError::IngredientNameRequired => {
            error_response(StatusCode::BAD_REQUEST, "English name required")
        }
        PartyError::UnusableIngredientName => error_response(
            StatusCode::BAD_REQUEST,
            "Ingredient name needs at least one letter or digit",
        ),
        PartyError::DuplicateIngredient => {
            error_response(StatusCode::BAD_REQUEST, "Ingredient already exists")
        }
        PartyError::IngredientNotFound => {
            error_response(StatusCode::NOT_FOUND, "Ingredient not found")
        }
        PartyError::OrderNotFound => error_response(StatusCode::NOT_FOUND, "Order not found"),
        PartyError::StorageFailure => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "storage error")
        }
    }
}

// Token gate shared by every API route.
pub(crate) fn authorize(state: &AppState, role: AccessRole, token: &str) -> Result<(), ApiError> {
    state.tokens.authorize(role, token).map_err(|err| {
        tracing::warn!(?role, "rejected access token");
        map_party_error(err)
    })
}
