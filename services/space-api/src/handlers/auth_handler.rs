use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::domain::{RegisterRequest, RegisterResponse};
use crate::errors::ApiError;
use crate::services::RegistrationService;
use crate::state::AppState;

/// Register a user and return their auth token
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    // A non-JSON body is treated like missing credentials
    let request: RegisterRequest = serde_json::from_slice(&body).unwrap_or_default();

    let response = RegistrationService::register(state.users.as_ref(), request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
