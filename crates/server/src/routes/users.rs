use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use service::domain::RawUserFields;

use crate::errors::ApiError;
use crate::observability;
use crate::state::ServerState;
use crate::wire::{UserResponse, UsersResponse};

/// Register a user.
#[utoipa::path(post, path = "/user", tag = "users",
    request_body = crate::openapi::CreateUserRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation or duplicate error", body = crate::openapi::MessageDoc),
        (status = 500, description = "Storage error", body = crate::openapi::MessageDoc)
    ))]
pub async fn create_user(
    State(state): State<ServerState>,
    payload: Result<Json<RawUserFields>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(raw) = payload.inspect_err(|_| {
        observability::REJECTED_TOTAL.with_label_values(&["malformed_body"]).inc();
    })?;
    match state.registry.create_user(raw).await {
        Ok(created) => {
            observability::USERS_CREATED_TOTAL.inc();
            Ok((StatusCode::CREATED, Json(UserResponse::from(&created))))
        }
        Err(e) => {
            if e.is_client_error() {
                observability::REJECTED_TOTAL.with_label_values(&[e.kind()]).inc();
            }
            Err(e.into())
        }
    }
}

/// Fetch a user by cpf.
#[utoipa::path(get, path = "/user/{cpf}", tag = "users",
    params(("cpf" = String, Path, description = "11-character cpf")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::UserDoc),
        (status = 404, description = "No such user", body = crate::openapi::MessageDoc)
    ))]
pub async fn get_user(
    State(state): State<ServerState>,
    Path(cpf): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let found = state.registry.get_user(&cpf).await?;
    Ok(Json(UserResponse::from(&found)))
}

/// List every user, oldest first.
#[utoipa::path(get, path = "/users", tag = "users", responses(
    (status = 200, description = "OK", body = crate::openapi::UsersDoc)
))]
pub async fn list_users(State(state): State<ServerState>) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.registry.list_users().await?;
    Ok(Json(UsersResponse::from_records(&users)))
}
