//! Admin Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use kiosk_app::auth::AuthServiceError;

use crate::{extensions::*, state::State};

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub password: String,
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    pub success: bool,

    /// Session token for `Authorization: Bearer` or `x-admin-token`
    pub token: String,
}

/// Admin Login Handler
#[endpoint(
    tags("auth"),
    summary = "Admin Login",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Wrong password or login disabled"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let token = state
        .app
        .auth
        .login(&json.into_inner().password)
        .await
        .map_err(|error| match error {
            AuthServiceError::InvalidPassword => {
                StatusError::unauthorized().brief("Invalid password")
            }
            AuthServiceError::Disabled => {
                StatusError::unauthorized().brief("Admin login is disabled")
            }
        })?;

    info!("admin session started");

    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}
