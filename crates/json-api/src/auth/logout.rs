//! Admin Logout Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{auth::session_token, extensions::*, state::State};

/// Logout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LogoutResponse {
    pub success: bool,
}

/// Admin Logout Handler
///
/// Revokes the presented session token. Succeeds whether or not the token
/// was live.
#[endpoint(tags("auth"), summary = "Admin Logout")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<LogoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    if let Some(token) = session_token(req) {
        state.app.auth.logout(&token).await;
    }

    Ok(Json(LogoutResponse { success: true }))
}
