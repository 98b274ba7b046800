//! Get Shop Settings Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    settings::{ShopSettingsResponse, errors::into_status_error},
    state::State,
};

/// Get Shop Settings Handler
///
/// Returns the saved settings, or the defaults when none were saved.
#[endpoint(tags("settings"), summary = "Get Shop Settings")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ShopSettingsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let settings = state
        .app
        .settings
        .get_settings()
        .await
        .map_err(into_status_error)?;

    Ok(Json(settings.into()))
}
