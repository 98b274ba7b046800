//! Update Shop Settings Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use kiosk_app::domain::settings::models::ShopSettings;

use crate::{
    extensions::*,
    settings::{ShopSettingsResponse, errors::into_status_error},
    state::State,
};

/// Update Shop Settings Request
///
/// Replaces all settings; omitted optional fields become empty.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateShopSettingsRequest {
    pub shop_name: String,
    pub holder_name: String,

    #[serde(default)]
    pub inn: String,

    #[serde(default)]
    pub registration_address: String,

    #[serde(default)]
    pub organization_address: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,
}

impl From<UpdateShopSettingsRequest> for ShopSettings {
    fn from(request: UpdateShopSettingsRequest) -> Self {
        ShopSettings {
            shop_name: request.shop_name,
            holder_name: request.holder_name,
            inn: request.inn,
            registration_address: request.registration_address,
            organization_address: request.organization_address,
            email: request.email,
            phone: request.phone,
            updated_at: None,
        }
    }
}

/// Update Shop Settings Handler
#[endpoint(
    tags("settings"),
    summary = "Update Shop Settings",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Settings saved"),
        (status_code = StatusCode::BAD_REQUEST, description = "Shop name or holder name missing"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Admin credentials required"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateShopSettingsRequest>,
    depot: &mut Depot,
) -> Result<Json<ShopSettingsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let saved = state
        .app
        .settings
        .save_settings(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    info!(shop_name = %saved.shop_name, "shop settings saved");

    Ok(Json(saved.into()))
}
