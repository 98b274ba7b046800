//! Shop Settings

mod errors;
mod get;
mod update;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use kiosk_app::domain::settings::models::ShopSettings;

pub(crate) use self::{get::handler as get_handler, update::handler as update_handler};

/// Seller details shown on the storefront.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShopSettingsResponse {
    pub shop_name: String,
    pub holder_name: String,

    /// Taxpayer identification number
    pub inn: String,

    pub registration_address: String,
    pub organization_address: String,
    pub email: String,
    pub phone: String,

    /// Absent until the settings are saved for the first time
    pub updated_at: Option<String>,
}

impl From<ShopSettings> for ShopSettingsResponse {
    fn from(settings: ShopSettings) -> Self {
        ShopSettingsResponse {
            shop_name: settings.shop_name,
            holder_name: settings.holder_name,
            inn: settings.inn,
            registration_address: settings.registration_address,
            organization_address: settings.organization_address,
            email: settings.email,
            phone: settings.phone,
            updated_at: settings.updated_at.map(|at| at.to_string()),
        }
    }
}
