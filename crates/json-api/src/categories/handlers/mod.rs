//! Category Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kiosk_app::domain::categories::records::CategoryRecord;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod update;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,

    /// Lower sorts first
    pub sort_order: i64,

    pub is_active: bool,
    pub created_at: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        CategoryResponse {
            uuid: category.uuid.into(),
            name: category.name,
            description: category.description,
            sort_order: category.sort_order,
            is_active: category.is_active,
            created_at: category.created_at.to_string(),
        }
    }
}
