//! Create Category Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use kiosk_app::domain::categories::data::NewCategory;

use crate::{
    categories::{CategoryResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Create Category Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,

    #[serde(default)]
    pub sort_order: i64,

    #[serde(default = "active")]
    pub is_active: bool,
}

fn active() -> bool {
    true
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(request: CreateCategoryRequest) -> Self {
        NewCategory {
            description: request.description,
            sort_order: request.sort_order,
            is_active: request.is_active,
            ..NewCategory::named(request.name)
        }
    }
}

/// Create Category Handler
#[endpoint(
    tags("categories"),
    summary = "Create Category",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Category created"),
        (status_code = StatusCode::CONFLICT, description = "Category already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Admin credentials required"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCategoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = state
        .app
        .categories
        .create_category(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/categories/{}", category.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(category.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use kiosk_app::domain::categories::{CategoriesServiceError, records::CategoryUuid};

    use crate::test_helpers::{Mocks, make_category, service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        service(mocks, Router::with_path("api/categories").post(handler))
    }

    #[tokio::test]
    async fn test_create_category_defaults_to_active() -> TestResult {
        let uuid = CategoryUuid::new();
        let category = make_category(uuid);

        let mut mocks = Mocks::default();

        mocks
            .categories
            .expect_create_category()
            .once()
            .withf(|new| new.name == "Development" && new.is_active && new.sort_order == 0)
            .return_once(move |_| Ok(category));

        let mut res = TestClient::post("http://example.com/api/categories")
            .json(&json!({ "name": "Development" }))
            .send(&make_service(mocks))
            .await;

        let body: CategoryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_category_without_name_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.categories.expect_create_category().never();

        let res = TestClient::post("http://example.com/api/categories")
            .json(&json!({ "sort_order": 3 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_category_returns_409() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .categories
            .expect_create_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/api/categories")
            .json(&json!({ "name": "Development" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
