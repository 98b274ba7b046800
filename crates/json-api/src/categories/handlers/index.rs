//! Category Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    categories::{CategoryResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Category Index Handler
///
/// Returns active categories ordered by sort order, then name.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CategoryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .categories
        .list_categories()
        .await
        .map_err(into_status_error)?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use kiosk_app::domain::categories::records::CategoryUuid;

    use crate::test_helpers::{Mocks, make_category, service};

    use super::*;

    #[tokio::test]
    async fn test_index_returns_categories() -> TestResult {
        let uuid = CategoryUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .categories
            .expect_list_categories()
            .once()
            .return_once(move || Ok(vec![make_category(uuid)]));

        let mut res = TestClient::get("http://example.com/api/categories")
            .send(&service(mocks, Router::with_path("api/categories").get(handler)))
            .await;

        let body: Vec<CategoryResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 1);
        assert_eq!(body.first().map(|c| c.uuid), Some(uuid.into_uuid()));

        Ok(())
    }
}
