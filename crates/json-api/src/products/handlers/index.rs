//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns live products, newest first.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use kiosk_app::domain::products::records::ProductUuid;

    use crate::test_helpers::{Mocks, make_product, service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        service(mocks, Router::with_path("api/products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_products() -> TestResult {
        let first = ProductUuid::new();
        let second = ProductUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_list_products()
            .once()
            .return_once(move || Ok(vec![make_product(second), make_product(first)]));

        let mut res = TestClient::get("http://example.com/api/products")
            .send(&make_service(mocks))
            .await;

        let body: ProductsResponse = res.take_json().await?;
        let uuids: Vec<_> = body.products.iter().map(|product| product.uuid).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(uuids, vec![second.into_uuid(), first.into_uuid()]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_with_no_products_returns_empty_list() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .products
            .expect_list_products()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/api/products")
            .send(&make_service(mocks))
            .await;

        let body: ProductsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.products.is_empty());

        Ok(())
    }
}
