//! Create Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use kiosk_app::domain::orders::data::NewOrder;

use crate::{
    extensions::*,
    orders::{OrderResponse, into_status_error},
    state::State,
};

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    /// Amount in kopecks
    pub amount: u64,

    pub product_uuid: Option<Uuid>,
    pub payment_method: Option<String>,

    #[salvo(schema(value_type = Object))]
    pub payment_details: Option<Value>,

    #[serde(default)]
    pub customer_contact: String,

    #[serde(default)]
    pub admin_contact: String,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        let mut order = NewOrder::new(request.amount);

        order.product_uuid = request.product_uuid.map(Into::into);
        order.payment_method = request.payment_method;
        order.customer_contact = request.customer_contact;
        order.admin_contact = request.admin_contact;

        if let Some(details) = request.payment_details {
            order.payment_details = details;
        }

        order
    }
}

/// Create Order Handler
///
/// Records an order placed from the storefront.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .create_order(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use kiosk_app::domain::orders::{OrdersServiceError, records::OrderUuid};

    use crate::test_helpers::{Mocks, make_order, service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        service(mocks, Router::with_path("api/orders").post(handler))
    }

    #[tokio::test]
    async fn test_create_order_success() -> TestResult {
        let uuid = OrderUuid::new();
        let order = make_order(uuid);

        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_create_order()
            .once()
            .withf(|new| {
                new.amount == 300_000
                    && new.payment_method.as_deref() == Some("sber")
                    && new.payment_details == json!({ "card": "2202 **** 0000" })
                    && new.customer_contact == "@customer"
            })
            .return_once(move |_| Ok(order));

        let mut res = TestClient::post("http://example.com/api/orders")
            .json(&json!({
                "amount": 300_000,
                "payment_method": "sber",
                "payment_details": { "card": "2202 **** 0000" },
                "customer_contact": "@customer"
            }))
            .send(&make_service(mocks))
            .await;

        let body: OrderResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/api/orders/{uuid}").as_str()));
        assert_eq!(body.amount, 300_000);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_without_amount_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.orders.expect_create_order().never();

        let res = TestClient::post("http://example.com/api/orders")
            .json(&json!({ "payment_method": "sber" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_for_unknown_product_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_create_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/api/orders")
            .json(&json!({ "amount": 100, "product_uuid": uuid::Uuid::now_v7() }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
