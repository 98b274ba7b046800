//! Checkout Handler
//!
//! Accepts the message the mini-app hands to its host and records it as an
//! order. The message shape matches [`kiosk::checkout::CheckoutPayload`].

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use kiosk::checkout::{CheckoutLine, CheckoutPayload};

use crate::{
    extensions::*,
    orders::{OrderResponse, into_status_error},
    state::State,
};

/// One purchased line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutLineRequest {
    pub id: String,
    pub name: String,

    /// Unit price in rubles
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    pub quantity: u32,
}

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    /// Must be `create_order_from_mini_app`
    pub action: String,

    pub products: Vec<CheckoutLineRequest>,

    /// Total in rubles
    #[salvo(schema(value_type = f64))]
    pub total: Decimal,

    pub payment_method: String,

    #[serde(default)]
    pub payment_method_name: String,
}

impl From<CheckoutRequest> for CheckoutPayload {
    fn from(request: CheckoutRequest) -> Self {
        CheckoutPayload {
            action: request.action,
            products: request
                .products
                .into_iter()
                .map(|line| CheckoutLine {
                    id: line.id,
                    name: line.name,
                    price: line.price,
                    quantity: line.quantity,
                })
                .collect(),
            total: request.total,
            payment_method: request.payment_method,
            payment_method_name: request.payment_method_name,
        }
    }
}

/// Checkout Handler
#[endpoint(
    tags("orders"),
    summary = "Record Checkout",
    responses(
        (status_code = StatusCode::CREATED, description = "Order recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Not a checkout message, or nothing in it"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let payload = CheckoutPayload::from(json.into_inner());
    let items = payload.item_count();

    let order = state
        .app
        .orders
        .record_checkout(payload)
        .await
        .map_err(into_status_error)?;

    info!(order = %order.uuid, items, amount = order.amount, "checkout recorded");

    res.add_header(LOCATION, format!("/api/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use std::env;

    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use kiosk::checkout::CHECKOUT_ACTION;
    use kiosk_app::{
        context::AppContext,
        domain::orders::{OrdersServiceError, data::OrderFilter, records::OrderUuid},
    };

    use crate::test_helpers::{Mocks, make_order, service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        service(mocks, Router::with_path("api/checkout").post(handler))
    }

    fn message() -> serde_json::Value {
        json!({
            "action": CHECKOUT_ACTION,
            "products": [
                { "id": "3", "name": "Technical consultation", "price": 3000, "quantity": 1 }
            ],
            "total": 3000,
            "payment_method": "sber",
            "payment_method_name": "Sberbank"
        })
    }

    #[tokio::test]
    async fn test_checkout_is_forwarded_unchanged() -> TestResult {
        let uuid = OrderUuid::new();
        let order = make_order(uuid);

        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_record_checkout()
            .once()
            .withf(|payload| {
                payload.is_checkout()
                    && payload.total == Decimal::new(3000, 0)
                    && payload.products.len() == 1
                    && payload.payment_method == "sber"
            })
            .return_once(move |_| Ok(order));

        let mut res = TestClient::post("http://example.com/api/checkout")
            .json(&message())
            .send(&make_service(mocks))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_foreign_action_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_record_checkout()
            .once()
            .return_once(|_| Err(OrdersServiceError::InvalidData));

        let mut body = message();

        if let Some(fields) = body.as_object_mut() {
            fields.insert("action".to_string(), json!("something_else"));
        }

        let res = TestClient::post("http://example.com/api/checkout")
            .json(&body)
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_oversized_or_unbalanced_total_returns_400() -> TestResult {
        let app = AppContext::from_database_url(None, None).await?;
        let state = State::from_app_context(app, env::temp_dir());
        let service = Service::new(
            Router::new()
                .hoop(inject(Arc::clone(&state)))
                .push(Router::with_path("api/checkout").post(handler)),
        );

        for (price, total) in [(json!(1e27), json!(1e27)), (json!(3000), json!(2999))] {
            let mut body = message();

            if let Some(fields) = body.as_object_mut() {
                fields.insert("total".to_string(), total);
            }

            if let Some(line_price) = body.pointer_mut("/products/0/price") {
                *line_price = price;
            }

            let res = TestClient::post("http://example.com/api/checkout")
                .json(&body)
                .send(&service)
                .await;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        }

        assert!(
            state
                .app
                .orders
                .list_orders(OrderFilter::default())
                .await?
                .is_empty()
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_message_without_products_field_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.orders.expect_record_checkout().never();

        let res = TestClient::post("http://example.com/api/checkout")
            .json(&json!({ "action": CHECKOUT_ACTION, "total": 0, "payment_method": "sber" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
