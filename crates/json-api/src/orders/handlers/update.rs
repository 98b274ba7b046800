//! Update Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use kiosk_app::domain::orders::data::OrderUpdate;

use crate::{
    extensions::*,
    orders::{OrderResponse, into_status_error},
    state::State,
};

/// Update Order Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderRequest {
    pub product_uuid: Option<Uuid>,
    pub amount: Option<u64>,
    pub payment_method: Option<String>,

    #[salvo(schema(value_type = Object))]
    pub payment_details: Option<Value>,

    pub customer_contact: Option<String>,
    pub admin_contact: Option<String>,
}

impl From<UpdateOrderRequest> for OrderUpdate {
    fn from(request: UpdateOrderRequest) -> Self {
        OrderUpdate {
            product_uuid: request.product_uuid.map(Into::into),
            amount: request.amount,
            payment_method: request.payment_method,
            payment_details: request.payment_details,
            customer_contact: request.customer_contact,
            admin_contact: request.admin_contact,
        }
    }
}

/// Update Order Handler
#[endpoint(
    tags("orders"),
    summary = "Update Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Admin credentials required"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .update_order(uuid.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use kiosk_app::domain::orders::records::OrderUuid;

    use crate::test_helpers::{Mocks, make_order, service};

    use super::*;

    #[tokio::test]
    async fn test_update_sets_admin_contact_only() -> TestResult {
        let uuid = OrderUuid::new();

        let mut order = make_order(uuid);

        order.admin_contact = "@owner".to_string();

        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_update_order()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == OrderUpdate {
                            admin_contact: Some("@owner".to_string()),
                            ..OrderUpdate::default()
                        }
            })
            .return_once(move |_, _| Ok(order));

        let mut res = TestClient::put(format!("http://example.com/api/orders/{uuid}"))
            .json(&json!({ "admin_contact": "@owner" }))
            .send(&service(
                mocks,
                Router::with_path("api/orders/{uuid}").put(handler),
            ))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.admin_contact, "@owner");
        assert_eq!(body.amount, 300_000);

        Ok(())
    }
}
