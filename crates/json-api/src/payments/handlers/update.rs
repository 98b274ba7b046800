//! Update Payment Method Handler

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

use kiosk::payments::PaymentKind;
use kiosk_app::domain::payments::data::PaymentMethodUpdate;

use crate::{
    extensions::*,
    payments::{PaymentMethodResponse, errors::into_status_error},
    state::State,
};

/// Update Payment Method Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdatePaymentMethodRequest {
    pub name: Option<String>,
    pub kind: Option<String>,

    #[salvo(schema(value_type = Object))]
    pub details: Option<Value>,

    pub enabled: Option<bool>,
}

impl From<UpdatePaymentMethodRequest> for PaymentMethodUpdate {
    fn from(request: UpdatePaymentMethodRequest) -> Self {
        PaymentMethodUpdate {
            name: request.name,
            kind: request.kind.as_deref().map(PaymentKind::from_str_lossy),
            details: request.details,
            enabled: request.enabled,
        }
    }
}

/// Update Payment Method Handler
#[endpoint(
    tags("payments"),
    summary = "Update Payment Method",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payment method updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Payment method not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Admin credentials required"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdatePaymentMethodRequest>,
    depot: &mut Depot,
) -> Result<Json<PaymentMethodResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let method = state
        .app
        .payments
        .update_payment_method(uuid.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(method.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use kiosk_app::domain::payments::records::PaymentMethodUuid;

    use crate::test_helpers::{Mocks, make_payment_method, service};

    use super::*;

    #[tokio::test]
    async fn test_update_can_disable_a_method() -> TestResult {
        let uuid = PaymentMethodUuid::new();

        let mut method = make_payment_method(uuid);

        method.enabled = false;

        let mut mocks = Mocks::default();

        mocks
            .payments
            .expect_update_payment_method()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == PaymentMethodUpdate {
                            enabled: Some(false),
                            ..PaymentMethodUpdate::default()
                        }
            })
            .return_once(move |_, _| Ok(method));

        let mut res = TestClient::put(format!("http://example.com/api/payments/{uuid}"))
            .json(&json!({ "enabled": false }))
            .send(&service(
                mocks,
                Router::with_path("api/payments/{uuid}").put(handler),
            ))
            .await;

        let body: PaymentMethodResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(!body.enabled);

        Ok(())
    }
}
