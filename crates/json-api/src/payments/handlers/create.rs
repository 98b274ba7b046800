//! Create Payment Method Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use kiosk::payments::PaymentKind;
use kiosk_app::domain::payments::data::NewPaymentMethod;

use crate::{
    extensions::*,
    payments::{PaymentMethodResponse, errors::into_status_error},
    state::State,
};

/// Create Payment Method Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePaymentMethodRequest {
    pub name: String,

    /// `card`, `qr` or `other`; anything else is `other`
    pub kind: Option<String>,

    #[salvo(schema(value_type = Object))]
    pub details: Option<Value>,

    pub enabled: Option<bool>,
}

impl From<CreatePaymentMethodRequest> for NewPaymentMethod {
    fn from(request: CreatePaymentMethodRequest) -> Self {
        let kind = request
            .kind
            .as_deref()
            .map_or(PaymentKind::Other, PaymentKind::from_str_lossy);

        let mut method = NewPaymentMethod::new(request.name, kind);

        if let Some(details) = request.details {
            method.details = details;
        }

        if let Some(enabled) = request.enabled {
            method.enabled = enabled;
        }

        method
    }
}

/// Create Payment Method Handler
#[endpoint(
    tags("payments"),
    summary = "Create Payment Method",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Payment method created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Admin credentials required"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePaymentMethodRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PaymentMethodResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let method = state
        .app
        .payments
        .create_payment_method(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/payments/{}", method.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

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

    fn make_service(mocks: Mocks) -> Service {
        service(mocks, Router::with_path("api/payments").post(handler))
    }

    #[tokio::test]
    async fn test_create_payment_method_parses_kind() -> TestResult {
        let uuid = PaymentMethodUuid::new();
        let method = make_payment_method(uuid);

        let mut mocks = Mocks::default();

        mocks
            .payments
            .expect_create_payment_method()
            .once()
            .withf(|new| {
                new.name == "Sberbank"
                    && new.kind == PaymentKind::Card
                    && new.details == json!({ "card": "2202 **** 0000" })
                    && new.enabled
            })
            .return_once(move |_| Ok(method));

        let mut res = TestClient::post("http://example.com/api/payments")
            .json(&json!({
                "name": "Sberbank",
                "kind": "card",
                "details": { "card": "2202 **** 0000" }
            }))
            .send(&make_service(mocks))
            .await;

        let body: PaymentMethodResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_payment_method_without_name_returns_400() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.payments.expect_create_payment_method().never();

        let res = TestClient::post("http://example.com/api/payments")
            .json(&json!({ "kind": "qr" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
