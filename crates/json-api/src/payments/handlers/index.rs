//! Payment Method Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    payments::{PaymentMethodResponse, errors::into_status_error},
    state::State,
};

/// Payment Method Index Handler
#[endpoint(tags("payments"), summary = "List Payment Methods")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<PaymentMethodResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let methods = state
        .app
        .payments
        .list_payment_methods()
        .await
        .map_err(into_status_error)?;

    Ok(Json(methods.into_iter().map(Into::into).collect()))
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
    async fn test_index_returns_parsed_details() -> TestResult {
        let uuid = PaymentMethodUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .payments
            .expect_list_payment_methods()
            .once()
            .return_once(move || Ok(vec![make_payment_method(uuid)]));

        let mut res = TestClient::get("http://example.com/api/payments")
            .send(&service(mocks, Router::with_path("api/payments").get(handler)))
            .await;

        let body: Vec<PaymentMethodResponse> = res.take_json().await?;
        let method = body.first().ok_or("missing payment method")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(method.kind, "card");
        assert_eq!(method.details, json!({ "code": "sber", "description": "Bank card" }));

        Ok(())
    }
}
