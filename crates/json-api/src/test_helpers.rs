//! Test helpers.

use std::{env, path::PathBuf, sync::Arc};

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use serde_json::json;

use kiosk::payments::PaymentKind;
use kiosk_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        categories::{
            MockCategoriesService,
            records::{CategoryRecord, CategoryUuid},
        },
        diagnostics::MockDiagnosticsService,
        orders::{
            MockOrdersService,
            records::{OrderRecord, OrderUuid},
        },
        payments::{
            MockPaymentsService,
            records::{PaymentMethodRecord, PaymentMethodUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        reports::MockReportsService,
        settings::MockSettingsService,
    },
};

use crate::state::State;

/// Service mocks with no expectations; any unexpected call fails the test.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) products: MockProductsService,
    pub(crate) categories: MockCategoriesService,
    pub(crate) payments: MockPaymentsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) reports: MockReportsService,
    pub(crate) settings: MockSettingsService,
    pub(crate) diagnostics: MockDiagnosticsService,
    pub(crate) auth: MockAuthService,
}

impl Mocks {
    pub(crate) fn into_context(self) -> AppContext {
        AppContext {
            products: Arc::new(self.products),
            categories: Arc::new(self.categories),
            payments: Arc::new(self.payments),
            orders: Arc::new(self.orders),
            reports: Arc::new(self.reports),
            settings: Arc::new(self.settings),
            diagnostics: Arc::new(self.diagnostics),
            auth: Arc::new(self.auth),
        }
    }
}

pub(crate) fn state_with(mocks: Mocks) -> Arc<State> {
    state_with_uploads(mocks, env::temp_dir())
}

pub(crate) fn state_with_uploads(mocks: Mocks, uploads_dir: PathBuf) -> Arc<State> {
    State::from_app_context(mocks.into_context(), uploads_dir)
}

/// A service exposing `route` with the mocked state injected.
pub(crate) fn service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with(mocks))).push(route))
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        title: "Web development".to_string(),
        description: "Landing pages and online shops".to_string(),
        price: 1_000_000,
        sku: Some("1".to_string()),
        image_url: None,
        category_uuid: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_category(uuid: CategoryUuid) -> CategoryRecord {
    CategoryRecord {
        uuid,
        name: "Development".to_string(),
        description: None,
        sort_order: 0,
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_payment_method(uuid: PaymentMethodUuid) -> PaymentMethodRecord {
    PaymentMethodRecord {
        uuid,
        name: "Sberbank".to_string(),
        kind: PaymentKind::Card,
        details: json!({ "code": "sber", "description": "Bank card" }),
        enabled: true,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(uuid: OrderUuid) -> OrderRecord {
    OrderRecord {
        uuid,
        product_uuid: None,
        amount: 300_000,
        payment_method: Some("sber".to_string()),
        payment_details: json!({}),
        customer_contact: "@customer".to_string(),
        admin_contact: String::new(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}
