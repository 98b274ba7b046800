//! App Router

use std::path::Path;

use salvo::{
    Router,
    serve_static::{StaticDir, StaticFile},
};

use crate::{auth, categories, debug, orders, payments, products, reports, settings, upload};

/// Storefront page served for any path that is not a file.
const SHOP_PAGE: &str = "shop.html";

/// Admin page served at `/admin`.
const ADMIN_PAGE: &str = "admin.html";

/// Routes under `/api`. Reads are public, writes sit behind the admin gate.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("login").post(auth::login::handler))
        .push(Router::with_path("logout").post(auth::logout::handler))
        .push(public_router())
        .push(admin_router())
}

fn public_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{uuid}").get(products::get::handler)),
        )
        .push(Router::with_path("categories").get(categories::index::handler))
        .push(Router::with_path("payments").get(payments::index::handler))
        .push(Router::with_path("orders").post(orders::create::handler))
        .push(Router::with_path("checkout").post(orders::checkout::handler))
        .push(Router::with_path("shop-settings").get(settings::get_handler))
}

fn admin_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("products")
                .post(products::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("categories")
                .post(categories::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .put(categories::update::handler)
                        .delete(categories::delete::handler),
                ),
        )
        .push(
            Router::with_path("payments")
                .post(payments::create::handler)
                .push(
                    Router::with_path("{uuid}")
                        .put(payments::update::handler)
                        .delete(payments::delete::handler),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(
                    Router::with_path("{uuid}")
                        .get(orders::get::handler)
                        .put(orders::update::handler)
                        .delete(orders::delete::handler),
                ),
        )
        .push(
            Router::with_path("reports")
                .get(reports::index_handler)
                .push(Router::with_path("csv").get(reports::csv_handler)),
        )
        .push(Router::with_path("shop-settings").put(settings::update_handler))
        .push(Router::with_path("upload").post(upload::handler))
        .push(Router::with_path("debug").get(debug::handler))
}

/// Static pages and uploads. The catch-all must be pushed last.
pub(crate) fn static_router(public_dir: &Path, uploads_dir: &Path) -> Router {
    Router::new()
        .push(Router::with_path("admin").get(StaticFile::new(public_dir.join(ADMIN_PAGE))))
        .push(Router::with_path("uploads/{**path}").get(StaticDir::new([uploads_dir])))
        .push(
            Router::with_path("{**path}").get(
                StaticDir::new([public_dir])
                    .defaults(SHOP_PAGE)
                    .fallback(SHOP_PAGE),
            ),
        )
}
