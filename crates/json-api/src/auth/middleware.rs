//! Admin gate middleware.

use std::sync::Arc;

use salvo::prelude::*;
use tracing::debug;

use crate::{auth::admin_credentials, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let credentials = admin_credentials(req);

    if credentials.token.is_none() && credentials.password.is_none() {
        res.render(StatusError::unauthorized().brief("Missing admin credentials"));
        ctrl.skip_rest();

        return;
    }

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    if !state.app.auth.authorize(&credentials).await {
        debug!(path = %req.uri().path(), "admin credentials rejected");

        res.render(StatusError::unauthorized().brief("Invalid admin credentials"));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}
