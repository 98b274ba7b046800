//! Admin credential extraction.

use kiosk_app::auth::AdminCredentials;
use salvo::{http::header::AUTHORIZATION, prelude::Request};

/// Session token header used by the admin page.
pub(crate) const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Shared password header.
pub(crate) const ADMIN_PASS_HEADER: &str = "x-admin-pass";

/// Everything the request presents to the admin gate.
///
/// A bearer token wins over `x-admin-token` when both are sent.
pub(crate) fn admin_credentials(req: &Request) -> AdminCredentials {
    AdminCredentials {
        token: session_token(req),
        password: non_empty_header(req, ADMIN_PASS_HEADER),
    }
}

/// The session token from `Authorization: Bearer` or `x-admin-token`.
pub(crate) fn session_token(req: &Request) -> Option<String> {
    bearer_token(req).or_else(|| non_empty_header(req, ADMIN_TOKEN_HEADER))
}

fn bearer_token(req: &Request) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

fn non_empty_header(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get(name)?
        .to_str()
        .ok()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
