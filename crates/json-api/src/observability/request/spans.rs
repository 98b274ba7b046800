//! HTTP span helpers.

use uuid::Uuid;

const API_PREFIX: &str = "/api";

/// Route label for spans and metrics.
///
/// UUID segments collapse to `{uuid}`. Anything outside the API and the
/// service endpoints is a static file and shares one label.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let is_api = path == API_PREFIX || path.starts_with("/api/");
    let is_service = matches!(path, "/healthcheck" | "/admin" | "/docs")
        || path.starts_with("/api-doc/")
        || path.starts_with("/docs/");

    if !is_api && !is_service {
        return if path.starts_with("/uploads/") {
            "/uploads/{file}".to_owned()
        } else {
            "/{static}".to_owned()
        };
    }

    let mut label = String::with_capacity(path.len());

    for segment in path.trim_start_matches('/').split('/') {
        label.push('/');

        if Uuid::parse_str(segment).is_ok() {
            label.push_str("{uuid}");
        } else {
            label.push_str(segment);
        }
    }

    label
}
