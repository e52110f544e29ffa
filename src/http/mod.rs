//! HTTP surface: one module per route family, all speaking the
//! `{ok: true, ...}` / `{ok: false, error: <code>}` envelope.

pub mod auth;
pub mod health;
pub mod matches;
pub mod messages;
pub mod players;
pub mod profile;
pub mod reservations;
pub mod routes;

use actix_web::{http::StatusCode, HttpRequest, HttpResponse};
use serde_json::json;

pub fn ok() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "ok": true }))
}

pub fn fail(status: StatusCode, code: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "ok": false, "error": code }))
}

/// Opaque storage failure: logged server-side, surfaced as a bare code.
pub fn storage_fail(err: anyhow::Error) -> HttpResponse {
    log::error!("storage error: {err:#}");
    fail(StatusCode::INTERNAL_SERVER_ERROR, "db_error")
}

/// Catch-all for unmatched routes, keeping the JSON envelope.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "ok": false,
        "error": "not_found",
        "path": req.path(),
        "method": req.method().as_str(),
    }))
}

/// Trim an optional client field. `Ok(None)` means "not provided";
/// a provided-but-blank value is rejected with the given code.
pub(crate) fn required_if_present(
    value: Option<&str>,
    code: &'static str,
) -> Result<Option<String>, &'static str> {
    match value {
        None => Ok(None),
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(code)
            } else {
                Ok(Some(trimmed.to_owned()))
            }
        }
    }
}

/// Trim a required creation field; empty counts as missing.
pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
