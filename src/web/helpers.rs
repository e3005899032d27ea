use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use cs_courses::common::GateError;
use cs_courses::log_err;
use cs_courses::services::{AdminSession, is_client_id, new_client_id};

use crate::web::state::AppState;
use crate::web::templates::NotFoundTemplate;

/// Header carrying the session reference for clients that cannot send the cookie
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Anonymous id the download ledger is keyed by
pub const CLIENT_COOKIE: &str = "dl_client";

/// Session reference. Priority: cookie -> request header.
pub fn session_ref(req: &HttpRequest, cookie_name: &str) -> Option<String> {
    let cookie_val = req
        .cookie(cookie_name)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty());

    if cookie_val.is_some() {
        return cookie_val;
    }

    req.headers()
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Gate an `/admin` request. The error side is the response to send instead.
pub async fn require_admin(req: &HttpRequest, state: &AppState) -> Result<AdminSession, HttpResponse> {
    let session = session_ref(req, &state.config.session_cookie);
    let path = req.path();

    match state.gate.require_admin(session.as_deref(), path).await {
        Ok(admin) => Ok(admin),
        Err(err) => match state.gate.redirect_location(&err) {
            Some(location) => Err(redirect(&location)),
            None => {
                if let GateError::Identity(e) = &err {
                    log_err!(
                        "admin check",
                        &serde_json::json!({ "path": path, "error": e.to_string() })
                    );
                }
                Err(HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Internal Server Error"))
            }
        },
    }
}

/// Existing download client id, or a fresh one with the cookie that carries it
pub fn client_id(req: &HttpRequest) -> (String, Option<Cookie<'static>>) {
    let existing = req
        .cookie(CLIENT_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| is_client_id(v));

    match existing {
        Some(id) => (id, None),
        None => {
            let id = new_client_id();
            let cookie = Cookie::build(CLIENT_COOKIE, id.clone())
                .path("/")
                .http_only(true)
                .secure(true)
                .same_site(SameSite::Lax)
                .max_age(actix_web::cookie::time::Duration::days(365))
                .finish();
            (id, Some(cookie))
        }
    }
}

pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("template error: {e}");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Template error")
        }
    }
}

pub fn not_found() -> HttpResponse {
    match NotFoundTemplate.render() {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(_) => HttpResponse::NotFound().finish(),
    }
}
