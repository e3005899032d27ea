use actix_web::cookie::Cookie;
use actix_web::{HttpResponse, Responder, get, post, web};

use crate::web::forms::SignInQuery;
use crate::web::helpers::render;
use crate::web::security::is_local_path;
use crate::web::state::AppState;
use crate::web::templates::SignInTemplate;

#[get("/sign-in")]
pub async fn sign_in(state: web::Data<AppState>, query: web::Query<SignInQuery>) -> impl Responder {
    let redirect_url = query
        .redirect_url
        .as_deref()
        .map(str::trim)
        .filter(|p| is_local_path(p))
        .unwrap_or("/admin")
        .to_string();

    let hosted_url = state
        .config
        .identity
        .sign_in_url
        .as_ref()
        .map(|url| format!("{}?redirect_url={}", url, redirect_url));

    render(SignInTemplate {
        redirect_url,
        hosted_url,
    })
}

#[post("/sign-out")]
pub async fn sign_out(state: web::Data<AppState>) -> impl Responder {
    let cookie = Cookie::build(state.config.session_cookie.clone(), "")
        .path("/")
        .http_only(true)
        .secure(true)
        .max_age(actix_web::cookie::time::Duration::ZERO)
        .finish();

    HttpResponse::SeeOther()
        .cookie(cookie)
        .insert_header(("Location", "/"))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(sign_in).service(sign_out);
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    use super::*;
    use crate::web::test_support::test_state;

    #[actix_web::test]
    async fn test_sign_in_echoes_local_return_path_only() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/sign-in?redirect_url=/admin/projects")
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("/admin/projects"));

        let req = test::TestRequest::get()
            .uri("/sign-in?redirect_url=https://evil.example")
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(!std::str::from_utf8(&body).unwrap().contains("evil.example"));
    }

    #[actix_web::test]
    async fn test_sign_out_expires_session_cookie() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;
        let req = test::TestRequest::post().uri("/sign-out").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        let cookie = res
            .response()
            .cookies()
            .find(|c| c.name() == "__session")
            .unwrap();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(actix_web::cookie::time::Duration::ZERO));
    }
}
