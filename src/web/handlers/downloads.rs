use std::time::Duration;

use actix_web::{HttpRequest, HttpResponse, Responder, post, web};

use cs_courses::catalog;
use cs_courses::common::DownloadRejection;
use cs_courses::models::ProjectCatalog;
use cs_courses::services::DownloadGrant;

use crate::web::forms::DownloadForm;
use crate::web::helpers::{client_id, client_ip, not_found, redirect};
use crate::web::state::AppState;

/// Code attempts allowed per client address per minute
const ATTEMPTS_PER_MINUTE: usize = 10;

#[post("/projects/{catalog}/{id}/download")]
pub async fn download(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(String, u32)>,
    form: web::Form<DownloadForm>,
) -> impl Responder {
    let (catalog_slug, id) = path.into_inner();
    let project_catalog = match catalog_slug.parse::<ProjectCatalog>() {
        Ok(c) => c,
        Err(_) => return not_found(),
    };
    let project = match catalog::project(project_catalog, id) {
        Ok(p) => p,
        Err(_) => return not_found(),
    };
    let source = match project.source_url {
        Some(url) => url,
        None => return not_found(),
    };

    let back = |reason: &str| {
        format!(
            "{}?download={}&error={}",
            project_catalog.path(),
            id,
            reason
        )
    };

    if !state.rate_limiter.check_rate_limit(
        &format!("download:{}", client_ip(&req)),
        ATTEMPTS_PER_MINUTE,
        Duration::from_secs(60),
    ) {
        log::warn!("download attempts from {} rate limited", client_ip(&req));
        return redirect(&back(DownloadRejection::TooManyAttempts.as_str()));
    }

    // Codes are issued in upper case; the dialog accepts any case
    let code = form.code.to_uppercase();

    let (client, new_cookie) = client_id(&req);
    let location = match state
        .downloads
        .authorize(&client, project_catalog, project, &code)
    {
        Ok(DownloadGrant::Open) => source.to_string(),
        Ok(DownloadGrant::Authorized { remaining, .. }) => {
            log::debug!("client {} has {} downloads left of {}/{}", client, remaining, project_catalog, id);
            source.to_string()
        }
        Err(rejection) => {
            log::info!(
                "download of {}/{} rejected: {}",
                project_catalog,
                id,
                rejection.as_str()
            );
            back(rejection.as_str())
        }
    };

    let mut resp = HttpResponse::SeeOther();
    if let Some(cookie) = new_cookie {
        resp.cookie(cookie);
    }
    resp.insert_header(("Location", location)).finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(download);
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    use super::*;
    use crate::web::helpers::CLIENT_COOKIE;
    use crate::web::test_support::test_state;

    fn code_for(project_id: u32) -> &'static str {
        catalog::project(ProjectCatalog::Daa, project_id)
            .unwrap()
            .download_codes[0]
    }

    fn post(uri: &str, code: &str, client: Option<&str>) -> actix_web::test::TestRequest {
        let mut req = test::TestRequest::post()
            .uri(uri)
            .set_form([("code", code)]);
        if let Some(c) = client {
            req = req.cookie(Cookie::new(CLIENT_COOKIE, c.to_string()));
        }
        req
    }

    #[actix_web::test]
    async fn test_open_catalog_redirects_to_source() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;
        let res = test::call_service(&app, post("/projects/cpp/1/download", "", None).to_request()).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get("Location").unwrap(),
            catalog::project(ProjectCatalog::Cpp, 1).unwrap().source_url.unwrap()
        );
    }

    #[actix_web::test]
    async fn test_missing_code_sends_back_with_reason() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;
        let res = test::call_service(&app, post("/projects/daa/1/download", "  ", None).to_request()).await;

        assert_eq!(
            res.headers().get("Location").unwrap(),
            "/projects/daa?download=1&error=code_required"
        );
    }

    #[actix_web::test]
    async fn test_limit_applies_per_client_cookie() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;
        let code = code_for(1);

        let first = test::call_service(&app, post("/projects/daa/1/download", code, None).to_request()).await;
        let client = first
            .response()
            .cookies()
            .find(|c| c.name() == CLIENT_COOKIE)
            .unwrap()
            .value()
            .to_string();

        for _ in 0..2 {
            let res = test::call_service(&app, post("/projects/daa/1/download", code, Some(&client)).to_request()).await;
            assert!(res.headers().get("Location").unwrap().to_str().unwrap().starts_with("https://"));
        }

        let res = test::call_service(&app, post("/projects/daa/1/download", code, Some(&client)).to_request()).await;
        assert_eq!(
            res.headers().get("Location").unwrap(),
            "/projects/daa?download=1&error=download_limit"
        );
    }

    #[actix_web::test]
    async fn test_unknown_project_is_404() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;
        for uri in [
            "/projects/das/1/download",
            "/projects/daa/999/download",
            "/projects/python/1/download",
            "/projects/oop/1/download",
        ] {
            let res = test::call_service(&app, post(uri, "", None).to_request()).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[actix_web::test]
    async fn test_code_case_is_normalised() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;
        let lower = code_for(1).to_lowercase();

        let res = test::call_service(&app, post("/projects/daa/1/download", &lower, None).to_request()).await;
        assert_eq!(
            res.headers().get("Location").unwrap(),
            catalog::project(ProjectCatalog::Daa, 1).unwrap().source_url.unwrap()
        );
    }

    #[actix_web::test]
    async fn test_attempts_over_limit_send_back_with_reason() {
        let app = test::init_service(App::new().app_data(test_state()).configure(configure)).await;
        let from = |ip: &str| {
            post("/projects/daa/1/download", "WRONG_ADV_000", None)
                .peer_addr(format!("{ip}:40000").parse().unwrap())
                .to_request()
        };

        for _ in 0..ATTEMPTS_PER_MINUTE {
            let res = test::call_service(&app, from("10.0.0.1")).await;
            assert_eq!(
                res.headers().get("Location").unwrap(),
                "/projects/daa?download=1&error=invalid_code"
            );
        }

        let res = test::call_service(&app, from("10.0.0.1")).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        let location = res.headers().get("Location").unwrap().to_str().unwrap();
        assert_eq!(location, "/projects/daa?download=1&error=rate_limit");
        assert_eq!(
            location.rsplit('=').next().unwrap().parse::<DownloadRejection>(),
            Ok(DownloadRejection::TooManyAttempts)
        );

        let res = test::call_service(&app, from("10.0.0.2")).await;
        assert_eq!(
            res.headers().get("Location").unwrap(),
            "/projects/daa?download=1&error=invalid_code"
        );
    }
}
