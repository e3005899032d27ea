use actix_web::{HttpResponse, Responder, get, web};

use cs_courses::catalog::{self, ProjectFilter, filter_projects};
use cs_courses::models::ProjectCatalog;
use cs_courses::types::{ApiError, CourseSummary, ProjectList};

#[get("/api/courses")]
pub async fn list_courses() -> impl Responder {
    let courses: Vec<CourseSummary> = catalog::courses().iter().map(CourseSummary::from).collect();
    HttpResponse::Ok().json(courses)
}

#[get("/api/courses/{track}")]
pub async fn get_course(path: web::Path<String>) -> impl Responder {
    match catalog::course_by_slug(&path) {
        Ok(course) => HttpResponse::Ok().json(CourseSummary::from(course)),
        Err(e) => HttpResponse::NotFound().json(ApiError::new("unknown_track", e.to_string())),
    }
}

#[get("/api/projects/{catalog}")]
pub async fn list_projects(
    path: web::Path<String>,
    query: web::Query<ProjectFilter>,
) -> impl Responder {
    let project_catalog = match path.parse::<ProjectCatalog>() {
        Ok(c) => c,
        Err(e) => {
            return HttpResponse::NotFound().json(ApiError::new("unknown_catalog", e.to_string()));
        }
    };

    let all = catalog::projects(project_catalog);
    let matching = filter_projects(all, &query);

    HttpResponse::Ok().json(ProjectList::new(
        project_catalog,
        catalog::project_categories(project_catalog),
        all.len(),
        &matching,
    ))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_courses)
        .service(get_course)
        .service(list_projects);
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    use super::*;
    use cs_courses::types::ProjectSummary;

    #[actix_web::test]
    async fn test_course_listing() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/courses").to_request();
        let courses: Vec<CourseSummary> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(courses.len(), 4);
        assert!(courses.iter().any(|c| c.path == "/courses/javascript"));
    }

    #[actix_web::test]
    async fn test_unknown_track_is_json_404() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/courses/rust").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let err: ApiError = test::read_body_json(res).await;
        assert_eq!(err.code, "unknown_track");
    }

    #[actix_web::test]
    async fn test_project_filter_from_query() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/api/projects/cpp?difficulty=beginner")
            .to_request();
        let list: ProjectList = test::call_and_read_body_json(&app, req).await;

        assert_eq!(list.total, catalog::projects(ProjectCatalog::Cpp).len());
        assert!(!list.projects.is_empty());
        assert!(list.projects.iter().all(|p: &ProjectSummary| p.difficulty == "beginner"));
    }

    #[actix_web::test]
    async fn test_download_codes_never_serialized() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/projects/daa").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let text = std::str::from_utf8(&body).unwrap();

        assert!(text.contains("\"requires_code\":true"));
        assert!(!text.contains("_2024"));
        assert!(!text.contains("_ADV_"));
    }
}
