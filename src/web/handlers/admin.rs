use actix_web::{HttpRequest, Responder, get, web};

use cs_courses::catalog;
use cs_courses::models::{ProjectCatalog, SidebarState};

use crate::web::forms::AdminQuery;
use crate::web::helpers::{not_found, redirect, render, require_admin};
use crate::web::state::AppState;
use crate::web::templates::{
    AdminChrome, AdminCoursesTemplate, AdminDashboardTemplate, AdminProjectsTemplate,
    AdminSectionTemplate, CatalogRow, CourseRow,
};

fn sidebar_state(query: &AdminQuery) -> SidebarState {
    query
        .sidebar
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

#[get("/admin")]
pub async fn admin_index(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state).await {
        return resp;
    }
    redirect("/admin/dashboard")
}

#[get("/admin/dashboard")]
pub async fn dashboard(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminQuery>,
) -> impl Responder {
    let admin = match require_admin(&req, &state).await {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    render(AdminDashboardTemplate {
        chrome: AdminChrome::new(req.path(), sidebar_state(&query), &admin),
        stats: catalog::dashboard_stats(),
        activity: catalog::recent_activity(),
    })
}

#[get("/admin/courses")]
pub async fn courses(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminQuery>,
) -> impl Responder {
    let admin = match require_admin(&req, &state).await {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let rows = catalog::courses()
        .iter()
        .map(|c| CourseRow {
            title: c.title,
            path: c.track.path(),
            units: c.units.len(),
            slides: c.slides.len(),
        })
        .collect();

    render(AdminCoursesTemplate {
        chrome: AdminChrome::new(req.path(), sidebar_state(&query), &admin),
        courses: rows,
        modules: catalog::js_modules(),
        python_lessons: catalog::python_lessons(),
    })
}

#[get("/admin/projects")]
pub async fn projects(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminQuery>,
) -> impl Responder {
    let admin = match require_admin(&req, &state).await {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    render(AdminProjectsTemplate {
        chrome: AdminChrome::new(req.path(), sidebar_state(&query), &admin),
        catalogs: ProjectCatalog::ALL.into_iter().map(CatalogRow::new).collect(),
    })
}

/// Remaining sidebar destinations. Unknown paths are a 404, but only once
/// the caller has passed the gate.
#[get("/admin/{tail:.*}")]
pub async fn section(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AdminQuery>,
) -> impl Responder {
    let admin = match require_admin(&req, &state).await {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let path = req.path().trim_end_matches('/');
    let (item, sub) = match catalog::admin_section(path) {
        Some(found) => found,
        None => return not_found(),
    };

    render(AdminSectionTemplate {
        chrome: AdminChrome::new(path, sidebar_state(&query), &admin),
        title: sub.map_or(item.title, |s| s.title),
        icon: item.icon,
        parent_title: sub.map(|_| item.title),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_index)
        .service(dashboard)
        .service(courses)
        .service(projects)
        .service(section);
}
