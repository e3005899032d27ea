use askama::Template;

use cs_courses::catalog;
use cs_courses::models::{
    Activity, CourseModule, DashboardStat, DownloadPolicy, ProjectCatalog, PythonLesson,
    SidebarState,
};
use cs_courses::services::AdminSession;

pub struct SidebarSubEntry {
    pub title: &'static str,
    pub path: &'static str,
    pub active: bool,
}

pub struct SidebarEntry {
    pub title: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
    pub active: bool,
    pub sub_items: Vec<SidebarSubEntry>,
}

/// Sidebar and header shared by every admin page
pub struct AdminChrome {
    pub sidebar: Vec<SidebarEntry>,
    pub sidebar_open: bool,
    pub toggle_href: String,
    pub user_id: String,
}

impl AdminChrome {
    pub fn new(current_path: &str, sidebar: SidebarState, admin: &AdminSession) -> Self {
        let entries = catalog::sidebar()
            .iter()
            .map(|item| SidebarEntry {
                title: item.title,
                icon: item.icon,
                path: item.path,
                active: item.owns(current_path),
                sub_items: item
                    .sub_items
                    .iter()
                    .map(|s| SidebarSubEntry {
                        title: s.title,
                        path: s.path,
                        active: s.path == current_path,
                    })
                    .collect(),
            })
            .collect();

        Self {
            sidebar: entries,
            sidebar_open: sidebar.is_open(),
            toggle_href: format!("{}?sidebar={}", current_path, sidebar.toggled().as_str()),
            user_id: admin.user_id.clone(),
        }
    }
}

pub struct CourseRow {
    pub title: &'static str,
    pub path: String,
    pub units: usize,
    pub slides: usize,
}

pub struct CatalogRow {
    pub title: &'static str,
    pub path: String,
    pub api_path: String,
    pub count: usize,
    pub downloadable: usize,
    pub code_gated: bool,
}

impl CatalogRow {
    pub fn new(c: ProjectCatalog) -> Self {
        let projects = catalog::projects(c);
        Self {
            title: c.title(),
            path: c.path(),
            api_path: format!("/api/projects/{}", c),
            count: projects.len(),
            downloadable: projects.iter().filter(|p| p.source_url.is_some()).count(),
            code_gated: c.download_policy() == DownloadPolicy::CodeRequired,
        }
    }
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub chrome: AdminChrome,
    pub stats: &'static [DashboardStat],
    pub activity: &'static [Activity],
}

#[derive(Template)]
#[template(path = "admin/courses.html")]
pub struct AdminCoursesTemplate {
    pub chrome: AdminChrome,
    pub courses: Vec<CourseRow>,
    pub modules: &'static [CourseModule],
    pub python_lessons: &'static [PythonLesson],
}

#[derive(Template)]
#[template(path = "admin/projects.html")]
pub struct AdminProjectsTemplate {
    pub chrome: AdminChrome,
    pub catalogs: Vec<CatalogRow>,
}

/// Sidebar destinations without a screen of their own yet
#[derive(Template)]
#[template(path = "admin/section.html")]
pub struct AdminSectionTemplate {
    pub chrome: AdminChrome,
    pub title: &'static str,
    pub icon: &'static str,
    pub parent_title: Option<&'static str>,
}

#[derive(Template)]
#[template(path = "auth/sign_in.html")]
pub struct SignInTemplate {
    pub redirect_url: String,
    pub hosted_url: Option<String>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;
