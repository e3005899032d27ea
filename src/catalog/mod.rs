//! Compiled-in course, lesson and project content.
//!
//! Everything here is declared once and never mutated. Lookups by slug hand
//! back `&'static` records or a [`CatalogError`] the web layer turns into a 404.

pub use filter::*;

mod admin;
mod courses;
mod filter;
mod jsbasics;
mod projects;
mod python;

use crate::common::CatalogError;
use crate::models::{
    Activity, Course, CourseModule, DashboardStat, Lesson, Project, ProjectCatalog, ProjectDetail,
    PythonLesson, SidebarItem, SidebarLink, Track,
};

pub fn courses() -> &'static [Course] {
    courses::COURSES
}

pub fn course(track: Track) -> Result<&'static Course, CatalogError> {
    courses::COURSES
        .iter()
        .find(|c| c.track == track)
        .ok_or_else(|| CatalogError::UnknownTrack(track.to_string()))
}

pub fn course_by_slug(slug: &str) -> Result<&'static Course, CatalogError> {
    course(slug.parse::<Track>()?)
}

/// Ordered modules of the JavaScript Basics course
pub fn js_modules() -> &'static [CourseModule] {
    jsbasics::MODULES
}

pub fn js_lesson(slug: &str) -> Result<&'static Lesson, CatalogError> {
    jsbasics::LESSONS
        .iter()
        .find(|l| l.slug == slug)
        .ok_or_else(|| CatalogError::UnknownLesson(slug.to_string()))
}

/// Previous and next module around a lesson, for the lesson footer links
pub fn js_neighbours(slug: &str) -> (Option<&'static CourseModule>, Option<&'static CourseModule>) {
    let modules = jsbasics::MODULES;
    match modules.iter().position(|m| m.path.ends_with(&format!("/{slug}"))) {
        Some(i) => (
            i.checked_sub(1).and_then(|p| modules.get(p)),
            modules.get(i + 1),
        ),
        None => (None, None),
    }
}

pub fn python_lessons() -> &'static [PythonLesson] {
    python::LESSONS
}

pub fn python_lesson(id: &str) -> Result<&'static PythonLesson, CatalogError> {
    python::LESSONS
        .iter()
        .find(|l| l.id == id)
        .ok_or_else(|| CatalogError::UnknownLesson(id.to_string()))
}

pub fn projects(catalog: ProjectCatalog) -> &'static [Project] {
    projects::for_catalog(catalog)
}

pub fn project(catalog: ProjectCatalog, id: u32) -> Result<&'static Project, CatalogError> {
    projects::for_catalog(catalog)
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CatalogError::UnknownProject {
            catalog: catalog.to_string(),
            id,
        })
}

/// Long-form write-up for a project page. Not every project has one.
pub fn project_detail(catalog: ProjectCatalog, id: u32) -> Option<&'static ProjectDetail> {
    projects::detail(catalog, id)
}

pub fn project_categories(catalog: ProjectCatalog) -> Vec<&'static str> {
    categories(projects::for_catalog(catalog))
}

pub fn sidebar() -> &'static [SidebarItem] {
    admin::SIDEBAR
}

pub fn dashboard_stats() -> &'static [DashboardStat] {
    admin::STATS
}

pub fn recent_activity() -> &'static [Activity] {
    admin::ACTIVITY
}

/// Resolve an admin path to the sidebar entry (or sub-entry) it names
pub fn admin_section(path: &str) -> Option<(&'static SidebarItem, Option<&'static SidebarLink>)> {
    admin::SIDEBAR.iter().find_map(|item| {
        if item.path == path {
            Some((item, None))
        } else {
            item.sub_items
                .iter()
                .find(|s| s.path == path)
                .map(|s| (item, Some(s)))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_track_has_a_course() {
        for track in Track::ALL {
            assert_eq!(course(track).unwrap().track, track);
        }
        assert!(course_by_slug("rust").is_err());
    }

    #[test]
    fn test_every_js_module_has_a_lesson() {
        for module in js_modules() {
            let slug = module.path.rsplit('/').next().unwrap();
            let lesson = js_lesson(slug).unwrap();
            assert!(!lesson.samples.is_empty(), "{slug} has no samples");
            assert!(!lesson.exercises.is_empty(), "{slug} has no exercises");
        }
    }

    #[test]
    fn test_js_neighbours_at_edges() {
        let (prev, next) = js_neighbours("variables-and-datatypes");
        assert!(prev.is_none());
        assert_eq!(next.unwrap().title, "Objects and Arrays");

        let (prev, next) = js_neighbours("error-handling");
        assert_eq!(prev.unwrap().title, "Asynchronous JavaScript");
        assert!(next.is_none());
    }

    #[test]
    fn test_unknown_python_lesson() {
        assert_eq!(
            python_lesson("generators").unwrap_err(),
            CatalogError::UnknownLesson("generators".to_string())
        );
    }

    #[test]
    fn test_project_ids_are_unique_per_catalog() {
        for catalog in ProjectCatalog::ALL {
            let items = projects(catalog);
            for p in items {
                assert_eq!(items.iter().filter(|q| q.id == p.id).count(), 1);
            }
        }
    }

    #[test]
    fn test_only_code_gated_catalog_carries_codes() {
        use crate::models::DownloadPolicy;

        for catalog in ProjectCatalog::ALL {
            let gated = catalog.download_policy() == DownloadPolicy::CodeRequired;
            for p in projects(catalog) {
                assert_eq!(p.requires_code(), gated, "{} / {}", catalog, p.title);
            }
        }
    }

    #[test]
    fn test_every_detail_belongs_to_a_project() {
        for catalog in ProjectCatalog::ALL {
            for p in projects(catalog) {
                if let Some(detail) = project_detail(catalog, p.id) {
                    assert_eq!((detail.catalog, detail.id), (catalog, p.id));
                    assert!(!detail.overview.is_empty(), "{}", p.title);
                }
            }
        }
        assert!(project_detail(ProjectCatalog::Cpp, 5).is_none());
        assert!(project_detail(ProjectCatalog::Oop, 99).is_none());
    }

    #[test]
    fn test_admin_section_resolves_sub_items() {
        let (item, sub) = admin_section("/admin/courses/add").unwrap();
        assert_eq!(item.title, "Courses");
        assert_eq!(sub.unwrap().title, "Add Course");

        let (item, sub) = admin_section("/admin/analytics").unwrap();
        assert_eq!(item.title, "Analytics");
        assert!(sub.is_none());

        assert!(admin_section("/admin/billing").is_none());
    }
}
