use serde::{Deserialize, Serialize};

use crate::models::{Course, Project, ProjectCatalog};

/// Course card as listed by `/api/courses`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CourseSummary {
    pub track: String,
    pub title: String,
    pub tagline: String,
    pub image: String,
    pub path: String,
}

impl From<&Course> for CourseSummary {
    fn from(c: &Course) -> Self {
        Self {
            track: c.track.to_string(),
            title: c.title.to_string(),
            tagline: c.tagline.to_string(),
            image: c.image.to_string(),
            path: c.track.path(),
        }
    }
}

/// Project as exposed to clients. Download codes never leave the server.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub category: Option<String>,
    pub technologies: Vec<String>,
    pub icon: String,
    pub requires_code: bool,
    pub downloadable: bool,
}

impl From<&Project> for ProjectSummary {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id,
            title: p.title.to_string(),
            description: p.description.to_string(),
            difficulty: p.difficulty.to_string(),
            category: p.category.map(str::to_string),
            technologies: p.technologies.iter().map(|t| t.to_string()).collect(),
            icon: p.icon.to_string(),
            requires_code: p.requires_code(),
            downloadable: p.source_url.is_some(),
        }
    }
}

/// Filtered project listing
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProjectList {
    pub catalog: String,
    pub title: String,
    pub subtitle: String,
    pub categories: Vec<String>,
    pub total: usize,
    pub projects: Vec<ProjectSummary>,
}

impl ProjectList {
    pub fn new(
        catalog: ProjectCatalog,
        categories: Vec<&str>,
        total: usize,
        projects: &[&Project],
    ) -> Self {
        Self {
            catalog: catalog.to_string(),
            title: catalog.title().to_string(),
            subtitle: catalog.subtitle().to_string(),
            categories: categories.into_iter().map(str::to_string).collect(),
            total,
            projects: projects.iter().map(|p| ProjectSummary::from(*p)).collect(),
        }
    }
}

/// Error details returned by the JSON API
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub message: String,
    pub code: String,
}

impl ApiError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.to_string(),
        }
    }
}
