use serde::Serialize;

use super::{CodeSample, Difficulty};
use crate::common::CatalogError;

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub category: Option<&'static str>,
    pub duration: Option<&'static str>,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub concepts: &'static [&'static str],
    /// Where the source lives; catalogs without downloads leave it empty
    pub source_url: Option<&'static str>,
    pub icon: &'static str,
    pub complexity: Option<Complexity>,
    #[serde(skip)]
    pub download_codes: &'static [&'static str],
}

impl Project {
    pub fn requires_code(&self) -> bool {
        !self.download_codes.is_empty()
    }

    pub fn accepts_code(&self, code: &str) -> bool {
        self.download_codes.contains(&code)
    }
}

/// Write-up shown on a project's own page, next to the card fields
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub catalog: ProjectCatalog,
    pub id: u32,
    pub overview: &'static str,
    pub highlights: &'static [&'static str],
    pub implementation: &'static [CodeSample],
    pub requirements: &'static [&'static str],
    pub setup: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

/// How a catalog hands out source downloads
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DownloadPolicy {
    Open,
    CodeRequired,
}

/// Which filter controls a catalog page offers
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FilterControls {
    pub difficulty: bool,
    pub category: bool,
    /// First option of the category select
    pub category_label: &'static str,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCatalog {
    Cpp,
    Java,
    Dsa,
    Daa,
    Python,
    Oop,
}

impl ProjectCatalog {
    pub const ALL: [ProjectCatalog; 6] = [
        Self::Cpp,
        Self::Java,
        Self::Dsa,
        Self::Daa,
        Self::Python,
        Self::Oop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Dsa => "dsa",
            Self::Daa => "daa",
            Self::Python => "python",
            Self::Oop => "oop",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Cpp => "C++ Projects",
            Self::Java => "Java Projects",
            Self::Dsa => "Data Structures Projects",
            Self::Daa => "Data Analysis & Algorithms Projects",
            Self::Python => "Python Projects",
            Self::Oop => "Object-Oriented Programming Projects",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Cpp => "Explore C++ projects ranging from beginner to advanced levels, from basic syntax to OOP, data structures and design patterns.",
            Self::Java => "Enterprise-grade Java projects covering Spring, persistence, security and real-world architecture.",
            Self::Dsa => "C++ implementations of the classic data structures, each with headers, sources and tests.",
            Self::Daa => "Explore advanced algorithms and their implementations",
            Self::Python => "Apply your Python skills to real-world projects. Build your portfolio and gain practical experience.",
            Self::Oop => "Explore our collection of OOP projects that demonstrate key object-oriented principles and design patterns.",
        }
    }

    pub fn path(&self) -> String {
        format!("/projects/{}", self.as_str())
    }

    pub fn download_policy(&self) -> DownloadPolicy {
        match self {
            Self::Daa => DownloadPolicy::CodeRequired,
            _ => DownloadPolicy::Open,
        }
    }

    pub fn filter_controls(&self) -> FilterControls {
        match self {
            Self::Cpp | Self::Java | Self::Python => FilterControls {
                difficulty: true,
                category: false,
                category_label: "All Categories",
            },
            Self::Dsa => FilterControls {
                difficulty: false,
                category: true,
                category_label: "All Categories",
            },
            Self::Daa => FilterControls {
                difficulty: true,
                category: true,
                category_label: "All Categories",
            },
            // OOP projects are grouped by language
            Self::Oop => FilterControls {
                difficulty: false,
                category: true,
                category_label: "All Languages",
            },
        }
    }
}

impl std::fmt::Display for ProjectCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProjectCatalog {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpp" | "c++" => Ok(Self::Cpp),
            "java" => Ok(Self::Java),
            "dsa" => Ok(Self::Dsa),
            "daa" => Ok(Self::Daa),
            "python" => Ok(Self::Python),
            "oop" => Ok(Self::Oop),
            _ => Err(CatalogError::UnknownCatalog(s.to_string())),
        }
    }
}
