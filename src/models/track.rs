use serde::Serialize;

use crate::common::CatalogError;

/// A course track offered in the catalog
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    JavaScript,
    Python,
    Java,
    Cpp,
}

impl Track {
    pub const ALL: [Track; 4] = [Self::JavaScript, Self::Python, Self::Java, Self::Cpp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "cpp",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Cpp => "C++",
        }
    }

    pub fn path(&self) -> String {
        format!("/courses/{}", self.as_str())
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Track {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "javascript" => Ok(Self::JavaScript),
            "python" => Ok(Self::Python),
            "java" => Ok(Self::Java),
            "cpp" | "c++" => Ok(Self::Cpp),
            _ => Err(CatalogError::UnknownTrack(s.to_string())),
        }
    }
}
