use serde::{Deserialize, Serialize};

use crate::models::Project;

/// Search box plus the two select filters of a project page
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProjectFilter {
    pub q: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
}

impl ProjectFilter {
    pub fn search(q: &str) -> Self {
        Self {
            q: Some(q.to_string()),
            ..Self::default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: &str) -> Self {
        self.difficulty = Some(difficulty.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Value shown in a select; absent means "all"
    pub fn difficulty_or_all(&self) -> &str {
        self.difficulty.as_deref().unwrap_or("all")
    }

    pub fn category_or_all(&self) -> &str {
        self.category.as_deref().unwrap_or("all")
    }

    pub fn matches(&self, project: &Project) -> bool {
        let needle = self
            .q
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .unwrap_or_default();

        let matches_search = needle.is_empty()
            || project.title.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle);

        let matches_difficulty = match self.difficulty_or_all() {
            "all" | "" => true,
            d => project.difficulty == d,
        };

        let matches_category = match self.category_or_all() {
            "all" | "" => true,
            c => project.category == Some(c),
        };

        matches_search && matches_difficulty && matches_category
    }
}

/// Linear scan in catalog order. No index; this runs on every keystroke.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Distinct categories in first-seen order
pub fn categories(projects: &[Project]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for c in projects.iter().filter_map(|p| p.category) {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn project(id: u32, title: &'static str, difficulty: Difficulty, category: Option<&'static str>) -> Project {
        Project {
            id,
            title,
            description: "A small sample project",
            difficulty,
            category,
            duration: None,
            features: &[],
            technologies: &[],
            concepts: &[],
            source_url: None,
            icon: "📦",
            complexity: None,
            download_codes: &[],
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, "Stack Implementation", Difficulty::Intermediate, Some("stack")),
            project(2, "Binary Search Tree", Difficulty::Advanced, Some("tree")),
            project(3, "AVL Tree", Difficulty::Advanced, Some("tree")),
        ]
    }

    #[test]
    fn test_blank_filter_keeps_everything() {
        let projects = sample();
        assert_eq!(filter_projects(&projects, &ProjectFilter::default()).len(), 3);
        assert_eq!(filter_projects(&projects, &ProjectFilter::search("   ")).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let projects = sample();
        let found = filter_projects(&projects, &ProjectFilter::search("bINARY"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn test_search_checks_description() {
        let projects = sample();
        assert_eq!(filter_projects(&projects, &ProjectFilter::search("sample")).len(), 3);
    }

    #[test]
    fn test_tag_filters_are_exact() {
        let projects = sample();
        let trees = ProjectFilter::default().with_category("tree");
        assert_eq!(filter_projects(&projects, &trees).len(), 2);

        let partial = ProjectFilter::default().with_category("tre");
        assert!(filter_projects(&projects, &partial).is_empty());

        let beginner = ProjectFilter::default().with_difficulty("beginner");
        assert!(filter_projects(&projects, &beginner).is_empty());
    }

    #[test]
    fn test_filters_combine() {
        let projects = sample();
        let filter = ProjectFilter::search("tree")
            .with_difficulty("advanced")
            .with_category("tree");
        assert_eq!(filter_projects(&projects, &filter).len(), 2);

        let filter = ProjectFilter::search("avl").with_category("stack");
        assert!(filter_projects(&projects, &filter).is_empty());
    }

    #[test]
    fn test_categories_are_distinct_in_order() {
        assert_eq!(categories(&sample()), vec!["stack", "tree"]);
    }
}
