use crate::models::{Project, ProjectCatalog, ProjectDetail};

mod cpp;
mod daa;
mod details;
mod dsa;
mod java;
mod oop;
mod python;

pub(super) fn for_catalog(catalog: ProjectCatalog) -> &'static [Project] {
    match catalog {
        ProjectCatalog::Cpp => cpp::PROJECTS,
        ProjectCatalog::Java => java::PROJECTS,
        ProjectCatalog::Dsa => dsa::PROJECTS,
        ProjectCatalog::Daa => daa::PROJECTS,
        ProjectCatalog::Python => python::PROJECTS,
        ProjectCatalog::Oop => oop::PROJECTS,
    }
}

pub(super) fn detail(catalog: ProjectCatalog, id: u32) -> Option<&'static ProjectDetail> {
    details::DETAILS
        .iter()
        .find(|d| d.catalog == catalog && d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_point_at_real_projects() {
        for d in details::DETAILS {
            assert!(
                for_catalog(d.catalog).iter().any(|p| p.id == d.id),
                "{} / {}",
                d.catalog,
                d.id
            );
            assert_eq!(
                details::DETAILS
                    .iter()
                    .filter(|o| o.catalog == d.catalog && o.id == d.id)
                    .count(),
                1
            );
        }
    }
}
