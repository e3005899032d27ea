mod common;

#[cfg(test)]
pub mod catalog_tests {
    use cs_courses::catalog::{self, ProjectFilter, filter_projects};
    use cs_courses::common::*;
    use cs_courses::models::*;

    #[test]
    fn test_exact_title_search_finds_that_project() {
        for c in ProjectCatalog::ALL {
            let all = catalog::projects(c);
            for p in all {
                let found = filter_projects(all, &ProjectFilter::search(p.title));
                assert!(
                    found.iter().any(|f| f.id == p.id),
                    "{} not found in {}",
                    p.title,
                    c
                );
            }
        }
    }

    #[test]
    fn test_title_matching_one_project_returns_only_it() {
        let mut checked = 0;
        for c in ProjectCatalog::ALL {
            let all = catalog::projects(c);
            for p in all {
                let needle = p.title.to_lowercase();
                let hits = all
                    .iter()
                    .filter(|o| {
                        o.title.to_lowercase().contains(&needle)
                            || o.description.to_lowercase().contains(&needle)
                    })
                    .count();
                if hits != 1 {
                    continue;
                }

                let found = filter_projects(all, &ProjectFilter::search(p.title));
                assert_eq!(found.len(), 1, "{}", p.title);
                assert_eq!(found[0].id, p.id);
                checked += 1;
            }
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let all = catalog::projects(ProjectCatalog::Daa);
        let lower = filter_projects(all, &ProjectFilter::search("graph"));
        let upper = filter_projects(all, &ProjectFilter::search("GRAPH"));

        assert!(!lower.is_empty());
        assert_eq!(
            lower.iter().map(|p| p.id).collect::<Vec<_>>(),
            upper.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_blank_search_and_all_tags_match_everything() {
        for c in ProjectCatalog::ALL {
            let all = catalog::projects(c);
            let filter = ProjectFilter::search("   ")
                .with_difficulty("all")
                .with_category("all");
            assert_eq!(filter_projects(all, &filter).len(), all.len());
            assert_eq!(filter_projects(all, &ProjectFilter::default()).len(), all.len());
        }
    }

    #[test]
    fn test_unknown_tag_matches_nothing() {
        let all = catalog::projects(ProjectCatalog::Dsa);
        let filter = ProjectFilter::default().with_category("quantum");
        assert!(filter_projects(all, &filter).is_empty());

        let filter = ProjectFilter::default().with_difficulty("expert");
        assert!(filter_projects(catalog::projects(ProjectCatalog::Cpp), &filter).is_empty());
    }

    #[test]
    fn test_tag_match_is_exact() {
        let all = catalog::projects(ProjectCatalog::Dsa);
        let trees = filter_projects(all, &ProjectFilter::default().with_category("tree"));

        assert!(trees.len() >= 2);
        assert!(trees.iter().all(|p| p.category == Some("tree")));
        assert!(filter_projects(all, &ProjectFilter::default().with_category("Tree")).is_empty());
    }

    #[test]
    fn test_filters_combine() {
        let all = catalog::projects(ProjectCatalog::Daa);
        let filter = ProjectFilter::search("algorithms").with_difficulty("advanced");
        let found = filter_projects(all, &filter);

        assert!(!found.is_empty());
        for p in found {
            assert_eq!(p.difficulty, Difficulty::Advanced);
            assert!(
                p.title.to_lowercase().contains("algorithms")
                    || p.description.to_lowercase().contains("algorithms")
            );
        }
    }

    #[test]
    fn test_filter_keeps_catalog_order() {
        let all = catalog::projects(ProjectCatalog::Cpp);
        let ids: Vec<u32> = filter_projects(all, &ProjectFilter::default())
            .iter()
            .map(|p| p.id)
            .collect();
        let expected: Vec<u32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let cats = catalog::project_categories(ProjectCatalog::Daa);
        assert_eq!(cats.first(), Some(&"Sorting"));
        assert_eq!(cats.len(), catalog::projects(ProjectCatalog::Daa).len());
        assert!(catalog::project_categories(ProjectCatalog::Cpp).is_empty());
    }

    #[test]
    fn test_lookup_errors() {
        assert_eq!(
            "rust".parse::<Track>().unwrap_err(),
            CatalogError::UnknownTrack("rust".to_string())
        );
        assert_eq!(
            "das".parse::<ProjectCatalog>().unwrap_err(),
            CatalogError::UnknownCatalog("das".to_string())
        );
        assert_eq!(
            catalog::project(ProjectCatalog::Java, 99).unwrap_err(),
            CatalogError::UnknownProject {
                catalog: "java".to_string(),
                id: 99,
            }
        );
        assert!(catalog::js_lesson("closures").is_err());
    }

    #[test]
    fn test_catalog_slugs_round_trip() {
        for c in ProjectCatalog::ALL {
            assert_eq!(c.as_str().parse::<ProjectCatalog>(), Ok(c));
            assert_eq!(c.path(), format!("/projects/{}", c.as_str()));
        }
        assert_eq!("c++".parse::<Track>(), Ok(Track::Cpp));
    }

    #[test]
    fn test_local_sources_ship_with_static_files() {
        let static_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
        let mut checked = 0;
        for c in ProjectCatalog::ALL {
            for p in catalog::projects(c) {
                let Some(url) = p.source_url else { continue };
                if !url.starts_with('/') {
                    continue;
                }
                let file = static_dir.join(url.trim_start_matches('/'));
                assert!(file.is_file(), "{} / {}: {} missing", c, p.title, file.display());
                checked += 1;
            }
        }
        assert_eq!(
            checked,
            catalog::projects(ProjectCatalog::Cpp)
                .iter()
                .filter(|p| p.source_url.is_some())
                .count()
        );
    }

    #[test]
    fn test_oop_projects_filter_by_language() {
        let all = catalog::projects(ProjectCatalog::Oop);
        assert_eq!(all.len(), 5);
        assert_eq!(
            catalog::project_categories(ProjectCatalog::Oop),
            vec!["Java", "C++", "Python"]
        );

        let cpp = filter_projects(all, &ProjectFilter::default().with_category("C++"));
        assert_eq!(cpp.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 4]);

        let controls = ProjectCatalog::Oop.filter_controls();
        assert!(controls.category && !controls.difficulty);
        assert_eq!(controls.category_label, "All Languages");
        assert_eq!(ProjectCatalog::Oop.download_policy(), DownloadPolicy::Open);
    }

    #[test]
    fn test_project_details() {
        let library = catalog::project_detail(ProjectCatalog::Cpp, 1).unwrap();
        assert_eq!(library.implementation[0].title, "Class Structure");
        assert!(!library.requirements.is_empty());
        assert!(!library.setup.is_empty());

        for p in catalog::projects(ProjectCatalog::Cpp) {
            if p.source_url.is_some() {
                assert!(
                    catalog::project_detail(ProjectCatalog::Cpp, p.id).is_some(),
                    "{} has no write-up",
                    p.title
                );
            }
        }

        let smart_home = catalog::project(ProjectCatalog::Oop, 5).unwrap();
        let detail = catalog::project_detail(ProjectCatalog::Oop, smart_home.id).unwrap();
        assert!(detail.overview.contains("Smart Home"));

        assert!(catalog::project_detail(ProjectCatalog::Oop, 3).is_none());
        assert!(catalog::project_detail(ProjectCatalog::Daa, 1).is_none());
    }

    #[test]
    fn test_admin_sections_resolve() {
        let (item, sub) = catalog::admin_section("/admin/resources/events").unwrap();
        assert_eq!(item.title, "Resources");
        assert_eq!(sub.unwrap().title, "Events");

        let (item, sub) = catalog::admin_section("/admin/analytics").unwrap();
        assert_eq!(item.title, "Analytics");
        assert!(sub.is_none());

        assert!(catalog::admin_section("/admin/nowhere").is_none());
    }

    #[test]
    fn test_python_quiz_answers() {
        for lesson in catalog::python_lessons() {
            for q in lesson.questions {
                let correct = (0..q.options.len()).filter(|i| q.is_correct(*i)).count();
                assert_eq!(correct, 1, "{}", q.question);
            }
        }
    }
}
