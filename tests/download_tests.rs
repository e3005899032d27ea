mod common;

#[cfg(test)]
pub mod download_tests {
    use super::common::*;

    use cs_courses::catalog;
    use cs_courses::common::*;
    use cs_courses::models::ProjectCatalog;
    use cs_courses::services::{DownloadGate, DownloadGrant, MAX_DOWNLOADS};

    const CLIENT: &str = "8d4d8a43-3f0e-4a55-9d1b-0c1f4c1b2a77";
    const OTHER_CLIENT: &str = "1f0e2b9c-7a3d-4c1e-8b5a-2d6f9e0c4b13";

    #[test]
    fn test_authorize_counts_down_to_limit() {
        let gate = DownloadGate::new();
        let sorting = get_daa_project(1);

        for n in 1..=MAX_DOWNLOADS {
            assert_eq!(
                gate.authorize(CLIENT, ProjectCatalog::Daa, sorting, "DAA_SORT_2024"),
                Ok(DownloadGrant::Authorized {
                    downloads: n,
                    remaining: MAX_DOWNLOADS - n,
                })
            );
        }

        assert_eq!(
            gate.authorize(CLIENT, ProjectCatalog::Daa, sorting, "DAA_SORT_2024"),
            Err(DownloadRejection::DownloadLimit)
        );
        assert_eq!(gate.downloads(CLIENT, ProjectCatalog::Daa, 1), MAX_DOWNLOADS);
    }

    #[test]
    fn test_limit_is_per_client_and_per_project() {
        let gate = DownloadGate::new();
        let sorting = get_daa_project(1);
        let searching = get_daa_project(2);

        for _ in 0..MAX_DOWNLOADS {
            gate.authorize(CLIENT, ProjectCatalog::Daa, sorting, "SORT_ADV_101").unwrap();
        }

        assert!(gate.authorize(OTHER_CLIENT, ProjectCatalog::Daa, sorting, "SORT_ADV_101").is_ok());
        assert!(gate.authorize(CLIENT, ProjectCatalog::Daa, searching, "ALGO_SEARCH_24").is_ok());
    }

    #[test]
    fn test_blank_code_required_before_anything_else() {
        let gate = DownloadGate::new();
        let sorting = get_daa_project(1);

        for _ in 0..MAX_DOWNLOADS {
            gate.authorize(CLIENT, ProjectCatalog::Daa, sorting, "DAA_SORT_2024").unwrap();
        }

        assert_eq!(
            gate.authorize(CLIENT, ProjectCatalog::Daa, sorting, "   "),
            Err(DownloadRejection::CodeRequired)
        );
    }

    #[test]
    fn test_limit_checked_before_code_format() {
        let gate = DownloadGate::new();
        let sorting = get_daa_project(1);

        for _ in 0..MAX_DOWNLOADS {
            gate.authorize(CLIENT, ProjectCatalog::Daa, sorting, "DAA_SORT_2024").unwrap();
        }

        assert_eq!(
            gate.authorize(CLIENT, ProjectCatalog::Daa, sorting, "garbage"),
            Err(DownloadRejection::DownloadLimit)
        );
    }

    #[test]
    fn test_malformed_code_is_invalid() {
        let gate = DownloadGate::new();
        let sorting = get_daa_project(1);

        for code in ["daa_sort_2024", "DAA_SORT_2023", " DAA_SORT_2024", "SORT_ADV_1"] {
            assert_eq!(
                gate.authorize(CLIENT, ProjectCatalog::Daa, sorting, code),
                Err(DownloadRejection::InvalidCode),
                "{code}"
            );
        }
        assert_eq!(gate.downloads(CLIENT, ProjectCatalog::Daa, 1), 0);
    }

    #[test]
    fn test_code_of_another_project() {
        let gate = DownloadGate::new();
        let sorting = get_daa_project(1);
        let searching = get_daa_project(2);

        // well formed, never used by this client
        assert_eq!(
            gate.authorize(CLIENT, ProjectCatalog::Daa, searching, "DAA_SORT_2024"),
            Err(DownloadRejection::InvalidCode)
        );

        gate.authorize(CLIENT, ProjectCatalog::Daa, sorting, "DAA_SORT_2024").unwrap();
        assert_eq!(
            gate.authorize(CLIENT, ProjectCatalog::Daa, searching, "DAA_SORT_2024"),
            Err(DownloadRejection::CodeAlreadyUsed)
        );
        assert_eq!(
            gate.authorize(OTHER_CLIENT, ProjectCatalog::Daa, searching, "DAA_SORT_2024"),
            Err(DownloadRejection::InvalidCode)
        );
    }

    #[test]
    fn test_open_catalogs_ignore_codes() {
        let gate = DownloadGate::new();
        for c in [ProjectCatalog::Cpp, ProjectCatalog::Java, ProjectCatalog::Dsa] {
            let project = &catalog::projects(c)[0];
            assert_eq!(gate.authorize(CLIENT, c, project, ""), Ok(DownloadGrant::Open));
        }
    }

    #[test]
    fn test_rejection_reasons_round_trip_through_query() {
        for rejection in [
            DownloadRejection::CodeRequired,
            DownloadRejection::DownloadLimit,
            DownloadRejection::InvalidCode,
            DownloadRejection::CodeAlreadyUsed,
            DownloadRejection::TooManyAttempts,
        ] {
            assert_eq!(rejection.as_str().parse::<DownloadRejection>(), Ok(rejection));
        }
        assert_eq!(
            DownloadRejection::CodeAlreadyUsed.to_string(),
            "This code has already been used."
        );
    }
}
