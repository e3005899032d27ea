use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, OnceLock};

use regex::Regex;
use uuid::Uuid;

use crate::common::DownloadRejection;
use crate::models::{Project, ProjectCatalog};

/// Downloads one client may make of a single code-gated project
pub const MAX_DOWNLOADS: u32 = 3;

static CODE_PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();

fn code_patterns() -> &'static [Regex; 3] {
    CODE_PATTERNS.get_or_init(|| {
        [
            Regex::new(r"^DAA_[A-Z]+_2024$").expect("valid code pattern"),
            Regex::new(r"^[A-Z]+_ADV_\d{3}$").expect("valid code pattern"),
            Regex::new(r"^ALGO_[A-Z]+_24$").expect("valid code pattern"),
        ]
    })
}

/// True when `code` has one of the three authorization code shapes
pub fn is_well_formed_code(code: &str) -> bool {
    code_patterns().iter().any(|p| p.is_match(code))
}

pub fn new_client_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn is_client_id(value: &str) -> bool {
    Uuid::parse_str(value).is_ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadGrant {
    /// The project is not code-gated
    Open,
    Authorized { downloads: u32, remaining: u32 },
}

#[derive(Debug, Default)]
struct ClientLedger {
    downloads: HashMap<(ProjectCatalog, u32), u32>,
    used_codes: HashSet<String>,
}

/// Per-client download counts and used codes. In memory only; a restart forgets everything.
#[derive(Debug, Default)]
pub struct DownloadGate {
    ledgers: Mutex<HashMap<String, ClientLedger>>,
}

impl DownloadGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authorize(
        &self,
        client_id: &str,
        catalog: ProjectCatalog,
        project: &Project,
        code: &str,
    ) -> Result<DownloadGrant, DownloadRejection> {
        if !project.requires_code() {
            return Ok(DownloadGrant::Open);
        }

        if code.trim().is_empty() {
            return Err(DownloadRejection::CodeRequired);
        }

        let mut ledgers = self
            .ledgers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let key = (catalog, project.id);
        let count = ledgers
            .get(client_id)
            .and_then(|l| l.downloads.get(&key).copied())
            .unwrap_or(0);

        if count >= MAX_DOWNLOADS {
            return Err(DownloadRejection::DownloadLimit);
        }

        if !is_well_formed_code(code) {
            return Err(DownloadRejection::InvalidCode);
        }

        if project.accepts_code(code) {
            let ledger = ledgers.entry(client_id.to_string()).or_default();
            let downloads = count + 1;
            ledger.downloads.insert(key, downloads);
            ledger.used_codes.insert(code.to_string());

            log::info!(
                "download of {}/{} authorized ({} of {})",
                catalog,
                project.id,
                downloads,
                MAX_DOWNLOADS
            );
            return Ok(DownloadGrant::Authorized {
                downloads,
                remaining: MAX_DOWNLOADS - downloads,
            });
        }

        let used_before = ledgers
            .get(client_id)
            .is_some_and(|l| l.used_codes.contains(code));
        if used_before {
            Err(DownloadRejection::CodeAlreadyUsed)
        } else {
            Err(DownloadRejection::InvalidCode)
        }
    }

    pub fn downloads(&self, client_id: &str, catalog: ProjectCatalog, project_id: u32) -> u32 {
        let ledgers = self
            .ledgers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        ledgers
            .get(client_id)
            .and_then(|l| l.downloads.get(&(catalog, project_id)).copied())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_shapes() {
        assert!(is_well_formed_code("DAA_SORT_2024"));
        assert!(is_well_formed_code("SORT_ADV_101"));
        assert!(is_well_formed_code("ALGO_SORT_24"));

        assert!(!is_well_formed_code("daa_sort_2024"));
        assert!(!is_well_formed_code("DAA_SORT_2025"));
        assert!(!is_well_formed_code("SORT_ADV_1011"));
        assert!(!is_well_formed_code(" DAA_SORT_2024"));
        assert!(!is_well_formed_code("ALGO_SORT1_24"));
    }

    #[test]
    fn test_client_ids() {
        let id = new_client_id();
        assert!(is_client_id(&id));
        assert!(!is_client_id("not-a-uuid"));
    }
}
