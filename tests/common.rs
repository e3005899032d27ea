use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use cs_courses::catalog;
use cs_courses::common::IdentityError;
use cs_courses::models::{Project, ProjectCatalog};
use cs_courses::services::{AdminGate, IdentityProvider, SessionInfo};

pub const ADMIN_EMAIL: &str = "admin@cscourses.dev";

/// Identity provider backed by fixed tables. Counts upstream calls so tests
/// can check that nothing is cached.
#[derive(Default)]
pub struct StubIdentityProvider {
    sessions: HashMap<String, String>,
    emails: HashMap<String, HashSet<String>>,
    failing: bool,
    pub calls: AtomicUsize,
}

impl StubIdentityProvider {
    pub fn with_user(mut self, session: &str, user: &str, emails: &[&str]) -> Self {
        self.sessions.insert(session.to_string(), user.to_string());
        self.emails
            .insert(user.to_string(), emails.iter().map(|e| e.to_string()).collect());
        self
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    async fn resolve_session(&self, session_ref: &str) -> Result<Option<SessionInfo>, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(IdentityError::Transport {
                url: format!("http://127.0.0.1:1/v1/sessions/{session_ref}"),
                message: "connection refused".to_string(),
            });
        }
        Ok(self.sessions.get(session_ref).map(|user_id| SessionInfo {
            user_id: user_id.clone(),
            session_id: session_ref.to_string(),
        }))
    }

    async fn fetch_account_emails(&self, user_id: &str) -> Result<HashSet<String>, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.emails.get(user_id).cloned().unwrap_or_default())
    }
}

/// An admin on `sess_admin`, a regular user on `sess_user`
pub fn get_seed_provider() -> Arc<StubIdentityProvider> {
    Arc::new(
        StubIdentityProvider::default()
            .with_user("sess_admin", "user_admin", &["work@cscourses.dev", ADMIN_EMAIL])
            .with_user("sess_user", "user_regular", &["someone@example.com"]),
    )
}

pub fn get_seed_gate(provider: Arc<StubIdentityProvider>) -> AdminGate {
    AdminGate::new(provider, ADMIN_EMAIL, "/sign-in")
}

pub fn get_daa_project(id: u32) -> &'static Project {
    catalog::project(ProjectCatalog::Daa, id).expect("seeded DAA project")
}
