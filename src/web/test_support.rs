use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use actix_web::web::Data;
use async_trait::async_trait;

use cs_courses::common::IdentityError;
use cs_courses::config::AppConfig;
use cs_courses::services::{IdentityProvider, SessionInfo};

use crate::web::AppState;

pub const ADMIN_EMAIL: &str = "admin@cscourses.dev";

/// Identity provider answering from fixed tables. The session `sess_broken`
/// fails like an unreachable provider would.
#[derive(Default)]
pub struct StubIdentity {
    sessions: HashMap<String, String>,
    emails: HashMap<String, Vec<String>>,
}

impl StubIdentity {
    pub fn with_user(mut self, session: &str, user: &str, emails: &[&str]) -> Self {
        self.sessions.insert(session.to_string(), user.to_string());
        self.emails
            .insert(user.to_string(), emails.iter().map(|e| e.to_string()).collect());
        self
    }
}

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn resolve_session(&self, session_ref: &str) -> Result<Option<SessionInfo>, IdentityError> {
        if session_ref == "sess_broken" {
            return Err(IdentityError::Transport {
                url: "http://127.0.0.1:1/v1/sessions/sess_broken".to_string(),
                message: "connection refused".to_string(),
            });
        }
        Ok(self.sessions.get(session_ref).map(|user_id| SessionInfo {
            user_id: user_id.clone(),
            session_id: session_ref.to_string(),
        }))
    }

    async fn fetch_account_emails(&self, user_id: &str) -> Result<HashSet<String>, IdentityError> {
        Ok(self
            .emails
            .get(user_id)
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default())
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "ADMIN_EMAIL" => Some(ADMIN_EMAIL.to_string()),
        "CLERK_SECRET_KEY" => Some("sk_test".to_string()),
        "STATIC_DIR" => Some("./static".to_string()),
        _ => None,
    })
    .expect("test config")
}

/// State with an admin (`sess_admin`) and a regular user (`sess_user`)
pub fn test_state() -> Data<AppState> {
    let provider = StubIdentity::default()
        .with_user("sess_admin", "user_admin", &[ADMIN_EMAIL])
        .with_user("sess_user", "user_regular", &["someone@example.com"]);
    Data::new(AppState::new(test_config(), Arc::new(provider)))
}
