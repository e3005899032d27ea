use std::sync::Arc;

use serde::Serialize;

use crate::common::GateError;
use crate::config::AppConfig;
use crate::services::IdentityProvider;

/// Identity of a caller that passed the admin check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSession {
    pub user_id: String,
    pub session_id: String,
}

/// Restricts the `/admin` subtree to the single configured account.
///
/// Every request is checked on its own; the decision is never cached.
#[derive(Clone)]
pub struct AdminGate {
    provider: Arc<dyn IdentityProvider>,
    admin_email: String,
    sign_in_path: String,
}

impl AdminGate {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        admin_email: impl Into<String>,
        sign_in_path: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            admin_email: admin_email.into(),
            sign_in_path: sign_in_path.into(),
        }
    }

    pub fn from_config(provider: Arc<dyn IdentityProvider>, config: &AppConfig) -> Self {
        Self::new(provider, &config.admin_email, &config.sign_in_path)
    }

    pub async fn require_admin(
        &self,
        session_ref: Option<&str>,
        requested_path: &str,
    ) -> Result<AdminSession, GateError> {
        let unauthenticated = || GateError::Unauthenticated {
            redirect_url: requested_path.to_string(),
        };

        let session_ref = match session_ref.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => s,
            None => return Err(unauthenticated()),
        };

        let session = match self.provider.resolve_session(session_ref).await? {
            Some(session) => session,
            None => return Err(unauthenticated()),
        };

        let emails = self.provider.fetch_account_emails(&session.user_id).await?;
        if !emails.contains(&self.admin_email) {
            log::warn!(
                "user {} denied access to {}: not the admin account",
                session.user_id,
                requested_path
            );
            return Err(GateError::Forbidden);
        }

        Ok(AdminSession {
            user_id: session.user_id,
            session_id: session.session_id,
        })
    }

    /// Where a rejected caller is sent. Identity failures have no redirect.
    pub fn redirect_location(&self, err: &GateError) -> Option<String> {
        match err {
            GateError::Unauthenticated { redirect_url } => Some(format!(
                "{}?redirect_url={}",
                self.sign_in_path, redirect_url
            )),
            GateError::Forbidden => Some("/".to_string()),
            GateError::Identity(_) => None,
        }
    }
}

#[cfg(test)]
pub mod admin_gate_tests {
    use std::collections::HashSet;

    use super::*;
    use crate::common::IdentityError;
    use crate::services::{MockIdentityProvider, SessionInfo};

    fn session() -> SessionInfo {
        SessionInfo {
            user_id: "user_1".to_string(),
            session_id: "sess_1".to_string(),
        }
    }

    fn provider_with_emails(emails: &'static [&'static str]) -> MockIdentityProvider {
        let mut mock = MockIdentityProvider::new();
        mock.expect_resolve_session()
            .withf(|s| s == "sess_1")
            .returning(|_| Box::pin(async { Ok(Some(session())) }));
        mock.expect_fetch_account_emails()
            .withf(|u| u == "user_1")
            .returning(move |_| {
                let set: HashSet<String> = emails.iter().map(|e| e.to_string()).collect();
                Box::pin(async move { Ok(set) })
            });
        mock
    }

    fn gate(mock: MockIdentityProvider, admin_email: &str) -> AdminGate {
        AdminGate::new(Arc::new(mock), admin_email, "/sign-in")
    }

    #[tokio::test]
    async fn test_missing_session_redirects_to_sign_in() {
        let mut mock = MockIdentityProvider::new();
        mock.expect_resolve_session().never();
        mock.expect_fetch_account_emails().never();
        let gate = gate(mock, "a@x.com");

        for session_ref in [None, Some(""), Some("   ")] {
            let err = gate
                .require_admin(session_ref, "/admin/dashboard")
                .await
                .unwrap_err();
            assert_eq!(
                gate.redirect_location(&err).as_deref(),
                Some("/sign-in?redirect_url=/admin/dashboard")
            );
        }
    }

    #[tokio::test]
    async fn test_unresolvable_session_redirects_with_requested_path() {
        let mut mock = MockIdentityProvider::new();
        mock.expect_resolve_session()
            .returning(|_| Box::pin(async { Ok(None) }));
        mock.expect_fetch_account_emails().never();
        let gate = gate(mock, "a@x.com");

        let err = gate
            .require_admin(Some("sess_gone"), "/admin/projects")
            .await
            .unwrap_err();
        match &err {
            GateError::Unauthenticated { redirect_url } => assert_eq!(redirect_url, "/admin/projects"),
            other => panic!("expected Unauthenticated, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_admin_redirects_home() {
        let gate = gate(provider_with_emails(&["a@x.com"]), "b@x.com");

        let err = gate
            .require_admin(Some("sess_1"), "/admin/dashboard")
            .await
            .unwrap_err();
        assert!(matches!(err, GateError::Forbidden));
        assert_eq!(gate.redirect_location(&err).as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn test_admin_passes_with_identifiers() {
        let gate = gate(provider_with_emails(&["a@x.com"]), "a@x.com");

        let admin = gate
            .require_admin(Some("sess_1"), "/admin/dashboard")
            .await
            .unwrap();
        assert_eq!(
            admin,
            AdminSession {
                user_id: "user_1".to_string(),
                session_id: "sess_1".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_admin_among_several_addresses() {
        let gate = gate(provider_with_emails(&["work@x.com", "a@x.com"]), "a@x.com");
        assert!(gate.require_admin(Some("sess_1"), "/admin").await.is_ok());
    }

    #[tokio::test]
    async fn test_email_match_is_exact() {
        let gate = gate(provider_with_emails(&["A@X.com"]), "a@x.com");
        let err = gate.require_admin(Some("sess_1"), "/admin").await.unwrap_err();
        assert!(matches!(err, GateError::Forbidden));
    }

    #[tokio::test]
    async fn test_identity_failure_propagates_without_redirect() {
        let mut mock = MockIdentityProvider::new();
        mock.expect_resolve_session().returning(|_| {
            Box::pin(async {
                Err(IdentityError::Status {
                    url: "https://api.clerk.dev/v1/sessions/sess_1".to_string(),
                    status: 502,
                })
            })
        });
        let gate = gate(mock, "a@x.com");

        let err = gate.require_admin(Some("sess_1"), "/admin").await.unwrap_err();
        assert!(matches!(err, GateError::Identity(_)));
        assert_eq!(gate.redirect_location(&err), None);
    }

    #[tokio::test]
    async fn test_each_request_asks_the_provider_again() {
        let mut mock = MockIdentityProvider::new();
        mock.expect_resolve_session()
            .times(2)
            .returning(|_| Box::pin(async { Ok(Some(session())) }));
        mock.expect_fetch_account_emails()
            .times(2)
            .returning(|_| Box::pin(async { Ok(HashSet::from(["a@x.com".to_string()])) }));
        let gate = gate(mock, "a@x.com");

        assert!(gate.require_admin(Some("sess_1"), "/admin").await.is_ok());
        assert!(gate.require_admin(Some("sess_1"), "/admin/dashboard").await.is_ok());
    }
}
