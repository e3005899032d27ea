//! Lookups against the external identity provider.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::Deserialize;

use crate::common::IdentityError;

/// Caller identity resolved from a session reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub user_id: String,
    pub session_id: String,
}

/// Abstraction over the identity provider so the admin gate can run against a test double
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a session reference; `None` when there is no live session behind it
    async fn resolve_session(&self, session_ref: &str) -> Result<Option<SessionInfo>, IdentityError>;

    /// Verified email addresses of an account
    async fn fetch_account_emails(&self, user_id: &str) -> Result<HashSet<String>, IdentityError>;
}

/// Session and user ids are opaque provider tokens. Anything else never leaves the process.
pub fn is_plain_token(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 256
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

#[derive(Deserialize)]
struct SessionRecord {
    id: String,
    user_id: String,
    status: String,
}

#[derive(Deserialize)]
struct UserRecord {
    #[serde(default)]
    email_addresses: Vec<EmailRecord>,
}

#[derive(Deserialize)]
struct EmailRecord {
    email_address: String,
    #[serde(default)]
    verification: Option<Verification>,
}

#[derive(Deserialize)]
struct Verification {
    status: String,
}

/// Parse a session body; only active sessions resolve.
pub fn parse_session(body: &str) -> Result<Option<SessionInfo>, IdentityError> {
    let record: SessionRecord =
        serde_json::from_str(body).map_err(|e| IdentityError::Decode(e.to_string()))?;

    if record.status != "active" {
        log::debug!("session {} is {}", record.id, record.status);
        return Ok(None);
    }

    Ok(Some(SessionInfo {
        user_id: record.user_id,
        session_id: record.id,
    }))
}

/// Parse a user body into the set of its verified addresses
pub fn parse_verified_emails(body: &str) -> Result<HashSet<String>, IdentityError> {
    let record: UserRecord =
        serde_json::from_str(body).map_err(|e| IdentityError::Decode(e.to_string()))?;

    Ok(record
        .email_addresses
        .into_iter()
        .filter(|e| {
            e.verification
                .as_ref()
                .is_some_and(|v| v.status == "verified")
        })
        .map(|e| e.email_address)
        .collect())
}

#[cfg(feature = "ssr")]
pub use clerk::ClerkIdentityProvider;

#[cfg(feature = "ssr")]
mod clerk {
    use super::*;
    use crate::config::IdentityConfig;

    /// Clerk backend API client. No timeout and no retry: a hung upstream hangs the request.
    pub struct ClerkIdentityProvider {
        client: reqwest::Client,
        config: IdentityConfig,
    }

    impl ClerkIdentityProvider {
        pub fn new(config: IdentityConfig) -> Self {
            Self {
                client: reqwest::Client::new(),
                config,
            }
        }

        /// GET a resource; `Ok(None)` on 404
        async fn get(&self, path: &str) -> Result<Option<String>, IdentityError> {
            let url = format!("{}{}", self.config.api_base, path);
            log::debug!("GET {}", url);

            let response = self
                .client
                .get(&url)
                .bearer_auth(&self.config.secret_key)
                .send()
                .await
                .map_err(|e| IdentityError::Transport {
                    url: url.clone(),
                    message: e.to_string(),
                })?;

            let status = response.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }
            if !status.is_success() {
                return Err(IdentityError::Status {
                    url,
                    status: status.as_u16(),
                });
            }

            let body = response.text().await.map_err(|e| IdentityError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

            log::debug!("GET {} -> {} ({} bytes)", url, status.as_u16(), body.len());
            Ok(Some(body))
        }
    }

    #[async_trait]
    impl IdentityProvider for ClerkIdentityProvider {
        async fn resolve_session(
            &self,
            session_ref: &str,
        ) -> Result<Option<SessionInfo>, IdentityError> {
            if !is_plain_token(session_ref) {
                return Ok(None);
            }

            match self.get(&format!("/sessions/{session_ref}")).await? {
                Some(body) => parse_session(&body),
                None => Ok(None),
            }
        }

        async fn fetch_account_emails(
            &self,
            user_id: &str,
        ) -> Result<HashSet<String>, IdentityError> {
            if !is_plain_token(user_id) {
                return Ok(HashSet::new());
            }

            match self.get(&format!("/users/{user_id}")).await? {
                Some(body) => parse_verified_emails(&body),
                None => Ok(HashSet::new()),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        /// Port 1 is reserved and never accepts connections
        fn unreachable() -> ClerkIdentityProvider {
            ClerkIdentityProvider::new(IdentityConfig {
                api_base: "http://127.0.0.1:1/v1".to_string(),
                secret_key: "sk_test".to_string(),
                sign_in_url: None,
            })
        }

        #[tokio::test]
        async fn connection_refused_is_a_transport_error() {
            let err = unreachable().resolve_session("sess_123").await.unwrap_err();
            match err {
                IdentityError::Transport { url, .. } => {
                    assert_eq!(url, "http://127.0.0.1:1/v1/sessions/sess_123")
                }
                other => panic!("expected transport error, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn odd_session_refs_are_never_sent() {
            let provider = unreachable();
            assert_eq!(provider.resolve_session("../users/x").await.unwrap(), None);
            assert_eq!(provider.resolve_session("").await.unwrap(), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_token() {
        assert!(is_plain_token("sess_2abcXYZ-09"));
        assert!(!is_plain_token(""));
        assert!(!is_plain_token("sess/../../users"));
        assert!(!is_plain_token("a.b.c"));
        assert!(!is_plain_token(&"a".repeat(257)));
    }

    #[test]
    fn test_parse_active_session() {
        let body = r#"{"id":"sess_1","user_id":"user_9","status":"active","client_id":"c"}"#;
        assert_eq!(
            parse_session(body).unwrap(),
            Some(SessionInfo {
                user_id: "user_9".to_string(),
                session_id: "sess_1".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_ended_session_is_none() {
        let body = r#"{"id":"sess_1","user_id":"user_9","status":"ended"}"#;
        assert_eq!(parse_session(body).unwrap(), None);
    }

    #[test]
    fn test_parse_session_garbage_is_decode_error() {
        assert!(matches!(parse_session("<html>"), Err(IdentityError::Decode(_))));
    }

    #[test]
    fn test_only_verified_emails_count() {
        let body = r#"{
            "id": "user_9",
            "email_addresses": [
                {"email_address": "a@x.com", "verification": {"status": "verified"}},
                {"email_address": "b@x.com", "verification": {"status": "unverified"}},
                {"email_address": "c@x.com", "verification": null},
                {"email_address": "d@x.com"}
            ]
        }"#;

        let emails = parse_verified_emails(body).unwrap();
        assert_eq!(emails, HashSet::from(["a@x.com".to_string()]));
    }

    #[test]
    fn test_user_without_addresses() {
        assert!(parse_verified_emails(r#"{"id":"user_9"}"#).unwrap().is_empty());
    }
}
