use crate::common::ConfigError;

pub const DEFAULT_IDENTITY_API_BASE: &str = "https://api.clerk.dev/v1";
pub const DEFAULT_SESSION_COOKIE: &str = "__session";
pub const DEFAULT_SIGN_IN_PATH: &str = "/sign-in";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Identity provider connection settings
#[derive(Clone)]
pub struct IdentityConfig {
    pub api_base: String,
    pub secret_key: String,
    /// Hosted sign-in page of the provider, when it has one
    pub sign_in_url: Option<String>,
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("api_base", &self.api_base)
            .field("secret_key", &"<redacted>")
            .field("sign_in_url", &self.sign_in_url)
            .finish()
    }
}

/// Process-wide settings, resolved once at startup and shared through the server state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub admin_email: String,
    pub identity: IdentityConfig,
    pub session_cookie: String,
    pub sign_in_path: String,
    pub bind_addr: String,
    pub static_dir: String,
    pub pkg_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let admin_email = value("ADMIN_EMAIL").ok_or(ConfigError::Missing("ADMIN_EMAIL"))?;
        if !admin_email.contains('@') {
            return Err(ConfigError::Invalid {
                name: "ADMIN_EMAIL",
                reason: format!("{admin_email:?} is not an email address"),
            });
        }

        let secret_key =
            value("CLERK_SECRET_KEY").ok_or(ConfigError::Missing("CLERK_SECRET_KEY"))?;

        let api_base = value("IDENTITY_API_BASE")
            .unwrap_or_else(|| DEFAULT_IDENTITY_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        if !(api_base.starts_with("https://") || api_base.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                name: "IDENTITY_API_BASE",
                reason: "must be an http(s) URL".to_string(),
            });
        }

        let sign_in_path =
            value("SIGN_IN_PATH").unwrap_or_else(|| DEFAULT_SIGN_IN_PATH.to_string());
        if !sign_in_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                name: "SIGN_IN_PATH",
                reason: "must be an absolute path".to_string(),
            });
        }

        Ok(Self {
            admin_email,
            identity: IdentityConfig {
                api_base,
                secret_key,
                sign_in_url: value("SIGN_IN_URL"),
            },
            session_cookie: value("SESSION_COOKIE")
                .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string()),
            sign_in_path,
            bind_addr: value("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            static_dir: value("STATIC_DIR").unwrap_or_else(|| "./static".to_string()),
            pkg_dir: value("PKG_DIR").unwrap_or_else(|| "./pkg".to_string()),
        })
    }
}
