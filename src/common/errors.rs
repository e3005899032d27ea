use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} must be set")]
    Missing(&'static str),

    #[error("Environment variable {name} has an invalid value: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity service request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Identity service answered {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Identity service returned an unreadable body: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum GateError {
    #[error("No authenticated session for {redirect_url}")]
    Unauthenticated { redirect_url: String },

    #[error("Account is not the configured admin")]
    Forbidden,

    #[error(transparent)]
    Identity(#[from] IdentityError),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadRejection {
    #[error("Authorization code is required.")]
    CodeRequired,

    #[error("Maximum download limit reached for this project.")]
    DownloadLimit,

    #[error("Invalid authorization code format or code not found.")]
    InvalidCode,

    #[error("This code has already been used.")]
    CodeAlreadyUsed,

    /// Raised by the web layer before the ledger is consulted
    #[error("Too many attempts. Please wait a minute and try again.")]
    TooManyAttempts,
}

impl DownloadRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CodeRequired => "code_required",
            Self::DownloadLimit => "download_limit",
            Self::InvalidCode => "invalid_code",
            Self::CodeAlreadyUsed => "code_already_used",
            Self::TooManyAttempts => "rate_limit",
        }
    }
}

impl std::str::FromStr for DownloadRejection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code_required" => Ok(Self::CodeRequired),
            "download_limit" => Ok(Self::DownloadLimit),
            "invalid_code" => Ok(Self::InvalidCode),
            "code_already_used" => Ok(Self::CodeAlreadyUsed),
            "rate_limit" => Ok(Self::TooManyAttempts),
            _ => Err(format!("invalid download rejection: {}", s)),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown course track {0:?}")]
    UnknownTrack(String),

    #[error("Unknown project catalog {0:?}")]
    UnknownCatalog(String),

    #[error("Unknown lesson {0:?}")]
    UnknownLesson(String),

    #[error("Project {id} not found in {catalog}")]
    UnknownProject { catalog: String, id: u32 },
}
