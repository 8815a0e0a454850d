use std::fmt;

/// Error type for GitLab lookups
#[derive(Debug)]
pub enum GitlabError {
    /// HTTP request failed before a response was received
    Http(reqwest::Error),
    /// API returned a non-success status
    Api { status: u16, message: String },
    /// Caller supplied insufficient or contradictory input
    InvalidInput(String),
    /// Lookup completed without a matching entity
    NotFound(String),
    /// JSON decoding error
    Json(String),
    /// Configuration error
    Config(String),
}

impl GitlabError {
    /// True for failures of the transport itself (request or status),
    /// as opposed to input or lookup outcomes.
    pub fn is_transport(&self) -> bool {
        matches!(self, GitlabError::Http(_) | GitlabError::Api { .. })
    }

    /// True when a lookup finished without a match
    pub fn is_not_found(&self) -> bool {
        matches!(self, GitlabError::NotFound(_))
    }
}

impl fmt::Display for GitlabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitlabError::Http(e) => write!(f, "HTTP request failed: {}", e),
            GitlabError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            GitlabError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GitlabError::NotFound(msg) => write!(f, "{}", msg),
            GitlabError::Json(msg) => write!(f, "JSON error: {}", msg),
            GitlabError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GitlabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GitlabError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GitlabError {
    fn from(err: reqwest::Error) -> Self {
        GitlabError::Http(err)
    }
}

impl From<serde_json::Error> for GitlabError {
    fn from(err: serde_json::Error) -> Self {
        GitlabError::Json(err.to_string())
    }
}

/// Result type alias for GitLab operations
pub type Result<T> = std::result::Result<T, GitlabError>;
