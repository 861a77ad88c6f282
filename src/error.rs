use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Fantasy API errors
    #[error("Unknown sport: {sport}, available options are {valid}")]
    InvalidSport { sport: String, valid: String },

    #[error(
        "League {league_id} cannot be accessed (espn_s2 provided: {has_espn_s2}, SWID provided: {has_swid})"
    )]
    AccessDenied {
        league_id: u64,
        has_espn_s2: bool,
        has_swid: bool,
    },

    #[error("League {league_id} does not exist")]
    InvalidLeague { league_id: u64 },

    #[error("ESPN returned an HTTP {status} (URL: {url})")]
    UnknownUpstream { status: u16, url: String },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an unknown sport error listing the accepted codes
    pub fn invalid_sport(sport: impl Into<String>, valid: &[&str]) -> Self {
        Self::InvalidSport {
            sport: sport.into(),
            valid: valid.join(", "),
        }
    }

    /// Create an access denied error. Only credential presence is recorded.
    pub fn access_denied(league_id: u64, has_espn_s2: bool, has_swid: bool) -> Self {
        Self::AccessDenied {
            league_id,
            has_espn_s2,
            has_swid,
        }
    }

    /// Create an invalid league error
    pub fn invalid_league(league_id: u64) -> Self {
        Self::InvalidLeague { league_id }
    }

    /// Create an error for any other non-200 upstream status
    pub fn unknown_upstream(status: u16, url: impl Into<String>) -> Self {
        Self::UnknownUpstream {
            status,
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Check if error means the league could not be read with the given credentials
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AppError::AccessDenied { .. })
    }

    /// Check if error indicates data not found (business logic, not technical error)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::InvalidLeague { .. } | AppError::ApiNoData { .. }
        )
    }

    /// Upstream HTTP status carried by the error, if any
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::AccessDenied { .. } => Some(401),
            AppError::InvalidLeague { .. } => Some(404),
            AppError::UnknownUpstream { status, .. } => Some(*status),
            AppError::ApiFetch(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
