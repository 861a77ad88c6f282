use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECONDS, FANTASY_BASE_ENDPOINT, NEWS_BASE_ENDPOINT, env_vars,
};
use crate::data_fetcher::api::{AuthCredential, ClientConfig};
use crate::error::AppError;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Persisted settings for the league client.
///
/// Every field has a default, so a partial config file still loads.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Numeric league id. Zero means "not configured".
    pub league_id: u64,
    /// Season year, e.g. 2024
    pub year: u16,
    /// One of `nfl`, `nba`, `nhl`, `mlb`, `wnba`
    pub sport: String,
    /// `espn_s2` cookie for private leagues
    #[serde(skip_serializing_if = "Option::is_none")]
    pub espn_s2: Option<String>,
    /// `SWID` cookie for private leagues
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swid: Option<String>,
    pub fantasy_base_url: String,
    pub news_base_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    pub http_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            league_id: 0,
            year: current_season_year(),
            sport: "nfl".to_string(),
            espn_s2: None,
            swid: None,
            fantasy_base_url: FANTASY_BASE_ENDPOINT.to_string(),
            news_base_url: NEWS_BASE_ENDPOINT.to_string(),
            log_file_path: None,
            http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }
}

fn current_season_year() -> u16 {
    u16::try_from(chrono::Utc::now().year()).unwrap_or(0)
}

impl Config {
    /// Loads configuration from the default location, applies environment
    /// overrides and validates the result.
    ///
    /// # Environment Variables
    /// - `ESPN_FANTASY_LEAGUE_ID`, `ESPN_FANTASY_YEAR`, `ESPN_FANTASY_SPORT`
    /// - `ESPN_S2`, `ESPN_SWID` - private league credentials
    /// - `ESPN_FANTASY_LOG_FILE` - Override log file path
    /// - `ESPN_FANTASY_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config = Self::load_unvalidated().await?;
        config.validate()?;
        Ok(config)
    }

    /// Same as [`Config::load`] without the final validation, so callers can
    /// layer command line overrides on top first.
    pub async fn load_unvalidated() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            debug!("Loading config from {config_path}");
            Self::load_from_path(&config_path).await?
        } else {
            debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Applies the `ESPN_*` environment variables over the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Some(league_id) = env_number::<u64>(env_vars::LEAGUE_ID)? {
            self.league_id = league_id;
        }
        if let Some(year) = env_number::<u16>(env_vars::YEAR)? {
            self.year = year;
        }
        if let Ok(sport) = std::env::var(env_vars::SPORT) {
            self.sport = sport;
        }
        if let Ok(espn_s2) = std::env::var(env_vars::ESPN_S2) {
            self.espn_s2 = Some(espn_s2);
        }
        if let Ok(swid) = std::env::var(env_vars::SWID) {
            self.swid = Some(swid);
        }
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
        if let Some(timeout) = env_number::<u64>(env_vars::HTTP_TIMEOUT)? {
            self.http_timeout_seconds = timeout;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Credentials when both cookie values are configured.
    pub fn credential(&self) -> Result<Option<AuthCredential>, AppError> {
        AuthCredential::from_parts(self.espn_s2.clone(), self.swid.clone())
    }

    /// Immutable client settings. Unknown sport codes fail with `InvalidSport`.
    pub fn client_config(&self) -> Result<ClientConfig, AppError> {
        let mut client = ClientConfig::new(&self.sport, self.year, self.league_id)?
            .with_base_urls(&self.fantasy_base_url, &self.news_base_url);
        if let Some(credential) = self.credential()? {
            client = client.with_credential(credential);
        }
        Ok(client)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout. Cookie values
    /// are never printed, only whether they are set.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load_unvalidated().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("League:");
            println!("{} ({} {})", config.league_id, config.sport, config.year);
            println!("────────────────────────────────────");
            println!("Credentials:");
            println!(
                "espn_s2 {}, SWID {}",
                set_or_unset(&config.espn_s2),
                set_or_unset(&config.swid)
            );
            println!("────────────────────────────────────");
            println!("API Endpoints:");
            println!("{}", config.fantasy_base_url);
            println!("{}", config.news_base_url);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/espn_fantasy.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn set_or_unset(value: &Option<String>) -> &'static str {
    if value.as_deref().is_some_and(|v| !v.trim().is_empty()) {
        "set"
    } else {
        "not set"
    }
}

fn env_number<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config_error(format!("{name} must be a number, got '{raw}'"))),
        Err(_) => Ok(None),
    }
}
