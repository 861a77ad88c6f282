use crate::data_fetcher::api::Sport;
use crate::error::AppError;
use std::path::Path;

/// Validates a loaded configuration.
///
/// # Validation Rules
/// - League id must be non-zero and the season year set
/// - Sport must be one of the supported codes
/// - Credentials are all-or-nothing: `espn_s2` and `swid` together
/// - Base URLs must carry an `http://` or `https://` scheme
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &super::Config) -> Result<(), AppError> {
    if config.league_id == 0 {
        return Err(AppError::config_error(
            "League id is not set (config file, ESPN_FANTASY_LEAGUE_ID or --league-id)",
        ));
    }

    if config.year == 0 {
        return Err(AppError::config_error("Season year cannot be zero"));
    }

    // Surfaces InvalidSport with the list of valid codes
    config.sport.parse::<Sport>()?;

    match (non_empty(&config.espn_s2), non_empty(&config.swid)) {
        (true, false) | (false, true) => {
            return Err(AppError::config_error(
                "espn_s2 and swid must be provided together",
            ));
        }
        _ => {}
    }

    validate_base_url("fantasy_base_url", &config.fantasy_base_url)?;
    validate_base_url("news_base_url", &config.news_base_url)?;

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn validate_base_url(field: &str, url: &str) -> Result<(), AppError> {
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match host {
        Some(rest) if !rest.is_empty() => Ok(()),
        _ => Err(AppError::config_error(format!(
            "{field} must be an http(s) URL, got '{url}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::super::Config;
    use super::*;
    use tempfile::tempdir;

    fn valid() -> Config {
        Config {
            league_id: 336358,
            year: 2024,
            ..Config::default()
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid()).is_ok());
    }

    #[test]
    fn test_missing_league_id() {
        let config = Config {
            league_id: 0,
            ..valid()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("League id"));
    }

    #[test]
    fn test_unknown_sport() {
        let config = Config {
            sport: "cricket".to_string(),
            ..valid()
        };
        assert!(matches!(
            validate_config(&config),
            Err(AppError::InvalidSport { ref sport, .. }) if sport == "cricket"
        ));
    }

    #[test]
    fn test_credentials_all_or_nothing() {
        let only_s2 = Config {
            espn_s2: Some("AEB".to_string()),
            ..valid()
        };
        assert!(validate_config(&only_s2).is_err());

        let empty_swid = Config {
            espn_s2: Some("AEB".to_string()),
            swid: Some(String::new()),
            ..valid()
        };
        assert!(validate_config(&empty_swid).is_err());

        let both = Config {
            espn_s2: Some("AEB".to_string()),
            swid: Some("{GUID}".to_string()),
            ..valid()
        };
        assert!(validate_config(&both).is_ok());
    }

    #[test]
    fn test_base_url_scheme() {
        let config = Config {
            fantasy_base_url: "lm-api-reads.fantasy.espn.com".to_string(),
            ..valid()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            news_base_url: "http://".to_string(),
            ..valid()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            fantasy_base_url: "http://127.0.0.1:8080/apis/v3/games/".to_string(),
            ..valid()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_log_path_rules() {
        let config = Config {
            log_file_path: Some(String::new()),
            ..valid()
        };
        assert!(validate_config(&config).is_err());

        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("app.log");
        let config = Config {
            log_file_path: Some(nested.to_string_lossy().to_string()),
            ..valid()
        };
        assert!(validate_config(&config).is_ok());
        assert!(dir.path().join("a").join("b").exists());
    }
}
