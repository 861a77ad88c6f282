//! Fantasy API client: configuration, credentials and per-view queries
//!
//! The methods here return the upstream payload as a loose JSON tree. The
//! league facade in `data_fetcher::league` turns those into domain records.

use reqwest::Client;
use reqwest::header::HeaderMap;
use serde_json::{Value, json};
use std::fmt;
use tracing::{debug, instrument};

use super::fetch_utils::{QueryParams, ResponseShape, execute, header_map};
use super::http_client::create_http_client_with_timeout;
use super::status::{ActiveEndpoint, SentRequest, StatusInterpreter};
use super::urls::{EndpointSet, LeagueUrlForm, Sport};
use crate::constants::{FANTASY_BASE_ENDPOINT, FANTASY_FILTER_HEADER, NEWS_BASE_ENDPOINT, views};
use crate::error::AppError;

/// Private league credentials. Both cookie values are required together.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthCredential {
    espn_s2: String,
    swid: String,
}

impl AuthCredential {
    pub fn new(espn_s2: impl Into<String>, swid: impl Into<String>) -> Result<Self, AppError> {
        let espn_s2 = espn_s2.into();
        let swid = swid.into();
        if espn_s2.trim().is_empty() || swid.trim().is_empty() {
            return Err(AppError::config_error(
                "espn_s2 and SWID must both be non-empty",
            ));
        }
        Ok(AuthCredential { espn_s2, swid })
    }

    /// Builds a credential from optional parts: both or neither. Blank
    /// values count as unset.
    pub fn from_parts(
        espn_s2: Option<String>,
        swid: Option<String>,
    ) -> Result<Option<Self>, AppError> {
        let set = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        match (set(espn_s2), set(swid)) {
            (Some(espn_s2), Some(swid)) => Self::new(espn_s2, swid).map(Some),
            (None, None) => Ok(None),
            _ => Err(AppError::config_error(
                "espn_s2 and SWID must be provided together",
            )),
        }
    }

    pub fn espn_s2(&self) -> &str {
        &self.espn_s2
    }

    pub fn swid(&self) -> &str {
        &self.swid
    }
}

impl fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthCredential")
            .field("espn_s2", &"<redacted>")
            .field("swid", &"<redacted>")
            .finish()
    }
}

/// Immutable settings for one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub sport: Sport,
    pub year: u16,
    pub league_id: u64,
    pub credential: Option<AuthCredential>,
    pub fantasy_base_url: String,
    pub news_base_url: String,
}

impl ClientConfig {
    /// Validates the sport code; unknown codes fail with `InvalidSport`.
    pub fn new(sport: &str, year: u16, league_id: u64) -> Result<Self, AppError> {
        Ok(ClientConfig {
            sport: sport.parse()?,
            year,
            league_id,
            credential: None,
            fantasy_base_url: FANTASY_BASE_ENDPOINT.to_string(),
            news_base_url: NEWS_BASE_ENDPOINT.to_string(),
        })
    }

    pub fn with_credential(mut self, credential: AuthCredential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Points the client at other hosts, e.g. a local mock server.
    pub fn with_base_urls(mut self, fantasy: impl Into<String>, news: impl Into<String>) -> Self {
        self.fantasy_base_url = fantasy.into();
        self.news_base_url = news.into();
        self
    }
}

/// Client for one league season.
#[derive(Debug)]
pub struct EspnClient {
    config: ClientConfig,
    endpoints: EndpointSet,
    active: ActiveEndpoint,
    http: Client,
}

impl EspnClient {
    pub fn new(config: ClientConfig, http: Client) -> Self {
        let endpoints = EndpointSet::new(
            &config.fantasy_base_url,
            &config.news_base_url,
            config.sport,
            config.year,
            config.league_id,
        );
        let active = ActiveEndpoint::new(LeagueUrlForm::for_year(config.year));

        EspnClient {
            config,
            endpoints,
            active,
            http,
        }
    }

    pub fn with_timeout(config: ClientConfig, timeout_seconds: u64) -> Result<Self, AppError> {
        let http = create_http_client_with_timeout(timeout_seconds)?;
        Ok(Self::new(config, http))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &EndpointSet {
        &self.endpoints
    }

    pub fn active_form(&self) -> LeagueUrlForm {
        self.active.form()
    }

    pub fn active_league_url(&self) -> String {
        self.endpoints.league(self.active.form())
    }

    /// Whether a fallback has already switched the league URL family.
    pub fn has_failed_over(&self) -> bool {
        self.active.has_failed_over()
    }

    fn interpreter(&self) -> StatusInterpreter<'_> {
        StatusInterpreter {
            http: &self.http,
            endpoints: &self.endpoints,
            active: &self.active,
            credential: self.config.credential.as_ref(),
            league_id: self.config.league_id,
        }
    }

    async fn send(&self, request: SentRequest<'_>) -> Result<Value, AppError> {
        let response = execute(
            &self.http,
            &request.url,
            request.params,
            request.headers,
            self.config.credential.as_ref(),
        )
        .await?;
        self.interpreter().resolve(&request, response).await
    }

    async fn league_request(
        &self,
        suffix: &str,
        params: &QueryParams,
        headers: &HeaderMap,
    ) -> Result<Value, AppError> {
        let url = self
            .endpoints
            .league_with_suffix(self.active.form(), suffix);
        self.send(SentRequest {
            url,
            params,
            headers,
            shape: ResponseShape::Single,
        })
        .await
    }

    async fn fixed_request(
        &self,
        url: String,
        params: &QueryParams,
        headers: &HeaderMap,
        shape: ResponseShape,
    ) -> Result<Value, AppError> {
        self.send(SentRequest {
            url,
            params,
            headers,
            shape,
        })
        .await
    }

    /// Teams, rosters, schedule, settings and standings in one read.
    #[instrument(skip(self))]
    pub async fn get_league(&self) -> Result<Value, AppError> {
        let params = QueryParams::new().with(
            "view",
            [
                views::TEAM,
                views::ROSTER,
                views::MATCHUP,
                views::SETTINGS,
                views::STANDINGS,
            ],
        );
        self.league_request("", &params, &HeaderMap::new()).await
    }

    #[instrument(skip(self))]
    pub async fn get_pro_schedule(&self) -> Result<Value, AppError> {
        let params = QueryParams::new().with("view", views::PRO_TEAM_SCHEDULES);
        let url = self.endpoints.games_base().to_string();
        self.fixed_request(url, &params, &HeaderMap::new(), ResponseShape::Single)
            .await
    }

    /// Active players from the season player pool.
    #[instrument(skip(self))]
    pub async fn get_pro_players(&self) -> Result<Value, AppError> {
        let params = QueryParams::new().with("view", views::PLAYERS_POOL);
        let filter = json!({ "filterActive": { "value": true } });
        let headers = header_map(&[(FANTASY_FILTER_HEADER, filter.to_string())])?;
        let url = format!("{}/players", self.endpoints.games_base());
        self.fixed_request(url, &params, &headers, ResponseShape::Collection)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_league_draft(&self) -> Result<Value, AppError> {
        let params = QueryParams::new().with("view", views::DRAFT_DETAIL);
        self.league_request("", &params, &HeaderMap::new()).await
    }

    /// Player cards for explicit ids, with stats for the top scoring periods.
    #[instrument(skip(self))]
    pub async fn get_player_card(
        &self,
        player_ids: &[u64],
        max_scoring_period: u32,
        additional_filters: &[String],
    ) -> Result<Value, AppError> {
        let params = QueryParams::new().with("view", views::PLAYER_CARD);
        let filter = player_card_filter(
            self.config.year,
            player_ids,
            max_scoring_period,
            additional_filters,
        );
        debug!("Player card filter: {filter}");
        let headers = header_map(&[(FANTASY_FILTER_HEADER, filter.to_string())])?;
        self.league_request("", &params, &headers).await
    }

    #[instrument(skip(self))]
    pub async fn get_player_news(&self, player_id: u64) -> Result<Value, AppError> {
        let params = QueryParams::new().with("playerId", player_id);
        let url = self.endpoints.news().to_string();
        self.fixed_request(url, &params, &HeaderMap::new(), ResponseShape::Collection)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_recent_activity(&self) -> Result<Value, AppError> {
        let params = QueryParams::new().with("view", views::MESSAGE_BOARD);
        self.league_request("/communication", &params, &HeaderMap::new())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_matchups(&self, week: Option<u32>) -> Result<Value, AppError> {
        let mut params =
            QueryParams::new().with("view", [views::MATCHUP, views::MATCHUP_SCORE]);
        if let Some(week) = week {
            params.push("scoringPeriodId", week);
        }
        self.league_request("", &params, &HeaderMap::new()).await
    }

    #[instrument(skip(self))]
    pub async fn get_boxscore(&self, matchup_id: u64, week: u32) -> Result<Value, AppError> {
        let params = QueryParams::new()
            .with("view", [views::BOXSCORE, views::MATCHUP_SCORE])
            .with("matchupId", matchup_id)
            .with("scoringPeriodId", week);
        self.league_request("", &params, &HeaderMap::new()).await
    }
}

/// Filter object for the player card view. The top scoring period filter
/// always asks for the season totals (`00{year}`) and projections
/// (`10{year}`) ahead of any caller supplied values.
pub fn player_card_filter(
    year: u16,
    player_ids: &[u64],
    max_scoring_period: u32,
    additional_filters: &[String],
) -> Value {
    let mut additional_value = vec![format!("00{year}"), format!("10{year}")];
    additional_value.extend(additional_filters.iter().cloned());

    json!({
        "players": {
            "filterIds": { "value": player_ids },
            "filterStatsForTopScoringPeriodIds": {
                "value": max_scoring_period,
                "additionalValue": additional_value,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;

    #[test]
    fn test_client_config_rejects_unknown_sport() {
        let err = ClientConfig::new("curling", 2024, 1).unwrap_err();
        assert!(matches!(err, AppError::InvalidSport { ref sport, .. } if sport == "curling"));
    }

    #[test]
    fn test_credential_requires_both_parts() {
        assert!(AuthCredential::from_parts(None, None).unwrap().is_none());
        assert!(
            AuthCredential::from_parts(Some("s2".into()), Some("{swid}".into()))
                .unwrap()
                .is_some()
        );
        assert!(AuthCredential::from_parts(Some("s2".into()), None).is_err());
        assert!(AuthCredential::from_parts(None, Some("{swid}".into())).is_err());
        assert!(AuthCredential::new("", "{swid}").is_err());
    }

    #[test]
    fn test_blank_credential_parts_are_unset() {
        assert!(AuthCredential::from_parts(Some("".into()), None).unwrap().is_none());
        assert!(
            AuthCredential::from_parts(Some("  ".into()), Some("".into()))
                .unwrap()
                .is_none()
        );
        assert!(AuthCredential::from_parts(Some("s2".into()), Some(" ".into())).is_err());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = AuthCredential::new("secret-s2", "{secret-swid}").unwrap();
        let rendered = format!("{credential:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_initial_active_url_by_year() {
        let current = EspnClient::new(
            ClientConfig::new("nfl", 2018, 99).unwrap(),
            create_test_http_client(),
        );
        assert_eq!(current.active_form(), LeagueUrlForm::Current);
        assert!(current.active_league_url().ends_with("/ffl/seasons/2018/segments/0/leagues/99"));

        let history = EspnClient::new(
            ClientConfig::new("nfl", 2017, 99).unwrap(),
            create_test_http_client(),
        );
        assert_eq!(history.active_form(), LeagueUrlForm::History);
        assert!(history.active_league_url().ends_with("/ffl/leagueHistory/99?seasonId=2017"));
        assert!(!history.has_failed_over());
    }

    #[test]
    fn test_player_card_filter_shape() {
        let filter = player_card_filter(2024, &[101, 202], 5, &["002024".to_string()]);
        assert_eq!(
            filter,
            json!({
                "players": {
                    "filterIds": { "value": [101, 202] },
                    "filterStatsForTopScoringPeriodIds": {
                        "value": 5,
                        "additionalValue": ["002024", "102024", "002024"],
                    }
                }
            })
        );
    }
}
