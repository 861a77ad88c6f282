//! League facade: one type for every sport, returning normalized records.

use futures::future::try_join_all;
use tracing::{info, instrument};

use super::api::{ClientConfig, EspnClient, LeagueUrlForm, Sport};
use super::models::{
    Activity, BoxScore, Draft, LeagueSnapshot, Matchup, NewsItem, Player, ProTeam,
};
use super::processors;
use crate::error::AppError;

/// Queries for one league season.
///
/// Sports differ only in the path segment the client resolves, so the same
/// facade serves football, basketball, hockey, baseball and WNBA leagues.
///
/// # Examples
///
/// ```no_run
/// use espn_fantasy::data_fetcher::api::ClientConfig;
/// use espn_fantasy::data_fetcher::league::FantasyLeague;
///
/// # async fn run() -> Result<(), espn_fantasy::error::AppError> {
/// let config = ClientConfig::new("nfl", 2024, 336358)?;
/// let league = FantasyLeague::new(config, 30)?;
/// let snapshot = league.fetch_league().await?;
/// println!("{} teams in week {}", snapshot.teams.len(), snapshot.current_week);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FantasyLeague {
    client: EspnClient,
}

impl FantasyLeague {
    pub fn new(config: ClientConfig, timeout_seconds: u64) -> Result<Self, AppError> {
        Ok(Self::from_client(EspnClient::with_timeout(
            config,
            timeout_seconds,
        )?))
    }

    pub fn from_client(client: EspnClient) -> Self {
        FantasyLeague { client }
    }

    pub fn client(&self) -> &EspnClient {
        &self.client
    }

    pub fn sport(&self) -> Sport {
        self.client.config().sport
    }

    pub fn active_form(&self) -> LeagueUrlForm {
        self.client.active_form()
    }

    #[instrument(skip(self))]
    pub async fn fetch_league(&self) -> Result<LeagueSnapshot, AppError> {
        let payload = self.client.get_league().await?;
        let config = self.client.config();
        let snapshot =
            processors::normalize_league(&payload, config.league_id, config.year, config.sport);
        info!(
            "Fetched league {} ({} teams, week {})",
            snapshot.id,
            snapshot.teams.len(),
            snapshot.current_week
        );
        Ok(snapshot)
    }

    /// Matchups for `week`, or every scheduled matchup when `None`.
    #[instrument(skip(self))]
    pub async fn get_matchups(&self, week: Option<u32>) -> Result<Vec<Matchup>, AppError> {
        let payload = self.client.get_matchups(week).await?;
        Ok(processors::normalize_matchups(&payload))
    }

    #[instrument(skip(self))]
    pub async fn get_box_score(&self, matchup_id: u64, week: u32) -> Result<BoxScore, AppError> {
        let payload = self.client.get_boxscore(matchup_id, week).await?;
        Ok(processors::normalize_box_score(
            &payload,
            matchup_id,
            week,
            self.sport(),
        ))
    }

    #[instrument(skip(self))]
    pub async fn get_free_agents(&self) -> Result<Vec<Player>, AppError> {
        let payload = self.client.get_pro_players().await?;
        let players = processors::normalize_player_pool(&payload);
        info!("Fetched {} free agents", players.len());
        Ok(players)
    }

    #[instrument(skip(self, additional_filters))]
    pub async fn get_player_card(
        &self,
        player_ids: &[u64],
        max_scoring_period: u32,
        additional_filters: &[String],
    ) -> Result<Vec<Player>, AppError> {
        let payload = self
            .client
            .get_player_card(player_ids, max_scoring_period, additional_filters)
            .await?;
        Ok(processors::normalize_player_pool(&payload))
    }

    #[instrument(skip(self))]
    pub async fn get_recent_activity(&self) -> Result<Vec<Activity>, AppError> {
        let payload = self.client.get_recent_activity().await?;
        Ok(processors::normalize_activity(&payload))
    }

    #[instrument(skip(self))]
    pub async fn get_draft(&self) -> Result<Draft, AppError> {
        let payload = self.client.get_league_draft().await?;
        Ok(processors::normalize_draft(&payload))
    }

    #[instrument(skip(self))]
    pub async fn get_player_news(&self, player_id: u64) -> Result<Vec<NewsItem>, AppError> {
        let payload = self.client.get_player_news(player_id).await?;
        Ok(processors::normalize_news(&payload))
    }

    /// News for several players, fetched concurrently. The first failure
    /// fails the whole batch.
    #[instrument(skip(self))]
    pub async fn get_players_news(
        &self,
        player_ids: &[u64],
    ) -> Result<Vec<(u64, Vec<NewsItem>)>, AppError> {
        let requests = player_ids.iter().map(|&player_id| async move {
            let news = self.get_player_news(player_id).await?;
            Ok::<_, AppError>((player_id, news))
        });
        try_join_all(requests).await
    }

    #[instrument(skip(self))]
    pub async fn get_pro_teams(&self) -> Result<Vec<ProTeam>, AppError> {
        let payload = self.client.get_pro_schedule().await?;
        Ok(processors::normalize_pro_teams(&payload))
    }
}
