//! Endpoint resolution for the fantasy API
//!
//! Every URL the client talks to is a pure function of sport, season year and
//! league id. League-scoped reads come in two shapes: the current-season form
//! and the league history form, see [`LeagueUrlForm`].

use crate::constants::{CURRENT_ENDPOINT_FIRST_YEAR, weeks};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const HISTORY_MARKER: &str = "/leagueHistory/";
const SEASONS_MARKER: &str = "/seasons/";

/// Supported fantasy sports. Each maps to its own upstream path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Nfl,
    Nba,
    Nhl,
    Mlb,
    Wnba,
}

impl Sport {
    pub const ALL: [Sport; 5] = [Sport::Nfl, Sport::Nba, Sport::Nhl, Sport::Mlb, Sport::Wnba];

    /// The user-facing sport code (`nfl`, `nba`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Nfl => "nfl",
            Sport::Nba => "nba",
            Sport::Nhl => "nhl",
            Sport::Mlb => "mlb",
            Sport::Wnba => "wnba",
        }
    }

    /// The upstream path segment (`ffl`, `fba`, ...)
    pub fn path_segment(&self) -> &'static str {
        match self {
            Sport::Nfl => "ffl",
            Sport::Nba => "fba",
            Sport::Nhl => "fhl",
            Sport::Mlb => "flb",
            Sport::Wnba => "wfba",
        }
    }

    /// Number of scoring weeks in a regular season
    pub fn regular_season_weeks(&self) -> u32 {
        match self {
            Sport::Nfl => weeks::NFL,
            Sport::Nba | Sport::Wnba => weeks::NBA,
            Sport::Nhl => weeks::NHL,
            Sport::Mlb => weeks::MLB,
        }
    }

    fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(Sport::as_str).collect()
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sport::ALL
            .into_iter()
            .find(|sport| sport.as_str() == s)
            .ok_or_else(|| AppError::invalid_sport(s, &Sport::codes()))
    }
}

/// Which URL family a league-scoped request is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeagueUrlForm {
    /// `{base}/{sport}/seasons/{year}/segments/0/leagues/{id}`
    Current,
    /// `{base}/{sport}/leagueHistory/{id}?seasonId={year}`
    History,
}

impl LeagueUrlForm {
    /// The form a client starts with for the given season.
    pub fn for_year(year: u16) -> Self {
        if year >= CURRENT_ENDPOINT_FIRST_YEAR {
            LeagueUrlForm::Current
        } else {
            LeagueUrlForm::History
        }
    }

    pub fn alternate(self) -> Self {
        match self {
            LeagueUrlForm::Current => LeagueUrlForm::History,
            LeagueUrlForm::History => LeagueUrlForm::Current,
        }
    }

    /// Detects the form of an already built league URL from its path markers.
    pub fn detect(url: &str) -> Option<Self> {
        if url.contains(HISTORY_MARKER) {
            Some(LeagueUrlForm::History)
        } else if url.contains(SEASONS_MARKER) && url.contains("/leagues/") {
            Some(LeagueUrlForm::Current)
        } else {
            None
        }
    }
}

/// The derived URLs for one sport, season and league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSet {
    sport_root: String,
    games_base: String,
    news: String,
    year: u16,
    league_id: u64,
}

impl EndpointSet {
    /// Builds the endpoint set. Base URLs are joined with the sport segment
    /// whether or not they end with a slash.
    ///
    /// # Example
    /// ```
    /// use espn_fantasy::data_fetcher::api::{EndpointSet, LeagueUrlForm, Sport};
    ///
    /// let endpoints = EndpointSet::new("https://api.example.com/games/", "https://news.example.com/games/", Sport::Nfl, 2024, 123);
    /// assert_eq!(endpoints.games_base(), "https://api.example.com/games/ffl/seasons/2024");
    /// assert_eq!(
    ///     endpoints.league(LeagueUrlForm::History),
    ///     "https://api.example.com/games/ffl/leagueHistory/123?seasonId=2024"
    /// );
    /// ```
    pub fn new(
        fantasy_base: &str,
        news_base: &str,
        sport: Sport,
        year: u16,
        league_id: u64,
    ) -> Self {
        let segment = sport.path_segment();
        let sport_root = format!("{}/{segment}", fantasy_base.trim_end_matches('/'));
        let news = format!("{}/{segment}/news/players", news_base.trim_end_matches('/'));
        let games_base = format!("{sport_root}/seasons/{year}");

        EndpointSet {
            sport_root,
            games_base,
            news,
            year,
            league_id,
        }
    }

    /// Season-wide URL used for pro schedules and the players pool.
    pub fn games_base(&self) -> &str {
        &self.games_base
    }

    pub fn news(&self) -> &str {
        &self.news
    }

    pub fn league(&self, form: LeagueUrlForm) -> String {
        self.league_with_suffix(form, "")
    }

    /// League URL with an extra path below the league resource, e.g.
    /// `/communication`. The history form keeps `seasonId` as the query.
    pub fn league_with_suffix(&self, form: LeagueUrlForm, suffix: &str) -> String {
        match form {
            LeagueUrlForm::Current => format!(
                "{}/segments/0/leagues/{}{suffix}",
                self.games_base, self.league_id
            ),
            LeagueUrlForm::History => format!(
                "{}/leagueHistory/{}{suffix}?seasonId={}",
                self.sport_root, self.league_id, self.year
            ),
        }
    }

    /// Swaps a league URL to the other family by splitting on the known path
    /// markers. Any suffix below the league resource is carried over.
    /// Returns `None` for URLs that are not league-scoped.
    pub fn alternate_league_url(&self, url: &str) -> Option<(LeagueUrlForm, String)> {
        let id = self.league_id.to_string();

        if let Some((_, rest)) = url.split_once(HISTORY_MARKER) {
            let path = rest.split('?').next().unwrap_or(rest);
            let suffix = path.strip_prefix(id.as_str()).filter(|s| is_suffix(s))?;
            let form = LeagueUrlForm::Current;
            Some((form, self.league_with_suffix(form, suffix)))
        } else if let Some((_, rest)) = url.split_once(SEASONS_MARKER) {
            let (_, tail) = rest.split_once(&format!("/leagues/{id}"))?;
            let suffix = tail.split('?').next().unwrap_or(tail);
            if !is_suffix(suffix) {
                return None;
            }
            let form = LeagueUrlForm::History;
            Some((form, self.league_with_suffix(form, suffix)))
        } else {
            None
        }
    }
}

fn is_suffix(s: &str) -> bool {
    s.is_empty() || s.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FANTASY_BASE_ENDPOINT, NEWS_BASE_ENDPOINT};

    fn endpoints(sport: Sport, year: u16) -> EndpointSet {
        EndpointSet::new(FANTASY_BASE_ENDPOINT, NEWS_BASE_ENDPOINT, sport, year, 123456)
    }

    #[test]
    fn test_every_sport_maps_to_its_segment() {
        let expected = [
            ("nfl", "ffl"),
            ("nba", "fba"),
            ("nhl", "fhl"),
            ("mlb", "flb"),
            ("wnba", "wfba"),
        ];
        for (code, segment) in expected {
            let sport: Sport = code.parse().unwrap();
            assert_eq!(sport.path_segment(), segment);
            assert_eq!(sport.to_string(), code);

            let urls = endpoints(sport, 2024);
            assert_eq!(
                urls.games_base(),
                format!("https://lm-api-reads.fantasy.espn.com/apis/v3/games/{segment}/seasons/2024")
            );
            assert_eq!(
                urls.news(),
                format!("https://site.api.espn.com/apis/fantasy/v3/games/{segment}/news/players")
            );
        }
    }

    #[test]
    fn test_unknown_sport_names_offending_value() {
        let err = "cricket".parse::<Sport>().unwrap_err();
        match err {
            AppError::InvalidSport { sport, valid } => {
                assert_eq!(sport, "cricket");
                assert_eq!(valid, "nfl, nba, nhl, mlb, wnba");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_sport_codes_are_case_sensitive() {
        assert!("NFL".parse::<Sport>().is_err());
    }

    #[test]
    fn test_initial_form_by_year() {
        assert_eq!(LeagueUrlForm::for_year(2018), LeagueUrlForm::Current);
        assert_eq!(LeagueUrlForm::for_year(2024), LeagueUrlForm::Current);
        assert_eq!(LeagueUrlForm::for_year(2017), LeagueUrlForm::History);
        assert_eq!(LeagueUrlForm::for_year(2010), LeagueUrlForm::History);
    }

    #[test]
    fn test_league_url_forms() {
        let urls = endpoints(Sport::Nfl, 2024);
        assert_eq!(
            urls.league(LeagueUrlForm::Current),
            "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl/seasons/2024/segments/0/leagues/123456"
        );
        assert_eq!(
            urls.league(LeagueUrlForm::History),
            "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl/leagueHistory/123456?seasonId=2024"
        );
        assert_eq!(
            urls.league_with_suffix(LeagueUrlForm::History, "/communication"),
            "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl/leagueHistory/123456/communication?seasonId=2024"
        );
    }

    #[test]
    fn test_detect_form() {
        let urls = endpoints(Sport::Nhl, 2016);
        assert_eq!(
            LeagueUrlForm::detect(&urls.league(LeagueUrlForm::History)),
            Some(LeagueUrlForm::History)
        );
        assert_eq!(
            LeagueUrlForm::detect(&urls.league(LeagueUrlForm::Current)),
            Some(LeagueUrlForm::Current)
        );
        assert_eq!(LeagueUrlForm::detect(urls.games_base()), None);
        assert_eq!(LeagueUrlForm::detect(urls.news()), None);
    }

    #[test]
    fn test_alternate_url_swaps_both_ways() {
        let urls = endpoints(Sport::Mlb, 2019);
        let current = urls.league(LeagueUrlForm::Current);
        let history = urls.league(LeagueUrlForm::History);

        assert_eq!(
            urls.alternate_league_url(&current),
            Some((LeagueUrlForm::History, history.clone()))
        );
        assert_eq!(
            urls.alternate_league_url(&history),
            Some((LeagueUrlForm::Current, current))
        );
    }

    #[test]
    fn test_alternate_url_keeps_suffix() {
        let urls = endpoints(Sport::Nfl, 2024);
        let current = urls.league_with_suffix(LeagueUrlForm::Current, "/communication");
        let (form, swapped) = urls.alternate_league_url(&current).unwrap();
        assert_eq!(form, LeagueUrlForm::History);
        assert_eq!(
            swapped,
            urls.league_with_suffix(LeagueUrlForm::History, "/communication")
        );
    }

    #[test]
    fn test_alternate_url_rejects_non_league_urls() {
        let urls = endpoints(Sport::Nfl, 2024);
        assert_eq!(urls.alternate_league_url(urls.news()), None);
        assert_eq!(
            urls.alternate_league_url(&format!("{}/players", urls.games_base())),
            None
        );
    }

    #[test]
    fn test_alternate_url_requires_exact_league_id() {
        let urls = EndpointSet::new(FANTASY_BASE_ENDPOINT, NEWS_BASE_ENDPOINT, Sport::Nfl, 2024, 12);
        let other = EndpointSet::new(FANTASY_BASE_ENDPOINT, NEWS_BASE_ENDPOINT, Sport::Nfl, 2024, 123);
        assert_eq!(urls.alternate_league_url(&other.league(LeagueUrlForm::Current)), None);
        assert_eq!(urls.alternate_league_url(&other.league(LeagueUrlForm::History)), None);
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let urls = EndpointSet::new("http://127.0.0.1:9000", "http://127.0.0.1:9000/", Sport::Nba, 2024, 7);
        assert_eq!(
            urls.league(LeagueUrlForm::Current),
            "http://127.0.0.1:9000/fba/seasons/2024/segments/0/leagues/7"
        );
        assert_eq!(urls.news(), "http://127.0.0.1:9000/fba/news/players");
    }

    #[test]
    fn test_regular_season_weeks() {
        assert_eq!(Sport::Nfl.regular_season_weeks(), 18);
        assert_eq!(Sport::Mlb.regular_season_weeks(), 25);
        assert_eq!(Sport::Wnba.regular_season_weeks(), 24);
    }
}
