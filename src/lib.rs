//! ESPN Fantasy Sports Client Library
//!
//! This library reads league data from the ESPN fantasy API for football,
//! basketball, hockey, baseball and WNBA leagues and normalizes the loose
//! upstream JSON into typed records.
//!
//! # Examples
//!
//! ```rust,no_run
//! use espn_fantasy::data_fetcher::api::{AuthCredential, ClientConfig};
//! use espn_fantasy::data_fetcher::league::FantasyLeague;
//! use espn_fantasy::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = ClientConfig::new("nfl", 2024, 336358)?
//!         .with_credential(AuthCredential::new("AEB...", "{SWID-GUID}")?);
//!     let league = FantasyLeague::new(config, 30)?;
//!
//!     let snapshot = league.fetch_league().await?;
//!     for team in snapshot.standings() {
//!         println!("{:<30} {}-{}", team.name, team.record.wins, team.record.losses);
//!     }
//!
//!     for matchup in league.get_matchups(Some(snapshot.current_week)).await? {
//!         println!("{} vs {}", matchup.home.team.name, matchup.away.team.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{AuthCredential, ClientConfig, EspnClient, LeagueUrlForm, Sport};
pub use data_fetcher::league::FantasyLeague;
pub use data_fetcher::models::{
    Activity, BoxScore, Draft, LeagueSnapshot, Matchup, NewsItem, Player, ProTeam, Team,
};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
