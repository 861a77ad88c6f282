pub mod api;
pub mod league;
pub mod models;
pub mod processors;

pub use api::{AuthCredential, ClientConfig, EspnClient, LeagueUrlForm, Sport};
pub use league::FantasyLeague;
pub use models::{BoxScore, LeagueSnapshot, Matchup, Player, Team};
