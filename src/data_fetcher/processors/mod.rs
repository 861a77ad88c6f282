//! Field-by-field normalization of loose upstream JSON into domain records.
//!
//! Nothing here fails: absent or mistyped fields take zero values so one bad
//! record never discards the rest of a payload.

pub mod activity;
pub mod json;
pub mod matchups;
pub mod players;
pub mod teams;

pub use activity::{normalize_activity, normalize_draft, normalize_news};
pub use matchups::{normalize_box_score, normalize_matchups};
pub use players::{normalize_player, normalize_player_pool, normalize_players, normalize_roster};
pub use teams::{
    normalize_league, normalize_members, normalize_pro_teams, normalize_settings, normalize_team,
    normalize_teams,
};
