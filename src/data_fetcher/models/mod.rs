pub mod activity;
pub mod league;
pub mod matchups;
pub mod players;

pub use activity::{Activity, ActivityAction, Draft, DraftPick, NewsItem};
pub use league::{LeagueSettings, LeagueSnapshot, Member, ProTeam, RosterPosition, Team, TeamRecord};
pub use matchups::{BoxPlayer, BoxScore, BoxScoreTeam, Matchup, MatchupSide, MatchupWinner};
pub use players::{DEFAULT_INJURY_STATUS, Ownership, Player, PlayerStats};
