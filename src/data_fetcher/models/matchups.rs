use super::league::Team;
use super::players::Player;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchupWinner {
    Home,
    Away,
    Tie,
    #[default]
    Undecided,
}

impl MatchupWinner {
    /// Parses the upstream `winner` field; anything unrecognized is undecided.
    pub fn from_upstream(value: &str) -> Self {
        match value {
            "HOME" => MatchupWinner::Home,
            "AWAY" => MatchupWinner::Away,
            "TIE" => MatchupWinner::Tie,
            _ => MatchupWinner::Undecided,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupSide {
    pub team_id: u32,
    pub team: Team,
    pub score: f64,
    pub roster: Vec<Player>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub id: u64,
    pub week: u32,
    pub home: MatchupSide,
    /// Empty side (team id 0) for bye weeks
    pub away: MatchupSide,
    pub winner: MatchupWinner,
}

impl Matchup {
    pub fn is_bye(&self) -> bool {
        self.away.team_id == 0
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home.team_id == team_id || self.away.team_id == team_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPlayer {
    pub player: Player,
    pub points: f64,
    pub projected_points: f64,
    pub slot_id: u32,
    pub slot_position: String,
    pub stats: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxScoreTeam {
    pub team_id: u32,
    pub team: Team,
    pub score: f64,
    pub players: Vec<BoxPlayer>,
}

impl BoxScoreTeam {
    /// Sum of projected points over players in a starting slot.
    pub fn projected_score(&self) -> f64 {
        self.players
            .iter()
            .filter(|p| !matches!(p.slot_position.as_str(), "BENCH" | "IR" | "IL"))
            .map(|p| p.projected_points)
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxScore {
    pub matchup_id: u64,
    pub week: u32,
    pub home: BoxScoreTeam,
    pub away: BoxScoreTeam,
    pub winner: MatchupWinner,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_from_upstream() {
        assert_eq!(MatchupWinner::from_upstream("HOME"), MatchupWinner::Home);
        assert_eq!(MatchupWinner::from_upstream("AWAY"), MatchupWinner::Away);
        assert_eq!(MatchupWinner::from_upstream("TIE"), MatchupWinner::Tie);
        assert_eq!(
            MatchupWinner::from_upstream("UNDECIDED"),
            MatchupWinner::Undecided
        );
        assert_eq!(MatchupWinner::from_upstream(""), MatchupWinner::Undecided);
    }

    #[test]
    fn test_bye_and_involvement() {
        let matchup = Matchup {
            id: 1,
            week: 15,
            home: MatchupSide {
                team_id: 4,
                ..MatchupSide::default()
            },
            ..Matchup::default()
        };
        assert!(matchup.is_bye());
        assert!(matchup.involves(4));
        assert!(!matchup.involves(5));
    }

    #[test]
    fn test_projected_score_skips_bench() {
        let starter = BoxPlayer {
            projected_points: 12.5,
            slot_position: "QB".to_string(),
            ..BoxPlayer::default()
        };
        let bench = BoxPlayer {
            projected_points: 30.0,
            slot_position: "BENCH".to_string(),
            ..BoxPlayer::default()
        };
        let team = BoxScoreTeam {
            players: vec![starter, bench],
            ..BoxScoreTeam::default()
        };
        assert_eq!(team.projected_score(), 12.5);
    }

    #[test]
    fn test_winner_serializes_lowercase() {
        let json = serde_json::to_string(&MatchupWinner::Away).unwrap();
        assert_eq!(json, "\"away\"");
    }
}
