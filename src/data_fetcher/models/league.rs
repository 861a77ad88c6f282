use super::players::Player;
use crate::data_fetcher::api::Sport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u32,
    pub abbrev: String,
    pub name: String,
    pub location: String,
    pub logo: String,
    pub record: TeamRecord,
    pub points_for: f64,
    pub points_against: f64,
    pub roster: Vec<Player>,
    /// Member ids of the team owners
    pub owners: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl TeamRecord {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSettings {
    pub name: String,
    pub size: u32,
    pub scoring_type: String,
    pub playoff_team_count: u32,
    pub regular_season_matchup_period_count: u32,
    pub roster_positions: Vec<RosterPosition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPosition {
    pub slot_id: u32,
    /// Slot label, or the slot id when the label is unknown
    pub position: String,
    pub count: u32,
}

/// Everything the league read returns, normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSnapshot {
    pub id: u64,
    pub year: u16,
    pub sport: Sport,
    pub name: String,
    pub current_week: u32,
    pub settings: LeagueSettings,
    pub members: Vec<Member>,
    pub teams: Vec<Team>,
}

impl LeagueSnapshot {
    pub fn team(&self, team_id: u32) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == team_id)
    }

    /// Teams ordered by wins, then points scored.
    pub fn standings(&self) -> Vec<&Team> {
        let mut teams: Vec<&Team> = self.teams.iter().collect();
        teams.sort_by(|a, b| {
            b.record
                .wins
                .cmp(&a.record.wins)
                .then_with(|| b.points_for.total_cmp(&a.points_for))
        });
        teams
    }
}

/// A professional team from the season schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProTeam {
    pub id: u32,
    pub abbrev: String,
    pub name: String,
    pub location: String,
    pub bye_week: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: u32, wins: u32, points_for: f64) -> Team {
        Team {
            id,
            record: TeamRecord {
                wins,
                losses: 10 - wins,
                ties: 0,
            },
            points_for,
            ..Team::default()
        }
    }

    #[test]
    fn test_standings_order() {
        let snapshot = LeagueSnapshot {
            id: 1,
            year: 2024,
            sport: Sport::Nfl,
            name: "Test".to_string(),
            current_week: 11,
            settings: LeagueSettings::default(),
            members: vec![],
            teams: vec![team(1, 5, 900.0), team(2, 7, 850.0), team(3, 5, 950.5)],
        };

        let order: Vec<u32> = snapshot.standings().iter().map(|t| t.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(snapshot.team(3).map(|t| t.record.games_played()), Some(10));
        assert!(snapshot.team(9).is_none());
    }

    #[test]
    fn test_snapshot_serializes_sport_code() {
        let snapshot = LeagueSnapshot {
            id: 1,
            year: 2016,
            sport: Sport::Wnba,
            name: String::new(),
            current_week: 1,
            settings: LeagueSettings::default(),
            members: vec![],
            teams: vec![],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"sport\":\"wnba\""));
        assert!(json.contains("\"currentWeek\":1"));
    }
}
