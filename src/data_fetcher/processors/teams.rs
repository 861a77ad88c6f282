use super::json::{array_at, at, f64_at, id_string_at, string_at, u32_at};
use super::players::normalize_roster;
use crate::constants::lineup_slot_label;
use crate::data_fetcher::api::Sport;
use crate::data_fetcher::models::{
    LeagueSettings, LeagueSnapshot, Member, ProTeam, RosterPosition, Team, TeamRecord,
};
use serde_json::Value;
use tracing::debug;

/// Builds a [`LeagueSnapshot`] from the combined league views payload.
///
/// `current_week` falls back to 1 when the league has no scoring period yet.
pub fn normalize_league(payload: &Value, id: u64, year: u16, sport: Sport) -> LeagueSnapshot {
    let current_week = match u32_at(payload, &["status", "latestScoringPeriod"]) {
        0 => 1,
        week => week,
    };
    let settings = normalize_settings(payload, sport);
    let teams = normalize_teams(array_at(payload, &["teams"]));
    let members = normalize_members(array_at(payload, &["members"]));

    debug!(
        "Normalized league {}: {} teams, {} members, week {}",
        id,
        teams.len(),
        members.len(),
        current_week
    );

    LeagueSnapshot {
        id,
        year,
        sport,
        name: settings.name.clone(),
        current_week,
        settings,
        members,
        teams,
    }
}

pub fn normalize_teams(teams: &[Value]) -> Vec<Team> {
    teams.iter().map(normalize_team).collect()
}

pub fn normalize_team(team: &Value) -> Team {
    let location = string_at(team, &["location"]);
    let name = match string_at(team, &["name"]) {
        name if !name.is_empty() => name,
        _ => {
            let nickname = string_at(team, &["nickname"]);
            if nickname.is_empty() {
                location.clone()
            } else if location.is_empty() {
                nickname
            } else {
                format!("{location} {nickname}")
            }
        }
    };

    Team {
        id: u32_at(team, &["id"]),
        abbrev: string_at(team, &["abbrev"]),
        name,
        location,
        logo: string_at(team, &["logo"]),
        record: TeamRecord {
            wins: u32_at(team, &["record", "overall", "wins"]),
            losses: u32_at(team, &["record", "overall", "losses"]),
            ties: u32_at(team, &["record", "overall", "ties"]),
        },
        points_for: f64_at(team, &["record", "overall", "pointsFor"]),
        points_against: f64_at(team, &["record", "overall", "pointsAgainst"]),
        roster: normalize_roster(team),
        owners: array_at(team, &["owners"])
            .iter()
            .filter_map(|owner| owner.as_str().map(str::to_string))
            .collect(),
    }
}

pub fn normalize_members(members: &[Value]) -> Vec<Member> {
    members
        .iter()
        .map(|member| Member {
            id: id_string_at(member, &["id"]),
            display_name: string_at(member, &["displayName"]),
            first_name: string_at(member, &["firstName"]),
            last_name: string_at(member, &["lastName"]),
        })
        .collect()
}

pub fn normalize_settings(payload: &Value, sport: Sport) -> LeagueSettings {
    let settings = at(payload, &["settings"]).unwrap_or(&Value::Null);

    // lineupSlotCounts is keyed by slot id as a string
    let mut roster_positions: Vec<RosterPosition> = at(
        settings,
        &["rosterSettings", "lineupSlotCounts"],
    )
    .and_then(Value::as_object)
    .map(|slots| {
        slots
            .iter()
            .filter_map(|(slot, count)| {
                let slot_id = slot.parse::<u32>().ok()?;
                let count = u32::try_from(count.as_u64()?).ok()?;
                (count > 0).then(|| RosterPosition {
                    slot_id,
                    position: slot_label(sport, slot_id),
                    count,
                })
            })
            .collect()
    })
    .unwrap_or_default();
    roster_positions.sort_by_key(|p| p.slot_id);

    LeagueSettings {
        name: string_at(settings, &["name"]),
        size: u32_at(settings, &["size"]),
        scoring_type: string_at(settings, &["scoringSettings", "scoringType"]),
        playoff_team_count: u32_at(settings, &["scheduleSettings", "playoffTeamCount"]),
        regular_season_matchup_period_count: u32_at(
            settings,
            &["scheduleSettings", "matchupPeriodCount"],
        ),
        roster_positions,
    }
}

/// Pro teams from the season schedule payload (`settings.proTeams`).
/// The free-agent placeholder team (id 0) is skipped.
pub fn normalize_pro_teams(payload: &Value) -> Vec<ProTeam> {
    array_at(payload, &["settings", "proTeams"])
        .iter()
        .map(|team| ProTeam {
            id: u32_at(team, &["id"]),
            abbrev: string_at(team, &["abbrev"]),
            name: string_at(team, &["name"]),
            location: string_at(team, &["location"]),
            bye_week: u32_at(team, &["byeWeek"]),
        })
        .filter(|team| team.id != 0)
        .collect()
}

/// Lineup slot label, or the numeric id for slots the table does not know.
pub(super) fn slot_label(sport: Sport, slot_id: u32) -> String {
    lineup_slot_label(sport, slot_id)
        .map(str::to_string)
        .unwrap_or_else(|| slot_id.to_string())
}

pub(super) fn team_by_id(teams: &[Team], team_id: u32) -> Team {
    teams
        .iter()
        .find(|team| team.id == team_id)
        .cloned()
        .unwrap_or_else(|| Team {
            id: team_id,
            ..Team::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn league_payload() -> Value {
        json!({
            "id": 336358,
            "status": {"latestScoringPeriod": 9},
            "settings": {
                "name": "Office League",
                "size": 2,
                "scoringSettings": {"scoringType": "H2H_POINTS"},
                "scheduleSettings": {"playoffTeamCount": 4, "matchupPeriodCount": 14},
                "rosterSettings": {"lineupSlotCounts": {"0": 1, "2": 2, "20": 6, "23": 0}}
            },
            "members": [{"id": "{ABC}", "displayName": "owner1"}],
            "teams": [
                {
                    "id": 1,
                    "abbrev": "TB",
                    "name": "Thunder Bolts",
                    "owners": ["{ABC}"],
                    "record": {"overall": {"wins": 6, "losses": 2, "ties": 0, "pointsFor": 900.5, "pointsAgainst": 811.0}},
                    "roster": {"entries": [{"playerId": 10, "playerPoolEntry": {"player": {"fullName": "A"}}}]}
                },
                {"id": 2, "location": "Metro", "nickname": "Strikes"}
            ]
        })
    }

    #[test]
    fn test_normalize_league() {
        let snapshot = normalize_league(&league_payload(), 336358, 2024, Sport::Nfl);

        assert_eq!(snapshot.current_week, 9);
        assert_eq!(snapshot.name, "Office League");
        assert_eq!(snapshot.settings.scoring_type, "H2H_POINTS");
        assert_eq!(snapshot.settings.playoff_team_count, 4);
        assert_eq!(snapshot.settings.regular_season_matchup_period_count, 14);
        assert_eq!(snapshot.members[0].display_name, "owner1");
        assert_eq!(snapshot.teams.len(), 2);

        let first = &snapshot.teams[0];
        assert_eq!(first.record.wins, 6);
        assert_eq!(first.points_for, 900.5);
        assert_eq!(first.owners, vec!["{ABC}".to_string()]);
        assert_eq!(first.roster.len(), 1);
        assert_eq!(snapshot.teams[1].name, "Metro Strikes");
    }

    #[test]
    fn test_roster_positions_skip_empty_slots() {
        let settings = normalize_settings(&league_payload(), Sport::Nfl);
        let labels: Vec<(&str, u32)> = settings
            .roster_positions
            .iter()
            .map(|p| (p.position.as_str(), p.count))
            .collect();
        assert_eq!(labels, vec![("QB", 1), ("RB", 2), ("BENCH", 6)]);
    }

    #[test]
    fn test_roster_positions_use_sport_slots() {
        let payload = json!({
            "settings": {"rosterSettings": {"lineupSlotCounts": {"0": 1, "1": 1, "4": 1, "12": 3, "40": 1}}}
        });
        let labels: Vec<String> = normalize_settings(&payload, Sport::Nba)
            .roster_positions
            .into_iter()
            .map(|p| p.position)
            .collect();
        assert_eq!(labels, vec!["PG", "SG", "C", "BENCH", "40"]);

        let hockey = normalize_settings(&payload, Sport::Nhl);
        assert_eq!(hockey.roster_positions[2].position, "D");
    }

    #[test]
    fn test_empty_payload_defaults() {
        let snapshot = normalize_league(&json!({}), 1, 2017, Sport::Nba);
        assert_eq!(snapshot.current_week, 1);
        assert!(snapshot.teams.is_empty());
        assert!(snapshot.members.is_empty());
        assert_eq!(snapshot.settings, LeagueSettings::default());
    }

    #[test]
    fn test_zero_week_defaults_to_one() {
        let payload = json!({"status": {"latestScoringPeriod": 0}});
        assert_eq!(normalize_league(&payload, 1, 2024, Sport::Nfl).current_week, 1);
    }

    #[test]
    fn test_team_name_falls_back_to_location() {
        let team = normalize_team(&json!({"id": 3, "location": "Springfield"}));
        assert_eq!(team.name, "Springfield");
        assert_eq!(team.record.games_played(), 0);
    }

    #[test]
    fn test_pro_teams() {
        let payload = json!({
            "settings": {
                "proTeams": [
                    {"id": 0, "abbrev": "FA", "name": "FA"},
                    {"id": 12, "abbrev": "KC", "location": "Kansas City", "name": "Chiefs", "byeWeek": 6}
                ]
            }
        });
        let teams = normalize_pro_teams(&payload);
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].abbrev, "KC");
        assert_eq!(teams[0].bye_week, 6);
    }

    #[test]
    fn test_team_by_id_placeholder() {
        let teams = normalize_teams(&[json!({"id": 4, "name": "Known"})]);
        assert_eq!(team_by_id(&teams, 4).name, "Known");
        let unknown = team_by_id(&teams, 8);
        assert_eq!(unknown.id, 8);
        assert!(unknown.name.is_empty());
    }
}
