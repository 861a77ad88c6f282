use serde_json::{Value, json};

/// Test utilities for building upstream-shaped JSON payloads
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Roster entry in the `{ playerId, playerPoolEntry: { player } }` shape
    pub fn roster_entry(player_id: u64, full_name: &str, position_id: u32) -> Value {
        let (first, last) = full_name.split_once(' ').unwrap_or((full_name, ""));
        json!({
            "playerId": player_id,
            "lineupSlotId": position_id,
            "playerPoolEntry": {
                "player": {
                    "id": player_id,
                    "fullName": full_name,
                    "firstName": first,
                    "lastName": last,
                    "defaultPositionId": position_id,
                    "proTeamId": 1,
                    "injuryStatus": "ACTIVE",
                    "stats": [
                        {"statSourceId": 0, "appliedTotal": 10.0, "projectedTotal": 9.0, "stats": {"0": 1.0}}
                    ],
                    "ownership": {"percentOwned": 50.0, "percentChange": 0.5}
                }
            }
        })
    }

    /// Roster entry with only identifying fields; no injury status, stats or ownership
    pub fn sparse_roster_entry(player_id: u64, full_name: &str) -> Value {
        json!({
            "playerId": player_id,
            "playerPoolEntry": {
                "player": {
                    "fullName": full_name,
                    "defaultPositionId": 2
                }
            }
        })
    }

    pub fn team(id: u32, name: &str, wins: u32, losses: u32, roster: Vec<Value>) -> Value {
        json!({
            "id": id,
            "abbrev": name.chars().take(4).collect::<String>().to_uppercase(),
            "name": name,
            "location": "",
            "logo": format!("https://example.com/{id}.png"),
            "owners": [format!("{{OWNER-{id}}}")],
            "record": {
                "overall": {
                    "wins": wins,
                    "losses": losses,
                    "ties": 0,
                    "pointsFor": 100.0 * f64::from(wins),
                    "pointsAgainst": 100.0 * f64::from(losses)
                }
            },
            "roster": {"entries": roster}
        })
    }

    /// League views payload with two teams and the given scoring period
    pub fn league(league_id: u64, latest_scoring_period: u32) -> Value {
        json!({
            "id": league_id,
            "seasonId": 2024,
            "status": {"latestScoringPeriod": latest_scoring_period},
            "settings": {
                "name": "Test League",
                "size": 2,
                "scoringSettings": {"scoringType": "H2H_POINTS"},
                "scheduleSettings": {"playoffTeamCount": 2, "matchupPeriodCount": 14},
                "rosterSettings": {"lineupSlotCounts": {"2": 2, "20": 5}}
            },
            "members": [
                {"id": "{OWNER-1}", "displayName": "first_owner", "firstName": "First", "lastName": "Owner"},
                {"id": "{OWNER-2}", "displayName": "second_owner"}
            ],
            "teams": [
                Self::team(1, "Thunder Bolts", 8, 5, vec![Self::roster_entry(101, "John Smith", 1)]),
                Self::team(2, "Lightning Strikes", 7, 6, vec![Self::sparse_roster_entry(201, "Tom Davis")])
            ]
        })
    }

    pub fn matchup(id: u64, week: u32, home_team: u32, away_team: Option<u32>, winner: &str) -> Value {
        let mut matchup = json!({
            "id": id,
            "matchupPeriodId": week,
            "winner": winner,
            "home": {"teamId": home_team, "totalPoints": 98.6}
        });
        if let Some(away_team) = away_team {
            matchup["away"] = json!({"teamId": away_team, "totalPoints": 68.5});
        }
        matchup
    }

    /// Matchup views payload: teams plus a schedule
    pub fn matchups(schedule: Vec<Value>) -> Value {
        json!({
            "teams": [
                Self::team(1, "Thunder Bolts", 8, 5, vec![]),
                Self::team(2, "Lightning Strikes", 7, 6, vec![])
            ],
            "schedule": schedule
        })
    }

    pub fn box_score(matchup_id: u64, week: u32) -> Value {
        let mut starter = Self::roster_entry(101, "John Smith", 1);
        starter["lineupSlotId"] = json!(0);
        starter["playerPoolEntry"]["appliedStatTotal"] = json!(24.5);
        let mut home = Self::matchup(matchup_id, week, 1, Some(2), "HOME");
        home["home"]["rosterForCurrentScoringPeriod"] = json!({"entries": [starter]});
        Self::matchups(vec![home])
    }

    pub fn players_pool(ids: &[u64]) -> Value {
        Value::Array(
            ids.iter()
                .map(|&id| {
                    json!({
                        "id": id,
                        "player": {
                            "id": id,
                            "fullName": format!("Free Agent {id}"),
                            "defaultPositionId": 3
                        }
                    })
                })
                .collect(),
        )
    }

    pub fn draft(picks: &[(u32, u64)]) -> Value {
        let picks: Vec<Value> = picks
            .iter()
            .enumerate()
            .map(|(i, (team_id, player_id))| {
                json!({
                    "roundId": 1,
                    "roundPickNumber": i + 1,
                    "overallPickNumber": i + 1,
                    "teamId": team_id,
                    "playerId": player_id,
                    "keeper": false
                })
            })
            .collect();
        json!({"draftDetail": {"drafted": true, "inProgress": false, "picks": picks}})
    }

    pub fn activity(topic_id: &str, date_millis: i64, messages: &[(u32, u32, u64)]) -> Value {
        let messages: Vec<Value> = messages
            .iter()
            .map(|(type_id, team_id, player_id)| {
                json!({"messageTypeId": type_id, "for": team_id, "targetId": player_id})
            })
            .collect();
        json!({"topics": [{"id": topic_id, "date": date_millis, "messages": messages}]})
    }

    pub fn news(headlines: &[&str]) -> Value {
        let feed: Vec<Value> = headlines
            .iter()
            .enumerate()
            .map(|(i, headline)| {
                json!({
                    "id": i + 1,
                    "headline": headline,
                    "story": format!("{headline}."),
                    "published": "2024-10-01T12:00:00Z"
                })
            })
            .collect();
        json!({"feed": feed})
    }

    pub fn pro_schedule() -> Value {
        json!({
            "settings": {
                "proTeams": [
                    {"id": 0, "abbrev": "FA", "name": "FA", "location": ""},
                    {"id": 12, "abbrev": "KC", "name": "Chiefs", "location": "Kansas City", "byeWeek": 6},
                    {"id": 17, "abbrev": "NE", "name": "Patriots", "location": "New England", "byeWeek": 14}
                ]
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::Sport;
    use crate::data_fetcher::processors;

    #[test]
    fn test_league_fixture_normalizes() {
        let snapshot =
            processors::normalize_league(&TestDataBuilder::league(1, 4), 1, 2024, Sport::Nfl);
        assert_eq!(snapshot.teams.len(), 2);
        assert_eq!(snapshot.current_week, 4);
        assert_eq!(snapshot.teams[0].roster[0].first_name, "John");
        assert_eq!(snapshot.teams[1].roster[0].injury_status, "ACTIVE");
    }

    #[test]
    fn test_matchup_fixture_bye() {
        let payload = TestDataBuilder::matchups(vec![TestDataBuilder::matchup(1, 1, 1, None, "HOME")]);
        let matchups = processors::normalize_matchups(&payload);
        assert!(matchups[0].is_bye());
    }

    #[test]
    fn test_box_score_fixture() {
        let box_score = processors::normalize_box_score(
            &TestDataBuilder::box_score(9, 3),
            9,
            3,
            Sport::Nfl,
        );
        assert_eq!(box_score.home.players[0].points, 24.5);
        assert_eq!(box_score.home.players[0].slot_position, "QB");
    }
}
