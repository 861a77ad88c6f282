use super::json::{array_at, at, f64_at, number_map_at, string_at, u32_at, u64_at};
use super::players::{normalize_player, normalize_players};
use super::teams::{normalize_teams, slot_label, team_by_id};
use crate::data_fetcher::api::Sport;
use crate::data_fetcher::models::{
    BoxPlayer, BoxScore, BoxScoreTeam, Matchup, MatchupSide, MatchupWinner, Team,
};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Upstream stat source ids on a player's `stats` entries.
const ACTUAL_STAT_SOURCE: u64 = 0;
const PROJECTED_STAT_SOURCE: u64 = 1;

/// Normalizes the `schedule` array of a matchup views payload.
///
/// Teams are resolved against the payload's own `teams` array; a team id
/// the payload does not describe yields a placeholder team carrying only
/// the id.
pub fn normalize_matchups(payload: &Value) -> Vec<Matchup> {
    let teams = normalize_teams(array_at(payload, &["teams"]));
    let matchups: Vec<Matchup> = array_at(payload, &["schedule"])
        .iter()
        .map(|entry| normalize_matchup(entry, &teams))
        .collect();

    debug!("Normalized {} matchups", matchups.len());
    matchups
}

fn normalize_matchup(entry: &Value, teams: &[Team]) -> Matchup {
    Matchup {
        id: u64_at(entry, &["id"]),
        week: u32_at(entry, &["matchupPeriodId"]),
        home: normalize_side(at(entry, &["home"]), teams),
        away: normalize_side(at(entry, &["away"]), teams),
        winner: MatchupWinner::from_upstream(&string_at(entry, &["winner"])),
    }
}

fn normalize_side(side: Option<&Value>, teams: &[Team]) -> MatchupSide {
    let Some(side) = side else {
        return MatchupSide::default();
    };
    let team_id = u32_at(side, &["teamId"]);

    MatchupSide {
        team_id,
        team: team_by_id(teams, team_id),
        score: side_score(side),
        roster: normalize_players(side_entries(side)),
    }
}

/// Box score for `matchup_id`.
///
/// A schedule that is a single entry, or whose entries carry no ids, was
/// already filtered upstream and its first entry is used. Otherwise a
/// matchup id missing from the schedule yields an empty box score.
pub fn normalize_box_score(payload: &Value, matchup_id: u64, week: u32, sport: Sport) -> BoxScore {
    let schedule = array_at(payload, &["schedule"]);
    let entry = schedule
        .iter()
        .find(|entry| u64_at(entry, &["id"]) == matchup_id)
        .or_else(|| {
            let unidentified = schedule.iter().all(|entry| at(entry, &["id"]).is_none());
            if schedule.len() == 1 || unidentified {
                schedule.first()
            } else {
                if !schedule.is_empty() {
                    warn!("Matchup {} not found in box score payload", matchup_id);
                }
                None
            }
        });

    let Some(entry) = entry else {
        return BoxScore {
            matchup_id,
            week,
            ..BoxScore::default()
        };
    };

    let teams = normalize_teams(array_at(payload, &["teams"]));
    BoxScore {
        matchup_id,
        week,
        home: normalize_box_team(at(entry, &["home"]), &teams, week, sport),
        away: normalize_box_team(at(entry, &["away"]), &teams, week, sport),
        winner: MatchupWinner::from_upstream(&string_at(entry, &["winner"])),
    }
}

fn normalize_box_team(
    side: Option<&Value>,
    teams: &[Team],
    week: u32,
    sport: Sport,
) -> BoxScoreTeam {
    let Some(side) = side else {
        return BoxScoreTeam::default();
    };
    let team_id = u32_at(side, &["teamId"]);

    BoxScoreTeam {
        team_id,
        team: team_by_id(teams, team_id),
        score: side_score(side),
        players: side_entries(side)
            .iter()
            .map(|entry| normalize_box_player(entry, week, sport))
            .collect(),
    }
}

fn normalize_box_player(entry: &Value, week: u32, sport: Sport) -> BoxPlayer {
    let slot_id = u32_at(entry, &["lineupSlotId"]);
    let stats = array_at(entry, &["playerPoolEntry", "player", "stats"]);
    let actual = stat_entry(stats, ACTUAL_STAT_SOURCE, week);
    let projected = stat_entry(stats, PROJECTED_STAT_SOURCE, week);

    let points = at(entry, &["playerPoolEntry", "appliedStatTotal"])
        .and_then(Value::as_f64)
        .or_else(|| actual.and_then(|s| at(s, &["appliedTotal"])?.as_f64()))
        .unwrap_or(0.0);

    BoxPlayer {
        player: normalize_player(entry),
        points,
        projected_points: projected.map_or(0.0, |s| f64_at(s, &["appliedTotal"])),
        slot_id,
        slot_position: slot_label(sport, slot_id),
        stats: actual.map_or_else(BTreeMap::new, |s| number_map_at(s, &["stats"])),
    }
}

/// Stats entry for the given source, preferring the one scored in `week`.
fn stat_entry(stats: &[Value], source: u64, week: u32) -> Option<&Value> {
    let mut of_source = stats
        .iter()
        .filter(move |s| u64_at(s, &["statSourceId"]) == source);
    let first = of_source.clone().next();
    of_source
        .find(|s| u32_at(s, &["scoringPeriodId"]) == week)
        .or(first)
}

/// Live total while a period is in progress, final total otherwise.
fn side_score(side: &Value) -> f64 {
    at(side, &["totalPointsLive"])
        .and_then(Value::as_f64)
        .unwrap_or_else(|| f64_at(side, &["totalPoints"]))
}

fn side_entries(side: &Value) -> &[Value] {
    ["rosterForCurrentScoringPeriod", "rosterForMatchupPeriod"]
        .into_iter()
        .map(|key| array_at(side, &[key, "entries"]))
        .find(|entries| !entries.is_empty())
        .unwrap_or_default()
}
