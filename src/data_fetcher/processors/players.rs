use super::json::{array_at, at, f64_at, number_map_at, string_at, u32_at, u64_at};
use crate::data_fetcher::models::{DEFAULT_INJURY_STATUS, Ownership, Player, PlayerStats};
use serde_json::Value;

/// Normalizes one roster, players-pool or player-card entry into a [`Player`].
///
/// Accepts the three shapes the upstream uses for the same player record:
/// a roster entry (`{playerId, playerPoolEntry: {player}}`), a pool entry
/// (`{id, player}`) or a bare player object. Every field defaults on its own,
/// so a partially populated entry still yields a player.
///
/// # Examples
///
/// ```
/// use espn_fantasy::data_fetcher::processors::normalize_player;
/// use serde_json::json;
///
/// let player = normalize_player(&json!({"playerId": 7, "playerPoolEntry": {"player": {}}}));
/// assert_eq!(player.id, 7);
/// assert_eq!(player.injury_status, "ACTIVE");
/// ```
pub fn normalize_player(entry: &Value) -> Player {
    let player = player_object(entry);

    let injury_status = at(player, &["injuryStatus"])
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_INJURY_STATUS)
        .to_string();

    Player {
        id: player_id(entry, player),
        name: string_at(player, &["fullName"]),
        first_name: string_at(player, &["firstName"]),
        last_name: string_at(player, &["lastName"]),
        position_id: u32_at(player, &["defaultPositionId"]),
        pro_team_id: u32_at(player, &["proTeamId"]),
        injury_status,
        stats: PlayerStats {
            applied_total: f64_at(player, &["stats", "0", "appliedTotal"]),
            projected_total: f64_at(player, &["stats", "0", "projectedTotal"]),
            breakdown: number_map_at(player, &["stats", "0", "stats"]),
        },
        ownership: Ownership {
            percent_owned: f64_at(player, &["ownership", "percentOwned"]),
            percent_change: f64_at(player, &["ownership", "percentChange"]),
        },
    }
}

/// Normalizes every entry of a roster-like array.
pub fn normalize_players(entries: &[Value]) -> Vec<Player> {
    entries.iter().map(normalize_player).collect()
}

/// Players of a `{ roster: { entries } }` or `{ entries }` container.
pub fn normalize_roster(container: &Value) -> Vec<Player> {
    let entries = match at(container, &["roster", "entries"]) {
        Some(_) => array_at(container, &["roster", "entries"]),
        None => array_at(container, &["entries"]),
    };
    normalize_players(entries)
}

/// Players pool payloads arrive either as a bare array or as `{ players: [] }`.
pub fn normalize_player_pool(payload: &Value) -> Vec<Player> {
    match payload {
        Value::Array(entries) => normalize_players(entries),
        other => normalize_players(array_at(other, &["players"])),
    }
}

fn player_object(entry: &Value) -> &Value {
    at(entry, &["playerPoolEntry", "player"])
        .filter(|v| v.is_object())
        .or_else(|| at(entry, &["player"]).filter(|v| v.is_object()))
        .unwrap_or(entry)
}

fn player_id(entry: &Value, player: &Value) -> u64 {
    [
        u64_at(entry, &["playerId"]),
        u64_at(entry, &["id"]),
        u64_at(player, &["id"]),
    ]
    .into_iter()
    .find(|id| *id != 0)
    .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_optional_sections_default() {
        let entry = json!({
            "playerId": 3054211,
            "playerPoolEntry": {
                "player": {
                    "fullName": "Kyle Pitts",
                    "firstName": "Kyle",
                    "lastName": "Pitts",
                    "defaultPositionId": 4,
                    "proTeamId": 1
                }
            }
        });

        let player = normalize_player(&entry);
        assert_eq!(player.id, 3054211);
        assert_eq!(player.name, "Kyle Pitts");
        assert_eq!(player.position(), Some("TE"));
        assert_eq!(player.injury_status, "ACTIVE");
        assert_eq!(player.stats.applied_total, 0.0);
        assert_eq!(player.stats.projected_total, 0.0);
        assert!(player.stats.breakdown.is_empty());
        assert_eq!(player.ownership.percent_owned, 0.0);
        assert_eq!(player.ownership.percent_change, 0.0);
    }

    #[test]
    fn test_full_entry() {
        let entry = json!({
            "playerId": 4241389,
            "playerPoolEntry": {
                "player": {
                    "fullName": "CeeDee Lamb",
                    "defaultPositionId": 3,
                    "proTeamId": 6,
                    "injuryStatus": "QUESTIONABLE",
                    "stats": [
                        {"appliedTotal": 21.4, "projectedTotal": 18.9, "stats": {"42": 112.0, "43": 1.0}},
                        {"appliedTotal": 3.0}
                    ],
                    "ownership": {"percentOwned": 99.8, "percentChange": -0.1}
                }
            }
        });

        let player = normalize_player(&entry);
        assert_eq!(player.injury_status, "QUESTIONABLE");
        assert!(player.is_injured());
        assert_eq!(player.stats.applied_total, 21.4);
        assert_eq!(player.stats.projected_total, 18.9);
        assert_eq!(player.stats.breakdown.get("42"), Some(&112.0));
        assert_eq!(player.ownership.percent_owned, 99.8);
        assert_eq!(player.ownership.percent_change, -0.1);
    }

    #[test]
    fn test_pool_and_bare_shapes() {
        let pool = json!({"id": 15, "player": {"fullName": "Pool Player"}});
        let bare = json!({"id": 16, "fullName": "Bare Player"});

        assert_eq!(normalize_player(&pool).id, 15);
        assert_eq!(normalize_player(&pool).name, "Pool Player");
        assert_eq!(normalize_player(&bare).id, 16);
        assert_eq!(normalize_player(&bare).name, "Bare Player");
    }

    #[test]
    fn test_malformed_entries_never_abort_roster() {
        let roster = json!({
            "roster": {
                "entries": [
                    null,
                    "garbage",
                    {"playerId": "not-a-number", "playerPoolEntry": {"player": {"stats": "nope"}}},
                    {"playerId": 1, "playerPoolEntry": {"player": {"fullName": "Ok"}}}
                ]
            }
        });

        let players = normalize_roster(&roster);
        assert_eq!(players.len(), 4);
        assert!(players[..3].iter().all(|p| p.id == 0 && p.injury_status == "ACTIVE"));
        assert_eq!(players[3].name, "Ok");
    }

    #[test]
    fn test_player_pool_shapes() {
        let array = json!([{"id": 1}, {"id": 2}]);
        let wrapped = json!({"players": [{"id": 3}]});

        assert_eq!(normalize_player_pool(&array).len(), 2);
        assert_eq!(normalize_player_pool(&wrapped)[0].id, 3);
        assert!(normalize_player_pool(&json!(null)).is_empty());
    }
}
