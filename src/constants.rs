//! Application-wide constants and configuration values
//!
//! Upstream hosts, HTTP defaults, environment variable names and the small
//! lookup tables the normalizers use live here so they are easy to find.

use crate::data_fetcher::api::Sport;

/// Base of the fantasy games API. Sport codes are appended directly.
pub const FANTASY_BASE_ENDPOINT: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/";

/// Base of the fantasy news API. Sport codes are appended directly.
pub const NEWS_BASE_ENDPOINT: &str = "https://site.api.espn.com/apis/fantasy/v3/games/";

/// Seasons from this year on are served by the current-season URL family.
/// Earlier seasons start on the league history family.
pub const CURRENT_ENDPOINT_FIRST_YEAR: u16 = 2018;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// User agent sent with every upstream request
pub const USER_AGENT: &str = concat!("espn_fantasy/", env!("CARGO_PKG_VERSION"));

/// Request header carrying the JSON-encoded filter object
pub const FANTASY_FILTER_HEADER: &str = "x-fantasy-filter";

/// Cookie names used for private league access
pub mod cookies {
    pub const ESPN_S2: &str = "espn_s2";
    pub const SWID: &str = "SWID";
}

/// Upstream view names
pub mod views {
    pub const TEAM: &str = "mTeam";
    pub const ROSTER: &str = "mRoster";
    pub const MATCHUP: &str = "mMatchup";
    pub const MATCHUP_SCORE: &str = "mMatchupScore";
    pub const SETTINGS: &str = "mSettings";
    pub const STANDINGS: &str = "mStandings";
    pub const BOXSCORE: &str = "mBoxscore";
    pub const DRAFT_DETAIL: &str = "mDraftDetail";
    pub const PLAYERS_POOL: &str = "players_wl";
    pub const PRO_TEAM_SCHEDULES: &str = "proTeamSchedules_wl";
    pub const PLAYER_CARD: &str = "kona_playercard";
    pub const MESSAGE_BOARD: &str = "kona_league_messageboard";
}

/// Regular season length per sport, in scoring weeks
pub mod weeks {
    pub const NFL: u32 = 18;
    pub const NBA: u32 = 24;
    pub const NHL: u32 = 24;
    pub const MLB: u32 = 25;
}

/// Environment variable names
pub mod env_vars {
    pub const LEAGUE_ID: &str = "ESPN_FANTASY_LEAGUE_ID";
    pub const YEAR: &str = "ESPN_FANTASY_YEAR";
    pub const SPORT: &str = "ESPN_FANTASY_SPORT";
    pub const ESPN_S2: &str = "ESPN_S2";
    pub const SWID: &str = "ESPN_SWID";
    pub const LOG_FILE: &str = "ESPN_FANTASY_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "ESPN_FANTASY_HTTP_TIMEOUT";
}

/// Football player positions keyed by `defaultPositionId`
pub fn position_label(id: u32) -> Option<&'static str> {
    match id {
        1 => Some("QB"),
        2 => Some("RB"),
        3 => Some("WR"),
        4 => Some("TE"),
        5 => Some("K"),
        16 => Some("D/ST"),
        17 => Some("LB"),
        18 => Some("DL"),
        19 => Some("DB"),
        20 => Some("BENCH"),
        21 => Some("IR"),
        _ => None,
    }
}

/// Lineup slot labels keyed by `lineupSlotId`. Slot ids are numbered per
/// sport and do not line up with position ids.
pub fn lineup_slot_label(sport: Sport, slot_id: u32) -> Option<&'static str> {
    match sport {
        Sport::Nfl => football_slot(slot_id),
        Sport::Nba | Sport::Wnba => basketball_slot(slot_id),
        Sport::Nhl => hockey_slot(slot_id),
        Sport::Mlb => baseball_slot(slot_id),
    }
}

fn football_slot(slot_id: u32) -> Option<&'static str> {
    let label = match slot_id {
        0 => "QB",
        1 => "TQB",
        2 => "RB",
        3 => "RB/WR",
        4 => "WR",
        5 => "WR/TE",
        6 => "TE",
        7 => "OP",
        8 => "DT",
        9 => "DE",
        10 => "LB",
        11 => "DL",
        12 => "CB",
        13 => "S",
        14 => "DB",
        15 => "DP",
        16 => "D/ST",
        17 => "K",
        18 => "P",
        19 => "HC",
        20 => "BENCH",
        21 => "IR",
        23 => "RB/WR/TE",
        24 => "ER",
        _ => return None,
    };
    Some(label)
}

fn basketball_slot(slot_id: u32) -> Option<&'static str> {
    let label = match slot_id {
        0 => "PG",
        1 => "SG",
        2 => "SF",
        3 => "PF",
        4 => "C",
        5 => "G",
        6 => "F",
        7 => "SG/SF",
        8 => "G/F",
        9 => "PF/C",
        10 => "F/C",
        11 => "UT",
        12 => "BENCH",
        13 => "IR",
        _ => return None,
    };
    Some(label)
}

fn hockey_slot(slot_id: u32) -> Option<&'static str> {
    let label = match slot_id {
        0 => "C",
        1 => "LW",
        2 => "RW",
        3 => "F",
        4 => "D",
        5 => "G",
        6 => "UTIL",
        7 => "BENCH",
        8 => "IR",
        _ => return None,
    };
    Some(label)
}

fn baseball_slot(slot_id: u32) -> Option<&'static str> {
    let label = match slot_id {
        0 => "C",
        1 => "1B",
        2 => "2B",
        3 => "3B",
        4 => "SS",
        5 => "OF",
        6 => "2B/SS",
        7 => "1B/3B",
        8 => "LF",
        9 => "CF",
        10 => "RF",
        11 => "DH",
        12 => "UTIL",
        13 => "P",
        14 => "SP",
        15 => "RP",
        16 => "BENCH",
        17 => "IL",
        19 => "IF",
        _ => return None,
    };
    Some(label)
}

/// Recent activity message types keyed by upstream id
pub fn activity_label(id: u32) -> &'static str {
    match id {
        178 => "ADDED",
        179 => "DROPPED",
        180 => "ROSTER_MOVE",
        181 => "TRADED",
        239 => "WAIVER_ADDED",
        _ => "UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_labels() {
        assert_eq!(position_label(1), Some("QB"));
        assert_eq!(position_label(16), Some("D/ST"));
        assert_eq!(position_label(20), Some("BENCH"));
        assert_eq!(position_label(99), None);
    }

    #[test]
    fn test_football_slots_differ_from_positions() {
        let slots: Vec<_> = [0, 2, 4, 6, 17, 20, 23]
            .into_iter()
            .map(|id| lineup_slot_label(Sport::Nfl, id))
            .collect();
        assert_eq!(
            slots,
            vec![
                Some("QB"),
                Some("RB"),
                Some("WR"),
                Some("TE"),
                Some("K"),
                Some("BENCH"),
                Some("RB/WR/TE")
            ]
        );
        assert_eq!(lineup_slot_label(Sport::Nfl, 22), None);
    }

    #[test]
    fn test_basketball_slots() {
        assert_eq!(lineup_slot_label(Sport::Nba, 0), Some("PG"));
        assert_eq!(lineup_slot_label(Sport::Nba, 1), Some("SG"));
        assert_eq!(lineup_slot_label(Sport::Nba, 4), Some("C"));
        assert_eq!(lineup_slot_label(Sport::Nba, 12), Some("BENCH"));
        assert_eq!(lineup_slot_label(Sport::Wnba, 2), Some("SF"));
    }

    #[test]
    fn test_hockey_slots() {
        assert_eq!(lineup_slot_label(Sport::Nhl, 1), Some("LW"));
        assert_eq!(lineup_slot_label(Sport::Nhl, 5), Some("G"));
        assert_eq!(lineup_slot_label(Sport::Nhl, 7), Some("BENCH"));
        assert_eq!(lineup_slot_label(Sport::Nhl, 20), None);
    }

    #[test]
    fn test_baseball_slots() {
        assert_eq!(lineup_slot_label(Sport::Mlb, 1), Some("1B"));
        assert_eq!(lineup_slot_label(Sport::Mlb, 14), Some("SP"));
        assert_eq!(lineup_slot_label(Sport::Mlb, 16), Some("BENCH"));
        assert_eq!(lineup_slot_label(Sport::Mlb, 17), Some("IL"));
    }

    #[test]
    fn test_activity_labels() {
        assert_eq!(activity_label(178), "ADDED");
        assert_eq!(activity_label(239), "WAIVER_ADDED");
        assert_eq!(activity_label(1), "UNKNOWN");
    }
}
