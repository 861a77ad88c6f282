use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Injury status used when the upstream record has none.
pub const DEFAULT_INJURY_STATUS: &str = "ACTIVE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u64,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub position_id: u32,
    pub pro_team_id: u32,
    pub injury_status: String,
    pub stats: PlayerStats,
    pub ownership: Ownership,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            id: 0,
            name: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            position_id: 0,
            pro_team_id: 0,
            injury_status: DEFAULT_INJURY_STATUS.to_string(),
            stats: PlayerStats::default(),
            ownership: Ownership::default(),
        }
    }
}

impl Player {
    /// Position label such as `QB`, if the position id is known.
    pub fn position(&self) -> Option<&'static str> {
        crate::constants::position_label(self.position_id)
    }

    pub fn is_injured(&self) -> bool {
        self.injury_status != DEFAULT_INJURY_STATUS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub applied_total: f64,
    pub projected_total: f64,
    /// Stat id to value, as reported by the upstream
    pub breakdown: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ownership {
    pub percent_owned: f64,
    pub percent_change: f64,
}
