use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One league transaction topic from the message board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    /// Epoch milliseconds as reported upstream
    pub date: i64,
    pub timestamp: Option<DateTime<Utc>>,
    pub actions: Vec<ActivityAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityAction {
    /// `ADDED`, `DROPPED`, `ROSTER_MOVE`, `TRADED`, `WAIVER_ADDED` or `UNKNOWN`
    pub kind: String,
    pub type_id: u32,
    pub team_id: u32,
    pub player_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub drafted: bool,
    pub in_progress: bool,
    pub picks: Vec<DraftPick>,
}

impl Draft {
    pub fn picks_for_team(&self, team_id: u32) -> impl Iterator<Item = &DraftPick> {
        self.picks.iter().filter(move |pick| pick.team_id == team_id)
    }

    pub fn keepers(&self) -> impl Iterator<Item = &DraftPick> {
        self.picks.iter().filter(|pick| pick.keeper)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPick {
    pub round: u32,
    pub pick: u32,
    pub overall: u32,
    pub team_id: u32,
    pub player_id: u64,
    pub keeper: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: u64,
    pub headline: String,
    pub story: String,
    pub published: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(overall: u32, team_id: u32, keeper: bool) -> DraftPick {
        DraftPick {
            round: 1,
            pick: overall,
            overall,
            team_id,
            player_id: 1000 + u64::from(overall),
            keeper,
        }
    }

    #[test]
    fn test_draft_filters() {
        let draft = Draft {
            drafted: true,
            in_progress: false,
            picks: vec![pick(1, 3, false), pick(2, 5, true), pick(3, 3, true)],
        };

        let team_three: Vec<u32> = draft.picks_for_team(3).map(|p| p.overall).collect();
        assert_eq!(team_three, vec![1, 3]);
        assert_eq!(draft.keepers().count(), 2);
    }
}
