use super::json::{array_at, at, bool_at, i64_at, id_string_at, string_at, u32_at, u64_at};
use crate::constants::activity_label;
use crate::data_fetcher::models::{Activity, ActivityAction, Draft, DraftPick, NewsItem};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Recent league activity from the message board `communication` payload.
pub fn normalize_activity(payload: &Value) -> Vec<Activity> {
    array_at(payload, &["topics"])
        .iter()
        .map(|topic| {
            let date = i64_at(topic, &["date"]);
            Activity {
                id: id_string_at(topic, &["id"]),
                date,
                timestamp: (date > 0)
                    .then(|| DateTime::<Utc>::from_timestamp_millis(date))
                    .flatten(),
                actions: array_at(topic, &["messages"])
                    .iter()
                    .map(normalize_action)
                    .collect(),
            }
        })
        .collect()
}

fn normalize_action(message: &Value) -> ActivityAction {
    let type_id = u32_at(message, &["messageTypeId"]);
    // team id lives under `to` for trades and `for` otherwise
    let team_id = match u32_at(message, &["for"]) {
        0 => u32_at(message, &["to"]),
        id => id,
    };

    ActivityAction {
        kind: activity_label(type_id).to_string(),
        type_id,
        team_id,
        player_id: u64_at(message, &["targetId"]),
    }
}

/// Draft state and picks from the `mDraftDetail` view.
pub fn normalize_draft(payload: &Value) -> Draft {
    let detail = at(payload, &["draftDetail"]).unwrap_or(&Value::Null);
    Draft {
        drafted: bool_at(detail, &["drafted"]),
        in_progress: bool_at(detail, &["inProgress"]),
        picks: array_at(detail, &["picks"])
            .iter()
            .map(|pick| DraftPick {
                round: u32_at(pick, &["roundId"]),
                pick: u32_at(pick, &["roundPickNumber"]),
                overall: u32_at(pick, &["overallPickNumber"]),
                team_id: u32_at(pick, &["teamId"]),
                player_id: u64_at(pick, &["playerId"]),
                keeper: bool_at(pick, &["keeper"]),
            })
            .collect(),
    }
}

/// Player news feed. The news endpoint answers with `{ feed: [...] }`,
/// sometimes wrapped in an array of one such object.
pub fn normalize_news(payload: &Value) -> Vec<NewsItem> {
    let feed = match payload {
        Value::Array(items) => items
            .iter()
            .find_map(|item| at(item, &["feed"]).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or(items.as_slice()),
        other => array_at(other, &["feed"]),
    };

    feed.iter()
        .filter(|item| item.is_object())
        .map(|item| NewsItem {
            id: u64_at(item, &["id"]),
            headline: string_at(item, &["headline"]),
            story: string_at(item, &["story"]),
            published: string_at(item, &["published"]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_activity_topics() {
        let payload = json!({
            "topics": [
                {
                    "id": "abc-1",
                    "date": 1_700_000_000_000i64,
                    "messages": [
                        {"messageTypeId": 178, "for": 4, "targetId": 3916387},
                        {"messageTypeId": 179, "for": 4, "targetId": 2976499},
                        {"messageTypeId": 244, "to": 7, "targetId": 1}
                    ]
                },
                {"id": 42}
            ]
        });

        let activity = normalize_activity(&payload);
        assert_eq!(activity.len(), 2);

        let first = &activity[0];
        assert_eq!(first.id, "abc-1");
        assert_eq!(
            first.timestamp.map(|t| t.to_rfc3339()),
            Some("2023-11-14T22:13:20+00:00".to_string())
        );
        let kinds: Vec<&str> = first.actions.iter().map(|a| a.kind.as_str()).collect();
        assert_eq!(kinds, vec!["ADDED", "DROPPED", "UNKNOWN"]);
        assert_eq!(first.actions[2].team_id, 7);

        assert_eq!(activity[1].id, "42");
        assert!(activity[1].timestamp.is_none());
        assert!(activity[1].actions.is_empty());
    }

    #[test]
    fn test_draft() {
        let payload = json!({
            "draftDetail": {
                "drafted": true,
                "inProgress": false,
                "picks": [
                    {"roundId": 1, "roundPickNumber": 1, "overallPickNumber": 1, "teamId": 3, "playerId": 4262921, "keeper": true},
                    {"roundId": 1, "roundPickNumber": 2, "overallPickNumber": 2, "teamId": 5}
                ]
            }
        });

        let draft = normalize_draft(&payload);
        assert!(draft.drafted);
        assert_eq!(draft.picks.len(), 2);
        assert_eq!(draft.keepers().count(), 1);
        assert_eq!(draft.picks[1].player_id, 0);
        assert!(!draft.picks[1].keeper);
    }

    #[test]
    fn test_draft_missing_detail() {
        assert_eq!(normalize_draft(&json!({})), Draft::default());
    }

    #[test]
    fn test_news_shapes() {
        let object = json!({"feed": [{"id": 1, "headline": "Limited in practice"}]});
        let wrapped = json!([{"feed": [{"id": 2, "headline": "Out for season"}]}]);
        let bare = json!([{"id": 3, "headline": "Returns"}, "junk"]);

        assert_eq!(normalize_news(&object)[0].headline, "Limited in practice");
        assert_eq!(normalize_news(&wrapped)[0].id, 2);
        assert_eq!(normalize_news(&bare).len(), 1);
        assert!(normalize_news(&json!(null)).is_empty());
    }
}
