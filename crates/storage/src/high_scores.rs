use chrono::{SecondsFormat, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

/// Number of entries kept.
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighScore {
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    /// ISO-8601 timestamp
    pub date: String,
}

impl HighScore {
    /// Record stamped with the current time.
    pub fn now(score: u32, level: u32, lines_cleared: u32) -> Self {
        Self {
            score,
            level,
            lines_cleared,
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Add `entry`, keep the table sorted by score (descending) and capped.
///
/// Equal scores keep insertion order, so an older entry outranks a newer tie.
pub fn insert_high_score(table: &mut Vec<HighScore>, entry: HighScore) {
    table.push(entry);
    table.sort_by(|a, b| b.score.cmp(&a.score));
    table.truncate(MAX_HIGH_SCORES);
}

/// Whether `score` would enter a table of this content.
pub fn qualifies(table: &[HighScore], score: u32) -> bool {
    table.len() < MAX_HIGH_SCORES || table.iter().any(|entry| score > entry.score)
}

/// Decode a stored table, or an empty one when the record is malformed.
pub fn parse_high_scores(raw: &str) -> Vec<HighScore> {
    match serde_json::from_str::<Vec<HighScore>>(raw) {
        Ok(mut table) => {
            table.sort_by(|a, b| b.score.cmp(&a.score));
            table.truncate(MAX_HIGH_SCORES);
            table
        }
        Err(err) => {
            warn!("stored high scores are malformed, starting empty: {}", err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: u32) -> HighScore {
        HighScore {
            score,
            level: 1,
            lines_cleared: 0,
            date: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_sorted_descending_and_capped() {
        let mut table = Vec::new();
        for score in [50, 10, 900, 300, 70, 20, 5, 1000, 40, 60, 80, 30] {
            insert_high_score(&mut table, entry(score));
        }
        let scores: Vec<u32> = table.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![1000, 900, 300, 80, 70, 60, 50, 40, 30, 20]);
    }

    #[test]
    fn test_qualifies() {
        let mut table: Vec<HighScore> = (1..=10).map(|s| entry(s * 100)).collect();
        table.reverse();
        assert!(!qualifies(&table, 100));
        assert!(qualifies(&table, 101));
        assert!(qualifies(&table[..3], 0));
    }

    #[test]
    fn test_record_json_shape() {
        let value = serde_json::to_value(entry(7)).unwrap();
        assert_eq!(value["linesCleared"], 0);
        assert_eq!(value["date"], "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_now_stamps_iso_date() {
        let record = HighScore::now(1, 2, 3);
        assert!(chrono::DateTime::parse_from_rfc3339(&record.date).is_ok());
        assert!(record.date.ends_with('Z'));
    }

    #[test]
    fn test_malformed_table_is_empty() {
        assert!(parse_high_scores("{oops").is_empty());
        assert!(parse_high_scores(r#"[{"score": "x"}]"#).is_empty());
    }
}
