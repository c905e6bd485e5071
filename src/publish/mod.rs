// src/publish/mod.rs
//! Result publishing: flatten the generation result into a seven-field
//! record and hand it to the spreadsheet webhook. Best-effort only.
pub mod sheet;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::generate::GenerationResult;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wire payload for the spreadsheet endpoint. Posts are flattened into three
/// positional slots; an absent slot is an empty string, never a missing key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishRecord {
    pub timestamp: String,
    pub selected_news: String,
    pub selected_news_url: String,
    pub reason: String,
    pub post1: String,
    pub post2: String,
    pub post3: String,
}

/// Flatten a `GenerationResult` into a `PublishRecord` stamped with `now`
/// (local time, spreadsheet-friendly format).
pub fn build_record(result: &GenerationResult, now: DateTime<Local>) -> PublishRecord {
    let slot = |i: usize| {
        result
            .posts
            .get(i)
            .map(|p| p.text.clone())
            .unwrap_or_default()
    };
    PublishRecord {
        timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        selected_news: result.selected_news.clone(),
        selected_news_url: result.selected_news_url.clone(),
        reason: result.reason.clone(),
        post1: slot(0),
        post2: slot(1),
        post3: slot(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::PostDraft;
    use chrono::TimeZone;

    fn result_with_posts(n: usize) -> GenerationResult {
        GenerationResult {
            selected_news: "選定ニュース".into(),
            selected_news_url: "https://news.test/sel".into(),
            reason: "最も話題性が高い".into(),
            posts: (0..n)
                .map(|i| PostDraft {
                    text: format!("draft {i}"),
                    format_type: "考察型".into(),
                    hook: "h".into(),
                })
                .collect(),
        }
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn timestamp_uses_spreadsheet_format() {
        let rec = build_record(&result_with_posts(3), fixed_now());
        assert_eq!(rec.timestamp, "2025-01-02 03:04:05");
    }

    #[test]
    fn missing_post_slots_become_empty_strings() {
        let rec = build_record(&result_with_posts(1), fixed_now());
        assert_eq!(rec.post1, "draft 0");
        assert_eq!(rec.post2, "");
        assert_eq!(rec.post3, "");
    }

    #[test]
    fn serialized_record_always_carries_all_seven_keys() {
        let rec = build_record(&result_with_posts(0), fixed_now());
        let json = serde_json::to_value(&rec).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "timestamp",
            "selected_news",
            "selected_news_url",
            "reason",
            "post1",
            "post2",
            "post3",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
            assert!(obj[key].is_string());
        }
    }

    #[test]
    fn extra_posts_beyond_three_are_ignored() {
        let rec = build_record(&result_with_posts(5), fixed_now());
        assert_eq!(rec.post3, "draft 2");
    }
}
