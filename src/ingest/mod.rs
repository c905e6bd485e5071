// src/ingest/mod.rs
//! News collection: one search per configured query, URL dedup, bounded
//! candidate list. A failing query is logged and skipped, never fatal.
pub mod tavily;
pub mod types;

use std::collections::HashSet;

use crate::ingest::types::{NewsItem, SearchProvider};

/// Character budget for a single item summary.
pub const SUMMARY_MAX_CHARS: usize = 300;

/// Truncate to at most `max` characters. Counts code points, never bytes:
/// summaries are mostly Japanese and a byte slice would split a character.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

/// Drop items whose URL has already been seen (first occurrence wins) and cap
/// the list length. Insertion order is preserved, so with queries run in
/// order the survivors are the first-discovered items across all queries.
pub fn dedup_by_url(raw: Vec<NewsItem>, cap: usize) -> Vec<NewsItem> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept = Vec::with_capacity(raw.len().min(cap));
    for item in raw {
        if !seen.insert(item.url.clone()) {
            continue;
        }
        kept.push(item);
        if kept.len() == cap {
            break;
        }
    }
    kept
}

/// Run every query in order against one provider and return the deduplicated,
/// capped candidate list. Per-query failures are logged and skipped.
pub async fn collect_news(
    provider: &dyn SearchProvider,
    queries: &[String],
    cap: usize,
) -> Vec<NewsItem> {
    let mut raw = Vec::new();
    for query in queries {
        match provider.search(query).await {
            Ok(mut items) => {
                tracing::debug!(query = %query, count = items.len(), "search ok");
                raw.append(&mut items);
            }
            Err(e) => {
                tracing::warn!(error = ?e, query = %query, provider = provider.name(), "search error");
            }
        }
    }
    dedup_by_url(raw, cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, url: &str) -> NewsItem {
        NewsItem {
            title: title.into(),
            summary: String::new(),
            url: url.into(),
        }
    }

    #[test]
    fn truncate_chars_is_codepoint_safe() {
        let s = "採用AIエージェント";
        assert_eq!(truncate_chars(s, 4), "採用AI");
        assert_eq!(truncate_chars(s, 100), s);
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let raw = vec![
            item("a", "https://x.test/1"),
            item("b", "https://x.test/2"),
            item("a-again", "https://x.test/1"),
        ];
        let kept = dedup_by_url(raw, 10);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].title, "a");
        assert_eq!(kept[1].title, "b");
    }

    #[test]
    fn dedup_caps_at_limit_in_insertion_order() {
        let raw: Vec<NewsItem> = (0..15)
            .map(|i| item(&format!("t{i}"), &format!("https://x.test/{i}")))
            .collect();
        let kept = dedup_by_url(raw, 10);
        assert_eq!(kept.len(), 10);
        assert_eq!(kept[0].title, "t0");
        assert_eq!(kept[9].title, "t9");
    }
}
