use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-card review counters for one deck, fed to the selection policy and
/// persisted between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewStats {
    #[serde(default)]
    cards: HashMap<String, CardStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardStats {
    pub views: u32,
    pub last_viewed: DateTime<Utc>,
}

impl ReviewStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the card was shown.
    pub fn record_view(&mut self, id: &str) {
        let now = Utc::now();
        self.cards
            .entry(id.to_string())
            .and_modify(|entry| {
                entry.views += 1;
                entry.last_viewed = now;
            })
            .or_insert(CardStats {
                views: 1,
                last_viewed: now,
            });
    }

    /// How often the card has been shown. Zero for never-seen cards.
    pub fn views(&self, id: &str) -> u32 {
        self.cards.get(id).map(|entry| entry.views).unwrap_or(0)
    }

    /// Number of distinct cards seen at least once.
    pub fn seen_cards(&self) -> usize {
        self.cards.len()
    }

    /// Total views across all cards.
    pub fn total_views(&self) -> u64 {
        self.cards.values().map(|entry| entry.views as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_card_has_zero_views() {
        let stats = ReviewStats::new();
        assert_eq!(stats.views("a"), 0);
        assert_eq!(stats.seen_cards(), 0);
        assert_eq!(stats.total_views(), 0);
    }

    #[test]
    fn test_record_view_increments() {
        let mut stats = ReviewStats::new();
        stats.record_view("a");
        stats.record_view("a");
        stats.record_view("b");
        assert_eq!(stats.views("a"), 2);
        assert_eq!(stats.views("b"), 1);
        assert_eq!(stats.seen_cards(), 2);
        assert_eq!(stats.total_views(), 3);
    }
}
