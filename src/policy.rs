use crate::deck::{Card, Deck};
use crate::stats::ReviewStats;
use tracing::debug;

/// Source of "what comes next" during playback.
///
/// The navigation window never chooses items itself; the player asks a
/// policy for the id of the next card to materialize whenever the forward
/// path needs resolving.
pub trait SelectionPolicy {
    /// Picks the next card id. `avoid` lists recently shown ids the policy
    /// should skip when the deck is large enough to allow it.
    fn next_item(&mut self, deck: &Deck, stats: &ReviewStats, avoid: &[String]) -> String;
}

/// Weighted random selection.
///
/// Each card's base weight is damped by how often it has been viewed and
/// boosted by `unseen_bias` while it has never been shown, so fresh cards
/// surface early and over-reviewed cards fade without ever disappearing.
pub struct WeightedPolicy {
    rng: SeededRng,
    unseen_bias: f64,
}

impl WeightedPolicy {
    pub fn new(seed: u64, unseen_bias: f64) -> Self {
        Self {
            rng: SeededRng::new(seed),
            unseen_bias,
        }
    }

    /// Seeds from the wall clock for non-reproducible sessions.
    pub fn from_clock(unseen_bias: f64) -> Self {
        let seed = chrono::Utc::now().timestamp_millis() as u64;
        Self::new(seed, unseen_bias)
    }

    fn effective_weight(&self, card: &Card, stats: &ReviewStats) -> f64 {
        let views = stats.views(&card.id);
        let mut weight = card.weight / (1.0 + views as f64);
        if views == 0 {
            weight *= self.unseen_bias;
        }
        weight
    }
}

impl SelectionPolicy for WeightedPolicy {
    fn next_item(&mut self, deck: &Deck, stats: &ReviewStats, avoid: &[String]) -> String {
        let mut candidates: Vec<&Card> = deck
            .cards
            .iter()
            .filter(|card| !avoid.contains(&card.id))
            .collect();
        // A tiny deck can be entirely covered by the avoid list; repeats are
        // better than stalling.
        if candidates.is_empty() {
            candidates = deck.cards.iter().collect();
        }

        let weights: Vec<f64> = candidates
            .iter()
            .map(|card| self.effective_weight(card, stats))
            .collect();
        let total: f64 = weights.iter().sum();

        let mut target = self.rng.next_f64() * total;
        for (card, weight) in candidates.iter().zip(&weights) {
            target -= weight;
            if target <= 0.0 {
                debug!("Selected card '{}' (weight {:.3}/{:.3})", card.id, weight, total);
                return card.id.clone();
            }
        }
        // Floating point slack can leave a hair of `target` after the loop.
        candidates[candidates.len() - 1].id.clone()
    }
}

/// Simple LCG PRNG, deterministic for a given seed.
#[derive(Debug, Clone)]
struct SeededRng {
    state: u64,
}

impl SeededRng {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(ids: &[&str]) -> Deck {
        let cards = ids
            .iter()
            .map(|id| Card {
                id: id.to_string(),
                front: "q".to_string(),
                back: "a".to_string(),
                weight: 1.0,
                tags: Vec::new(),
            })
            .collect();
        Deck::from_cards("test", cards).unwrap()
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let deck = deck_of(&["a", "b", "c", "d"]);
        let stats = ReviewStats::new();
        let mut first = WeightedPolicy::new(42, 2.0);
        let mut second = WeightedPolicy::new(42, 2.0);
        for _ in 0..20 {
            assert_eq!(
                first.next_item(&deck, &stats, &[]),
                second.next_item(&deck, &stats, &[])
            );
        }
    }

    #[test]
    fn test_avoid_list_is_respected() {
        let deck = deck_of(&["a", "b", "c"]);
        let stats = ReviewStats::new();
        let mut policy = WeightedPolicy::new(7, 2.0);
        let avoid = vec!["a".to_string(), "b".to_string()];
        for _ in 0..20 {
            assert_eq!(policy.next_item(&deck, &stats, &avoid), "c");
        }
    }

    #[test]
    fn test_fully_avoided_deck_still_picks() {
        let deck = deck_of(&["a"]);
        let stats = ReviewStats::new();
        let mut policy = WeightedPolicy::new(7, 2.0);
        let avoid = vec!["a".to_string()];
        assert_eq!(policy.next_item(&deck, &stats, &avoid), "a");
    }

    #[test]
    fn test_unseen_cards_are_favored() {
        let deck = deck_of(&["seen", "fresh"]);
        let mut stats = ReviewStats::new();
        for _ in 0..9 {
            stats.record_view("seen");
        }
        let mut policy = WeightedPolicy::new(1234, 2.0);
        let fresh_picks = (0..200)
            .filter(|_| policy.next_item(&deck, &stats, &[]) == "fresh")
            .count();
        // Effective weights are 2.0 vs 0.1, so "fresh" should dominate.
        assert!(fresh_picks > 150, "fresh picked only {fresh_picks}/200 times");
    }
}
