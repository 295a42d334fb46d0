use crate::deck::{Card, Deck};
use crate::policy::SelectionPolicy;
use crate::stats::ReviewStats;
use crate::window::{NavigationError, NavigationWindow};
use std::collections::VecDeque;
use tracing::debug;

/// Which face of the current card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Front,
    Back,
}

impl CardFace {
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Playback state for one deck.
///
/// The player is the single owner of the navigation window: it holds the
/// authoritative window value and replaces it wholesale on every transition.
/// It keeps the forward path always one step pre-resolved, so a forward
/// swipe never waits on the selection policy mid-gesture.
pub struct Player {
    deck: Deck,
    policy: Box<dyn SelectionPolicy>,
    stats: ReviewStats,
    window: NavigationWindow<String>,
    /// Recently picked ids, handed to the policy so immediate repeats are
    /// avoided on decks large enough to allow it.
    recent: VecDeque<String>,
    avoid_recent: usize,
    flip_on_navigate: bool,
    pub face: CardFace,
}

impl Player {
    pub fn new(
        deck: Deck,
        mut policy: Box<dyn SelectionPolicy>,
        stats: ReviewStats,
        avoid_recent: usize,
        flip_on_navigate: bool,
    ) -> Self {
        let starting_id = policy.next_item(&deck, &stats, &[]);
        let mut player = Self {
            deck,
            policy,
            stats,
            window: NavigationWindow::new(starting_id.clone()),
            recent: VecDeque::new(),
            avoid_recent,
            flip_on_navigate,
            face: CardFace::Front,
        };
        player.remember(starting_id);
        player.stats.record_view(player.window.current_item());
        player.prefetch();
        player
    }

    /// The card currently displayed.
    pub fn current_card(&self) -> &Card {
        self.deck
            .get(self.window.current_item())
            .expect("window only holds ids picked from the deck")
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn stats(&self) -> &ReviewStats {
        &self.stats
    }

    /// Hands the stats back for persisting at the end of the session.
    pub fn into_stats(self) -> ReviewStats {
        self.stats
    }

    pub fn can_go_back(&self) -> bool {
        self.window.can_step_backward()
    }

    /// Moves to the next card.
    ///
    /// Re-enters the retained forward card when one is resident (after
    /// going back); otherwise consumes the pre-resolved look-ahead and asks
    /// the policy for a fresh one.
    pub fn go_forward(&mut self) -> Result<(), NavigationError> {
        if self.window.can_look_two_ahead() {
            self.window = self.window.step_forward_revisit()?;
        } else {
            let upcoming = self.pick_next();
            self.window = self.window.advance_with_next_upcoming(upcoming)?;
        }
        self.arrive();
        Ok(())
    }

    /// Moves back to the previous card, if one is still retained.
    pub fn go_back(&mut self) -> Result<(), NavigationError> {
        self.window = self.window.step_back()?;
        if self.flip_on_navigate {
            self.face = CardFace::Front;
        }
        debug!("Stepped back to card '{}'", self.window.current_item());
        Ok(())
    }

    /// Flips the current card between front and back.
    pub fn flip(&mut self) {
        self.face = self.face.flipped();
    }

    fn arrive(&mut self) {
        if self.flip_on_navigate {
            self.face = CardFace::Front;
        }
        self.stats.record_view(self.window.current_item());
        self.prefetch();
        debug!(
            "Showing card '{}' ({} views)",
            self.window.current_item(),
            self.stats.views(self.window.current_item())
        );
    }

    /// Keeps the one-ahead slot resolved.
    fn prefetch(&mut self) {
        if !self.window.can_step_forward() {
            let upcoming = self.pick_next();
            self.window = self.window.stay_with_upcoming(upcoming);
        }
    }

    fn pick_next(&mut self) -> String {
        let avoid: Vec<String> = self.recent.iter().cloned().collect();
        let id = self.policy.next_item(&self.deck, &self.stats, &avoid);
        self.remember(id.clone());
        id
    }

    fn remember(&mut self, id: String) {
        self.recent.push_back(id);
        while self.recent.len() > self.avoid_recent {
            self.recent.pop_front();
        }
    }
}
