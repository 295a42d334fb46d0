use std::fmt;

/// Number of physical slots in the ring buffer.
const CAPACITY: usize = 6;
/// Maximum number of items resident at once: the previous, current and
/// upcoming card. The remaining slots are guard cells and scratch space for
/// the two-ahead prefetch.
const WINDOW: usize = CAPACITY - 3;

/// Bounded navigation history for sequential playback.
///
/// A fixed ring of [`CAPACITY`] slots tracks the currently displayed item,
/// the retained neighbor behind it and the pre-resolved item ahead of it.
/// Stepping forward past the window evicts the oldest resident item, so
/// memory stays constant no matter how long playback runs.
///
/// The window is an immutable value: every transition borrows the previous
/// state and returns a fresh one. The caller keeps a single authoritative
/// value and replaces it wholesale on each transition.
///
/// Slots 0 and `CAPACITY - 1` are guard cells. They are never written by
/// forward motion; the emptiness of slot 0 is what lets backward stepping
/// tell "near the start of a young buffer" apart from "wrapped around a full
/// one" (see `step_backward_index`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationWindow<T> {
    /// Physical ring buffer. Exactly `occupied` slots hold `Some`.
    slots: [Option<T>; CAPACITY],
    /// Physical index of the currently displayed item. Always occupied.
    current: usize,
    /// Number of resident items, bounded by [`WINDOW`].
    occupied: usize,
}

/// Failures a caller can run into by navigating outside the resident window.
///
/// Both variants are caller misuse rather than environmental failure: the
/// matching `can_*` query reports ahead of time whether the transition is
/// possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// Forward navigation attempted into a slot never filled by a look-ahead.
    NoResolvedNextItem,
    /// Backward navigation attempted past the oldest retained item.
    NoPriorItem,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoResolvedNextItem => {
                write!(f, "no upcoming item has been resolved at this position")
            }
            Self::NoPriorItem => {
                write!(f, "no prior item is retained behind this position")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

impl<T: Clone> NavigationWindow<T> {
    /// Creates a window containing only the starting item.
    ///
    /// The item lands at physical index 1, leaving slot 0 empty so the
    /// backward wrap detection starts out unambiguous.
    pub fn new(starting_item: T) -> Self {
        let mut slots: [Option<T>; CAPACITY] = std::array::from_fn(|_| None);
        slots[1] = Some(starting_item);
        Self {
            slots,
            current: 1,
            occupied: 1,
        }
    }

    /// The currently displayed item.
    pub fn current_item(&self) -> &T {
        self.slots[self.current]
            .as_ref()
            .expect("current slot always holds an item")
    }

    /// Number of resident items, never more than the window bound.
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Whether the slot one step forward is already resolved.
    pub fn can_step_forward(&self) -> bool {
        self.slots[step_forward_index(self.current)].is_some()
    }

    /// Whether a retained item exists one step backward.
    pub fn can_step_backward(&self) -> bool {
        self.slots[self.step_backward_index(self.current)].is_some()
    }

    /// Whether both the one-ahead and two-ahead slots are resolved.
    ///
    /// The two-ahead slot is only meaningful when the one-ahead slot is
    /// resident too, so this implies [`Self::can_step_forward`].
    pub fn can_look_two_ahead(&self) -> bool {
        let next = step_forward_index(self.current);
        self.slots[next].is_some() && self.slots[step_forward_index(next)].is_some()
    }

    /// Fills the one-ahead slot with a resolved upcoming item without moving.
    ///
    /// Re-filling an already-resolved slot is allowed and overwrites it; the
    /// upstream selection policy may legitimately recompute the same
    /// position. When the window is full, the slot immediately beyond the new
    /// look-ahead is cleared, which evicts the oldest resident item when the
    /// ring has wrapped onto it.
    pub fn stay_with_upcoming(&self, item: T) -> Self {
        let mut next = self.clone();
        let next_idx = step_forward_index(self.current);
        if self.occupied == WINDOW {
            next.put(next_idx, item);
            next.evict(step_forward_index(next_idx));
        } else {
            next.put(next_idx, item);
        }
        next
    }

    /// Moves forward onto the previously resolved look-ahead item, storing
    /// `item` as the freshly resolved slot ahead of the new position.
    ///
    /// Fails with [`NavigationError::NoResolvedNextItem`] if no look-ahead
    /// fill resolved the immediate next item first; that is a protocol
    /// violation by the caller, not a normal runtime condition. When the
    /// window is full, the slot past the new look-ahead and the guard cell at
    /// index 0 are cleared, evicting what is now two steps behind.
    pub fn advance_with_next_upcoming(&self, item: T) -> Result<Self, NavigationError> {
        let next_idx = step_forward_index(self.current);
        if self.slots[next_idx].is_none() {
            return Err(NavigationError::NoResolvedNextItem);
        }
        let two_ahead_idx = step_forward_index(next_idx);
        let three_ahead_idx = step_forward_index(two_ahead_idx);

        let mut next = self.clone();
        if self.occupied == WINDOW {
            next.put(two_ahead_idx, item);
            next.evict(three_ahead_idx);
            next.evict(0);
        } else {
            next.put(two_ahead_idx, item);
        }
        next.current = next_idx;
        Ok(next)
    }

    /// Moves one step backward through retained history.
    ///
    /// No eviction happens on backward movement; only forward movement
    /// evicts. Fails with [`NavigationError::NoPriorItem`] past the oldest
    /// retained item.
    pub fn step_back(&self) -> Result<Self, NavigationError> {
        let idx = self.step_backward_index(self.current);
        if self.slots[idx].is_none() {
            return Err(NavigationError::NoPriorItem);
        }
        let mut next = self.clone();
        next.current = idx;
        Ok(next)
    }

    /// Re-enters an already-resident forward slot, leaving all slots as they
    /// are.
    ///
    /// Used after stepping back, when the forward item is still retained and
    /// no new look-ahead needs to be supplied. Fails with
    /// [`NavigationError::NoResolvedNextItem`] past the furthest resolved
    /// item.
    pub fn step_forward_revisit(&self) -> Result<Self, NavigationError> {
        let idx = step_forward_index(self.current);
        if self.slots[idx].is_none() {
            return Err(NavigationError::NoResolvedNextItem);
        }
        let mut next = self.clone();
        next.current = idx;
        Ok(next)
    }

    /// Writes `item` into `idx`, keeping the occupancy count truthful when
    /// the slot was already filled.
    fn put(&mut self, idx: usize, item: T) {
        if self.slots[idx].is_none() {
            self.occupied += 1;
        }
        self.slots[idx] = Some(item);
    }

    /// Clears `idx` if occupied. Clearing an empty slot is a no-op.
    fn evict(&mut self, idx: usize) {
        if self.slots[idx].take().is_some() {
            self.occupied -= 1;
        }
    }

    /// Backward neighbor of `i` in the ring.
    ///
    /// An empty slot 0 signals that the buffer has not wrapped, so backward
    /// motion from index 1 jumps to the other end of the active ring. Once
    /// playback has filled and wrapped the ring, eviction keeps slot 0
    /// cleared deliberately so this detection stays valid.
    fn step_backward_index(&self, i: usize) -> usize {
        if i == 1 && self.slots[0].is_none() {
            CAPACITY - 2
        } else {
            i - 1
        }
    }
}

/// Forward neighbor of `i` in the ring.
///
/// Index 0 and `CAPACITY - 1` are never produced as forward targets; the
/// active ring is `1..=CAPACITY - 2`.
fn step_forward_index(i: usize) -> usize {
    if i == CAPACITY - 2 { 1 } else { i + 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(id: &str) -> NavigationWindow<String> {
        NavigationWindow::new(id.to_string())
    }

    #[test]
    fn test_new_window_tracks_single_item() {
        let w = window("f1");
        assert_eq!(w.current_item(), "f1");
        assert_eq!(w.occupied_count(), 1);
        assert!(!w.can_step_backward());
        assert!(!w.can_step_forward());
        assert!(!w.can_look_two_ahead());
    }

    #[test]
    fn test_lookahead_fill_does_not_move_current() {
        let w = window("f1").stay_with_upcoming("f2".into());
        assert_eq!(w.current_item(), "f1");
        assert_eq!(w.occupied_count(), 2);
        assert!(w.can_step_forward());
        assert!(!w.can_step_backward());
    }

    #[test]
    fn test_advance_consumes_lookahead() {
        let w = window("f1").stay_with_upcoming("f2".into());
        let w = w.advance_with_next_upcoming("f3".into()).unwrap();
        assert_eq!(w.current_item(), "f2");
        assert_eq!(w.occupied_count(), 3);
        assert!(w.can_step_backward());
        // The advance itself resolved the new one-ahead slot.
        assert!(w.can_step_forward());
        assert!(!w.can_look_two_ahead());
    }

    #[test]
    fn test_advance_requires_resolved_next() {
        let w = window("f1");
        assert_eq!(
            w.advance_with_next_upcoming("f2".into()),
            Err(NavigationError::NoResolvedNextItem)
        );
    }

    #[test]
    fn test_step_back_restores_previous_item() {
        let w = window("f1").stay_with_upcoming("f2".into());
        let advanced = w.advance_with_next_upcoming("f3".into()).unwrap();
        let back = advanced.step_back().unwrap();
        assert_eq!(back.current_item(), "f1");
        // Backward movement never evicts.
        assert_eq!(back.occupied_count(), advanced.occupied_count());
    }

    #[test]
    fn test_step_back_then_revisit_round_trip() {
        let w = window("f1").stay_with_upcoming("f2".into());
        let w = w.advance_with_next_upcoming("f3".into()).unwrap();
        let w = w.step_back().unwrap();
        let w = w.step_forward_revisit().unwrap();
        assert_eq!(w.current_item(), "f2");
        assert_eq!(w.occupied_count(), 3);
    }

    #[test]
    fn test_revisit_past_frontier_fails() {
        let w = window("f1").stay_with_upcoming("f2".into());
        let w = w.advance_with_next_upcoming("f3".into()).unwrap();
        // "f3" is resolved one step ahead, so one revisit succeeds.
        let w = w.step_forward_revisit().unwrap();
        assert_eq!(w.current_item(), "f3");
        // Nothing is resolved beyond "f3".
        assert_eq!(
            w.step_forward_revisit(),
            Err(NavigationError::NoResolvedNextItem)
        );
    }

    #[test]
    fn test_step_back_past_oldest_fails() {
        let w = window("f1");
        assert_eq!(w.step_back(), Err(NavigationError::NoPriorItem));

        let w = w.stay_with_upcoming("f2".into());
        let w = w.advance_with_next_upcoming("f3".into()).unwrap();
        let w = w.step_back().unwrap();
        assert_eq!(w.current_item(), "f1");
        assert_eq!(w.step_back(), Err(NavigationError::NoPriorItem));
    }

    #[test]
    fn test_full_window_advance_evicts_oldest() {
        let w = window("f1").stay_with_upcoming("f2".into());
        let w = w.advance_with_next_upcoming("f3".into()).unwrap();
        let w = w.advance_with_next_upcoming("f4".into()).unwrap();
        assert_eq!(w.current_item(), "f3");
        assert_eq!(w.occupied_count(), 3);
        // "f1" is gone; only "f2" remains behind.
        let back = w.step_back().unwrap();
        assert_eq!(back.current_item(), "f2");
        assert_eq!(back.step_back(), Err(NavigationError::NoPriorItem));
    }

    #[test]
    fn test_lookahead_refill_is_idempotent() {
        let once = window("f1").stay_with_upcoming("f2".into());
        let twice = once.stay_with_upcoming("f2".into());
        assert_eq!(once.current_item(), twice.current_item());
        assert_eq!(once.occupied_count(), twice.occupied_count());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_lookahead_refill_replaces_pending_item() {
        let w = window("f1").stay_with_upcoming("f2".into());
        let w = w.stay_with_upcoming("f9".into());
        assert_eq!(w.occupied_count(), 2);
        let w = w.advance_with_next_upcoming("f3".into()).unwrap();
        assert_eq!(w.current_item(), "f9");
    }

    #[test]
    fn test_occupancy_bounded_after_long_forward_walk() {
        let mut w = window("c0").stay_with_upcoming("c1".into());
        for i in 2..50 {
            w = w.advance_with_next_upcoming(format!("c{i}")).unwrap();
            assert!(w.occupied_count() <= 3);
        }
        assert_eq!(w.occupied_count(), 3);
        assert_eq!(w.current_item(), "c48");
        assert!(w.can_step_forward());
        assert!(w.can_step_backward());
    }

    #[test]
    fn test_occupancy_stays_constant_once_full() {
        let mut w = window("c0").stay_with_upcoming("c1".into());
        w = w.advance_with_next_upcoming("c2".into()).unwrap();
        assert_eq!(w.occupied_count(), 3);
        for i in 3..20 {
            w = w.advance_with_next_upcoming(format!("c{i}")).unwrap();
            assert_eq!(w.occupied_count(), 3);
            let back = w.step_back().unwrap();
            assert_eq!(back.occupied_count(), 3);
        }
    }

    #[test]
    fn test_back_navigation_across_ring_wrap() {
        // Walk far enough that the current index wraps from the end of the
        // active ring back to its start, then navigate backward across the
        // physical boundary.
        let mut w = window("c0").stay_with_upcoming("c1".into());
        for i in 2..=6 {
            w = w.advance_with_next_upcoming(format!("c{i}")).unwrap();
        }
        assert_eq!(w.current_item(), "c5");
        let back = w.step_back().unwrap();
        assert_eq!(back.current_item(), "c4");
        let forward = back.step_forward_revisit().unwrap();
        assert_eq!(forward.current_item(), "c5");
    }

    #[test]
    fn test_current_item_present_through_mixed_walk() {
        let mut w = window("c0").stay_with_upcoming("c1".into());
        let mut n = 2;
        for step in 0..60 {
            w = match step % 4 {
                0 | 1 => {
                    let next = w.advance_with_next_upcoming(format!("c{n}")).unwrap();
                    n += 1;
                    next
                }
                2 => w.step_back().unwrap(),
                _ => w.step_forward_revisit().unwrap(),
            };
            assert!(!w.current_item().is_empty());
            assert!(w.occupied_count() >= 1 && w.occupied_count() <= 3);
        }
    }

    #[test]
    fn test_two_ahead_query_requires_both_slots() {
        let w = window("f1").stay_with_upcoming("f2".into());
        assert!(w.can_step_forward());
        assert!(!w.can_look_two_ahead());

        let w = w.advance_with_next_upcoming("f3".into()).unwrap();
        let back = w.step_back().unwrap();
        // From "f1", both "f2" and "f3" are resident ahead.
        assert_eq!(back.current_item(), "f1");
        assert!(back.can_look_two_ahead());
    }

    #[test]
    fn test_lookahead_fill_at_frontier_of_full_window_evicts() {
        let w = window("f1").stay_with_upcoming("f2".into());
        let w = w.advance_with_next_upcoming("f3".into()).unwrap();
        // Move onto the frontier without supplying anything new.
        let w = w.step_forward_revisit().unwrap();
        assert_eq!(w.current_item(), "f3");
        assert!(!w.can_step_forward());
        // Resolving the next item from here must push the oldest ("f1") out.
        let w = w.stay_with_upcoming("f4".into());
        assert_eq!(w.occupied_count(), 3);
        let back = w.step_back().unwrap();
        assert_eq!(back.current_item(), "f2");
        assert_eq!(back.step_back(), Err(NavigationError::NoPriorItem));
    }

    #[test]
    fn test_advance_after_back_overwrites_stale_future() {
        let w = window("f1").stay_with_upcoming("f2".into());
        let w = w.advance_with_next_upcoming("f3".into()).unwrap();
        let w = w.advance_with_next_upcoming("f4".into()).unwrap();
        let w = w.step_back().unwrap();
        assert_eq!(w.current_item(), "f2");
        // Advancing again with a fresh pick replaces the retained "f4".
        let w = w.advance_with_next_upcoming("f5".into()).unwrap();
        assert_eq!(w.current_item(), "f3");
        let w = w.step_forward_revisit().unwrap();
        assert_eq!(w.current_item(), "f5");
    }

    #[test]
    fn test_error_display_messages() {
        assert_eq!(
            NavigationError::NoResolvedNextItem.to_string(),
            "no upcoming item has been resolved at this position"
        );
        assert_eq!(
            NavigationError::NoPriorItem.to_string(),
            "no prior item is retained behind this position"
        );
    }
}
