use riffle::deck::{Card, Deck};
use riffle::player::{CardFace, Player};
use riffle::policy::WeightedPolicy;
use riffle::stats::ReviewStats;

fn sample_deck(size: usize) -> Deck {
    let cards = (0..size)
        .map(|n| Card {
            id: format!("card-{n:03}"),
            front: format!("Question {n}"),
            back: format!("Answer {n}"),
            weight: 1.0,
            tags: Vec::new(),
        })
        .collect();
    Deck::from_cards("Integration deck", cards).unwrap()
}

fn player(size: usize, seed: u64) -> Player {
    Player::new(
        sample_deck(size),
        Box::new(WeightedPolicy::new(seed, 2.0)),
        ReviewStats::new(),
        3,
        true,
    )
}

#[test]
fn long_session_keeps_history_bounded() {
    let mut player = player(20, 7);

    for _ in 0..100 {
        player.go_forward().unwrap();
        // The current card always resolves against the deck.
        assert!(!player.current_card().front.is_empty());
    }
    // Construction plus every forward arrival is one view.
    assert_eq!(player.stats().total_views(), 101);

    // Only the immediately preceding card is retained once the window is
    // saturated.
    player.go_back().unwrap();
    assert!(player.go_back().is_err());
}

#[test]
fn back_and_forward_return_to_the_same_card() {
    let mut player = player(10, 21);
    for _ in 0..5 {
        player.go_forward().unwrap();
    }
    let here = player.current_card().id.clone();

    player.go_back().unwrap();
    player.go_forward().unwrap();
    assert_eq!(player.current_card().id, here);

    let previous = {
        player.go_back().unwrap();
        let id = player.current_card().id.clone();
        player.go_forward().unwrap();
        id
    };
    assert_ne!(previous, here);
}

#[test]
fn flipping_shows_both_faces() {
    let mut player = player(5, 3);
    assert_eq!(player.face, CardFace::Front);
    player.flip();
    assert_eq!(player.face, CardFace::Back);
    player.flip();
    assert_eq!(player.face, CardFace::Front);

    // Navigation resets to the front face.
    player.flip();
    player.go_forward().unwrap();
    assert_eq!(player.face, CardFace::Front);
}

#[test]
fn fixed_seed_reproduces_the_session() {
    let mut first = player(15, 99);
    let mut second = player(15, 99);

    assert_eq!(first.current_card().id, second.current_card().id);
    for _ in 0..30 {
        first.go_forward().unwrap();
        second.go_forward().unwrap();
        assert_eq!(first.current_card().id, second.current_card().id);
    }
}

#[test]
fn single_card_deck_repeats_without_stalling() {
    let mut player = player(1, 1);
    assert_eq!(player.current_card().id, "card-000");
    for _ in 0..10 {
        player.go_forward().unwrap();
        assert_eq!(player.current_card().id, "card-000");
    }
}
