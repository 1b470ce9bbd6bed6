//! Deck construction, draw, and shuffle tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{Card, DECK_SIZE, Deck, Rank, Suit};

#[test]
fn build_yields_52_unique_cards() {
    let deck = Deck::build();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn fifty_two_draws_cover_the_deck_then_exhaust() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::shuffled(&mut rng);

    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        let card = deck.draw().expect("deck holds 52 cards");
        assert!(seen.insert(card), "card drawn twice: {card}");
    }

    assert!(deck.is_empty());
    assert!(deck.draw().is_none());
}

#[test]
fn draw_removes_from_the_top() {
    let bottom = Card::new(Rank::Two, Suit::Clubs);
    let top = Card::new(Rank::Ace, Suit::Spades);
    let mut deck = Deck::from_cards(vec![bottom, top]);

    assert_eq!(deck.draw(), Some(top));
    assert_eq!(deck.draw(), Some(bottom));
    assert_eq!(deck.draw(), None);
}

#[test]
fn shuffle_is_reproducible_by_seed() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(7);
    let mut rng_b = ChaCha8Rng::seed_from_u64(7);
    assert_eq!(Deck::shuffled(&mut rng_a), Deck::shuffled(&mut rng_b));

    let mut rng_c = ChaCha8Rng::seed_from_u64(8);
    assert_ne!(Deck::shuffled(&mut rng_a), Deck::shuffled(&mut rng_c));
}

/// Over many shuffles a fixed card should land in every position with
/// roughly equal frequency. Loose statistical bounds, not exact equality.
#[test]
fn shuffle_positions_are_approximately_uniform() {
    const TRIALS: usize = 10_000;
    let tracked = Card::new(Rank::Ace, Suit::Spades);

    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut counts = [0usize; DECK_SIZE];

    for _ in 0..TRIALS {
        let deck = Deck::shuffled(&mut rng);
        let position = deck
            .cards()
            .iter()
            .position(|&card| card == tracked)
            .expect("tracked card is in every deck");
        counts[position] += 1;
    }

    // Expected count per position is TRIALS / 52 (about 192); a uniform
    // shuffle stays comfortably within a factor of two over 10k trials.
    let expected = TRIALS / DECK_SIZE;
    for (position, &count) in counts.iter().enumerate() {
        assert!(
            count > expected / 2 && count < expected * 2,
            "position {position} hit {count} times, expected about {expected}"
        );
    }
}
