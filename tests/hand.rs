//! Hand valuation tests.

use twentyone::{Card, DealerHand, Hand, Rank, Suit};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &c in cards {
        hand.add_card(c);
    }
    hand
}

#[test]
fn ace_counts_as_eleven_while_safe() {
    let hand = hand_of(&[card(Rank::Ace, Suit::Spades), card(Rank::Six, Suit::Hearts)]);
    assert_eq!(hand.value(), 17);
    assert!(hand.is_soft());
}

#[test]
fn ace_recounts_to_one_on_overflow() {
    let hand = hand_of(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
    ]);
    assert_eq!(hand.value(), 17);
    assert!(!hand.is_soft());
}

#[test]
fn two_aces_keep_one_soft() {
    let hand = hand_of(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
    ]);
    assert_eq!(hand.value(), 21);
    assert!(hand.is_soft());

    let pair = hand_of(&[card(Rank::Ace, Suit::Spades), card(Rank::Ace, Suit::Hearts)]);
    assert_eq!(pair.value(), 12);
    assert!(pair.is_soft());
}

#[test]
fn face_cards_count_ten() {
    let hand = hand_of(&[card(Rank::Queen, Suit::Spades), card(Rank::King, Suit::Hearts)]);
    assert_eq!(hand.value(), 20);
    assert!(!hand.is_soft());
}

#[test]
fn blackjack_requires_two_card_twenty_one() {
    let natural = hand_of(&[card(Rank::Ace, Suit::Spades), card(Rank::King, Suit::Hearts)]);
    assert!(natural.is_blackjack());
    assert!(!natural.is_bust());

    let drawn_21 = hand_of(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
    ]);
    assert_eq!(drawn_21.value(), 21);
    assert!(!drawn_21.is_blackjack());
}

#[test]
fn bust_when_over_twenty_one() {
    let hand = hand_of(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Five, Suit::Clubs),
    ]);
    assert_eq!(hand.value(), 24);
    assert!(hand.is_bust());
    assert!(!hand.is_blackjack());
}

#[test]
fn empty_hand_values_zero() {
    let hand = Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.value(), 0);
    assert!(!hand.is_soft());
    assert!(!hand.is_bust());
}

#[test]
fn dealer_hand_hole_visibility() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Rank::Ace, Suit::Hearts));
    dealer.add_card(card(Rank::Six, Suit::Clubs));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.hole_card(), Some(&card(Rank::Ace, Suit::Hearts)));
    assert_eq!(dealer.value(), 17);
    assert!(dealer.is_soft());

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}
