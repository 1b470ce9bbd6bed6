//! Deck construction, shuffling, and draw.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered collection of cards.
///
/// A freshly built deck holds the full 52-card rank/suit cross product in a
/// deterministic order. The top of the deck is the end of the sequence:
/// [`Deck::draw`] removes from the same end a shuffle permutes into place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the canonical 52-card sequence, unshuffled.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Deck;
    ///
    /// let deck = Deck::build();
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Builds a fresh deck and shuffles it with the given generator.
    #[must_use]
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck from an explicit card sequence, for replaying known
    /// deals. The last element is the next card drawn.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Applies a uniform random permutation in place (Fisher-Yates).
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    ///
    /// An empty draw is an invariant violation at the engine level: a round
    /// needs at most about 20 of the 52 cards under the dealer-17 cutoff.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards remaining, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
