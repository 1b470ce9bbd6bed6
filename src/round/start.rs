use crate::deck::Deck;
use crate::error::RoundError;
use crate::snapshot::{Outcome, Snapshot};

use super::{Round, RoundState};

/// Cards needed for the opening deal: two to the player, two to the dealer.
const INITIAL_DEAL_CARDS: usize = 4;

impl Round {
    /// Starts a round: commits the wager, deals from a fresh shuffled deck,
    /// and resolves natural blackjacks immediately.
    ///
    /// The wager is deducted up front; settlement later credits winnings on
    /// top. Cards are dealt alternating player, dealer, player, dealer, with
    /// the dealer's first card as the hole card.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] outside the `Betting` state, and
    /// [`RoundError::InvalidWager`] when the wager is zero or exceeds the
    /// balance. Nothing changes on failure.
    pub fn start(&mut self, wager: usize) -> Result<Snapshot, RoundError> {
        self.ensure_can_start(wager)?;
        let deck = Deck::shuffled(&mut self.rng);
        self.start_with_deck(wager, deck)
    }

    /// Starts a round drawing from a caller-supplied prepared deck instead
    /// of a freshly shuffled one, for deterministic replays and fixtures.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Round::start`].
    pub fn start_with_deck(&mut self, wager: usize, deck: Deck) -> Result<Snapshot, RoundError> {
        self.ensure_can_start(wager)?;

        // Checked before any state changes; a short deck must not half-deal.
        if deck.len() < INITIAL_DEAL_CARDS {
            return Err(RoundError::DeckExhausted);
        }

        self.balance -= wager;
        self.wager = wager;
        self.deck = deck;
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.outcome = None;

        // Alternating deal: player, dealer, player, dealer.
        for _ in 0..2 {
            let card = self.draw()?;
            self.player_hand.add_card(card);
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
        }

        self.state = RoundState::Playing;
        self.resolve_naturals();

        Ok(self.snapshot())
    }

    fn ensure_can_start(&self, wager: usize) -> Result<(), RoundError> {
        if self.state != RoundState::Betting {
            return Err(RoundError::InvalidState);
        }
        if wager == 0 || wager > self.balance {
            return Err(RoundError::InvalidWager);
        }
        Ok(())
    }

    /// Settles the round immediately when the player holds a natural 21.
    ///
    /// A lone player blackjack returns the stake plus 3:2 winnings. When the
    /// dealer also holds a natural, the wager pushes with a half-wager house
    /// bonus on top of the returned stake.
    fn resolve_naturals(&mut self) {
        if !self.player_hand.is_blackjack() {
            return;
        }

        if self.dealer_hand.is_blackjack() {
            self.settle(Outcome::BothBlackjack, self.wager + self.wager / 2);
        } else {
            // floor(wager * 2.5): stake back plus 3:2 winnings.
            self.settle(Outcome::PlayerBlackjack, self.wager * 2 + self.wager / 2);
        }
    }
}
