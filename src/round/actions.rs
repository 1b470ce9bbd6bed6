use crate::error::RoundError;
use crate::snapshot::{Outcome, Snapshot};

use super::{Round, RoundState};

impl Round {
    /// Player action: Hit (draw one card into the player hand).
    ///
    /// Drawing past 21 finishes the round as a bust; the wager was deducted
    /// at [`Round::start`] and is forfeited. Reaching exactly 21 keeps the
    /// round open for further actions.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] outside the `Playing` state, or
    /// [`RoundError::DeckExhausted`] if the deck is empty.
    pub fn hit(&mut self) -> Result<Snapshot, RoundError> {
        if self.state != RoundState::Playing {
            return Err(RoundError::InvalidState);
        }

        let card = self.draw()?;
        self.player_hand.add_card(card);

        if self.player_hand.is_bust() {
            self.settle(Outcome::PlayerBust, 0);
        }

        Ok(self.snapshot())
    }

    /// Player action: Stand (end the player turn and play out the dealer).
    ///
    /// The dealer reveals the hole card, draws while below 17, and the round
    /// settles against the final totals.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] outside the `Playing` state, or
    /// [`RoundError::DeckExhausted`] if the deck empties while the dealer
    /// must draw.
    pub fn stand(&mut self) -> Result<Snapshot, RoundError> {
        if self.state != RoundState::Playing {
            return Err(RoundError::InvalidState);
        }

        self.dealer_play()?;

        Ok(self.snapshot())
    }

    /// Begins the next round: clears both hands and the wager and returns to
    /// the `Betting` state. The balance carries forward unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] unless the round is `Finished`.
    pub fn next_round(&mut self) -> Result<Snapshot, RoundError> {
        if self.state != RoundState::Finished {
            return Err(RoundError::InvalidState);
        }

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.wager = 0;
        self.outcome = None;
        self.state = RoundState::Betting;

        Ok(self.snapshot())
    }
}
