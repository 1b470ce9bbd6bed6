use crate::error::RoundError;
use crate::snapshot::Outcome;

use super::Round;

/// The dealer stands on any total of 17 or more, hard or soft.
pub const DEALER_STANDS_AT: u8 = 17;

impl Round {
    /// Plays out the dealer's hand and settles the round.
    ///
    /// The hole card is revealed, then the dealer draws one card at a time
    /// while below [`DEALER_STANDS_AT`]. There is no soft-17 exception.
    pub(super) fn dealer_play(&mut self) -> Result<(), RoundError> {
        self.dealer_hand.reveal_hole();

        while self.dealer_hand.value() < DEALER_STANDS_AT {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
        }

        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();

        if self.dealer_hand.is_bust() || player_value > dealer_value {
            // Stake returned plus equal winnings.
            self.settle(Outcome::PlayerWin, self.wager * 2);
        } else if player_value == dealer_value {
            // Stake returned, no winnings.
            self.settle(Outcome::Push, self.wager);
        } else {
            self.settle(Outcome::DealerWin, 0);
        }

        Ok(())
    }
}
