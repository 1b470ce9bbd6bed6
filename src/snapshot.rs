//! Snapshot types describing the observable round state.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::round::RoundState;

/// A card slot as presented to the caller.
///
/// The dealer's hole card renders as [`CardView::Hidden`] until the round
/// finishes; every other slot is [`CardView::Up`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CardView {
    /// A face-down card; rank and suit are withheld.
    Hidden,
    /// A face-up card.
    Up(Card),
}

impl CardView {
    /// Returns the card if it is face up.
    #[must_use]
    pub const fn card(self) -> Option<Card> {
        match self {
            Self::Hidden => None,
            Self::Up(card) => Some(card),
        }
    }
}

/// Terminal outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    /// Player dealt a natural 21 against a dealer without one.
    PlayerBlackjack,
    /// Both hands are naturals; the wager pushes (with the house bonus).
    BothBlackjack,
    /// Player drew past 21; the wager is forfeited.
    PlayerBust,
    /// Dealer busted or finished below the player's total.
    PlayerWin,
    /// Dealer finished above the player's total without busting.
    DealerWin,
    /// Both totals are equal; the wager is returned.
    Push,
}

impl Outcome {
    /// Returns the human-readable message for this outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBlackjack => "Blackjack! Player wins.",
            Self::BothBlackjack => "Both have blackjack. Push.",
            Self::PlayerBust => "Bust! Dealer wins.",
            Self::PlayerWin => "Player wins.",
            Self::DealerWin => "Dealer wins.",
            Self::Push => "Push.",
        }
    }
}

/// The observable state of a round after any operation.
///
/// A snapshot is assembled wholly from the current round state on every
/// query; it is the engine's only result channel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    /// The player's cards, always face up.
    pub player_cards: Vec<Card>,
    /// The dealer's cards. The hole card is [`CardView::Hidden`] while the
    /// round is in progress.
    pub dealer_cards: Vec<CardView>,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value, or `None` while the hole card is hidden.
    pub dealer_value: Option<u8>,
    /// The session balance after any settlement so far.
    pub balance: usize,
    /// The wager committed to the current round.
    pub current_bet: usize,
    /// The lifecycle state of the round.
    #[cfg_attr(feature = "serde", serde(rename = "game_state"))]
    pub state: RoundState,
    /// The terminal outcome, or `None` while the round is unresolved.
    pub outcome: Option<Outcome>,
    /// Human-readable outcome text; empty while the round is unresolved.
    pub message: &'static str,
}
