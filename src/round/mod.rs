//! Round engine and state management.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::{DealerHand, Hand};
use crate::options::RoundOptions;
use crate::snapshot::{CardView, Outcome, Snapshot};

mod actions;
mod dealer;
mod start;
pub mod state;

pub use dealer::DEALER_STANDS_AT;
pub use state::RoundState;

/// A single-player blackjack round engine.
///
/// The round owns the deck, both hands, the wager, and the session balance,
/// and walks the `Betting` / `Playing` / `Finished` lifecycle. Operations
/// ([`Round::start`], [`Round::hit`], [`Round::stand`], [`Round::next_round`])
/// each return a [`Snapshot`] of the observable state.
///
/// The engine is synchronous and single-threaded: operations take
/// `&mut self` and run to completion. A transport exposing it must
/// serialize requests per session externally.
///
/// # Example
///
/// ```no_run
/// use twentyone::{Round, RoundOptions};
///
/// let options = RoundOptions::default();
/// let mut round = Round::new(options, 42);
/// let snapshot = round.start(100)?;
/// # let _ = snapshot;
/// # Ok::<(), twentyone::RoundError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards remaining for the current round.
    pub deck: Deck,
    /// Session options.
    pub options: RoundOptions,
    /// Current lifecycle state.
    state: RoundState,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: DealerHand,
    /// Wager committed to the current round.
    wager: usize,
    /// Session balance; the only state carried across rounds.
    balance: usize,
    /// Terminal outcome of the current round, if settled.
    outcome: Option<Outcome>,
    /// Random number generator used to shuffle each round's deck.
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates a new round session with the given seed.
    ///
    /// The session starts in the `Betting` state with the configured
    /// starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Round, RoundOptions, RoundState};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// assert_eq!(round.state(), RoundState::Betting);
    /// assert_eq!(round.balance(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        Self {
            deck: Deck::build(),
            state: RoundState::Betting,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            wager: 0,
            balance: options.starting_balance,
            outcome: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            options,
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the session balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the wager committed to the current round.
    #[must_use]
    pub const fn wager(&self) -> usize {
        self.wager
    }

    /// Returns the terminal outcome, or `None` while the round is unresolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Draws a card, surfacing exhaustion as an invariant violation.
    fn draw(&mut self) -> Result<Card, RoundError> {
        self.deck.draw().ok_or(RoundError::DeckExhausted)
    }

    /// Credits the balance, reveals the hole card, and records the terminal
    /// outcome.
    fn settle(&mut self, outcome: Outcome, credit: usize) {
        self.balance += credit;
        self.dealer_hand.reveal_hole();
        self.outcome = Some(outcome);
        self.state = RoundState::Finished;
    }

    /// Builds a snapshot of the observable round state.
    ///
    /// The dealer's hole card and total are withheld until the round
    /// finishes; everything else is reproduced from current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let hole_revealed = self.dealer_hand.is_hole_revealed();

        let dealer_cards: Vec<CardView> = self
            .dealer_hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, &card)| {
                if index == 0 && !hole_revealed {
                    CardView::Hidden
                } else {
                    CardView::Up(card)
                }
            })
            .collect();

        let dealer_value = hole_revealed.then(|| self.dealer_hand.value());

        Snapshot {
            player_cards: self.player_hand.cards().to_vec(),
            dealer_cards,
            player_value: self.player_hand.value(),
            dealer_value,
            balance: self.balance,
            current_bet: self.wager,
            state: self.state,
            outcome: self.outcome,
            message: self.outcome.map_or("", Outcome::message),
        }
    }
}
