//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that manages one round at a time:
//! wagering, dealing, player actions, dealer play, and settlement against a
//! session balance. Every operation returns a [`Snapshot`] of the observable
//! state, with the dealer's hole card redacted until the round finishes.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Round, RoundOptions};
//!
//! let options = RoundOptions::default();
//! let round = Round::new(options, 42);
//! let _ = round;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod round;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::RoundError;
pub use hand::{DealerHand, Hand};
pub use options::RoundOptions;
pub use round::{Round, RoundState};
pub use snapshot::{CardView, Outcome, Snapshot};
