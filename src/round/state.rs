//! Round lifecycle states.

/// Lifecycle state of a round.
///
/// A round moves `Betting` to `Playing` to `Finished`; requesting the next
/// round returns it to `Betting` with the balance carried forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RoundState {
    /// Waiting for a wager.
    Betting,
    /// Cards are dealt and the player may act.
    Playing,
    /// The round is settled; results are final.
    Finished,
}
