//! Error taxonomy for match configuration and execution.

use thiserror::Error;

use crate::history::PlayerId;

/// Opaque failure raised by a strategy's decision call.
///
/// The engine attributes it to the offending seat via
/// [`GameError::StrategyFault`].
pub type StrategyError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while configuring or running a match.
///
/// Nothing is recovered locally: every variant is fatal to the current
/// match and propagates to the caller, which may record a forfeit and
/// continue with other matches.
#[derive(Debug, Error)]
pub enum GameError {
    /// A match needs at least two players.
    #[error("player count must be at least 2, got {0}")]
    TooFewPlayers(u32),

    /// A match must run at least one round.
    #[error("round count must be at least 1")]
    TooFewRounds,

    /// Capacity must be at least `2n` and finite.
    #[error("capacity {capacity} below minimum {min} for {players} players")]
    CapacityTooSmall {
        capacity: f64,
        min: f64,
        players: u32,
    },

    /// The strategy vector does not match the configured seat count.
    #[error("expected {expected} strategies, got {got}")]
    PlayerCountMismatch { expected: u32, got: u32 },

    /// A round record was appended out of order.
    #[error("round {got} appended out of order, expected round {expected}")]
    OutOfOrderRound { expected: u32, got: u32 },

    /// A strategy's decision call failed. The seat is identified so an
    /// outer layer can record a forfeit for that entry.
    #[error("strategy for {player} faulted: {source}")]
    StrategyFault {
        player: PlayerId,
        #[source]
        source: StrategyError,
    },

    /// Stock outside `[0, capacity]` semantics reached the resolver.
    #[error("stock must be finite and non-negative, got {0}")]
    InvalidStock(f64),
}
