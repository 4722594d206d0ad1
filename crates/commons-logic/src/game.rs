//! Match execution engine

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::GameError;
use crate::history::{HistoryLog, PlayerId, RoundRecord};
use crate::resolve::resolve_round;
use crate::strategy::{Observation, Strategy};

/// Immutable configuration of one match.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    players: u32,
    rounds: u32,
    capacity: f64,
}

impl MatchConfig {
    /// Validate and build a configuration.
    ///
    /// Requires `players >= 2`, `rounds >= 1` and a finite
    /// `capacity >= 2 * players`.
    pub fn new(players: u32, rounds: u32, capacity: f64) -> Result<Self, GameError> {
        if players < 2 {
            return Err(GameError::TooFewPlayers(players));
        }
        if rounds < 1 {
            return Err(GameError::TooFewRounds);
        }
        let min = 2.0 * players as f64;
        if !capacity.is_finite() || capacity < min {
            return Err(GameError::CapacityTooSmall {
                capacity,
                min,
                players,
            });
        }
        Ok(Self {
            players,
            rounds,
            capacity,
        })
    }

    /// Number of seats, `n >= 2`.
    pub fn players(&self) -> u32 {
        self.players
    }

    /// Number of rounds, `r >= 1`.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Carrying capacity of the stock.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}

/// Result of a complete match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchResult {
    /// Full round-by-round audit trail.
    pub history: HistoryLog,
    /// Per-seat payoff sums, in seat order.
    pub total_payoffs: Vec<f64>,
}

impl MatchResult {
    /// Total payoff of the given seat across all rounds.
    pub fn total_payoff(&self, player: PlayerId) -> f64 {
        self.total_payoffs[player.index()]
    }
}

/// Run a complete match.
///
/// Strategies are bound to seats `1..=n` in vector order and consumed:
/// an instance never carries state into another match. Each round the
/// full action vector is collected before anything is resolved, so every
/// seat decides against the same snapshot of stock and history. All
/// rounds are played even after the stock hits zero, so `round ==
/// total_rounds` checks keep firing.
pub fn run_match(
    config: &MatchConfig,
    mut strategies: Vec<Box<dyn Strategy>>,
) -> Result<MatchResult, GameError> {
    if strategies.len() != config.players() as usize {
        return Err(GameError::PlayerCountMismatch {
            expected: config.players(),
            got: strategies.len() as u32,
        });
    }

    debug!(
        players = config.players(),
        rounds = config.rounds(),
        capacity = config.capacity(),
        "starting match"
    );

    let seats = strategies.len();
    let mut history = HistoryLog::with_capacity(config.rounds() as usize);
    let mut stock = config.capacity();
    let mut totals = vec![0.0f64; seats];
    let mut extinct = false;

    for round in 1..=config.rounds() {
        let mut actions = Vec::with_capacity(seats);
        for (index, strategy) in strategies.iter_mut().enumerate() {
            let me = PlayerId::from_index(index);
            let obs = Observation {
                round,
                total_rounds: config.rounds(),
                stock,
                me,
                history: &history,
            };
            let action = strategy
                .decide(&obs)
                .map_err(|source| GameError::StrategyFault { player: me, source })?;
            actions.push(action);
        }

        let (payoffs, stock_after) = resolve_round(stock, &actions, config)?;
        for (total, payoff) in totals.iter_mut().zip(&payoffs) {
            *total += *payoff;
        }

        trace!(round, stock_before = stock, stock_after, "round resolved");
        history.append(RoundRecord {
            round,
            stock_before: stock,
            actions,
            payoffs,
            stock_after,
        })?;
        stock = stock_after;

        if stock == 0.0 && !extinct {
            extinct = true;
            debug!(round, "stock exhausted; remaining rounds pay zero");
        }
    }

    debug!(rounds = history.len(), "match finished");
    Ok(MatchResult {
        history,
        total_payoffs: totals,
    })
}
