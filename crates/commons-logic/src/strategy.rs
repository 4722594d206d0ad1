//! Strategy contract and reference implementations.

use serde::{Deserialize, Serialize};

use crate::error::StrategyError;
use crate::game::MatchConfig;
use crate::history::{HistoryLog, PlayerId};
use crate::random::SeededRng;

/// A move in the commons game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Take the restrained share, `stock / 2n`.
    Cooperate,
    /// Take the greedy share, `stock / n`, double the restrained share.
    Defect,
}

/// Everything a strategy may observe when deciding one round.
///
/// The engine hands every seat the same snapshot: `history` holds only
/// completed rounds, so no strategy can see another's current-round
/// action.
#[derive(Clone, Copy, Debug)]
pub struct Observation<'a> {
    /// 1-based index of the round being decided.
    pub round: u32,
    /// Total rounds in the match; `round == total_rounds` on the last round.
    pub total_rounds: u32,
    /// Stock at the start of this round.
    pub stock: f64,
    /// The observing player's own seat.
    pub me: PlayerId,
    /// All completed rounds so far.
    pub history: &'a HistoryLog,
}

/// One player's decision policy.
///
/// An instance is bound to a single seat for a single match. `decide` may
/// mutate only the instance's own private state; the observation is
/// shared and immutable. Returning an error fails the whole match,
/// attributed to this seat.
pub trait Strategy: Send {
    /// Choose this round's action.
    fn decide(&mut self, obs: &Observation<'_>) -> Result<Action, StrategyError>;

    /// Short machine-friendly name.
    fn name(&self) -> &'static str;
}

/// Baseline: takes the restrained share every round.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysCooperate;

impl Strategy for AlwaysCooperate {
    fn decide(&mut self, _obs: &Observation<'_>) -> Result<Action, StrategyError> {
        Ok(Action::Cooperate)
    }

    fn name(&self) -> &'static str {
        "always-cooperate"
    }
}

/// Baseline: takes the greedy share every round.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysDefect;

impl Strategy for AlwaysDefect {
    fn decide(&mut self, _obs: &Observation<'_>) -> Result<Action, StrategyError> {
        Ok(Action::Defect)
    }

    fn name(&self) -> &'static str {
        "always-defect"
    }
}

/// Cooperates until any rival defection appears anywhere in history, then
/// defects forever.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrimTrigger {
    defect_last_round: bool,
}

impl GrimTrigger {
    pub fn new() -> Self {
        Self {
            defect_last_round: false,
        }
    }

    /// Variant that also defects unconditionally in the final round.
    pub fn with_endgame_defection() -> Self {
        Self {
            defect_last_round: true,
        }
    }
}

impl Strategy for GrimTrigger {
    fn decide(&mut self, obs: &Observation<'_>) -> Result<Action, StrategyError> {
        if self.defect_last_round && obs.round == obs.total_rounds {
            return Ok(Action::Defect);
        }
        let betrayed = obs.history.rounds().any(|r| r.rival_defected(obs.me));
        Ok(if betrayed {
            Action::Defect
        } else {
            Action::Cooperate
        })
    }

    fn name(&self) -> &'static str {
        "grim-trigger"
    }
}

/// Tit-for-tat with bounded punishment.
///
/// Cooperates by default. A rival defection in the immediately preceding
/// round starts a streak of exactly `punishment` defections; defections
/// observed mid-streak do not extend it.
#[derive(Clone, Copy, Debug)]
pub struct TitForTat {
    punishment: u32,
    defect_last_round: bool,
    // remaining defections in the current streak
    punishing: u32,
}

impl TitForTat {
    /// `punishment` is the streak length; zero never retaliates.
    pub fn new(punishment: u32) -> Self {
        Self {
            punishment,
            defect_last_round: false,
            punishing: 0,
        }
    }

    /// Variant that also defects unconditionally in the final round.
    pub fn with_endgame_defection(punishment: u32) -> Self {
        Self {
            defect_last_round: true,
            ..Self::new(punishment)
        }
    }
}

impl Strategy for TitForTat {
    fn decide(&mut self, obs: &Observation<'_>) -> Result<Action, StrategyError> {
        if self.defect_last_round && obs.round == obs.total_rounds {
            return Ok(Action::Defect);
        }
        if self.punishing > 0 {
            self.punishing -= 1;
            return Ok(Action::Defect);
        }
        if let Some(last) = obs.history.latest() {
            if last.rival_defected(obs.me) && self.punishment > 0 {
                self.punishing = self.punishment - 1;
                return Ok(Action::Defect);
            }
        }
        Ok(Action::Cooperate)
    }

    fn name(&self) -> &'static str {
        "tit-for-tat"
    }
}

/// Defects while the stock is above a threshold, cooperates below it so
/// the pool regrows.
///
/// The threshold is per-instance configuration; the engine has no
/// canonical value.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdExploiter {
    threshold: f64,
    defect_first_round: bool,
    defect_last_round: bool,
}

impl ThresholdExploiter {
    /// Defect while the observed stock is strictly above `threshold`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            defect_first_round: false,
            defect_last_round: false,
        }
    }

    /// Threshold expressed as a fraction of the configured capacity.
    pub fn from_capacity_fraction(config: &MatchConfig, fraction: f64) -> Self {
        Self::new(fraction * config.capacity())
    }

    /// Also defect unconditionally in round 1.
    pub fn defect_first_round(mut self) -> Self {
        self.defect_first_round = true;
        self
    }

    /// Also defect unconditionally in the final round.
    pub fn defect_last_round(mut self) -> Self {
        self.defect_last_round = true;
        self
    }
}

impl Strategy for ThresholdExploiter {
    fn decide(&mut self, obs: &Observation<'_>) -> Result<Action, StrategyError> {
        if self.defect_last_round && obs.round == obs.total_rounds {
            return Ok(Action::Defect);
        }
        if self.defect_first_round && obs.round == 1 {
            return Ok(Action::Defect);
        }
        Ok(if obs.stock > self.threshold {
            Action::Defect
        } else {
            Action::Cooperate
        })
    }

    fn name(&self) -> &'static str {
        "threshold-exploiter"
    }
}

/// Cooperates with a fixed probability each round.
#[derive(Clone, Debug)]
pub struct Random {
    cooperate_bias: f64,
    rng: SeededRng,
}

impl Random {
    /// `cooperate_bias` is the per-round cooperation probability in `[0, 1]`.
    pub fn new(cooperate_bias: f64, rng: SeededRng) -> Self {
        Self {
            cooperate_bias,
            rng,
        }
    }
}

impl Strategy for Random {
    fn decide(&mut self, _obs: &Observation<'_>) -> Result<Action, StrategyError> {
        Ok(if self.rng.chance(self.cooperate_bias) {
            Action::Cooperate
        } else {
            Action::Defect
        })
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
