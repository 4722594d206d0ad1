//! Round records and the append-only match history.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::strategy::Action;

/// Seat number of one player, unique and stable within a match.
///
/// Seats are numbered `1..=n` in the order strategies were handed to the
/// engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Seat number in `1..=n`.
    pub fn seat(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// Observable outcome of one completed round.
///
/// `actions` and `payoffs` are seat-indexed; [`RoundRecord::action`] and
/// [`RoundRecord::payoff`] address them by [`PlayerId`]. Records are
/// created once by the engine and never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round index.
    pub round: u32,
    /// Stock every player observed when choosing this round's action.
    pub stock_before: f64,
    pub actions: Vec<Action>,
    pub payoffs: Vec<f64>,
    /// Stock after consumption and regrowth.
    pub stock_after: f64,
}

impl RoundRecord {
    /// Action chosen by the given seat.
    pub fn action(&self, player: PlayerId) -> Action {
        self.actions[player.index()]
    }

    /// Payoff realized by the given seat.
    pub fn payoff(&self, player: PlayerId) -> f64 {
        self.payoffs[player.index()]
    }

    /// Seats that chose [`Action::Defect`] this round.
    pub fn defectors(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.actions
            .iter()
            .enumerate()
            .filter(|(_, action)| **action == Action::Defect)
            .map(|(index, _)| PlayerId::from_index(index))
    }

    /// True if any seat other than `me` defected this round.
    pub fn rival_defected(&self, me: PlayerId) -> bool {
        self.defectors().any(|player| player != me)
    }
}

/// Append-only record of all completed rounds of one match.
///
/// Strategies receive a shared read-only view; only the engine appends,
/// and only between rounds.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    records: Vec<RoundRecord>,
}

impl HistoryLog {
    pub(crate) fn with_capacity(rounds: usize) -> Self {
        Self {
            records: Vec::with_capacity(rounds),
        }
    }

    /// Append the next round's record.
    ///
    /// Fails unless `record.round` is exactly `len() + 1`.
    pub(crate) fn append(&mut self, record: RoundRecord) -> Result<(), GameError> {
        let expected = self.records.len() as u32 + 1;
        if record.round != expected {
            return Err(GameError::OutOfOrderRound {
                expected,
                got: record.round,
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Completed rounds, oldest first.
    ///
    /// Restartable: each call yields a fresh iterator over the same
    /// records. A strategy deciding round `t` only ever sees rounds
    /// strictly before `t` here.
    pub fn rounds(&self) -> std::slice::Iter<'_, RoundRecord> {
        self.records.iter()
    }

    /// The last completed round, or `None` while round 1 is being decided.
    pub fn latest(&self) -> Option<&RoundRecord> {
        self.records.last()
    }

    /// Number of completed rounds.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(round: u32, actions: Vec<Action>) -> RoundRecord {
        let seats = actions.len();
        RoundRecord {
            round,
            stock_before: 10.0,
            actions,
            payoffs: vec![0.0; seats],
            stock_after: 10.0,
        }
    }

    #[test]
    fn test_append_in_order() {
        let mut log = HistoryLog::default();
        assert!(log.is_empty());
        assert!(log.latest().is_none());

        log.append(record(1, vec![Action::Cooperate, Action::Cooperate]))
            .unwrap();
        log.append(record(2, vec![Action::Defect, Action::Cooperate]))
            .unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().unwrap().round, 2);
    }

    #[test]
    fn test_append_out_of_order_fails() {
        let mut log = HistoryLog::default();
        log.append(record(1, vec![Action::Cooperate, Action::Cooperate]))
            .unwrap();

        let err = log
            .append(record(3, vec![Action::Cooperate, Action::Cooperate]))
            .unwrap_err();
        assert!(matches!(
            err,
            GameError::OutOfOrderRound {
                expected: 2,
                got: 3
            }
        ));

        // Repeating an already-recorded round is rejected too
        let err = log
            .append(record(1, vec![Action::Cooperate, Action::Cooperate]))
            .unwrap_err();
        assert!(matches!(
            err,
            GameError::OutOfOrderRound {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_rounds_is_restartable() {
        let mut log = HistoryLog::default();
        log.append(record(1, vec![Action::Cooperate, Action::Defect]))
            .unwrap();
        log.append(record(2, vec![Action::Defect, Action::Defect]))
            .unwrap();

        let first: Vec<u32> = log.rounds().map(|r| r.round).collect();
        let second: Vec<u32> = log.rounds().map(|r| r.round).collect();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_seat_accessors() {
        let rec = record(1, vec![Action::Cooperate, Action::Defect, Action::Defect]);
        let p1 = PlayerId::from_index(0);
        let p2 = PlayerId::from_index(1);
        let p3 = PlayerId::from_index(2);

        assert_eq!(rec.action(p1), Action::Cooperate);
        assert_eq!(rec.action(p2), Action::Defect);
        assert_eq!(rec.payoff(p3), 0.0);

        let defectors: Vec<u32> = rec.defectors().map(PlayerId::seat).collect();
        assert_eq!(defectors, vec![2, 3]);
    }

    #[test]
    fn test_rival_defected_ignores_own_defection() {
        let rec = record(1, vec![Action::Defect, Action::Cooperate]);
        let me = PlayerId::from_index(0);
        let other = PlayerId::from_index(1);

        assert!(!rec.rival_defected(me));
        assert!(rec.rival_defected(other));
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId::from_index(0).to_string(), "player 1");
        assert_eq!(PlayerId::from_index(4).seat(), 5);
    }

    #[test]
    fn test_out_of_order_message_names_rounds() {
        let mut log = HistoryLog::default();
        let err = log
            .append(record(2, vec![Action::Cooperate, Action::Cooperate]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "round 2 appended out of order, expected round 1"
        );
    }
}
