//! Commons Logic
//!
//! Simulation kernel for the repeated common-pool resource game: a shared
//! stock regrows logistically while players simultaneously choose, round
//! by round, between a restrained share (`stock / 2n`) and a greedy share
//! (`stock / n`).
//!
//! The crate provides the stock dynamics, simultaneous round resolution,
//! the append-only match history, the match engine, and the [`Strategy`]
//! contract with a set of reference strategies. Scheduling many matches,
//! loading strategies by name, and reporting results are the embedding
//! application's job.
//!
//! ```
//! use commons_logic::{run_match, AlwaysCooperate, GrimTrigger, MatchConfig, Strategy};
//!
//! let config = MatchConfig::new(2, 10, 20.0)?;
//! let players: Vec<Box<dyn Strategy>> = vec![
//!     Box::new(GrimTrigger::new()),
//!     Box::new(AlwaysCooperate),
//! ];
//! let result = run_match(&config, players)?;
//! assert_eq!(result.history.len(), 10);
//! # Ok::<(), commons_logic::GameError>(())
//! ```

mod error;
mod game;
mod history;
mod random;
mod resolve;
mod stock;
mod strategy;

pub use error::{GameError, StrategyError};
pub use game::{run_match, MatchConfig, MatchResult};
pub use history::{HistoryLog, PlayerId, RoundRecord};
pub use random::SeededRng;
pub use resolve::{resolve_round, share};
pub use stock::{consume, grow};
pub use strategy::{
    Action, AlwaysCooperate, AlwaysDefect, GrimTrigger, Observation, Random, Strategy,
    ThresholdExploiter, TitForTat,
};
