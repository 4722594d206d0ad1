//! Simultaneous-action resolution for one round.

use crate::error::GameError;
use crate::game::MatchConfig;
use crate::stock;
use crate::strategy::Action;

/// Share of the current stock one seat takes with the given action.
pub fn share(action: Action, stock: f64, players: u32) -> f64 {
    match action {
        Action::Cooperate => stock / (2.0 * players as f64),
        Action::Defect => stock / players as f64,
    }
}

/// Resolve one round: per-seat payoffs and the post-growth stock.
///
/// Payoff equals consumption. Total consumption never exceeds the stock:
/// each claim is at most `stock / n` and there are `n` of them, so no
/// rationing is needed.
pub fn resolve_round(
    stock_before: f64,
    actions: &[Action],
    config: &MatchConfig,
) -> Result<(Vec<f64>, f64), GameError> {
    if !stock_before.is_finite() || stock_before < 0.0 {
        return Err(GameError::InvalidStock(stock_before));
    }
    debug_assert_eq!(actions.len(), config.players() as usize);

    let payoffs: Vec<f64> = actions
        .iter()
        .map(|&action| share(action, stock_before, config.players()))
        .collect();
    let total: f64 = payoffs.iter().sum();

    let remaining = stock::consume(stock_before, total);
    let stock_after = stock::grow(remaining, config.capacity());
    Ok((payoffs, stock_after))
}
