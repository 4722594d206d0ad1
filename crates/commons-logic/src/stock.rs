//! Stock dynamics: depletion and logistic regrowth.
//!
//! Pure functions over the shared resource stock. Regrowth peaks at
//! `capacity / 2` and yields nothing at zero or at capacity.

/// Deplete `stock` by `total_consumption`, never below zero.
///
/// The clamp also absorbs the sub-ulp overshoot `n * (stock / n)` can
/// produce in floating point.
pub fn consume(stock: f64, total_consumption: f64) -> f64 {
    (stock - total_consumption).max(0.0)
}

/// Logistic regrowth of the remaining stock, clamped to `[0, capacity]`.
///
/// `grow(0, _) == 0`: an extinct stock stays extinct.
pub fn grow(remaining: f64, capacity: f64) -> f64 {
    let growth = 2.0 * remaining * (1.0 - remaining / capacity);
    (remaining + growth).clamp(0.0, capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_consume_basic() {
        assert_eq!(consume(10.0, 4.0), 6.0);
        assert_eq!(consume(10.0, 0.0), 10.0);
    }

    #[test]
    fn test_consume_clips_at_zero() {
        assert_eq!(consume(10.0, 10.0), 0.0);
        assert_eq!(consume(10.0, 12.0), 0.0);
    }

    #[test]
    fn test_grow_extinction_is_absorbing() {
        assert_eq!(grow(0.0, 10.0), 0.0);
    }

    #[test]
    fn test_grow_capacity_is_a_fixed_point() {
        assert_eq!(grow(10.0, 10.0), 10.0);
    }

    #[test]
    fn test_grow_half_capacity_doubles_to_capacity() {
        // growth at capacity/2 is capacity/2 exactly
        assert_eq!(grow(5.0, 10.0), 10.0);
        assert_eq!(grow(50.0, 100.0), 100.0);
    }

    #[test]
    fn test_grow_clamps_to_capacity() {
        // 7.5 + 2*7.5*(1 - 0.75) = 11.25, clamped
        assert_eq!(grow(7.5, 10.0), 10.0);
    }

    #[test]
    fn test_grow_below_half_capacity() {
        // 2 + 2*2*(1 - 0.2) = 5.2
        let next = grow(2.0, 10.0);
        assert!((next - 5.2).abs() < 1e-12, "got {}", next);
    }

    proptest! {
        #[test]
        fn grow_stays_within_bounds(capacity in 4.0f64..1e6, frac in 0.0f64..=1.0) {
            let remaining = frac * capacity;
            let next = grow(remaining, capacity);
            prop_assert!(next >= 0.0);
            prop_assert!(next <= capacity);
        }

        #[test]
        fn growth_peaks_at_half_capacity(capacity in 4.0f64..1e6, frac in 0.0f64..=1.0) {
            let remaining = frac * capacity;
            prop_assert!(grow(remaining, capacity) <= grow(capacity / 2.0, capacity));
        }

        #[test]
        fn consume_never_negative(stock in 0.0f64..1e6, taken in 0.0f64..2e6) {
            prop_assert!(consume(stock, taken) >= 0.0);
        }
    }
}
