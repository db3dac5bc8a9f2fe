//! Random draws and weighted categorical selection.
//!
//! Everything takes `&mut dyn RngCore` so a seeded `SmallRng` can be threaded
//! through a whole generator session.

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::GenerationError;

/// Seeded RNG when a seed is given, OS-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

/// Uniform integer in 1..=100.
pub fn rand_percent(rng: &mut dyn RngCore) -> u32 {
    rng.random_range(1..=100)
}

/// Uniform integer in `low..=high`. A reversed range collapses to `low`.
pub fn rand_integer(rng: &mut dyn RngCore, low: i64, high: i64) -> i64 {
    if low >= high {
        return low;
    }
    rng.random_range(low..=high)
}

pub fn choose<'a, T>(rng: &mut dyn RngCore, items: &'a [T]) -> Result<&'a T, GenerationError> {
    items.choose(rng).ok_or(GenerationError::EmptyChoice)
}

/// Sum of `count` dice with `sides` faces each.
pub fn roll_dice(rng: &mut dyn RngCore, count: u32, sides: u32) -> u32 {
    if sides == 0 {
        return 0;
    }
    (0..count).map(|_| rng.random_range(1..=sides)).sum()
}

/// Total of a weight table. Negative or non-finite weights and an all-zero
/// table are rejected.
pub fn total_weight(weights: &[f64]) -> Result<f64, GenerationError> {
    let mut total = 0.0;
    for &w in weights {
        if !w.is_finite() || w < 0.0 {
            return Err(GenerationError::InvalidWeight(w));
        }
        total += w;
    }
    if total <= 0.0 {
        return Err(GenerationError::ZeroWeight);
    }
    Ok(total)
}

/// Index of the first positive-weight entry whose cumulative weight reaches
/// `draw`. `None` when `draw` exceeds the total.
pub fn select_cumulative(weights: &[f64], draw: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        if cumulative >= draw {
            return Some(i);
        }
    }
    None
}

/// Integer table: roll in 1..=total.
pub fn weighted_index_int(rng: &mut dyn RngCore, weights: &[u32]) -> Result<usize, GenerationError> {
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return Err(GenerationError::ZeroWeight);
    }
    let roll = rng.random_range(1..=total);
    let as_float: Vec<f64> = weights.iter().map(|&w| f64::from(w)).collect();
    select_cumulative(&as_float, roll as f64).ok_or(GenerationError::ZeroWeight)
}

/// Float table: draw in 0..=total.
pub fn weighted_index_float(
    rng: &mut dyn RngCore,
    weights: &[f64],
) -> Result<usize, GenerationError> {
    let total = total_weight(weights)?;
    let draw = rng.random_range(0.0..=total);
    // Rounding can leave the last cumulative a hair under `total`.
    select_cumulative(weights, draw)
        .or_else(|| weights.iter().rposition(|&w| w > 0.0))
        .ok_or(GenerationError::ZeroWeight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_draws() {
        let mut rng1 = make_rng(Some(42));
        let mut rng2 = make_rng(Some(42));
        let a: Vec<u32> = (0..10).map(|_| rand_percent(&mut rng1)).collect();
        let b: Vec<u32> = (0..10).map(|_| rand_percent(&mut rng2)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn percent_stays_in_range() {
        let mut rng = make_rng(Some(1));
        for _ in 0..1000 {
            let p = rand_percent(&mut rng);
            assert!((1..=100).contains(&p));
        }
    }

    #[test]
    fn integer_range_is_inclusive() {
        let mut rng = make_rng(Some(5));
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..500 {
            match rand_integer(&mut rng, 1, 3) {
                1 => seen_low = true,
                3 => seen_high = true,
                2 => {}
                other => panic!("out of range: {other}"),
            }
        }
        assert!(seen_low && seen_high);
        assert_eq!(rand_integer(&mut rng, 9, 9), 9);
    }

    #[test]
    fn dice_bounds() {
        let mut rng = make_rng(Some(9));
        for _ in 0..200 {
            let total = roll_dice(&mut rng, 2, 6);
            assert!((2..=12).contains(&total));
        }
        assert_eq!(roll_dice(&mut rng, 3, 0), 0);
    }

    #[test]
    fn cumulative_first_match_wins() {
        let weights = [75.0, 15.0, 5.0, 5.0];
        assert_eq!(select_cumulative(&weights, 1.0), Some(0));
        assert_eq!(select_cumulative(&weights, 75.0), Some(0));
        assert_eq!(select_cumulative(&weights, 76.0), Some(1));
        assert_eq!(select_cumulative(&weights, 90.0), Some(1));
        assert_eq!(select_cumulative(&weights, 91.0), Some(2));
        assert_eq!(select_cumulative(&weights, 100.0), Some(3));
        assert_eq!(select_cumulative(&weights, 100.5), None);
    }

    #[test]
    fn cumulative_skips_zero_weights() {
        let weights = [0.0, 0.0, 23.0, 33.0, 44.0];
        assert_eq!(select_cumulative(&weights, 0.0), Some(2));
        assert_eq!(select_cumulative(&weights, 1.0), Some(2));
    }

    #[test]
    fn zero_and_negative_tables_are_errors() {
        let mut rng = make_rng(Some(3));
        assert_eq!(
            weighted_index_int(&mut rng, &[0, 0]),
            Err(GenerationError::ZeroWeight)
        );
        assert_eq!(
            weighted_index_float(&mut rng, &[]),
            Err(GenerationError::ZeroWeight)
        );
        assert_eq!(
            weighted_index_float(&mut rng, &[1.0, -2.0]),
            Err(GenerationError::InvalidWeight(-2.0))
        );
        assert!(matches!(
            weighted_index_float(&mut rng, &[f64::NAN]),
            Err(GenerationError::InvalidWeight(w)) if w.is_nan()
        ));
    }

    #[test]
    fn single_weight_always_chosen() {
        let mut rng = make_rng(Some(11));
        for _ in 0..50 {
            assert_eq!(weighted_index_int(&mut rng, &[0, 7, 0]), Ok(1));
            assert_eq!(weighted_index_float(&mut rng, &[0.0, 0.0, 2.5]), Ok(2));
        }
    }

    #[test]
    fn choose_from_empty_is_error() {
        let mut rng = make_rng(Some(2));
        let empty: [u8; 0] = [];
        assert_eq!(choose(&mut rng, &empty), Err(GenerationError::EmptyChoice));
    }
}
