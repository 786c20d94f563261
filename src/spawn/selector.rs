//! Weighted random selection
//!
//! Weights are normalized into a cumulative distribution over `[0, total)`.
//! A uniform draw picks the first candidate whose cumulative weight exceeds
//! it, so ties go to the earlier candidate and zero weights are never picked.

use rand::Rng;

use crate::core::error::{ForgeError, Result};

/// Precomputed cumulative distribution over a fixed candidate list
#[derive(Debug, Clone)]
pub struct WeightedSelector<T> {
    items: Vec<T>,
    cumulative: Vec<f64>,
}

impl<T: Copy> WeightedSelector<T> {
    /// Build a selector from `(candidate, weight)` pairs
    ///
    /// Either every weight is given or none is; with none, selection is
    /// uniform. Fails with `InvalidDistribution` when the list is empty, a
    /// weight is negative or not finite, the weights sum past `f64::MAX`, or
    /// all weights are zero.
    pub fn new(candidates: &[(T, Option<f64>)]) -> Result<Self> {
        if candidates.is_empty() {
            return Err(ForgeError::InvalidDistribution("no candidates".into()));
        }

        let given = candidates.iter().filter(|(_, w)| w.is_some()).count();
        if given != 0 && given != candidates.len() {
            return Err(ForgeError::InvalidDistribution(
                "weights must be given for all candidates or none".into(),
            ));
        }

        let mut items = Vec::with_capacity(candidates.len());
        let mut cumulative = Vec::with_capacity(candidates.len());
        let mut total = 0.0;
        for &(item, weight) in candidates {
            let weight = weight.unwrap_or(1.0);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ForgeError::InvalidDistribution(format!(
                    "weight {} is not a finite non-negative number",
                    weight
                )));
            }
            total += weight;
            items.push(item);
            cumulative.push(total);
        }

        if !total.is_finite() {
            return Err(ForgeError::InvalidDistribution(
                "sum of weights is not finite".into(),
            ));
        }
        if total <= 0.0 {
            return Err(ForgeError::InvalidDistribution("all weights are zero".into()));
        }

        Ok(Self { items, cumulative })
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw one candidate
    pub fn pick(&self, rng: &mut impl Rng) -> T {
        let draw = rng.gen_range(0.0..self.total());
        let index = self
            .cumulative
            .partition_point(|&c| c <= draw)
            .min(self.items.len() - 1);
        self.items[index]
    }
}

/// One-shot weighted choice over `(candidate, weight)` pairs
pub fn select<T: Copy>(candidates: &[(T, Option<f64>)], rng: &mut impl Rng) -> Result<T> {
    Ok(WeightedSelector::new(candidates)?.pick(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_candidates_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let candidates: [(u8, Option<f64>); 0] = [];
        assert!(matches!(
            select(&candidates, &mut rng),
            Err(ForgeError::InvalidDistribution(_))
        ));
    }

    #[test]
    fn test_all_zero_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(matches!(
            select(&[('x', Some(0.0))], &mut rng),
            Err(ForgeError::InvalidDistribution(_))
        ));
        assert!(matches!(
            select(&[('x', Some(0.0)), ('y', Some(0.0))], &mut rng),
            Err(ForgeError::InvalidDistribution(_))
        ));
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        assert!(WeightedSelector::new(&[('x', Some(-1.0)), ('y', Some(2.0))]).is_err());
        assert!(WeightedSelector::new(&[('x', Some(f64::NAN))]).is_err());
        assert!(WeightedSelector::new(&[('x', Some(f64::INFINITY))]).is_err());
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(matches!(
            select(&[("a", Some(f64::MAX)), ("b", Some(f64::MAX))], &mut rng),
            Err(ForgeError::InvalidDistribution(_))
        ));
    }

    #[test]
    fn test_mixed_weights_rejected() {
        assert!(WeightedSelector::new(&[('x', Some(1.0)), ('y', None)]).is_err());
    }

    #[test]
    fn test_zero_weight_never_picked() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let selector = WeightedSelector::new(&[('x', Some(0.0)), ('y', Some(1.0)), ('z', Some(0.0))])
            .unwrap();
        for _ in 0..1000 {
            assert_eq!(selector.pick(&mut rng), 'y');
        }
    }

    #[test]
    fn test_unnormalized_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let selector = WeightedSelector::new(&[(0usize, Some(3.0)), (1usize, Some(7.0))]).unwrap();
        assert_eq!(selector.total(), 10.0);

        let draws = 10_000;
        let firsts = (0..draws).filter(|_| selector.pick(&mut rng) == 0).count();
        let freq = firsts as f64 / draws as f64;
        assert!((freq - 0.3).abs() < 0.05, "observed {}", freq);
    }

    #[test]
    fn test_absent_weights_are_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let selector = WeightedSelector::new(&[('a', None), ('b', None)]).unwrap();

        let draws = 4000;
        let a = (0..draws).filter(|_| selector.pick(&mut rng) == 'a').count();
        let freq = a as f64 / draws as f64;
        assert!((freq - 0.5).abs() < 0.05, "observed {}", freq);
    }

    #[test]
    fn test_single_candidate_always_wins() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(select(&[("only", Some(0.5))], &mut rng).unwrap(), "only");
        }
    }
}
