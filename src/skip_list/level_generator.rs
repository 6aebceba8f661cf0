use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Geometric};

/// Construction parameters of a [`SkipList`](super::SkipList).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipListParams {
    /// Highest number of levels a node may span.
    pub max_level: usize,
    /// Probability that a node present on some level also appears on the next one.
    pub promotion: f64,
    /// Fixes the level sequence, for reproducible layouts.
    pub seed: Option<u64>,
}

impl SkipListParams {
    pub fn seeded(seed: u64) -> Self {
        SkipListParams {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl Default for SkipListParams {
    fn default() -> Self {
        SkipListParams {
            max_level: 16,
            promotion: 0.5,
            seed: None,
        }
    }
}

/// Draws node heights: `1 + Geometric(1 - promotion)`, capped at `max_level`.
///
/// A height of `h` happens with probability `promotion^(h-1) * (1 - promotion)`
/// below the cap.
#[derive(Debug, Clone)]
pub(crate) struct LevelGenerator {
    max_level: usize,
    distribution: Geometric,
    rng: StdRng,
}

impl LevelGenerator {
    /// # Panics
    /// If `max_level` is zero or `promotion` lies outside `[0, 1)`.
    pub(crate) fn new(params: &SkipListParams) -> Self {
        assert!(params.max_level > 0, "a skip list needs at least one level");
        assert!(
            (0.0..1.0).contains(&params.promotion),
            "promotion probability must lie in [0, 1), got {}",
            params.promotion
        );
        let distribution = match Geometric::new(1.0 - params.promotion) {
            Ok(distribution) => distribution,
            Err(err) => panic!("invalid promotion probability {}: {err}", params.promotion),
        };
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        LevelGenerator {
            max_level: params.max_level,
            distribution,
            rng,
        }
    }

    pub(crate) fn max_level(&self) -> usize {
        self.max_level
    }

    pub(crate) fn next_level(&mut self) -> usize {
        let promotions = self.distribution.sample(&mut self.rng);
        promotions.saturating_add(1).min(self.max_level as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(max_level: usize, promotion: f64) -> SkipListParams {
        SkipListParams {
            max_level,
            promotion,
            seed: Some(42),
        }
    }

    #[test]
    fn levels_stay_within_bounds() {
        let mut generator = LevelGenerator::new(&params(4, 0.9));
        for _ in 0..1000 {
            let level = generator.next_level();
            assert!((1..=4).contains(&level));
        }
    }

    #[test]
    fn zero_promotion_gives_single_level() {
        let mut generator = LevelGenerator::new(&params(16, 0.0));
        assert!((0..100).all(|_| generator.next_level() == 1));
    }

    #[test]
    fn half_promotion_halves_each_level() {
        let mut generator = LevelGenerator::new(&params(16, 0.5));
        let draws = 20_000;
        let ones = (0..draws).filter(|_| generator.next_level() == 1).count();
        let ratio = ones as f64 / draws as f64;
        assert!((0.47..0.53).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn same_seed_same_levels() {
        let mut a = LevelGenerator::new(&params(16, 0.5));
        let mut b = LevelGenerator::new(&params(16, 0.5));
        let a_levels: Vec<_> = (0..50).map(|_| a.next_level()).collect();
        let b_levels: Vec<_> = (0..50).map(|_| b.next_level()).collect();
        assert_eq!(a_levels, b_levels);
    }

    #[test]
    #[should_panic]
    fn certain_promotion_panics() {
        let _ = LevelGenerator::new(&params(16, 1.0));
    }

    #[test]
    #[should_panic]
    fn zero_max_level_panics() {
        let _ = LevelGenerator::new(&params(0, 0.5));
    }
}
