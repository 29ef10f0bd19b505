// Poem generation tunables.
//
// Both ranges are inclusive on both ends. The defaults reproduce the
// classic shape: lines of 5-7 words, a minimum poem length of 10-15 lines.
// The true poem length may exceed the minimum so the final sentence can
// finish — see `poem.rs`.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tunable parameters for poem generation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoemConfig {
    /// Fewest words a line may target.
    pub line_words_min: usize,
    /// Most words a line may target.
    pub line_words_max: usize,
    /// Lower bound for the randomly chosen minimum line count.
    pub poem_lines_min: usize,
    /// Upper bound for the randomly chosen minimum line count.
    pub poem_lines_max: usize,
}

impl Default for PoemConfig {
    fn default() -> Self {
        PoemConfig {
            line_words_min: 5,
            line_words_max: 7,
            poem_lines_min: 10,
            poem_lines_max: 15,
        }
    }
}

impl PoemConfig {
    /// Draw a target width for one line.
    ///
    /// Panics if `line_words_min > line_words_max`.
    pub fn line_width(&self, rng: &mut impl Rng) -> usize {
        rng.random_range(self.line_words_min..=self.line_words_max)
    }

    /// Draw the minimum line count for one poem.
    ///
    /// Panics if `poem_lines_min > poem_lines_max`.
    pub fn min_lines(&self, rng: &mut impl Rng) -> usize {
        rng.random_range(self.poem_lines_min..=self.poem_lines_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_defaults() {
        let config = PoemConfig::default();
        assert_eq!(config.line_words_min, 5);
        assert_eq!(config.line_words_max, 7);
        assert_eq!(config.poem_lines_min, 10);
        assert_eq!(config.poem_lines_max, 15);
    }

    #[test]
    fn test_draws_stay_in_range() {
        let config = PoemConfig::default();
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..1000 {
            let w = config.line_width(&mut rng);
            assert!((5..=7).contains(&w), "line width out of range: {w}");
            let l = config.min_lines(&mut rng);
            assert!((10..=15).contains(&l), "min lines out of range: {l}");
        }
    }

    #[test]
    fn test_degenerate_range_is_constant() {
        let config = PoemConfig {
            line_words_min: 6,
            line_words_max: 6,
            poem_lines_min: 10,
            poem_lines_max: 10,
        };
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(config.line_width(&mut rng), 6);
            assert_eq!(config.min_lines(&mut rng), 10);
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = PoemConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PoemConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.line_words_max, config.line_words_max);
    }
}
