use crate::constants::{
    BOTH_HIGH_MOUNTAIN_PROB, DEFAULT_BOARD_SIZE, DEFAULT_TERRAIN_THRESHOLDS,
    ONE_HIGH_MOUNTAIN_PROB, RIVER_COUNT_MULTIPLIER, RIVER_MAX_LENGTH,
};
use crate::types::Terrain;

use serde::Serialize;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BoardSize(u32);

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("board size cannot be zero")]
pub struct BoardSizeCannotBeZeroError;

impl BoardSize {
    pub fn new(raw: u32) -> Result<Self, BoardSizeCannotBeZeroError> {
        if raw == 0 {
            return Err(BoardSizeCannotBeZeroError);
        }

        Ok(Self(raw))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    BoardSize(#[from] BoardSizeCannotBeZeroError),
    #[error("expected 4 terrain thresholds, got {0}")]
    ThresholdCount(usize),
    #[error("terrain threshold #{index} is {value}, expected a value in [0, 1]")]
    ThresholdOutOfRange { index: usize, value: f64 },
    #[error("terrain thresholds must be non-decreasing, but {previous} is followed by {next}")]
    ThresholdsNotMonotonic { previous: f64, next: f64 },
    #[error("{name} probability is {value}, expected a value in [0, 1]")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("river count multiplier is {0}, expected a finite non-negative value")]
    InvalidRiverMultiplier(f64),
}

/// Cumulative thresholds over PLAIN, MOUNTAIN, DESERT and LAKE.
///
/// A draw `r` in `[0, 1)` lands on the first terrain whose threshold exceeds it;
/// anything at or above the last threshold is FOREST.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TerrainThresholds([f64; 4]);

impl TerrainThresholds {
    pub fn new(thresholds: [f64; 4]) -> Result<Self, ConfigError> {
        for (index, value) in thresholds.iter().copied().enumerate() {
            // NaN fails the range check as well
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { index, value });
            }
        }

        for pair in thresholds.windows(2) {
            if pair[1] < pair[0] {
                return Err(ConfigError::ThresholdsNotMonotonic {
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }

        Ok(Self(thresholds))
    }

    pub fn values(&self) -> [f64; 4] {
        self.0
    }

    pub fn classify(&self, r: f64) -> Terrain {
        self.0
            .iter()
            .position(|threshold| r < *threshold)
            .map(|idx| Terrain::ALL[idx])
            .unwrap_or(Terrain::Forest)
    }

    /// The probability each terrain is drawn with, in [`Terrain::ALL`] order.
    pub fn probabilities(&self) -> [f64; 5] {
        let [t0, t1, t2, t3] = self.0;
        [t0, t1 - t0, t2 - t1, t3 - t2, 1.0 - t3]
    }
}

impl TryFrom<&[f64]> for TerrainThresholds {
    type Error = ConfigError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let thresholds: [f64; 4] = values
            .try_into()
            .map_err(|_| ConfigError::ThresholdCount(values.len()))?;

        Self::new(thresholds)
    }
}

impl Default for TerrainThresholds {
    fn default() -> Self {
        TerrainThresholds(DEFAULT_TERRAIN_THRESHOLDS)
    }
}

/// Every tunable of a generation pass, validated once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeneratorConfig {
    board_size: BoardSize,
    terrain_thresholds: TerrainThresholds,
    // Chance of a ridge between two elevated tiles.
    both_high_mountain_prob: f64,
    // Chance of a ridge spilling over from a single elevated tile.
    one_high_mountain_prob: f64,
    // Growth attempts per unit of board size, rounded down.
    river_count_multiplier: f64,
    river_max_length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            board_size: BoardSize(DEFAULT_BOARD_SIZE),
            terrain_thresholds: TerrainThresholds::default(),
            both_high_mountain_prob: BOTH_HIGH_MOUNTAIN_PROB,
            one_high_mountain_prob: ONE_HIGH_MOUNTAIN_PROB,
            river_count_multiplier: RIVER_COUNT_MULTIPLIER,
            river_max_length: RIVER_MAX_LENGTH,
        }
    }
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn terrain_thresholds(&self) -> &TerrainThresholds {
        &self.terrain_thresholds
    }

    pub fn both_high_mountain_prob(&self) -> f64 {
        self.both_high_mountain_prob
    }

    pub fn one_high_mountain_prob(&self) -> f64 {
        self.one_high_mountain_prob
    }

    pub fn river_count_multiplier(&self) -> f64 {
        self.river_count_multiplier
    }

    pub fn river_max_length(&self) -> usize {
        self.river_max_length
    }

    pub fn river_count(&self) -> usize {
        (self.board_size.get() as f64 * self.river_count_multiplier).floor() as usize
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfigBuilder {
    board_size: u32,
    terrain_thresholds: Vec<f64>,
    both_high_mountain_prob: f64,
    one_high_mountain_prob: f64,
    river_count_multiplier: f64,
    river_max_length: usize,
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        let base = GeneratorConfig::default();

        GeneratorConfigBuilder {
            board_size: base.board_size.get(),
            terrain_thresholds: base.terrain_thresholds.values().to_vec(),
            both_high_mountain_prob: base.both_high_mountain_prob,
            one_high_mountain_prob: base.one_high_mountain_prob,
            river_count_multiplier: base.river_count_multiplier,
            river_max_length: base.river_max_length,
        }
    }
}

impl GeneratorConfigBuilder {
    pub fn board_size(mut self, board_size: u32) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn terrain_thresholds(mut self, thresholds: &[f64]) -> Self {
        self.terrain_thresholds = thresholds.to_vec();
        self
    }

    pub fn both_high_mountain_prob(mut self, prob: f64) -> Self {
        self.both_high_mountain_prob = prob;
        self
    }

    pub fn one_high_mountain_prob(mut self, prob: f64) -> Self {
        self.one_high_mountain_prob = prob;
        self
    }

    pub fn river_count_multiplier(mut self, multiplier: f64) -> Self {
        self.river_count_multiplier = multiplier;
        self
    }

    pub fn river_max_length(mut self, max_length: usize) -> Self {
        self.river_max_length = max_length;
        self
    }

    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        let board_size = BoardSize::new(self.board_size)?;
        let terrain_thresholds = TerrainThresholds::try_from(self.terrain_thresholds.as_slice())?;

        let both_high_mountain_prob =
            Self::check_probability("both-high mountain", self.both_high_mountain_prob)?;
        let one_high_mountain_prob =
            Self::check_probability("one-high mountain", self.one_high_mountain_prob)?;

        if !self.river_count_multiplier.is_finite() || self.river_count_multiplier < 0.0 {
            return Err(ConfigError::InvalidRiverMultiplier(
                self.river_count_multiplier,
            ));
        }

        Ok(GeneratorConfig {
            board_size,
            terrain_thresholds,
            both_high_mountain_prob,
            one_high_mountain_prob,
            river_count_multiplier: self.river_count_multiplier,
            river_max_length: self.river_max_length,
        })
    }

    fn check_probability(name: &'static str, value: f64) -> Result<f64, ConfigError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::ProbabilityOutOfRange { name, value });
        }

        Ok(value)
    }
}
