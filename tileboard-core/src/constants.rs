pub(crate) const DEFAULT_BOARD_SIZE: u32 = 8;
pub(crate) const DEFAULT_TERRAIN_THRESHOLDS: [f64; 4] = [0.5, 0.6, 0.7, 0.8];

pub(crate) const BOTH_HIGH_MOUNTAIN_PROB: f64 = 0.9;
pub(crate) const ONE_HIGH_MOUNTAIN_PROB: f64 = 0.3;

pub(crate) const RIVER_COUNT_MULTIPLIER: f64 = 1.5;
pub(crate) const RIVER_MAX_LENGTH: usize = 10;

pub(crate) const STARTING_FOOD: u32 = 5;

pub(crate) const TILE_SIZE: u32 = 70;
pub(crate) const EDGE_THICKNESS: u32 = 10;

#[cfg(test)]
pub(crate) const TEST_RANDOM_INITIAL: u64 = 0;
#[cfg(test)]
pub(crate) const TEST_RANDOM_INCREMENT: u64 = 0;
