mod board_builder;
mod board_drawer;
mod player_spawner;
mod topology;

pub(crate) use board_builder::BoardBuilder;
pub use board_builder::{
    BoardSize, BoardSizeCannotBeZeroError, ConfigError, GeneratorConfig, GeneratorConfigBuilder,
    TerrainThresholds,
};
pub use board_drawer::DrawConfig;
pub(crate) use board_drawer::{BoardDrawer, SvgBoardDrawer};
pub use player_spawner::{SpawnError, spawn_players};
pub use topology::GridTopology;

pub(crate) struct RngHandler;

impl RngHandler {
    #[cfg(not(test))]
    pub fn rng() -> impl rand::Rng {
        rand::rng()
    }

    #[cfg(test)]
    pub fn rng() -> impl rand::Rng {
        use crate::constants::TEST_RANDOM_INCREMENT;
        use crate::constants::TEST_RANDOM_INITIAL;
        use rand::rngs::mock::StepRng;

        StepRng::new(TEST_RANDOM_INITIAL, TEST_RANDOM_INCREMENT)
    }
}
