use super::GridTopology;
use crate::types::{Board, EdgeFeature, Terrain};

use rand::Rng;
use tracing::event;

mod assign_terrain;
mod builder_config;
mod classify_edges;
mod find_river_sources;
mod grow_rivers;

pub use builder_config::{
    BoardSize, BoardSizeCannotBeZeroError, ConfigError, GeneratorConfig, GeneratorConfigBuilder,
    TerrainThresholds,
};

pub(crate) struct BoardBuilder {
    topology: GridTopology,
}

impl BoardBuilder {
    pub fn new(size: BoardSize) -> Self {
        BoardBuilder {
            topology: GridTopology::new(size),
        }
    }

    pub fn build<R: Rng + ?Sized>(&self, config: &GeneratorConfig, rng: &mut R) -> Board {
        let build_start = std::time::Instant::now();

        let mut board = Board::new(config.board_size());

        Self::assign_terrain(&mut board, config.terrain_thresholds(), rng);

        let terrain_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Assigned terrain to {} tiles in {:.2}ms: {}",
            board.tiles().len(),
            terrain_time.duration_since(build_start).as_millis(),
            Terrain::ALL
                .iter()
                .map(|terrain| format!("{}={}", terrain, board.terrain_count(*terrain)))
                .collect::<Vec<_>>()
                .join(" ")
        );

        let promoted = Self::classify_edges(&mut board, &self.topology, config, rng);

        let edges_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Promoted {} edges to mountain ridges in {:.2}ms",
            promoted,
            edges_time.duration_since(terrain_time).as_millis()
        );

        let sources = Self::find_river_sources(&board, &self.topology);

        event!(
            tracing::Level::DEBUG,
            "Found {} river source candidates",
            sources.len()
        );

        let rivers = Self::grow_rivers(&mut board, &self.topology, &sources, config, rng);

        let rivers_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Grew {} of {} rivers ({} river edges) in {:.2}ms",
            rivers.len(),
            config.river_count(),
            rivers.iter().map(Vec::len).sum::<usize>(),
            rivers_time.duration_since(edges_time).as_millis()
        );

        board.set_rivers(rivers);

        event!(
            tracing::Level::DEBUG,
            "Built {}x{} board with {} mountain and {} river edges in {:.2}ms total",
            board.size(),
            board.size(),
            board.feature_count(EdgeFeature::Mountain),
            board.feature_count(EdgeFeature::River),
            rivers_time.duration_since(build_start).as_millis()
        );

        board
    }
}
