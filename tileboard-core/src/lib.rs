mod algos;
mod constants;
mod types;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{Level, span};

pub use algos::{
    BoardSize, BoardSizeCannotBeZeroError, ConfigError, DrawConfig, GeneratorConfig,
    GeneratorConfigBuilder, GridTopology, SpawnError, TerrainThresholds, spawn_players,
};
pub use types::{
    Board, Building, Edge, EdgeFeature, EdgeId, Orientation, Player, PlayerId, PlayerState,
    RiverPath, Terrain, Tile, TileCoord, Unit,
};

/// Generates a board using the thread-local random source.
pub fn generate_board(config: &GeneratorConfig) -> Board {
    let mut rng = algos::RngHandler::rng();
    generate_board_with_rng(config, &mut rng)
}

/// Generates a board that is identical for identical `seed` and `config`.
pub fn generate_board_seeded(config: &GeneratorConfig, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_board_with_rng(config, &mut rng)
}

pub fn generate_board_with_rng<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Board {
    let span = span!(Level::DEBUG, "generate_board");
    let _guard = span.enter();

    let builder = algos::BoardBuilder::new(config.board_size());

    builder.build(config, rng)
}

/// The edges a river is allowed to start from on `board`.
pub fn river_sources(board: &Board) -> Vec<EdgeId> {
    algos::BoardBuilder::find_river_sources(board, &board.topology())
}

pub fn draw_board(board: &Board, players: &[Player], config: &DrawConfig) -> svg::Document {
    let span = span!(Level::DEBUG, "draw_board");
    let _guard = span.enter();

    algos::BoardDrawer::draw(&algos::SvgBoardDrawer, board, players, config)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_generate_board_uses_handler_rng() {
        // Under test the handler hands out a constant zero stream
        let config = GeneratorConfig::default();

        let board = generate_board(&config);

        assert_eq!(board.terrain_count(Terrain::Plain), 64);
        assert_eq!(board.feature_count(EdgeFeature::River), 10);
    }

    #[test]
    fn test_river_sources_of_generated_board() {
        let config = GeneratorConfig::builder().board_size(6).build().unwrap();
        let board = generate_board_seeded(&config, 99);

        let sources = river_sources(&board);
        let topology = board.topology();

        assert!(
            topology
                .edges()
                .filter(|edge| topology.is_boundary(*edge))
                .all(|edge| sources.contains(&edge))
        );
    }
}
