use super::BoardBuilder;
use crate::algos::GridTopology;
use crate::types::{Board, EdgeId};

impl BoardBuilder {
    /// Collects the edges a river may start from: every boundary edge, plus
    /// interior edges touching a mountain or lake tile.
    pub(crate) fn find_river_sources(board: &Board, topology: &GridTopology) -> Vec<EdgeId> {
        topology
            .edges()
            .filter(|edge_id| {
                if topology.is_boundary(*edge_id) {
                    return true;
                }

                topology
                    .bordering_tiles(*edge_id)
                    .into_iter()
                    .flat_map(|(first, second)| [first, second])
                    .filter_map(|coord| board.tile(coord.x, coord.y))
                    .any(|tile| tile.terrain().is_water_source())
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algos::BoardSize;
    use crate::types::Terrain;

    #[test]
    fn test_plain_board_only_has_boundary_sources() {
        let board = Board::new(BoardSize::new(8).unwrap());
        let topology = board.topology();

        let sources = BoardBuilder::find_river_sources(&board, &topology);

        assert_eq!(sources.len(), 32);
        assert!(sources.iter().all(|edge| topology.is_boundary(*edge)));
        assert_eq!(sources[0], EdgeId::horizontal(0, 0));
        assert_eq!(sources[8], EdgeId::horizontal(0, 8));
        assert_eq!(sources[16], EdgeId::vertical(0, 0));
        assert_eq!(sources[17], EdgeId::vertical(8, 0));
    }

    #[test]
    fn test_single_tile_board_sources() {
        let board = Board::new(BoardSize::new(1).unwrap());

        let sources = BoardBuilder::find_river_sources(&board, &board.topology());

        assert_eq!(
            sources,
            vec![
                EdgeId::horizontal(0, 0),
                EdgeId::horizontal(0, 1),
                EdgeId::vertical(0, 0),
                EdgeId::vertical(1, 0),
            ]
        );
    }

    #[test]
    fn test_water_sources_add_interior_edges() {
        let mut board = Board::new(BoardSize::new(3).unwrap());
        board.tile_mut(1, 1).unwrap().set_terrain(Terrain::Lake);
        // Deserts are elevated but hold no water
        board.tile_mut(0, 0).unwrap().set_terrain(Terrain::Desert);
        let topology = board.topology();

        let interior = BoardBuilder::find_river_sources(&board, &topology)
            .into_iter()
            .filter(|edge| !topology.is_boundary(*edge))
            .collect::<Vec<_>>();

        assert_eq!(
            interior,
            vec![
                EdgeId::horizontal(1, 1),
                EdgeId::horizontal(1, 2),
                EdgeId::vertical(1, 1),
                EdgeId::vertical(2, 1),
            ]
        );
    }
}
