use super::{BoardBuilder, GeneratorConfig};
use crate::algos::GridTopology;
use crate::types::{Board, EdgeFeature};

use rand::Rng;

impl BoardBuilder {
    /// Raises mountain ridges on interior edges next to elevated tiles and
    /// returns how many edges were promoted.
    pub(super) fn classify_edges<R: Rng + ?Sized>(
        board: &mut Board,
        topology: &GridTopology,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> usize {
        let mut promoted = 0;

        for edge_id in topology.edges() {
            // Boundary edges have a single tile and never become ridges
            let Some((first, second)) = topology.bordering_tiles(edge_id) else {
                continue;
            };

            let high_count = [first, second]
                .into_iter()
                .filter_map(|coord| board.tile(coord.x, coord.y))
                .filter(|tile| tile.terrain().is_high())
                .count();

            let ridge_prob = match high_count {
                2 => config.both_high_mountain_prob(),
                1 => config.one_high_mountain_prob(),
                _ => continue,
            };

            if rng.random_bool(ridge_prob) {
                if let Some(edge) = board.edge_mut(edge_id) {
                    edge.set_feature(EdgeFeature::Mountain);
                    promoted += 1;
                }
            }
        }

        promoted
    }
}
