use super::{BoardBuilder, GeneratorConfig};
use crate::algos::GridTopology;
use crate::types::{Board, EdgeFeature, EdgeId, RiverPath};

use rand::Rng;
use tracing::event;

impl BoardBuilder {
    /// Runs the configured number of growth attempts, each starting from a
    /// source picked out of the same `sources` snapshot.
    ///
    /// Sources that earlier attempts already turned into rivers stay in the
    /// snapshot; picking one ends that attempt without growth. Once every
    /// source is blocked the remaining attempts cannot grow anything and are
    /// skipped.
    pub(super) fn grow_rivers<R: Rng + ?Sized>(
        board: &mut Board,
        topology: &GridTopology,
        sources: &[EdgeId],
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Vec<RiverPath> {
        if sources.is_empty() {
            event!(
                tracing::Level::WARN,
                "No river sources available, skipping river growth"
            );

            return Vec::new();
        }

        let mut rivers = Vec::new();

        for attempt in 0..config.river_count() {
            let source = sources[rng.random_range(0..sources.len())];

            let path = Self::grow_river(board, topology, source, config.river_max_length(), rng);

            event!(
                tracing::Level::TRACE,
                "River attempt #{} from {} converted {} edges",
                attempt,
                source,
                path.len()
            );

            if !path.is_empty() {
                rivers.push(path);
            } else if Self::all_sources_blocked(board, sources) {
                event!(
                    tracing::Level::DEBUG,
                    "Every river source is blocked after {} attempts, stopping",
                    attempt + 1
                );

                break;
            }
        }

        rivers
    }

    fn all_sources_blocked(board: &Board, sources: &[EdgeId]) -> bool {
        sources.iter().all(|source| {
            board
                .edge(*source)
                .is_none_or(|edge| edge.feature().blocks_river())
        })
    }

    /// Random walk from `source` turning PLAIN edges into river edges.
    ///
    /// The walk stops when it reaches a mountain or river edge, when every
    /// neighbour is blocked, or after `max_length` steps.
    pub(super) fn grow_river<R: Rng + ?Sized>(
        board: &mut Board,
        topology: &GridTopology,
        source: EdgeId,
        max_length: usize,
        rng: &mut R,
    ) -> RiverPath {
        let mut path = Vec::new();
        let mut current = Some(source);
        let mut length = 0;

        while let Some(edge_id) = current {
            if length >= max_length {
                break;
            }

            let Some(edge) = board.edge_mut(edge_id) else {
                break;
            };

            if edge.feature().blocks_river() {
                break;
            }

            // Marking before looking at neighbours keeps the walk from
            // stepping back onto this edge.
            edge.set_feature(EdgeFeature::River);
            path.push(edge_id);

            let open_neighbours = topology
                .adjacent_edges(edge_id)
                .into_iter()
                .filter(|neighbour| {
                    board
                        .edge(*neighbour)
                        .is_some_and(|edge| !edge.feature().blocks_river())
                })
                .collect::<Vec<_>>();

            current = if open_neighbours.is_empty() {
                None
            } else {
                Some(open_neighbours[rng.random_range(0..open_neighbours.len())])
            };
            length += 1;
        }

        path
    }
}
