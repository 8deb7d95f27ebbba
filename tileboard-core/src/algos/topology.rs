use super::BoardSize;
use crate::types::{EdgeId, Orientation, TileCoord};

/// Coordinate space of an `N x N` board and its two edge grids.
///
/// All queries are pure; positions outside the grids are never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTopology {
    size: u32,
}

impl GridTopology {
    pub fn new(size: BoardSize) -> Self {
        GridTopology { size: size.get() }
    }

    pub fn contains(&self, edge: EdgeId) -> bool {
        match edge.orientation {
            Orientation::Horizontal => edge.x < self.size && edge.y <= self.size,
            Orientation::Vertical => edge.x <= self.size && edge.y < self.size,
        }
    }

    /// Whether the edge lies on the outer perimeter of the board.
    pub fn is_boundary(&self, edge: EdgeId) -> bool {
        let line = match edge.orientation {
            Orientation::Horizontal => edge.y,
            Orientation::Vertical => edge.x,
        };

        line == 0 || line == self.size
    }

    /// The two tiles separated by an interior edge: above/below for horizontal
    /// edges, left/right for vertical ones. Boundary edges have no pair.
    pub fn bordering_tiles(&self, edge: EdgeId) -> Option<(TileCoord, TileCoord)> {
        if !self.contains(edge) || self.is_boundary(edge) {
            return None;
        }

        Some(match edge.orientation {
            Orientation::Horizontal => (
                TileCoord::new(edge.x, edge.y - 1),
                TileCoord::new(edge.x, edge.y),
            ),
            Orientation::Vertical => (
                TileCoord::new(edge.x - 1, edge.y),
                TileCoord::new(edge.x, edge.y),
            ),
        })
    }

    /// Every edge sharing an endpoint with `edge`.
    ///
    /// A horizontal edge only touches vertical edges and vice versa, so the
    /// result holds at most 4 entries.
    pub fn adjacent_edges(&self, edge: EdgeId) -> Vec<EdgeId> {
        if !self.contains(edge) {
            return Vec::new();
        }

        let EdgeId { x, y, .. } = edge;
        let mut neighbours = Vec::with_capacity(4);

        match edge.orientation {
            Orientation::Horizontal => {
                // Left endpoint, then right endpoint
                for col in [x, x + 1] {
                    if y > 0 {
                        neighbours.push(EdgeId::vertical(col, y - 1));
                    }
                    if y < self.size {
                        neighbours.push(EdgeId::vertical(col, y));
                    }
                }
            }
            Orientation::Vertical => {
                // Top endpoint, then bottom endpoint
                for row in [y, y + 1] {
                    if x > 0 {
                        neighbours.push(EdgeId::horizontal(x - 1, row));
                    }
                    if x < self.size {
                        neighbours.push(EdgeId::horizontal(x, row));
                    }
                }
            }
        }

        neighbours
    }

    pub fn horizontal_edges(&self) -> impl Iterator<Item = EdgeId> + use<> {
        let size = self.size;
        (0..=size).flat_map(move |y| (0..size).map(move |x| EdgeId::horizontal(x, y)))
    }

    pub fn vertical_edges(&self) -> impl Iterator<Item = EdgeId> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..=size).map(move |x| EdgeId::vertical(x, y)))
    }

    /// All horizontal edges followed by all vertical edges, each grid row-major.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + use<> {
        self.horizontal_edges().chain(self.vertical_edges())
    }
}
