use crate::algos::{BoardSize, GridTopology};
use crate::constants::STARTING_FOOD;

use std::fmt::{self, Formatter};

use derive_more::Display;
use serde::Serialize;

pub type PlayerId = u32;

/// A chain of edges converted to rivers by a single growth attempt, in walk order.
pub type RiverPath = Vec<EdgeId>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Terrain {
    #[default]
    #[display("PLAIN")]
    Plain,
    #[display("MOUNTAIN")]
    Mountain,
    #[display("DESERT")]
    Desert,
    #[display("LAKE")]
    Lake,
    #[display("FOREST")]
    Forest,
}

impl Terrain {
    /// Every terrain in the order the cumulative thresholds map onto.
    pub const ALL: [Terrain; 5] = [
        Terrain::Plain,
        Terrain::Mountain,
        Terrain::Desert,
        Terrain::Lake,
        Terrain::Forest,
    ];

    // Elevated terrain feeds mountain ridges on the surrounding edges.
    pub fn is_high(self) -> bool {
        matches!(self, Terrain::Mountain | Terrain::Desert)
    }

    pub fn is_water_source(self) -> bool {
        matches!(self, Terrain::Mountain | Terrain::Lake)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeFeature {
    #[default]
    #[display("PLAIN")]
    Plain,
    #[display("MOUNTAIN")]
    Mountain,
    #[display("RIVER")]
    River,
}

impl EdgeFeature {
    pub fn blocks_river(self) -> bool {
        matches!(self, EdgeFeature::Mountain | EdgeFeature::River)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    pub const fn new(x: u32, y: u32) -> Self {
        TileCoord { x, y }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identifies an edge by orientation and grid coordinates.
///
/// Horizontal edges live on an `(N + 1) x N` grid (rows `0..=N`, columns `0..N`)
/// and vertical edges on an `N x (N + 1)` grid (rows `0..N`, columns `0..=N`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId {
    pub orientation: Orientation,
    pub x: u32,
    pub y: u32,
}

impl EdgeId {
    pub const fn horizontal(x: u32, y: u32) -> Self {
        EdgeId {
            orientation: Orientation::Horizontal,
            x,
            y,
        }
    }

    pub const fn vertical(x: u32, y: u32) -> Self {
        EdgeId {
            orientation: Orientation::Vertical,
            x,
            y,
        }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        };
        write!(f, "{}({}, {})", tag, self.x, self.y)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    Infantry,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Building {
    Paddy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    coord: TileCoord,
    terrain: Terrain,
    owner: Option<PlayerId>,
    unit: Option<Unit>,
    building: Option<Building>,
}

impl Tile {
    pub(crate) fn new(coord: TileCoord) -> Self {
        Tile {
            coord,
            terrain: Terrain::Plain,
            owner: None,
            unit: None,
            building: None,
        }
    }

    pub fn coord(&self) -> TileCoord {
        self.coord
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    pub fn unit(&self) -> Option<Unit> {
        self.unit
    }

    pub fn building(&self) -> Option<Building> {
        self.building
    }

    pub(crate) fn set_terrain(&mut self, terrain: Terrain) {
        self.terrain = terrain;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    id: EdgeId,
    feature: EdgeFeature,
}

impl Edge {
    pub(crate) fn new(id: EdgeId) -> Self {
        Edge {
            id,
            feature: EdgeFeature::Plain,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn feature(&self) -> EdgeFeature {
        self.feature
    }

    // Features only ever move away from PLAIN, never between MOUNTAIN and RIVER.
    pub(crate) fn set_feature(&mut self, feature: EdgeFeature) {
        debug_assert_eq!(
            self.feature,
            EdgeFeature::Plain,
            "edge {} already carries a feature",
            self.id
        );
        self.feature = feature;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerState {
    #[default]
    #[display("TRIBE")]
    Tribe,
}

/// A seat at the table together with its starting economy.
///
/// Food and soldier counters only hold their initial values here; nothing in
/// board generation changes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub color: String,
    pub is_ai: bool,
    pub state: PlayerState,
    pub food: u32,
    pub food_cap: u32,
    pub soldier_points: u32,
    pub soldier_cap: u32,
}

impl Player {
    pub fn new(id: PlayerId, color: impl Into<String>, is_ai: bool) -> Self {
        Player {
            id,
            color: color.into(),
            is_ai,
            state: PlayerState::Tribe,
            food: STARTING_FOOD,
            food_cap: 0,
            soldier_points: 0,
            soldier_cap: 0,
        }
    }

    /// The two seat roster every game starts with: one human, one AI.
    pub fn default_roster() -> Vec<Player> {
        vec![
            Player::new(1, "#ff4444", false),
            Player::new(2, "#4444ff", true),
        ]
    }
}

/// A generated board: an `N x N` tile grid plus its two edge grids.
///
/// Terrain and edge features are fixed once generation returns; only tile
/// occupancy can change afterwards through [`Board::occupy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    tiles: Vec<Tile>,
    horizontal_edges: Vec<Edge>,
    vertical_edges: Vec<Edge>,
    rivers: Vec<RiverPath>,
}

impl Board {
    pub(crate) fn new(size: BoardSize) -> Self {
        let topology = GridTopology::new(size);
        let n = size.get();

        let tiles = (0..n)
            .flat_map(|y| (0..n).map(move |x| Tile::new(TileCoord::new(x, y))))
            .collect();
        let horizontal_edges = topology.horizontal_edges().map(Edge::new).collect();
        let vertical_edges = topology.vertical_edges().map(Edge::new).collect();

        Board {
            size,
            tiles,
            horizontal_edges,
            vertical_edges,
            rivers: Vec::new(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size.get()
    }

    pub fn topology(&self) -> GridTopology {
        GridTopology::new(self.size)
    }

    pub fn tile(&self, x: u32, y: u32) -> Option<&Tile> {
        self.tile_index(x, y).map(|idx| &self.tiles[idx])
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        match id.orientation {
            Orientation::Horizontal => self.horizontal_index(id).map(|i| &self.horizontal_edges[i]),
            Orientation::Vertical => self.vertical_index(id).map(|i| &self.vertical_edges[i]),
        }
    }

    /// Horizontal edges in row-major order, `N + 1` rows of `N`.
    pub fn horizontal_edges(&self) -> &[Edge] {
        &self.horizontal_edges
    }

    /// Vertical edges in row-major order, `N` rows of `N + 1`.
    pub fn vertical_edges(&self) -> &[Edge] {
        &self.vertical_edges
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.horizontal_edges.iter().chain(self.vertical_edges.iter())
    }

    /// The river paths grown during generation, one per successful attempt.
    pub fn rivers(&self) -> &[RiverPath] {
        &self.rivers
    }

    pub fn terrain_count(&self, terrain: Terrain) -> usize {
        self.tiles.iter().filter(|t| t.terrain == terrain).count()
    }

    pub fn feature_count(&self, feature: EdgeFeature) -> usize {
        self.edges().filter(|e| e.feature == feature).count()
    }

    /// Places a player's starting assets on a tile. Terrain is left untouched.
    pub fn occupy(
        &mut self,
        coord: TileCoord,
        owner: PlayerId,
        unit: Unit,
        building: Building,
    ) -> Option<&Tile> {
        let idx = self.tile_index(coord.x, coord.y)?;
        let tile = &mut self.tiles[idx];

        tile.owner = Some(owner);
        tile.unit = Some(unit);
        tile.building = Some(building);

        Some(tile)
    }

    #[cfg(test)]
    pub(crate) fn tile_mut(&mut self, x: u32, y: u32) -> Option<&mut Tile> {
        self.tile_index(x, y).map(|idx| &mut self.tiles[idx])
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        match id.orientation {
            Orientation::Horizontal => self
                .horizontal_index(id)
                .map(|i| &mut self.horizontal_edges[i]),
            Orientation::Vertical => self
                .vertical_index(id)
                .map(|i| &mut self.vertical_edges[i]),
        }
    }

    pub(crate) fn set_rivers(&mut self, rivers: Vec<RiverPath>) {
        self.rivers = rivers;
    }

    fn tile_index(&self, x: u32, y: u32) -> Option<usize> {
        let n = self.size.get();
        if x >= n || y >= n {
            return None;
        }

        Some((y * n + x) as usize)
    }

    fn horizontal_index(&self, id: EdgeId) -> Option<usize> {
        let n = self.size.get();
        if id.x >= n || id.y > n {
            return None;
        }

        Some((id.y * n + id.x) as usize)
    }

    fn vertical_index(&self, id: EdgeId) -> Option<usize> {
        let n = self.size.get();
        if id.x > n || id.y >= n {
            return None;
        }

        Some((id.y * (n + 1) + id.x) as usize)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn board_of(size: u32) -> Board {
        Board::new(BoardSize::new(size).unwrap())
    }

    #[test]
    fn test_board_grid_dimensions() {
        for size in [1, 2, 5, 8] {
            let board = board_of(size);
            let n = size as usize;

            assert_eq!(board.tiles().len(), n * n);
            assert_eq!(board.horizontal_edges().len(), (n + 1) * n);
            assert_eq!(board.vertical_edges().len(), n * (n + 1));
        }
    }

    #[test]
    fn test_edges_are_stored_row_major() {
        let board = board_of(3);

        // Row 1 of the horizontal grid starts right after the 3 edges of row 0
        assert_eq!(board.horizontal_edges()[3].id(), EdgeId::horizontal(0, 1));
        // Vertical rows are one edge wider than the board
        assert_eq!(board.vertical_edges()[4].id(), EdgeId::vertical(0, 1));
        assert_eq!(board.vertical_edges()[3].id(), EdgeId::vertical(3, 0));
    }

    #[test]
    fn test_out_of_bounds_lookups() {
        let board = board_of(4);

        assert!(board.tile(4, 0).is_none());
        assert!(board.tile(0, 4).is_none());
        assert!(board.edge(EdgeId::horizontal(3, 4)).is_some());
        assert!(board.edge(EdgeId::horizontal(4, 0)).is_none());
        assert!(board.edge(EdgeId::horizontal(0, 5)).is_none());
        assert!(board.edge(EdgeId::vertical(4, 3)).is_some());
        assert!(board.edge(EdgeId::vertical(5, 0)).is_none());
        assert!(board.edge(EdgeId::vertical(0, 4)).is_none());
    }

    #[test]
    fn test_new_board_is_plain() {
        let board = board_of(5);

        assert_eq!(board.terrain_count(Terrain::Plain), 25);
        assert_eq!(board.feature_count(EdgeFeature::Plain), 60);
        assert!(board.rivers().is_empty());
    }

    #[test]
    fn test_occupy_keeps_terrain() {
        let mut board = board_of(3);
        board.tile_mut(1, 2).unwrap().set_terrain(Terrain::Forest);

        let tile = board
            .occupy(TileCoord::new(1, 2), 7, Unit::Infantry, Building::Paddy)
            .cloned()
            .unwrap();

        assert_eq!(tile.terrain(), Terrain::Forest);
        assert_eq!(tile.owner(), Some(7));
        assert_eq!(tile.unit(), Some(Unit::Infantry));
        assert_eq!(tile.building(), Some(Building::Paddy));

        assert!(
            board
                .occupy(TileCoord::new(3, 0), 7, Unit::Infantry, Building::Paddy)
                .is_none()
        );
    }

    #[test]
    fn test_terrain_predicates() {
        let high = Terrain::ALL
            .iter()
            .filter(|t| t.is_high())
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(high, vec![Terrain::Mountain, Terrain::Desert]);

        let sources = Terrain::ALL
            .iter()
            .filter(|t| t.is_water_source())
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(sources, vec![Terrain::Mountain, Terrain::Lake]);
    }

    #[test]
    fn test_roster_starts_as_fed_tribes() {
        let roster = Player::default_roster();

        assert_eq!(roster.len(), 2);
        assert!(!roster[0].is_ai);
        assert!(roster[1].is_ai);

        for player in roster {
            assert_eq!(player.state, PlayerState::Tribe);
            assert_eq!(player.food, 5);
            assert_eq!(player.food_cap, 0);
            assert_eq!(player.soldier_points, 0);
            assert_eq!(player.soldier_cap, 0);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(EdgeId::horizontal(2, 3).to_string(), "H(2, 3)");
        assert_eq!(EdgeId::vertical(0, 1).to_string(), "V(0, 1)");
        assert_eq!(Terrain::Lake.to_string(), "LAKE");
        assert_eq!(EdgeFeature::River.to_string(), "RIVER");
    }
}
