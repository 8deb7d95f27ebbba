use svg::{
    Document,
    node::element::{Circle, Rectangle},
};

use super::{BoardDrawer, DrawConfig};
use crate::types::{Board, EdgeFeature, Orientation, Player, Terrain, Tile};

const PLAIN_GREEN: &str = "#a5d6a7";
const MOUNTAIN_BROWN: &str = "#8d6e63";
const DESERT_SAND: &str = "#ffe082";
const LAKE_BLUE: &str = "#4fc3f7";
const FOREST_GREEN: &str = "#2e7d32";

const EDGE_GRAY: &str = "#e0e0e0";
const RIDGE_BROWN: &str = "#5d4037";
const RIVER_BLUE: &str = "#0288d1";
const CORNER_GRAY: &str = "#9e9e9e";

const UNIT_SLATE: &str = "#37474f";
const BUILDING_YELLOW: &str = "#fdd835";
const UNKNOWN_OWNER_BLACK: &str = "#000000";

/// Lays the board out as alternating strips: corner, horizontal edge, corner...
/// on edge rows and vertical edge, tile, vertical edge... on tile rows.
#[derive(Debug)]
pub(crate) struct SvgBoardDrawer;

impl BoardDrawer for SvgBoardDrawer {
    fn draw(&self, board: &Board, players: &[Player], config: &DrawConfig) -> Document {
        let canvas_size = config.canvas_size(board.size());

        let mut document = Document::new()
            .set("width", canvas_size)
            .set("height", canvas_size);

        for row in 0..=board.size() {
            for col in 0..=board.size() {
                document = document.add(Self::draw_corner(col, row, config));
            }
        }

        for edge in board.edges() {
            let id = edge.id();
            let (x, y, width, height) = match id.orientation {
                Orientation::Horizontal => (
                    id.x * config.stride() + config.edge_thickness,
                    id.y * config.stride(),
                    config.tile_size,
                    config.edge_thickness,
                ),
                Orientation::Vertical => (
                    id.x * config.stride(),
                    id.y * config.stride() + config.edge_thickness,
                    config.edge_thickness,
                    config.tile_size,
                ),
            };

            let rect = Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", width)
                .set("height", height)
                .set("fill", Self::feature_color(edge.feature()));

            document = document.add(rect);
        }

        for tile in board.tiles() {
            document = Self::draw_tile(document, tile, players, config);
        }

        document
    }
}

impl SvgBoardDrawer {
    fn draw_corner(col: u32, row: u32, config: &DrawConfig) -> Rectangle {
        Rectangle::new()
            .set("x", col * config.stride())
            .set("y", row * config.stride())
            .set("width", config.edge_thickness)
            .set("height", config.edge_thickness)
            .set("fill", CORNER_GRAY)
    }

    fn draw_tile(
        mut document: Document,
        tile: &Tile,
        players: &[Player],
        config: &DrawConfig,
    ) -> Document {
        let coord = tile.coord();
        let left = coord.x * config.stride() + config.edge_thickness;
        let top = coord.y * config.stride() + config.edge_thickness;

        document = document.add(
            Rectangle::new()
                .set("x", left)
                .set("y", top)
                .set("width", config.tile_size)
                .set("height", config.tile_size)
                .set("fill", Self::terrain_color(tile.terrain())),
        );

        // Markers take a quarter of the tile, tucked into its corners
        let marker = config.tile_size / 4;
        let padding = config.tile_size / 10;

        if let Some(owner) = tile.owner() {
            let color = players
                .iter()
                .find(|player| player.id == owner)
                .map(|player| player.color.as_str())
                .unwrap_or(UNKNOWN_OWNER_BLACK);

            document = document.add(
                Circle::new()
                    .set("cx", left + padding + marker / 2)
                    .set("cy", top + padding + marker / 2)
                    .set("r", marker / 2)
                    .set("fill", color),
            );
        }

        if tile.unit().is_some() {
            document = document.add(
                Rectangle::new()
                    .set("x", left + padding)
                    .set("y", top + config.tile_size - padding - marker)
                    .set("width", marker)
                    .set("height", marker)
                    .set("fill", UNIT_SLATE),
            );
        }

        if tile.building().is_some() {
            document = document.add(
                Rectangle::new()
                    .set("x", left + config.tile_size - padding - marker)
                    .set("y", top + config.tile_size - padding - marker)
                    .set("width", marker)
                    .set("height", marker)
                    .set("fill", BUILDING_YELLOW),
            );
        }

        document
    }

    fn terrain_color(terrain: Terrain) -> &'static str {
        match terrain {
            Terrain::Plain => PLAIN_GREEN,
            Terrain::Mountain => MOUNTAIN_BROWN,
            Terrain::Desert => DESERT_SAND,
            Terrain::Lake => LAKE_BLUE,
            Terrain::Forest => FOREST_GREEN,
        }
    }

    fn feature_color(feature: EdgeFeature) -> &'static str {
        match feature {
            EdgeFeature::Plain => EDGE_GRAY,
            EdgeFeature::Mountain => RIDGE_BROWN,
            EdgeFeature::River => RIVER_BLUE,
        }
    }
}
