use crate::constants::{EDGE_THICKNESS, TILE_SIZE};
use crate::types::{Board, Player};

use svg::Document;

mod svg_drawer;

pub(crate) use svg_drawer::SvgBoardDrawer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawConfig {
    pub tile_size: u32,
    pub edge_thickness: u32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        DrawConfig {
            tile_size: TILE_SIZE,
            edge_thickness: EDGE_THICKNESS,
        }
    }
}

impl DrawConfig {
    // Distance between the start of two consecutive tiles.
    pub(crate) fn stride(&self) -> u32 {
        self.tile_size + self.edge_thickness
    }

    pub(crate) fn canvas_size(&self, board_size: u32) -> u32 {
        board_size * self.stride() + self.edge_thickness
    }
}

pub(crate) trait BoardDrawer {
    fn draw(&self, board: &Board, players: &[Player], config: &DrawConfig) -> Document;
}
