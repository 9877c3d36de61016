//! Theme constants for the Cram GUI

use egui::Color32;

use crate::board::Player;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 229, 214);
pub const CELL_EMPTY: Color32 = Color32::from_rgb(250, 246, 238);
pub const GRID_LINE: Color32 = Color32::from_rgb(120, 110, 95);

// Domino colors
pub const RED_DOMINO: Color32 = Color32::from_rgb(200, 60, 55);
pub const RED_DOMINO_HIGHLIGHT: Color32 = Color32::from_rgb(235, 110, 100);
pub const BLUE_DOMINO: Color32 = Color32::from_rgb(50, 95, 190);
pub const BLUE_DOMINO_HIGHLIGHT: Color32 = Color32::from_rgb(100, 145, 230);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 210, 60);
pub const PICK_MARKER: Color32 = Color32::from_rgb(40, 40, 40);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 70)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_WIN: Color32 = Color32::from_rgb(50, 220, 50);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
/// Inset of a domino inside its two cells, as a share of the cell size
pub const DOMINO_INSET_RATIO: f32 = 0.12;
pub const LAST_MOVE_MARKER_WIDTH: f32 = 3.0;

/// Fill and highlight for a player's dominoes
pub fn player_colors(player: Player) -> (Color32, Color32) {
    match player {
        Player::Red => (RED_DOMINO, RED_DOMINO_HIGHLIGHT),
        Player::Blue => (BLUE_DOMINO, BLUE_DOMINO_HIGHLIGHT),
    }
}
