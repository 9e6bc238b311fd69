//! Theme constants for the Titan Crash GUI

use egui::Color32;

use crate::Player;

// Board
pub const BOARD_BG: Color32 = Color32::from_rgb(26, 26, 26);
pub const EDGE_NEUTRAL: Color32 = Color32::WHITE;
pub const EDGE_WIDTH: f32 = 2.0;
pub const LABEL_BG: Color32 = Color32::from_rgb(26, 26, 26);
pub const LABEL_TEXT: Color32 = Color32::WHITE;
pub const LABEL_RADIUS: f32 = 12.0;

// Titans
pub const RED: Color32 = Color32::from_rgb(255, 68, 68);
pub const BLUE: Color32 = Color32::from_rgb(68, 68, 255);
pub const EMPTY_NODE: Color32 = Color32::WHITE;
pub const NODE_OUTLINE: Color32 = Color32::BLACK;

// Markers
pub const UNLOCKED_HIGHLIGHT: Color32 = Color32::from_rgb(0, 255, 0);
pub const SELECTED_MARKER: Color32 = Color32::from_rgb(255, 210, 60);
pub const HIGHLIGHT_GAP: f32 = 5.0;

// Panel
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

/// Seconds left below which a clock turns amber / red
pub const TIMER_WARNING_SECS: u32 = 60;
pub const TIMER_CRITICAL_SECS: u32 = 15;

pub fn player_color(player: Player) -> Color32 {
    match player {
        Player::Red => RED,
        Player::Blue => BLUE,
    }
}

pub fn occupant_color(occupant: Option<Player>) -> Color32 {
    occupant.map_or(EMPTY_NODE, player_color)
}

pub fn timer_color(remaining: u32) -> Color32 {
    if remaining <= TIMER_CRITICAL_SECS {
        TIMER_CRITICAL
    } else if remaining <= TIMER_WARNING_SECS {
        TIMER_WARNING
    } else {
        TIMER_NORMAL
    }
}
