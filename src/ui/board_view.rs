//! Board rendering for the Titan Crash GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::snapshot::{EdgeView, GameSnapshot, NodeView};
use crate::Point;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Side of the square drawing area that fits the available space
    pub fn fit(ui: &egui::Ui) -> f32 {
        let available = ui.available_size();
        (available.x.min(available.y) - 20.0).max(100.0)
    }

    /// Render the board and return the click in board coordinates, if any
    pub fn show(&mut self, ui: &mut egui::Ui, snapshot: &GameSnapshot) -> Option<Point> {
        let size = snapshot.board_size;
        let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        for edge in &snapshot.edges {
            self.draw_edge(&painter, edge);
        }

        for node in &snapshot.nodes {
            self.draw_node(&painter, node, snapshot.node_radius);
        }

        for node in snapshot.highlighted() {
            let center = self.to_screen(node.pos);
            painter.circle_stroke(
                center,
                snapshot.node_radius + HIGHLIGHT_GAP,
                Stroke::new(2.0, UNLOCKED_HIGHLIGHT),
            );
        }

        if let Some(selected) = snapshot.selected {
            let center = self.to_screen(snapshot.node(selected).pos);
            painter.circle_stroke(
                center,
                snapshot.node_radius + HIGHLIGHT_GAP,
                Stroke::new(3.0, SELECTED_MARKER),
            );
        }

        if response.clicked() {
            return response.interact_pointer_pos().map(|p| self.to_board(p));
        }
        None
    }

    /// Edge line plus its weight label
    fn draw_edge(&self, painter: &Painter, edge: &EdgeView) {
        let color = edge.controlled_by.map_or(EDGE_NEUTRAL, player_color);
        painter.line_segment(
            [self.to_screen(edge.from), self.to_screen(edge.to)],
            Stroke::new(EDGE_WIDTH, color),
        );

        let label = self.to_screen(edge.label);
        painter.circle_filled(label, LABEL_RADIUS, LABEL_BG);
        painter.text(
            label,
            egui::Align2::CENTER_CENTER,
            edge.weight.to_string(),
            egui::FontId::proportional(14.0),
            LABEL_TEXT,
        );
    }

    fn draw_node(&self, painter: &Painter, node: &NodeView, radius: f32) {
        let center = self.to_screen(node.pos);
        painter.circle_filled(center, radius, occupant_color(node.occupant));
        painter.circle_stroke(center, radius, Stroke::new(2.0, NODE_OUTLINE));
    }

    /// Board coordinates to screen coordinates
    pub fn to_screen(&self, p: Point) -> Pos2 {
        self.board_rect.min + Vec2::new(p.x, p.y)
    }

    /// Screen coordinates to board coordinates
    pub fn to_board(&self, p: Pos2) -> Point {
        let relative = p - self.board_rect.min;
        Point::new(relative.x, relative.y)
    }
}
