//! Main application for the Titan Crash GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel};

use crate::snapshot::GameSnapshot;
use crate::{GameConfig, GameController, GameEvent, Phase, Player, Verdict};

use super::board_view::BoardView;
use super::theme::*;

/// Main Titan Crash application
pub struct TitanCrashApp {
    game: GameController,
    board_view: BoardView,
    /// Last announced verdict; outlives the reset that follows a timeout
    announcement: Option<Verdict>,
    message: Option<String>,
}

impl TitanCrashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            game: GameController::new(config),
            board_view: BoardView::default(),
            announcement: None,
            message: None,
        }
    }

    fn start(&mut self) {
        self.announcement = None;
        self.message = None;
        self.game.start();
    }

    fn reset(&mut self) {
        self.announcement = None;
        self.message = None;
        self.game.reset();
    }

    fn handle_events(&mut self) {
        for event in self.game.drain_events() {
            match event {
                GameEvent::GameOver(verdict) => self.announcement = Some(verdict),
                GameEvent::Captured { by, nodes } => {
                    self.message = Some(format!("{} captured {} titan(s)", by, nodes.len()));
                }
                GameEvent::TurnPassed { .. } | GameEvent::ClockTick { .. } => {}
            }
        }
    }

    /// Render the side panel with game info and controls
    fn render_side_panel(&mut self, ctx: &Context, snap: &GameSnapshot) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("TITAN CRASH").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui, snap);
                ui.add_space(10.0);

                self.render_clock_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui, snap);
                ui.add_space(10.0);

                self.render_actions_card(ui, snap);

                if let Some(verdict) = self.announcement {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &verdict);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_SECONDARY));
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui, snap: &GameSnapshot) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CURRENT PLAYER").size(10.0).color(TEXT_MUTED));
            ui.label(
                RichText::new(snap.current.name())
                    .size(20.0)
                    .strong()
                    .color(player_color(snap.current)),
            );
            ui.add_space(6.0);
            ui.label(RichText::new("PHASE").size(10.0).color(TEXT_MUTED));
            ui.label(RichText::new(snap.phase.name()).size(14.0).color(TEXT_PRIMARY));

            if snap.phase == Phase::Placement {
                let left = snap.titans_per_player.saturating_sub(snap.placed[snap.current]);
                ui.label(RichText::new(format!("{} titans left to place", left)).size(11.0).color(TEXT_SECONDARY));
            }
            if snap.paused {
                ui.label(RichText::new("Paused").size(12.0).color(TIMER_WARNING));
            }
        });
    }

    fn render_clock_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMERS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for player in Player::ALL {
                let timer = self.game.timer(player);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player.name()).size(14.0).color(player_color(player)));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(timer.display())
                                .size(22.0)
                                .strong()
                                .color(timer_color(timer.remaining())),
                        );
                    });
                });
            }
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui, snap: &GameSnapshot) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for player in Player::ALL {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player.name()).size(14.0).color(player_color(player)));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(snap.scores[player].to_string()).size(18.0).color(TEXT_PRIMARY));
                    });
                });
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui, snap: &GameSnapshot) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CONTROLS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if snap.controls.start && ui.button("Start").clicked() {
                    self.start();
                }

                let pause_label = if snap.paused { "Resume" } else { "Pause" };
                if ui.add_enabled(snap.controls.pause, egui::Button::new(pause_label)).clicked() {
                    self.game.toggle_pause();
                }

                if ui.add_enabled(snap.controls.reset, egui::Button::new("Reset")).clicked() {
                    self.reset();
                }
            });
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, verdict: &Verdict) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(WIN_HIGHLIGHT));
                    ui.add_space(6.0);
                    ui.label(RichText::new(verdict.message()).size(13.0).color(TEXT_PRIMARY));
                    ui.add_space(10.0);
                    if ui.button("New Game").clicked() {
                        self.reset();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(10.0))
            .show(ctx, |ui| {
                self.game.resize(BoardView::fit(ui));
                let snap = self.game.snapshot();

                if let Some(point) = self.board_view.show(ui, &snap) {
                    self.game.report_click(point.x, point.y);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (start, pause, reset) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::N),
            )
        });

        if start && !self.game.is_started() {
            self.start();
        }
        if pause {
            self.game.toggle_pause();
        }
        if reset && self.game.is_started() {
            self.reset();
        }
    }
}

impl eframe::App for TitanCrashApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.game.poll();
        self.handle_events();

        let snap = self.game.snapshot();
        self.render_side_panel(ctx, &snap);
        self.render_board(ctx);
        self.handle_events();

        // Keep the clocks moving while one is running
        if self.game.is_running() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
