//! Main application for the Cram GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::{error, warn};

use super::board_view::{BoardFrame, BoardInput, BoardView};
use super::theme::*;
use crate::board::Player;
use crate::game::GameStatus;
use crate::session::{Match, Mode};

/// Board sizes offered in the menu
const MENU_SIZES: [usize; 3] = [4, 6, 8];

/// Search depths offered in the menu
const MENU_DEPTHS: std::ops::RangeInclusive<u32> = 1..=6;

/// Main Cram application
pub struct CramApp {
    session: Match,
    board_view: BoardView,
    poll_interval: Duration,
    /// Depth used when a new match against the computer is started
    depth: u32,
}

impl CramApp {
    pub fn new(session: Match, poll_interval: Duration) -> Self {
        let depth = match session.mode() {
            Mode::HumanVsComputer { depth, .. } => depth,
            Mode::HumanVsHuman => crate::config::DEFAULT_DIFFICULTY,
        };
        Self {
            session,
            board_view: BoardView::default(),
            poll_interval,
            depth,
        }
    }

    fn restart(&mut self, size: usize, mode: Mode) {
        if let Err(err) = self.session.restart(size, mode) {
            error!(%err, "could not start a new match");
        }
    }

    fn restart_same(&mut self) {
        let size = self.session.game().size();
        let mode = self.session.mode();
        self.restart(size, mode);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let size = self.session.game().size();
                    let depth = self.depth;
                    for human in [Player::Red, Player::Blue] {
                        let label = format!("New Game (vs Computer, you play {human})");
                        if ui.button(label).clicked() {
                            self.restart(size, Mode::HumanVsComputer { human, depth });
                            ui.close_menu();
                        }
                    }
                    if ui.button("New Game (Human vs Human)").clicked() {
                        self.restart(size, Mode::HumanVsHuman);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Restart").clicked() {
                        self.restart_same();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Board", |ui| {
                    let mode = self.session.mode();
                    for size in MENU_SIZES {
                        if ui.button(format!("{size} × {size}")).clicked() {
                            self.restart(size, mode);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    for depth in MENU_DEPTHS {
                        if ui.radio(self.depth == depth, format!("Depth {depth}")).clicked() {
                            self.depth = depth;
                            if let Mode::HumanVsComputer { human, .. } = self.session.mode() {
                                let size = self.session.game().size();
                                self.restart(size, Mode::HumanVsComputer { human, depth });
                            }
                            ui.close_menu();
                        }
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.session.mode().to_string());
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if let Some(msg) = self.session.message() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("CRAM").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let size = self.session.game().size();
            ui.label(RichText::new(format!("{size} × {size} board")).size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let game = self.session.game();
        Self::card_frame().show(ui, |ui| {
            let shown = match game.status() {
                GameStatus::Over { winner } => winner,
                GameStatus::NotOver => game.to_move().unwrap_or(Player::Red),
            };
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 28.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, CornerRadius::same(5), player_colors(shown).0);
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(shown.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    let color = if game.is_over() {
                        STATUS_WIN
                    } else if self.session.is_computer_thinking() {
                        STATUS_THINKING
                    } else {
                        STATUS_READY
                    };
                    ui.label(RichText::new(self.session.status_text()).size(12.0).color(color));
                });
            });

            if let Some(elapsed) = game
                .to_move()
                .and_then(|p| self.session.participant(p).thinking_elapsed())
            {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(20.0)
                        .color(STATUS_THINKING),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("New game (N)").clicked() {
                    self.restart_same();
                }
                if self.session.is_paused() {
                    if ui.button("Resume (R)").clicked() {
                        self.session.resume();
                    }
                } else if ui.button("Cancel (Esc)").clicked() {
                    self.session.cancel_turn();
                }
            });
            ui.add_space(8.0);
            let moves = self.session.game().history_len();
            let legal = self.session.game().legal_moves().len();
            ui.label(
                RichText::new(format!("Move #{moves}  ·  {legal} legal"))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board and forward pointer input
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let game = self.session.game();
            let frame = BoardFrame {
                board: game.board(),
                to_move: game.to_move(),
                last_move: self.session.last_move(),
                pending_pick: self.session.pending_pick(),
                accepts_input: self.session.is_human_turn(),
            };
            let input = self.board_view.show(ui, &frame);

            match input {
                Some(BoardInput::Pick(pos)) => self.session.submit_pick(pos),
                Some(BoardInput::Release(pos)) => {
                    // The message is shown in the side panel
                    if let Err(err) = self.session.submit_release(pos) {
                        warn!(%err, "rejected move");
                    }
                }
                None => {}
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, cancel, resume) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::R),
            )
        });
        if new_game {
            self.restart_same();
        }
        if cancel {
            self.session.cancel_turn();
        }
        if resume {
            self.session.resume();
        }
    }
}

impl eframe::App for CramApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        if let Err(err) = self.session.tick() {
            error!(%err, "computer turn failed");
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep ticking while the computer owes a move
        if !self.session.game().is_over()
            && !self.session.is_human_turn()
            && !self.session.is_paused()
        {
            ctx.request_repaint_after(self.poll_interval);
        }
    }
}
