use common::games::tictactoe::TurnController;
use common::log;
use eframe::egui;
use egui::{Align2, RichText};

use super::game::{BoardView, BoardViewState};
use crate::config::AppConfigManager;

pub struct TicTacToeApp {
    controller: TurnController,
    view: BoardViewState,
    board_view: BoardView,
    config_manager: AppConfigManager,
    remember_mode: bool,
}

impl TicTacToeApp {
    const BUTTON_HEIGHT: f32 = 32.0;

    pub fn new(
        controller: TurnController,
        config_manager: AppConfigManager,
        remember_mode: bool,
    ) -> Self {
        let view = BoardViewState::new(controller.state().mode());
        Self {
            controller,
            view,
            board_view: BoardView::new(),
            config_manager,
            remember_mode,
        }
    }

    fn toggle_mode(&mut self) {
        self.controller.on_mode_toggle_requested(&mut self.view);

        if !self.remember_mode {
            return;
        }
        let mode = self.controller.state().mode();
        if let Err(e) = self.config_manager.update(|config| config.start_mode = mode) {
            log!("Failed to save mode: {}", e);
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        let width = ui.available_width();

        if ui
            .add_sized([width, Self::BUTTON_HEIGHT], egui::Button::new("Reset"))
            .clicked()
        {
            self.controller.on_reset_requested(&mut self.view);
        }

        let mode_label = self.view.mode_label().to_string();
        if ui
            .add_sized([width, Self::BUTTON_HEIGHT], egui::Button::new(mode_label))
            .clicked()
        {
            self.toggle_mode();
        }
    }

    fn render_game_over_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.view.dialog_message().map(str::to_owned) else {
            return;
        };

        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(message).size(16.0).strong());
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    self.view.dismiss_dialog();
                }
            });
    }
}

fn seed_label(seed: u64) -> String {
    format!("Seed: {}", seed)
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if let Some(position) = self.board_view.render(ui, &self.view) {
                    self.controller
                        .on_cell_clicked(position.row, position.col, &mut self.view);
                }

                ui.add_space(8.0);
                ui.label(self.view.status_text(self.controller.state().current_mark()));
                ui.weak(seed_label(self.controller.seed()));
                ui.add_space(8.0);
            });

            self.render_controls(ui);
        });

        self.render_game_over_dialog(ctx);
    }
}
