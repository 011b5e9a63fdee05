use egui::{CentralPanel, Context, Frame, RichText, Ui};

use crate::GameApp;
use crate::ui::helpers::only_chance_badge;

pub fn top_panel(app: &GameApp, ctx: &Context) {
    egui::TopBottomPanel::top("score_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new(app.score_board().label()).strong());
            if app.only_chance() {
                only_chance_badge(ui);
            }
            if !app.message.is_empty() {
                ui.separator();
                ui.label(&app.message);
            }
        });
    });
}

pub fn bottom_panel(app: &mut GameApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                app.set_dark_mode(ctx, true);
            }
            if ui.button("☀ Light mode").clicked() {
                app.set_dark_mode(ctx, false);
            }
            if let Some(shape) = app.map_shape() {
                ui.small(format!("Map data: {}", shape.attribution));
            }
        });
    });
}

/// Panel centered both ways with a bounded content width.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                ui.vertical_centered(inner);
            });
        ui.add_space(extra);
    });
}

/// Two equal-width buttons side by side. Returns (left, right) clicks.
pub fn two_button_row(ui: &mut Ui, width: f32, left: &str, right: &str) -> (bool, bool) {
    let button_w = (width - 8.0) / 2.0;
    let mut clicks = (false, false);
    ui.horizontal(|ui| {
        clicks.0 = ui.add_sized([button_w, 36.0], egui::Button::new(left)).clicked();
        clicks.1 = ui.add_sized([button_w, 36.0], egui::Button::new(right)).clicked();
    });
    clicks
}
