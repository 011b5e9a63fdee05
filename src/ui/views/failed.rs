use egui::Context;

use crate::GameApp;
use crate::app::Screen;
use crate::ui::layout::centered_panel;

pub fn ui_failed(app: &mut GameApp, ctx: &Context, message: &str) {
    let mut retry = false;
    centered_panel(ctx, 200.0, 480.0, |ui| {
        ui.heading("⚠ The game cannot continue");
        ui.add_space(10.0);
        ui.label(message);
        ui.add_space(16.0);
        retry = ui.button("Try another question").clicked();
    });
    if retry {
        app.screen = Screen::Playing;
        app.next_question();
    }
}
