use egui::Context;

use crate::GameApp;
use crate::questions::Question;
use crate::ui::helpers::{choice_buttons, prompt_heading};
use crate::ui::layout::centered_panel;

/// Text-only multiple choice: capitals, population, borders, divisions, leaders.
pub fn ui_choice(app: &mut GameApp, ctx: &Context) {
    let Question::Choice(question) = &app.question else {
        return;
    };
    let prompt = question.prompt_text();
    let mut clicked = None;

    centered_panel(ctx, 420.0, 520.0, |ui| {
        prompt_heading(ui, &prompt);
        let width = ui.available_width();
        clicked = choice_buttons(ui, &question.labels, width);
    });

    if let Some(idx) = clicked {
        app.answer(idx);
    }
}

/// Spinner while the question's assets load.
pub fn ui_loading(ctx: &Context) {
    centered_panel(ctx, 80.0, 300.0, |ui| {
        ui.spinner();
        ui.label("Loading…");
    });
}
