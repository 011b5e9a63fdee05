use egui::{Context, Vec2};

use crate::GameApp;
use crate::questions::Question;
use crate::ui::helpers::{choice_buttons, prompt_heading};
use crate::ui::layout::centered_panel;

const FLAG_SIZE: Vec2 = Vec2::new(240.0, 160.0);
const FLAG_OPTION_SIZE: Vec2 = Vec2::new(120.0, 80.0);

pub fn ui_flag_to_country(app: &mut GameApp, ctx: &Context) {
    let Question::Choice(question) = &app.question else {
        return;
    };
    let texture = app.flag_texture(&question.anchor().code);
    let mut clicked = None;

    centered_panel(ctx, 600.0, 520.0, |ui| {
        prompt_heading(ui, &question.prompt_text());
        if let Some(texture) = texture {
            ui.add(egui::Image::new(texture).fit_to_exact_size(FLAG_SIZE));
        }
        ui.add_space(12.0);
        let width = ui.available_width();
        clicked = choice_buttons(ui, &question.labels, width);
    });

    if let Some(idx) = clicked {
        app.answer(idx);
    }
}

/// The options are flags laid out in rows of three.
pub fn ui_country_to_flag(app: &mut GameApp, ctx: &Context) {
    let Question::Choice(question) = &app.question else {
        return;
    };
    let mut clicked = None;

    centered_panel(ctx, 420.0, 520.0, |ui| {
        prompt_heading(ui, &question.prompt_text());
        egui::Grid::new("flag_options")
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (idx, choice) in question.choices.iter().enumerate() {
                    if let Some(texture) = app.flag_texture(&choice.code) {
                        let image = egui::Image::new(texture).fit_to_exact_size(FLAG_OPTION_SIZE);
                        if ui.add(egui::Button::image(image)).clicked() {
                            clicked = Some(idx);
                        }
                    }
                    if idx % 3 == 2 {
                        ui.end_row();
                    }
                }
            });
    });

    if let Some(idx) = clicked {
        app.answer(idx);
    }
}
