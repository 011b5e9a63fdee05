use egui::{Context, Key, TextEdit};

use crate::GameApp;
use crate::questions::Question;
use crate::ui::helpers::{choice_buttons, prompt_heading};
use crate::ui::layout::{centered_panel, two_button_row};

pub fn ui_membership(app: &mut GameApp, ctx: &Context) {
    let Question::Membership(question) = &app.question else {
        return;
    };
    let mut clicked = None;

    centered_panel(ctx, 420.0, 520.0, |ui| {
        prompt_heading(ui, &question.prompt_text());
        let width = ui.available_width();
        clicked = choice_buttons(ui, &question.continents, width);
    });

    if let Some(idx) = clicked {
        app.answer(idx);
    }
}

pub fn ui_naming(app: &mut GameApp, ctx: &Context) {
    let prompt = app.prompt_text();
    let rows = app.naming_rows();
    let found = rows.iter().filter(|r| r.found).count();
    let mut submit = false;
    let mut give_up = false;

    let input = &mut app.naming_input;
    centered_panel(ctx, 600.0, 560.0, |ui| {
        prompt_heading(ui, &prompt);
        ui.label(format!("{found} / {}", rows.len()));
        ui.add_space(8.0);

        let width = ui.available_width();
        let response = ui.add(
            TextEdit::singleline(input)
                .hint_text("Type a country and press Enter")
                .desired_width(width),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            submit = true;
            response.request_focus();
        }
        ui.add_space(8.0);
        let (clicked_submit, clicked_give_up) = two_button_row(ui, width, "Submit", "Give up");
        submit |= clicked_submit;
        give_up = clicked_give_up;

        ui.add_space(8.0);
        egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for row in &rows {
                    ui.label(row.label());
                }
            });
        });
    });

    if submit {
        app.submit_name();
    } else if give_up {
        app.give_up();
    }
}
