// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const BUTTON_HEIGHT: f32 = 36.0;

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, BUTTON_HEIGHT)))
        .clicked()
}

/// One button per label; returns the index clicked this frame.
pub fn choice_buttons(ui: &mut Ui, labels: &[String], width: f32) -> Option<usize> {
    let mut clicked = None;
    for (idx, label) in labels.iter().enumerate() {
        if big_list_button(ui, label, width, true) {
            clicked = Some(idx);
        }
        ui.add_space(4.0);
    }
    clicked
}

pub fn only_chance_badge(ui: &mut Ui) {
    ui.label(
        RichText::new(" Only chance ")
            .strong()
            .color(Color32::WHITE)
            .background_color(Color32::DARK_RED),
    )
    .on_hover_text("A wrong answer now ends the run");
}

pub fn prompt_heading(ui: &mut Ui, text: &str) {
    ui.heading(text);
    ui.add_space(12.0);
}
