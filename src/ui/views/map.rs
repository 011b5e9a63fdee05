use egui::{Color32, Context, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::GameApp;
use crate::app::actions::MapMove;
use crate::app::assets::{MapShape, MapView};
use crate::questions::Question;
use crate::ui::helpers::{choice_buttons, prompt_heading};
use crate::ui::layout::centered_panel;

const MAP_SIZE: Vec2 = Vec2::new(480.0, 300.0);

pub fn ui_map(app: &mut GameApp, ctx: &Context) {
    let Question::Choice(question) = &app.question else {
        return;
    };
    let shape = app.map_shape();
    let view = app.map_view();
    let mut clicked = None;
    let mut movement = None;

    centered_panel(ctx, 700.0, 520.0, |ui| {
        prompt_heading(ui, &question.prompt_text());
        if let (Some(shape), Some(view)) = (shape, view) {
            movement = draw_outline(ui, shape, &view);
        }
        ui.add_space(12.0);
        let width = ui.available_width();
        clicked = choice_buttons(ui, &question.labels, width);
    });

    if let Some(movement) = movement {
        app.move_map(movement);
    }
    if let Some(idx) = clicked {
        app.answer(idx);
    }
}

/// Draws the outline; drag pans, double-click recentres, the buttons zoom.
fn draw_outline(ui: &mut egui::Ui, shape: &MapShape, view: &MapView) -> Option<MapMove> {
    let (response, painter) = ui.allocate_painter(MAP_SIZE, Sense::click_and_drag());
    let rect = response.rect;
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

    let stroke = Stroke::new(1.5, Color32::from_rgb(220, 120, 40));
    for ring in &shape.rings {
        let points = ring.iter().map(|p| project(view, rect, *p)).collect();
        painter.add(Shape::closed_line(points, stroke));
    }

    let mut movement = None;
    if response.double_clicked() {
        movement = Some(MapMove::Recenter);
    } else if response.dragged() {
        let delta = response.drag_delta();
        movement = Some(MapMove::Pan(delta.x as f64, delta.y as f64));
    }
    ui.horizontal(|ui| {
        if ui.button("➖").clicked() {
            movement = Some(MapMove::Zoom(-1.0));
        }
        if ui.button("➕").clicked() {
            movement = Some(MapMove::Zoom(1.0));
        }
        ui.weak("Drag to pan, double-click to recenter");
    });
    movement
}

/// Equirectangular projection around the view centre; north is up.
fn project(view: &MapView, rect: Rect, point: [f64; 2]) -> Pos2 {
    let step = view.degrees_per_point();
    let center = rect.center();
    Pos2::new(
        center.x + ((point[0] - view.center[0]) / step) as f32,
        center.y - ((point[1] - view.center[1]) / step) as f32,
    )
}
