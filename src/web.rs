//! Browser entry point.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::GameApp;
use crate::app::prepare;
use crate::config::GameConfig;
use crate::store::LocalStorageStore;

/// Mounts the game on the canvas with id `canvas_id`.
#[wasm_bindgen]
pub async fn start(canvas_id: String) -> Result<(), JsValue> {
    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let canvas = document
        .get_element_by_id(&canvas_id)
        .ok_or("canvas not found")?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    let config = GameConfig::default();
    let catalog = prepare(&config).map_err(|err| {
        log::error!("cannot start: {err}");
        JsValue::from_str(&err.to_string())
    })?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| {
                Ok(Box::new(GameApp::new(
                    cc,
                    catalog,
                    config,
                    Box::new(LocalStorageStore),
                )?))
            }),
        )
        .await
}
