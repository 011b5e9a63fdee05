pub mod app;
pub mod catalog;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod model;
pub mod questions;
pub mod round;
pub mod store;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::GameApp;
