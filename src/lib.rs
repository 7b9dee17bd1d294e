pub mod bird;
pub mod config;
pub mod decoration;
pub mod entity;
pub mod game;
pub mod input;
pub mod obstacle;
pub mod phase;
pub mod render;
pub mod storage;
pub mod timer;
pub mod world;

#[cfg(target_arch = "wasm32")]
mod gpu;
#[cfg(target_arch = "wasm32")]
mod hud;
#[cfg(target_arch = "wasm32")]
mod web;

pub use game::Game;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    web::start().await
}
