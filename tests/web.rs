#![cfg(target_arch = "wasm32")]

use flappy_web::storage::{LocalStorage, ScoreStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const KEY: &str = "flappyHighScoreTest";

fn raw_storage() -> web_sys::Storage {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("localStorage")
}

#[wasm_bindgen_test]
fn missing_key_reads_zero() {
    raw_storage().remove_item(KEY).unwrap();
    assert_eq!(LocalStorage::with_key(KEY).load(), 0);
}

#[wasm_bindgen_test]
fn garbage_reads_zero() {
    raw_storage().set_item(KEY, "NaN").unwrap();
    assert_eq!(LocalStorage::with_key(KEY).load(), 0);
}

#[wasm_bindgen_test]
fn save_then_load() {
    let mut store = LocalStorage::with_key(KEY);
    store.save(23);
    assert_eq!(raw_storage().get_item(KEY).unwrap().as_deref(), Some("23"));
    assert_eq!(LocalStorage::with_key(KEY).load(), 23);
}
