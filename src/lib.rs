//! Doodle Arcade core crate.
//!
//! Three small browser games compiled to WebAssembly: draw-a-perfect-square
//! (freehand drawing scored against a fitted reference square), a Collatz
//! sequence visualizer, and chair-or-swear (IKEA chair model or Swedish
//! profanity?). Each page has its own `start_*` entrypoint; the host page
//! calls exactly one of them after module init.

use wasm_bindgen::prelude::*;

mod audio;
pub mod collatz;
mod dom;
pub mod geom;
pub mod square;
mod storage;
pub mod words;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Game entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_square_game() -> Result<(), JsValue> {
    square::start_square_page()
}

#[wasm_bindgen]
pub fn start_collatz_game() -> Result<(), JsValue> {
    collatz::start_collatz_page()
}

#[wasm_bindgen]
pub fn start_word_game() -> Result<(), JsValue> {
    words::start_word_page()
}
