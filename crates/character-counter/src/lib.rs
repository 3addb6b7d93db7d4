//! `<character-counter>`: a circular character-count progress ring.
//!
//! The widget shows `count` used characters of a `max` budget as an SVG
//! ring with an optional numeric "remaining" readout. All state lives in
//! the host element's attributes; every observed mutation triggers exactly
//! one synchronous re-render, and malformed input falls back to defaults
//! instead of throwing.
//!
//! ```no_run
//! use character_counter::{CharacterCounter, DEFAULT_TAG};
//!
//! CharacterCounter::define(DEFAULT_TAG).expect("tag registration");
//! // <character-counter max="280" count="57" warn></character-counter>
//! ```

mod debug;
mod element;
pub mod registry;
pub mod render;
pub mod ring;
pub mod state;
pub mod theme;

pub use element::{CharacterCounter, DEFAULT_TAG};
pub use registry::{CustomElement, DefineError, define};
pub use render::{HIDE_COUNT_FLAG, OVER_LIMIT_FLAG, RenderMode};
pub use ring::Ring;
pub use state::{CounterState, Warn};

use wasm_bindgen::prelude::*;

/// Register the light-DOM widget under [`DEFAULT_TAG`].
///
/// Entry point for JS hosts loading the wasm module directly.
#[wasm_bindgen(js_name = defineCharacterCounter)]
pub fn define_character_counter() -> Result<(), JsValue> {
    CharacterCounter::define(DEFAULT_TAG).map_err(|error| JsValue::from_str(&error.to_string()))
}
