//! Attribute and theming gallery.
//!
//! Registers the light-DOM widget under the default tag plus a
//! shadow-DOM variant under `shadow-counter`; the page itself is static
//! markup, every row is driven purely by attributes.

use wasm_bindgen::prelude::*;
use web_sys::Document;

use character_counter::{CharacterCounter, theme};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    CharacterCounter::define("character-counter")
        .map_err(|error| JsValue::from_str(&error.to_string()))?;
    CharacterCounter::shadow()
        .register("shadow-counter")
        .map_err(|error| JsValue::from_str(&error.to_string()))?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    inject_stylesheet(&document)?;
    Ok(())
}

fn inject_stylesheet(document: &Document) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(theme::STYLESHEET));
    document
        .head()
        .ok_or_else(|| JsValue::from_str("no <head>"))?
        .append_child(&style)?;
    Ok(())
}
