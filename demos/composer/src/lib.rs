//! Message composer demo: a textarea wired to `<character-counter>`.
//!
//! The textarea's `input` events drive the counter through its `count`
//! property; everything else (ring, label, over-limit styling) follows
//! from the widget's own attribute reactivity.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlTextAreaElement};

use character_counter::{CharacterCounter, theme};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    #[cfg(debug_assertions)]
    enable_debug_logging();

    CharacterCounter::define("character-counter")
        .map_err(|error| JsValue::from_str(&error.to_string()))?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    inject_stylesheet(&document)?;
    wire_composer(&document)?;
    Ok(())
}

/// Opt in to the widget's console diagnostics for dev builds. Must run
/// before `define`, which upgrades (and logs for) elements already in the
/// page.
#[cfg(debug_assertions)]
fn enable_debug_logging() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("DEBUG", "character-counter");
        }
    }
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

fn wire_composer(document: &Document) -> Result<(), JsValue> {
    let textarea: HtmlTextAreaElement = document
        .get_element_by_id("message")
        .ok_or_else(|| JsValue::from_str("missing #message"))?
        .dyn_into()?;
    let counter: HtmlElement = document
        .get_element_by_id("message-counter")
        .ok_or_else(|| JsValue::from_str("missing #message-counter"))?
        .dyn_into()?;

    let on_input = {
        let textarea = textarea.clone();
        Closure::<dyn FnMut()>::new(move || {
            let count = textarea.value().chars().count();
            let _ = js_sys::Reflect::set(
                counter.as_ref(),
                &JsValue::from_str("count"),
                &JsValue::from_f64(count as f64),
            );
        })
    };
    textarea.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    // The listener lives for the page lifetime.
    on_input.forget();
    Ok(())
}
