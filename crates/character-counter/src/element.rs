//! The `<character-counter>` widget.
//!
//! The element is stateless on the Rust side: every hook re-reads the
//! host's attributes, derives `CounterState` and re-renders. The writable
//! `count` property writes the attribute instead of any internal field,
//! so the DOM stays the single source of truth and the normal reactivity
//! path does the rendering.

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::debug;
use crate::registry::{self, CustomElement, DefineError};
use crate::render::{self, RenderMode};
use crate::state::{CounterState, DEFAULT_COUNT, Warn};

/// Tag registered by [`define_character_counter`](crate::define_character_counter).
pub const DEFAULT_TAG: &str = "character-counter";

const OBSERVED_ATTRIBUTES: &[&str] = &["max", "count", "warn", "hide-count"];

const READABLE_PROPERTIES: &[&str] = &[
    "max",
    "count",
    "remaining",
    "progress",
    "isOverLimit",
    "isNearLimit",
    "hideCount",
    "warn",
    "shouldShowCount",
];

const WRITABLE_PROPERTIES: &[&str] = &["count"];

/// Widget configuration; one value serves every instance of its tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterCounter {
    mode: RenderMode,
}

impl CharacterCounter {
    /// Light-DOM variant, styled by the shipped stylesheet.
    pub fn new() -> Self {
        CharacterCounter {
            mode: RenderMode::NoShadow,
        }
    }

    /// Shadow-DOM variant carrying its own style block.
    pub fn shadow() -> Self {
        CharacterCounter {
            mode: RenderMode::Shadow,
        }
    }

    /// Register this configuration under `tag`.
    pub fn register(self, tag: &str) -> Result<(), DefineError> {
        registry::define(tag, self)
    }

    /// Register the light-DOM variant under `tag`.
    pub fn define(tag: &str) -> Result<(), DefineError> {
        CharacterCounter::new().register(tag)
    }
}

/// Fresh state snapshot from the host's current attributes.
fn read_state(host: &HtmlElement) -> CounterState {
    CounterState::from_attributes(
        host.get_attribute("max").as_deref(),
        host.get_attribute("count").as_deref(),
        host.get_attribute("warn").as_deref(),
        host.get_attribute("hide-count").as_deref(),
    )
}

impl CustomElement for CharacterCounter {
    fn observed_attributes(&self) -> &'static [&'static str] {
        OBSERVED_ATTRIBUTES
    }

    fn readable_properties(&self) -> &'static [&'static str] {
        READABLE_PROPERTIES
    }

    fn writable_properties(&self) -> &'static [&'static str] {
        WRITABLE_PROPERTIES
    }

    fn connected(&self, host: &HtmlElement) {
        debug::log("connected");
        render::sync(host, &read_state(host), self.mode);
    }

    fn disconnected(&self, _host: &HtmlElement) {
        debug::log("disconnected");
    }

    fn attribute_changed(
        &self,
        host: &HtmlElement,
        name: &str,
        _old: Option<&str>,
        _new: Option<&str>,
    ) {
        debug::log(&format!("attribute changed: {name}"));
        // Mutations also fire while detached and during upgrade; only a
        // connected element renders.
        if host.is_connected() {
            render::sync(host, &read_state(host), self.mode);
        }
    }

    fn property(&self, host: &HtmlElement, name: &str) -> JsValue {
        let state = read_state(host);
        match name {
            "max" => JsValue::from(state.max),
            "count" => JsValue::from(state.count),
            "remaining" => JsValue::from(state.remaining()),
            "progress" => JsValue::from_f64(state.progress()),
            "isOverLimit" => JsValue::from_bool(state.is_over_limit()),
            "isNearLimit" => JsValue::from_bool(state.is_near_limit()),
            "hideCount" => JsValue::from_bool(state.hide_count),
            "warn" => match state.warn {
                Warn::Disabled => JsValue::from_bool(false),
                Warn::Enabled(threshold) => JsValue::from(threshold),
            },
            "shouldShowCount" => JsValue::from_bool(state.should_show_count()),
            _ => JsValue::UNDEFINED,
        }
    }

    fn set_property(&self, host: &HtmlElement, name: &str, value: JsValue) {
        if name != "count" {
            return;
        }
        let count = match value.as_f64() {
            Some(number) if number.is_finite() => number.trunc() as i32,
            _ => DEFAULT_COUNT,
        };
        // Writing the attribute routes the update through attribute_changed.
        let _ = host.set_attribute("count", &count.to_string());
    }
}
