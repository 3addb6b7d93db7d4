//! Explicit custom-element registry.
//!
//! The browser's `customElements` registry is modeled as an explicit,
//! one-time-initialized map keyed by tag name. `define` builds a JS class
//! extending `HTMLElement` whose lifecycle callbacks delegate to wasm
//! closures, registers it, and retains the closures for the page lifetime
//! (definitions cannot be revoked, so nothing is ever dropped).
//!
//! Widgets implement the small `CustomElement` capability set instead of
//! subclassing anything on the Rust side; all per-instance state lives in
//! the host element's attributes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::HtmlElement;

/// Tag names the HTML parser already claims for SVG/MathML.
const RESERVED_TAGS: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Capability set a widget exposes to the browser.
///
/// Only `connected` is mandatory; everything else defaults to "not
/// interested". Hooks receive the host element and read whatever state
/// they need from its attributes, so one widget value serves every
/// instance of its tag.
pub trait CustomElement: 'static {
    /// Attributes whose mutations fire `attribute_changed`.
    fn observed_attributes(&self) -> &'static [&'static str] {
        &[]
    }

    /// JS property names to expose as getters on the element prototype.
    fn readable_properties(&self) -> &'static [&'static str] {
        &[]
    }

    /// Subset of `readable_properties` that also gets a setter.
    fn writable_properties(&self) -> &'static [&'static str] {
        &[]
    }

    /// Called when the host is inserted into a document.
    fn connected(&self, host: &HtmlElement);

    /// Called when the host is removed from a document.
    fn disconnected(&self, _host: &HtmlElement) {}

    /// Called for every observed-attribute mutation, connected or not.
    fn attribute_changed(
        &self,
        _host: &HtmlElement,
        _name: &str,
        _old: Option<&str>,
        _new: Option<&str>,
    ) {
    }

    /// Getter backing for `readable_properties`.
    fn property(&self, _host: &HtmlElement, _name: &str) -> JsValue {
        JsValue::UNDEFINED
    }

    /// Setter backing for `writable_properties`.
    fn set_property(&self, _host: &HtmlElement, _name: &str, _value: JsValue) {}
}

/// Why a `define` call was rejected.
#[derive(Debug, thiserror::Error)]
pub enum DefineError {
    /// Custom element tags must contain a hyphen, start with a lowercase
    /// ASCII letter, contain no uppercase ASCII and avoid the reserved
    /// SVG/MathML names.
    #[error("`{0}` is not a valid custom element tag name")]
    InvalidTag(String),
    #[error("no global `window`; custom elements need a browser context")]
    NoWindow,
    #[error("customElements.define(\"{tag}\") failed: {message}")]
    Registration { tag: String, message: String },
}

/// Wasm closures backing one registered tag. Held forever; the browser
/// keeps calling into them for as long as the page lives.
struct Definition {
    _connected: Closure<dyn Fn(HtmlElement)>,
    _disconnected: Closure<dyn Fn(HtmlElement)>,
    _attribute_changed: Closure<dyn Fn(HtmlElement, String, Option<String>, Option<String>)>,
    _get_property: Closure<dyn Fn(HtmlElement, String) -> JsValue>,
    _set_property: Closure<dyn Fn(HtmlElement, String, JsValue)>,
}

thread_local! {
    static DEFINITIONS: RefCell<HashMap<String, Definition>> = RefCell::new(HashMap::new());
}

/// Builds `class extends HTMLElement` delegating to the wasm closures in
/// `hooks`. Evaluated once per tag through the `Function` constructor.
const CLASS_FACTORY: &str = r#"
const connected = hooks.connected;
const disconnected = hooks.disconnected;
const attributeChanged = hooks.attributeChanged;
const getProperty = hooks.getProperty;
const setProperty = hooks.setProperty;
const observed = Array.from(hooks.observedAttributes);
const writable = new Set(hooks.writableProperties);
class GeneratedElement extends HTMLElement {
    static get observedAttributes() {
        return observed;
    }
    connectedCallback() {
        connected(this);
    }
    disconnectedCallback() {
        disconnected(this);
    }
    attributeChangedCallback(name, oldValue, newValue) {
        attributeChanged(this, name, oldValue, newValue);
    }
}
for (const name of hooks.readableProperties) {
    const descriptor = {
        configurable: true,
        enumerable: true,
        get() {
            return getProperty(this, name);
        },
    };
    if (writable.has(name)) {
        descriptor.set = function (value) {
            setProperty(this, name, value);
        };
    }
    Object.defineProperty(GeneratedElement.prototype, name, descriptor);
}
return GeneratedElement;
"#;

/// Register `element` under `tag`.
///
/// Idempotent: redefining a tag this registry (or anything else on the
/// page) already claimed is an `Ok` no-op, matching the single-definition
/// rule of `customElements`.
pub fn define(tag: &str, element: impl CustomElement) -> Result<(), DefineError> {
    if !is_valid_tag(tag) {
        return Err(DefineError::InvalidTag(tag.to_owned()));
    }
    if DEFINITIONS.with(|definitions| definitions.borrow().contains_key(tag)) {
        return Ok(());
    }
    let window = web_sys::window().ok_or(DefineError::NoWindow)?;
    let browser_registry = window.custom_elements();
    if !browser_registry.get(tag).is_undefined() {
        return Ok(());
    }

    let element = Rc::new(element);

    let connected: Closure<dyn Fn(HtmlElement)> = {
        let element = Rc::clone(&element);
        Closure::new(move |host: HtmlElement| element.connected(&host))
    };
    let disconnected: Closure<dyn Fn(HtmlElement)> = {
        let element = Rc::clone(&element);
        Closure::new(move |host: HtmlElement| element.disconnected(&host))
    };
    let attribute_changed: Closure<dyn Fn(HtmlElement, String, Option<String>, Option<String>)> = {
        let element = Rc::clone(&element);
        Closure::new(
            move |host: HtmlElement, name: String, old: Option<String>, new: Option<String>| {
                element.attribute_changed(&host, &name, old.as_deref(), new.as_deref());
            },
        )
    };
    let get_property: Closure<dyn Fn(HtmlElement, String) -> JsValue> = {
        let element = Rc::clone(&element);
        Closure::new(move |host: HtmlElement, name: String| element.property(&host, &name))
    };
    let set_property: Closure<dyn Fn(HtmlElement, String, JsValue)> = {
        let element = Rc::clone(&element);
        Closure::new(move |host: HtmlElement, name: String, value: JsValue| {
            element.set_property(&host, &name, value);
        })
    };

    let hooks = Object::new();
    set_hook(&hooks, "connected", connected.as_ref());
    set_hook(&hooks, "disconnected", disconnected.as_ref());
    set_hook(&hooks, "attributeChanged", attribute_changed.as_ref());
    set_hook(&hooks, "getProperty", get_property.as_ref());
    set_hook(&hooks, "setProperty", set_property.as_ref());
    set_hook(
        &hooks,
        "observedAttributes",
        string_array(element.observed_attributes()).as_ref(),
    );
    set_hook(
        &hooks,
        "readableProperties",
        string_array(element.readable_properties()).as_ref(),
    );
    set_hook(
        &hooks,
        "writableProperties",
        string_array(element.writable_properties()).as_ref(),
    );

    let factory = Function::new_with_args("hooks", CLASS_FACTORY);
    let class = factory
        .call1(&JsValue::NULL, &hooks)
        .and_then(|class| class.dyn_into::<Function>())
        .map_err(|error| registration_error(tag, &error))?;
    browser_registry
        .define(tag, &class)
        .map_err(|error| registration_error(tag, &error))?;

    DEFINITIONS.with(|definitions| {
        definitions.borrow_mut().insert(
            tag.to_owned(),
            Definition {
                _connected: connected,
                _disconnected: disconnected,
                _attribute_changed: attribute_changed,
                _get_property: get_property,
                _set_property: set_property,
            },
        );
    });
    Ok(())
}

/// Tag-name validation per the custom-elements naming rules (the practical
/// ASCII subset: hyphen required, lowercase start, no uppercase, not a
/// reserved name).
pub fn is_valid_tag(tag: &str) -> bool {
    let starts_lowercase = matches!(tag.chars().next(), Some('a'..='z'));
    starts_lowercase
        && tag.contains('-')
        && !tag.chars().any(|c| c.is_ascii_uppercase())
        && !RESERVED_TAGS.contains(&tag)
}

fn set_hook(hooks: &Object, key: &str, value: &JsValue) {
    // Only fails on frozen targets; `hooks` is a fresh plain object.
    let _ = Reflect::set(hooks, &JsValue::from_str(key), value);
}

fn string_array(values: &[&str]) -> Array {
    values.iter().map(|value| JsValue::from_str(value)).collect()
}

fn registration_error(tag: &str, error: &JsValue) -> DefineError {
    let message = error
        .as_string()
        .unwrap_or_else(|| format!("{error:?}"));
    DefineError::Registration {
        tag: tag.to_owned(),
        message,
    }
}
