//! Runtime-gated console logging.
//!
//! Lifecycle messages go to `console.debug`, prefixed with the
//! `character-counter` namespace, and only when `localStorage["DEBUG"]`
//! lists that namespace (or `*`), the conventional opt-in gate for
//! browser widgets. The gate is read once per page load; flipping it
//! takes effect after a reload.

use std::cell::Cell;

use wasm_bindgen::JsValue;

const NAMESPACE: &str = "character-counter";

thread_local! {
    static GATE: Cell<Option<bool>> = const { Cell::new(None) };
}

/// Emit a namespaced debug message if the gate is open.
pub(crate) fn log(message: &str) {
    if enabled() {
        web_sys::console::debug_1(&JsValue::from_str(&format!("{NAMESPACE}: {message}")));
    }
}

fn enabled() -> bool {
    GATE.with(|cell| match cell.get() {
        Some(enabled) => enabled,
        None => {
            let enabled = stored_gate().is_some_and(|gate| gate_matches(&gate));
            cell.set(Some(enabled));
            enabled
        }
    })
}

fn stored_gate() -> Option<String> {
    web_sys::window()?.local_storage().ok()??.get_item("DEBUG").ok()?
}

/// `DEBUG` holds a comma-separated pattern list; `*` enables everything.
fn gate_matches(gate: &str) -> bool {
    gate.split(',')
        .map(str::trim)
        .any(|pattern| pattern == "*" || pattern == NAMESPACE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_matches_namespace_or_wildcard() {
        assert!(gate_matches("character-counter"));
        assert!(gate_matches("*"));
        assert!(gate_matches("app:router, character-counter"));
        assert!(gate_matches(" * "));
    }

    #[test]
    fn test_gate_rejects_other_namespaces() {
        assert!(!gate_matches(""));
        assert!(!gate_matches("app:router"));
        assert!(!gate_matches("character"));
        assert!(!gate_matches("character-counter-extra"));
    }
}
