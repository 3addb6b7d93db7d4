//! Markup generation and DOM synchronization.
//!
//! Rendering is a pure function of `CounterState` plus the resolved ring
//! geometry; `sync` replaces the previous output wholesale. There is no
//! diffing and no retained render state, so re-rendering with unchanged
//! attributes produces byte-identical markup and attribute values.
//!
//! Two variants share the same wrapper markup:
//! - `NoShadow` (default): light DOM, styled by the shipped stylesheet,
//!   with circumference/offset exported as inline custom properties.
//! - `Shadow`: open shadow root carrying its own style block, colors still
//!   themeable through the custom properties.

use web_sys::{HtmlElement, ShadowRootInit, ShadowRootMode};

use crate::ring::Ring;
use crate::state::CounterState;
use crate::theme;

/// Where the widget writes its markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    NoShadow,
    Shadow,
}

/// Present on the host exactly while `count > max`.
pub const OVER_LIMIT_FLAG: &str = "data-over-limit";

/// Present on the host exactly while the numeric label is not rendered.
pub const HIDE_COUNT_FLAG: &str = "data-hide-count";

/// Render `state` into `host`. Never throws; failed DOM writes degrade to
/// whatever the browser left in place.
pub(crate) fn sync(host: &HtmlElement, state: &CounterState, mode: RenderMode) {
    let ring = theme::resolved_ring(host);

    match mode {
        RenderMode::NoShadow => {
            host.set_inner_html(&wrapper_markup(state, &ring));
            let style = host.style();
            let _ = style.set_property(theme::CIRCUMFERENCE, &ring.circumference().to_string());
            let _ = style.set_property(
                theme::OFFSET,
                &ring.dash_offset(state.progress()).to_string(),
            );
        }
        RenderMode::Shadow => {
            let shadow = host.shadow_root().or_else(|| {
                host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
                    .ok()
            });
            if let Some(shadow) = shadow {
                shadow.set_inner_html(&shadow_markup(state, &ring));
            }
        }
    }

    // Rewritten on every render. None of these attributes is observed,
    // so no reactivity loop is possible.
    let _ = host.set_attribute("role", "status");
    let _ = host.set_attribute("aria-live", "polite");
    let _ = host.set_attribute("aria-label", &state.aria_label());

    set_presence_flag(host, OVER_LIMIT_FLAG, state.is_over_limit());
    set_presence_flag(host, HIDE_COUNT_FLAG, !state.should_show_count());
}

fn set_presence_flag(host: &HtmlElement, name: &str, present: bool) {
    let result = if present {
        host.set_attribute(name, "")
    } else {
        host.remove_attribute(name)
    };
    // Fixed, valid attribute names; the calls cannot fail meaningfully.
    let _ = result;
}

/// Label (when shown) plus the two-circle SVG, shared by both variants.
fn wrapper_markup(state: &CounterState, ring: &Ring) -> String {
    let label = if state.should_show_count() {
        format!(r#"<span class="remaining">{}</span>"#, state.remaining())
    } else {
        String::new()
    };
    let center = ring.center();
    let radius = ring.radius();
    format!(
        r#"<div class="counter-wrapper">{label}<svg class="circle-container" viewBox="0 0 {size} {size}" aria-hidden="true"><circle class="track" cx="{center}" cy="{center}" r="{radius}"></circle><circle class="progress" cx="{center}" cy="{center}" r="{radius}"></circle></svg></div>"#,
        size = ring.diameter,
    )
}

/// Shadow-root document: style block with resolved geometry, then the wrapper.
fn shadow_markup(state: &CounterState, ring: &Ring) -> String {
    format!(
        "<style>{}</style>{}",
        shadow_style(state, ring),
        wrapper_markup(state, ring)
    )
}

fn shadow_style(state: &CounterState, ring: &Ring) -> String {
    format!(
        "\
:host {{ display: inline-flex; align-items: center; gap: 4px; font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif; }}
.counter-wrapper {{ display: inline-flex; align-items: center; gap: 4px; }}
.remaining {{ font-size: 13px; font-weight: 400; color: var({text}, {text_default}); min-width: 2ch; text-align: right; }}
:host([{over_flag}]) .remaining {{ color: var({warning}, {warning_default}); }}
.circle-container {{ width: var({size}, {diameter}px); height: var({size}, {diameter}px); transform: rotate(-90deg); }}
.track {{ fill: none; stroke: var({track}, {track_default}); stroke-width: {stroke_width}; }}
.progress {{ fill: none; stroke: var({normal}, {normal_default}); stroke-width: {stroke_width}; stroke-linecap: round; stroke-dasharray: {dasharray}; stroke-dashoffset: {dashoffset}; transition: stroke-dashoffset 0.15s ease-out, stroke 0.15s ease-out; }}
:host([{over_flag}]) .progress {{ stroke: var({warning}, {warning_default}); }}
@media (prefers-reduced-motion: reduce) {{ .progress {{ transition: none; }} }}
",
        text = theme::TEXT_COLOR,
        text_default = theme::DEFAULT_TEXT_COLOR,
        warning = theme::WARNING_COLOR,
        warning_default = theme::DEFAULT_WARNING_COLOR,
        track = theme::TRACK_COLOR,
        track_default = theme::DEFAULT_TRACK_COLOR,
        normal = theme::NORMAL_COLOR,
        normal_default = theme::DEFAULT_NORMAL_COLOR,
        size = theme::SIZE,
        over_flag = OVER_LIMIT_FLAG,
        diameter = ring.diameter,
        stroke_width = ring.stroke_width,
        dasharray = ring.circumference(),
        dashoffset = ring.dash_offset(state.progress()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(max: i32, count: i32, warn: Option<&str>, hide: Option<&str>) -> CounterState {
        CounterState::from_attributes(
            Some(&max.to_string()),
            Some(&count.to_string()),
            warn,
            hide,
        )
    }

    #[test]
    fn test_wrapper_contains_label_and_both_circles() {
        let markup = wrapper_markup(&state(280, 57, None, None), &Ring::default());
        assert!(markup.contains(r#"<span class="remaining">223</span>"#));
        assert!(markup.contains(r#"class="track" cx="12" cy="12" r="11""#));
        assert!(markup.contains(r#"class="progress" cx="12" cy="12" r="11""#));
        assert!(markup.contains(r#"viewBox="0 0 24 24""#));
        assert!(markup.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn test_label_omitted_when_count_hidden() {
        let markup = wrapper_markup(&state(280, 57, None, Some("")), &Ring::default());
        assert!(!markup.contains("remaining"));
        assert!(markup.contains("circle-container"));
    }

    #[test]
    fn test_label_negative_when_over_limit() {
        let markup = wrapper_markup(&state(280, 300, None, None), &Ring::default());
        assert!(markup.contains(r#"<span class="remaining">-20</span>"#));
    }

    #[test]
    fn test_markup_is_deterministic() {
        let current = state(300, 280, Some(""), None);
        let ring = Ring::default();
        assert_eq!(
            wrapper_markup(&current, &ring),
            wrapper_markup(&current, &ring)
        );
        assert_eq!(
            shadow_markup(&current, &ring),
            shadow_markup(&current, &ring)
        );
    }

    #[test]
    fn test_custom_geometry_flows_into_markup() {
        let markup = wrapper_markup(&state(280, 0, None, None), &Ring::new(48.0, 4.0));
        assert!(markup.contains(r#"viewBox="0 0 48 48""#));
        assert!(markup.contains(r#"cx="24" cy="24" r="22""#));
    }

    #[test]
    fn test_shadow_style_carries_dash_values() {
        let current = state(300, 150, None, None);
        let ring = Ring::default();
        let markup = shadow_markup(&current, &ring);
        assert!(markup.starts_with("<style>"));
        assert!(markup.contains(&format!("stroke-dasharray: {}", ring.circumference())));
        assert!(markup.contains(&format!("stroke-dashoffset: {}", ring.dash_offset(0.5))));
        assert!(markup.contains("var(--counter-warning-color, #f4212e)"));
        assert!(markup.contains("prefers-reduced-motion"));
    }
}
