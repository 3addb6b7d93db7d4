//! Theming surface: CSS custom properties and the shipped stylesheet.
//!
//! Hosts restyle the widget without touching its internals by setting
//! custom properties on the element (or any ancestor). Geometry properties
//! are read back through computed style at render time; color properties
//! are consumed directly by CSS `var()` with the defaults below.

use web_sys::{CssStyleDeclaration, HtmlElement};

use crate::ring::{DEFAULT_DIAMETER, DEFAULT_STROKE_WIDTH, Ring};

/// Ring track color. Default `#e0e0e0`.
pub const TRACK_COLOR: &str = "--counter-track-color";
/// Progress stroke color under the limit. Default `#1d9bf0`.
pub const NORMAL_COLOR: &str = "--counter-normal-color";
/// Progress stroke and label color over the limit. Default `#f4212e`.
pub const WARNING_COLOR: &str = "--counter-warning-color";
/// Numeric label color. Default `#536471`.
pub const TEXT_COLOR: &str = "--counter-text-color";
/// Ring diameter (a pixel length). Default `24px`.
pub const SIZE: &str = "--counter-size";
/// Ring stroke width. Default `2`.
pub const STROKE_WIDTH: &str = "--counter-stroke-width";

/// Written by the renderer in the light-DOM variant: full circumference,
/// consumed by the stylesheet as `stroke-dasharray`.
pub const CIRCUMFERENCE: &str = "--counter-circumference";
/// Written by the renderer in the light-DOM variant: dash offset hiding
/// the unfilled share, consumed as `stroke-dashoffset`.
pub const OFFSET: &str = "--counter-offset";

pub const DEFAULT_TRACK_COLOR: &str = "#e0e0e0";
pub const DEFAULT_NORMAL_COLOR: &str = "#1d9bf0";
pub const DEFAULT_WARNING_COLOR: &str = "#f4212e";
pub const DEFAULT_TEXT_COLOR: &str = "#536471";

/// Stylesheet for the light-DOM variant, also shipped as
/// `css/character-counter.css`. Inject it into a `<style>` element or serve
/// the file; the shadow variant carries its own copy.
pub const STYLESHEET: &str = include_str!("../css/character-counter.css");

/// Resolve the ring geometry for a host element from its computed style.
///
/// Missing window, unset properties and malformed values all degrade to
/// the intrinsic 24px / 2 geometry.
pub(crate) fn resolved_ring(host: &HtmlElement) -> Ring {
    let style = web_sys::window().and_then(|window| window.get_computed_style(host).ok().flatten());
    Ring::new(
        custom_length(style.as_ref(), SIZE).unwrap_or(DEFAULT_DIAMETER),
        custom_length(style.as_ref(), STROKE_WIDTH).unwrap_or(DEFAULT_STROKE_WIDTH),
    )
}

fn custom_length(style: Option<&CssStyleDeclaration>, property: &str) -> Option<f64> {
    let value = style?.get_property_value(property).ok()?;
    parse_px(&value)
}

/// Parse a custom-property length: optional `px` suffix, finite, positive.
///
/// Zero is rejected on purpose; a zero-size ring is treated as unset and
/// falls back to the intrinsic geometry.
fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim_end();
    let number: f64 = number.parse().ok()?;
    (number.is_finite() && number > 0.0).then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px_accepts_lengths_and_bare_numbers() {
        assert_eq!(parse_px("24px"), Some(24.0));
        assert_eq!(parse_px("32"), Some(32.0));
        assert_eq!(parse_px(" 18px "), Some(18.0));
        assert_eq!(parse_px("2.5"), Some(2.5));
    }

    #[test]
    fn test_parse_px_rejects_non_lengths() {
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("px"), None);
        assert_eq!(parse_px("thick"), None);
        assert_eq!(parse_px("0"), None);
        assert_eq!(parse_px("-4px"), None);
        assert_eq!(parse_px("NaN"), None);
    }

    #[test]
    fn test_stylesheet_uses_the_published_property_names() {
        for property in [
            TRACK_COLOR,
            NORMAL_COLOR,
            WARNING_COLOR,
            TEXT_COLOR,
            SIZE,
            STROKE_WIDTH,
            CIRCUMFERENCE,
            OFFSET,
        ] {
            assert!(
                STYLESHEET.contains(property),
                "stylesheet is missing {property}"
            );
        }
    }
}
