//! Field reads that accept either structural form of an XMP property.
//!
//! The XMP toolkit serializes a simple property either as an attribute
//! (`<Camera:Pose CameraPose:PositionX="1"/>`) or as a child element
//! (`<CameraPose:PositionX>1</CameraPose:PositionX>`). Every read tries the
//! attribute first and falls back to the first matching descendant.
//! Missing elements, namespaces or values resolve to empty strings and
//! zeros; nothing here fails.

use super::element::XmpElement;

/// Text of the attribute `ns:name`, or `""`.
pub fn attr_value<E: XmpElement>(element: Option<E>, ns: &str, name: &str) -> String {
    element
        .and_then(|e| e.attribute_ns(ns, name))
        .unwrap_or_default()
}

/// The `index`-th descendant element `ns:name`.
pub fn find_child<E: XmpElement>(parent: Option<E>, ns: &str, name: &str, index: usize) -> Option<E> {
    parent.and_then(|p| p.descendant_ns(ns, name, index))
}

/// Text content of `element`, or `""`.
pub fn element_value<E: XmpElement>(element: Option<E>) -> String {
    element.map(|e| e.text_content()).unwrap_or_default()
}

/// Text content of the first descendant `ns:name`, or `""`.
pub fn child_value<E: XmpElement>(parent: Option<E>, ns: &str, name: &str) -> String {
    element_value(find_child(parent, ns, name, 0))
}

/// Read `ns:name` as an attribute, falling back to a child element.
///
/// Surrounding whitespace is trimmed; pretty-printed element text carries it.
pub fn read_str<E: XmpElement>(element: Option<E>, ns: &str, name: &str) -> String {
    let attr = attr_value(element, ns, name);
    let value = if attr.trim().is_empty() {
        child_value(element, ns, name)
    } else {
        attr
    };
    value.trim().to_string()
}

/// Read `ns:name` as a number; missing or non-numeric values read as 0.
pub fn read_f64<E: XmpElement>(element: Option<E>, ns: &str, name: &str) -> f64 {
    parse_number(&read_str(element, ns, name))
}

/// Read `ns:name` as a boolean flag.
pub fn read_bool<E: XmpElement>(element: Option<E>, ns: &str, name: &str) -> bool {
    parse_bool(&read_str(element, ns, name))
}

/// Lenient numeric coercion: empty, non-numeric and non-finite values are 0.
pub fn parse_number(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// `1`, `true` and `yes` (any case) are true; everything else is false.
pub fn parse_bool(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
}
