//! Shorthand properties and their constituent longhands.

/// Shorthand property names mapped to their longhands, in write
/// order.
pub const SHORTHAND_PROPERTIES: &[(&str, &[&str])] = &[
    (
        "border-radius",
        &[
            "border-bottom-left-radius",
            "border-bottom-right-radius",
            "border-top-left-radius",
            "border-top-right-radius",
        ],
    ),
    (
        "border-color",
        &[
            "border-bottom-color",
            "border-left-color",
            "border-top-color",
            "border-right-color",
        ],
    ),
    (
        "margin",
        &["margin-top", "margin-right", "margin-left", "margin-bottom"],
    ),
    (
        "padding",
        &[
            "padding-top",
            "padding-right",
            "padding-left",
            "padding-bottom",
        ],
    ),
];

/// Look up the longhands of a shorthand property.
pub fn longhands(property: &str) -> Option<&'static [&'static str]> {
    SHORTHAND_PROPERTIES
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, longhands)| *longhands)
}

/// Pick the property to read on behalf of `property`.
///
/// Shorthands have no single computed value, so reads go through the
/// first longhand as a stable representative. Non-shorthand names
/// pass through.
pub fn representative(property: &str) -> &str {
    match longhands(property) {
        Some(list) => list[0],
        None => property,
    }
}

/// Result of expanding a property for a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion<'a> {
    /// Not a shorthand: write the property itself.
    Single(&'a str),
    /// A shorthand: one write per longhand, all with the same value.
    Expanded(Vec<(&'static str, &'a str)>),
}

/// Expand a shorthand write into per-longhand writes.
///
/// Every longhand receives the identical `value`; callers wanting
/// per-edge values set the longhands directly.
pub fn expand<'a>(property: &'a str, value: &'a str) -> Expansion<'a> {
    match longhands(property) {
        Some(list) => Expansion::Expanded(list.iter().map(|l| (*l, value)).collect()),
        None => Expansion::Single(property),
    }
}
