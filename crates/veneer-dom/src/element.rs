//! The host element capability trait.

/// Style capabilities of a host DOM element.
///
/// Implementations wrap whatever the host platform provides
/// (`getComputedStyle`, a legacy `currentStyle` bag, or an in-memory
/// store) behind a uniform surface. Every method is infallible from
/// the engine's point of view: a host that cannot answer returns
/// `None` or ignores the write.
pub trait Element {
    /// Read the computed value of a style property.
    ///
    /// `property` is a dashed name (`margin-top`, `-webkit-transform`)
    /// or, on the engine's fallback path, a camelCased one
    /// (`marginTop`). Returns `None` when the host has no value for
    /// the property; an empty string means "supported but unset".
    fn computed_style(&self, property: &str) -> Option<String>;

    /// Enumerate every style property name this host exposes on the
    /// element.
    ///
    /// Used once, on the reference element, by the capability probe.
    /// Whether the host enumerates an indexed style collection or a
    /// plain property bag is its own concern; it reports one flat
    /// list here. An empty list is acceptable and makes prefix
    /// lookups fail closed.
    fn style_property_names(&self) -> Vec<String>;

    /// Write `value` into the element's live inline style map.
    ///
    /// `name` is camelCased the way host style maps key their
    /// properties (`marginTop`, `WebkitTransform`).
    fn set_style_property(&self, name: &str, value: &str);

    /// Structurally remove an inline style property, if the host has
    /// a removal API.
    ///
    /// Returns `true` when the host handled the removal. The default
    /// implementation reports no such capability, which makes the
    /// engine fall back to editing the raw `style` attribute text.
    fn remove_style_property(&self, _name: &str) -> bool {
        false
    }

    /// Read a raw attribute value (`getAttribute`).
    fn attribute(&self, name: &str) -> Option<String>;

    /// Write a raw attribute value (`setAttribute`).
    fn set_attribute(&self, name: &str, value: &str);
}
