//! In-memory headless DOM host.
//!
//! [`MemoryDocument`] models just enough of a rendering engine's
//! style subsystem to host the normalization layer: a configurable
//! set of supported style properties (the "platform profile"), and
//! elements whose inline declarations and serialized `style`
//! attribute stay coherent in both directions.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::element::Element;

/// Style properties a current standards-based engine exposes
/// unprefixed. This is the default platform profile for
/// [`MemoryDocument::new`].
pub const DEFAULT_STYLE_PROPERTIES: &[&str] = &[
    "top",
    "bottom",
    "left",
    "right",
    "width",
    "height",
    "display",
    "position",
    "margin-top",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "padding-top",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-color",
    "border-left-color",
    "border-top-color",
    "border-right-color",
    "box-shadow",
    "transform",
    "transform-origin",
    "transform-style",
    "transition-delay",
    "transition-duration",
    "transition-property",
    "transition-timing-function",
    "perspective",
    "perspective-origin",
    "opacity",
    "filter",
    "color",
    "background-color",
    "font-size",
];

/// An in-memory document: a platform profile plus an element factory.
#[derive(Clone)]
pub struct MemoryDocument {
    supported: Arc<Vec<String>>,
    root: MemoryElement,
}

impl MemoryDocument {
    /// Create a document with the default modern platform profile.
    pub fn new() -> Self {
        Self::with_properties(DEFAULT_STYLE_PROPERTIES.iter().copied())
    }

    /// Create a document with a custom platform profile.
    ///
    /// Useful for emulating engines that only expose prefixed
    /// property names, or legacy engines without `opacity`.
    pub fn with_properties<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let supported = Arc::new(names.into_iter().map(Into::into).collect::<Vec<_>>());
        let root = MemoryElement::with_profile(Arc::clone(&supported));
        Self { supported, root }
    }

    /// The reference element used for capability probing.
    pub fn root(&self) -> &MemoryElement {
        &self.root
    }

    /// Create a fresh element sharing this document's profile.
    pub fn create_element(&self) -> MemoryElement {
        MemoryElement::with_profile(Arc::clone(&self.supported))
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
struct ElementState {
    /// Inline declarations under dashed names, in declaration order.
    declarations: Vec<(String, String)>,
    /// Seeded computed values, consulted when no inline declaration
    /// matches.
    computed: HashMap<String, String>,
    /// Non-`style` attributes.
    attributes: HashMap<String, String>,
}

/// A cloneable handle to an in-memory element.
///
/// Clones share state, like handles to one underlying DOM node.
#[derive(Clone)]
pub struct MemoryElement {
    supported: Arc<Vec<String>>,
    state: Arc<RwLock<ElementState>>,
}

impl MemoryElement {
    fn with_profile(supported: Arc<Vec<String>>) -> Self {
        Self {
            supported,
            state: Arc::new(RwLock::new(ElementState::default())),
        }
    }

    /// Seed a computed style value, emulating what the host's layout
    /// would report for a property with no inline declaration.
    pub fn set_computed(&self, property: &str, value: &str) {
        self.state
            .write()
            .computed
            .insert(property.to_string(), value.to_string());
    }

    /// Number of inline declarations currently on the element.
    pub fn declaration_count(&self) -> usize {
        self.state.read().declarations.len()
    }
}

impl Element for MemoryElement {
    fn computed_style(&self, property: &str) -> Option<String> {
        let name = dashed_name(property);
        let state = self.state.read();
        if let Some((_, value)) = state.declarations.iter().find(|(n, _)| *n == name) {
            return Some(value.clone());
        }
        if let Some(value) = state.computed.get(&name) {
            return Some(value.clone());
        }
        // Supported but unset: hosts report an empty value, not an
        // unknown property.
        if self.supported.iter().any(|s| *s == name) {
            return Some(String::new());
        }
        None
    }

    fn style_property_names(&self) -> Vec<String> {
        self.supported.as_ref().clone()
    }

    fn set_style_property(&self, name: &str, value: &str) {
        let name = dashed_name(name);
        let mut state = self.state.write();
        if let Some(entry) = state.declarations.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value.to_string();
        } else {
            state.declarations.push((name, value.to_string()));
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let state = self.state.read();
        if name == "style" {
            if state.declarations.is_empty() {
                return None;
            }
            return Some(serialize_declarations(&state.declarations));
        }
        state.attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let mut state = self.state.write();
        if name == "style" {
            state.declarations = parse_style_text(value);
        } else {
            state.attributes.insert(name.to_string(), value.to_string());
        }
    }
}

/// Convert a camelCased style-map key back to its dashed form.
///
/// `marginTop` becomes `margin-top`; the leading-uppercase vendor
/// form `WebkitTransform` becomes `-webkit-transform`. Dashed input
/// passes through unchanged.
fn dashed_name(name: &str) -> String {
    if !name.chars().any(|c| c.is_ascii_uppercase()) {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn serialize_declarations(declarations: &[(String, String)]) -> String {
    declarations
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_style_text(text: &str) -> Vec<(String, String)> {
    text.split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                None
            } else {
                Some((name.to_string(), value.to_string()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashed_name_conversion() {
        assert_eq!(dashed_name("marginTop"), "margin-top");
        assert_eq!(dashed_name("WebkitTransform"), "-webkit-transform");
        assert_eq!(dashed_name("margin-top"), "margin-top");
    }

    #[test]
    fn style_attribute_serializes_declarations() {
        let doc = MemoryDocument::new();
        let el = doc.create_element();

        assert_eq!(el.attribute("style"), None);

        el.set_style_property("marginTop", "4px");
        el.set_style_property("width", "100px");
        assert_eq!(
            el.attribute("style").as_deref(),
            Some("margin-top: 4px; width: 100px;")
        );
    }

    #[test]
    fn style_attribute_writes_reparse() {
        let doc = MemoryDocument::new();
        let el = doc.create_element();

        el.set_attribute("style", "margin-top: 4px; width: 100px;");
        assert_eq!(el.computed_style("margin-top").as_deref(), Some("4px"));
        assert_eq!(el.computed_style("width").as_deref(), Some("100px"));

        el.set_attribute("style", "width: 100px;");
        assert_eq!(el.computed_style("margin-top").as_deref(), Some(""));
    }

    #[test]
    fn inline_declaration_overwrites_in_place() {
        let doc = MemoryDocument::new();
        let el = doc.create_element();

        el.set_style_property("width", "100px");
        el.set_style_property("width", "200px");
        assert_eq!(el.declaration_count(), 1);
        assert_eq!(el.computed_style("width").as_deref(), Some("200px"));
    }

    #[test]
    fn computed_prefers_inline_then_seeded() {
        let doc = MemoryDocument::new();
        let el = doc.create_element();

        el.set_computed("height", "auto");
        assert_eq!(el.computed_style("height").as_deref(), Some("auto"));

        el.set_style_property("height", "50px");
        assert_eq!(el.computed_style("height").as_deref(), Some("50px"));
    }

    #[test]
    fn unsupported_property_reads_as_none() {
        let doc = MemoryDocument::with_properties(["width"]);
        let el = doc.create_element();

        assert_eq!(el.computed_style("width").as_deref(), Some(""));
        assert_eq!(el.computed_style("transform"), None);
    }

    #[test]
    fn clones_share_state() {
        let doc = MemoryDocument::new();
        let el = doc.create_element();
        let handle = el.clone();

        el.set_style_property("width", "10px");
        assert_eq!(handle.computed_style("width").as_deref(), Some("10px"));
    }
}
