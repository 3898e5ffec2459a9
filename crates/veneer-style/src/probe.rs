//! One-time capability probe of the host platform.

use std::collections::HashSet;

use veneer_dom::Element;

/// The set of style property names the host platform supports.
///
/// Populated once from a reference element (normally the document
/// root) and immutable afterwards. Membership here is the basis for
/// every vendor-prefix decision.
#[derive(Debug, Clone, Default)]
pub struct SupportedProperties {
    names: HashSet<String>,
}

impl SupportedProperties {
    /// Enumerate the reference element's style properties.
    ///
    /// An empty enumeration is acceptable: prefix lookups then fail
    /// closed and properties resolve to their unprefixed names.
    pub fn probe(root: &dyn Element) -> Self {
        let names: HashSet<String> = root.style_property_names().into_iter().collect();
        tracing::debug!(count = names.len(), "probed host style properties");
        Self { names }
    }

    /// Build a set from explicit names, bypassing a host probe.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the host recognizes `name` as a style property.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of probed properties.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the probe found nothing.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_dom::MemoryDocument;

    #[test]
    fn probe_collects_host_enumeration() {
        let doc = MemoryDocument::with_properties(["width", "opacity"]);
        let supported = SupportedProperties::probe(doc.root());

        assert_eq!(supported.len(), 2);
        assert!(supported.contains("width"));
        assert!(supported.contains("opacity"));
        assert!(!supported.contains("transform"));
    }

    #[test]
    fn empty_probe_is_acceptable() {
        let doc = MemoryDocument::with_properties(Vec::<String>::new());
        let supported = SupportedProperties::probe(doc.root());

        assert!(supported.is_empty());
        assert!(!supported.contains("width"));
    }
}
