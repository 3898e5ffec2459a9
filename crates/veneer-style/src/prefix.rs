//! Vendor-prefix resolution with a commit-on-success memo cache.

use std::borrow::Cow;
use std::collections::HashMap;

use parking_lot::RwLock;

use crate::probe::SupportedProperties;

/// Vendor prefixes, in probe order.
pub const VENDOR_PREFIXES: &[&str] = &["-webkit-", "-moz-", "-ms-", "-o-"];

/// Logical property names that may require a vendor prefix.
///
/// Anything not listed here resolves to itself without a platform
/// lookup.
pub const PREFIXABLE_PROPERTIES: &[&str] = &[
    "border-bottom-left-radius",
    "border-bottom-right-radius",
    "border-top-left-radius",
    "border-top-right-radius",
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
];

fn prefixable_key(property: &str) -> Option<&'static str> {
    PREFIXABLE_PROPERTIES.iter().copied().find(|p| *p == property)
}

/// Maps logical property names to the form the host platform
/// actually recognizes.
///
/// Resolution is memoized per property: once a platform's answer is
/// known it never changes for the resolver's lifetime. A failed probe
/// commits nothing, so the next call retries — probing is cheap and
/// idempotent, and a capability that never appears simply keeps
/// resolving to the unprefixed name.
pub struct PrefixResolver {
    supported: SupportedProperties,
    cache: RwLock<HashMap<&'static str, String>>,
}

impl PrefixResolver {
    /// Build a resolver over a probed capability set.
    pub fn new(supported: SupportedProperties) -> Self {
        Self {
            supported,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The capability set this resolver consults.
    pub fn supported(&self) -> &SupportedProperties {
        &self.supported
    }

    /// Resolve a logical property name to the platform's name.
    ///
    /// Non-prefixable names pass through without a lookup. Prefixable
    /// names that the platform does not support under any prefix also
    /// pass through unchanged; writes to them degrade to host no-ops.
    pub fn resolve<'a>(&self, property: &'a str) -> Cow<'a, str> {
        if prefixable_key(property).is_none() {
            return Cow::Borrowed(property);
        }
        match self.try_resolve(property) {
            Some(resolved) => Cow::Owned(resolved),
            None => Cow::Borrowed(property),
        }
    }

    /// Resolve a prefixable property, reporting failure.
    ///
    /// Returns `None` when `property` is not in the prefixable set or
    /// when no supported form exists on this platform. This is the
    /// feature-detection entry point (`transition-duration` resolving
    /// at all is how transition support is derived).
    pub fn try_resolve(&self, property: &str) -> Option<String> {
        let key = prefixable_key(property)?;
        if let Some(hit) = self.cache.read().get(key) {
            return Some(hit.clone());
        }
        let resolved = self.probe_platform(key)?;
        self.cache.write().insert(key, resolved.clone());
        tracing::trace!(property = key, resolved = %resolved, "committed vendor prefix");
        Some(resolved)
    }

    /// Check the unprefixed name, then each vendor prefix in order.
    fn probe_platform(&self, property: &str) -> Option<String> {
        if self.supported.contains(property) {
            return Some(property.to_string());
        }
        VENDOR_PREFIXES
            .iter()
            .map(|prefix| format!("{prefix}{property}"))
            .find(|candidate| self.supported.contains(candidate))
    }

    #[cfg(test)]
    fn cached(&self, property: &str) -> Option<String> {
        self.cache.read().get(property).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(names: &[&str]) -> PrefixResolver {
        PrefixResolver::new(SupportedProperties::from_names(names.iter().copied()))
    }

    #[test]
    fn unprefixed_name_wins_when_supported() {
        let resolver = resolver(&["transform", "-webkit-transform"]);
        assert_eq!(resolver.resolve("transform"), "transform");
        assert_eq!(resolver.cached("transform").as_deref(), Some("transform"));
    }

    #[test]
    fn first_matching_prefix_in_order() {
        let resolver = resolver(&["-moz-transform", "-webkit-transform"]);
        assert_eq!(resolver.resolve("transform"), "-webkit-transform");
    }

    #[test]
    fn non_prefixable_passes_through_uncached() {
        let resolver = resolver(&["width"]);
        assert_eq!(resolver.resolve("width"), "width");
        assert_eq!(resolver.cached("width"), None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let resolver = resolver(&["-ms-transform"]);
        let first = resolver.try_resolve("transform");
        let second = resolver.try_resolve("transform");
        assert_eq!(first.as_deref(), Some("-ms-transform"));
        assert_eq!(first, second);
    }

    #[test]
    fn failed_probe_commits_nothing() {
        let resolver = resolver(&[]);
        assert_eq!(resolver.resolve("box-shadow"), "box-shadow");
        assert_eq!(resolver.try_resolve("box-shadow"), None);
        // No cache entry: the next call re-probes.
        assert_eq!(resolver.cached("box-shadow"), None);
    }
}
