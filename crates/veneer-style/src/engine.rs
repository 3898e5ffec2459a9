//! The public style accessor: normalized read, write, and clear
//! operations against a host element.

use std::borrow::Cow;

use regex::Regex;
use veneer_dom::Element;

use crate::opacity::OpacityMode;
use crate::prefix::PrefixResolver;
use crate::probe::SupportedProperties;
use crate::shorthand::{self, Expansion};
use crate::value::{self, NumericValue, Unit};

/// A normalized computed-style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Numeric result: parsed opacity, or the `auto` → `0` mapping.
    Number(f64),
    /// Everything else, passed through as reported by the host.
    Text(String),
}

impl StyleValue {
    /// The numeric value, if this is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(_) => None,
        }
    }

    /// The textual value, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(t) => Some(t),
            StyleValue::Number(_) => None,
        }
    }

    fn into_raw(self) -> String {
        match self {
            StyleValue::Number(n) => format!("{n}"),
            StyleValue::Text(t) => t,
        }
    }
}

/// Cross-engine style normalization over a probed host platform.
///
/// Construction probes the reference element once; after that every
/// operation is a synchronous computation against the immutable
/// capability set, the memoized prefix cache, and the host element
/// passed in.
///
/// # Example
///
/// ```
/// use veneer_dom::MemoryDocument;
/// use veneer_style::StyleEngine;
///
/// let doc = MemoryDocument::new();
/// let engine = StyleEngine::new(doc.root());
/// let el = doc.create_element();
///
/// engine.set_style(&el, "margin", "10");
/// assert_eq!(
///     engine.get_style(&el, "margin").unwrap().as_text(),
///     Some("10px"),
/// );
/// ```
pub struct StyleEngine {
    prefixes: PrefixResolver,
    opacity: OpacityMode,
    css_transitions: bool,
}

impl StyleEngine {
    /// Probe `root` and build an engine for its platform.
    pub fn new(root: &dyn Element) -> Self {
        Self::with_supported(SupportedProperties::probe(root))
    }

    /// Build an engine over an explicit capability set.
    pub fn with_supported(supported: SupportedProperties) -> Self {
        let opacity = OpacityMode::detect(&supported);
        let prefixes = PrefixResolver::new(supported);
        let css_transitions = prefixes.try_resolve("transition-duration").is_some();
        tracing::debug!(
            opacity = opacity.property(),
            css_transitions,
            "style engine initialized"
        );
        Self {
            prefixes,
            opacity,
            css_transitions,
        }
    }

    /// Whether this platform supports CSS transitions under any name.
    pub fn supports_transitions(&self) -> bool {
        self.css_transitions
    }

    /// The opacity mechanism in effect.
    pub fn opacity_mode(&self) -> OpacityMode {
        self.opacity
    }

    /// Resolve a logical property name to the platform's name.
    pub fn prefixed<'a>(&self, property: &'a str) -> Cow<'a, str> {
        self.prefixes.resolve(property)
    }

    /// Read the normalized value of `property`.
    ///
    /// Opacity routes through the platform's opacity mechanism.
    /// Shorthands read their representative longhand. An empty
    /// computed value yields `None`; the literal `auto` yields `0`.
    pub fn get_style(&self, element: &dyn Element, property: &str) -> Option<StyleValue> {
        if property == "opacity" {
            let raw = element
                .computed_style(self.opacity.property())
                .unwrap_or_default();
            return self.opacity.parse(&raw).map(StyleValue::Number);
        }

        let resolved = self.prefixes.resolve(shorthand::representative(property));
        // Some hosts only answer under camelCase keys.
        let raw = element
            .computed_style(&resolved)
            .or_else(|| element.computed_style(&camel_case(&resolved)))?;

        match raw.as_str() {
            "" => None,
            "auto" => Some(StyleValue::Number(0.0)),
            _ => Some(StyleValue::Text(raw)),
        }
    }

    /// Read `property` and split it into magnitude and unit.
    pub fn get_numeric_style(&self, element: &dyn Element, property: &str) -> NumericValue {
        let raw = self
            .get_style(element, property)
            .map(StyleValue::into_raw);
        value::parse_number(raw.as_deref(), property)
    }

    /// Write `value` to `property`.
    ///
    /// Shorthands fan out to one write per longhand, each with the
    /// identical value. Opacity is converted to the platform's
    /// mechanism before prefix resolution. Unitless values pick up
    /// the property's registered default unit unless the value is
    /// `auto` or `inherit`. The write lands in the element's live
    /// style map under the camelCased resolved name.
    pub fn set_style(&self, element: &dyn Element, property: &str, value: &str) {
        match shorthand::expand(property, value) {
            Expansion::Expanded(pairs) => {
                for (longhand, v) in pairs {
                    self.set_style(element, longhand, v);
                }
            }
            Expansion::Single(property) => {
                let (property, value) = if property == "opacity" {
                    let converted = match value.trim().parse::<f64>() {
                        Ok(fraction) => self.opacity.write_value(fraction),
                        Err(_) => value.to_string(),
                    };
                    (Cow::Borrowed(self.opacity.property()), Cow::Owned(converted))
                } else {
                    (Cow::Borrowed(property), Cow::Borrowed(value))
                };

                let resolved = self.prefixes.resolve(&property);
                let value = apply_default_unit(&resolved, value);
                element.set_style_property(&camel_case(&resolved), &value);
            }
        }
    }

    /// Write a batch of property/value declarations.
    pub fn set_styles(&self, element: &dyn Element, declarations: &[(&str, &str)]) {
        for (property, value) in declarations {
            self.set_style(element, property, value);
        }
    }

    /// Remove `property` from the element's inline style.
    ///
    /// Shorthands clear every longhand, then also strip a residual
    /// shorthand declaration: legacy engines re-collapse four equal
    /// longhands into the shorthand's serialized form. Clearing a
    /// property with no matching declaration is a no-op.
    pub fn clear_style(&self, element: &dyn Element, property: &str) {
        if let Some(longhands) = shorthand::longhands(property) {
            for longhand in longhands {
                self.clear_style(element, longhand);
            }
        }
        self.strip_declaration(element, property);
    }

    /// Remove one inline declaration, structurally when the host can,
    /// else by editing the raw `style` attribute text.
    fn strip_declaration(&self, element: &dyn Element, property: &str) {
        let resolved = self.prefixes.resolve(property);
        if element.remove_style_property(&resolved) {
            return;
        }

        let Some(style) = element.attribute("style") else {
            return;
        };
        let pattern = format!(r"\s?{}:\s[^;]+", regex::escape(&resolved));
        let Ok(re) = Regex::new(&pattern) else {
            return;
        };
        if let Some(m) = re.find(&style) {
            let mut stripped = String::with_capacity(style.len());
            stripped.push_str(&style[..m.start()]);
            let rest = &style[m.end()..];
            stripped.push_str(rest.strip_prefix(';').unwrap_or(rest));
            element.set_attribute("style", stripped.trim_start());
        }
    }
}

/// Append the property's default unit to a suffix-less value.
///
/// The lookup uses the resolved (possibly prefixed) name, and
/// unit-less registrations (opacity) append nothing.
fn apply_default_unit<'a>(property: &str, value: Cow<'a, str>) -> Cow<'a, str> {
    if let Some(unit) = value::default_unit(property) {
        if unit != Unit::None
            && value.as_ref() != "auto"
            && value.as_ref() != "inherit"
            && !value::has_unit_suffix(&value)
        {
            return Cow::Owned(format!("{value}{unit}"));
        }
    }
    value
}

/// CamelCase a dashed property name the way host style maps key their
/// properties: `margin-top` → `marginTop`, `-webkit-transform` →
/// `WebkitTransform`.
fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper_next = false;
    for c in property.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_handles_vendor_prefixes() {
        assert_eq!(camel_case("margin-top"), "marginTop");
        assert_eq!(camel_case("-webkit-transform"), "WebkitTransform");
        assert_eq!(camel_case("width"), "width");
    }

    #[test]
    fn default_unit_application() {
        assert_eq!(apply_default_unit("width", Cow::Borrowed("10")), "10px");
        assert_eq!(apply_default_unit("width", Cow::Borrowed("10px")), "10px");
        assert_eq!(apply_default_unit("width", Cow::Borrowed("auto")), "auto");
        assert_eq!(
            apply_default_unit("width", Cow::Borrowed("inherit")),
            "inherit"
        );
        assert_eq!(
            apply_default_unit("transition-duration", Cow::Borrowed("200")),
            "200ms"
        );
        // Unit-less registration appends nothing.
        assert_eq!(apply_default_unit("opacity", Cow::Borrowed("0.5")), "0.5");
        // Unregistered properties are left alone on the write path.
        assert_eq!(
            apply_default_unit("z-index", Cow::Borrowed("3")),
            "3"
        );
    }
}
