//! Cross-browser CSS style normalization.
//!
//! This crate reads and writes style properties on DOM elements while
//! hiding the differences between rendering engines:
//!
//! - **Vendor prefixes**: logical names resolve to whatever form the
//!   platform supports (`transform` → `-webkit-transform`), probed
//!   once and memoized
//! - **Shorthands**: writes fan out to longhands, reads go through a
//!   representative longhand
//! - **Units**: unitless numeric values pick up per-property defaults
//!   (`px`, `ms`)
//! - **Opacity**: the standard `opacity` property and the legacy
//!   `filter: alpha(opacity=N)` syntax read and write uniformly
//!
//! The host DOM is consumed through the [`veneer_dom::Element`]
//! capability trait; no operation in this crate errors or panics —
//! everything degrades to a pass-through or a default.
//!
//! # Example
//!
//! ```
//! use veneer_dom::MemoryDocument;
//! use veneer_style::prelude::*;
//!
//! let doc = MemoryDocument::new();
//! let engine = StyleEngine::new(doc.root());
//! let el = doc.create_element();
//!
//! engine.set_style(&el, "width", "120");
//! let parsed = engine.get_numeric_style(&el, "width");
//! assert_eq!(parsed.as_number(), Some(120.0));
//! assert_eq!(parsed.unit_str(), "px");
//! ```

pub mod engine;
pub mod opacity;
pub mod prefix;
pub mod probe;
pub mod shorthand;
pub mod value;

pub use engine::{StyleEngine, StyleValue};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::engine::{StyleEngine, StyleValue};
    pub use crate::opacity::OpacityMode;
    pub use crate::prefix::PrefixResolver;
    pub use crate::probe::SupportedProperties;
    pub use crate::shorthand::Expansion;
    pub use crate::value::{NumericValue, Unit};
    pub use veneer_dom::Element;
}
