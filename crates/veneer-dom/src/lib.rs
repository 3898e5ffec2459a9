//! Host DOM boundary for the Veneer style normalization layer.
//!
//! The style engine never talks to a concrete DOM. It consumes the
//! [`Element`] capability trait, which exposes exactly the style
//! surface the engine needs: computed-style reads, inline-style
//! writes, style-property enumeration, and raw `style` attribute
//! access.
//!
//! This crate also ships [`MemoryElement`] and [`MemoryDocument`], an
//! in-memory headless implementation. It backs the engine's test
//! suite and is useful on its own for embedders that want style
//! normalization without a rendering engine attached.
//!
//! # Example
//!
//! ```
//! use veneer_dom::{Element, MemoryDocument};
//!
//! let doc = MemoryDocument::new();
//! let el = doc.create_element();
//! el.set_style_property("marginTop", "4px");
//! assert_eq!(el.attribute("style").as_deref(), Some("margin-top: 4px;"));
//! ```

mod element;
mod memory;

pub use element::Element;
pub use memory::{MemoryDocument, MemoryElement, DEFAULT_STYLE_PROPERTIES};
