//! sprig - declarative markup generation
//!
//! A library for turning lightweight, data-only tree descriptions into
//! HTML/SVG/XML strings. Trees are plain nested sequences; the pipeline
//! has two stages consumed in order:
//!
//! 1. [`normalize`] resolves tag shorthand (`"div#id.cls"`), expands
//!    embedded components, splices iterables, flattens style maps, and
//!    prunes nullish entries, producing a canonical
//!    `[tag, attrs, ...children]` shape.
//! 2. [`serialize`] renders a canonical tree to a markup fragment with
//!    attribute formatting, void-element handling, and optional entity
//!    escaping.
//!
//! [`serialize_tree`] composes both stages. Normalization is strict (a
//! malformed tag fails the whole call); serialization is lenient and
//! never fails.
//!
//! # Example
//!
//! ```
//! use sprig::{serialize_tree, Attrs, Node};
//!
//! let tree = Node::elem(
//!     "a#home.nav",
//!     Attrs::new().set("href", "/"),
//!     [Node::from("Home")],
//! );
//! assert_eq!(
//!     serialize_tree(&tree, false).unwrap(),
//!     r#"<a id="home" class="nav" href="/">Home</a>"#
//! );
//! ```

pub mod error;
pub mod escape;
pub mod json;
pub mod normalize;
pub mod serialize;
pub mod tag;
pub mod types;

pub use error::{Result, SprigError};
pub use escape::escape;
pub use normalize::normalize;
pub use serialize::{serialize, serialize_tree, SVG_NS};
pub use tag::{parse_tag, TagParts};
pub use types::{AttrValue, Attrs, Component, Node, Style};
