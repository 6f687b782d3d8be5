//! Core data types for sprig trees.

mod attrs;
mod component;
mod node;

pub use attrs::{AttrValue, Attrs, Style};
pub use component::Component;
pub use node::Node;
