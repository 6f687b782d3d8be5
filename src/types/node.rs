//! The tree node type.
//!
//! A tree is plain nested data: sequences whose head slot decides their
//! meaning. The shape of every value is classified once, at construction,
//! into one `Node` variant; the normalizer and serializer then dispatch on
//! the variant instead of probing shapes repeatedly.
//!
//! The forms a raw sequence can take mirror the input syntax:
//!
//! ```text
//! ["tag", ...]                  element
//! ["tag#id.class1.class2", ...] element with shorthand
//! ["tag", {attrs}, ...]         element with attributes
//! [component, arg1, arg2]       component call
//! [a, b, c]                     fragment (anything else in head position)
//! ```

use crate::types::{Attrs, Component};

/// A node in a raw or normalized tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Nothing; pruned during normalization, empty output when serialized.
    Empty,

    /// A text leaf.
    Text(String),

    /// A numeric leaf.
    Num(f64),

    /// An ordered sequence. The head slot decides the form: a `Text` head
    /// makes it an element, a `Func` head makes it a component call, and
    /// anything else makes it a fragment of sibling nodes.
    Seq(Vec<Node>),

    /// An iterable of sibling nodes, spliced in place in child position.
    List(Vec<Node>),

    /// A component callable.
    Func(Component),

    /// An attributes mapping; only meaningful in slot 1 of an element.
    Attrs(Attrs),
}

impl Node {
    /// Text leaf constructor.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Numeric leaf constructor.
    pub fn num(n: impl Into<f64>) -> Self {
        Self::Num(n.into())
    }

    /// Sequence constructor.
    pub fn seq(items: impl IntoIterator<Item = Node>) -> Self {
        Self::Seq(items.into_iter().collect())
    }

    /// Iterable constructor.
    pub fn list(items: impl IntoIterator<Item = Node>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Component constructor.
    pub fn func(f: impl Fn(&[Node]) -> Node + 'static) -> Self {
        Self::Func(Component::new(f))
    }

    /// Element constructor: `[tag, attrs, ...children]`.
    ///
    /// The tag may use shorthand syntax; it is resolved at normalization,
    /// not here.
    pub fn elem(
        tag: impl Into<String>,
        attrs: Attrs,
        children: impl IntoIterator<Item = Node>,
    ) -> Self {
        let mut items = vec![Self::Text(tag.into()), Self::Attrs(attrs)];
        items.extend(children);
        Self::Seq(items)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Self::Num(n as f64)
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Self::Num(n as f64)
    }
}

impl From<u32> for Node {
    fn from(n: u32) -> Self {
        Self::Num(n as f64)
    }
}

impl From<usize> for Node {
    fn from(n: usize) -> Self {
        Self::Num(n as f64)
    }
}

impl From<Attrs> for Node {
    fn from(attrs: Attrs) -> Self {
        Self::Attrs(attrs)
    }
}

impl From<Component> for Node {
    fn from(component: Component) -> Self {
        Self::Func(component)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Self::Seq(items)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Empty,
        }
    }
}
