//! Tree normalization.
//!
//! Normalization turns a raw, possibly irregular tree into canonical form:
//! every element becomes `[tag, attrs, ...children]` with the shorthand
//! resolved, the attribute map always present, embedded components
//! expanded, iterables spliced, and nullish entries pruned. The serializer
//! can then walk the result without re-deriving any of this.
//!
//! Normalization is strict: a malformed tag shorthand or a bare attribute
//! mapping in node position fails with [`SprigError::InvalidTag`] and the
//! whole call aborts. It is also pure: the input is never mutated and the
//! output is freshly built on every call.

use crate::error::{Result, SprigError};
use crate::tag::parse_tag;
use crate::types::{AttrValue, Attrs, Node};

/// Normalize a tree, expanding any embedded components with their results.
///
/// Returns `Ok(None)` when the tree normalizes to nothing ([`Node::Empty`]
/// input, or a component that produced it); the caller prunes such
/// results. Recursion depth follows input depth, so a pathologically deep
/// tree can exhaust the stack; the engine does not guard against that.
pub fn normalize(tree: &Node) -> Result<Option<Node>> {
    match tree {
        Node::Empty => Ok(None),
        Node::Func(f) => normalize(&f.call(&[])),
        Node::Seq(items) => normalize_seq(items),
        Node::List(items) => Ok(Some(Node::List(normalize_fragment(items)?))),
        Node::Text(s) => Ok(Some(Node::Text(s.clone()))),
        Node::Num(n) => Ok(Some(Node::Num(*n))),
        Node::Attrs(_) => Err(SprigError::InvalidTag {
            found: format!("{tree:?}"),
            help: Some("an attribute map is only valid in slot 1 of an element".to_string()),
        }),
    }
}

/// Dispatch a sequence on its head slot.
fn normalize_seq(items: &[Node]) -> Result<Option<Node>> {
    match items.first() {
        // Component call: remaining slots are the arguments and the
        // result replaces the whole sequence.
        Some(Node::Func(f)) => normalize(&f.call(&items[1..])),
        Some(Node::Text(tag)) => normalize_element(tag, &items[1..]).map(Some),
        // No element or component form: a fragment of sibling nodes.
        _ => Ok(Some(Node::List(normalize_fragment(items)?))),
    }
}

/// Normalize the members of a fragment, pruning nothing-results and
/// splicing nested fragments flat.
fn normalize_fragment(items: &[Node]) -> Result<Vec<Node>> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if let Some(node) = normalize(item)? {
            push_child(&mut out, node);
        }
    }
    Ok(out)
}

/// Append a normalized child, splicing fragment results into their
/// siblings so canonical children are always elements or scalars.
fn push_child(out: &mut Vec<Node>, node: Node) {
    match node {
        Node::List(items) => out.extend(items),
        other => out.push(other),
    }
}

/// Normalize one element: resolve the tag shorthand, build the attribute
/// map, and flatten the children.
fn normalize_element(tag: &str, rest: &[Node]) -> Result<Node> {
    let parts = parse_tag(tag)?;

    // Shorthand-derived entries first; the explicit map merges on top,
    // so an explicit id/class wins.
    let mut attrs = Attrs::new();
    if let Some(id) = parts.id {
        attrs.insert("id", id);
    }
    if let Some(class) = parts.class {
        attrs.insert("class", class);
    }

    let children = match rest.first() {
        Some(Node::Attrs(explicit)) => {
            attrs.extend(explicit);
            &rest[1..]
        }
        _ => rest,
    };

    let css = match attrs.get("style") {
        Some(AttrValue::Style(style)) => Some(style.to_css()),
        _ => None,
    };
    if let Some(css) = css {
        attrs.insert("style", css);
    }

    // Iterable children expand in place via the fragment splice; pruned
    // children leave no placeholder behind.
    let mut out = vec![Node::Text(parts.name), Node::Attrs(attrs)];
    for child in children {
        if let Some(node) = normalize(child)? {
            push_child(&mut out, node);
        }
    }
    Ok(Node::Seq(out))
}
