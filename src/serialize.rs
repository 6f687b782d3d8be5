//! Tree serialization.
//!
//! The serializer renders a tree to a markup string fragment (no DOCTYPE,
//! no document wrapper). It assumes canonical shape for element nodes but
//! never fails: shapes a strict normalizer would reject degrade to
//! best-effort output instead. Run [`crate::normalize`] first (or use
//! [`serialize_tree`]) when the input is raw.

use crate::error::Result;
use crate::escape::write_escaped;
use crate::normalize::normalize;
use crate::types::{AttrValue, Attrs, Node};

/// SVG namespace URI.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Void elements: rendered self-closed when they have no children.
///
/// HTML void elements plus the SVG shape primitives that are always
/// self-closing in practice. Membership is exact and case-sensitive.
const VOID_TAGS: [&str; 24] = [
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr", "circle", "ellipse", "line", "path", "polygon",
    "polyline", "rect", "stop",
];

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Recursively serialize a tree as an HTML/SVG/XML string.
///
/// Assumes the tree is already normalized; see [`serialize_tree`] for the
/// combined pipeline. With `escape` set, text content and attribute
/// values have the five reserved markup characters replaced by named
/// entities; without it, values pass through verbatim and quoting is the
/// caller's responsibility.
pub fn serialize(tree: &Node, escape: bool) -> String {
    let mut out = String::new();
    write_node(&mut out, tree, escape);
    out
}

/// Recursively normalize and then serialize a tree.
pub fn serialize_tree(tree: &Node, escape: bool) -> Result<String> {
    Ok(normalize(tree)?
        .map(|n| serialize(&n, escape))
        .unwrap_or_default())
}

fn write_node(out: &mut String, tree: &Node, esc: bool) {
    match tree {
        Node::Empty => {}
        Node::Seq(items) => match items.first() {
            Some(Node::Text(tag)) => write_element(out, tag, &items[1..], esc),
            // No tag in head position: render as a fragment.
            _ => {
                for item in items {
                    write_node(out, item, esc);
                }
            }
        },
        Node::List(items) => {
            for item in items {
                write_node(out, item, esc);
            }
        }
        // Lazily-produced content at render time.
        Node::Func(f) => write_node(out, &f.call(&[]), esc),
        Node::Text(s) => {
            if esc {
                write_escaped(out, s);
            } else {
                out.push_str(s);
            }
        }
        Node::Num(n) => out.push_str(&fmt_num(*n)),
        // Not renderable on its own.
        Node::Attrs(_) => {}
    }
}

fn write_element(out: &mut String, tag: &str, rest: &[Node], esc: bool) {
    out.push('<');
    out.push_str(tag);

    let children = match rest.first() {
        Some(Node::Attrs(attrs)) => {
            write_attrs(out, attrs, esc);
            &rest[1..]
        }
        _ => rest,
    };

    if !children.is_empty() {
        out.push('>');
        for child in children {
            write_node(out, child, esc);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    } else if is_void(tag) {
        out.push_str("/>");
    } else {
        out.push_str("></");
        out.push_str(tag);
        out.push('>');
    }
}

fn write_attrs(out: &mut String, attrs: &Attrs, esc: bool) {
    for (name, value) in attrs.iter() {
        match value {
            AttrValue::Undefined | AttrValue::Bool(false) => {}
            AttrValue::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            _ => {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                let value = value.to_value_string();
                if esc {
                    write_escaped(out, &value);
                } else {
                    out.push_str(&value);
                }
                out.push('"');
            }
        }
    }
}

/// Format a numeric leaf the way a scalar renders in markup: integral
/// values without a fractional part (`2.0` -> `"2"`).
pub(crate) fn fmt_num(n: f64) -> String {
    n.to_string()
}
