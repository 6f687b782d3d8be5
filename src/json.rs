//! JSON tree ingestion.
//!
//! Trees are plain nested data, so a `serde_json::Value` maps onto
//! [`Node`] directly: arrays become sequences, objects become attribute
//! maps, scalars become leaves. Components have no JSON form; everything
//! else round-trips, which makes `json!` literals a convenient way to
//! write whole trees:
//!
//! ```
//! use serde_json::json;
//! use sprig::{serialize_tree, Node};
//!
//! let tree = Node::from(json!(["div#app", {"hidden": false}, "hello"]));
//! assert_eq!(serialize_tree(&tree, false).unwrap(), r#"<div id="app">hello</div>"#);
//! ```

use serde_json::Value;

use crate::types::{AttrValue, Attrs, Node, Style};

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Empty,
            // Scalar coercion outside attribute position is string form.
            Value::Bool(b) => Node::Text(b.to_string()),
            Value::Number(n) => Node::Num(n.as_f64().unwrap_or_default()),
            Value::String(s) => Node::Text(s),
            Value::Array(items) => Node::Seq(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => {
                let mut attrs = Attrs::new();
                for (name, value) in map {
                    attrs.insert(name, attr_value(value));
                }
                Node::Attrs(attrs)
            }
        }
    }
}

fn attr_value(value: Value) -> AttrValue {
    match value {
        Value::Null => AttrValue::Undefined,
        Value::Bool(b) => AttrValue::Bool(b),
        Value::Number(n) => AttrValue::Num(n.as_f64().unwrap_or_default()),
        Value::String(s) => AttrValue::Str(s),
        // A nested object is a style map; values take their string form.
        Value::Object(map) => {
            let mut style = Style::new();
            for (property, value) in map {
                style.insert(property, scalar_string(value));
            }
            AttrValue::Style(style)
        }
        // No structured meaning in attribute position; keep the JSON text.
        other => AttrValue::Str(other.to_string()),
    }
}

fn scalar_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
