//! End-to-end tests for the normalize/serialize pipeline.

use pretty_assertions::assert_eq;
use serde_json::json;

use sprig::{escape, normalize, serialize, serialize_tree, AttrValue, Attrs, Node, SprigError, SVG_NS};

fn elem(tag: &str, attrs: Attrs, children: Vec<Node>) -> Node {
    Node::elem(tag, attrs, children)
}

#[test]
fn shorthand_extracts_id_and_classes() {
    let out = serialize_tree(&Node::seq([Node::from("div#foo.bar.baz"), Node::from("x")]), false)
        .unwrap();
    assert_eq!(out, r#"<div id="foo" class="bar baz">x</div>"#);
}

#[test]
fn normalization_is_a_fixed_point_on_canonical_trees() {
    let canonical = elem(
        "section",
        Attrs::new().set("id", "s1"),
        vec![
            elem("h1", Attrs::new(), vec![Node::from("title")]),
            elem("br", Attrs::new(), vec![]),
        ],
    );
    let once = normalize(&canonical).unwrap().unwrap();
    let twice = normalize(&once).unwrap().unwrap();
    assert_eq!(once, canonical);
    assert_eq!(twice, once);
}

#[test]
fn serializing_any_accepted_tree_never_panics() {
    let trees = vec![
        Node::Empty,
        Node::from("text"),
        Node::from(42),
        Node::seq([]),
        Node::seq([Node::from("div")]),
        Node::seq([Node::from("ul"), Node::list([Node::seq([Node::from("li")])])]),
        Node::seq([Node::func(|_| Node::Empty)]),
        Node::list([Node::from("a"), Node::Empty, Node::from("b")]),
    ];
    for tree in trees {
        if let Some(n) = normalize(&tree).unwrap() {
            let _ = serialize(&n, false);
            let _ = serialize(&n, true);
        }
    }
}

#[test]
fn attribute_omission_and_bare_names() {
    let attrs = Attrs::new()
        .set("a", AttrValue::Undefined)
        .set("b", false)
        .set("c", true)
        .set("d", "v");
    let out = serialize_tree(&elem("p", attrs, vec![]), false).unwrap();
    assert_eq!(out, r#"<p c d="v"></p>"#);
}

#[test]
fn escaping_applies_to_text_and_attribute_values() {
    let tree = elem("p", Attrs::new(), vec![Node::from("<a>&b")]);
    assert_eq!(serialize_tree(&tree, true).unwrap(), "<p>&lt;a&gt;&amp;b</p>");
    assert_eq!(serialize_tree(&tree, false).unwrap(), "<p><a>&b</p>");

    let quoted = elem("p", Attrs::new().set("title", "say \"hi\""), vec![]);
    insta::assert_snapshot!(
        serialize_tree(&quoted, true).unwrap(),
        @r#"<p title="say &quot;hi&quot;"></p>"#
    );
}

#[test]
fn void_and_non_void_empty_elements() {
    assert_eq!(serialize_tree(&Node::seq([Node::from("br")]), false).unwrap(), "<br/>");
    assert_eq!(
        serialize_tree(&Node::seq([Node::from("div")]), false).unwrap(),
        "<div></div>"
    );
}

#[test]
fn component_expansion_matches_literal_tree() {
    let component = Node::func(|_| Node::seq([Node::from("span"), Node::from("hi")]));
    let with_component = Node::seq([Node::from("div"), Node::seq([component])]);
    let literal = Node::seq([
        Node::from("div"),
        Node::seq([Node::from("span"), Node::from("hi")]),
    ]);
    assert_eq!(
        serialize_tree(&with_component, false).unwrap(),
        serialize_tree(&literal, false).unwrap()
    );
}

#[test]
fn component_arguments_flow_from_sibling_slots() {
    let link = Node::func(|args| {
        let (href, label) = match args {
            [Node::Text(href), Node::Text(label)] => (href.clone(), label.clone()),
            _ => return Node::Empty,
        };
        Node::elem("a", Attrs::new().set("href", href), [Node::Text(label)])
    });
    let tree = Node::seq([link, Node::from("/docs"), Node::from("Docs")]);
    assert_eq!(
        serialize_tree(&tree, false).unwrap(),
        r#"<a href="/docs">Docs</a>"#
    );
}

#[test]
fn component_returning_collection_expands_as_siblings() {
    let items = Node::func(|_| {
        Node::list((1..=3).map(|i| Node::seq([Node::from("li"), Node::from(i)])))
    });
    let tree = Node::seq([Node::from("ul"), Node::seq([items])]);
    insta::assert_snapshot!(
        serialize_tree(&tree, false).unwrap(),
        @"<ul><li>1</li><li>2</li><li>3</li></ul>"
    );
}

#[test]
fn style_map_flattens_in_insertion_order() {
    let tree = Node::from(json!(["div", {"style": {"a": "red", "b": "blue"}}]));
    assert_eq!(
        serialize_tree(&tree, false).unwrap(),
        r#"<div style="a:red;b:blue;"></div>"#
    );
}

#[test]
fn malformed_tags_fail_with_invalid_tag() {
    for bad in ["div #x", "div##x", "di v"] {
        let err = serialize_tree(&Node::seq([Node::from(bad)]), false).unwrap_err();
        assert!(matches!(err, SprigError::InvalidTag { .. }), "{bad}");
    }
}

#[test]
fn svg_shape_primitives_self_close() {
    let tree = Node::seq([
        Node::from("svg"),
        Attrs::new().set("xmlns", SVG_NS).into(),
        Node::seq([
            Node::from("circle"),
            Attrs::new().set("cx", 10).set("cy", 10).set("r", 5).into(),
        ]),
        Node::seq([Node::from("path"), Attrs::new().set("d", "M0 0").into()]),
    ]);
    assert_eq!(
        serialize_tree(&tree, false).unwrap(),
        r#"<svg xmlns="http://www.w3.org/2000/svg"><circle cx="10" cy="10" r="5"/><path d="M0 0"/></svg>"#
    );
}

#[test]
fn escape_handles_all_reserved_characters() {
    assert_eq!(escape("&<>\"'"), "&amp;&lt;&gt;&quot;&apos;");
}

#[test]
fn page_snapshot() {
    let nav = Node::func(|args| {
        Node::seq([
            Node::from("nav"),
            Node::list(
                args.iter()
                    .map(|label| Node::seq([Node::from("a.item"), label.clone()]))
                    .collect::<Vec<_>>(),
            ),
        ])
    });
    let page = Node::seq([
        Node::from("body#app"),
        Node::seq([nav, Node::from("Home"), Node::from("About")]),
        Node::seq([
            Node::from("main"),
            Node::from(json!(["p", {"style": {"margin": "0"}}, "Hello <world>"])),
            Node::Empty,
            Node::seq([Node::from("hr")]),
        ]),
    ]);
    insta::assert_snapshot!(
        serialize_tree(&page, true).unwrap(),
        @r#"<body id="app"><nav><a class="item">Home</a><a class="item">About</a></nav><main><p style="margin:0;">Hello &lt;world&gt;</p><hr/></main></body>"#
    );
}
