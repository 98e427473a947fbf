use soy_outline_lib::{
    build_outline, shorten_text, type_and_default_suffix, NodeKind, OutlineBuilder, OutlineError,
    OutlineNode, OutlineOptions, ParseNode, ELLIPSIS,
};

const CARD_TREE: &str = r#"{
    "kind": "file",
    "name": "card.soy",
    "position": { "line": 1, "column": 1 },
    "children": [
        { "kind": "namespace", "name": "ui.card", "position": { "line": 1, "column": 1 }, "children": [
            { "kind": "other", "syntax": "template_list", "children": [
                { "kind": "templateBlock", "tagName": "template", "name": "greeting",
                  "position": { "line": 3, "column": 1 }, "children": [
                    { "kind": "param", "name": "name", "inlinedValue": "world",
                      "position": { "line": 4, "column": 3 } }
                ]},
                { "kind": "templateBlock", "tagName": "template", "name": "card", "children": [
                    { "kind": "atDeclaration", "atKind": "state", "children": [
                        { "kind": "letSingle", "identifier": "$hidden", "expr": "true" }
                    ]},
                    { "kind": "atDeclaration", "atKind": "inject", "identifier": "ij" },
                    { "kind": "msgBlock", "tagName": "msg",
                      "description": "Shown on the account card when the user has not confirmed an email address yet" },
                    { "kind": "letCompound", "identifier": "$body", "children": [
                        { "kind": "callStatement", "tagName": "delcall", "templateName": "ui.body" }
                    ]}
                ]}
            ]}
        ]}
    ]
}"#;

fn labels(nodes: &[OutlineNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.label.as_str()).collect()
}

#[test]
fn json_tree_should_produce_expected_outline() {
    let root = ParseNode::from_json(CARD_TREE).expect("parse tree json");
    let outline = build_outline(&root).expect("build outline");

    assert_eq!(outline.label, "card.soy");
    assert_eq!(labels(&outline.children), vec!["namespace"]);

    let templates = &outline.children[0].children;
    assert_eq!(labels(templates), vec!["template greeting", "template card"]);

    let greeting = &templates[0];
    assert_eq!(labels(&greeting.children), vec!["param name"]);
    assert_eq!(greeting.children[0].detail.as_deref(), Some(": world"));
    assert_eq!(
        greeting.children[0].source.position.map(|p| (p.line, p.column)),
        Some((4, 3))
    );

    let card = &templates[1];
    assert_eq!(
        labels(&card.children),
        vec!["let $hidden", "@inject ij", "msg", "let $body"]
    );
    assert_eq!(card.children[0].detail.as_deref(), Some(": true"));

    let msg_detail = card.children[2].detail.as_deref().expect("msg detail");
    assert!(msg_detail.ends_with(ELLIPSIS));
    assert!(msg_detail.chars().count() <= 51);
    assert_eq!(msg_detail, "Shown on the account card when the user has not\u{2026}");

    assert_eq!(labels(&card.children[3].children), vec!["delcall ui.body"]);
}

#[test]
fn every_source_ref_should_resolve_to_a_presentable_node() {
    fn check(root: &ParseNode, node: &OutlineNode) {
        let resolved = root.resolve(&node.source).expect("source ref resolves");
        assert!(!matches!(resolved.kind, NodeKind::Other { .. }));
        for child in &node.children {
            check(root, child);
        }
    }

    let root = ParseNode::from_json(CARD_TREE).expect("parse tree json");
    let outline = OutlineBuilder::default().build(&root).expect("build outline");

    check(&root, &outline);
}

#[test]
fn rebuilding_should_give_structurally_equal_outline() {
    let root = ParseNode::from_json(CARD_TREE).expect("parse tree json");
    let builder = OutlineBuilder::default();

    assert_eq!(builder.build(&root).ok(), builder.build(&root).ok());
}

#[test]
fn outline_should_round_trip_through_json() {
    let root = ParseNode::from_json(CARD_TREE).expect("parse tree json");
    let outline = build_outline(&root).expect("build outline");

    let json = serde_json::to_string(&outline).expect("serialize outline");
    let restored: OutlineNode = serde_json::from_str(&json).expect("deserialize outline");

    assert_eq!(restored, outline);
}

#[test]
fn public_helpers_should_follow_documented_rules() {
    assert_eq!(type_and_default_suffix(Some("int"), Some("3")), ": int = 3");
    assert_eq!(shorten_text("short"), "short");
    assert_eq!(
        shorten_text(&"q".repeat(75)),
        format!("{}{}", "q".repeat(50), ELLIPSIS)
    );
}

fn nested_tree_json(levels: usize) -> String {
    let mut raw = String::from(r#"{ "kind": "letSingle", "identifier": "$leaf", "expr": "1" }"#);
    for _ in 0..levels {
        raw = format!(r#"{{ "kind": "other", "syntax": "block", "children": [{}] }}"#, raw);
    }
    format!(r#"{{ "kind": "file", "name": "deep.soy", "children": [{}] }}"#, raw)
}

#[test]
fn deep_json_tree_within_depth_limit_should_build() {
    let root = ParseNode::from_json(&nested_tree_json(100)).expect("deep tree json");

    let outline = build_outline(&root).expect("build deep outline");

    assert_eq!(outline.label, "deep.soy");
    assert_eq!(labels(&outline.children), vec!["let $leaf"]);
    assert_eq!(outline.children[0].detail.as_deref(), Some(": 1"));
    assert_eq!(outline.children[0].source.path.len(), 101);
}

#[test]
fn deep_json_tree_beyond_depth_limit_should_report_limit() {
    let root = ParseNode::from_json(&nested_tree_json(100)).expect("deep tree json");
    let builder = OutlineBuilder::new(OutlineOptions {
        max_depth: 64,
        ..OutlineOptions::default()
    });

    let result = builder.build(&root);

    assert!(matches!(
        result,
        Err(OutlineError::DepthLimitExceeded { limit: 64 })
    ));
}
