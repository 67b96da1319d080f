use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::OperationKind;
use crate::loc::SourceLocation;

fn name_node(value: &str) -> Node {
    Node::new(NodeKind::Name, SourceLocation::default()).with_value(value)
}

#[test]
fn child_lookup_by_edge_name() {
    let field = Node::new(NodeKind::Field, SourceLocation::default())
        .with_child("name", name_node("hero"));

    assert_eq!(field.name_value(), Some("hero"));
    assert!(field.child("alias").is_none());
    assert!(field.child("selectionSet").is_none());
}

#[test]
fn absent_list_edges_read_as_empty() {
    let field = Node::new(NodeKind::Field, SourceLocation::default())
        .with_child("name", name_node("hero"));

    assert!(field.child_list("arguments").is_empty());
    assert!(field.child_list("directives").is_empty());
}

#[test]
fn empty_list_edges_are_not_recorded() {
    let field = Node::new(NodeKind::Field, SourceLocation::default())
        .with_child("name", name_node("hero"))
        .with_children("arguments", vec![]);

    assert!(field.edge("arguments").is_none());
}

#[test]
fn operation_kind_comes_from_the_scalar_payload() {
    let operation =
        Node::new(NodeKind::OperationDefinition, SourceLocation::default())
            .with_value("subscription");
    assert_eq!(
        operation.operation_kind(),
        Some(OperationKind::Subscription),
    );

    let field = Node::new(NodeKind::Field, SourceLocation::default());
    assert_eq!(field.operation_kind(), None);
}

#[test]
fn grammar_table_orders_field_children() {
    assert_eq!(
        NodeKind::Field.child_keys(),
        &["alias", "name", "arguments", "directives", "selectionSet"],
    );
    assert_eq!(NodeKind::Name.child_keys(), &[] as &[&str]);
    assert_eq!(
        NodeKind::FragmentSpread.child_keys(),
        &["name", "arguments", "directives"],
    );
}
