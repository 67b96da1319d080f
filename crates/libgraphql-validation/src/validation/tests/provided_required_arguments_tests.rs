use super::helpers::errors_with;
use super::helpers::messages;
use super::helpers::parse;
use super::helpers::test_schema;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::loc::SourceLocation;
use crate::validation::rules::provided_required_arguments;
use crate::validation::rules::values_of_correct_type;
use crate::validation::validate_with;
use crate::validation::ErrorCategory;
use crate::validation::RuleFactory;

static RULE: [RuleFactory; 1] = [provided_required_arguments::factory];

#[test]
fn a_missing_required_field_argument_is_reported_once() {
    let schema = test_schema();
    let errors = errors_with(&schema, "{ article { id } }", &RULE);
    assert_eq!(
        messages(&errors),
        vec![
            "Argument \"Query.article(id:)\" of type \"ID!\" is required, \
             but it was not provided.",
        ],
    );
    assert_eq!(errors[0].category(), ErrorCategory::Type);
}

#[test]
fn provided_and_defaulted_arguments_satisfy_the_rule() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "{ article(id: \"a1\") { id } hello }",
        &RULE,
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn an_explicit_null_counts_as_provided_for_this_rule() {
    let schema = test_schema();
    let rules: [RuleFactory; 2] = [
        provided_required_arguments::factory,
        values_of_correct_type::factory,
    ];
    let errors = errors_with(
        &schema,
        "{ article(id: null) { id } }",
        &rules,
    );
    // The null is a type-compatibility concern, never a required-argument
    // one.
    assert_eq!(
        messages(&errors),
        vec!["Expected value of type \"ID!\", found null."],
    );
}

#[test]
fn missing_required_directive_arguments_are_reported() {
    let schema = test_schema();
    let errors = errors_with(&schema, "{ hello @auth }", &RULE);
    assert_eq!(
        messages(&errors),
        vec![
            "Argument \"@auth(role:)\" of type \"String!\" is required, \
             but it was not provided.",
        ],
    );

    let satisfied = errors_with(
        &schema,
        "{ hello @auth(role: \"admin\") }",
        &RULE,
    );
    assert_eq!(satisfied, vec![]);
}

#[test]
fn built_in_skip_and_include_require_their_condition() {
    let schema = test_schema();
    let errors = errors_with(&schema, "{ hello @skip }", &RULE);
    assert_eq!(
        messages(&errors),
        vec![
            "Argument \"@skip(if:)\" of type \"Boolean!\" is required, \
             but it was not provided.",
        ],
    );
}

#[test]
fn deeper_errors_surface_before_shallower_ones() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "{ article { author { articles @skip } } }",
        &RULE,
    );
    // The directive on the innermost field reports before the missing
    // argument of the outermost field: the rule validates on leave.
    assert_eq!(errors.len(), 2);
    assert!(errors[0].message().contains("@skip(if:)"));
    assert!(errors[1].message().contains("Query.article(id:)"));
}

fn name_node(value: &str) -> Node {
    Node::new(NodeKind::Name, SourceLocation::default()).with_value(value)
}

// Fragment arguments cannot be produced by the upstream parser; build the
// tree by hand to exercise explicit fragment signatures.
fn fragment_with_required_argument_document(provide_argument: bool) -> Node {
    let loc = SourceLocation::new(1, 1);

    let variable_definition =
        Node::new(NodeKind::VariableDefinition, loc)
            .with_child(
                "variable",
                Node::new(NodeKind::Variable, loc)
                    .with_child("name", name_node("id")),
            )
            .with_child(
                "type",
                Node::new(NodeKind::NonNullType, loc).with_child(
                    "type",
                    Node::new(NodeKind::NamedType, loc)
                        .with_child("name", name_node("ID")),
                ),
            );

    let fragment = Node::new(NodeKind::FragmentDefinition, loc)
        .with_child("name", name_node("ArticleBits"))
        .with_children("variableDefinitions", vec![variable_definition])
        .with_child(
            "typeCondition",
            Node::new(NodeKind::NamedType, loc)
                .with_child("name", name_node("Query")),
        )
        .with_child(
            "selectionSet",
            Node::new(NodeKind::SelectionSet, loc).with_children(
                "selections",
                vec![Node::new(NodeKind::Field, loc)
                    .with_child("name", name_node("hello"))],
            ),
        );

    let mut spread = Node::new(NodeKind::FragmentSpread, loc)
        .with_child("name", name_node("ArticleBits"));
    if provide_argument {
        spread = spread.with_children(
            "arguments",
            vec![Node::new(NodeKind::Argument, loc)
                .with_child("name", name_node("id"))
                .with_child(
                    "value",
                    Node::new(NodeKind::StringValue, loc)
                        .with_value("a1"),
                )],
        );
    }

    let operation = Node::new(NodeKind::OperationDefinition, loc)
        .with_value("query")
        .with_child(
            "selectionSet",
            Node::new(NodeKind::SelectionSet, loc)
                .with_children("selections", vec![spread]),
        );

    Node::new(NodeKind::Document, loc)
        .with_children("definitions", vec![operation, fragment])
}

#[test]
fn fragment_spreads_with_explicit_signatures_require_their_arguments() {
    let schema = test_schema();

    let missing = fragment_with_required_argument_document(false);
    let errors = validate_with(&schema, &missing, &RULE, None);
    assert_eq!(
        messages(&errors),
        vec![
            "Fragment \"ArticleBits\" argument \"id\" of type \"ID!\" is \
             required, but it was not provided.",
        ],
    );

    let provided = fragment_with_required_argument_document(true);
    assert_eq!(validate_with(&schema, &provided, &RULE, None), vec![]);
}

#[test]
fn spreads_of_signatureless_fragments_are_untouched() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        r#"
        query Q($id: ID!) { ...Lookup }
        fragment Lookup on Query { article(id: $id) { id } }
        "#,
        &RULE,
    );
    assert_eq!(errors, vec![]);
}
