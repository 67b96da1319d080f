use crate::ast::parse_executable;
use crate::ast::parse_schema;
use crate::ast::NodeKind;

#[test]
fn shorthand_query_lowers_to_an_operation_definition() {
    let doc = parse_executable("{ hero }").unwrap();

    assert_eq!(doc.kind(), NodeKind::Document);
    let definitions = doc.child_list("definitions");
    assert_eq!(definitions.len(), 1);

    let operation = &definitions[0];
    assert_eq!(operation.kind(), NodeKind::OperationDefinition);
    assert_eq!(operation.value(), Some("query"));
    assert!(operation.child("name").is_none());

    let selections = operation
        .child("selectionSet")
        .expect("shorthand query has a selection set")
        .child_list("selections");
    assert_eq!(selections.len(), 1);
    assert_eq!(selections[0].name_value(), Some("hero"));
}

#[test]
fn leaf_fields_carry_no_selection_set_edge() {
    let doc = parse_executable("{ hero { name } }").unwrap();
    let hero = &doc.child_list("definitions")[0]
        .child("selectionSet")
        .unwrap()
        .child_list("selections")[0];
    assert!(hero.child("selectionSet").is_some());

    let name = &hero.child("selectionSet").unwrap().child_list("selections")
        [0];
    assert!(name.child("selectionSet").is_none());
    assert!(name.child_list("arguments").is_empty());
}

#[test]
fn arguments_and_values_lower_with_positions_inherited() {
    let doc =
        parse_executable("{ search(filter: { term: \"x\", limit: 3 }) }")
            .unwrap();
    let field = &doc.child_list("definitions")[0]
        .child("selectionSet")
        .unwrap()
        .child_list("selections")[0];

    let arguments = field.child_list("arguments");
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].name_value(), Some("filter"));

    let object_value = arguments[0].child("value").unwrap();
    assert_eq!(object_value.kind(), NodeKind::ObjectValue);
    let object_fields = object_value.child_list("fields");
    assert_eq!(object_fields.len(), 2);
    assert_eq!(object_fields[0].kind(), NodeKind::ObjectField);

    assert!(field.location().line >= 1);
}

#[test]
fn variables_and_defaults_lower_into_variable_definitions() {
    let doc = parse_executable(
        "query Q($id: ID!, $limit: Int = 10) { hero }",
    )
    .unwrap();
    let operation = &doc.child_list("definitions")[0];
    assert_eq!(operation.name_value(), Some("Q"));

    let variable_defs = operation.child_list("variableDefinitions");
    assert_eq!(variable_defs.len(), 2);

    let id_def = &variable_defs[0];
    assert_eq!(
        id_def.child("variable").unwrap().name_value(),
        Some("id"),
    );
    assert_eq!(
        id_def.child("type").unwrap().kind(),
        NodeKind::NonNullType,
    );
    assert!(id_def.child("defaultValue").is_none());

    let limit_def = &variable_defs[1];
    assert_eq!(
        limit_def.child("defaultValue").unwrap().kind(),
        NodeKind::IntValue,
    );
    assert_eq!(
        limit_def.child("defaultValue").unwrap().value(),
        Some("10"),
    );
}

#[test]
fn schema_documents_lower_type_and_directive_definitions() {
    let doc = parse_schema(
        r#"
        "A thing."
        type Article {
            title: String!
        }

        directive @auth(role: String!) on FIELD_DEFINITION | OBJECT
        "#,
    )
    .unwrap();

    let definitions = doc.child_list("definitions");
    assert_eq!(definitions.len(), 2);

    let article = &definitions[0];
    assert_eq!(article.kind(), NodeKind::ObjectTypeDefinition);
    assert_eq!(article.name_value(), Some("Article"));
    assert_eq!(
        article.child("description").unwrap().value(),
        Some("A thing."),
    );
    let fields = article.child_list("fields");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].kind(), NodeKind::FieldDefinition);
    assert_eq!(
        fields[0].child("type").unwrap().kind(),
        NodeKind::NonNullType,
    );

    let auth = &definitions[1];
    assert_eq!(auth.kind(), NodeKind::DirectiveDefinition);
    let locations: Vec<_> = auth
        .child_list("locations")
        .iter()
        .filter_map(|location| location.value())
        .collect();
    assert_eq!(locations, vec!["FIELD_DEFINITION", "OBJECT"]);
}

#[test]
fn parse_errors_surface_from_the_upstream_parser() {
    assert!(parse_executable("{ unterminated").is_err());
    assert!(parse_schema("type {").is_err());
}
