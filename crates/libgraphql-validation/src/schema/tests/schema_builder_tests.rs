use crate::ast::OperationKind;
use crate::schema::DirectiveLocation;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::TypeDefinition;

#[test]
fn builds_types_directives_and_default_roots() {
    let schema = SchemaBuilder::from_str(
        r#"
        type Query {
            article(id: ID!): Article
        }

        type Article {
            id: ID!
            title: String!
        }

        enum Status {
            DRAFT
            PUBLISHED
        }

        directive @auth(role: String!) on FIELD_DEFINITION
        "#,
    )
    .unwrap()
    .build()
    .unwrap();

    assert!(matches!(
        schema.type_def("Article"),
        Some(TypeDefinition::Object(_)),
    ));
    assert_eq!(schema.query_type().unwrap().name(), "Query");
    assert!(schema.mutation_type().is_none());

    let status = schema.type_def("Status").unwrap().as_enum().unwrap();
    assert!(status.value("DRAFT").is_some());
    assert!(status.value("RETIRED").is_none());

    let auth = schema.directive("auth").unwrap();
    assert_eq!(auth.locations(), &[DirectiveLocation::FieldDefinition]);
    assert!(auth.parameter("role").unwrap().is_required());
}

#[test]
fn built_in_scalars_and_directives_are_preloaded() {
    let schema = SchemaBuilder::from_str("type Query { ok: Boolean }")
        .unwrap()
        .build()
        .unwrap();

    for scalar in ["Int", "Float", "String", "Boolean", "ID"] {
        assert!(schema.type_def(scalar).is_some(), "missing {scalar}");
    }
    for directive in
        ["skip", "include", "deprecated", "specifiedBy", "defer", "stream"]
    {
        assert!(
            schema.directive(directive).is_some(),
            "missing @{directive}",
        );
    }
    assert!(schema.directive("skip").unwrap().parameter("if").unwrap()
        .is_required());
}

#[test]
fn explicit_schema_definition_overrides_default_root_names() {
    let schema = SchemaBuilder::from_str(
        r#"
        schema {
            query: Root
        }

        type Root {
            ok: Boolean
        }

        type Query {
            ignored: Boolean
        }
        "#,
    )
    .unwrap()
    .build()
    .unwrap();

    assert_eq!(schema.query_type().unwrap().name(), "Root");
    assert_eq!(
        schema
            .root_operation_type(OperationKind::Query)
            .unwrap()
            .name(),
        "Root",
    );
    assert!(schema.root_operation_type(OperationKind::Mutation).is_none());
}

#[test]
fn a_schema_without_roots_is_permitted() {
    let schema = SchemaBuilder::from_str("type Standalone { ok: Boolean }")
        .unwrap()
        .build()
        .unwrap();
    assert!(schema.query_type().is_none());
    assert!(schema.subscription_type().is_none());
}

#[test]
fn duplicate_type_definitions_fail_the_sdl_precondition() {
    let result = SchemaBuilder::from_str(
        "type Query { a: String } type Query { b: String }",
    );
    match result {
        Err(err) => match *err {
            SchemaBuildError::InvalidSdl(invalid) => {
                assert_eq!(invalid.errors.len(), 1);
                assert_eq!(
                    invalid.errors[0].message(),
                    "There can be only one type named \"Query\".",
                );
            },
            other => panic!("unexpected error: {other:?}"),
        },
        Ok(_) => panic!("expected duplicate type definitions to fail"),
    }
}

#[test]
fn unparsable_sdl_reports_a_parse_error() {
    let Err(err) = SchemaBuilder::from_str("type {{{{") else {
        panic!("expected a parse error");
    };
    assert!(matches!(*err, SchemaBuildError::ParseError(_)));
}
