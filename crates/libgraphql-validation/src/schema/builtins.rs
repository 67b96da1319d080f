use crate::loc;
use crate::schema::DirectiveDefinition;
use crate::schema::DirectiveLocation;
use crate::schema::FieldDefinition;
use crate::schema::Parameter;
use crate::schema::TypeAnnotation;
use crate::schema::Value;
use indexmap::IndexMap;

fn builtin_parameter(
    name: &str,
    type_annotation: TypeAnnotation,
    default_value: Option<Value>,
) -> (String, Parameter) {
    (
        name.to_string(),
        Parameter {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            default_value,
            name: name.to_string(),
            type_annotation,
        },
    )
}

fn builtin_directive(
    name: &str,
    parameters: Vec<(String, Parameter)>,
    locations: Vec<DirectiveLocation>,
) -> (String, DirectiveDefinition) {
    (
        name.to_string(),
        DirectiveDefinition {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            locations,
            name: name.to_string(),
            parameters: parameters.into_iter().collect(),
            repeatable: false,
        },
    )
}

lazy_static::lazy_static! {
    /// The directives every registry carries implicitly:
    /// `@skip`, `@include`, `@deprecated`, `@specifiedBy`,
    /// `@defer`, and `@stream`.
    pub(crate) static ref BUILTIN_DIRECTIVES:
        IndexMap<String, DirectiveDefinition> =
    {
        IndexMap::from_iter([
            builtin_directive(
                "skip",
                vec![builtin_parameter(
                    "if",
                    TypeAnnotation::named("Boolean", false),
                    None,
                )],
                vec![
                    DirectiveLocation::Field,
                    DirectiveLocation::FragmentSpread,
                    DirectiveLocation::InlineFragment,
                ],
            ),
            builtin_directive(
                "include",
                vec![builtin_parameter(
                    "if",
                    TypeAnnotation::named("Boolean", false),
                    None,
                )],
                vec![
                    DirectiveLocation::Field,
                    DirectiveLocation::FragmentSpread,
                    DirectiveLocation::InlineFragment,
                ],
            ),
            builtin_directive(
                "deprecated",
                vec![builtin_parameter(
                    "reason",
                    TypeAnnotation::named("String", true),
                    Some(Value::String("No longer supported".to_string())),
                )],
                vec![
                    DirectiveLocation::FieldDefinition,
                    DirectiveLocation::ArgumentDefinition,
                    DirectiveLocation::InputFieldDefinition,
                    DirectiveLocation::EnumValue,
                ],
            ),
            builtin_directive(
                "specifiedBy",
                vec![builtin_parameter(
                    "url",
                    TypeAnnotation::named("String", false),
                    None,
                )],
                vec![DirectiveLocation::Scalar],
            ),
            builtin_directive(
                "defer",
                vec![
                    builtin_parameter(
                        "if",
                        TypeAnnotation::named("Boolean", false),
                        Some(Value::Bool(true)),
                    ),
                    builtin_parameter(
                        "label",
                        TypeAnnotation::named("String", true),
                        None,
                    ),
                ],
                vec![
                    DirectiveLocation::FragmentSpread,
                    DirectiveLocation::InlineFragment,
                ],
            ),
            builtin_directive(
                "stream",
                vec![
                    builtin_parameter(
                        "if",
                        TypeAnnotation::named("Boolean", false),
                        Some(Value::Bool(true)),
                    ),
                    builtin_parameter(
                        "label",
                        TypeAnnotation::named("String", true),
                        None,
                    ),
                    builtin_parameter(
                        "initialCount",
                        TypeAnnotation::named("Int", true),
                        Some(Value::Int(0)),
                    ),
                ],
                vec![DirectiveLocation::Field],
            ),
        ])
    };

    /// `__typename: String!`, selectable on any composite type.
    pub(crate) static ref TYPENAME_META_FIELD: FieldDefinition =
        FieldDefinition {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            name: "__typename".to_string(),
            parameters: IndexMap::new(),
            type_annotation: TypeAnnotation::named("String", false),
        };

    /// `__schema: __Schema!`, selectable on the query root only.
    pub(crate) static ref SCHEMA_META_FIELD: FieldDefinition =
        FieldDefinition {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            name: "__schema".to_string(),
            parameters: IndexMap::new(),
            type_annotation: TypeAnnotation::named("__Schema", false),
        };

    /// `__type(name: String!): __Type`, selectable on the query root
    /// only.
    pub(crate) static ref TYPE_META_FIELD: FieldDefinition =
        FieldDefinition {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            name: "__type".to_string(),
            parameters: IndexMap::from_iter([builtin_parameter(
                "name",
                TypeAnnotation::named("String", false),
                None,
            )]),
            type_annotation: TypeAnnotation::named("__Type", true),
        };
}
