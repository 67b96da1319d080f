//! Conversion from graphql-parser ASTs into the unified [`Node`] tree.
//!
//! The upstream parser produces two separate, strongly-typed ASTs (one for
//! executable documents, one for schema documents). Validation wants a
//! single kind-tagged tree it can walk generically, so everything is
//! lowered into [`Node`]s here. Lexing and parsing themselves stay
//! upstream.

use crate::ast::Node;
use crate::ast::NodeKind;
use crate::loc::SourceLocation;
use thiserror::Error;

type ExecutableDocument = graphql_parser::query::Document<'static, String>;
type ExecutableDefinition = graphql_parser::query::Definition<'static, String>;
type OperationDefinition =
    graphql_parser::query::OperationDefinition<'static, String>;
type QueryDirective = graphql_parser::query::Directive<'static, String>;
type QuerySelectionSet = graphql_parser::query::SelectionSet<'static, String>;
type QuerySelection = graphql_parser::query::Selection<'static, String>;
type QueryType = graphql_parser::query::Type<'static, String>;
type QueryValue = graphql_parser::query::Value<'static, String>;
type QueryVariableDefinition =
    graphql_parser::query::VariableDefinition<'static, String>;

type SchemaDocument = graphql_parser::schema::Document<'static, String>;
type SchemaDefinition = graphql_parser::schema::Definition<'static, String>;
type SchemaTypeDefinition =
    graphql_parser::schema::TypeDefinition<'static, String>;
type SchemaTypeExtension =
    graphql_parser::schema::TypeExtension<'static, String>;
type SchemaField = graphql_parser::schema::Field<'static, String>;
type SchemaInputValue = graphql_parser::schema::InputValue<'static, String>;

#[derive(Debug, Error)]
pub enum ParseDocumentError {
    #[error("Failed to parse executable document: {0}")]
    ExecutableParseError(#[from] graphql_parser::query::ParseError),

    #[error("Failed to parse schema document: {0}")]
    SchemaParseError(#[from] graphql_parser::schema::ParseError),
}

/// Parse an executable document (operations and fragments) into a
/// [`Node`] tree.
pub fn parse_executable(source: &str) -> Result<Node, ParseDocumentError> {
    let doc = graphql_parser::parse_query::<String>(source)?.into_static();
    Ok(executable_document_to_node(&doc))
}

/// Parse a schema-definition-language document into a [`Node`] tree.
pub fn parse_schema(source: &str) -> Result<Node, ParseDocumentError> {
    let doc = graphql_parser::parse_schema::<String>(source)?.into_static();
    Ok(schema_document_to_node(&doc))
}

pub(crate) fn executable_document_to_node(doc: &ExecutableDocument) -> Node {
    let definitions = doc
        .definitions
        .iter()
        .map(executable_definition_to_node)
        .collect();
    Node::new(NodeKind::Document, SourceLocation::default())
        .with_children("definitions", definitions)
}

pub(crate) fn schema_document_to_node(doc: &SchemaDocument) -> Node {
    let definitions = doc
        .definitions
        .iter()
        .map(schema_definition_to_node)
        .collect();
    Node::new(NodeKind::Document, SourceLocation::default())
        .with_children("definitions", definitions)
}

fn name_node(name: &str, pos: SourceLocation) -> Node {
    Node::new(NodeKind::Name, pos).with_value(name)
}

fn executable_definition_to_node(def: &ExecutableDefinition) -> Node {
    use graphql_parser::query::Definition;
    match def {
        Definition::Operation(op_def) => operation_to_node(op_def),
        Definition::Fragment(frag_def) => {
            let pos: SourceLocation = frag_def.position.into();
            let graphql_parser::query::TypeCondition::On(on_type) =
                &frag_def.type_condition;
            Node::new(NodeKind::FragmentDefinition, pos)
                .with_child("name", name_node(&frag_def.name, pos))
                .with_child(
                    "typeCondition",
                    named_type_node(on_type, pos),
                )
                .with_children(
                    "directives",
                    directives_to_nodes(&frag_def.directives),
                )
                .with_child(
                    "selectionSet",
                    selection_set_to_node(&frag_def.selection_set),
                )
        },
    }
}

fn operation_to_node(op_def: &OperationDefinition) -> Node {
    use graphql_parser::query::OperationDefinition as Op;
    match op_def {
        // The query-shorthand form (a bare selection set).
        Op::SelectionSet(set) => {
            let pos: SourceLocation = set.span.0.into();
            Node::new(NodeKind::OperationDefinition, pos)
                .with_value("query")
                .with_child("selectionSet", selection_set_to_node(set))
        },
        Op::Query(op) => named_operation_to_node(
            "query",
            op.position.into(),
            op.name.as_deref(),
            &op.variable_definitions,
            &op.directives,
            &op.selection_set,
        ),
        Op::Mutation(op) => named_operation_to_node(
            "mutation",
            op.position.into(),
            op.name.as_deref(),
            &op.variable_definitions,
            &op.directives,
            &op.selection_set,
        ),
        Op::Subscription(op) => named_operation_to_node(
            "subscription",
            op.position.into(),
            op.name.as_deref(),
            &op.variable_definitions,
            &op.directives,
            &op.selection_set,
        ),
    }
}

fn named_operation_to_node(
    operation: &'static str,
    pos: SourceLocation,
    name: Option<&str>,
    variable_definitions: &[QueryVariableDefinition],
    directives: &[QueryDirective],
    selection_set: &QuerySelectionSet,
) -> Node {
    let mut node = Node::new(NodeKind::OperationDefinition, pos)
        .with_value(operation);
    if let Some(name) = name {
        node = node.with_child("name", name_node(name, pos));
    }
    node.with_children(
        "variableDefinitions",
        variable_definitions
            .iter()
            .map(variable_definition_to_node)
            .collect(),
    )
    .with_children("directives", directives_to_nodes(directives))
    .with_child("selectionSet", selection_set_to_node(selection_set))
}

fn variable_definition_to_node(var_def: &QueryVariableDefinition) -> Node {
    let pos: SourceLocation = var_def.position.into();
    let variable = Node::new(NodeKind::Variable, pos)
        .with_child("name", name_node(&var_def.name, pos));
    let mut node = Node::new(NodeKind::VariableDefinition, pos)
        .with_child("variable", variable)
        .with_child("type", type_to_node(&var_def.var_type, pos));
    if let Some(default_value) = &var_def.default_value {
        node = node.with_child(
            "defaultValue",
            value_to_node(default_value, pos),
        );
    }
    node
}

fn selection_set_to_node(set: &QuerySelectionSet) -> Node {
    let pos: SourceLocation = set.span.0.into();
    let selections = set.items.iter().map(selection_to_node).collect();
    Node::new(NodeKind::SelectionSet, pos)
        .with_children("selections", selections)
}

fn selection_to_node(selection: &QuerySelection) -> Node {
    use graphql_parser::query::Selection;
    match selection {
        Selection::Field(field) => {
            let pos: SourceLocation = field.position.into();
            let mut node = Node::new(NodeKind::Field, pos);
            if let Some(alias) = &field.alias {
                node = node.with_child("alias", name_node(alias, pos));
            }
            node = node
                .with_child("name", name_node(&field.name, pos))
                .with_children(
                    "arguments",
                    arguments_to_nodes(&field.arguments, pos),
                )
                .with_children(
                    "directives",
                    directives_to_nodes(&field.directives),
                );
            // The upstream parser attaches an empty selection set to leaf
            // fields; an empty set is no selection at all.
            if !field.selection_set.items.is_empty() {
                node = node.with_child(
                    "selectionSet",
                    selection_set_to_node(&field.selection_set),
                );
            }
            node
        },
        Selection::FragmentSpread(spread) => {
            let pos: SourceLocation = spread.position.into();
            Node::new(NodeKind::FragmentSpread, pos)
                .with_child("name", name_node(&spread.fragment_name, pos))
                .with_children(
                    "directives",
                    directives_to_nodes(&spread.directives),
                )
        },
        Selection::InlineFragment(inline) => {
            let pos: SourceLocation = inline.position.into();
            let mut node = Node::new(NodeKind::InlineFragment, pos);
            if let Some(graphql_parser::query::TypeCondition::On(on_type)) =
                &inline.type_condition
            {
                node = node.with_child(
                    "typeCondition",
                    named_type_node(on_type, pos),
                );
            }
            node.with_children(
                "directives",
                directives_to_nodes(&inline.directives),
            )
            .with_child(
                "selectionSet",
                selection_set_to_node(&inline.selection_set),
            )
        },
    }
}

fn directives_to_nodes(directives: &[QueryDirective]) -> Vec<Node> {
    directives
        .iter()
        .map(|directive| {
            let pos: SourceLocation = directive.position.into();
            Node::new(NodeKind::Directive, pos)
                .with_child("name", name_node(&directive.name, pos))
                .with_children(
                    "arguments",
                    arguments_to_nodes(&directive.arguments, pos),
                )
        })
        .collect()
}

fn arguments_to_nodes(
    arguments: &[(String, QueryValue)],
    pos: SourceLocation,
) -> Vec<Node> {
    arguments
        .iter()
        .map(|(name, value)| {
            Node::new(NodeKind::Argument, pos)
                .with_child("name", name_node(name, pos))
                .with_child("value", value_to_node(value, pos))
        })
        .collect()
}

// Values carry no position of their own upstream; they inherit the position
// of the nearest enclosing construct.
fn value_to_node(value: &QueryValue, pos: SourceLocation) -> Node {
    use graphql_parser::query::Value;
    match value {
        Value::Variable(name) => Node::new(NodeKind::Variable, pos)
            .with_child("name", name_node(name, pos)),
        Value::Int(number) => Node::new(NodeKind::IntValue, pos)
            .with_value(number.as_i64().unwrap().to_string()),
        Value::Float(float) => Node::new(NodeKind::FloatValue, pos)
            .with_value(float.to_string()),
        Value::String(string) => Node::new(NodeKind::StringValue, pos)
            .with_value(string.clone()),
        Value::Boolean(boolean) => Node::new(NodeKind::BooleanValue, pos)
            .with_value(if *boolean { "true" } else { "false" }),
        Value::Null => Node::new(NodeKind::NullValue, pos),
        Value::Enum(name) => Node::new(NodeKind::EnumValue, pos)
            .with_value(name.clone()),
        Value::List(values) => Node::new(NodeKind::ListValue, pos)
            .with_children(
                "values",
                values.iter().map(|v| value_to_node(v, pos)).collect(),
            ),
        Value::Object(fields) => Node::new(NodeKind::ObjectValue, pos)
            .with_children(
                "fields",
                fields
                    .iter()
                    .map(|(name, v)| {
                        Node::new(NodeKind::ObjectField, pos)
                            .with_child("name", name_node(name, pos))
                            .with_child("value", value_to_node(v, pos))
                    })
                    .collect(),
            ),
    }
}

fn named_type_node(name: &str, pos: SourceLocation) -> Node {
    Node::new(NodeKind::NamedType, pos)
        .with_child("name", name_node(name, pos))
}

fn type_to_node(ast_type: &QueryType, pos: SourceLocation) -> Node {
    use graphql_parser::query::Type;
    match ast_type {
        Type::NamedType(name) => named_type_node(name, pos),
        Type::ListType(inner) => Node::new(NodeKind::ListType, pos)
            .with_child("type", type_to_node(inner, pos)),
        Type::NonNullType(inner) => Node::new(NodeKind::NonNullType, pos)
            .with_child("type", type_to_node(inner, pos)),
    }
}

fn description_node(
    description: &Option<String>,
    pos: SourceLocation,
) -> Option<Node> {
    description.as_ref().map(|text| {
        Node::new(NodeKind::StringValue, pos).with_value(text.clone())
    })
}

fn schema_definition_to_node(def: &SchemaDefinition) -> Node {
    use graphql_parser::schema::Definition;
    match def {
        Definition::SchemaDefinition(schema_def) => {
            let pos: SourceLocation = schema_def.position.into();
            let mut operation_types = vec![];
            for (operation, root_type) in [
                ("query", &schema_def.query),
                ("mutation", &schema_def.mutation),
                ("subscription", &schema_def.subscription),
            ] {
                if let Some(type_name) = root_type {
                    operation_types.push(
                        Node::new(NodeKind::OperationTypeDefinition, pos)
                            .with_value(operation)
                            .with_child(
                                "type",
                                named_type_node(type_name, pos),
                            ),
                    );
                }
            }
            Node::new(NodeKind::SchemaDefinition, pos)
                .with_children(
                    "directives",
                    directives_to_nodes(&schema_def.directives),
                )
                .with_children("operationTypes", operation_types)
        },
        Definition::TypeDefinition(type_def) =>
            type_definition_to_node(type_def),
        Definition::TypeExtension(type_ext) =>
            type_extension_to_node(type_ext),
        Definition::DirectiveDefinition(directive_def) => {
            let pos: SourceLocation = directive_def.position.into();
            let mut node = Node::new(NodeKind::DirectiveDefinition, pos);
            if let Some(description) =
                description_node(&directive_def.description, pos)
            {
                node = node.with_child("description", description);
            }
            node.with_child("name", name_node(&directive_def.name, pos))
                .with_children(
                    "arguments",
                    directive_def
                        .arguments
                        .iter()
                        .map(input_value_to_node)
                        .collect(),
                )
                .with_children(
                    "locations",
                    directive_def
                        .locations
                        .iter()
                        .map(|location| name_node(location.as_str(), pos))
                        .collect(),
                )
        },
    }
}

fn type_definition_to_node(type_def: &SchemaTypeDefinition) -> Node {
    use graphql_parser::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Scalar(def) => {
            let pos: SourceLocation = def.position.into();
            let mut node = Node::new(NodeKind::ScalarTypeDefinition, pos);
            if let Some(description) = description_node(&def.description, pos)
            {
                node = node.with_child("description", description);
            }
            node.with_child("name", name_node(&def.name, pos))
                .with_children(
                    "directives",
                    directives_to_nodes(&def.directives),
                )
        },
        TypeDefinition::Object(def) => {
            let pos: SourceLocation = def.position.into();
            let mut node = Node::new(NodeKind::ObjectTypeDefinition, pos);
            if let Some(description) = description_node(&def.description, pos)
            {
                node = node.with_child("description", description);
            }
            node.with_child("name", name_node(&def.name, pos))
                .with_children(
                    "interfaces",
                    def.implements_interfaces
                        .iter()
                        .map(|iface| named_type_node(iface, pos))
                        .collect(),
                )
                .with_children(
                    "directives",
                    directives_to_nodes(&def.directives),
                )
                .with_children(
                    "fields",
                    def.fields.iter().map(field_definition_to_node).collect(),
                )
        },
        TypeDefinition::Interface(def) => {
            let pos: SourceLocation = def.position.into();
            let mut node = Node::new(NodeKind::InterfaceTypeDefinition, pos);
            if let Some(description) = description_node(&def.description, pos)
            {
                node = node.with_child("description", description);
            }
            node.with_child("name", name_node(&def.name, pos))
                .with_children(
                    "interfaces",
                    def.implements_interfaces
                        .iter()
                        .map(|iface| named_type_node(iface, pos))
                        .collect(),
                )
                .with_children(
                    "directives",
                    directives_to_nodes(&def.directives),
                )
                .with_children(
                    "fields",
                    def.fields.iter().map(field_definition_to_node).collect(),
                )
        },
        TypeDefinition::Union(def) => {
            let pos: SourceLocation = def.position.into();
            let mut node = Node::new(NodeKind::UnionTypeDefinition, pos);
            if let Some(description) = description_node(&def.description, pos)
            {
                node = node.with_child("description", description);
            }
            node.with_child("name", name_node(&def.name, pos))
                .with_children(
                    "directives",
                    directives_to_nodes(&def.directives),
                )
                .with_children(
                    "types",
                    def.types
                        .iter()
                        .map(|member| named_type_node(member, pos))
                        .collect(),
                )
        },
        TypeDefinition::Enum(def) => {
            let pos: SourceLocation = def.position.into();
            let mut node = Node::new(NodeKind::EnumTypeDefinition, pos);
            if let Some(description) = description_node(&def.description, pos)
            {
                node = node.with_child("description", description);
            }
            node.with_child("name", name_node(&def.name, pos))
                .with_children(
                    "directives",
                    directives_to_nodes(&def.directives),
                )
                .with_children(
                    "values",
                    def.values
                        .iter()
                        .map(|value| {
                            let value_pos: SourceLocation =
                                value.position.into();
                            let mut value_node = Node::new(
                                NodeKind::EnumValueDefinition,
                                value_pos,
                            );
                            if let Some(description) = description_node(
                                &value.description,
                                value_pos,
                            ) {
                                value_node = value_node
                                    .with_child("description", description);
                            }
                            value_node
                                .with_child(
                                    "name",
                                    name_node(&value.name, value_pos),
                                )
                                .with_children(
                                    "directives",
                                    directives_to_nodes(&value.directives),
                                )
                        })
                        .collect(),
                )
        },
        TypeDefinition::InputObject(def) => {
            let pos: SourceLocation = def.position.into();
            let mut node =
                Node::new(NodeKind::InputObjectTypeDefinition, pos);
            if let Some(description) = description_node(&def.description, pos)
            {
                node = node.with_child("description", description);
            }
            node.with_child("name", name_node(&def.name, pos))
                .with_children(
                    "directives",
                    directives_to_nodes(&def.directives),
                )
                .with_children(
                    "fields",
                    def.fields.iter().map(input_value_to_node).collect(),
                )
        },
    }
}

fn field_definition_to_node(field: &SchemaField) -> Node {
    let pos: SourceLocation = field.position.into();
    let mut node = Node::new(NodeKind::FieldDefinition, pos);
    if let Some(description) = description_node(&field.description, pos) {
        node = node.with_child("description", description);
    }
    node.with_child("name", name_node(&field.name, pos))
        .with_children(
            "arguments",
            field.arguments.iter().map(input_value_to_node).collect(),
        )
        .with_child("type", type_to_node(&field.field_type, pos))
        .with_children("directives", directives_to_nodes(&field.directives))
}

fn input_value_to_node(input_value: &SchemaInputValue) -> Node {
    let pos: SourceLocation = input_value.position.into();
    let mut node = Node::new(NodeKind::InputValueDefinition, pos);
    if let Some(description) = description_node(&input_value.description, pos)
    {
        node = node.with_child("description", description);
    }
    node = node
        .with_child("name", name_node(&input_value.name, pos))
        .with_child("type", type_to_node(&input_value.value_type, pos));
    if let Some(default_value) = &input_value.default_value {
        node = node.with_child(
            "defaultValue",
            value_to_node(default_value, pos),
        );
    }
    node.with_children(
        "directives",
        directives_to_nodes(&input_value.directives),
    )
}

fn type_extension_to_node(type_ext: &SchemaTypeExtension) -> Node {
    use graphql_parser::schema::TypeExtension;
    match type_ext {
        TypeExtension::Scalar(ext) => {
            let pos: SourceLocation = ext.position.into();
            Node::new(NodeKind::ScalarTypeExtension, pos)
                .with_child("name", name_node(&ext.name, pos))
                .with_children(
                    "directives",
                    directives_to_nodes(&ext.directives),
                )
        },
        TypeExtension::Object(ext) => {
            let pos: SourceLocation = ext.position.into();
            Node::new(NodeKind::ObjectTypeExtension, pos)
                .with_child("name", name_node(&ext.name, pos))
                .with_children(
                    "interfaces",
                    ext.implements_interfaces
                        .iter()
                        .map(|iface| named_type_node(iface, pos))
                        .collect(),
                )
                .with_children(
                    "directives",
                    directives_to_nodes(&ext.directives),
                )
                .with_children(
                    "fields",
                    ext.fields.iter().map(field_definition_to_node).collect(),
                )
        },
        TypeExtension::Interface(ext) => {
            let pos: SourceLocation = ext.position.into();
            Node::new(NodeKind::InterfaceTypeExtension, pos)
                .with_child("name", name_node(&ext.name, pos))
                .with_children(
                    "directives",
                    directives_to_nodes(&ext.directives),
                )
                .with_children(
                    "fields",
                    ext.fields.iter().map(field_definition_to_node).collect(),
                )
        },
        TypeExtension::Union(ext) => {
            let pos: SourceLocation = ext.position.into();
            Node::new(NodeKind::UnionTypeExtension, pos)
                .with_child("name", name_node(&ext.name, pos))
                .with_children(
                    "directives",
                    directives_to_nodes(&ext.directives),
                )
                .with_children(
                    "types",
                    ext.types
                        .iter()
                        .map(|member| named_type_node(member, pos))
                        .collect(),
                )
        },
        TypeExtension::Enum(ext) => {
            let pos: SourceLocation = ext.position.into();
            Node::new(NodeKind::EnumTypeExtension, pos)
                .with_child("name", name_node(&ext.name, pos))
                .with_children(
                    "directives",
                    directives_to_nodes(&ext.directives),
                )
        },
        TypeExtension::InputObject(ext) => {
            let pos: SourceLocation = ext.position.into();
            Node::new(NodeKind::InputObjectTypeExtension, pos)
                .with_child("name", name_node(&ext.name, pos))
                .with_children(
                    "directives",
                    directives_to_nodes(&ext.directives),
                )
                .with_children(
                    "fields",
                    ext.fields.iter().map(input_value_to_node).collect(),
                )
        },
    }
}
