/// The kind tag of an AST [`Node`](crate::ast::Node).
///
/// Kinds and their child-edge tables mirror the GraphQL grammar: every
/// document form (executable and type-system) is representable in one
/// unified tree, and a generic walker can descend any node by consulting
/// [`NodeKind::child_keys`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
}

impl NodeKind {
    /// The ordered child-edge names for this kind.
    ///
    /// This is the grammar table that drives traversal: a walker visits
    /// exactly these edges, in exactly this order. Edges absent on a given
    /// node are skipped.
    pub fn child_keys(&self) -> &'static [&'static str] {
        match self {
            NodeKind::Name
                | NodeKind::IntValue
                | NodeKind::FloatValue
                | NodeKind::StringValue
                | NodeKind::BooleanValue
                | NodeKind::NullValue
                | NodeKind::EnumValue => &[],

            NodeKind::Document => &["definitions"],
            NodeKind::OperationDefinition => &[
                "name",
                "variableDefinitions",
                "directives",
                "selectionSet",
            ],
            NodeKind::VariableDefinition => &[
                "variable",
                "type",
                "defaultValue",
                "directives",
            ],
            NodeKind::Variable => &["name"],
            NodeKind::SelectionSet => &["selections"],
            NodeKind::Field => &[
                "alias",
                "name",
                "arguments",
                "directives",
                "selectionSet",
            ],
            NodeKind::Argument => &["name", "value"],
            NodeKind::FragmentSpread => &["name", "arguments", "directives"],
            NodeKind::InlineFragment => &[
                "typeCondition",
                "directives",
                "selectionSet",
            ],
            NodeKind::FragmentDefinition => &[
                "name",
                "variableDefinitions",
                "typeCondition",
                "directives",
                "selectionSet",
            ],
            NodeKind::ListValue => &["values"],
            NodeKind::ObjectValue => &["fields"],
            NodeKind::ObjectField => &["name", "value"],
            NodeKind::Directive => &["name", "arguments"],
            NodeKind::NamedType => &["name"],
            NodeKind::ListType => &["type"],
            NodeKind::NonNullType => &["type"],
            NodeKind::SchemaDefinition => &[
                "description",
                "directives",
                "operationTypes",
            ],
            NodeKind::OperationTypeDefinition => &["type"],
            NodeKind::ScalarTypeDefinition => &[
                "description",
                "name",
                "directives",
            ],
            NodeKind::ObjectTypeDefinition => &[
                "description",
                "name",
                "interfaces",
                "directives",
                "fields",
            ],
            NodeKind::FieldDefinition => &[
                "description",
                "name",
                "arguments",
                "type",
                "directives",
            ],
            NodeKind::InputValueDefinition => &[
                "description",
                "name",
                "type",
                "defaultValue",
                "directives",
            ],
            NodeKind::InterfaceTypeDefinition => &[
                "description",
                "name",
                "interfaces",
                "directives",
                "fields",
            ],
            NodeKind::UnionTypeDefinition => &[
                "description",
                "name",
                "directives",
                "types",
            ],
            NodeKind::EnumTypeDefinition => &[
                "description",
                "name",
                "directives",
                "values",
            ],
            NodeKind::EnumValueDefinition => &[
                "description",
                "name",
                "directives",
            ],
            NodeKind::InputObjectTypeDefinition => &[
                "description",
                "name",
                "directives",
                "fields",
            ],
            NodeKind::DirectiveDefinition => &[
                "description",
                "name",
                "arguments",
                "locations",
            ],
            NodeKind::SchemaExtension => &["directives", "operationTypes"],
            NodeKind::ScalarTypeExtension => &["name", "directives"],
            NodeKind::ObjectTypeExtension => &[
                "name",
                "interfaces",
                "directives",
                "fields",
            ],
            NodeKind::InterfaceTypeExtension => &[
                "name",
                "interfaces",
                "directives",
                "fields",
            ],
            NodeKind::UnionTypeExtension => &["name", "directives", "types"],
            NodeKind::EnumTypeExtension => &["name", "directives", "values"],
            NodeKind::InputObjectTypeExtension => &[
                "name",
                "directives",
                "fields",
            ],
        }
    }

    /// Indicates whether this kind is one of the six type-definition kinds.
    pub fn is_type_definition(&self) -> bool {
        matches!(
            self,
            NodeKind::ScalarTypeDefinition
                | NodeKind::ObjectTypeDefinition
                | NodeKind::InterfaceTypeDefinition
                | NodeKind::UnionTypeDefinition
                | NodeKind::EnumTypeDefinition
                | NodeKind::InputObjectTypeDefinition
        )
    }
}
