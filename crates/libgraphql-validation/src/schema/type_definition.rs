use crate::loc;
use crate::schema::FieldDefinition;
use crate::schema::Parameter;
use indexmap::IndexMap;

type AstTypeDefinition =
    graphql_parser::schema::TypeDefinition<'static, String>;

/// A named type in the registry.
///
/// The five built-in scalars get their own variants; all other types carry
/// their definition data.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) fields: IndexMap<String, FieldDefinition>,
    pub(crate) name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) fields: IndexMap<String, FieldDefinition>,
    pub(crate) name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValueDefinition>,
}
impl EnumType {
    pub fn value(&self, name: &str) -> Option<&EnumValueDefinition> {
        self.values.get(name)
    }

    pub fn values(&self) -> &IndexMap<String, EnumValueDefinition>
    {
        &self.values
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
}
impl EnumValueDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) fields: IndexMap<String, Parameter>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn field(&self, name: &str) -> Option<&Parameter> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Parameter> {
        &self.fields
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Bool => "Boolean",
            TypeDefinition::Float => "Float",
            TypeDefinition::ID => "ID",
            TypeDefinition::Int => "Int",
            TypeDefinition::String => "String",
            TypeDefinition::Enum(t) => t.name.as_str(),
            TypeDefinition::InputObject(t) => t.name.as_str(),
            TypeDefinition::Interface(t) => t.name.as_str(),
            TypeDefinition::Object(t) => t.name.as_str(),
            TypeDefinition::Scalar(t) => t.name.as_str(),
            TypeDefinition::Union(t) => t.name.as_str(),
        }
    }

    pub fn def_location(&self) -> loc::SchemaDefLocation {
        match self {
            TypeDefinition::Bool
                | TypeDefinition::Float
                | TypeDefinition::ID
                | TypeDefinition::Int
                | TypeDefinition::String =>
                loc::SchemaDefLocation::GraphQLBuiltIn,
            TypeDefinition::Enum(t) => t.def_location.clone(),
            TypeDefinition::InputObject(t) => t.def_location.clone(),
            TypeDefinition::Interface(t) => t.def_location.clone(),
            TypeDefinition::Object(t) => t.def_location.clone(),
            TypeDefinition::Scalar(t) => t.def_location.clone(),
            TypeDefinition::Union(t) => t.def_location.clone(),
        }
    }

    /// Object, interface, and union types can be selected into.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            TypeDefinition::Interface(_)
                | TypeDefinition::Object(_)
                | TypeDefinition::Union(_)
        )
    }

    /// Scalars and enums terminate selection sets.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            TypeDefinition::Bool
                | TypeDefinition::Enum(_)
                | TypeDefinition::Float
                | TypeDefinition::ID
                | TypeDefinition::Int
                | TypeDefinition::Scalar(_)
                | TypeDefinition::String
        )
    }

    /// Scalars, enums, and input objects may appear in input positions.
    pub fn is_input_type(&self) -> bool {
        self.is_leaf() || matches!(self, TypeDefinition::InputObject(_))
    }

    /// Everything except input objects may appear in output positions.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, TypeDefinition::InputObject(_))
    }

    /// Look up a field on an object or interface type.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        match self {
            TypeDefinition::Interface(t) => t.fields.get(name),
            TypeDefinition::Object(t) => t.fields.get(name),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let TypeDefinition::Enum(enum_type) = self {
            Some(enum_type)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let TypeDefinition::InputObject(input_object_type) = self {
            Some(input_object_type)
        } else {
            None
        }
    }

    pub(crate) fn from_ast(type_def: &AstTypeDefinition) -> Self {
        use graphql_parser::schema::TypeDefinition as Ast;
        match type_def {
            Ast::Scalar(def) => TypeDefinition::Scalar(ScalarType {
                def_location: loc::SchemaDefLocation::Schema(
                    def.position.into(),
                ),
                name: def.name.clone(),
            }),
            Ast::Object(def) => TypeDefinition::Object(ObjectType {
                def_location: loc::SchemaDefLocation::Schema(
                    def.position.into(),
                ),
                fields: def
                    .fields
                    .iter()
                    .map(|field| {
                        (field.name.clone(), FieldDefinition::from_ast(field))
                    })
                    .collect(),
                name: def.name.clone(),
            }),
            Ast::Interface(def) => TypeDefinition::Interface(InterfaceType {
                def_location: loc::SchemaDefLocation::Schema(
                    def.position.into(),
                ),
                fields: def
                    .fields
                    .iter()
                    .map(|field| {
                        (field.name.clone(), FieldDefinition::from_ast(field))
                    })
                    .collect(),
                name: def.name.clone(),
            }),
            Ast::Union(def) => TypeDefinition::Union(UnionType {
                def_location: loc::SchemaDefLocation::Schema(
                    def.position.into(),
                ),
                members: def.types.clone(),
                name: def.name.clone(),
            }),
            Ast::Enum(def) => TypeDefinition::Enum(EnumType {
                def_location: loc::SchemaDefLocation::Schema(
                    def.position.into(),
                ),
                name: def.name.clone(),
                values: def
                    .values
                    .iter()
                    .map(|value| {
                        (
                            value.name.clone(),
                            EnumValueDefinition {
                                def_location: loc::SchemaDefLocation::Schema(
                                    value.position.into(),
                                ),
                                name: value.name.clone(),
                            },
                        )
                    })
                    .collect(),
            }),
            Ast::InputObject(def) =>
                TypeDefinition::InputObject(InputObjectType {
                    def_location: loc::SchemaDefLocation::Schema(
                        def.position.into(),
                    ),
                    fields: def
                        .fields
                        .iter()
                        .map(|field| {
                            (field.name.clone(), Parameter::from_ast(field))
                        })
                        .collect(),
                    name: def.name.clone(),
                }),
        }
    }
}
