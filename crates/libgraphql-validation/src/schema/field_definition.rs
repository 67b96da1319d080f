use crate::loc;
use crate::schema::Parameter;
use crate::schema::TypeAnnotation;
use indexmap::IndexMap;

type AstField = graphql_parser::schema::Field<'static, String>;

/// A defined field on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) type_annotation: TypeAnnotation,
}

impl FieldDefinition {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn from_ast(field: &AstField) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Schema(
                field.position.into(),
            ),
            name: field.name.clone(),
            parameters: field
                .arguments
                .iter()
                .map(|arg| (arg.name.clone(), Parameter::from_ast(arg)))
                .collect(),
            type_annotation: TypeAnnotation::from_ast_type(
                &field.field_type,
            ),
        }
    }
}
