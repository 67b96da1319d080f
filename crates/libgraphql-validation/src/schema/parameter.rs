use crate::loc;
use crate::schema::TypeAnnotation;
use crate::schema::Value;

type AstInputValue = graphql_parser::schema::InputValue<'static, String>;

/// A defined input value: an argument of a field or directive, or a field
/// of an input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}

impl Parameter {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// A parameter is required when it is non-nullable and declares no
    /// default value.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub(crate) fn from_ast(input_value: &AstInputValue) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Schema(
                input_value.position.into(),
            ),
            default_value: input_value
                .default_value
                .as_ref()
                .map(Value::from_ast),
            name: input_value.name.clone(),
            type_annotation: TypeAnnotation::from_ast_type(
                &input_value.value_type,
            ),
        }
    }
}
