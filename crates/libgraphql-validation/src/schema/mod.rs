//! The type registry: an immutable, read-only view of a GraphQL type
//! system, plus the builder that constructs one from SDL text.

pub(crate) mod builtins;
mod directive_definition;
mod field_definition;
mod parameter;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod type_annotation;
mod type_definition;
mod value;

pub use directive_definition::DirectiveDefinition;
pub use directive_definition::DirectiveLocation;
pub use field_definition::FieldDefinition;
pub use parameter::Parameter;
pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use type_definition::EnumType;
pub use type_definition::EnumValueDefinition;
pub use type_definition::InputObjectType;
pub use type_definition::InterfaceType;
pub use type_definition::ObjectType;
pub use type_definition::ScalarType;
pub use type_definition::TypeDefinition;
pub use type_definition::UnionType;
pub use value::Value;

#[cfg(test)]
mod tests;
