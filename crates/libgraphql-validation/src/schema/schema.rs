use crate::ast::OperationKind;
use crate::schema::schema_builder::SchemaBuilder;
use crate::schema::DirectiveDefinition;
use crate::schema::TypeDefinition;
use indexmap::IndexMap;

/// A fully built, immutable type registry.
///
/// Validation only ever reads a `Schema`: type-by-name lookup,
/// directive-by-name lookup, and the root operation types. The built-in
/// scalars and directives are preloaded by [`SchemaBuilder`].
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) directives: IndexMap<String, DirectiveDefinition>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, TypeDefinition>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(name)
    }

    pub fn directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directives
    }

    pub fn type_def(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn types(&self) -> &IndexMap<String, TypeDefinition> {
        &self.types
    }

    /// The root type for the given operation kind, if the schema declares
    /// one.
    pub fn root_operation_type(
        &self,
        operation: OperationKind,
    ) -> Option<&TypeDefinition> {
        let name = match operation {
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }?;
        self.types.get(name)
    }

    pub fn query_type(&self) -> Option<&TypeDefinition> {
        self.root_operation_type(OperationKind::Query)
    }

    pub fn mutation_type(&self) -> Option<&TypeDefinition> {
        self.root_operation_type(OperationKind::Mutation)
    }

    pub fn subscription_type(&self) -> Option<&TypeDefinition> {
        self.root_operation_type(OperationKind::Subscription)
    }
}
