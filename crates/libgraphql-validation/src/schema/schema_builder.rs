use crate::ast;
use crate::schema::builtins::BUILTIN_DIRECTIVES;
use crate::schema::DirectiveDefinition;
use crate::schema::Schema;
use crate::schema::TypeDefinition;
use crate::validation::assert_valid_sdl;
use crate::validation::InvalidSdlError;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, Box<SchemaBuildError>>;

/// Utility for building a [`Schema`] from SDL text.
///
/// The document is validated (see
/// [`assert_valid_sdl`](crate::validation::assert_valid_sdl)) before any
/// type is constructed, so a successfully built schema never contains
/// duplicate type or directive definitions.
///
/// # Example
///
/// ```
/// use libgraphql_validation::SchemaBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaBuilder::from_str(
///     "type Query { hello: String }",
/// )?.build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    directives: IndexMap<String, DirectiveDefinition>,
    mutation_type: Option<String>,
    query_type: Option<String>,
    subscription_type: Option<String>,
    types: IndexMap<String, TypeDefinition>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        let types = IndexMap::from_iter([
            ("Boolean".to_string(), TypeDefinition::Bool),
            ("Float".to_string(), TypeDefinition::Float),
            ("ID".to_string(), TypeDefinition::ID),
            ("Int".to_string(), TypeDefinition::Int),
            ("String".to_string(), TypeDefinition::String),
        ]);
        Self {
            directives: BUILTIN_DIRECTIVES.clone(),
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            types,
        }
    }

    pub fn from_str(content: impl AsRef<str>) -> Result<Self> {
        let mut builder = Self::new();
        builder.load_content(content.as_ref())?;
        Ok(builder)
    }

    pub fn load_content(&mut self, content: &str) -> Result<()> {
        let doc = graphql_parser::schema::parse_schema::<String>(content)
            .map_err(|err| {
                Box::new(SchemaBuildError::ParseError(err))
            })?
            .into_static();

        let doc_node = ast::schema_document_to_node(&doc);
        assert_valid_sdl(&doc_node)
            .map_err(|err| Box::new(SchemaBuildError::InvalidSdl(err)))?;

        for def in &doc.definitions {
            self.visit_definition(def);
        }
        Ok(())
    }

    pub fn build(self) -> Result<Schema> {
        let query_type = self.resolve_root_type(self.query_type.as_deref(), "Query");
        let mutation_type =
            self.resolve_root_type(self.mutation_type.as_deref(), "Mutation");
        let subscription_type = self.resolve_root_type(
            self.subscription_type.as_deref(),
            "Subscription",
        );

        log::debug!(
            "built schema with {} types and {} directives",
            self.types.len(),
            self.directives.len(),
        );

        Ok(Schema {
            directives: self.directives,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    // An explicit `schema { ... }` declaration wins; otherwise the
    // conventionally named type is the root when it exists. A schema with
    // no root for some operation kind is permitted: lookups simply resolve
    // to nothing.
    fn resolve_root_type(
        &self,
        explicit: Option<&str>,
        default_name: &str,
    ) -> Option<String> {
        explicit
            .map(str::to_string)
            .or_else(|| {
                self.types
                    .contains_key(default_name)
                    .then(|| default_name.to_string())
            })
    }

    fn visit_definition(
        &mut self,
        def: &graphql_parser::schema::Definition<'static, String>,
    ) {
        use graphql_parser::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) => {
                self.query_type = schema_def.query.clone();
                self.mutation_type = schema_def.mutation.clone();
                self.subscription_type = schema_def.subscription.clone();
            },
            Definition::TypeDefinition(type_def) => {
                let type_def = TypeDefinition::from_ast(type_def);
                self.types.insert(type_def.name().to_string(), type_def);
            },
            Definition::DirectiveDefinition(directive_def) => {
                let directive_def = DirectiveDefinition::from_ast(directive_def);
                self.directives.insert(
                    directive_def.name().to_string(),
                    directive_def,
                );
            },
            Definition::TypeExtension(type_ext) => {
                // Extensions are validated (SDL rules) but not applied;
                // schema mutation is outside this crate's scope.
                log::debug!(
                    "ignoring type extension: {:?}",
                    extension_name(type_ext),
                );
            },
        }
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn extension_name<'a>(
    type_ext: &'a graphql_parser::schema::TypeExtension<'static, String>,
) -> &'a str {
    use graphql_parser::schema::TypeExtension;
    match type_ext {
        TypeExtension::Scalar(ext) => ext.name.as_str(),
        TypeExtension::Object(ext) => ext.name.as_str(),
        TypeExtension::Interface(ext) => ext.name.as_str(),
        TypeExtension::Union(ext) => ext.name.as_str(),
        TypeExtension::Enum(ext) => ext.name.as_str(),
        TypeExtension::InputObject(ext) => ext.name.as_str(),
    }
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Failed to parse schema document: {0}")]
    ParseError(#[from] graphql_parser::schema::ParseError),

    #[error(transparent)]
    InvalidSdl(#[from] InvalidSdlError),
}
