use serde::Serialize;

/// A 1-based line/column position within a GraphQL source text.
///
/// Very similar to graphql_parser's [`Pos`](graphql_parser::Pos). The
/// upstream parser does not expose byte offsets, so source attribution is
/// line/column only.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct SourceLocation {
    pub column: usize,
    pub line: usize,
}
impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { column, line }
    }
}
impl From<graphql_parser::Pos> for SourceLocation {
    fn from(pos: graphql_parser::Pos) -> Self {
        Self {
            column: pos.column,
            line: pos.line,
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Indicates where a schema construct was defined: in a schema document or
/// implicitly as part of GraphQL's built-in types and directives.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaDefLocation {
    GraphQLBuiltIn,
    Schema(SourceLocation),
}
impl SchemaDefLocation {
    pub fn position(&self) -> Option<&SourceLocation> {
        match self {
            SchemaDefLocation::GraphQLBuiltIn => None,
            SchemaDefLocation::Schema(pos) => Some(pos),
        }
    }
}
