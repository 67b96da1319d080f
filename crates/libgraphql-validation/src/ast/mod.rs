//! The unified, kind-tagged AST consumed by the validation engine.
//!
//! Upstream parsing is delegated to the `graphql-parser` crate;
//! [`parse_executable`] and [`parse_schema`] lower its ASTs into [`Node`]
//! trees. Hosting code may also construct trees directly with the
//! [`Node`] builder methods.

mod node;
mod node_kind;
mod operation_kind;
mod parser_compat;

pub use node::Edge;
pub use node::Node;
pub use node_kind::NodeKind;
pub use operation_kind::OperationKind;
pub use parser_compat::parse_executable;
pub use parser_compat::parse_schema;
pub use parser_compat::ParseDocumentError;

pub(crate) use parser_compat::schema_document_to_node;

#[cfg(test)]
mod tests;
