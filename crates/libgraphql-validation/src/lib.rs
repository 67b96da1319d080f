//! A rule-driven validation engine for GraphQL documents.
//!
//! Sits between a parser (upstream, producing an immutable kind-tagged
//! tree) and an execution engine (downstream, consuming only validated
//! trees): one depth-first pass runs a composed battery of independent
//! structural and type-aware rules against a read-only type registry and
//! returns a bounded, deterministic, ordered list of errors with source
//! attribution.

pub mod ast;
pub mod loc;
pub mod schema;
pub mod validation;
pub mod visit;

pub use schema::Schema;
pub use schema::SchemaBuilder;
pub use schema::SchemaBuildError;
pub use validation::assert_valid_sdl;
pub use validation::assert_valid_sdl_extension;
pub use validation::validate;
pub use validation::validate_sdl;
pub use validation::InvalidSdlError;
pub use validation::ValidationError;
