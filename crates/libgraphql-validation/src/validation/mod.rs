//! The validation engine: the type-inference cursor, the shared context,
//! the rule set, and the drivers.

mod context;
mod rule;
pub mod rules;
mod type_info;
mod validate;
mod validation_error;

pub use context::FragmentCycle;
pub use context::FragmentSignature;
pub use context::ValidationContext;
pub use context::VariableUsage;
pub use rule::Rule;
pub use rule::RuleFactory;
pub use type_info::TypeInfo;
pub use validate::assert_valid_sdl;
pub use validate::assert_valid_sdl_extension;
pub use validate::validate;
pub use validate::validate_sdl;
pub use validate::validate_sdl_with;
pub use validate::validate_with;
pub use validate::DEFAULT_MAX_ERRORS;
pub use validation_error::ErrorCategory;
pub use validation_error::InvalidSdlError;
pub use validation_error::ValidationError;

#[cfg(test)]
mod tests;
