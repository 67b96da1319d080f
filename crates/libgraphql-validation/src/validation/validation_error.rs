use crate::ast::Node;
use crate::loc::SourceLocation;
use crate::visit::PathStep;
use serde::Serialize;
use thiserror::Error;

/// Broad classification of a validation error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ErrorCategory {
    /// Grammar-level violations that need no type information
    /// (uniqueness, literal-ness, nesting).
    Structural,
    /// Violations that require registry-derived type information
    /// (missing required arguments, illegal values, illegal selections).
    Type,
    /// The synthetic marker appended once when the error cap is reached.
    Capacity,
}

/// One validation finding: a message, the source locations of the nodes it
/// concerns (always at least one), and an optional structured result path.
///
/// Errors are plain values; rules append them to the context sink and the
/// driver returns them in report order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationError {
    category: ErrorCategory,
    locations: Vec<SourceLocation>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<PathStep>>,
}

impl ValidationError {
    fn new(
        category: ErrorCategory,
        message: String,
        nodes: &[&Node],
    ) -> Self {
        debug_assert!(
            !nodes.is_empty(),
            "a validation error must reference at least one node",
        );
        Self {
            category,
            locations: nodes.iter().map(|node| *node.location()).collect(),
            message,
            path: None,
        }
    }

    pub fn structural(message: impl Into<String>, nodes: &[&Node]) -> Self {
        Self::new(ErrorCategory::Structural, message.into(), nodes)
    }

    pub fn type_violation(
        message: impl Into<String>,
        nodes: &[&Node],
    ) -> Self {
        Self::new(ErrorCategory::Type, message.into(), nodes)
    }

    pub(crate) fn capacity(document: &Node) -> Self {
        Self::new(
            ErrorCategory::Capacity,
            "Too many validation errors, error limit reached. \
             Validation aborted."
                .to_string(),
            &[document],
        )
    }

    /// Attach a structured result path, for errors that concern a
    /// runtime-shaped location rather than a syntax location.
    pub fn with_path(mut self, path: Vec<PathStep>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn locations(&self) -> &[SourceLocation] {
        self.locations.as_slice()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn path(&self) -> Option<&[PathStep]> {
        self.path.as_deref()
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

fn format_error_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::message)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Aggregated failure returned by the `assert_*` wrappers when the
/// underlying validator finds any error.
#[derive(Clone, Debug, Error)]
#[error("{}", format_error_messages(.errors))]
pub struct InvalidSdlError {
    pub errors: Vec<ValidationError>,
}
