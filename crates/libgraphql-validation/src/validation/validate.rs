use crate::ast::Node;
use crate::schema::Schema;
use crate::validation::rules::default_rules;
use crate::validation::rules::default_sdl_rules;
use crate::validation::type_info::TypeInfoVisitor;
use crate::validation::InvalidSdlError;
use crate::validation::Rule;
use crate::validation::RuleFactory;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visit::walk;
use crate::visit::Control;
use crate::visit::ParallelVisitor;
use crate::visit::PathStep;
use crate::visit::Visitor;

/// The default cap on reported errors. A pathologically invalid document
/// should produce a bounded report, not an unbounded one.
pub const DEFAULT_MAX_ERRORS: usize = 100;

/// Validate an executable document against a schema with the default rule
/// set and the default error cap.
///
/// Returns the ordered error sequence; an empty result means the document
/// is valid. Identical inputs always yield identical, identically ordered
/// output.
pub fn validate(schema: &Schema, document: &Node) -> Vec<ValidationError> {
    validate_with(schema, document, default_rules(), Some(DEFAULT_MAX_ERRORS))
}

/// Validate with an explicit rule list and error cap.
///
/// `max_errors: None` disables the cap. With `Some(n)`, once the error
/// count reaches `n` after any node visit, one synthetic capacity error is
/// appended and the walk aborts.
pub fn validate_with(
    schema: &Schema,
    document: &Node,
    rules: &[RuleFactory],
    max_errors: Option<usize>,
) -> Vec<ValidationError> {
    log::debug!("validating document with {} rules", rules.len());
    let ctx = ValidationContext::for_document(schema, document);
    run_rules(&ctx, rules, max_errors);
    ctx.take_errors()
}

/// Validate a schema-definition document with the default SDL rule set.
///
/// No pre-existing registry is required; when one is supplied it is
/// consulted only to detect redefinition conflicts.
pub fn validate_sdl(
    document: &Node,
    existing_schema: Option<&Schema>,
) -> Vec<ValidationError> {
    validate_sdl_with(document, existing_schema, default_sdl_rules())
}

/// Validate a schema-definition document with an explicit rule list.
pub fn validate_sdl_with(
    document: &Node,
    existing_schema: Option<&Schema>,
    rules: &[RuleFactory],
) -> Vec<ValidationError> {
    log::debug!("validating SDL document with {} rules", rules.len());
    let ctx = ValidationContext::for_sdl(document, existing_schema);
    run_rules(&ctx, rules, None);
    ctx.take_errors()
}

/// Assert that an SDL document is valid, failing atomically with one
/// aggregated error otherwise. Used as a hard precondition by
/// schema-construction code.
pub fn assert_valid_sdl(document: &Node) -> Result<(), InvalidSdlError> {
    let errors = validate_sdl(document, None);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(InvalidSdlError { errors })
    }
}

/// Assert that an SDL document validly extends `schema`, failing
/// atomically with one aggregated error otherwise.
pub fn assert_valid_sdl_extension(
    document: &Node,
    schema: &Schema,
) -> Result<(), InvalidSdlError> {
    let errors = validate_sdl(document, Some(schema));
    if errors.is_empty() {
        Ok(())
    } else {
        Err(InvalidSdlError { errors })
    }
}

// One combined pass: instantiate every rule, compose them, attach the
// cursor (when the context carries one) and the error cap, then walk.
fn run_rules<'a>(
    ctx: &ValidationContext<'a>,
    rules: &[RuleFactory],
    max_errors: Option<usize>,
) {
    let rule_visitors: Vec<RuleVisitor<'_, 'a>> = rules
        .iter()
        .map(|factory| RuleVisitor {
            ctx,
            rule: factory(ctx),
        })
        .collect();
    let mut visitor = TypeInfoVisitor {
        type_info: ctx.type_info_cell(),
        inner: ErrorCapVisitor {
            ctx,
            max_errors,
            inner: ParallelVisitor::new(rule_visitors),
        },
    };
    walk(ctx.document(), &mut visitor);
}

// Adapts a rule (hooks that take the context as a parameter) to the plain
// visitor interface the traversal engine composes.
struct RuleVisitor<'c, 'a> {
    ctx: &'c ValidationContext<'a>,
    rule: Box<dyn Rule<'a> + 'a>,
}

impl<'a> Visitor<'a> for RuleVisitor<'_, 'a> {
    fn enter(
        &mut self,
        node: &'a Node,
        path: &[PathStep],
        ancestors: &[&'a Node],
    ) -> Control {
        self.rule.enter(self.ctx, node, path, ancestors)
    }

    fn leave(
        &mut self,
        node: &'a Node,
        path: &[PathStep],
        ancestors: &[&'a Node],
    ) -> Control {
        self.rule.leave(self.ctx, node, path, ancestors)
    }
}

// Checks the captured error counter after every hook set has run for a
// node and aborts the walk once the cap is reached, appending the single
// synthetic capacity error.
struct ErrorCapVisitor<'c, 'a, V> {
    ctx: &'c ValidationContext<'a>,
    max_errors: Option<usize>,
    inner: V,
}

impl<'a, V> ErrorCapVisitor<'_, 'a, V> {
    fn check_cap(&self) -> bool {
        match self.max_errors {
            Some(max) if self.ctx.error_count() >= max => {
                self.ctx
                    .report(ValidationError::capacity(self.ctx.document()));
                true
            },
            _ => false,
        }
    }
}

impl<'a, V: Visitor<'a>> Visitor<'a> for ErrorCapVisitor<'_, 'a, V> {
    fn enter(
        &mut self,
        node: &'a Node,
        path: &[PathStep],
        ancestors: &[&'a Node],
    ) -> Control {
        let control = self.inner.enter(node, path, ancestors);
        if control == Control::Abort {
            return Control::Abort;
        }
        if self.check_cap() {
            return Control::Abort;
        }
        control
    }

    fn leave(
        &mut self,
        node: &'a Node,
        path: &[PathStep],
        ancestors: &[&'a Node],
    ) -> Control {
        let control = self.inner.leave(node, path, ancestors);
        if control == Control::Abort {
            return Control::Abort;
        }
        if self.check_cap() {
            return Control::Abort;
        }
        control
    }
}
