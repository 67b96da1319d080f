use crate::ast::Node;
use crate::validation::ValidationContext;
use crate::visit::Control;
use crate::visit::PathStep;

/// One unit of validation logic.
///
/// A rule receives the shared context by reference on every hook and keeps
/// any scratch state it needs (a "seen" map, collected definitions) in
/// itself. Rules never mutate the tree or the cursor; they only read
/// context state and append errors. Rule ordering affects only the order
/// errors are reported for the same node, never correctness.
pub trait Rule<'a> {
    fn enter(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        path: &[PathStep],
        ancestors: &[&'a Node],
    ) -> Control {
        let _ = (ctx, node, path, ancestors);
        Control::Continue
    }

    fn leave(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        path: &[PathStep],
        ancestors: &[&'a Node],
    ) -> Control {
        let _ = (ctx, node, path, ancestors);
        Control::Continue
    }
}

/// A stateless rule constructor: given a context, produce the rule
/// instance (with whatever precomputed state it wants) for one pass.
pub type RuleFactory =
    for<'a> fn(&ValidationContext<'a>) -> Box<dyn Rule<'a> + 'a>;
