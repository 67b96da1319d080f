use crate::ast::Node;
use crate::ast::NodeKind;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visit::Control;
use crate::visit::PathStep;
use std::collections::HashSet;

/// Every variable an operation defines must be used somewhere in the
/// operation, including transitively through the fragments it spreads.
pub(crate) struct NoUnusedVariables;

pub(crate) fn factory<'a>(
    _ctx: &ValidationContext<'a>,
) -> Box<dyn Rule<'a> + 'a> {
    Box::new(NoUnusedVariables)
}

impl<'a> Rule<'a> for NoUnusedVariables {
    fn leave(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        _path: &[PathStep],
        _ancestors: &[&'a Node],
    ) -> Control {
        if node.kind() != NodeKind::OperationDefinition {
            return Control::Continue;
        }
        let used_names: HashSet<&str> = ctx
            .recursive_variable_usages(node)
            .iter()
            .filter_map(|usage| usage.variable.name_value())
            .collect();

        for variable_def in node.child_list("variableDefinitions") {
            let Some(variable_name) = variable_def
                .child("variable")
                .and_then(Node::name_value)
            else {
                continue;
            };
            if used_names.contains(variable_name) {
                continue;
            }
            let message = match node.name_value() {
                Some(operation_name) => format!(
                    "Variable \"${variable_name}\" is never used in \
                     operation \"{operation_name}\".",
                ),
                None => format!(
                    "Variable \"${variable_name}\" is never used.",
                ),
            };
            ctx.report(ValidationError::structural(
                message,
                &[variable_def],
            ));
        }
        Control::Continue
    }
}
