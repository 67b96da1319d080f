use crate::ast::Node;
use crate::ast::NodeKind;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visit::Control;
use crate::visit::PathStep;

/// A fragment must not spread itself, directly or transitively. Each
/// distinct cycle in the spread graph is reported exactly once, from the
/// context's memoized cycle analysis.
pub(crate) struct NoFragmentCycles;

pub(crate) fn factory<'a>(
    _ctx: &ValidationContext<'a>,
) -> Box<dyn Rule<'a> + 'a> {
    Box::new(NoFragmentCycles)
}

impl<'a> Rule<'a> for NoFragmentCycles {
    fn leave(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        _path: &[PathStep],
        _ancestors: &[&'a Node],
    ) -> Control {
        if node.kind() != NodeKind::Document {
            return Control::Continue;
        }
        for cycle in ctx.fragment_cycles() {
            let spreads = cycle.spreads();
            let Some(closing_spread) = spreads.last() else {
                continue;
            };
            let Some(cycled_name) = closing_spread.name_value() else {
                continue;
            };
            let via_names = spreads[..spreads.len() - 1]
                .iter()
                .filter_map(|spread| spread.name_value())
                .map(|name| format!("\"{name}\""))
                .collect::<Vec<_>>()
                .join(", ");
            let message = if via_names.is_empty() {
                format!(
                    "Cannot spread fragment \"{cycled_name}\" within \
                     itself.",
                )
            } else {
                format!(
                    "Cannot spread fragment \"{cycled_name}\" within \
                     itself via {via_names}.",
                )
            };
            ctx.report(ValidationError::structural(message, spreads));
        }
        Control::Continue
    }
}
