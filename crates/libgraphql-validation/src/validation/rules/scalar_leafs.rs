use crate::ast::Node;
use crate::ast::NodeKind;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visit::Control;
use crate::visit::PathStep;

/// Leaf-selection legality: a field of scalar or enum type must not carry
/// a selection set, and a field of composite type must carry one.
pub(crate) struct ScalarLeafs;

pub(crate) fn factory<'a>(
    _ctx: &ValidationContext<'a>,
) -> Box<dyn Rule<'a> + 'a> {
    Box::new(ScalarLeafs)
}

impl<'a> Rule<'a> for ScalarLeafs {
    fn enter(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        _path: &[PathStep],
        _ancestors: &[&'a Node],
    ) -> Control {
        if node.kind() != NodeKind::Field {
            return Control::Continue;
        }
        let Some(type_def) = ctx.current_type() else {
            return Control::Continue;
        };
        let Some(field_name) = node.name_value() else {
            return Control::Continue;
        };
        let type_display = ctx
            .field_def()
            .map(|field_def| field_def.type_annotation().to_string())
            .unwrap_or_else(|| type_def.name().to_string());

        if type_def.is_leaf() {
            if node.child("selectionSet").is_some() {
                ctx.report(ValidationError::type_violation(
                    format!(
                        "Field \"{field_name}\" must not have a selection \
                         since type \"{type_display}\" has no subfields.",
                    ),
                    &[node],
                ));
            }
        } else if node.child("selectionSet").is_none() {
            ctx.report(ValidationError::type_violation(
                format!(
                    "Field \"{field_name}\" of type \"{type_display}\" \
                     must have a selection of subfields. Did you mean \
                     \"{field_name} {{ ... }}\"?",
                ),
                &[node],
            ));
        }
        Control::Continue
    }
}
