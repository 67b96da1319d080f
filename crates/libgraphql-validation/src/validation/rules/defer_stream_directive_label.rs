use crate::ast::Node;
use crate::ast::NodeKind;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visit::Control;
use crate::visit::PathStep;
use std::collections::HashMap;

/// Defer and stream directive labels are unique.
///
/// A document is only valid if the `label` argument of every `@defer` and
/// `@stream` usage is a static string that is unique across all such
/// usages. The first occurrence of a label wins; later occurrences report
/// an error referencing both usages.
pub(crate) struct DeferStreamDirectiveLabel<'a> {
    known_labels: HashMap<String, &'a Node>,
}

pub(crate) fn factory<'a>(
    _ctx: &ValidationContext<'a>,
) -> Box<dyn Rule<'a> + 'a> {
    Box::new(DeferStreamDirectiveLabel {
        known_labels: HashMap::new(),
    })
}

impl<'a> Rule<'a> for DeferStreamDirectiveLabel<'a> {
    fn enter(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        _path: &[PathStep],
        _ancestors: &[&'a Node],
    ) -> Control {
        if node.kind() != NodeKind::Directive {
            return Control::Continue;
        }
        let Some(directive_name) = node.name_value() else {
            return Control::Continue;
        };
        if directive_name != "defer" && directive_name != "stream" {
            return Control::Continue;
        }

        let label_value = node
            .child_list("arguments")
            .iter()
            .find(|arg| arg.name_value() == Some("label"))
            .and_then(|arg| arg.child("value"));
        let Some(label_value) = label_value else {
            return Control::Continue;
        };

        if label_value.kind() != NodeKind::StringValue {
            ctx.report(ValidationError::structural(
                format!(
                    "Argument \"@{directive_name}(label:)\" must be a \
                     static string.",
                ),
                &[node],
            ));
            return Control::Continue;
        }

        let Some(label_text) = label_value.value() else {
            return Control::Continue;
        };
        match self.known_labels.get(label_text) {
            Some(&previous_usage) => {
                ctx.report(ValidationError::structural(
                    "Value for arguments \"defer(label:)\" and \
                     \"stream(label:)\" must be unique across all \
                     Defer/Stream directive usages.",
                    &[previous_usage, node],
                ));
            },
            None => {
                self.known_labels.insert(label_text.to_string(), node);
            },
        }
        Control::Continue
    }
}
