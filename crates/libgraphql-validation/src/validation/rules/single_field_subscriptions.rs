use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::OperationKind;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visit::Control;
use crate::visit::PathStep;
use std::collections::HashSet;

/// A subscription operation must select exactly one top-level field, and
/// that field must not be an introspection field. Top-level fragment
/// spreads and inline fragments are expanded before counting.
pub(crate) struct SingleFieldSubscriptions;

pub(crate) fn factory<'a>(
    _ctx: &ValidationContext<'a>,
) -> Box<dyn Rule<'a> + 'a> {
    Box::new(SingleFieldSubscriptions)
}

impl<'a> Rule<'a> for SingleFieldSubscriptions {
    fn enter(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        _path: &[PathStep],
        _ancestors: &[&'a Node],
    ) -> Control {
        if node.kind() != NodeKind::OperationDefinition
            || node.operation_kind() != Some(OperationKind::Subscription)
        {
            return Control::Continue;
        }
        let Some(selection_set) = node.child("selectionSet") else {
            return Control::Continue;
        };

        let mut top_level_fields = vec![];
        let mut expanded_fragments = HashSet::new();
        collect_top_level_fields(
            ctx,
            selection_set,
            &mut expanded_fragments,
            &mut top_level_fields,
        );

        let subject = match node.name_value() {
            Some(operation_name) =>
                format!("Subscription \"{operation_name}\""),
            None => "Anonymous Subscription".to_string(),
        };

        if top_level_fields.len() > 1 {
            ctx.report(ValidationError::structural(
                format!(
                    "{subject} must select only one top-level field.",
                ),
                &top_level_fields[1..],
            ));
        }
        for &field in &top_level_fields {
            if field.name_value().is_some_and(|name| name.starts_with("__"))
            {
                ctx.report(ValidationError::structural(
                    format!(
                        "{subject} must not select an introspection \
                         top-level field.",
                    ),
                    &[field],
                ));
            }
        }
        Control::Continue
    }
}

fn collect_top_level_fields<'a>(
    ctx: &ValidationContext<'a>,
    selection_set: &'a Node,
    expanded_fragments: &mut HashSet<&'a str>,
    fields: &mut Vec<&'a Node>,
) {
    for selection in selection_set.child_list("selections") {
        match selection.kind() {
            NodeKind::Field => fields.push(selection),
            NodeKind::InlineFragment => {
                if let Some(nested) = selection.child("selectionSet") {
                    collect_top_level_fields(
                        ctx,
                        nested,
                        expanded_fragments,
                        fields,
                    );
                }
            },
            NodeKind::FragmentSpread => {
                let Some(name) = selection.name_value() else {
                    continue;
                };
                if !expanded_fragments.insert(name) {
                    continue;
                }
                if let Some(nested) = ctx
                    .fragment(name)
                    .and_then(|fragment| fragment.child("selectionSet"))
                {
                    collect_top_level_fields(
                        ctx,
                        nested,
                        expanded_fragments,
                        fields,
                    );
                }
            },
            _ => {},
        }
    }
}
