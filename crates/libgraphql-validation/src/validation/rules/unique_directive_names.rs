use crate::ast::Node;
use crate::ast::NodeKind;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visit::Control;
use crate::visit::PathStep;
use std::collections::HashMap;

/// Directive names must be unique within a document and must not
/// redefine directives of an existing registry.
pub(crate) struct UniqueDirectiveNames<'a> {
    known_directive_names: HashMap<&'a str, &'a Node>,
}

pub(crate) fn factory<'a>(
    _ctx: &ValidationContext<'a>,
) -> Box<dyn Rule<'a> + 'a> {
    Box::new(UniqueDirectiveNames {
        known_directive_names: HashMap::new(),
    })
}

impl<'a> Rule<'a> for UniqueDirectiveNames<'a> {
    fn enter(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        _path: &[PathStep],
        _ancestors: &[&'a Node],
    ) -> Control {
        if node.kind() != NodeKind::DirectiveDefinition {
            return Control::Continue;
        }
        let Some(name_node) = node.child("name") else {
            return Control::Continue;
        };
        let Some(directive_name) = name_node.value() else {
            return Control::Continue;
        };

        if ctx
            .schema()
            .is_some_and(|schema| schema.directive(directive_name).is_some())
        {
            ctx.report(ValidationError::structural(
                format!(
                    "Directive \"@{directive_name}\" already exists in \
                     the schema. It cannot be redefined.",
                ),
                &[name_node],
            ));
            return Control::Continue;
        }

        match self.known_directive_names.get(directive_name) {
            Some(&previous_name_node) => {
                ctx.report(ValidationError::structural(
                    format!(
                        "There can be only one directive named \
                         \"@{directive_name}\".",
                    ),
                    &[previous_name_node, name_node],
                ));
            },
            None => {
                self.known_directive_names
                    .insert(directive_name, name_node);
            },
        }
        Control::Continue
    }
}
