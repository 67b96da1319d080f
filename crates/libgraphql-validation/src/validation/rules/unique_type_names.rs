use crate::ast::Node;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visit::Control;
use crate::visit::PathStep;
use std::collections::HashMap;

/// Type names must be unique within a document, and must not collide
/// with types already present in an existing registry when one is being
/// extended.
pub(crate) struct UniqueTypeNames<'a> {
    known_type_names: HashMap<&'a str, &'a Node>,
}

pub(crate) fn factory<'a>(
    _ctx: &ValidationContext<'a>,
) -> Box<dyn Rule<'a> + 'a> {
    Box::new(UniqueTypeNames {
        known_type_names: HashMap::new(),
    })
}

impl<'a> Rule<'a> for UniqueTypeNames<'a> {
    fn enter(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        _path: &[PathStep],
        _ancestors: &[&'a Node],
    ) -> Control {
        if !node.kind().is_type_definition() {
            return Control::Continue;
        }
        let Some(name_node) = node.child("name") else {
            return Control::Continue;
        };
        let Some(type_name) = name_node.value() else {
            return Control::Continue;
        };

        if ctx
            .schema()
            .is_some_and(|schema| schema.type_def(type_name).is_some())
        {
            ctx.report(ValidationError::structural(
                format!(
                    "Type \"{type_name}\" already exists in the schema. \
                     It cannot also be defined in this type definition.",
                ),
                &[name_node],
            ));
            return Control::Continue;
        }

        match self.known_type_names.get(type_name) {
            Some(&previous_name_node) => {
                ctx.report(ValidationError::structural(
                    format!(
                        "There can be only one type named \
                         \"{type_name}\".",
                    ),
                    &[previous_name_node, name_node],
                ));
            },
            None => {
                self.known_type_names.insert(type_name, name_node);
            },
        }
        Control::Continue
    }
}
