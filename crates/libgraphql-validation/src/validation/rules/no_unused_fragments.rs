use crate::ast::Node;
use crate::ast::NodeKind;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visit::Control;
use crate::visit::PathStep;
use std::collections::HashSet;

/// Every fragment defined in a document must be reachable from at least
/// one operation through fragment spreads.
pub(crate) struct NoUnusedFragments<'a> {
    fragment_defs: Vec<&'a Node>,
    operation_defs: Vec<&'a Node>,
}

pub(crate) fn factory<'a>(
    _ctx: &ValidationContext<'a>,
) -> Box<dyn Rule<'a> + 'a> {
    Box::new(NoUnusedFragments {
        fragment_defs: vec![],
        operation_defs: vec![],
    })
}

impl<'a> Rule<'a> for NoUnusedFragments<'a> {
    fn enter(
        &mut self,
        _ctx: &ValidationContext<'a>,
        node: &'a Node,
        _path: &[PathStep],
        _ancestors: &[&'a Node],
    ) -> Control {
        match node.kind() {
            NodeKind::OperationDefinition => {
                self.operation_defs.push(node);
                Control::SkipSubtree
            },
            NodeKind::FragmentDefinition => {
                self.fragment_defs.push(node);
                Control::SkipSubtree
            },
            _ => Control::Continue,
        }
    }

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
        let mut used_names: HashSet<&str> = HashSet::new();
        for &operation in &self.operation_defs {
            for &fragment in
                ctx.recursively_referenced_fragments(operation).iter()
            {
                if let Some(name) = fragment.name_value() {
                    used_names.insert(name);
                }
            }
        }
        for &fragment_def in &self.fragment_defs {
            let Some(name) = fragment_def.name_value() else {
                continue;
            };
            if !used_names.contains(name) {
                ctx.report(ValidationError::structural(
                    format!("Fragment \"{name}\" is never used."),
                    &[fragment_def],
                ));
            }
        }
        Control::Continue
    }
}
