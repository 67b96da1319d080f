use crate::ast::Node;
use crate::visit::Control;
use crate::visit::PathStep;
use crate::visit::Visitor;

/// Composes N independently authored visitors into a single pass.
///
/// For each node, component `enter` hooks run in registration order and
/// component `leave` hooks in reverse registration order, mirroring hook
/// nesting. A component that returns [`Control::SkipSubtree`] stops
/// receiving hooks below that node (it still receives `leave` for the node
/// it skipped) while the other components keep descending. A component
/// that returns [`Control::Abort`] aborts the whole walk immediately: no
/// remaining component hooks run for that node or any later node.
pub struct ParallelVisitor<V> {
    visitors: Vec<V>,
    // Depth at which each component began skipping, if it is skipping.
    skip_depths: Vec<Option<usize>>,
}

impl<V> ParallelVisitor<V> {
    pub fn new(visitors: Vec<V>) -> Self {
        let skip_depths = visitors.iter().map(|_| None).collect();
        Self {
            visitors,
            skip_depths,
        }
    }
}

impl<'a, V: Visitor<'a>> Visitor<'a> for ParallelVisitor<V> {
    fn enter(
        &mut self,
        node: &'a Node,
        path: &[PathStep],
        ancestors: &[&'a Node],
    ) -> Control {
        for (visitor, skip_depth) in
            self.visitors.iter_mut().zip(self.skip_depths.iter_mut())
        {
            if skip_depth.is_some() {
                continue;
            }
            match visitor.enter(node, path, ancestors) {
                Control::Continue => {},
                Control::SkipSubtree => {
                    *skip_depth = Some(path.len());
                },
                Control::Abort => return Control::Abort,
            }
        }
        Control::Continue
    }

    fn leave(
        &mut self,
        node: &'a Node,
        path: &[PathStep],
        ancestors: &[&'a Node],
    ) -> Control {
        for (visitor, skip_depth) in self
            .visitors
            .iter_mut()
            .zip(self.skip_depths.iter_mut())
            .rev()
        {
            match skip_depth {
                Some(depth) if *depth == path.len() => {
                    // This is the node the component skipped; its leave
                    // hook still runs, and the skip window closes.
                    *skip_depth = None;
                },
                Some(_) => continue,
                None => {},
            }
            if visitor.leave(node, path, ancestors) == Control::Abort {
                return Control::Abort;
            }
        }
        Control::Continue
    }
}
