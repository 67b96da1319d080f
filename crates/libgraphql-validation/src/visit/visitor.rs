use crate::ast::Node;
use crate::visit::PathStep;

/// Traversal-control signal returned from every hook.
///
/// Subtree skipping and whole-walk abort are deliberately distinct signals:
/// one suppresses descent below a single node (its `leave` hook still
/// runs), the other stops the entire walk with no further hook invocations
/// of any kind.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Control {
    #[default]
    Continue,
    SkipSubtree,
    Abort,
}

/// Enter/leave hooks over a [`Node`] tree.
///
/// `enter` runs before a node's children are visited; `leave` runs after.
/// `path` is the ordered sequence of edge-name/index steps from the root,
/// and `ancestors` the chain of enclosing nodes (the direct parent last).
/// Both hooks default to [`Control::Continue`]. A [`Control::SkipSubtree`]
/// returned from `leave` has no remaining subtree to skip and is treated as
/// `Continue`.
///
/// The lifetime `'a` is the document lifetime: hooks may retain references
/// to visited nodes for as long as the document is borrowed.
pub trait Visitor<'a> {
    fn enter(
        &mut self,
        node: &'a Node,
        path: &[PathStep],
        ancestors: &[&'a Node],
    ) -> Control {
        let _ = (node, path, ancestors);
        Control::Continue
    }

    fn leave(
        &mut self,
        node: &'a Node,
        path: &[PathStep],
        ancestors: &[&'a Node],
    ) -> Control {
        let _ = (node, path, ancestors);
        Control::Continue
    }
}
