use crate::ast::Edge;
use crate::ast::Node;
use crate::visit::Control;
use crate::visit::PathStep;
use crate::visit::Visitor;

/// The way a walk ended: every node visited, or aborted mid-traversal by a
/// hook.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WalkOutcome {
    Completed,
    Aborted,
}

/// Depth-first traversal of `root` and all of its descendants.
///
/// Children are visited per the grammar table
/// ([`NodeKind::child_keys`](crate::ast::NodeKind::child_keys)): edges in
/// table order, list edges index by index, absent edges skipped. Every node
/// is visited exactly once; `enter` and `leave` invocations nest strictly.
pub fn walk<'a>(root: &'a Node, visitor: &mut dyn Visitor<'a>) -> WalkOutcome {
    let mut path = vec![];
    let mut ancestors = vec![];
    if walk_node(root, visitor, &mut path, &mut ancestors) {
        WalkOutcome::Aborted
    } else {
        WalkOutcome::Completed
    }
}

// Returns true if the walk was aborted.
fn walk_node<'a>(
    node: &'a Node,
    visitor: &mut dyn Visitor<'a>,
    path: &mut Vec<PathStep>,
    ancestors: &mut Vec<&'a Node>,
) -> bool {
    match visitor.enter(node, path, ancestors) {
        Control::Abort => return true,
        Control::SkipSubtree => {},
        Control::Continue => {
            ancestors.push(node);
            for &key in node.kind().child_keys() {
                match node.edge(key) {
                    None => {},
                    Some(Edge::Single(child)) => {
                        path.push(PathStep::Key(key));
                        let aborted =
                            walk_node(child, visitor, path, ancestors);
                        path.pop();
                        if aborted {
                            return true;
                        }
                    },
                    Some(Edge::List(children)) => {
                        path.push(PathStep::Key(key));
                        for (index, child) in children.iter().enumerate() {
                            path.push(PathStep::Index(index));
                            let aborted =
                                walk_node(child, visitor, path, ancestors);
                            path.pop();
                            if aborted {
                                path.pop();
                                return true;
                            }
                        }
                        path.pop();
                    },
                }
            }
            ancestors.pop();
        },
    }

    matches!(visitor.leave(node, path, ancestors), Control::Abort)
}
