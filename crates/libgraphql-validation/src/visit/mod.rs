//! Generic depth-first traversal over [`Node`](crate::ast::Node) trees:
//! enter/leave hooks, subtree-skip and whole-walk-abort signals, and
//! composition of many hook sets into one pass.

mod parallel_visitor;
mod path;
mod visitor;
mod walk;

pub use parallel_visitor::ParallelVisitor;
pub use path::format_path;
pub use path::PathStep;
pub use visitor::Control;
pub use visitor::Visitor;
pub use walk::walk;
pub use walk::WalkOutcome;

#[cfg(test)]
mod tests;
