use crate::ast::NodeKind;
use crate::ast::OperationKind;
use crate::loc::SourceLocation;

const NO_CHILDREN: &[Node] = &[];

/// A child edge of a [`Node`]: either a single nested node or an ordered
/// list of nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Edge {
    Single(Node),
    List(Vec<Node>),
}

/// An immutable, kind-tagged AST node.
///
/// A node owns its [`SourceLocation`], an optional scalar payload (the text
/// of a name, the lexeme of a literal value, or the operation kind of an
/// operation definition), and its child edges. Edges are stored and visited
/// in the order given by the kind's entry in the grammar table
/// ([`NodeKind::child_keys`]); edges a particular node does not carry are
/// simply absent.
///
/// The engine never mutates a node after construction; the caller owns the
/// tree for the whole validation lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    kind: NodeKind,
    location: SourceLocation,
    value: Option<String>,
    children: Vec<(&'static str, Edge)>,
}

impl Node {
    pub fn new(kind: NodeKind, location: SourceLocation) -> Self {
        Self {
            kind,
            location,
            value: None,
            children: vec![],
        }
    }

    /// Attach the scalar payload for this node.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Attach a single-node child edge.
    pub fn with_child(mut self, key: &'static str, child: Node) -> Self {
        debug_assert!(
            self.kind.child_keys().contains(&key),
            "edge `{key}` is not in the grammar table for {:?}",
            self.kind,
        );
        self.children.push((key, Edge::Single(child)));
        self
    }

    /// Attach a list child edge. An empty list is not recorded: absent and
    /// empty edges are equivalent to the walker.
    pub fn with_children(
        mut self,
        key: &'static str,
        children: Vec<Node>,
    ) -> Self {
        debug_assert!(
            self.kind.child_keys().contains(&key),
            "edge `{key}` is not in the grammar table for {:?}",
            self.kind,
        );
        if !children.is_empty() {
            self.children.push((key, Edge::List(children)));
        }
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Look up a child edge by name.
    pub fn edge(&self, key: &str) -> Option<&Edge> {
        self.children
            .iter()
            .find(|(edge_key, _)| *edge_key == key)
            .map(|(_, edge)| edge)
    }

    /// The single-node child at `key`, if present.
    pub fn child(&self, key: &str) -> Option<&Node> {
        match self.edge(key) {
            Some(Edge::Single(node)) => Some(node),
            _ => None,
        }
    }

    /// The list child at `key`; an absent edge yields an empty slice.
    pub fn child_list(&self, key: &str) -> &[Node] {
        match self.edge(key) {
            Some(Edge::List(nodes)) => nodes.as_slice(),
            _ => NO_CHILDREN,
        }
    }

    /// The text of this node's `name` child, if it has one.
    pub fn name_value(&self) -> Option<&str> {
        self.child("name").and_then(|name| name.value())
    }

    /// The operation kind of an [`NodeKind::OperationDefinition`] node.
    pub fn operation_kind(&self) -> Option<OperationKind> {
        if self.kind != NodeKind::OperationDefinition {
            return None;
        }
        self.value().and_then(OperationKind::from_str)
    }
}
