use crate::ast::Node;
use crate::ast::NodeKind;
use crate::schema::DirectiveDefinition;
use crate::schema::EnumValueDefinition;
use crate::schema::FieldDefinition;
use crate::schema::Parameter;
use crate::schema::Schema;
use crate::schema::TypeAnnotation;
use crate::schema::TypeDefinition;
use crate::schema::Value;
use crate::validation::type_info::TypeInfoVisitor;
use crate::validation::TypeInfo;
use crate::validation::ValidationError;
use crate::visit::walk;
use crate::visit::Control;
use crate::visit::PathStep;
use crate::visit::Visitor;
use indexmap::IndexMap;
use std::cell::OnceCell;
use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;

// Memoization key for per-node caches: node identity, not node equality.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
struct NodeKey(*const Node);
impl NodeKey {
    fn of(node: &Node) -> Self {
        Self(node as *const Node)
    }
}

/// One occurrence of a variable in an operation or fragment, tagged with
/// the input type expected at that position and the declared default of
/// that position, when known.
#[derive(Clone, Debug)]
pub struct VariableUsage<'a> {
    pub variable: &'a Node,
    pub expected_type: Option<TypeAnnotation>,
    pub default_value: Option<&'a Value>,
}

/// A cycle in the fragment-spread graph: the chain of spread nodes that
/// closes back on an ancestor fragment. The final spread is the one that
/// closes the cycle.
#[derive(Clone, Debug)]
pub struct FragmentCycle<'a> {
    spreads: Vec<&'a Node>,
}
impl<'a> FragmentCycle<'a> {
    pub fn spreads(&self) -> &[&'a Node] {
        self.spreads.as_slice()
    }
}

/// The effective signature of a fragment: its explicit variable
/// definitions when it declares any, otherwise the implicit set of
/// variables its body references without a local definition.
#[derive(Clone, Debug)]
pub struct FragmentSignature<'a> {
    explicit: bool,
    variables: IndexMap<&'a str, Option<&'a Node>>,
}
impl<'a> FragmentSignature<'a> {
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    pub fn defines(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Variable name to `VariableDefinition` node; implicit signature
    /// entries have no definition node.
    pub fn variable_definitions(
        &self,
    ) -> &IndexMap<&'a str, Option<&'a Node>> {
        &self.variables
    }
}

/// Binds everything one validation pass needs: the (optional) registry,
/// the document, the cursor, and the append-only error sink, plus lazily
/// computed, memoized-for-context-lifetime document facts.
///
/// A context is single-use and confined to one thread; all interior
/// mutability stays inside the instance, so validating independent
/// documents concurrently is safe.
pub struct ValidationContext<'a> {
    document: &'a Node,
    errors: RefCell<Vec<ValidationError>>,
    fragment_cycles: OnceCell<Vec<FragmentCycle<'a>>>,
    fragment_signatures: OnceCell<HashMap<&'a str, FragmentSignature<'a>>>,
    fragments: OnceCell<IndexMap<&'a str, &'a Node>>,
    recursive_usages: RefCell<HashMap<NodeKey, Rc<Vec<VariableUsage<'a>>>>>,
    referenced_fragments: RefCell<HashMap<NodeKey, Rc<Vec<&'a Node>>>>,
    schema: Option<&'a Schema>,
    spreads: RefCell<HashMap<NodeKey, Rc<Vec<&'a Node>>>>,
    type_info: Option<RefCell<TypeInfo<'a>>>,
    usages: RefCell<HashMap<NodeKey, Rc<Vec<VariableUsage<'a>>>>>,
}

impl<'a> ValidationContext<'a> {
    pub(crate) fn for_document(
        schema: &'a Schema,
        document: &'a Node,
    ) -> Self {
        Self {
            document,
            errors: RefCell::new(vec![]),
            fragment_cycles: OnceCell::new(),
            fragment_signatures: OnceCell::new(),
            fragments: OnceCell::new(),
            recursive_usages: RefCell::new(HashMap::new()),
            referenced_fragments: RefCell::new(HashMap::new()),
            schema: Some(schema),
            spreads: RefCell::new(HashMap::new()),
            type_info: Some(RefCell::new(TypeInfo::new(schema))),
            usages: RefCell::new(HashMap::new()),
        }
    }

    pub(crate) fn for_sdl(
        document: &'a Node,
        existing_schema: Option<&'a Schema>,
    ) -> Self {
        Self {
            document,
            errors: RefCell::new(vec![]),
            fragment_cycles: OnceCell::new(),
            fragment_signatures: OnceCell::new(),
            fragments: OnceCell::new(),
            recursive_usages: RefCell::new(HashMap::new()),
            referenced_fragments: RefCell::new(HashMap::new()),
            schema: existing_schema,
            spreads: RefCell::new(HashMap::new()),
            type_info: None,
            usages: RefCell::new(HashMap::new()),
        }
    }

    pub fn schema(&self) -> Option<&'a Schema> {
        self.schema
    }

    pub fn document(&self) -> &'a Node {
        self.document
    }

    pub(crate) fn type_info_cell(&self) -> Option<&RefCell<TypeInfo<'a>>> {
        self.type_info.as_ref()
    }

    // ---------------------------------------------------------
    // Error sink
    // ---------------------------------------------------------

    /// Append an error to the sink. The sink is append-only; duplicates
    /// reported by independent rules are all retained.
    pub fn report(&self, error: ValidationError) {
        self.errors.borrow_mut().push(error);
    }

    pub fn error_count(&self) -> usize {
        self.errors.borrow().len()
    }

    pub(crate) fn take_errors(&self) -> Vec<ValidationError> {
        self.errors.take()
    }

    // ---------------------------------------------------------
    // Cursor proxies
    // ---------------------------------------------------------

    pub fn current_type(&self) -> Option<&'a TypeDefinition> {
        self.type_info.as_ref()?.borrow().current_type()
    }

    pub fn parent_type(&self) -> Option<&'a TypeDefinition> {
        self.type_info.as_ref()?.borrow().parent_type()
    }

    pub fn input_type(&self) -> Option<TypeAnnotation> {
        self.type_info.as_ref()?.borrow().input_type().cloned()
    }

    pub fn parent_input_type(&self) -> Option<TypeAnnotation> {
        self.type_info
            .as_ref()?
            .borrow()
            .parent_input_type()
            .cloned()
    }

    pub fn field_def(&self) -> Option<&'a FieldDefinition> {
        self.type_info.as_ref()?.borrow().field_def()
    }

    pub fn directive_def(&self) -> Option<&'a DirectiveDefinition> {
        self.type_info.as_ref()?.borrow().directive_def()
    }

    pub fn argument_def(&self) -> Option<&'a Parameter> {
        self.type_info.as_ref()?.borrow().argument_def()
    }

    pub fn default_value(&self) -> Option<&'a Value> {
        self.type_info.as_ref()?.borrow().default_value()
    }

    pub fn enum_value(&self) -> Option<&'a EnumValueDefinition> {
        self.type_info.as_ref()?.borrow().enum_value()
    }

    // ---------------------------------------------------------
    // Fragment facts
    // ---------------------------------------------------------

    /// Fragment-name to fragment-definition map, built in one pass over
    /// the document's definitions. The first definition wins for a
    /// duplicated name.
    pub fn fragments(&self) -> &IndexMap<&'a str, &'a Node> {
        self.fragments.get_or_init(|| {
            let mut fragments = IndexMap::new();
            for def in self.document.child_list("definitions") {
                if def.kind() != NodeKind::FragmentDefinition {
                    continue;
                }
                if let Some(name) = def.name_value() {
                    fragments.entry(name).or_insert(def);
                }
            }
            fragments
        })
    }

    pub fn fragment(&self, name: &str) -> Option<&'a Node> {
        self.fragments().get(name).copied()
    }

    /// Every fragment spread contained in `selection_set`, including
    /// those in nested selection sets (without following the spreads
    /// themselves).
    pub fn fragment_spreads(
        &self,
        selection_set: &'a Node,
    ) -> Rc<Vec<&'a Node>> {
        if let Some(cached) =
            self.spreads.borrow().get(&NodeKey::of(selection_set))
        {
            return Rc::clone(cached);
        }
        let mut found = vec![];
        let mut sets_to_visit = vec![selection_set];
        while let Some(set) = sets_to_visit.pop() {
            for selection in set.child_list("selections") {
                match selection.kind() {
                    NodeKind::FragmentSpread => found.push(selection),
                    _ => {
                        if let Some(nested) = selection.child("selectionSet")
                        {
                            sets_to_visit.push(nested);
                        }
                    },
                }
            }
        }
        let found = Rc::new(found);
        self.spreads
            .borrow_mut()
            .insert(NodeKey::of(selection_set), Rc::clone(&found));
        found
    }

    /// Every fragment definition reachable from `operation` through
    /// fragment spreads, transitively, in discovery order. Bounded by a
    /// visited set, so spread cycles terminate.
    pub fn recursively_referenced_fragments(
        &self,
        operation: &'a Node,
    ) -> Rc<Vec<&'a Node>> {
        if let Some(cached) =
            self.referenced_fragments.borrow().get(&NodeKey::of(operation))
        {
            return Rc::clone(cached);
        }
        let mut collected_names = HashSet::new();
        let mut fragments = vec![];
        let mut sets_to_visit: Vec<&'a Node> =
            operation.child("selectionSet").into_iter().collect();
        while let Some(set) = sets_to_visit.pop() {
            for &spread in self.fragment_spreads(set).iter() {
                let Some(name) = spread.name_value() else {
                    continue;
                };
                if !collected_names.insert(name) {
                    continue;
                }
                if let Some(fragment) = self.fragment(name) {
                    fragments.push(fragment);
                    if let Some(nested) = fragment.child("selectionSet") {
                        sets_to_visit.push(nested);
                    }
                }
            }
        }
        let fragments = Rc::new(fragments);
        self.referenced_fragments
            .borrow_mut()
            .insert(NodeKey::of(operation), Rc::clone(&fragments));
        fragments
    }

    // ---------------------------------------------------------
    // Variable usages
    // ---------------------------------------------------------

    /// The ordered variable usages that occur directly inside `node` (an
    /// operation or fragment definition).
    pub fn variable_usages(
        &self,
        node: &'a Node,
    ) -> Rc<Vec<VariableUsage<'a>>> {
        if let Some(cached) = self.usages.borrow().get(&NodeKey::of(node)) {
            return Rc::clone(cached);
        }
        let usages = Rc::new(self.collect_usages(node));
        self.usages
            .borrow_mut()
            .insert(NodeKey::of(node), Rc::clone(&usages));
        usages
    }

    /// The variable usages of `operation` plus those inherited
    /// transitively through reachable fragment spreads. Usages bound by a
    /// fragment's explicit signature stay local to that fragment.
    pub fn recursive_variable_usages(
        &self,
        operation: &'a Node,
    ) -> Rc<Vec<VariableUsage<'a>>> {
        if let Some(cached) =
            self.recursive_usages.borrow().get(&NodeKey::of(operation))
        {
            return Rc::clone(cached);
        }
        let mut usages = self.variable_usages(operation).as_ref().clone();
        for &fragment in
            self.recursively_referenced_fragments(operation).iter()
        {
            let signature = fragment
                .name_value()
                .and_then(|name| self.fragment_signature(name))
                .filter(|signature| signature.is_explicit());
            for usage in self.variable_usages(fragment).iter() {
                let locally_bound = match (signature, usage.variable.name_value()) {
                    (Some(signature), Some(name)) => signature.defines(name),
                    _ => false,
                };
                if !locally_bound {
                    usages.push(usage.clone());
                }
            }
        }
        let usages = Rc::new(usages);
        self.recursive_usages
            .borrow_mut()
            .insert(NodeKey::of(operation), Rc::clone(&usages));
        usages
    }

    fn collect_usages(&self, root: &'a Node) -> Vec<VariableUsage<'a>> {
        struct UsageCollector<'t, 'a> {
            type_info: Option<&'t RefCell<TypeInfo<'a>>>,
            usages: Vec<VariableUsage<'a>>,
        }
        impl<'a> Visitor<'a> for UsageCollector<'_, 'a> {
            fn enter(
                &mut self,
                node: &'a Node,
                _path: &[PathStep],
                _ancestors: &[&'a Node],
            ) -> Control {
                match node.kind() {
                    // Variables inside a variable definition (its default
                    // value) are not usages.
                    NodeKind::VariableDefinition => Control::SkipSubtree,
                    NodeKind::Variable => {
                        let (expected_type, default_value) =
                            match self.type_info {
                                Some(type_info) => {
                                    let type_info = type_info.borrow();
                                    (
                                        type_info.input_type().cloned(),
                                        type_info.default_value(),
                                    )
                                },
                                None => (None, None),
                            };
                        self.usages.push(VariableUsage {
                            variable: node,
                            expected_type,
                            default_value,
                        });
                        Control::Continue
                    },
                    _ => Control::Continue,
                }
            }
        }

        // A fresh cursor per sub-walk: the main traversal's cursor is
        // positioned at whatever node triggered this computation.
        let fresh_type_info =
            self.schema.map(|schema| RefCell::new(TypeInfo::new(schema)));
        let mut visitor = TypeInfoVisitor {
            type_info: fresh_type_info.as_ref(),
            inner: UsageCollector {
                type_info: fresh_type_info.as_ref(),
                usages: vec![],
            },
        };
        walk(root, &mut visitor);
        visitor.inner.usages
    }

    // ---------------------------------------------------------
    // Fragment signatures
    // ---------------------------------------------------------

    /// The effective signature of the named fragment, if the fragment
    /// exists.
    pub fn fragment_signature(
        &self,
        name: &str,
    ) -> Option<&FragmentSignature<'a>> {
        self.fragment_signatures
            .get_or_init(|| {
                let mut signatures = HashMap::new();
                for (name, &fragment) in self.fragments() {
                    signatures
                        .insert(*name, self.compute_signature(fragment));
                }
                signatures
            })
            .get(name)
    }

    fn compute_signature(
        &self,
        fragment: &'a Node,
    ) -> FragmentSignature<'a> {
        let explicit_defs = fragment.child_list("variableDefinitions");
        if !explicit_defs.is_empty() {
            let variables = explicit_defs
                .iter()
                .filter_map(|def| {
                    let name = def.child("variable")?.name_value()?;
                    Some((name, Some(def)))
                })
                .collect();
            return FragmentSignature {
                explicit: true,
                variables,
            };
        }

        // No explicit signature: the free variables of the body, in
        // first-use order.
        let mut variables = IndexMap::new();
        for usage in self.variable_usages(fragment).iter() {
            if let Some(name) = usage.variable.name_value() {
                variables.entry(name).or_insert(None);
            }
        }
        FragmentSignature {
            explicit: false,
            variables,
        }
    }

    // ---------------------------------------------------------
    // Fragment cycles
    // ---------------------------------------------------------

    /// Every distinct cycle in the fragment-spread graph, each reported
    /// exactly once. Depth-first over the spread graph with an explicit
    /// visited-ancestor index; revisiting an ancestor records a cycle and
    /// halts expansion along that path.
    pub fn fragment_cycles(&self) -> &[FragmentCycle<'a>] {
        self.fragment_cycles.get_or_init(|| {
            let mut cycles = vec![];
            let mut visited = HashSet::new();
            let mut spread_path = vec![];
            let mut path_index_by_name = HashMap::new();
            for &fragment in self.fragments().values() {
                self.detect_cycles(
                    fragment,
                    &mut spread_path,
                    &mut path_index_by_name,
                    &mut visited,
                    &mut cycles,
                );
            }
            cycles
        })
    }

    fn detect_cycles(
        &self,
        fragment: &'a Node,
        spread_path: &mut Vec<&'a Node>,
        path_index_by_name: &mut HashMap<&'a str, usize>,
        visited: &mut HashSet<&'a str>,
        cycles: &mut Vec<FragmentCycle<'a>>,
    ) {
        let Some(fragment_name) = fragment.name_value() else {
            return;
        };
        if !visited.insert(fragment_name) {
            return;
        }
        let Some(selection_set) = fragment.child("selectionSet") else {
            return;
        };
        path_index_by_name.insert(fragment_name, spread_path.len());
        for &spread in self.fragment_spreads(selection_set).iter() {
            let Some(spread_name) = spread.name_value() else {
                continue;
            };
            spread_path.push(spread);
            match path_index_by_name.get(spread_name).copied() {
                Some(cycle_index) => {
                    cycles.push(FragmentCycle {
                        spreads: spread_path[cycle_index..].to_vec(),
                    });
                },
                None => {
                    if !visited.contains(spread_name) {
                        if let Some(target) = self.fragment(spread_name) {
                            self.detect_cycles(
                                target,
                                spread_path,
                                path_index_by_name,
                                visited,
                                cycles,
                            );
                        }
                    }
                },
            }
            spread_path.pop();
        }
        path_index_by_name.remove(fragment_name);
    }
}
