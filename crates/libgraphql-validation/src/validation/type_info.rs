use crate::ast::Node;
use crate::ast::NodeKind;
use crate::schema::builtins::BUILTIN_DIRECTIVES;
use crate::schema::builtins::SCHEMA_META_FIELD;
use crate::schema::builtins::TYPENAME_META_FIELD;
use crate::schema::builtins::TYPE_META_FIELD;
use crate::schema::DirectiveDefinition;
use crate::schema::EnumValueDefinition;
use crate::schema::FieldDefinition;
use crate::schema::Parameter;
use crate::schema::Schema;
use crate::schema::TypeAnnotation;
use crate::schema::TypeDefinition;
use crate::schema::Value;
use crate::visit::Control;
use crate::visit::PathStep;
use crate::visit::Visitor;
use std::cell::RefCell;

/// The type-inference cursor.
///
/// One explicit stack per tracked fact, each pushed unconditionally when a
/// relevant node is entered and popped when it is left; `None` is the
/// explicit "unknown" placeholder, so stack depth always matches tree
/// depth for the kinds a stack tracks. Accessors read the top of the
/// matching stack and never fail: an unresolved name is `None`, which
/// quietly suppresses deeper inference along that path.
pub struct TypeInfo<'a> {
    schema: &'a Schema,
    argument_stack: Vec<Option<&'a Parameter>>,
    default_value_stack: Vec<Option<&'a Value>>,
    directive_stack: Vec<Option<&'a DirectiveDefinition>>,
    enum_value_stack: Vec<Option<&'a EnumValueDefinition>>,
    field_def_stack: Vec<Option<&'a FieldDefinition>>,
    input_type_stack: Vec<Option<TypeAnnotation>>,
    parent_type_stack: Vec<Option<&'a TypeDefinition>>,
    type_stack: Vec<Option<&'a TypeDefinition>>,
}

impl<'a> TypeInfo<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            argument_stack: vec![],
            default_value_stack: vec![],
            directive_stack: vec![],
            enum_value_stack: vec![],
            field_def_stack: vec![],
            input_type_stack: vec![],
            parent_type_stack: vec![],
            type_stack: vec![],
        }
    }

    /// The named (unwrapped) type of the current output position.
    pub fn current_type(&self) -> Option<&'a TypeDefinition> {
        self.type_stack.last().copied().flatten()
    }

    /// The composite type enclosing the current selection.
    pub fn parent_type(&self) -> Option<&'a TypeDefinition> {
        self.parent_type_stack.last().copied().flatten()
    }

    /// The expected (wrapped) type of the current input position.
    pub fn input_type(&self) -> Option<&TypeAnnotation> {
        self.input_type_stack.last().and_then(Option::as_ref)
    }

    /// The expected type one input position up (e.g. the input object type
    /// enclosing the current object field).
    pub fn parent_input_type(&self) -> Option<&TypeAnnotation> {
        let depth = self.input_type_stack.len().checked_sub(2)?;
        self.input_type_stack.get(depth).and_then(Option::as_ref)
    }

    pub fn field_def(&self) -> Option<&'a FieldDefinition> {
        self.field_def_stack.last().copied().flatten()
    }

    pub fn directive_def(&self) -> Option<&'a DirectiveDefinition> {
        self.directive_stack.last().copied().flatten()
    }

    pub fn argument_def(&self) -> Option<&'a Parameter> {
        self.argument_stack.last().copied().flatten()
    }

    /// The declared default of the current argument or input-field
    /// position.
    pub fn default_value(&self) -> Option<&'a Value> {
        self.default_value_stack.last().copied().flatten()
    }

    pub fn enum_value(&self) -> Option<&'a EnumValueDefinition> {
        self.enum_value_stack.last().copied().flatten()
    }

    pub fn enter(&mut self, node: &'a Node) {
        match node.kind() {
            NodeKind::SelectionSet => {
                let named = self.current_type();
                self.parent_type_stack.push(
                    named.filter(|type_def| type_def.is_composite()),
                );
            },
            NodeKind::Field => {
                let field_def = match (self.parent_type(), node.name_value())
                {
                    (Some(parent), Some(name)) =>
                        self.resolve_field(parent, name),
                    _ => None,
                };
                let field_type = field_def.and_then(|def| {
                    self.schema
                        .type_def(def.type_annotation().innermost_name())
                });
                self.field_def_stack.push(field_def);
                self.type_stack.push(
                    field_type.filter(|type_def| type_def.is_output_type()),
                );
            },
            NodeKind::Directive => {
                let directive = node.name_value().and_then(|name| {
                    self.schema
                        .directive(name)
                        .or_else(|| BUILTIN_DIRECTIVES.get(name))
                });
                self.directive_stack.push(directive);
            },
            NodeKind::OperationDefinition => {
                let root_type = node
                    .operation_kind()
                    .and_then(|kind| self.schema.root_operation_type(kind));
                self.type_stack.push(root_type.filter(|type_def| {
                    matches!(type_def, TypeDefinition::Object(_))
                }));
            },
            NodeKind::InlineFragment | NodeKind::FragmentDefinition => {
                let condition_type = match node.child("typeCondition") {
                    Some(condition) => condition
                        .name_value()
                        .and_then(|name| self.schema.type_def(name)),
                    None => self.current_type(),
                };
                self.type_stack.push(
                    condition_type
                        .filter(|type_def| type_def.is_output_type()),
                );
            },
            NodeKind::VariableDefinition => {
                let annotation = node
                    .child("type")
                    .and_then(TypeAnnotation::from_type_node);
                self.input_type_stack
                    .push(annotation.filter(|ann| self.is_input(ann)));
            },
            NodeKind::Argument => {
                let argument_def = match (
                    self.directive_def()
                        .map(DirectiveDefinition::parameters)
                        .or_else(|| {
                            self.field_def()
                                .map(FieldDefinition::parameters)
                        }),
                    node.name_value(),
                ) {
                    (Some(parameters), Some(name)) => parameters.get(name),
                    _ => None,
                };
                self.argument_stack.push(argument_def);
                self.default_value_stack
                    .push(argument_def.and_then(Parameter::default_value));
                self.input_type_stack.push(
                    argument_def
                        .map(|def| def.type_annotation().clone())
                        .filter(|ann| self.is_input(ann)),
                );
            },
            NodeKind::ListValue => {
                let item_type = self.input_type().map(|expected| {
                    match expected.as_list_annotation() {
                        Some(list) => list.inner().clone(),
                        // A non-list expected type flows through so
                        // single-value list coercion still infers items.
                        None => expected.clone(),
                    }
                });
                self.default_value_stack.push(None);
                self.input_type_stack.push(item_type);
            },
            NodeKind::ObjectField => {
                let input_field = match (
                    self.named_input_type()
                        .and_then(TypeDefinition::as_input_object),
                    node.name_value(),
                ) {
                    (Some(input_object), Some(name)) =>
                        input_object.field(name),
                    _ => None,
                };
                self.default_value_stack
                    .push(input_field.and_then(Parameter::default_value));
                self.input_type_stack.push(
                    input_field
                        .map(|def| def.type_annotation().clone())
                        .filter(|ann| self.is_input(ann)),
                );
            },
            NodeKind::EnumValue => {
                let enum_value = match (
                    self.named_input_type()
                        .and_then(TypeDefinition::as_enum),
                    node.value(),
                ) {
                    (Some(enum_type), Some(value)) =>
                        enum_type.value(value),
                    _ => None,
                };
                self.enum_value_stack.push(enum_value);
            },
            _ => {},
        }
    }

    pub fn leave(&mut self, node: &Node) {
        match node.kind() {
            NodeKind::SelectionSet => {
                self.parent_type_stack.pop();
            },
            NodeKind::Field => {
                self.field_def_stack.pop();
                self.type_stack.pop();
            },
            NodeKind::Directive => {
                self.directive_stack.pop();
            },
            NodeKind::OperationDefinition
                | NodeKind::InlineFragment
                | NodeKind::FragmentDefinition => {
                self.type_stack.pop();
            },
            NodeKind::VariableDefinition => {
                self.input_type_stack.pop();
            },
            NodeKind::Argument => {
                self.argument_stack.pop();
                self.default_value_stack.pop();
                self.input_type_stack.pop();
            },
            NodeKind::ListValue | NodeKind::ObjectField => {
                self.default_value_stack.pop();
                self.input_type_stack.pop();
            },
            NodeKind::EnumValue => {
                self.enum_value_stack.pop();
            },
            _ => {},
        }
    }

    // The named type definition behind the current expected input type.
    fn named_input_type(&self) -> Option<&'a TypeDefinition> {
        let name = self.input_type()?.innermost_name();
        self.schema.type_def(name)
    }

    fn is_input(&self, annotation: &TypeAnnotation) -> bool {
        self.schema
            .type_def(annotation.innermost_name())
            .is_some_and(|type_def| type_def.is_input_type())
    }

    // Field resolution, including the introspection meta-fields:
    // `__typename` resolves on any composite type and `__schema`/`__type`
    // on the query root only, even though none appear in a type's own
    // field map.
    fn resolve_field(
        &self,
        parent: &'a TypeDefinition,
        name: &str,
    ) -> Option<&'a FieldDefinition> {
        match name {
            "__typename" if parent.is_composite() =>
                Some(&TYPENAME_META_FIELD),
            "__schema" if self.is_query_root(parent) =>
                Some(&SCHEMA_META_FIELD),
            "__type" if self.is_query_root(parent) =>
                Some(&TYPE_META_FIELD),
            _ => parent.field(name),
        }
    }

    fn is_query_root(&self, type_def: &TypeDefinition) -> bool {
        self.schema
            .query_type()
            .is_some_and(|query_type| query_type.name() == type_def.name())
    }
}

/// Advances a [`TypeInfo`] cursor around an inner visitor: the cursor is
/// updated before the inner `enter` and after the inner `leave`, so hooks
/// always observe the fully entered state of the node they are visiting.
///
/// With no cursor attached (SDL validation) this is a transparent
/// pass-through.
pub(crate) struct TypeInfoVisitor<'t, 'a, V> {
    pub(crate) type_info: Option<&'t RefCell<TypeInfo<'a>>>,
    pub(crate) inner: V,
}

impl<'a, V: Visitor<'a>> Visitor<'a> for TypeInfoVisitor<'_, 'a, V> {
    fn enter(
        &mut self,
        node: &'a Node,
        path: &[PathStep],
        ancestors: &[&'a Node],
    ) -> Control {
        if let Some(type_info) = self.type_info {
            type_info.borrow_mut().enter(node);
        }
        self.inner.enter(node, path, ancestors)
    }

    fn leave(
        &mut self,
        node: &'a Node,
        path: &[PathStep],
        ancestors: &[&'a Node],
    ) -> Control {
        let control = self.inner.leave(node, path, ancestors);
        if let Some(type_info) = self.type_info {
            type_info.borrow_mut().leave(node);
        }
        control
    }
}
