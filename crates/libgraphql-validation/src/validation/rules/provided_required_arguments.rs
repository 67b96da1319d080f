use crate::ast::Node;
use crate::ast::NodeKind;
use crate::schema::builtins::BUILTIN_DIRECTIVES;
use crate::schema::Parameter;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visit::Control;
use crate::visit::PathStep;
use std::collections::HashMap;
use std::collections::HashSet;

/// A required argument is one with a non-null declared type and no
/// default value. Its definition may live in the registry or, for
/// directives, in the document itself.
enum RequiredArgument<'a> {
    Ast(&'a Node),
    Registry(&'a Parameter),
}

impl RequiredArgument<'_> {
    fn type_display(&self) -> String {
        match self {
            RequiredArgument::Ast(input_value_def) => input_value_def
                .child("type")
                .map(type_node_display)
                .unwrap_or_default(),
            RequiredArgument::Registry(parameter) =>
                parameter.type_annotation().to_string(),
        }
    }
}

// Required arguments per known directive, gathered from the registry (or
// the built-in set) overlaid with the document's own directive
// definitions.
fn directive_required_arguments<'a>(
    ctx: &ValidationContext<'a>,
) -> HashMap<&'a str, Vec<(&'a str, RequiredArgument<'a>)>> {
    let mut required_by_directive: HashMap<
        &'a str,
        Vec<(&'a str, RequiredArgument<'a>)>,
    > = HashMap::new();

    let registry_directives = match ctx.schema() {
        Some(schema) => schema.directives(),
        None => &*BUILTIN_DIRECTIVES,
    };
    for (directive_name, directive_def) in registry_directives {
        required_by_directive.insert(
            directive_name.as_str(),
            directive_def
                .parameters()
                .iter()
                .filter(|(_, parameter)| parameter.is_required())
                .map(|(parameter_name, parameter)| {
                    (
                        parameter_name.as_str(),
                        RequiredArgument::Registry(parameter),
                    )
                })
                .collect(),
        );
    }

    for def in ctx.document().child_list("definitions") {
        if def.kind() != NodeKind::DirectiveDefinition {
            continue;
        }
        let Some(directive_name) = def.name_value() else {
            continue;
        };
        required_by_directive.insert(
            directive_name,
            def.child_list("arguments")
                .iter()
                .filter(|arg| is_required_argument_node(arg))
                .filter_map(|arg| {
                    Some((arg.name_value()?, RequiredArgument::Ast(arg)))
                })
                .collect(),
        );
    }

    required_by_directive
}

fn is_required_argument_node(input_value_def: &Node) -> bool {
    input_value_def
        .child("type")
        .is_some_and(|type_node| type_node.kind() == NodeKind::NonNullType)
        && input_value_def.child("defaultValue").is_none()
}

fn provided_argument_names<'a>(node: &'a Node) -> HashSet<&'a str> {
    node.child_list("arguments")
        .iter()
        .filter_map(Node::name_value)
        .collect()
}

fn type_node_display(type_node: &Node) -> String {
    match type_node.kind() {
        NodeKind::NamedType =>
            type_node.name_value().unwrap_or_default().to_string(),
        NodeKind::ListType => format!(
            "[{}]",
            type_node
                .child("type")
                .map(type_node_display)
                .unwrap_or_default(),
        ),
        NodeKind::NonNullType => format!(
            "{}!",
            type_node
                .child("type")
                .map(type_node_display)
                .unwrap_or_default(),
        ),
        _ => String::new(),
    }
}

/// The directive half of required-argument checking: on leaving a
/// directive usage (leave, so deeper errors surface first), every
/// required argument of its definition must have been provided. Needs no
/// registry, so it also serves the SDL rule set.
pub(crate) struct ProvidedRequiredArgumentsOnDirectives<'a> {
    required_by_directive:
        HashMap<&'a str, Vec<(&'a str, RequiredArgument<'a>)>>,
}

pub(crate) fn directives_only_factory<'a>(
    ctx: &ValidationContext<'a>,
) -> Box<dyn Rule<'a> + 'a> {
    Box::new(ProvidedRequiredArgumentsOnDirectives {
        required_by_directive: directive_required_arguments(ctx),
    })
}

impl<'a> ProvidedRequiredArgumentsOnDirectives<'a> {
    fn check_directive(
        &self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
    ) {
        let Some(directive_name) = node.name_value() else {
            return;
        };
        let Some(required) = self.required_by_directive.get(directive_name)
        else {
            return;
        };
        let provided = provided_argument_names(node);
        for (argument_name, argument) in required {
            if provided.contains(argument_name) {
                continue;
            }
            ctx.report(ValidationError::type_violation(
                format!(
                    "Argument \"@{directive_name}({argument_name}:)\" of \
                     type \"{}\" is required, but it was not provided.",
                    argument.type_display(),
                ),
                &[node],
            ));
        }
    }
}

impl<'a> Rule<'a> for ProvidedRequiredArgumentsOnDirectives<'a> {
    fn leave(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        _path: &[PathStep],
        _ancestors: &[&'a Node],
    ) -> Control {
        if node.kind() == NodeKind::Directive {
            self.check_directive(ctx, node);
        }
        Control::Continue
    }
}

/// Full required-argument checking: fields and fragment spreads with
/// explicit signatures, composed with the directive half above.
pub(crate) struct ProvidedRequiredArguments<'a> {
    directives: ProvidedRequiredArgumentsOnDirectives<'a>,
}

pub(crate) fn factory<'a>(
    ctx: &ValidationContext<'a>,
) -> Box<dyn Rule<'a> + 'a> {
    Box::new(ProvidedRequiredArguments {
        directives: ProvidedRequiredArgumentsOnDirectives {
            required_by_directive: directive_required_arguments(ctx),
        },
    })
}

impl<'a> ProvidedRequiredArguments<'a> {
    fn check_field(&self, ctx: &ValidationContext<'a>, node: &'a Node) {
        let Some(field_def) = ctx.field_def() else {
            return;
        };
        let provided = provided_argument_names(node);
        for (parameter_name, parameter) in field_def.parameters() {
            if !parameter.is_required()
                || provided.contains(parameter_name.as_str())
            {
                continue;
            }
            // Meta-fields have no parent type to name in the message.
            let host_prefix = if field_def.name().starts_with("__") {
                "<meta>.".to_string()
            } else {
                match ctx.parent_type() {
                    Some(parent_type) => format!("{}.", parent_type.name()),
                    None => String::new(),
                }
            };
            ctx.report(ValidationError::type_violation(
                format!(
                    "Argument \"{host_prefix}{}({parameter_name}:)\" of \
                     type \"{}\" is required, but it was not provided.",
                    field_def.name(),
                    parameter.type_annotation(),
                ),
                &[node],
            ));
        }
    }

    fn check_fragment_spread(
        &self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
    ) {
        let Some(spread_name) = node.name_value() else {
            return;
        };
        let Some(signature) = ctx.fragment_signature(spread_name) else {
            return;
        };
        if !signature.is_explicit() {
            return;
        }
        let provided = provided_argument_names(node);
        for (variable_name, variable_def) in
            signature.variable_definitions()
        {
            let Some(&variable_def) = variable_def.as_ref() else {
                continue;
            };
            if !is_required_argument_node(variable_def)
                || provided.contains(variable_name)
            {
                continue;
            }
            let type_display = variable_def
                .child("type")
                .map(type_node_display)
                .unwrap_or_default();
            ctx.report(ValidationError::type_violation(
                format!(
                    "Fragment \"{spread_name}\" argument \
                     \"{variable_name}\" of type \"{type_display}\" is \
                     required, but it was not provided.",
                ),
                &[node],
            ));
        }
    }
}

impl<'a> Rule<'a> for ProvidedRequiredArguments<'a> {
    fn leave(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        _path: &[PathStep],
        _ancestors: &[&'a Node],
    ) -> Control {
        // Validate on leave so deeper errors surface first.
        match node.kind() {
            NodeKind::Directive => self.directives.check_directive(ctx, node),
            NodeKind::Field => self.check_field(ctx, node),
            NodeKind::FragmentSpread =>
                self.check_fragment_spread(ctx, node),
            _ => {},
        }
        Control::Continue
    }
}
