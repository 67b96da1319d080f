use crate::ast::Node;
use crate::ast::NodeKind;
use crate::schema::TypeAnnotation;
use crate::schema::TypeDefinition;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visit::Control;
use crate::visit::PathStep;

/// Literal values must be compatible with the input type expected at
/// their position: no `null` against a non-null type, scalar literals of
/// the matching kind, known enum values, and known/complete input object
/// fields. Positions with an unknown expected type are skipped entirely;
/// a single unresolved name never cascades.
pub(crate) struct ValuesOfCorrectType;

pub(crate) fn factory<'a>(
    _ctx: &ValidationContext<'a>,
) -> Box<dyn Rule<'a> + 'a> {
    Box::new(ValuesOfCorrectType)
}

impl<'a> Rule<'a> for ValuesOfCorrectType {
    fn enter(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        _path: &[PathStep],
        _ancestors: &[&'a Node],
    ) -> Control {
        match node.kind() {
            NodeKind::NullValue => {
                if let Some(expected) = ctx.input_type() {
                    if !expected.nullable() {
                        ctx.report(ValidationError::type_violation(
                            format!(
                                "Expected value of type \"{expected}\", \
                                 found null.",
                            ),
                            &[node],
                        ));
                    }
                }
            },
            NodeKind::IntValue
                | NodeKind::FloatValue
                | NodeKind::StringValue
                | NodeKind::BooleanValue => {
                check_scalar_literal(ctx, node);
            },
            NodeKind::EnumValue => {
                check_enum_literal(ctx, node);
            },
            NodeKind::ListValue => {
                check_list_literal(ctx, node);
            },
            NodeKind::ObjectValue => {
                check_object_literal(ctx, node);
            },
            NodeKind::ObjectField => {
                check_object_field(ctx, node);
            },
            _ => {},
        }
        Control::Continue
    }
}

fn named_expected_type<'a>(
    ctx: &ValidationContext<'a>,
    expected: &TypeAnnotation,
) -> Option<&'a TypeDefinition> {
    ctx.schema()?.type_def(expected.innermost_name())
}

fn report_mismatch(
    ctx: &ValidationContext<'_>,
    expected: &TypeAnnotation,
    node: &Node,
) {
    ctx.report(ValidationError::type_violation(
        format!(
            "Expected value of type \"{expected}\", found {}.",
            print_value(node),
        ),
        &[node],
    ));
}

fn check_scalar_literal<'a>(ctx: &ValidationContext<'a>, node: &'a Node) {
    let Some(expected) = ctx.input_type() else {
        return;
    };
    let Some(named) = named_expected_type(ctx, &expected) else {
        return;
    };
    let compatible = match named {
        // Custom scalars accept any literal form.
        TypeDefinition::Scalar(_) => true,
        TypeDefinition::Bool => node.kind() == NodeKind::BooleanValue,
        TypeDefinition::Float => matches!(
            node.kind(),
            NodeKind::IntValue | NodeKind::FloatValue,
        ),
        TypeDefinition::ID => matches!(
            node.kind(),
            NodeKind::IntValue | NodeKind::StringValue,
        ),
        TypeDefinition::Int => node.kind() == NodeKind::IntValue,
        TypeDefinition::String => node.kind() == NodeKind::StringValue,
        // A scalar literal can never satisfy an enum, input object, or
        // (invalidly referenced) composite type.
        _ => false,
    };
    if !compatible {
        report_mismatch(ctx, &expected, node);
    }
}

fn check_enum_literal<'a>(ctx: &ValidationContext<'a>, node: &'a Node) {
    let Some(expected) = ctx.input_type() else {
        return;
    };
    let Some(named) = named_expected_type(ctx, &expected) else {
        return;
    };
    match named {
        TypeDefinition::Enum(enum_type) => {
            let Some(value) = node.value() else {
                return;
            };
            if enum_type.value(value).is_none() {
                ctx.report(ValidationError::type_violation(
                    format!(
                        "Value \"{value}\" does not exist in \"{}\" enum.",
                        named.name(),
                    ),
                    &[node],
                ));
            }
        },
        TypeDefinition::Scalar(_) => {},
        _ => report_mismatch(ctx, &expected, node),
    }
}

fn check_list_literal<'a>(ctx: &ValidationContext<'a>, node: &'a Node) {
    let Some(expected) = ctx.input_type() else {
        return;
    };
    if expected.as_list_annotation().is_some() {
        return;
    }
    // A list literal against a non-list leaf type cannot coerce (custom
    // scalars excepted).
    let Some(named) = named_expected_type(ctx, &expected) else {
        return;
    };
    if named.is_leaf() && !matches!(named, TypeDefinition::Scalar(_)) {
        report_mismatch(ctx, &expected, node);
    }
}

fn check_object_literal<'a>(ctx: &ValidationContext<'a>, node: &'a Node) {
    let Some(expected) = ctx.input_type() else {
        return;
    };
    let Some(named) = named_expected_type(ctx, &expected) else {
        return;
    };
    let Some(input_object) = named.as_input_object() else {
        if named.is_leaf() && !matches!(named, TypeDefinition::Scalar(_)) {
            report_mismatch(ctx, &expected, node);
        }
        return;
    };

    let provided: Vec<&str> = node
        .child_list("fields")
        .iter()
        .filter_map(Node::name_value)
        .collect();
    for (field_name, field_def) in input_object.fields() {
        if field_def.is_required()
            && !provided.contains(&field_name.as_str())
        {
            ctx.report(ValidationError::type_violation(
                format!(
                    "Field \"{}.{field_name}\" of required type \"{}\" \
                     was not provided.",
                    named.name(),
                    field_def.type_annotation(),
                ),
                &[node],
            ));
        }
    }
}

fn check_object_field<'a>(ctx: &ValidationContext<'a>, node: &'a Node) {
    let Some(parent_expected) = ctx.parent_input_type() else {
        return;
    };
    let Some(parent_named) = named_expected_type(ctx, &parent_expected)
    else {
        return;
    };
    let Some(input_object) = parent_named.as_input_object() else {
        return;
    };
    let Some(field_name) = node.name_value() else {
        return;
    };
    if input_object.field(field_name).is_none() {
        ctx.report(ValidationError::type_violation(
            format!(
                "Field \"{field_name}\" is not defined by type \"{}\".",
                parent_named.name(),
            ),
            &[node],
        ));
    }
}

// Minimal literal printer for error messages.
fn print_value(node: &Node) -> String {
    match node.kind() {
        NodeKind::IntValue
            | NodeKind::FloatValue
            | NodeKind::BooleanValue
            | NodeKind::EnumValue =>
            node.value().unwrap_or_default().to_string(),
        NodeKind::StringValue =>
            format!("\"{}\"", node.value().unwrap_or_default()),
        NodeKind::NullValue => "null".to_string(),
        NodeKind::Variable =>
            format!("${}", node.name_value().unwrap_or_default()),
        NodeKind::ListValue => {
            let items = node
                .child_list("values")
                .iter()
                .map(print_value)
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{items}]")
        },
        NodeKind::ObjectValue => {
            let fields = node
                .child_list("fields")
                .iter()
                .map(print_value)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{fields}}}")
        },
        NodeKind::ObjectField => format!(
            "{}: {}",
            node.name_value().unwrap_or_default(),
            node.child("value").map(print_value).unwrap_or_default(),
        ),
        _ => String::new(),
    }
}
