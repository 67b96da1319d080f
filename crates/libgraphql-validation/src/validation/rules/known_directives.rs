use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::OperationKind;
use crate::schema::builtins::BUILTIN_DIRECTIVES;
use crate::schema::DirectiveLocation;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visit::Control;
use crate::visit::PathStep;
use std::collections::HashMap;

/// Directive names must be defined and directive usages must sit on a
/// location their definition allows.
///
/// Works with or without a registry: known directives come from the
/// schema when one is present (the built-in set otherwise), overlaid with
/// any directive definitions in the document itself.
pub(crate) struct KnownDirectives<'a> {
    locations_by_name: HashMap<&'a str, Vec<DirectiveLocation>>,
}

pub(crate) fn factory<'a>(
    ctx: &ValidationContext<'a>,
) -> Box<dyn Rule<'a> + 'a> {
    let mut locations_by_name: HashMap<&'a str, Vec<DirectiveLocation>> =
        HashMap::new();
    match ctx.schema() {
        Some(schema) => {
            for (name, directive) in schema.directives() {
                locations_by_name
                    .insert(name.as_str(), directive.locations().to_vec());
            }
        },
        None => {
            for (name, directive) in BUILTIN_DIRECTIVES.iter() {
                locations_by_name
                    .insert(name.as_str(), directive.locations().to_vec());
            }
        },
    }
    for def in ctx.document().child_list("definitions") {
        if def.kind() != NodeKind::DirectiveDefinition {
            continue;
        }
        let Some(name) = def.name_value() else {
            continue;
        };
        let locations = def
            .child_list("locations")
            .iter()
            .filter_map(Node::value)
            .filter_map(DirectiveLocation::from_name)
            .collect();
        locations_by_name.insert(name, locations);
    }
    Box::new(KnownDirectives { locations_by_name })
}

impl<'a> Rule<'a> for KnownDirectives<'a> {
    fn enter(
        &mut self,
        ctx: &ValidationContext<'a>,
        node: &'a Node,
        _path: &[PathStep],
        ancestors: &[&'a Node],
    ) -> Control {
        if node.kind() != NodeKind::Directive {
            return Control::Continue;
        }
        let Some(directive_name) = node.name_value() else {
            return Control::Continue;
        };
        let Some(allowed_locations) =
            self.locations_by_name.get(directive_name)
        else {
            ctx.report(ValidationError::structural(
                format!("Unknown directive \"@{directive_name}\"."),
                &[node],
            ));
            return Control::Continue;
        };
        let Some(candidate_location) = directive_location_of(ancestors)
        else {
            return Control::Continue;
        };
        if !allowed_locations.contains(&candidate_location) {
            ctx.report(ValidationError::structural(
                format!(
                    "Directive \"@{directive_name}\" may not be used on \
                     {candidate_location}.",
                ),
                &[node],
            ));
        }
        Control::Continue
    }
}

// The directive location a directive node occupies, derived from the host
// construct it annotates.
fn directive_location_of(ancestors: &[&Node]) -> Option<DirectiveLocation> {
    let host = ancestors.last()?;
    Some(match host.kind() {
        NodeKind::OperationDefinition => match host.operation_kind()? {
            OperationKind::Query => DirectiveLocation::Query,
            OperationKind::Mutation => DirectiveLocation::Mutation,
            OperationKind::Subscription => DirectiveLocation::Subscription,
        },
        NodeKind::Field => DirectiveLocation::Field,
        NodeKind::FragmentSpread => DirectiveLocation::FragmentSpread,
        NodeKind::InlineFragment => DirectiveLocation::InlineFragment,
        NodeKind::FragmentDefinition =>
            DirectiveLocation::FragmentDefinition,
        NodeKind::VariableDefinition =>
            DirectiveLocation::VariableDefinition,
        NodeKind::SchemaDefinition | NodeKind::SchemaExtension =>
            DirectiveLocation::Schema,
        NodeKind::ScalarTypeDefinition | NodeKind::ScalarTypeExtension =>
            DirectiveLocation::Scalar,
        NodeKind::ObjectTypeDefinition | NodeKind::ObjectTypeExtension =>
            DirectiveLocation::Object,
        NodeKind::FieldDefinition => DirectiveLocation::FieldDefinition,
        NodeKind::InterfaceTypeDefinition
            | NodeKind::InterfaceTypeExtension =>
            DirectiveLocation::Interface,
        NodeKind::UnionTypeDefinition | NodeKind::UnionTypeExtension =>
            DirectiveLocation::Union,
        NodeKind::EnumTypeDefinition | NodeKind::EnumTypeExtension =>
            DirectiveLocation::Enum,
        NodeKind::EnumValueDefinition => DirectiveLocation::EnumValue,
        NodeKind::InputObjectTypeDefinition
            | NodeKind::InputObjectTypeExtension =>
            DirectiveLocation::InputObject,
        NodeKind::InputValueDefinition => {
            let grandparent_kind = ancestors
                .len()
                .checked_sub(2)
                .and_then(|index| ancestors.get(index))
                .map(|grandparent| grandparent.kind());
            match grandparent_kind {
                Some(NodeKind::InputObjectTypeDefinition)
                    | Some(NodeKind::InputObjectTypeExtension) =>
                    DirectiveLocation::InputFieldDefinition,
                _ => DirectiveLocation::ArgumentDefinition,
            }
        },
        _ => return None,
    })
}
