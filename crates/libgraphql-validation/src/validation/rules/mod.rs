//! The rule set: each rule is an independently authored unit producing
//! partial enter/leave hooks, composed by the driver into one pass.

pub(crate) mod defer_stream_directive_label;
pub(crate) mod known_directives;
pub(crate) mod no_fragment_cycles;
pub(crate) mod no_unused_fragments;
pub(crate) mod no_unused_variables;
pub(crate) mod provided_required_arguments;
pub(crate) mod scalar_leafs;
pub(crate) mod single_field_subscriptions;
pub(crate) mod unique_directive_names;
pub(crate) mod unique_type_names;
pub(crate) mod values_of_correct_type;

use crate::validation::RuleFactory;

static DEFAULT_RULES: [RuleFactory; 9] = [
    single_field_subscriptions::factory,
    scalar_leafs::factory,
    no_unused_fragments::factory,
    no_fragment_cycles::factory,
    no_unused_variables::factory,
    known_directives::factory,
    defer_stream_directive_label::factory,
    values_of_correct_type::factory,
    provided_required_arguments::factory,
];

static DEFAULT_SDL_RULES: [RuleFactory; 4] = [
    unique_type_names::factory,
    unique_directive_names::factory,
    known_directives::factory,
    provided_required_arguments::directives_only_factory,
];

/// The default rule list for executable documents, in report order.
pub fn default_rules() -> &'static [RuleFactory] {
    &DEFAULT_RULES
}

/// The default rule list for schema-definition documents. None of these
/// require a pre-existing registry.
pub fn default_sdl_rules() -> &'static [RuleFactory] {
    &DEFAULT_SDL_RULES
}
