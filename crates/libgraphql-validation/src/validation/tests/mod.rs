mod helpers;

mod context_tests;
mod fragment_rules_tests;
mod provided_required_arguments_tests;
mod single_field_subscriptions_tests;
mod validate_tests;
mod values_of_correct_type_tests;
