use super::helpers::errors_with;
use super::helpers::messages;
use super::helpers::test_schema;
use crate::validation::rules::single_field_subscriptions;
use crate::validation::RuleFactory;

static RULE: [RuleFactory; 1] = [single_field_subscriptions::factory];

#[test]
fn one_top_level_field_is_valid() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "subscription Watch { articleUpdated { id } }",
        &RULE,
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn multiple_top_level_fields_are_rejected() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        r#"
        subscription Watch {
            articleUpdated { id }
            commentAdded { id }
        }
        "#,
        &RULE,
    );
    assert_eq!(
        messages(&errors),
        vec![
            "Subscription \"Watch\" must select only one top-level \
             field.",
        ],
    );
    assert_eq!(errors[0].locations().len(), 1);
}

#[test]
fn fields_hidden_behind_fragments_are_counted() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        r#"
        subscription Watch { ...Everything }
        fragment Everything on Subscription {
            articleUpdated { id }
            commentAdded { id }
        }
        "#,
        &RULE,
    );
    assert_eq!(errors.len(), 1);
    assert!(errors[0]
        .message()
        .contains("must select only one top-level field"));
}

#[test]
fn anonymous_subscriptions_use_the_anonymous_wording() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "subscription { articleUpdated { id } commentAdded { id } }",
        &RULE,
    );
    assert_eq!(
        messages(&errors),
        vec![
            "Anonymous Subscription must select only one top-level \
             field.",
        ],
    );
}

#[test]
fn introspection_top_level_fields_are_rejected() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "subscription Watch { __typename }",
        &RULE,
    );
    assert_eq!(
        messages(&errors),
        vec![
            "Subscription \"Watch\" must not select an introspection \
             top-level field.",
        ],
    );
}

#[test]
fn queries_and_mutations_are_untouched() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "{ hello articles { id } __typename }",
        &RULE,
    );
    assert_eq!(errors, vec![]);
}
