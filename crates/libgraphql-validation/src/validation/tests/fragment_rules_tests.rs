use super::helpers::errors_with;
use super::helpers::messages;
use super::helpers::test_schema;
use crate::validation::rules::no_fragment_cycles;
use crate::validation::rules::no_unused_fragments;
use crate::validation::rules::no_unused_variables;
use crate::validation::RuleFactory;

static CYCLES: [RuleFactory; 1] = [no_fragment_cycles::factory];
static UNUSED_FRAGMENTS: [RuleFactory; 1] = [no_unused_fragments::factory];
static UNUSED_VARIABLES: [RuleFactory; 1] = [no_unused_variables::factory];

#[test]
fn a_direct_self_spread_is_one_cycle() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        r#"
        { ...A }
        fragment A on Query { ...A }
        "#,
        &CYCLES,
    );
    assert_eq!(
        messages(&errors),
        vec!["Cannot spread fragment \"A\" within itself."],
    );
    assert_eq!(errors[0].locations().len(), 1);
}

#[test]
fn a_transitive_cycle_reports_once_with_the_via_chain() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        r#"
        { ...A }
        fragment A on Query { ...B }
        fragment B on Query { ...C }
        fragment C on Query { ...A }
        "#,
        &CYCLES,
    );
    assert_eq!(
        messages(&errors),
        vec![
            "Cannot spread fragment \"A\" within itself via \"B\", \
             \"C\".",
        ],
    );
    assert_eq!(errors[0].locations().len(), 3);
}

#[test]
fn acyclic_spread_chains_are_fine() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        r#"
        { ...A ...B }
        fragment A on Query { ...B }
        fragment B on Query { hello }
        "#,
        &CYCLES,
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn unreachable_fragments_are_reported_as_unused() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        r#"
        { ...Used }
        fragment Used on Query { ...AlsoUsed }
        fragment AlsoUsed on Query { hello }
        fragment Orphan on Query { hello }
        "#,
        &UNUSED_FRAGMENTS,
    );
    assert_eq!(
        messages(&errors),
        vec!["Fragment \"Orphan\" is never used."],
    );
}

#[test]
fn unused_variables_are_reported_per_operation() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        r#"
        query Feed($id: ID!, $stale: String) {
            article(id: $id) { id }
        }
        { hello }
        "#,
        &UNUSED_VARIABLES,
    );
    assert_eq!(
        messages(&errors),
        vec![
            "Variable \"$stale\" is never used in operation \"Feed\".",
        ],
    );
}

#[test]
fn variables_used_only_through_fragments_still_count() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        r#"
        query Feed($id: ID!) { ...Lookup }
        fragment Lookup on Query { article(id: $id) { id } }
        "#,
        &UNUSED_VARIABLES,
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn anonymous_operations_use_the_shorter_message() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "query ($ghost: ID) { hello }",
        &UNUSED_VARIABLES,
    );
    assert_eq!(
        messages(&errors),
        vec!["Variable \"$ghost\" is never used."],
    );
}
