use super::helpers::errors_with;
use super::helpers::messages;
use super::helpers::test_schema;
use crate::validation::rules::values_of_correct_type;
use crate::validation::RuleFactory;

static RULE: [RuleFactory; 1] = [values_of_correct_type::factory];

#[test]
fn compatible_literals_pass() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        r#"
        {
            article(id: "a1") { id }
            search(filter: { term: "rust", limit: 3, status: PUBLISHED }) {
                id
            }
        }
        "#,
        &RULE,
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn null_against_a_non_null_type_is_reported() {
    let schema = test_schema();
    let errors = errors_with(&schema, "{ article(id: null) { id } }", &RULE);
    assert_eq!(
        messages(&errors),
        vec!["Expected value of type \"ID!\", found null."],
    );
}

#[test]
fn null_against_a_nullable_type_is_fine() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "{ search(filter: { term: \"x\", status: null }) { id } }",
        &RULE,
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn scalar_kind_mismatches_are_reported() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "{ search(filter: { term: 1, limit: \"three\" }) { id } }",
        &RULE,
    );
    // The upstream parser stores object fields in name order, so `limit`
    // is visited before `term`.
    assert_eq!(
        messages(&errors),
        vec![
            "Expected value of type \"Int\", found \"three\".",
            "Expected value of type \"String!\", found 1.",
        ],
    );
}

#[test]
fn unknown_enum_values_are_reported_by_name() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "{ search(filter: { term: \"x\", status: GOOD }) { id } }",
        &RULE,
    );
    assert_eq!(
        messages(&errors),
        vec!["Value \"GOOD\" does not exist in \"Status\" enum."],
    );
}

#[test]
fn a_string_where_an_enum_is_expected_is_a_mismatch() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "{ search(filter: { term: \"x\", status: \"DRAFT\" }) { id } }",
        &RULE,
    );
    assert_eq!(
        messages(&errors),
        vec!["Expected value of type \"Status\", found \"DRAFT\"."],
    );
}

#[test]
fn missing_required_input_object_fields_are_reported() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "{ search(filter: { limit: 3 }) { id } }",
        &RULE,
    );
    assert_eq!(
        messages(&errors),
        vec![
            "Field \"SearchFilter.term\" of required type \"String!\" \
             was not provided.",
        ],
    );
}

#[test]
fn unknown_input_object_fields_are_reported() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "{ search(filter: { term: \"x\", bogus: 1 }) { id } }",
        &RULE,
    );
    assert_eq!(
        messages(&errors),
        vec!["Field \"bogus\" is not defined by type \"SearchFilter\"."],
    );
}

#[test]
fn custom_scalars_accept_any_literal() {
    let schema = test_schema();
    // DateTime is a custom scalar; any literal form coerces.
    let errors = errors_with(
        &schema,
        r#"
        mutation M {
            publish(id: "a1") { publishedAt }
        }
        "#,
        &RULE,
    );
    assert_eq!(errors, vec![]);
}

#[test]
fn variables_in_value_positions_are_not_literal_checked() {
    let schema = test_schema();
    let errors = errors_with(
        &schema,
        "query Q($id: ID!) { article(id: $id) { id } }",
        &RULE,
    );
    assert_eq!(errors, vec![]);
}
