use super::helpers::messages;
use super::helpers::parse;
use super::helpers::test_schema;
use crate::validation::rules::known_directives;
use crate::validation::validate;
use crate::validation::validate_with;
use crate::validation::ErrorCategory;
use rayon::prelude::*;

#[test]
fn a_valid_document_yields_no_errors() {
    let schema = test_schema();
    let doc = parse(
        r#"
        query Feed($id: ID!) {
            article(id: $id) {
                id
                title
                author {
                    name
                }
                status
            }
            hello
        }
        "#,
    );
    assert_eq!(validate(&schema, &doc), vec![]);
}

#[test]
fn validation_is_deterministic_across_repeated_calls() {
    let schema = test_schema();
    let doc = parse(
        r#"
        {
            article {
                title { x }
                status(bogus: 1)
            }
            hello @skip
        }
        "#,
    );
    let first = validate(&schema, &doc);
    assert!(!first.is_empty());
    for _ in 0..10 {
        assert_eq!(validate(&schema, &doc), first);
    }
}

#[test]
fn validating_independent_documents_across_threads_is_safe() {
    let schema = test_schema();
    let doc = parse("{ article { title { x } } hello @skip }");
    let baseline = validate(&schema, &doc);
    assert!(!baseline.is_empty());

    let results: Vec<_> = (0..16)
        .into_par_iter()
        .map(|_| validate(&schema, &doc))
        .collect();
    for result in results {
        assert_eq!(result, baseline);
    }
}

#[test]
fn the_error_cap_appends_one_capacity_marker_and_aborts() {
    let schema = test_schema();
    // One violation per node: three unknown directives.
    let doc = parse("{ hello @x, articles @y { id @z } }");
    let rules = &[known_directives::factory as crate::validation::RuleFactory];

    let capped = validate_with(&schema, &doc, rules, Some(2));
    assert_eq!(capped.len(), 3);
    assert_eq!(capped[2].category(), ErrorCategory::Capacity);
    assert_eq!(
        capped[2].message(),
        "Too many validation errors, error limit reached. Validation \
         aborted.",
    );

    let uncapped = validate_with(&schema, &doc, rules, None);
    assert_eq!(uncapped.len(), 3);
    assert!(uncapped
        .iter()
        .all(|error| error.category() == ErrorCategory::Structural));
}

#[test]
fn a_zero_cap_yields_only_the_capacity_marker() {
    let schema = test_schema();
    let doc = parse("{ hello @x }");
    let rules = &[known_directives::factory as crate::validation::RuleFactory];

    let errors = validate_with(&schema, &doc, rules, Some(0));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].category(), ErrorCategory::Capacity);
}

#[test]
fn every_error_carries_at_least_one_location() {
    let schema = test_schema();
    let doc = parse("{ article { title { x } } hello @skip }");
    let errors = validate(&schema, &doc);
    assert!(!errors.is_empty(), "{:?}", messages(&errors));
    for error in &errors {
        assert!(!error.locations().is_empty());
        assert!(error.locations()[0].line >= 1);
    }
}
