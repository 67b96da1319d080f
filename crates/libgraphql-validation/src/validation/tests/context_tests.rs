use super::helpers::parse;
use super::helpers::test_schema;
use crate::ast::Node;
use crate::validation::ValidationContext;

fn definition<'a>(doc: &'a Node, index: usize) -> &'a Node {
    &doc.child_list("definitions")[index]
}

#[test]
fn fragment_map_is_built_once_with_first_definition_winning() {
    let schema = test_schema();
    let doc = parse(
        r#"
        { hello }
        fragment A on Article { id }
        fragment B on Author { id }
        fragment A on Article { title }
        "#,
    );
    let ctx = ValidationContext::for_document(&schema, &doc);

    assert_eq!(ctx.fragments().len(), 2);
    let first_a = ctx.fragment("A").unwrap();
    let selections = first_a
        .child("selectionSet")
        .unwrap()
        .child_list("selections");
    assert_eq!(selections[0].name_value(), Some("id"));
    assert!(ctx.fragment("Missing").is_none());
}

#[test]
fn variable_usages_are_tagged_with_expected_types_and_defaults() {
    let schema = test_schema();
    let doc = parse(
        r#"
        query Q($id: ID!, $filter: SearchFilter) {
            article(id: $id) { id }
            search(filter: $filter) { id }
        }
        "#,
    );
    let ctx = ValidationContext::for_document(&schema, &doc);
    let operation = definition(&doc, 0);

    let usages = ctx.variable_usages(operation);
    assert_eq!(usages.len(), 2);
    assert_eq!(usages[0].variable.name_value(), Some("id"));
    assert_eq!(
        usages[0]
            .expected_type
            .as_ref()
            .map(|annotation| annotation.to_string()),
        Some("ID!".to_string()),
    );
    assert_eq!(usages[1].variable.name_value(), Some("filter"));

    // Memoized: the same Rc comes back for the same node.
    let again = ctx.variable_usages(operation);
    assert!(std::rc::Rc::ptr_eq(&usages, &again));
}

#[test]
fn recursive_usages_include_reachable_fragments() {
    let schema = test_schema();
    let doc = parse(
        r#"
        query Q($id: ID!) {
            ...Lookup
        }

        fragment Lookup on Query {
            article(id: $id) { id }
        }
        "#,
    );
    let ctx = ValidationContext::for_document(&schema, &doc);
    let operation = definition(&doc, 0);

    assert!(ctx.variable_usages(operation).is_empty());
    let recursive = ctx.recursive_variable_usages(operation);
    assert_eq!(recursive.len(), 1);
    assert_eq!(recursive[0].variable.name_value(), Some("id"));
}

#[test]
fn recursively_referenced_fragments_terminate_on_cycles() {
    let schema = test_schema();
    let doc = parse(
        r#"
        { ...A }
        fragment A on Query { ...B hello }
        fragment B on Query { ...A }
        "#,
    );
    let ctx = ValidationContext::for_document(&schema, &doc);
    let operation = definition(&doc, 0);

    let referenced = ctx.recursively_referenced_fragments(operation);
    let names: Vec<_> = referenced
        .iter()
        .filter_map(|fragment| fragment.name_value())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"A"));
    assert!(names.contains(&"B"));
}

#[test]
fn fragment_cycles_are_found_once_per_distinct_cycle() {
    let schema = test_schema();
    let doc = parse(
        r#"
        { ...Selfie ...Left }
        fragment Selfie on Query { ...Selfie }
        fragment Left on Query { ...Right }
        fragment Right on Query { ...Left }
        "#,
    );
    let ctx = ValidationContext::for_document(&schema, &doc);

    let cycles = ctx.fragment_cycles();
    assert_eq!(cycles.len(), 2);
    assert_eq!(cycles[0].spreads().len(), 1);
    assert_eq!(cycles[1].spreads().len(), 2);
    // Memoized for the context lifetime.
    assert_eq!(ctx.fragment_cycles().len(), 2);
}

#[test]
fn implicit_signatures_collect_free_variables() {
    let schema = test_schema();
    let doc = parse(
        r#"
        { ...F }
        fragment F on Query { article(id: $id) { id } }
        "#,
    );
    let ctx = ValidationContext::for_document(&schema, &doc);

    let signature = ctx.fragment_signature("F").unwrap();
    assert!(!signature.is_explicit());
    assert!(signature.defines("id"));
    assert!(!signature.defines("other"));
}

#[test]
fn error_sink_is_append_only_and_keeps_duplicates() {
    use crate::validation::ValidationError;

    let schema = test_schema();
    let doc = parse("{ hello }");
    let ctx = ValidationContext::for_document(&schema, &doc);

    ctx.report(ValidationError::structural("one", &[&doc]));
    ctx.report(ValidationError::structural("one", &[&doc]));
    assert_eq!(ctx.error_count(), 2);
}
