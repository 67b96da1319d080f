use crate::ast;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::visit::walk;
use crate::visit::Control;
use crate::visit::ParallelVisitor;
use crate::visit::PathStep;
use crate::visit::Visitor;
use crate::visit::WalkOutcome;
use std::cell::RefCell;
use std::rc::Rc;

struct TaggedRecorder {
    tag: &'static str,
    log: Rc<RefCell<Vec<String>>>,
    skip_on: Option<NodeKind>,
    abort_on: Option<NodeKind>,
}
impl TaggedRecorder {
    fn new(tag: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            tag,
            log: Rc::clone(log),
            skip_on: None,
            abort_on: None,
        }
    }
}
impl<'a> Visitor<'a> for TaggedRecorder {
    fn enter(
        &mut self,
        node: &'a Node,
        _path: &[PathStep],
        _ancestors: &[&'a Node],
    ) -> Control {
        self.log
            .borrow_mut()
            .push(format!("{} enter {:?}", self.tag, node.kind()));
        if self.abort_on == Some(node.kind()) {
            return Control::Abort;
        }
        if self.skip_on == Some(node.kind()) {
            return Control::SkipSubtree;
        }
        Control::Continue
    }

    fn leave(
        &mut self,
        node: &'a Node,
        _path: &[PathStep],
        _ancestors: &[&'a Node],
    ) -> Control {
        self.log
            .borrow_mut()
            .push(format!("{} leave {:?}", self.tag, node.kind()));
        Control::Continue
    }
}

#[test]
fn enter_hooks_run_in_order_and_leave_hooks_in_reverse() {
    let doc = ast::parse_executable("{ a }").unwrap();
    let log = Rc::new(RefCell::new(vec![]));
    let mut composed = ParallelVisitor::new(vec![
        TaggedRecorder::new("first", &log),
        TaggedRecorder::new("second", &log),
    ]);
    walk(&doc, &mut composed);

    let log = log.borrow();
    let document_events: Vec<&str> = log
        .iter()
        .filter(|event| event.ends_with("Document"))
        .map(String::as_str)
        .collect();
    assert_eq!(
        document_events,
        vec![
            "first enter Document",
            "second enter Document",
            "second leave Document",
            "first leave Document",
        ],
    );
}

#[test]
fn a_skipping_component_still_gets_leave_while_others_descend() {
    let doc = ast::parse_executable("{ a }").unwrap();
    let log = Rc::new(RefCell::new(vec![]));
    let mut skipping = TaggedRecorder::new("skipping", &log);
    skipping.skip_on = Some(NodeKind::SelectionSet);
    let descending = TaggedRecorder::new("descending", &log);
    let mut composed = ParallelVisitor::new(vec![skipping, descending]);
    walk(&doc, &mut composed);

    let log = log.borrow();
    assert!(
        !log.iter().any(|event| event == "skipping enter Field"),
        "skipping component must not descend below the skipped node",
    );
    assert!(log.iter().any(|event| event == "skipping leave SelectionSet"));
    assert!(log.iter().any(|event| event == "descending enter Field"));
    assert!(log.iter().any(|event| event == "descending leave Field"));
}

#[test]
fn abort_from_one_component_stops_every_component_immediately() {
    let doc = ast::parse_executable("{ a b }").unwrap();
    let log = Rc::new(RefCell::new(vec![]));
    let mut aborting = TaggedRecorder::new("aborting", &log);
    aborting.abort_on = Some(NodeKind::Field);
    let other = TaggedRecorder::new("other", &log);
    let mut composed = ParallelVisitor::new(vec![aborting, other]);
    let outcome = walk(&doc, &mut composed);

    assert_eq!(outcome, WalkOutcome::Aborted);
    let log = log.borrow();
    // The aborting component saw the first field; the later component
    // never did, and nothing at all ran afterwards.
    assert!(log.iter().any(|event| event == "aborting enter Field"));
    assert!(!log.iter().any(|event| event == "other enter Field"));
    assert!(!log.iter().any(|event| event.contains("leave Field")));
    assert_eq!(
        log.iter().filter(|event| event.contains("enter Field")).count(),
        1,
    );
}
