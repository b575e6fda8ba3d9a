use super::*;
use crate::{
    adapter::items::{LayoutItem, ViewItem},
    foundation::core::Priority,
};

#[test]
fn registers_named_items() {
    let mut engine = MemoryEngine::default();
    let view = engine.add_view("title");
    let guide = engine.add_guide("safe_area");

    assert_ne!(view.item_id(), guide.item_id());
    assert_eq!(engine.item_name(view.item_id()), Some("title"));
    assert_eq!(engine.item_kind(guide.item_id()), Some(ItemKind::Guide));
    assert_eq!(engine.item_name(ItemId(999)), None);
}

#[test]
fn activation_has_set_semantics() {
    let mut engine = MemoryEngine::default();
    let a = engine.add_view("a");
    let b = engine.add_view("b");
    let c = a.leading().equal_to(b.trailing() + 10);

    assert!(!engine.is_active(&c));
    engine.activate(std::slice::from_ref(&c)).unwrap();
    engine.activate(&[c.clone(), c.clone()]).unwrap();
    assert!(engine.is_active(&c));
    assert_eq!(engine.active_len(), 1);

    engine.deactivate(std::slice::from_ref(&c)).unwrap();
    assert!(!engine.is_active(&c));
    engine.deactivate(std::slice::from_ref(&c)).unwrap();
    assert_eq!(engine.active_len(), 0);
}

#[test]
fn rejects_priority_change_on_active_constraint() {
    let mut engine = MemoryEngine::default();
    let a = engine.add_view("a");
    let c = a.width().equal_to(40);
    engine.activate(std::slice::from_ref(&c)).unwrap();

    let other = a.height().equal_to(20);
    let retagged = c.clone().with_priority(Priority::DEFAULT_LOW);
    let err = engine.activate(&[other.clone(), retagged]).unwrap_err();
    assert!(err.to_string().contains("engine error:"));
    // The whole call is refused.
    assert!(!engine.is_active(&other));
    assert_eq!(
        engine.active_constraint(c.id()).map(Constraint::priority),
        Some(Priority::REQUIRED)
    );
}

#[test]
fn priority_change_allowed_when_disabled() {
    let mut engine = MemoryEngine::new(MemoryEngineOpts {
        reject_priority_change: false,
        ..MemoryEngineOpts::default()
    });
    let a = engine.add_view("a");
    let c = a.width().equal_to(40);
    engine.activate(std::slice::from_ref(&c)).unwrap();
    engine
        .activate(&[c.clone().with_priority(Priority::DEFAULT_LOW)])
        .unwrap();
    // Re-activation is a no-op; the engine keeps its first copy.
    assert_eq!(
        engine.active_constraint(c.id()).map(Constraint::priority),
        Some(Priority::REQUIRED)
    );
}

#[test]
fn submissions_are_logged_in_order() {
    let mut engine = MemoryEngine::default();
    let a = engine.add_view("a");
    let first = a.width().equal_to(1);
    let second = a.height().equal_to(2);

    engine.activate(std::slice::from_ref(&first)).unwrap();
    engine.activate(std::slice::from_ref(&second)).unwrap();
    engine.deactivate(std::slice::from_ref(&first)).unwrap();

    assert_eq!(engine.activation_order(), vec![first.id(), second.id()]);
    assert_eq!(engine.submissions().len(), 3);
    assert_eq!(engine.submissions()[2].op, SubmissionOp::Deactivate);

    let mut quiet = MemoryEngine::new(MemoryEngineOpts {
        record_submissions: false,
        ..MemoryEngineOpts::default()
    });
    quiet.activate(std::slice::from_ref(&first)).unwrap();
    assert!(quiet.submissions().is_empty());
}

#[test]
fn describe_uses_names() {
    let mut engine = MemoryEngine::default();
    let label = engine.add_view("label");
    let cell = engine.add_view("cell");

    let c = label.first_baseline().equal_to(cell.top() + 4);
    assert_eq!(engine.describe(&c), "label.first_baseline == cell.top + 4 @1000");

    let c = label.width().equal_to(80);
    assert_eq!(engine.describe(&c), "label.width == 80 @1000");
}

#[test]
fn snapshot_serializes_active_set() {
    let mut engine = MemoryEngine::default();
    let label = engine.add_view("label");
    let c = label.height().equal_to(label.width() * 2);
    engine.activate(std::slice::from_ref(&c)).unwrap();

    let json = engine.snapshot_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &value["active"][0];
    assert_eq!(first["relation"], "equal");
    assert_eq!(first["multiplier"], 2.0);
    assert_eq!(first["first"]["attribute"], "height");
    assert_eq!(first["description"], "label.height == label.width * 2 @1000");
}

#[test]
fn opts_deserialize_with_defaults() {
    let opts: MemoryEngineOpts =
        serde_json::from_str(r#"{ "record_submissions": false }"#).unwrap();
    assert!(opts.reject_priority_change);
    assert!(!opts.record_submissions);
}
