use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn selectors_are_distinct() {
    for (i, a) in TriggerKind::ALL.iter().enumerate() {
        for (j, b) in TriggerKind::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.selector(), b.selector());
            }
        }
    }
}

#[test]
fn navigator_triggers_are_scoped_to_navigator() {
    assert!(TriggerKind::LessonLink.selector().starts_with("#progress-navigator "));
    assert!(TriggerKind::ChapterHeader.selector().starts_with("#progress-navigator "));
}

#[test]
fn lesson_links_keep_default_navigation() {
    assert!(!TriggerKind::LessonLink.prevents_default());
    assert!(TriggerKind::DeepDive.prevents_default());
    assert!(TriggerKind::Inspector.prevents_default());
}

#[test]
fn on_keeps_registration_order() {
    let mut delegator = Delegator::new();
    delegator.on(TriggerKind::Inspector, |_| {});
    delegator.on(TriggerKind::DeepDive, |_| {});
    assert_eq!(delegator.kinds(), vec![TriggerKind::Inspector, TriggerKind::DeepDive]);
}

#[test]
fn on_same_kind_replaces_handler() {
    let first = Rc::new(Cell::new(0));
    let mut delegator = Delegator::new();
    let held = Rc::clone(&first);
    delegator.on(TriggerKind::DeepDive, move |_| held.set(held.get() + 1));
    delegator.on(TriggerKind::LessonLink, |_| {});
    assert_eq!(Rc::strong_count(&first), 2);

    delegator.on(TriggerKind::DeepDive, |_| {});

    assert_eq!(Rc::strong_count(&first), 1, "replaced handler must be dropped");
    assert_eq!(delegator.kinds(), vec![TriggerKind::DeepDive, TriggerKind::LessonLink]);
}
