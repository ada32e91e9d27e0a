use progress::render::render;
use progress::CompletionState;

use super::*;

fn model(active: Option<&str>) -> RenderModel {
    let outline = Outline::new(vec![vec!["l0", "l1"], vec!["l2", "l3"]]);
    render(&CompletionState::new(), &outline, active, 18.0)
}

#[test]
fn chapter_holding_active_lesson_is_forced_open() {
    let model = model(Some("l2"));
    assert_eq!(forced_expansion(&model.chapters[0]), None);
    assert_eq!(forced_expansion(&model.chapters[1]), Some(true));
}

#[test]
fn no_active_lesson_forces_nothing() {
    let model = model(None);
    assert!(model.chapters.iter().all(|c| forced_expansion(c).is_none()));
}

#[test]
fn aria_bool_matches_attribute_values() {
    assert_eq!(aria_bool(true), "true");
    assert_eq!(aria_bool(false), "false");
}
