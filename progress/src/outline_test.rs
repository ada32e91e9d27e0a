use super::*;

fn sample() -> Outline {
    Outline::new(vec![vec!["l1", "l2", "l3"], vec!["l4"], vec![]])
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_keeps_document_order() {
    let outline = sample();
    assert_eq!(outline.lessons(), ["l1", "l2", "l3", "l4"]);
    assert_eq!(outline.lesson_count(), 4);
    assert_eq!(outline.chapters().len(), 3);
}

#[test]
fn new_keeps_empty_chapters() {
    let outline = sample();
    assert!(outline.chapters()[2].lessons.is_empty());
}

#[test]
fn new_drops_duplicate_ids_after_first() {
    let outline = Outline::new(vec![vec!["a", "b"], vec!["b", "c"]]);
    assert_eq!(outline.lessons(), ["a", "b", "c"]);
    assert_eq!(outline.chapters()[1].lessons, vec!["c".to_owned()]);
    assert_eq!(outline.slot("b").map(|s| s.chapter), Some(0));
}

#[test]
fn new_skips_empty_ids() {
    let outline = Outline::new(vec![vec!["", "a"]]);
    assert_eq!(outline.lessons(), ["a"]);
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn slot_reports_chapter_and_order() {
    let outline = sample();
    assert_eq!(outline.slot("l4"), Some(LessonSlot { chapter: 1, order: 3 }));
    assert_eq!(outline.slot("nope"), None);
}

#[test]
fn lessons_through_includes_target() {
    let outline = sample();
    assert_eq!(outline.lessons_through("l3"), ["l1", "l2", "l3"]);
    assert_eq!(outline.lessons_through("l1"), ["l1"]);
}

#[test]
fn lessons_through_unknown_is_empty() {
    let outline = sample();
    assert!(outline.lessons_through("missing").is_empty());
}
