use super::*;

fn outline() -> Outline {
    Outline::new(vec![vec!["l0", "l1"], vec!["l2", "l3", "l4"]])
}

// =============================================================
// mark
// =============================================================

#[test]
fn mark_adds_new_lesson() {
    let mut state = CompletionState::new();
    assert!(state.mark("l1"));
    assert!(state.contains("l1"));
    assert_eq!(state.len(), 1);
}

#[test]
fn mark_is_idempotent() {
    let mut state = CompletionState::new();
    assert!(state.mark("l1"));
    assert!(!state.mark("l1"));
    assert_eq!(state.len(), 1);
}

// =============================================================
// mark_through
// =============================================================

#[test]
fn mark_through_index_three_marks_zero_to_three() {
    let outline = outline();
    let mut state = CompletionState::new();
    let added = state.mark_through(&outline, "l3");
    assert_eq!(added, 4);
    for id in ["l0", "l1", "l2", "l3"] {
        assert!(state.contains(id), "{id} should be complete");
    }
    assert!(!state.contains("l4"));
}

#[test]
fn mark_through_counts_only_new_lessons() {
    let outline = outline();
    let mut state: CompletionState = ["l0", "l2"].into_iter().collect();
    assert_eq!(state.mark_through(&outline, "l3"), 2);
    assert_eq!(state.len(), 4);
}

#[test]
fn mark_through_unknown_id_adds_nothing() {
    let outline = outline();
    let mut state = CompletionState::new();
    assert_eq!(state.mark_through(&outline, "ghost"), 0);
    assert!(state.is_empty());
}

#[test]
fn mark_through_earlier_lesson_keeps_later_ones() {
    let outline = outline();
    let mut state = CompletionState::new();
    state.mark_through(&outline, "l4");
    assert_eq!(state.mark_through(&outline, "l1"), 0);
    assert_eq!(state.len(), 5);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_empties_set() {
    let mut state: CompletionState = ["a", "b"].into_iter().collect();
    state.clear();
    assert!(state.is_empty());
}

// =============================================================
// Codec
// =============================================================

#[test]
fn encode_is_flat_json_array() {
    let state: CompletionState = ["b", "a"].into_iter().collect();
    let json = state.encode().unwrap();
    let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 2);
    assert!(parsed.contains(&"a".to_owned()));
    assert!(parsed.contains(&"b".to_owned()));
}

#[test]
fn decode_restores_equal_set_regardless_of_order() {
    let first: CompletionState = ["l3", "l1", "l2"].into_iter().collect();
    let second: CompletionState = ["l1", "l2", "l3"].into_iter().collect();
    let restored = CompletionState::decode(&first.encode().unwrap()).unwrap();
    assert_eq!(restored, second);
}

#[test]
fn decode_accepts_duplicates_in_payload() {
    let state = CompletionState::decode(r#"["a","a","b"]"#).unwrap();
    assert_eq!(state.len(), 2);
}

#[test]
fn decode_rejects_non_array() {
    let err = CompletionState::decode(r#"{"a":1}"#).unwrap_err();
    assert!(matches!(err, CompletionError::Decode(_)));
    assert!(err.to_string().starts_with("corrupt completion payload"));
}

#[test]
fn decode_or_empty_missing_key_is_empty_without_error() {
    let (state, err) = CompletionState::decode_or_empty(None);
    assert!(state.is_empty());
    assert!(err.is_none());
}

#[test]
fn decode_or_empty_corrupt_value_is_empty_and_reported() {
    for raw in ["not json", "[1,2]", r#"{"l1":true}"#] {
        let (state, err) = CompletionState::decode_or_empty(Some(raw));
        assert!(state.is_empty(), "{raw}");
        assert!(matches!(err, Some(CompletionError::Decode(_))), "{raw}");
    }
}

#[test]
fn decode_or_empty_valid_value() {
    let (state, err) = CompletionState::decode_or_empty(Some(r#"["l1","l3"]"#));
    assert!(err.is_none());
    assert!(state.contains("l1"));
    assert!(state.contains("l3"));
    assert_eq!(state.len(), 2);
}
