use super::*;

#[test]
fn restore_unavailable_storage_is_empty() {
    let state = restore(Err(SiteError::Storage("localStorage disabled".into())));
    assert!(state.is_empty());
}

#[test]
fn restore_missing_key_is_empty() {
    assert!(restore(Ok(None)).is_empty());
}

#[test]
fn restore_corrupt_value_is_empty() {
    assert!(restore(Ok(Some("{not json".into()))).is_empty());
    assert!(restore(Ok(Some(r#"["l1", 2]"#.into()))).is_empty());
}

#[test]
fn restore_valid_value() {
    let state = restore(Ok(Some(r#"["intro","setup"]"#.into())));
    assert_eq!(state.len(), 2);
    assert!(state.contains("intro"));
    assert!(state.contains("setup"));
}

#[test]
fn restore_keeps_ids_outside_any_outline() {
    let state = restore(Ok(Some(r#"["retired-lesson"]"#.into())));
    assert!(state.contains("retired-lesson"));
}
