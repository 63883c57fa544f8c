use rshuttle::core::selection::{Mark, SelectionState};

#[test]
fn test_unknown_row_starts_unselected() {
    let sel = SelectionState::new();
    assert_eq!(sel.mark_of("42"), Mark::Unselected);
    assert!(sel.is_empty());
}

#[test]
fn test_three_toggles_return_to_unselected() {
    let mut sel = SelectionState::new();

    assert_eq!(sel.toggle("1"), Mark::Selected);
    assert_eq!(sel.mark_of("1"), Mark::Selected);

    assert_eq!(sel.toggle("1"), Mark::Flagged);
    assert_eq!(sel.mark_of("1"), Mark::Flagged);

    assert_eq!(sel.toggle("1"), Mark::Unselected);
    assert_eq!(sel.mark_of("1"), Mark::Unselected);

    // Unselected rows are not stored at all.
    assert!(sel.is_empty());
}

#[test]
fn test_toggling_one_row_never_touches_another() {
    let mut sel = SelectionState::new();
    sel.toggle("1");

    for _ in 0..5 {
        sel.toggle("2");
        assert_eq!(sel.mark_of("1"), Mark::Selected);
    }
    assert_eq!(sel.mark_of("2"), Mark::Flagged);
    assert_eq!(sel.len(), 2);
}

#[test]
fn test_bulk_clear() {
    let mut sel = SelectionState::new();
    assert!(!sel.clear(), "nothing to clear on an empty state");

    sel.toggle("1");
    sel.toggle("2");
    sel.toggle("2");

    assert!(sel.clear());
    assert!(sel.is_empty());
    assert_eq!(sel.mark_of("1"), Mark::Unselected);
    assert_eq!(sel.mark_of("2"), Mark::Unselected);
}

#[test]
fn test_mark_transition_table() {
    assert_eq!(Mark::Unselected.next(), Mark::Selected);
    assert_eq!(Mark::Selected.next(), Mark::Flagged);
    assert_eq!(Mark::Flagged.next(), Mark::Unselected);

    assert!(!Mark::Unselected.is_marked());
    assert!(Mark::Selected.is_marked());
    assert!(Mark::Flagged.is_marked());
}
