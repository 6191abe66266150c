use edgemap::EdgeSelection;

#[test]
fn starts_unselected() {
    let sel = EdgeSelection::new();
    assert_eq!(sel.current(), None);
    assert!(!sel.is_selected(1));
}

#[test]
fn repeated_lookups_of_the_same_id_transition_once() {
    let mut sel = EdgeSelection::new();
    assert!(sel.select(5), "first lookup result must transition");
    assert!(
        !sel.select(5),
        "re-click on the selected edge must not signal a refresh"
    );
    assert_eq!(sel.current(), Some(5));
}

#[test]
fn a_different_id_replaces_the_selection() {
    let mut sel = EdgeSelection::new();
    assert!(sel.select(5));
    assert!(sel.select(9), "a different id must transition again");
    assert_eq!(sel.current(), Some(9));
    assert!(sel.is_selected(9));
    assert!(!sel.is_selected(5));
}
