use linkdock::managers::selection_manager::SelectionManager;

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_toggle_is_ignored_outside_batch_mode() {
    let mut sel = SelectionManager::new();
    sel.toggle("a");
    assert!(sel.is_empty());
}

#[test]
fn test_toggle_adds_and_removes_in_batch_mode() {
    let mut sel = SelectionManager::new();
    sel.toggle_batch_mode();

    sel.toggle("a");
    assert!(sel.is_selected("a"));
    assert_eq!(sel.len(), 1);

    sel.toggle("a");
    assert!(!sel.is_selected("a"));
    assert!(sel.is_empty());
}

#[test]
fn test_toggling_batch_mode_clears_selection() {
    let mut sel = SelectionManager::new();
    assert!(sel.toggle_batch_mode());
    sel.toggle("a");
    sel.toggle("b");

    // Leaving batch mode drops the working selection.
    assert!(!sel.toggle_batch_mode());
    assert!(sel.is_empty());

    // And re-entering starts from scratch.
    assert!(sel.toggle_batch_mode());
    assert!(sel.is_empty());
}

#[test]
fn test_select_all_selects_displayed_set() {
    let mut sel = SelectionManager::new();
    sel.toggle_batch_mode();
    sel.toggle("a");

    sel.select_all(&ids(&["a", "b", "c"]));
    assert_eq!(sel.len(), 3);
    assert!(sel.is_selected("b"));
}

#[test]
fn test_select_all_clears_when_already_complete() {
    let mut sel = SelectionManager::new();
    sel.toggle_batch_mode();

    let displayed = ids(&["a", "b"]);
    sel.select_all(&displayed);
    assert_eq!(sel.len(), 2);

    sel.select_all(&displayed);
    assert!(sel.is_empty());
}

#[test]
fn test_select_all_is_ignored_outside_batch_mode() {
    let mut sel = SelectionManager::new();
    sel.select_all(&ids(&["a"]));
    assert!(sel.is_empty());
}

#[test]
fn test_finish_batch_clears_and_exits() {
    let mut sel = SelectionManager::new();
    sel.toggle_batch_mode();
    sel.toggle("a");

    sel.finish_batch();
    assert!(!sel.batch_mode());
    assert!(sel.is_empty());
}
