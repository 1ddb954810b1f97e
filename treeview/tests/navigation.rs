use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use treeview::{
    ExpansionChange, ExpansionStore, NavKey, Navigation, Node, TreeError, flatten, nav_key,
    navigate,
};

fn five_leaves() -> Vec<Node> {
    (0..5)
        .map(|i| Node::leaf(i.to_string(), format!("Item {}", i)))
        .collect()
}

fn nested() -> Vec<Node> {
    vec![
        Node::branch(
            "a",
            "A",
            vec![Node::leaf("b", "B"), Node::branch("c", "C", vec![Node::leaf("d", "D")])],
        ),
        Node::leaf("e", "E"),
    ]
}

fn press(
    key: NavKey,
    forest: &[Node],
    selected: Option<&str>,
    expanded: &ExpansionStore,
) -> Navigation {
    let visible = flatten(forest, expanded);
    navigate(key, &visible, selected, expanded)
}

// ============================================================================
// Vertical movement
// ============================================================================

#[test]
fn test_arrow_down_wraps_from_last() {
    let forest = five_leaves();
    let nav = press(NavKey::ArrowDown, &forest, Some("4"), &ExpansionStore::new());
    assert_eq!(nav.next_selected.as_deref(), Some("0"));
    assert_eq!(nav.expansion, None);
}

#[test]
fn test_arrow_up_wraps_from_first() {
    let forest = five_leaves();
    let nav = press(NavKey::ArrowUp, &forest, Some("0"), &ExpansionStore::new());
    assert_eq!(nav.next_selected.as_deref(), Some("4"));
}

#[test]
fn test_arrow_down_and_up_step() {
    let forest = five_leaves();
    let store = ExpansionStore::new();
    let down = press(NavKey::ArrowDown, &forest, Some("2"), &store);
    assert_eq!(down.next_selected.as_deref(), Some("3"));
    let up = press(NavKey::ArrowUp, &forest, Some("2"), &store);
    assert_eq!(up.next_selected.as_deref(), Some("1"));
}

#[test]
fn test_unmatched_selection_down_lands_on_first() {
    let forest = five_leaves();
    let store = ExpansionStore::new();
    let none = press(NavKey::ArrowDown, &forest, None, &store);
    assert_eq!(none.next_selected.as_deref(), Some("0"));
    let stale = press(NavKey::ArrowDown, &forest, Some("gone"), &store);
    assert_eq!(stale.next_selected.as_deref(), Some("0"));
}

#[test]
fn test_unmatched_selection_up_lands_on_last() {
    let forest = five_leaves();
    let nav = press(NavKey::ArrowUp, &forest, None, &ExpansionStore::new());
    assert_eq!(nav.next_selected.as_deref(), Some("4"));
}

#[test]
fn test_single_row_does_not_move() {
    let forest = vec![Node::leaf("only", "Only")];
    let store = ExpansionStore::new();
    assert!(press(NavKey::ArrowDown, &forest, Some("only"), &store).is_noop());
    assert!(press(NavKey::ArrowUp, &forest, Some("only"), &store).is_noop());
}

#[test]
fn test_empty_visible_is_noop() {
    for key in NavKey::ALL {
        assert!(press(key, &[], None, &ExpansionStore::new()).is_noop());
    }
}

// ============================================================================
// Expansion keys
// ============================================================================

#[test]
fn test_arrow_right_expands_collapsed_internal() {
    let forest = nested();
    let nav = press(NavKey::ArrowRight, &forest, Some("a"), &ExpansionStore::new());
    assert_eq!(nav.expansion, Some(ExpansionChange::Expand("a".into())));
    assert_eq!(nav.next_selected, None);
}

#[test]
fn test_arrow_right_ignores_leaf_and_expanded() {
    let forest = nested();
    let mut store = ExpansionStore::new();
    assert!(press(NavKey::ArrowRight, &forest, Some("e"), &store).is_noop());
    store.expand("a");
    assert!(press(NavKey::ArrowRight, &forest, Some("a"), &store).is_noop());
}

#[test]
fn test_arrow_left_collapses_expanded_internal() {
    let forest = nested();
    let mut store = ExpansionStore::new();
    assert!(press(NavKey::ArrowLeft, &forest, Some("a"), &store).is_noop());
    store.expand("a");
    let nav = press(NavKey::ArrowLeft, &forest, Some("a"), &store);
    assert_eq!(nav.expansion, Some(ExpansionChange::Collapse("a".into())));
    assert_eq!(nav.next_selected, None);
}

#[test]
fn test_arrow_left_on_child_does_not_move_to_parent() {
    let forest = nested();
    let mut store = ExpansionStore::new();
    store.expand("a");
    assert!(press(NavKey::ArrowLeft, &forest, Some("b"), &store).is_noop());
}

#[test]
fn test_enter_toggles_internal() {
    let forest = nested();
    let mut store = ExpansionStore::new();
    store.expand("a");
    let nav = press(NavKey::Enter, &forest, Some("c"), &store);
    assert_eq!(nav.expansion, Some(ExpansionChange::Expand("c".into())));

    store.expand("c");
    let nav = press(NavKey::Enter, &forest, Some("c"), &store);
    assert_eq!(nav.expansion, Some(ExpansionChange::Collapse("c".into())));

    assert!(press(NavKey::Enter, &forest, Some("b"), &store).is_noop());
}

#[test]
fn test_expansion_keys_need_current_row() {
    let forest = nested();
    let store = ExpansionStore::new();
    for key in [NavKey::ArrowRight, NavKey::ArrowLeft, NavKey::Enter] {
        assert!(press(key, &forest, None, &store).is_noop());
        assert!(press(key, &forest, Some("d"), &store).is_noop());
    }
}

// ============================================================================
// Key identifiers
// ============================================================================

#[test]
fn test_parse_key_names() {
    for key in NavKey::ALL {
        assert_eq!(key.as_str().parse::<NavKey>().unwrap(), key);
    }
}

#[test]
fn test_parse_unknown_key() {
    match "Tab".parse::<NavKey>() {
        Err(TreeError::UnknownKey(name)) => assert_eq!(name, "Tab"),
        other => panic!("expected UnknownKey, got {:?}", other),
    }
}

#[test]
fn test_from_key_code() {
    assert_eq!(NavKey::from_key_code(KeyCode::Down), Some(NavKey::ArrowDown));
    assert_eq!(NavKey::from_key_code(KeyCode::Up), Some(NavKey::ArrowUp));
    assert_eq!(NavKey::from_key_code(KeyCode::Right), Some(NavKey::ArrowRight));
    assert_eq!(NavKey::from_key_code(KeyCode::Left), Some(NavKey::ArrowLeft));
    assert_eq!(NavKey::from_key_code(KeyCode::Enter), Some(NavKey::Enter));
    assert_eq!(NavKey::from_key_code(KeyCode::Tab), None);
    assert_eq!(NavKey::from_key_code(KeyCode::Char('j')), None);
}

#[test]
fn test_nav_key_only_plain_presses() {
    let plain = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
    assert_eq!(nav_key(&plain), Some(NavKey::ArrowDown));

    let shifted = KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT);
    assert_eq!(nav_key(&shifted), Some(NavKey::ArrowDown));

    let ctrl = KeyEvent::new(KeyCode::Down, KeyModifiers::CONTROL);
    assert_eq!(nav_key(&ctrl), None);

    let release =
        KeyEvent::new_with_kind(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(nav_key(&release), None);
}
