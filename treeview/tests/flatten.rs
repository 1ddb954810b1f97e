use treeview::{ExpansionStore, Node, flatten};

fn sample() -> Vec<Node> {
    vec![
        Node::branch(
            "1",
            "Item 1",
            vec![
                Node::branch(
                    "2",
                    "Item 1.1",
                    vec![Node::leaf("3", "Item 1.1.1"), Node::leaf("4", "Item 1.1.2")],
                ),
                Node::leaf("5", "Item 1.2"),
            ],
        ),
        Node::branch("6", "Item 2", vec![Node::leaf("7", "Item 2.1")]),
        Node::leaf("8", "Item 3"),
    ]
}

fn ids(forest: &[Node], expanded: &ExpansionStore) -> Vec<String> {
    flatten(forest, expanded)
        .iter()
        .map(|row| row.id().to_string())
        .collect()
}

fn expanded(ids: &[&str]) -> ExpansionStore {
    let mut store = ExpansionStore::new();
    for id in ids {
        store.expand(id);
    }
    store
}

// ============================================================================
// Flattening
// ============================================================================

#[test]
fn test_flatten_collapsed_shows_roots_only() {
    let forest = sample();
    assert_eq!(ids(&forest, &ExpansionStore::new()), ["1", "6", "8"]);
}

#[test]
fn test_flatten_pre_order() {
    let forest = sample();
    assert_eq!(
        ids(&forest, &expanded(&["1", "2", "6"])),
        ["1", "2", "3", "4", "5", "6", "7", "8"]
    );
}

#[test]
fn test_flatten_hidden_under_collapsed_parent() {
    let forest = sample();
    // "2" is expanded but its parent is not, so nothing below "1" shows.
    assert_eq!(ids(&forest, &expanded(&["2"])), ["1", "6", "8"]);
    assert_eq!(ids(&forest, &expanded(&["1"])), ["1", "2", "5", "6", "8"]);
}

#[test]
fn test_flatten_empty_internal_node() {
    let forest = vec![Node::branch("a", "A", vec![]), Node::leaf("b", "B")];
    let rows = flatten(&forest, &expanded(&["a"]));
    assert_eq!(rows.len(), 2);
    assert!(rows[0].is_internal);
    assert!(rows[0].is_expanded);
    assert!(!rows[1].is_internal);
}

#[test]
fn test_flatten_ignores_expanded_leaf() {
    let forest = sample();
    let rows = flatten(&forest, &expanded(&["8"]));
    let leaf = rows.iter().find(|row| row.id() == "8").unwrap();
    assert!(!leaf.is_internal);
    assert!(!leaf.is_expanded);
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_flatten_depths() {
    let forest = sample();
    let depths: Vec<u16> = flatten(&forest, &expanded(&["1", "2"]))
        .iter()
        .map(|row| row.depth)
        .collect();
    assert_eq!(depths, [0, 1, 2, 2, 1, 0, 0]);
}

#[test]
fn test_flatten_empty_forest() {
    assert!(flatten(&[], &expanded(&["1"])).is_empty());
}

// ============================================================================
// Expansion Store
// ============================================================================

#[test]
fn test_expand_is_idempotent() {
    let mut once = ExpansionStore::new();
    once.expand("1");

    let mut twice = ExpansionStore::new();
    assert!(twice.expand("1"));
    assert!(!twice.expand("1"));

    assert_eq!(once, twice);
}

#[test]
fn test_collapse_is_idempotent() {
    let mut store = expanded(&["1", "2"]);
    assert!(store.collapse("1"));
    assert!(!store.collapse("1"));
    assert_eq!(store, expanded(&["2"]));
}

#[test]
fn test_toggle_twice_restores() {
    let mut store = expanded(&["2"]);
    assert!(store.toggle("1"));
    assert!(store.is_expanded("1"));
    assert!(!store.toggle("1"));
    assert!(!store.is_expanded("1"));
    assert_eq!(store, expanded(&["2"]));
}

#[test]
fn test_from_ancestors_of() {
    let forest = sample();
    let store = ExpansionStore::from_ancestors_of(&forest, "4");
    assert_eq!(store.ids(), ["1", "2"]);

    assert!(ExpansionStore::from_ancestors_of(&forest, "8").is_empty());
    assert!(ExpansionStore::from_ancestors_of(&forest, "missing").is_empty());
}

#[test]
fn test_expand_all_marks_internal_nodes() {
    let forest = sample();
    let mut store = ExpansionStore::new();
    store.expand_all(&forest);
    assert_eq!(store.ids(), ["1", "2", "6"]);
}
