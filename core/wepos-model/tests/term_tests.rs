use pretty_assertions::assert_eq;
use serde_json::json;
use wepos_model::{MAX_TERM_DEPTH, ROOT_TERM_ID, Term, sort_terms_hierarchically, tree_size};

fn ids(tree: &[Term]) -> Vec<u64> {
    tree.iter().map(|t| t.term_id).collect()
}

// ── Tree shape ───────────────────────────────────────────────────

#[test]
fn two_roots_with_one_child() {
    let mut terms = vec![
        Term::new(1, 0, "Drinks"),
        Term::new(2, 1, "Coffee"),
        Term::new(3, 0, "Food"),
    ];

    let tree = sort_terms_hierarchically(&mut terms, ROOT_TERM_ID);

    assert_eq!(ids(&tree), vec![1, 3]);
    assert_eq!(ids(&tree[0].children), vec![2]);
    assert!(tree[0].children[0].children.is_empty());
    assert!(tree[1].children.is_empty());
    assert!(terms.is_empty());
}

#[test]
fn child_listed_before_parent_is_still_attached() {
    let mut terms = vec![
        Term::new(5, 4, "Espresso"),
        Term::new(4, 2, "Coffee"),
        Term::new(2, 0, "Drinks"),
    ];

    let tree = sort_terms_hierarchically(&mut terms, ROOT_TERM_ID);

    assert_eq!(ids(&tree), vec![2]);
    assert_eq!(ids(&tree[0].children), vec![4]);
    assert_eq!(ids(&tree[0].children[0].children), vec![5]);
    assert_eq!(tree_size(&tree), 3);
}

#[test]
fn siblings_keep_input_order() {
    let mut terms = vec![
        Term::new(9, 0, "z"),
        Term::new(3, 0, "a"),
        Term::new(7, 0, "m"),
    ];
    let tree = sort_terms_hierarchically(&mut terms, ROOT_TERM_ID);
    assert_eq!(ids(&tree), vec![9, 3, 7]);
}

#[test]
fn sorting_below_a_non_root_parent() {
    let mut terms = vec![
        Term::new(1, 0, "Drinks"),
        Term::new(2, 1, "Coffee"),
        Term::new(3, 1, "Tea"),
        Term::new(4, 3, "Green"),
    ];

    let tree = sort_terms_hierarchically(&mut terms, 1);

    assert_eq!(ids(&tree), vec![2, 3]);
    assert_eq!(ids(&tree[1].children), vec![4]);
    assert_eq!(ids(&terms), vec![1]);
}

#[test]
fn empty_input_gives_empty_tree() {
    let mut terms = Vec::new();
    assert!(sort_terms_hierarchically(&mut terms, ROOT_TERM_ID).is_empty());
}

// ── Dropped records ──────────────────────────────────────────────

#[test]
fn term_with_missing_parent_vanishes() {
    let mut terms = vec![
        Term::new(1, 0, "Drinks"),
        Term::new(4, 99, "Orphan"),
    ];

    let tree = sort_terms_hierarchically(&mut terms, ROOT_TERM_ID);

    assert_eq!(ids(&tree), vec![1]);
    assert_eq!(tree_size(&tree), 1);
    assert_eq!(ids(&terms), vec![4]);
}

#[test]
fn cycle_without_root_is_dropped() {
    let mut terms = vec![
        Term::new(1, 0, "Drinks"),
        Term::new(10, 11, "A"),
        Term::new(11, 10, "B"),
    ];

    let tree = sort_terms_hierarchically(&mut terms, ROOT_TERM_ID);

    assert_eq!(tree_size(&tree), 1);
    assert_eq!(ids(&terms), vec![10, 11]);
}

#[test]
fn self_parented_term_is_dropped() {
    let mut terms = vec![Term::new(6, 6, "Loop")];
    let tree = sort_terms_hierarchically(&mut terms, ROOT_TERM_ID);
    assert!(tree.is_empty());
    assert_eq!(terms.len(), 1);
}

#[test]
fn duplicate_sibling_ids_collapse_to_last_record() {
    let mut terms = vec![
        Term::new(1, 0, "Old name"),
        Term::new(3, 0, "Food"),
        Term::new(1, 0, "New name"),
    ];

    let tree = sort_terms_hierarchically(&mut terms, ROOT_TERM_ID);

    assert_eq!(ids(&tree), vec![1, 3]);
    assert_eq!(tree[0].name, "New name");
}

#[test]
fn long_parent_chain_is_cut_at_max_depth() {
    let mut terms: Vec<Term> = (1..=20_000u64).map(|id| Term::new(id, id - 1, "t")).collect();

    let tree = sort_terms_hierarchically(&mut terms, ROOT_TERM_ID);

    assert_eq!(tree_size(&tree), MAX_TERM_DEPTH);
    assert_eq!(terms.len(), 20_000 - MAX_TERM_DEPTH);
    assert_eq!(terms[0].term_id, MAX_TERM_DEPTH as u64 + 1);

    let mut deepest = &tree[0];
    while let Some(child) = deepest.children.first() {
        deepest = child;
    }
    assert_eq!(deepest.term_id, MAX_TERM_DEPTH as u64);
    assert!(serde_json::to_string(&tree).is_ok());
}

#[test]
fn tree_exactly_max_depth_deep_is_kept_whole() {
    let mut terms: Vec<Term> = (1..=MAX_TERM_DEPTH as u64)
        .map(|id| Term::new(id, id - 1, "t"))
        .collect();
    let tree = sort_terms_hierarchically(&mut terms, ROOT_TERM_ID);
    assert_eq!(tree_size(&tree), MAX_TERM_DEPTH);
    assert!(terms.is_empty());
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn extra_fields_survive_a_trip_through_the_tree() {
    let raw = json!([
        {"term_id": 1, "parent": 0, "name": "Drinks", "taxonomy": "product_cat"},
        {"term_id": 2, "parent": 1, "name": "Coffee", "description": "hot"}
    ]);
    let mut terms: Vec<Term> = serde_json::from_value(raw).unwrap();

    let tree = sort_terms_hierarchically(&mut terms, ROOT_TERM_ID);
    let out = serde_json::to_value(&tree).unwrap();

    assert_eq!(out[0]["taxonomy"], "product_cat");
    assert_eq!(out[0]["children"][0]["description"], "hot");
    assert_eq!(out[0]["children"][0]["children"], json!([]));
}

#[test]
fn missing_optional_fields_default() {
    let t: Term = serde_json::from_value(json!({"term_id": 8})).unwrap();
    assert_eq!(t.parent, ROOT_TERM_ID);
    assert_eq!(t.name, "");
    assert_eq!(t.count, 0);
    assert!(t.extra.is_empty());
}
