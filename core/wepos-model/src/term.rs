use serde::{Deserialize, Serialize};
use tracing::warn;

/// Parent id of top-level terms.
pub const ROOT_TERM_ID: u64 = 0;

/// A taxonomy term (e.g. a product category).
///
/// `children` is filled in by [`sort_terms_hierarchically`]. Fields the
/// catalog carries beyond the ones named here are kept in `extra` and
/// serialized back inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub term_id: u64,
    #[serde(default)]
    pub parent: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub children: Vec<Term>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Term {
    /// Creates a term with no payload beyond its name.
    pub fn new(term_id: u64, parent: u64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            term_id,
            parent,
            slug: name.to_lowercase().replace(' ', "-"),
            name,
            count: 0,
            children: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Deepest level [`sort_terms_hierarchically`] builds below its starting
/// parent. Terms further down are left out like unreachable ones.
pub const MAX_TERM_DEPTH: usize = 64;

/// Moves every term under `parent_id` out of `terms` and into a tree.
///
/// Terms whose `parent` equals `parent_id` become the returned level; each of
/// them then collects its own children from what is left in `terms`, using
/// its `term_id` as the parent. A term is moved at most once, so it appears
/// at most once in the result.
///
/// Siblings sharing a `term_id` collapse into one node: the later record
/// replaces the earlier one in place.
///
/// Terms that cannot be reached from `parent_id` (a parent that does not
/// exist, a cycle that never touches `parent_id`) stay in `terms` and do not
/// appear in the tree. So do terms more than [`MAX_TERM_DEPTH`] levels down.
///
/// Every level rescans the remaining terms, so this is quadratic in the
/// worst case. Category trees are small.
pub fn sort_terms_hierarchically(terms: &mut Vec<Term>, parent_id: u64) -> Vec<Term> {
    attach_children(terms, parent_id, 1)
}

fn attach_children(terms: &mut Vec<Term>, parent_id: u64, depth: usize) -> Vec<Term> {
    if depth > MAX_TERM_DEPTH {
        if terms.iter().any(|t| t.parent == parent_id) {
            warn!(parent = parent_id, max_depth = MAX_TERM_DEPTH, "Term tree too deep, dropping lower levels");
        }
        return Vec::new();
    }

    let (matched, rest): (Vec<Term>, Vec<Term>) = std::mem::take(terms)
        .into_iter()
        .partition(|t| t.parent == parent_id);
    *terms = rest;

    let mut level: Vec<Term> = Vec::with_capacity(matched.len());
    for term in matched {
        match level.iter_mut().find(|t| t.term_id == term.term_id) {
            Some(slot) => *slot = term,
            None => level.push(term),
        }
    }

    for node in &mut level {
        node.children = attach_children(terms, node.term_id, depth + 1);
    }
    level
}

/// Number of nodes in a tree, counting every level.
pub fn tree_size(tree: &[Term]) -> usize {
    let mut pending: Vec<&Term> = tree.iter().collect();
    let mut size = 0;
    while let Some(term) = pending.pop() {
        size += 1;
        pending.extend(&term.children);
    }
    size
}
