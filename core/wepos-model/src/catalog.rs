//! Product catalog loaded from a JSON document.
//!
//! ```json
//! {
//!   "terms": { "product_cat": [ { "term_id": 1, "parent": 0, "name": "Drinks" } ] },
//!   "posts": [ { "id": 7, "post_type": "page", "post_title": "Checkout" } ]
//! }
//! ```

use crate::error::CatalogResult;
use crate::post::Post;
use crate::term::{ROOT_TERM_ID, Term, sort_terms_hierarchically, tree_size};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Taxonomy holding product categories.
pub const PRODUCT_CATEGORY_TAXONOMY: &str = "product_cat";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Flat term lists keyed by taxonomy.
    #[serde(default)]
    pub terms: BTreeMap<String, Vec<Term>>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Catalog {
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> CatalogResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            taxonomies = catalog.terms.len(),
            posts = catalog.posts.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// All terms of `taxonomy`, empty ones included, as a flat list.
    pub fn terms(&self, taxonomy: &str) -> Vec<Term> {
        self.terms.get(taxonomy).cloned().unwrap_or_default()
    }

    /// Product categories arranged as a tree under the root.
    pub fn product_categories(&self) -> Vec<Term> {
        let mut flat = self.terms(PRODUCT_CATEGORY_TAXONOMY);
        let total = flat.len();
        let tree = sort_terms_hierarchically(&mut flat, ROOT_TERM_ID);
        if !flat.is_empty() {
            debug!(
                dropped = flat.len(),
                total,
                "Categories unreachable from the root were left out"
            );
        }
        debug!(nodes = tree_size(&tree), "Built category tree");
        tree
    }

    pub fn posts_of_type<'a>(&'a self, post_type: &'a str) -> impl Iterator<Item = &'a Post> + 'a {
        self.posts.iter().filter(move |p| p.post_type == post_type)
    }
}
