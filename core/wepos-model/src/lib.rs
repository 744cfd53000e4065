//! Catalog model for WePOS.
//!
//! - [`Term`]: a taxonomy record (product category) with a parent link
//! - [`sort_terms_hierarchically`]: turns a flat term list into a tree
//! - [`Catalog`]: the product catalog the POS frontend reads categories and
//!   post listings from
//! - [`post_type_options`]: `id → title` option lists for select fields

mod catalog;
mod error;
mod post;
mod term;

pub use catalog::{Catalog, PRODUCT_CATEGORY_TAXONOMY};
pub use error::{CatalogError, CatalogResult};
pub use post::{Post, SelectOption, post_type_options, NO_SELECTION_VALUE};
pub use term::{MAX_TERM_DEPTH, ROOT_TERM_ID, Term, sort_terms_hierarchically, tree_size};
