//! widgethub Catalog - widgets, categories and route lookup
//!
//! This module holds the static catalog data and the lookups the
//! site navigation is built on.
//!
//! # Overview
//!
//! The catalog system allows callers to:
//! - Resolve a route path to the widget or category it names
//! - Find the category a widget belongs to
//! - Group widgets under their categories for navigation
//! - Load and validate catalog files (`catalog.yaml`)
//!
//! # Architecture
//!
//! ```text
//! catalog.yaml (or built-in data)
//!     │
//!     ├── categories  ← name is the join key, `to` is the landing page
//!     └── widgets     ← `category` references a category name
//!            │
//!            ▼
//!     Catalog ──► build_tree() ──► Tree (category → widgets)
//!            │
//!            └──► category_from_path() / widget_from_path()
//! ```

mod builtin;
mod error;
mod index;
mod model;

pub use builtin::builtin_catalog;
pub use error::CatalogError;
pub use index::{Catalog, Route, CATALOG_API_VERSION, CATALOG_KIND};
pub use model::{Category, Tree, TreeNode, Widget};

#[cfg(test)]
mod tests;
