//! The loaded catalog with its derived tree and search index
//!
//! A `Hub` is built once at start-up and only read afterwards. Share it
//! between threads with an `Arc`; nothing inside is mutable.

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::{builtin_catalog, Catalog, CatalogError, Route, Tree, Widget};
use crate::config::HubConfig;
use crate::search::{SearchHit, SearchIndex, SearchOptions};

#[derive(Debug)]
pub struct Hub {
    catalog: Catalog,
    tree: Tree,
    search: SearchIndex,
}

impl Hub {
    /// Validate `catalog` and derive the tree and search index
    pub fn new(catalog: Catalog, options: SearchOptions) -> Result<Self, CatalogError> {
        catalog.validate()?;

        let tree = catalog.tree()?;
        let search = SearchIndex::new(catalog.widgets().to_vec(), options);

        info!(
            "Catalog ready: {} categories, {} widgets",
            tree.len(),
            catalog.len()
        );

        Ok(Self {
            catalog,
            tree,
            search,
        })
    }

    /// Build from configuration, loading the catalog file if one is set
    pub fn from_config(config: &HubConfig) -> Result<Self> {
        let catalog = match &config.catalog {
            Some(path) => Catalog::from_file(path)?,
            None => builtin_catalog(),
        };

        Self::new(catalog, config.search.clone()).context("Catalog failed validation")
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Navigation tree over the whole catalog
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn search_index(&self) -> &SearchIndex {
        &self.search
    }

    pub fn search(&self, query: &str) -> Vec<&Widget> {
        self.search.search(query)
    }

    pub fn search_with_scores(&self, query: &str) -> Vec<SearchHit<'_>> {
        self.search.search_with_scores(query)
    }

    /// Widget and category for a route path
    pub fn resolve(&self, path: &str) -> Route<'_> {
        self.catalog.resolve(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use std::sync::Arc;

    #[test]
    fn test_default_hub() {
        let hub = Hub::from_config(&HubConfig::default()).unwrap();
        assert_eq!(hub.catalog().len(), 1);
        assert_eq!(hub.tree().len(), 1);
        assert_eq!(hub.search("netr")[0].to, "/parsers/netris2");
        assert!(hub.resolve("/parsers/netris2").widget.is_some());
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let catalog = Catalog::new(
            vec![Category {
                icon: "mdi:x".to_string(),
                name: "A".to_string(),
                description: String::new(),
                to: "/a".to_string(),
            }],
            vec![Widget {
                id: "1".to_string(),
                img: None,
                name: "Orphan".to_string(),
                description: String::new(),
                tags: vec![],
                category: "Missing".to_string(),
                to: "/a/orphan".to_string(),
            }],
        );

        let err = Hub::new(catalog, SearchOptions::default()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownCategory {
                name: "Missing".to_string()
            }
        );
    }

    #[test]
    fn test_hub_is_shared_across_threads() {
        let hub = Arc::new(Hub::from_config(&HubConfig::default()).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let hub = Arc::clone(&hub);
                std::thread::spawn(move || hub.search("netris2").len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }
}
