//! Catalog parsing, validation and route lookup
//!
//! A catalog file (`catalog.yaml`) lists every category and widget of
//! the site. It is loaded once at start-up and never mutated.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, trace};

use super::{CatalogError, Category, Tree, TreeNode, Widget};

/// Supported catalog file API version
pub const CATALOG_API_VERSION: &str = "widgethub.dev/v1";

/// Expected catalog file kind
pub const CATALOG_KIND: &str = "Catalog";

/// The static catalog: all categories and widgets, in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// API version
    #[serde(default = "default_api_version")]
    api_version: String,

    /// Kind (Catalog)
    #[serde(default = "default_kind")]
    kind: String,

    #[serde(default)]
    categories: Vec<Category>,

    #[serde(default)]
    widgets: Vec<Widget>,
}

/// The widget and category a route path points at
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Route<'a> {
    pub widget: Option<&'a Widget>,
    pub category: Option<&'a Category>,
}

fn default_api_version() -> String {
    CATALOG_API_VERSION.to_string()
}

fn default_kind() -> String {
    CATALOG_KIND.to_string()
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl Catalog {
    /// Create a catalog from categories and widgets
    pub fn new(categories: Vec<Category>, widgets: Vec<Widget>) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            categories,
            widgets,
        }
    }

    /// Parse catalog from YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Failed to parse catalog YAML")
    }

    /// Load catalog from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        let catalog: Self = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;

        debug!(
            "Loaded catalog from {} ({} categories, {} widgets)",
            path.display(),
            catalog.categories.len(),
            catalog.widgets.len()
        );
        Ok(catalog)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).context("Failed to serialize catalog")
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Number of widgets
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Validate the catalog contents
    ///
    /// Checks the header, that every `to` is root-relative and unique
    /// within its kind, that names and ids are unique, and that every
    /// widget references an existing category.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.api_version != CATALOG_API_VERSION {
            return Err(CatalogError::UnsupportedApiVersion {
                found: self.api_version.clone(),
                expected: CATALOG_API_VERSION.to_string(),
            });
        }

        if self.kind != CATALOG_KIND {
            return Err(CatalogError::InvalidKind {
                found: self.kind.clone(),
                expected: CATALOG_KIND.to_string(),
            });
        }

        let mut names = HashSet::new();
        let mut category_paths = HashSet::new();
        for category in &self.categories {
            check_root_relative(&category.to)?;

            if !names.insert(category.name.as_str()) {
                return Err(CatalogError::DuplicateCategoryName {
                    name: category.name.clone(),
                });
            }
            if !category_paths.insert(category.to.as_str()) {
                return Err(CatalogError::DuplicateCategoryPath {
                    path: category.to.clone(),
                });
            }
        }

        let mut ids = HashSet::new();
        let mut widget_paths = HashSet::new();
        for widget in &self.widgets {
            if widget.id.is_empty() {
                return Err(CatalogError::EmptyWidgetId {
                    name: widget.name.clone(),
                });
            }
            check_root_relative(&widget.to)?;

            if !ids.insert(widget.id.as_str()) {
                return Err(CatalogError::DuplicateWidgetId {
                    id: widget.id.clone(),
                });
            }
            if !widget_paths.insert(widget.to.as_str()) {
                return Err(CatalogError::DuplicateWidgetPath {
                    path: widget.to.clone(),
                });
            }

            self.category_of_widget(widget)?;
        }

        trace!(
            "Catalog valid ({} categories, {} widgets)",
            self.categories.len(),
            self.widgets.len()
        );
        Ok(())
    }

    /// Find the category whose landing page is the first segment of `path`
    ///
    /// `/parsers/netris2` and `/parsers` both resolve to the category at
    /// `/parsers`. Deeper segments are ignored.
    pub fn category_from_path(&self, path: &str) -> Option<&Category> {
        let first = path.split('/').find(|segment| !segment.is_empty())?;
        let category_path = format!("/{first}");

        self.categories.iter().find(|c| c.to == category_path)
    }

    /// Find the widget whose `to` equals `path` exactly
    ///
    /// No normalization happens: `/parsers/netris2/` does not match
    /// `/parsers/netris2`.
    pub fn widget_from_path(&self, path: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.to == path)
    }

    /// Resolve both the widget and the category for a route path
    pub fn resolve(&self, path: &str) -> Route<'_> {
        Route {
            widget: self.widget_from_path(path),
            category: self.category_from_path(path),
        }
    }

    /// Get a category by name
    pub fn category_by_name(&self, name: &str) -> Result<&Category, CatalogError> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CatalogError::UnknownCategory {
                name: name.to_string(),
            })
    }

    /// Get the category a widget belongs to
    pub fn category_of_widget(&self, widget: &Widget) -> Result<&Category, CatalogError> {
        self.category_by_name(&widget.category)
    }

    /// Widgets of one category, in catalog order
    pub fn widgets_in<'a>(&'a self, category_name: &'a str) -> impl Iterator<Item = &'a Widget> {
        self.widgets
            .iter()
            .filter(move |w| w.category == category_name)
    }

    /// Group widgets under their categories
    ///
    /// Categories appear in the order their first widget is seen,
    /// widgets keep their input order. A widget whose category is not
    /// in the catalog fails the whole build.
    pub fn build_tree(&self, widgets: &[Widget]) -> Result<Tree, CatalogError> {
        let mut tree: Tree = Vec::new();

        for widget in widgets {
            if let Some(node) = tree
                .iter_mut()
                .find(|node| node.category.name == widget.category)
            {
                node.widgets.push(widget.clone());
            } else {
                let category = self.category_of_widget(widget)?;
                let mut node = TreeNode::new(category.clone());
                node.widgets.push(widget.clone());
                tree.push(node);
            }
        }

        debug!(
            "Built tree with {} categories from {} widgets",
            tree.len(),
            widgets.len()
        );
        Ok(tree)
    }

    /// Tree over every widget of the catalog
    pub fn tree(&self) -> Result<Tree, CatalogError> {
        self.build_tree(&self.widgets)
    }
}

fn check_root_relative(path: &str) -> Result<(), CatalogError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(CatalogError::NotRootRelative {
            path: path.to_string(),
        })
    }
}
