//! Catalog record types

use serde::{Deserialize, Serialize};

/// A widget category (e.g. "Device parsers")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Display glyph identifier (e.g. `mdi:hexadecimal`)
    pub icon: String,

    /// Unique label, referenced by `Widget::category`
    pub name: String,

    /// Free text description
    pub description: String,

    /// Root-relative path of the category landing page
    pub to: String,
}

/// A single widget (device parser tool)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// Unique identifier
    pub id: String,

    /// Image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,

    /// Display name
    pub name: String,

    /// Free text description
    pub description: String,

    /// Searchable labels
    #[serde(default)]
    pub tags: Vec<String>,

    /// Name of the owning category
    pub category: String,

    /// Root-relative path of the widget page
    pub to: String,
}

/// One category of the navigation tree with its widgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    #[serde(flatten)]
    pub category: Category,

    pub widgets: Vec<Widget>,
}

/// Category-grouped view of the catalog
pub type Tree = Vec<TreeNode>;

impl Widget {
    /// Tags as a comma-separated string
    pub fn tags_display(&self) -> String {
        self.tags.join(", ")
    }
}

impl TreeNode {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            widgets: Vec::new(),
        }
    }
}
