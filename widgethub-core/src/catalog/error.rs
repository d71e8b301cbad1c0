//! Catalog error types

use thiserror::Error;

/// Catalog integrity errors
///
/// Every one of these means the catalog data itself is broken. They are
/// never produced for an unknown route, which is an ordinary `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A widget references a category that does not exist
    #[error("Unknown category '{name}'. Every widget must reference an existing category name")]
    UnknownCategory { name: String },

    #[error("Duplicate category name '{name}'")]
    DuplicateCategoryName { name: String },

    #[error("Duplicate category path '{path}'")]
    DuplicateCategoryPath { path: String },

    #[error("Duplicate widget id '{id}'")]
    DuplicateWidgetId { id: String },

    #[error("Duplicate widget path '{path}'")]
    DuplicateWidgetPath { path: String },

    #[error("Widget '{name}' has an empty id")]
    EmptyWidgetId { name: String },

    /// A `to` field does not start with `/`
    #[error("Path '{path}' must be root-relative (start with '/')")]
    NotRootRelative { path: String },

    #[error("Unsupported apiVersion '{found}'. Expected '{expected}'")]
    UnsupportedApiVersion { found: String, expected: String },

    #[error("Invalid kind '{found}'. Expected '{expected}'")]
    InvalidKind { found: String, expected: String },
}
