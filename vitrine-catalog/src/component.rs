//! Component and module records.
//!
//! Both are plain data, immutable once built, and serialize directly into the
//! rendering context the host template engine consumes.

use serde::{Deserialize, Serialize};

use vitrine_parser::DocMap;

/// One template file's metadata entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Id-safe slug derived from the file name
    pub id: String,
    /// Display name: the doc `name` tag if present, else the file name,
    /// both run through the display formatter
    pub name: String,
    /// File name as found on disk
    pub file_name: String,
    /// Root-relative template path, e.g. `styleguide/layout/header.html`
    pub template: String,
    /// Parsed doc tags
    pub doc: DocMap,
    /// Routed URL to the component view (anchor-style)
    pub link: String,
}

/// A top-level folder under the reserved styleguide directory, grouping
/// related components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Folder-name-derived slug
    pub id: String,
    /// Display name derived from the folder name
    pub name: String,
    /// Routed URL to the module view
    pub link: String,
    /// Doc tags from the folder's reserved doc file, if any
    pub doc: DocMap,
    /// Components in sorted traversal order
    pub components: Vec<Component>,
}
