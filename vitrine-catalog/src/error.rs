//! Error type for discovery and aggregation.

use std::fmt;

use vitrine_parser::doc::ExtractError;

/// Error that can occur while building the styleguide catalog
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// IO error while walking or reading template files
    Io(String),
    /// Doc extraction error for a specific template
    Extract(ExtractError),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(msg) => write!(f, "IO error: {}", msg),
            CatalogError::Extract(err) => write!(f, "Extraction error: {}", err),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err.to_string())
    }
}

impl From<walkdir::Error> for CatalogError {
    fn from(err: walkdir::Error) -> Self {
        CatalogError::Io(err.to_string())
    }
}

impl From<ExtractError> for CatalogError {
    fn from(err: ExtractError) -> Self {
        CatalogError::Extract(err)
    }
}
