//! Reading reference data from JSON.

use std::path::{Path, PathBuf};

use super::CatalogData;

/// Sample data set compiled into the binary, used when no data file is configured.
const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Failure to obtain the reference data at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The data file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The data file is not a valid catalog document.
    #[error("failed to parse catalog {}: {source}", path.display())]
    Json {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// The embedded sample data set failed to parse.
    #[error("embedded catalog is invalid: {0}")]
    Embedded(#[source] serde_json::Error),
}

/// What: Parse a catalog document.
///
/// Inputs:
/// - `content`: JSON text with `users`, `categories` and `products` arrays.
///
/// Output:
/// - Parsed [`CatalogData`] or the `serde_json` error.
///
/// Details:
/// - Missing arrays default to empty; field names are camelCase (`ownerId`, `categoryId`).
///
/// # Errors
/// - Returns `Err` when `content` is not valid JSON or a record has missing/mistyped fields
pub fn parse_catalog(content: &str) -> Result<CatalogData, serde_json::Error> {
    serde_json::from_str(content)
}

/// What: Read and parse a catalog file.
///
/// Inputs:
/// - `path`: Location of the JSON document.
///
/// Output:
/// - Parsed [`CatalogData`], or a [`CatalogError`] naming the file.
///
/// # Errors
/// - Returns [`CatalogError::Io`] when the file cannot be read
/// - Returns [`CatalogError::Json`] when its content is not a valid catalog document
pub fn load_catalog(path: &Path) -> Result<CatalogData, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = parse_catalog(&content).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        users = data.users.len(),
        categories = data.categories.len(),
        products = data.products.len(),
        "loaded catalog"
    );
    Ok(data)
}

/// Parse the sample data set shipped inside the binary.
///
/// # Errors
/// - Returns [`CatalogError::Embedded`] if the bundled JSON does not parse
pub fn default_catalog() -> Result<CatalogData, CatalogError> {
    let data = parse_catalog(EMBEDDED_CATALOG).map_err(CatalogError::Embedded)?;
    tracing::info!(
        users = data.users.len(),
        categories = data.categories.len(),
        products = data.products.len(),
        "using embedded catalog"
    );
    Ok(data)
}
