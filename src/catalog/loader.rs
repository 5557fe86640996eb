//! Fee data file loading.
//!
//! This module provides the [`CatalogLoader`] type for reading the flat JSON
//! fee table from disk.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::{QuoteError, QuoteResult};

use super::store::Catalog;

/// Loads a [`Catalog`] from a fee data file.
///
/// # File Format
///
/// The file holds a JSON array of flat records:
/// ```text
/// [
///   {
///     "Admit_Year": 2024,
///     "Academic_Program": "Other",
///     "Admit_Type": "LYS",
///     "Citizenship": "Turkish Citizen",
///     "Tuition_Fee": 1565000,
///     "Tuition_Fall": 782500,
///     "Tuition_Spring": 899875,
///     "Currency": "Turkish Lira"
///   }
/// ]
/// ```
///
/// # Example
///
/// ```no_run
/// use tuition_engine::catalog::CatalogLoader;
///
/// let catalog = CatalogLoader::load("./data/fees.json")?;
/// println!("Loaded {} tuition records", catalog.len());
/// # Ok::<(), tuition_engine::error::QuoteError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Loads and validates the fee data file.
    ///
    /// # Returns
    ///
    /// Returns the catalog on success, or an error if:
    /// - the file cannot be read (`DataFileNotFound`)
    /// - the file is not valid JSON (`DataParseError`)
    /// - the data is not a non-empty array of records (`InvalidData`)
    /// - no record is complete (`EmptyCatalog`)
    pub fn load<P: AsRef<Path>>(path: P) -> QuoteResult<Catalog> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| QuoteError::DataFileNotFound {
            path: path_str.clone(),
        })?;

        let data: Value =
            serde_json::from_str(&content).map_err(|e| QuoteError::DataParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let catalog = Catalog::load(&data)?;
        info!(path = %path_str, records = catalog.len(), "Tuition data loaded");
        Ok(catalog)
    }

    /// Loads the fee data file, falling back to the built-in sample records.
    pub fn load_or_fallback<P: AsRef<Path>>(path: P) -> Catalog {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to load tuition data, continuing with fallback records"
                );
                Catalog::fallback()
            }
        }
    }
}
