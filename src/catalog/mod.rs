//! The tuition catalog: loading, filtering and lookup of fee records.
//!
//! # Example
//!
//! ```no_run
//! use tuition_engine::catalog::CatalogLoader;
//! use tuition_engine::models::{CatalogField, Selection};
//!
//! let catalog = CatalogLoader::load_or_fallback("./data/fees.json");
//! let years = catalog.distinct_values(CatalogField::AdmitYear, &Selection::new());
//! println!("Admit years: {:?}", years);
//! ```

mod fallback;
mod loader;
mod record_parser;
mod store;

pub use fallback::fallback_records;
pub use loader::CatalogLoader;
pub use store::Catalog;
