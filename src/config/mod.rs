//! Configuration loading for the tuition calculator.
//!
//! # Example
//!
//! ```no_run
//! use tuition_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Default language: {}", config.default_language());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, CalculatorSettings};
