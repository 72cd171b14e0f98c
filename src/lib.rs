//! Transloc - Laravel translation files to i18next JSON
//!
//! Transloc is a CLI tool and library that converts Laravel-style
//! translation trees into i18next resources. Placeholders such as `:name`
//! become `{{name}}` interpolations, pipe-separated plural phrases are
//! expanded into `_one`/`_other` (and `_zero`) keys, and a version ledger
//! records a content hash per locale.
//!
//! ```
//! use transloc::core::placeholder::rewrite;
//! use transloc::core::phrase::split_segments;
//!
//! assert_eq!(rewrite("Hello :NAME"), "Hello {{name, uppercase}}");
//! assert_eq!(split_segments("apple|apples"), vec!["apple", "apples"]);
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Phrase transformation and export engine
//! - `issues`: Recoverable problems reported during export

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
