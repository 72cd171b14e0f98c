//! Core export engine.
//!
//! ## Module Structure
//!
//! - `placeholder`: `:name` → `{{name}}` rewriting with case inference
//! - `phrase`: separator splitting and dialect classification
//! - `choice`: `{0}`/`{1}`/`[2,*]` bucket resolution
//! - `tree`: translation tree model
//! - `transform`: recursive tree transformation
//! - `parsers`: JSON and TOML source loaders
//! - `scanner`: locale discovery and source file enumeration
//! - `writer`: pretty JSON output
//! - `export`: per-locale export driver
//! - `ledger`: per-locale content hash ledger
//! - `error`: fatal export errors

pub mod choice;
pub mod error;
pub mod export;
pub mod ledger;
pub mod parsers;
pub mod phrase;
pub mod placeholder;
pub mod scanner;
pub mod transform;
pub mod tree;
pub mod writer;

pub use error::ExportError;
pub use export::{ExportOptions, ExportSummary, LocaleExport, export};
pub use ledger::{Ledger, LedgerOutcome};
pub use transform::{EmptyBuckets, TransformOptions, TransformStats, Transformer, transform};
pub use tree::{Namespace, Scalar, Tree};
