//! Core transform engine.
//!
//! ## Module Structure
//!
//! - `parsers`: swc parsing of JS/TS sources
//! - `transform`: the i18n argument injection transform for a single file
//! - `file_scanner`: project file discovery
//! - `context`: configuration plus a parallel run over all project files

pub mod context;
pub mod file_scanner;
pub mod parsers;
pub mod transform;

pub use context::{FileOutcome, TransformContext, TransformRun};
pub use transform::{
    MultipleUsageError, Rewrite, SkippedRewrite, TransformMode, TransformOptions, TransformOutput,
    generate_id, transform_source,
};
