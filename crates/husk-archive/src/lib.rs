//! Multi-format archive extraction pipeline.
//!
//! Given a source file path and a destination directory, the pipeline
//! classifies the format(s) from the file name, dispatches to the right
//! decoder adapter(s), and materializes the content on disk. Compound
//! formats (a gzip- or bzip2-compressed tarball) run in two stages through a
//! staging file that is removed on every code path.
//!
//! # Architecture
//!
//! - `format.rs` - file-name classification into a decode plan
//! - `registry.rs` - lazy, memoizing adapter registry
//! - `temp.rs` - intermediate artifact lifecycle
//! - `extract.rs` - staged-extraction orchestration
//! - `adapters/` - per-format decoder adapters
//! - `config.rs` - extraction settings

pub use config::ArchiveConfig;
pub use error::{Error, Result};
pub use extract::Archive;
pub use format::{CodecKind, CodecPlan, classify};
pub use registry::AdapterRegistry;
pub use temp::TempArtifact;

pub mod adapters;
mod config;
mod error;
mod extract;
mod format;
mod registry;
mod temp;
