//! Per-format decoder adapters.
//!
//! Each adapter wraps one codec backend behind the [`Extractable`] trait.
//! Container codecs (zip, tar) take a destination *directory*; compression
//! codecs (gzip, bzip2) take a destination *file* path. Adapters hold no
//! per-call state, so one instance serves concurrent extractions.

use std::path::Path;

use crate::error::Result;

#[cfg(feature = "bzip2")]
mod bzip2;
#[cfg(feature = "gzip")]
mod gzip;
#[cfg(feature = "tar")]
mod tar;
#[cfg(feature = "zip")]
mod zip;

#[cfg(feature = "bzip2")]
pub use bzip2::Bzip2Adapter;
#[cfg(feature = "gzip")]
pub use gzip::GzipAdapter;
#[cfg(feature = "tar")]
pub use tar::TarAdapter;
#[cfg(feature = "zip")]
pub use zip::ZipAdapter;

/// A codec's decode capability.
pub trait Extractable: Send + Sync {
    /// Decode `source` into `destination`.
    ///
    /// `destination` is a directory for container codecs and a file path for
    /// compression-only codecs.
    fn extract(&self, source: &Path, destination: &Path) -> Result<()>;
}
