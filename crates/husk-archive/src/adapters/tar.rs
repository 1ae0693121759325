use std::fs::File;
use std::path::Path;

use crate::adapters::Extractable;
use crate::error::{Error, Result};

/// Unpacks a (plain, already-decompressed) tar archive into a destination
/// directory.
pub struct TarAdapter;

impl Extractable for TarAdapter {
    fn extract(&self, source: &Path, destination: &Path) -> Result<()> {
        let file = File::open(source).map_err(|e| Error::Decode {
            path: source.to_path_buf(),
            source: e,
        })?;

        husk_fs::ensure_dir(destination)?;

        let mut archive = tar::Archive::new(file);
        archive.unpack(destination).map_err(|e| Error::Decode {
            path: source.to_path_buf(),
            source: e,
        })
    }
}
