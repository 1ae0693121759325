use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::adapters::Extractable;
use crate::error::{Error, Result};

/// Unpacks a zip archive into a destination directory.
pub struct ZipAdapter;

impl Extractable for ZipAdapter {
    fn extract(&self, source: &Path, destination: &Path) -> Result<()> {
        let file = File::open(source).map_err(|e| Error::Decode {
            path: source.to_path_buf(),
            source: e,
        })?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| Error::Decode {
            path: source.to_path_buf(),
            source: io::Error::other(e),
        })?;

        husk_fs::ensure_dir(destination)?;

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index).map_err(|e| Error::Decode {
                path: source.to_path_buf(),
                source: io::Error::other(e),
            })?;

            // enclosed_name rejects absolute paths and `..` escapes.
            let relative = entry
                .enclosed_name()
                .ok_or_else(|| Error::UnsafeEntryPath(PathBuf::from(entry.name())))?;
            let target = destination.join(relative);

            if entry.is_dir() {
                husk_fs::ensure_dir(&target)?;
                continue;
            }

            if let Some(parent) = target.parent() {
                husk_fs::ensure_dir(parent)?;
            }

            let mut output = File::create(&target).map_err(|e| Error::Decode {
                path: target.clone(),
                source: e,
            })?;
            io::copy(&mut entry, &mut output).map_err(|e| Error::Decode {
                path: source.to_path_buf(),
                source: e,
            })?;
        }

        Ok(())
    }
}
