use std::fs::File;
use std::io;
use std::path::Path;

use crate::adapters::Extractable;
use crate::error::{Error, Result};

/// Decompresses a gzip stream into a destination file.
pub struct GzipAdapter;

impl Extractable for GzipAdapter {
    fn extract(&self, source: &Path, destination: &Path) -> Result<()> {
        let input = File::open(source).map_err(|e| Error::Decode {
            path: source.to_path_buf(),
            source: e,
        })?;
        let mut decoder = flate2::read::GzDecoder::new(input);

        let mut output = File::create(destination).map_err(|e| Error::Decode {
            path: destination.to_path_buf(),
            source: e,
        })?;

        // A corrupt stream surfaces here as an InvalidData read error.
        io::copy(&mut decoder, &mut output).map_err(|e| Error::Decode {
            path: source.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }
}
