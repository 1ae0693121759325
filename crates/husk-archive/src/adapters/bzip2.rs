use std::fs::File;
use std::io;
use std::path::Path;

use crate::adapters::Extractable;
use crate::error::{Error, Result};

/// Decompresses a bzip2 stream into a destination file.
pub struct Bzip2Adapter;

impl Extractable for Bzip2Adapter {
    fn extract(&self, source: &Path, destination: &Path) -> Result<()> {
        let input = File::open(source).map_err(|e| Error::Decode {
            path: source.to_path_buf(),
            source: e,
        })?;
        let mut decoder = bzip2::read::BzDecoder::new(input);

        let mut output = File::create(destination).map_err(|e| Error::Decode {
            path: destination.to_path_buf(),
            source: e,
        })?;

        io::copy(&mut decoder, &mut output).map_err(|e| Error::Decode {
            path: source.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }
}
