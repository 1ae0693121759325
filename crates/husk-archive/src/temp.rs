use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// A staging file for the intermediate output of a two-stage extraction.
///
/// The file lives under the configured temp directory with a per-codec
/// prefix; name uniqueness comes from `tempfile`'s randomized suffix, so
/// concurrent extractions cannot collide. The file is removed when the
/// artifact is dropped, on every path out of the owning extraction. Removal
/// failures are logged and swallowed so they never mask the primary outcome.
pub struct TempArtifact {
    file: Option<NamedTempFile>,
}

impl TempArtifact {
    pub fn new(tmp_dir: &Path, prefix: &str) -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(prefix)
            .tempfile_in(tmp_dir)
            .map_err(Error::TempArtifact)?;

        Ok(Self { file: Some(file) })
    }

    pub fn path(&self) -> &Path {
        // Invariant: `file` is only None after Drop has run.
        self.file
            .as_ref()
            .map(NamedTempFile::path)
            .unwrap_or(Path::new(""))
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            let path = file.path().to_path_buf();
            if let Err(err) = file.close() {
                tracing::warn!(path = %path.display(), error = %err, "failed to remove temp artifact");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn artifact_lives_in_requested_directory() {
        let dir = tempdir().unwrap();
        let artifact = TempArtifact::new(dir.path(), "gzip").unwrap();

        assert!(artifact.path().starts_with(dir.path()));
        assert!(
            artifact
                .path()
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("gzip")
        );
    }

    #[test]
    fn drop_removes_file() {
        let dir = tempdir().unwrap();
        let path = {
            let artifact = TempArtifact::new(dir.path(), "bzip2").unwrap();
            std::fs::write(artifact.path(), b"intermediate").unwrap();
            artifact.path().to_path_buf()
        };

        assert!(!path.exists());
    }

    #[test]
    fn concurrent_artifacts_get_distinct_paths() {
        let dir = tempdir().unwrap();
        let a = TempArtifact::new(dir.path(), "gzip").unwrap();
        let b = TempArtifact::new(dir.path(), "gzip").unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn missing_temp_dir_is_a_creation_error() {
        let dir = tempdir().unwrap();
        let absent = dir.path().join("absent");
        let result = TempArtifact::new(&absent, "gzip");
        assert!(matches!(result, Err(Error::TempArtifact(_))));
    }
}
