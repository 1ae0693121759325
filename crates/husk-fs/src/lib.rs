//! Filesystem primitives consumed by the Husk extraction pipeline.
//!
//! These are deliberately small and synchronous: lexical path cleaning,
//! directory creation, and single-file copy. Archive-specific logic lives in
//! `husk-archive`; nothing here knows what an archive is.

mod error;

pub use error::{Error, Result, from_io};

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path.
///
/// Collapses `.` segments, resolves `..` against preceding components, and
/// rebuilds the path with native separators. Does not touch the filesystem,
/// so the result may name something that does not exist.
pub fn clean_path(path: impl AsRef<Path>) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.as_ref().components() {
        match component {
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(part) => result.push(part),
            Component::RootDir => result.push("/"),
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::CurDir => {}
        }
    }

    result
}

/// Create a directory and any missing parents.
///
/// An existing directory is not an error.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    std::fs::create_dir_all(path.as_ref()).map_err(from_io)
}

/// Copy a single file, creating the destination's parent directory if needed.
///
/// Returns the number of bytes copied.
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<u64> {
    let dst = dst.as_ref();

    if let Some(parent) = dst.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }

    std::fs::copy(src.as_ref(), dst).map_err(from_io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn clean_path_collapses_relative_components() {
        assert_eq!(clean_path("foo/./bar/../qux"), Path::new("foo/qux"));
        assert_eq!(clean_path("foo//bar"), Path::new("foo/bar"));
    }

    #[test]
    fn clean_path_keeps_root() {
        let cleaned = clean_path("/opt/./app");
        assert!(cleaned.is_absolute());
        assert_eq!(cleaned, Path::new("/opt/app"));
    }

    #[test]
    fn clean_path_parent_of_root_is_root() {
        assert_eq!(clean_path("/../etc"), Path::new("/etc"));
    }

    #[test]
    fn ensure_dir_is_idempotent() -> Result<()> {
        let dir = tempdir()?;
        let nested = dir.path().join("a/b/c");
        ensure_dir(&nested)?;
        ensure_dir(&nested)?;
        assert!(nested.is_dir());
        Ok(())
    }

    #[test]
    fn copy_file_creates_parent() -> Result<()> {
        let dir = tempdir()?;
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("out/dst.txt");

        std::fs::write(&src, b"payload")?;
        let copied = copy_file(&src, &dst)?;

        assert_eq!(copied, 7);
        assert_eq!(std::fs::read(&dst)?, b"payload");
        Ok(())
    }

    #[test]
    fn copy_file_missing_source() {
        let dir = tempdir().unwrap();
        let result = copy_file(dir.path().join("absent"), dir.path().join("dst"));
        assert!(matches!(result, Err(Error::NotFound)));
    }
}
