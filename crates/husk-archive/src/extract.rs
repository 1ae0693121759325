use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;

use crate::adapters::Extractable;
use crate::config::ArchiveConfig;
use crate::error::{Error, Result};
use crate::format::{self, CodecKind, CodecPlan, classify};
use crate::registry::AdapterRegistry;
use crate::temp::TempArtifact;

/// The extraction orchestrator.
///
/// Owns the adapter registry and the configuration; classifies the source
/// name, resolves adapters, and drives one- or two-stage extraction.
pub struct Archive {
    registry: AdapterRegistry,
    config: ArchiveConfig,
}

impl Default for Archive {
    fn default() -> Self {
        Self::new(ArchiveConfig::default())
    }
}

impl Archive {
    pub fn new(config: ArchiveConfig) -> Self {
        Self::with_registry(config, AdapterRegistry::new())
    }

    /// Build with a pre-seeded registry (custom or instrumented adapters).
    pub fn with_registry(config: ArchiveConfig, registry: AdapterRegistry) -> Self {
        Self { registry, config }
    }

    /// Extract an archive file into a directory.
    ///
    /// Returns `Ok(true)` on success and `Ok(false)` on any runtime failure
    /// (unavailable adapter, decode error, temp-file trouble); the collapsed
    /// reason is logged at debug level, and [`Archive::try_extract`] exposes
    /// it to callers who need it. An unrecognized extension is the one
    /// condition surfaced as `Err`: it is a usage error, not an extraction
    /// failure.
    pub fn extract(
        &self,
        archive_name: impl AsRef<Path>,
        extract_dir: impl AsRef<Path>,
    ) -> Result<bool> {
        match self.try_extract(archive_name.as_ref(), extract_dir.as_ref()) {
            Ok(()) => Ok(true),
            Err(err @ Error::UnknownFormat(_)) => Err(err),
            Err(err) => {
                tracing::debug!(error = %err, "extraction failed");
                Ok(false)
            }
        }
    }

    /// Like [`Archive::extract`], but preserves the full error taxonomy.
    pub fn try_extract(&self, source: &Path, destination: &Path) -> Result<()> {
        let name = source
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(|| Error::UnknownFormat(source.display().to_string()))?;

        let plan = classify(name)?;
        tracing::debug!(
            name,
            outer = %plan.outer,
            stages = plan.stage_count(),
            "classified archive"
        );

        let adapter = self.registry.resolve(plan.outer)?;

        if plan.outer.is_compression_only() {
            self.extract_staged(&adapter, plan, name, source, destination)
        } else {
            adapter.extract(source, destination)
        }
    }

    /// Gzip/bzip2 outer stage: decode into a staging file, then either untar
    /// it or place it in the destination as a single decoded file.
    fn extract_staged(
        &self,
        outer: &Arc<dyn Extractable>,
        plan: CodecPlan,
        name: &str,
        source: &Path,
        destination: &Path,
    ) -> Result<()> {
        // Dropped on every path out of this function, which removes the file.
        let staged = TempArtifact::new(&self.config.tmp_path, plan.outer.name())?;

        // Stage-1 failure aborts before the tar stage is ever resolved.
        outer.extract(source, staged.path())?;

        if plan.nested_tar {
            let tar = self.registry.resolve(CodecKind::Tar)?;
            tar.extract(staged.path(), destination)
        } else {
            // A lone compressed file: land it in the destination under its
            // name minus the compression extension.
            let destination = husk_fs::clean_path(destination);
            husk_fs::ensure_dir(&destination)?;
            husk_fs::copy_file(
                staged.path(),
                destination.join(format::decoded_file_name(name)),
            )?;
            Ok(())
        }
    }
}
