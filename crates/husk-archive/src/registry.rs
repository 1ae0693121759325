use std::sync::{Arc, OnceLock};

use crate::adapters::Extractable;
use crate::error::{Error, Result};
use crate::format::CodecKind;

/// Memoizing adapter factory.
///
/// One adapter instance per [`CodecKind`], constructed on first resolution
/// and reused for the registry's lifetime. The per-kind `OnceLock` keeps
/// construction at-most-once even when several extractions race on first
/// use. The registry holds no extraction state.
pub struct AdapterRegistry {
    slots: [OnceLock<Option<Arc<dyn Extractable>>>; CodecKind::COUNT],
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self {
            slots: [const { OnceLock::new() }; CodecKind::COUNT],
        }
    }

    /// Seed a kind with a caller-supplied adapter.
    ///
    /// Must happen before the first `resolve` of that kind; a slot that has
    /// already been resolved keeps its adapter.
    pub fn register(&mut self, kind: CodecKind, adapter: Arc<dyn Extractable>) {
        let _ = self.slots[kind.index()].set(Some(adapter));
    }

    /// Look up the adapter for a kind, constructing it on first use.
    ///
    /// Fails with [`Error::AdapterUnavailable`] when the backend for that
    /// kind is compiled out.
    pub fn resolve(&self, kind: CodecKind) -> Result<Arc<dyn Extractable>> {
        self.slots[kind.index()]
            .get_or_init(|| build_adapter(kind))
            .clone()
            .ok_or(Error::AdapterUnavailable(kind))
    }
}

fn build_adapter(kind: CodecKind) -> Option<Arc<dyn Extractable>> {
    match kind {
        #[cfg(feature = "zip")]
        CodecKind::Zip => Some(Arc::new(crate::adapters::ZipAdapter)),
        #[cfg(not(feature = "zip"))]
        CodecKind::Zip => None,

        #[cfg(feature = "tar")]
        CodecKind::Tar => Some(Arc::new(crate::adapters::TarAdapter)),
        #[cfg(not(feature = "tar"))]
        CodecKind::Tar => None,

        #[cfg(feature = "gzip")]
        CodecKind::Gzip => Some(Arc::new(crate::adapters::GzipAdapter)),
        #[cfg(not(feature = "gzip"))]
        CodecKind::Gzip => None,

        #[cfg(feature = "bzip2")]
        CodecKind::Bzip2 => Some(Arc::new(crate::adapters::Bzip2Adapter)),
        #[cfg(not(feature = "bzip2"))]
        CodecKind::Bzip2 => None,
    }
}
