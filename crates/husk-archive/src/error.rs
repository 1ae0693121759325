use std::io;
use std::path::PathBuf;

use crate::format::CodecKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown archive format: '{0}'")]
    UnknownFormat(String),

    #[error("no adapter available for {0} (backend feature disabled?)")]
    AdapterUnavailable(CodecKind),

    #[error("failed to decode '{path}': {source}")]
    Decode { path: PathBuf, source: io::Error },

    #[error("entry path escapes destination: '{0}'")]
    UnsafeEntryPath(PathBuf),

    #[error("failed to create temporary artifact: {0}")]
    TempArtifact(#[source] io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Fs(#[from] husk_fs::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
