use crate::error::{Error, Result};

/// One decode capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodecKind {
    Zip,
    Tar,
    Gzip,
    Bzip2,
}

impl CodecKind {
    pub(crate) const COUNT: usize = 4;

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Tar => "tar",
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
        }
    }

    /// True when this codec decodes to a flat byte stream rather than a
    /// directory tree, so extraction may need a second container stage.
    pub fn is_compression_only(self) -> bool {
        matches!(self, Self::Gzip | Self::Bzip2)
    }
}

impl std::fmt::Display for CodecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode plan derived from a file name: the outer codec, plus whether its
/// output must be unpacked as a nested tar archive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecPlan {
    pub outer: CodecKind,
    pub nested_tar: bool,
}

impl CodecPlan {
    pub fn stage_count(&self) -> usize {
        if self.nested_tar { 2 } else { 1 }
    }
}

/// Extension table: `(extension, outer codec, compound tarball shorthand)`.
///
/// Compound shorthands (`tgz`, `tbz2`) force the nested-tar stage; the plain
/// compression extensions only get it when the remaining name still ends in
/// `.tar`.
const EXTENSIONS: &[(&str, CodecKind, bool)] = &[
    ("zip", CodecKind::Zip, false),
    ("tar", CodecKind::Tar, false),
    ("tgz", CodecKind::Gzip, true),
    ("gz", CodecKind::Gzip, false),
    ("gzip", CodecKind::Gzip, false),
    ("tbz2", CodecKind::Bzip2, true),
    ("bz2", CodecKind::Bzip2, false),
    ("bzip2", CodecKind::Bzip2, false),
];

/// Classify a file name into a [`CodecPlan`].
///
/// Matching is case-insensitive and purely lexical; the file does not have to
/// exist. A name without a recognized extension fails with
/// [`Error::UnknownFormat`].
pub fn classify(file_name: &str) -> Result<CodecPlan> {
    let lowered = file_name.to_lowercase();

    let (stem, ext) = lowered
        .rsplit_once('.')
        .ok_or_else(|| Error::UnknownFormat(file_name.to_string()))?;

    let (_, kind, compound) = EXTENSIONS
        .iter()
        .find(|(candidate, _, _)| *candidate == ext)
        .ok_or_else(|| Error::UnknownFormat(file_name.to_string()))?;

    // A gzip/bzip2 file may be a lone compressed file (e.g. a .sql.gz dump);
    // only a .tar inner name marks it as a tarball.
    let nested_tar = *compound || (kind.is_compression_only() && stem.ends_with(".tar"));

    Ok(CodecPlan {
        outer: *kind,
        nested_tar,
    })
}

/// The name a lone compressed file is stored under once decoded: the
/// lowercased base name with its outer extension stripped.
pub(crate) fn decoded_file_name(file_name: &str) -> String {
    let lowered = file_name.to_lowercase();
    match lowered.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => lowered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_stage_plans() {
        for (name, kind) in [
            ("a.zip", CodecKind::Zip),
            ("a.tar", CodecKind::Tar),
            ("a.gz", CodecKind::Gzip),
            ("a.gzip", CodecKind::Gzip),
            ("a.bz2", CodecKind::Bzip2),
            ("a.bzip2", CodecKind::Bzip2),
        ] {
            let plan = classify(name).unwrap();
            assert_eq!(plan.outer, kind, "{name}");
            assert!(!plan.nested_tar, "{name}");
            assert_eq!(plan.stage_count(), 1);
        }
    }

    #[test]
    fn compound_plans_end_in_tar() {
        for (name, outer) in [
            ("a.tar.gz", CodecKind::Gzip),
            ("a.tgz", CodecKind::Gzip),
            ("a.tar.bz2", CodecKind::Bzip2),
            ("a.tbz2", CodecKind::Bzip2),
        ] {
            let plan = classify(name).unwrap();
            assert_eq!(plan.outer, outer, "{name}");
            assert!(plan.nested_tar, "{name}");
            assert_eq!(plan.stage_count(), 2);
        }
    }

    #[test]
    fn compressed_single_file_is_one_stage() {
        let plan = classify("dump.sql.gz").unwrap();
        assert_eq!(plan.outer, CodecKind::Gzip);
        assert!(!plan.nested_tar);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("A.ZIP").unwrap(), classify("a.zip").unwrap());
        assert_eq!(
            classify("BACKUP.TAR.GZ").unwrap(),
            classify("backup.tar.gz").unwrap()
        );
    }

    #[test]
    fn unrecognized_extension_is_rejected() {
        assert!(matches!(classify("a.xyz"), Err(Error::UnknownFormat(_))));
        assert!(matches!(classify("a.rar"), Err(Error::UnknownFormat(_))));
    }

    #[test]
    fn name_without_extension_is_rejected() {
        assert!(matches!(classify("archive"), Err(Error::UnknownFormat(_))));
    }

    #[test]
    fn decoded_name_strips_outer_extension() {
        assert_eq!(decoded_file_name("dump.sql.gz"), "dump.sql");
        assert_eq!(decoded_file_name("DUMP.SQL.GZ"), "dump.sql");
        assert_eq!(decoded_file_name("notes.gz"), "notes");
    }
}
