use std::fmt;
use std::path::{Path, PathBuf};

/// Declared serialization format of a generated SBOM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SbomFormat {
    CycloneDxJson,
}

impl fmt::Display for SbomFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SbomFormat::CycloneDxJson => write!(f, "CycloneDX-JSON"),
        }
    }
}

/// SbomArtifact value object: a generated SBOM file on disk
///
/// Produced by the generation stage and read (never modified) by the
/// upload stage. Cleanup of the file is left to the workspace owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomArtifact {
    path: PathBuf,
    format: SbomFormat,
    size_bytes: u64,
}

impl SbomArtifact {
    pub fn new(path: PathBuf, format: SbomFormat, size_bytes: u64) -> Self {
        Self {
            path,
            format,
            size_bytes,
        }
    }

    /// CycloneDX JSON artifact, the only format the pipeline produces
    pub fn cyclonedx_json(path: PathBuf, size_bytes: u64) -> Self {
        Self::new(path, SbomFormat::CycloneDxJson, size_bytes)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SbomFormat {
        self.format
    }

    /// Size observed when the artifact was produced
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// File name used for the multipart upload
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "bom.json".to_string())
    }
}
