use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum SBOM size accepted for upload (100 MB)
pub const MAX_SBOM_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Returns the size of a regular file, rejecting symlinks and directories
///
/// # Arguments
/// * `path` - The file to inspect
/// * `file_description` - Description used in error messages (e.g., "SBOM")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn regular_file_size(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "{} not found at {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates the working directory and returns its canonical form
///
/// The directory must exist, must not itself be a symbolic link and must
/// resolve to a directory.
pub fn validate_working_directory(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata = fs::symlink_metadata(path).map_err(|e| SbomError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    let canonical_path = path
        .canonicalize()
        .map_err(|e| SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    Ok(canonical_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sbom.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_not_symlink(&file_path, "write").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        fs::write(&target, "{}").unwrap();
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_not_symlink(&link, "write");
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_regular_file_size_reports_length() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sbom.json");
        fs::write(&file_path, "{\"bomFormat\":\"CycloneDX\"}").unwrap();

        let size = regular_file_size(&file_path, "SBOM").unwrap();
        assert_eq!(size, 25);
    }

    #[test]
    fn test_regular_file_size_missing_file() {
        let result = regular_file_size(Path::new("/nonexistent/sbom.json"), "SBOM");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("SBOM not found"));
    }

    #[test]
    fn test_regular_file_size_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = regular_file_size(temp_dir.path(), "SBOM");
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/sbom.json");
        assert!(validate_file_size(1000, &path, MAX_SBOM_SIZE).is_ok());
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/sbom.json");
        let result = validate_file_size(MAX_SBOM_SIZE + 1, &path, MAX_SBOM_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_validate_working_directory_valid() {
        let temp_dir = TempDir::new().unwrap();
        let canonical = validate_working_directory(temp_dir.path()).unwrap();
        assert!(canonical.is_absolute());
    }

    #[test]
    fn test_validate_working_directory_nonexistent() {
        let result = validate_working_directory(Path::new("/nonexistent/path/that/does/not/exist"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_working_directory_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("pom.xml");
        fs::write(&file_path, "<project/>").unwrap();

        let err = format!("{}", validate_working_directory(&file_path).unwrap_err());
        assert!(err.contains("Not a directory"));
    }
}
