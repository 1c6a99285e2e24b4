use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write a fetched page into `destination`, replacing any existing file.
///
/// The destination directory must already exist.
pub fn write_page(destination: &Path, file_name: &str, html: &str) -> Result<PathBuf> {
    anyhow::ensure!(
        destination.is_dir(),
        "Destination directory '{}' does not exist",
        destination.display()
    );

    let path = destination.join(file_name);
    fs::write(&path, html)
        .with_context(|| format!("Unable to write down file '{}'", path.display()))?;
    tracing::info!(path = %path.display(), bytes = html.len(), "Wrote page");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();

        let path = write_page(dir.path(), "page_0_roma.html", "<p>old</p>").unwrap();
        assert_eq!(path, dir.path().join("page_0_roma.html"));

        write_page(dir.path(), "page_0_roma.html", "<p>hello</p>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hello</p>");
    }

    #[test]
    fn test_missing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("pages");
        let err = write_page(&missing, "roma.html", "<p></p>").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert!(!missing.exists());
    }
}
