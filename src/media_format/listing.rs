use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::media_format::{FormatError, Result};
use crate::print_warning;

/// Snapshot of the regular files directly inside a directory.
///
/// Read once per run; matching and planning never touch the filesystem again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    root: PathBuf,
    files: Vec<String>,
}

impl DirectoryListing {
    /// List regular files in `root` without recursing, sorted by name.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    pub fn read(root: &Path) -> Result<Self> {
        fs::metadata(root).map_err(|source| FormatError::Io {
            path: root.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|error| FormatError::Io {
                path: root.to_path_buf(),
                source: error.into(),
            })?;
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => files.push(name.to_string()),
                None => print_warning!("Skipping file with invalid UTF-8 name: {}", entry.path().display()),
            }
        }
        files.sort_unstable();

        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    /// Create a listing from known file names.
    #[must_use]
    pub fn from_names<I, S>(root: impl Into<PathBuf>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.into(),
            files: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Fail with [`FormatError::EmptyDirectory`] if there are no files.
    ///
    /// # Errors
    /// Returns an error if the listing is empty.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(FormatError::EmptyDirectory {
                path: self.root.clone(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::{self, File};

    use tempfile::tempdir;

    #[test]
    fn test_read_lists_only_regular_files() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("b.mkv")).unwrap();
        File::create(dir.path().join("a.mkv")).unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();
        File::create(dir.path().join("subdir").join("nested.mkv")).unwrap();

        let listing = DirectoryListing::read(dir.path()).unwrap();
        assert_eq!(listing.files(), ["a.mkv", "b.mkv"]);
        assert_eq!(listing.root(), dir.path());
    }

    #[test]
    fn test_read_empty_directory() {
        let dir = tempdir().unwrap();
        let listing = DirectoryListing::read(dir.path()).unwrap();
        assert!(listing.is_empty());
        assert!(matches!(
            listing.ensure_not_empty(),
            Err(FormatError::EmptyDirectory { .. })
        ));
    }

    #[test]
    fn test_directory_with_only_subdirectories_is_empty() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("Season 1")).unwrap();
        let listing = DirectoryListing::read(dir.path()).unwrap();
        assert!(listing.ensure_not_empty().is_err());
    }

    #[test]
    fn test_read_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(
            DirectoryListing::read(&missing),
            Err(FormatError::Io { .. })
        ));
    }

    #[test]
    fn test_from_names_keeps_order() {
        let listing = DirectoryListing::from_names("/tmp", ["z.mkv", "a.mkv"]);
        assert_eq!(listing.files(), ["z.mkv", "a.mkv"]);
        assert_eq!(listing.len(), 2);
        assert!(listing.ensure_not_empty().is_ok());
    }
}
