use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::NormalizeError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Find files with a specific extension in a directory, sorted by path
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let extension = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(extension) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Expand input paths: files are kept as given, directories become the
    /// Markdown files beneath them.
    pub fn expand_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut result = Vec::with_capacity(paths.len());
        for path in paths {
            if path.is_dir() {
                result.extend(Self::find_files(path, "md")?);
            } else {
                result.push(path.clone());
            }
        }
        Ok(result)
    }

    /// Check that a document can be read: its directory and the file exist
    pub fn check_document<P: AsRef<Path>>(path: P) -> std::result::Result<(), NormalizeError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !Self::dir_exists(parent) {
                return Err(NormalizeError::MissingDirectory(parent.to_path_buf()));
            }
        }
        if !Self::file_exists(path) {
            return Err(NormalizeError::FileNotFound(path.to_path_buf()));
        }
        Ok(())
    }

    /// Read a whole UTF-8 document
    pub fn read_document<P: AsRef<Path>>(path: P) -> std::result::Result<String, NormalizeError> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => NormalizeError::FileNotFound(path.to_path_buf()),
            ErrorKind::InvalidData => NormalizeError::InvalidUtf8(path.to_path_buf()),
            _ => NormalizeError::Io {
                path: path.to_path_buf(),
                source,
            },
        })
    }

    /// Overwrite a document with new content
    pub fn write_document<P: AsRef<Path>>(path: P, content: &str) -> std::result::Result<(), NormalizeError> {
        let path = path.as_ref();
        fs::write(path, content).map_err(|source| NormalizeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
