/*!
 * Tests for file utility functions
 */

use std::fs;
use anyhow::Result;
use mdnorm::errors::NormalizeError;
use mdnorm::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "exists.md", "content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));

    Ok(())
}

/// Test that ensure_dir creates directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;

    assert!(FileManager::dir_exists(&nested));

    Ok(())
}

/// Test that find_files only returns matching extensions, sorted
#[test]
fn test_find_files_withMixedFiles_shouldReturnSortedMarkdown() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let sub = temp_dir.path().join("02_Interview");
    fs::create_dir(&sub)?;
    common::create_test_file(&sub, "02.md", "b")?;
    common::create_test_file(&sub, "01.MD", "a")?;
    common::create_test_file(&sub, "notes.txt", "c")?;

    let files = FileManager::find_files(temp_dir.path(), ".md")?;

    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("01.MD"));
    assert!(files[1].ends_with("02.md"));

    Ok(())
}

/// Test that expand_inputs keeps files and expands directories
#[test]
fn test_expand_inputs_withFileAndDir_shouldKeepOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().join("chapter");
    fs::create_dir(&dir)?;
    let inner = common::create_test_file(&dir, "inner.md", "x")?;
    let single = temp_dir.path().join("not_yet_created.md");

    let expanded = FileManager::expand_inputs(&[single.clone(), dir])?;

    assert_eq!(expanded, vec![single, inner]);

    Ok(())
}

/// Test the existence checks before reading a document
#[test]
fn test_check_document_withMissingPieces_shouldClassifyErrors() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let missing_dir = temp_dir.path().join("nope").join("file.md");
    assert!(matches!(
        FileManager::check_document(&missing_dir),
        Err(NormalizeError::MissingDirectory(_))
    ));

    let missing_file = temp_dir.path().join("file.md");
    assert!(matches!(
        FileManager::check_document(&missing_file),
        Err(NormalizeError::FileNotFound(_))
    ));

    let present = common::create_test_file(temp_dir.path(), "file.md", "x")?;
    assert!(FileManager::check_document(&present).is_ok());

    Ok(())
}

/// Test that non UTF-8 content is reported as such
#[test]
fn test_read_document_withInvalidUtf8_shouldReturnInvalidUtf8() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("latin1.md");
    fs::write(&path, [0xff, 0xfe, 0x41])?;

    assert!(matches!(
        FileManager::read_document(&path),
        Err(NormalizeError::InvalidUtf8(_))
    ));

    Ok(())
}

/// Test writing and reading back a document
#[test]
fn test_write_document_withContent_shouldOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "doc.md", "old")?;

    FileManager::write_document(&path, "新しい\r\n内容")?;

    assert_eq!(FileManager::read_document(&path)?, "新しい\r\n内容");

    Ok(())
}
