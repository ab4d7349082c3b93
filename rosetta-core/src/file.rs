use std::{
    io::Write,
    path::{Path, PathBuf},
};

use miette::Diagnostic;
use thiserror::Error;

/// Generated output could not be persisted.
#[derive(Debug, Error, Diagnostic)]
#[error("cannot create file '{}'", .path.display())]
#[diagnostic(
    code(rosetta::file_write),
    help("bad permissions, bad filename, missing permissions or the encoding failed")
)]
pub struct FileWriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl FileWriteError {
    fn new(path: &Path, source: std::io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult, FileWriteError> {
        let path = self.path(base);
        write_with_rules(&path, &self.render(), &self.rules())
    }
}

fn write_with_rules(
    path: &Path,
    content: &str,
    rules: &FileRules,
) -> Result<WriteResult, FileWriteError> {
    match rules.overwrite {
        Overwrite::Always => {
            write_file(path, content)?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfMissing => {
            if path.exists() {
                Ok(WriteResult::Skipped)
            } else {
                write_file(path, content)?;
                Ok(WriteResult::Written)
            }
        }
    }
}

/// Write `content` to `path` atomically.
///
/// The content goes to a temporary file in the destination directory which
/// is then renamed over the target, so readers never observe a partial file.
fn write_file(path: &Path, content: &str) -> Result<(), FileWriteError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| FileWriteError::new(path, e))?;

    let mut temp =
        tempfile::NamedTempFile::new_in(parent).map_err(|e| FileWriteError::new(path, e))?;
    temp.write_all(content.as_bytes())
        .and_then(|_| temp.flush())
        .map_err(|e| FileWriteError::new(path, e))?;
    temp.persist(path)
        .map_err(|e| FileWriteError::new(path, e.error))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Only create the file when nothing exists at its path yet.
    pub fn if_missing(mut self) -> Self {
        self.rules.overwrite = Overwrite::IfMissing;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult, FileWriteError> {
        write_with_rules(&self.path, &self.content, &self.rules)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist (preferences)
    IfMissing,
}
