//! Dependency manifest file writer.
//!
//! The manifest is a plain text file with one `mvn:` URI per line. The
//! writer owns the open handle for one export run; dropping it flushes
//! whatever was buffered, and [`ManifestWriter::finish`] flushes while
//! surfacing any error.

use crate::error::{ExportError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

/// Whether an existing manifest is replaced or extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate the file before writing.
    Truncate,
    /// Append after the existing content.
    Append,
}

impl WriteMode {
    /// Mode for the `file_append` flag.
    #[must_use]
    pub fn from_append(append: bool) -> Self {
        if append { Self::Append } else { Self::Truncate }
    }
}

/// Line-oriented writer for a manifest file.
#[derive(Debug)]
pub struct ManifestWriter {
    path: Utf8PathBuf,
    writer: BufWriter<File>,
    lines: usize,
}

impl ManifestWriter {
    /// Open `path` in the given mode, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::FileIo`] when the file cannot be opened.
    pub fn open(path: &Utf8Path, mode: WriteMode) -> Result<Self> {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Truncate => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        let file = options.open(path).map_err(|source| ExportError::FileIo {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            lines: 0,
        })
    }

    /// Write one newline-terminated line.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::FileIo`] when the write fails.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}").map_err(|source| ExportError::FileIo {
            path: self.path.clone(),
            source,
        })?;
        self.lines += 1;
        Ok(())
    }

    /// Flush buffered output and close the file.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::FileIo`] when flushing fails.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush().map_err(|source| ExportError::FileIo {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.lines)
    }
}
