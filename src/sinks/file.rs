//! File sink with size-based rotation

use super::rotation::{ArchiveSuffix, RotationPolicy};
use crate::core::{LogEntry, LoggerError, OutputFormat, Result, Sink};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Appends one serialized entry per line to a file
///
/// Every write opens the file in append mode, takes an exclusive advisory
/// lock, writes a complete line and closes the file again. Nothing is
/// buffered, so any number of sinks (in any number of processes) can share a
/// path without interleaving partial lines.
///
/// # Examples
///
/// ```no_run
/// use tiered_logger::sinks::FileSink;
///
/// // Rotate once the file reaches 1 MB
/// let sink = FileSink::new("/var/log/app.log", 1024 * 1024)?;
/// # Ok::<(), tiered_logger::LoggerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    policy: RotationPolicy,
    format: OutputFormat,
}

impl FileSink {
    /// Create a file sink; `max_bytes == 0` disables rotation
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] if the parent directory
    /// is missing or read-only, or if the file exists but cannot be appended
    /// to. The file itself is not created until the first write.
    pub fn new(path: impl Into<PathBuf>, max_bytes: u64) -> Result<Self> {
        Self::with_policy(path, RotationPolicy::new(max_bytes))
    }

    pub fn with_policy(path: impl Into<PathBuf>, policy: RotationPolicy) -> Result<Self> {
        let path = path.into();
        validate_path(&path)?;

        Ok(Self {
            path,
            policy,
            format: OutputFormat::default(),
        })
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_archive_suffix(mut self, suffix: ArchiveSuffix) -> Self {
        self.policy.suffix = suffix;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_bytes(&self) -> u64 {
        self.policy.max_bytes
    }

    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn append_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;
        let written = file.write_all(line.as_bytes());
        // Closing the file would release the lock too; unlock explicitly so
        // an unlock failure does not hide a write failure
        let unlocked = FileExt::unlock(&file);
        written.and(unlocked)
    }
}

fn validate_path(path: &Path) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let is_dir = fs::metadata(directory)
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return Err(LoggerError::config(
            "FileSink",
            format!("Log directory is not writable: {}", directory.display()),
        ));
    }

    // Permission bits miss ownership and ACLs; the scratch file is anonymous
    tempfile::tempfile_in(directory).map_err(|e| {
        LoggerError::config(
            "FileSink",
            format!("Log directory is not writable: {} ({})", directory.display(), e),
        )
    })?;

    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => {
            // Opening without create proves we can append without touching the file
            OpenOptions::new().append(true).open(path).map_err(|e| {
                LoggerError::config(
                    "FileSink",
                    format!("Log file is not writable: {} ({})", path.display(), e),
                )
            })?;
            Ok(())
        }
        Ok(_) => Err(LoggerError::config(
            "FileSink",
            format!("Log path is not a regular file: {}", path.display()),
        )),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(LoggerError::config(
            "FileSink",
            format!("Cannot access log file {}: {}", path.display(), e),
        )),
    }
}

impl Sink for FileSink {
    fn write(&self, entry: &LogEntry) -> Result<()> {
        self.policy.rotate_if_needed(&self.path)?;

        let mut line = self.format.format(entry)?;
        line.push('\n');

        self.append_line(&line)
            .map_err(|e| LoggerError::sink_write(&self.path, e))
    }

    fn name(&self) -> &str {
        "file"
    }
}
