//! Size-based log rotation
//!
//! Rotation state is never cached: every check reads the file size from disk,
//! so independent sinks (or processes) pointed at the same path agree on when
//! a file is full. An archive name that is already taken gets a counter
//! (`app.log.20240101_120000.1`, `.2`, ...), so one writer rotating several
//! times within a second keeps every archive. The free-name check and the
//! rename are not atomic together: two writers rotating at the same instant
//! can still pick the same name, and the later rename replaces the earlier
//! archive.

use crate::core::error::{LoggerError, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Suffix appended to the base path of an archived log file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveSuffix {
    /// Local time as `YYYYMMDD_HHMMSS`
    #[default]
    Timestamp,
    /// Seconds since the Unix epoch
    UnixEpoch,
}

impl ArchiveSuffix {
    fn render(&self) -> String {
        match self {
            ArchiveSuffix::Timestamp => Local::now().format("%Y%m%d_%H%M%S").to_string(),
            ArchiveSuffix::UnixEpoch => Local::now().timestamp().to_string(),
        }
    }
}

/// When and how a log file is archived
///
/// # Examples
///
/// ```
/// use tiered_logger::sinks::{ArchiveSuffix, RotationPolicy};
///
/// // Archive once the file reaches 10 MB
/// let policy = RotationPolicy::new(10 * 1024 * 1024);
/// assert!(policy.is_enabled());
///
/// // Zero disables rotation entirely
/// assert!(!RotationPolicy::disabled().is_enabled());
///
/// let policy = RotationPolicy::new(4096).with_suffix(ArchiveSuffix::UnixEpoch);
/// assert_eq!(policy.suffix, ArchiveSuffix::UnixEpoch);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPolicy {
    /// Size in bytes at which the file is archived; 0 disables rotation
    pub max_bytes: u64,
    #[serde(default)]
    pub suffix: ArchiveSuffix,
}

impl RotationPolicy {
    #[must_use]
    pub fn new(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            suffix: ArchiveSuffix::default(),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::new(0)
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_suffix(mut self, suffix: ArchiveSuffix) -> Self {
        self.suffix = suffix;
        self
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.max_bytes > 0
    }

    /// Whether a file of `current_size` bytes must be archived before the next write
    #[must_use]
    pub fn should_rotate(&self, current_size: u64) -> bool {
        self.is_enabled() && current_size >= self.max_bytes
    }

    /// Archive name for `base_path` at the current time
    #[must_use]
    pub fn archive_path(&self, base_path: &Path) -> PathBuf {
        let mut name = base_path.as_os_str().to_os_string();
        name.push(".");
        name.push(self.suffix.render());
        PathBuf::from(name)
    }

    /// First archive name for `base_path` that does not exist yet
    fn free_archive_path(&self, base_path: &Path) -> PathBuf {
        let archive = self.archive_path(base_path);
        if !archive.exists() {
            return archive;
        }

        (1u32..)
            .map(|n| {
                let mut name = archive.as_os_str().to_os_string();
                name.push(format!(".{}", n));
                PathBuf::from(name)
            })
            .find(|candidate| !candidate.exists())
            .unwrap_or(archive)
    }

    /// Archive `base_path` if it has reached the size limit
    ///
    /// Uses the size the file has before the pending write, so the write that
    /// fills a file never rotates it; the next one does. Returns the archive
    /// path when a rotation happened.
    pub fn rotate_if_needed(&self, base_path: &Path) -> Result<Option<PathBuf>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let size = match fs::metadata(base_path) {
            Ok(metadata) => metadata.len(),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LoggerError::rotation(base_path, e)),
        };

        if !self.should_rotate(size) {
            return Ok(None);
        }

        let archive = self.free_archive_path(base_path);
        match fs::rename(base_path, &archive) {
            Ok(()) => Ok(Some(archive)),
            // Another writer rotated it first
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LoggerError::rotation(base_path, e)),
        }
    }
}
