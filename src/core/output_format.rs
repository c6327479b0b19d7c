//! Output format configuration for log entries
//!
//! Provides the two record layouts every byte-emitting sink shares:
//! - Structured: one JSON object per line (default)
//! - Text: human-readable line with the context appended as JSON

use super::error::{LoggerError, Result};
use super::log_entry::LogEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Machine-readable JSON line
    ///
    /// Example: `{"timestamp":"2025-01-08 10:30:45","code":200,"level":"INFO","message":"Request processed","context":{}}`
    #[default]
    #[serde(alias = "json")]
    Structured,

    /// Human-readable text line
    ///
    /// Example: `[2025-01-08 10:30:45] INFO: Request processed {"status":200}`
    Text,
}

impl OutputFormat {
    /// Render an entry as a single line, without the trailing newline
    pub fn format(&self, entry: &LogEntry) -> Result<String> {
        match self {
            OutputFormat::Structured => Ok(serde_json::to_string(entry)?),
            OutputFormat::Text => Self::format_text(entry, entry.level()),
        }
    }

    /// Text layout with a caller-supplied level label (used for colouring)
    pub(crate) fn format_text(entry: &LogEntry, level: &str) -> Result<String> {
        Ok(format!(
            "[{}] {}: {} {}",
            entry.formatted_timestamp(),
            level,
            sanitize_message(entry.message()),
            entry.context().to_json()?
        ))
    }
}

/// Escape line breaks so a message cannot forge extra records in text output
///
/// Structured output needs no help here: JSON string escaping already keeps
/// the record on one line.
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Structured => write!(f, "structured"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "structured" | "json" => Ok(OutputFormat::Structured),
            "text" => Ok(OutputFormat::Text),
            other => Err(LoggerError::config(
                "OutputFormat",
                format!("unknown format '{}', expected 'structured' or 'text'", other),
            )),
        }
    }
}
