//! Log entry structure and the entry builder

use super::interpolate::interpolate;
use super::log_context::LogContext;
use super::log_level::{self, IntoSeverity};
use chrono::{DateTime, Local, SubsecRound};
use serde::{Serialize, Serializer};

/// Timestamp layout used in serialized records
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A fully assembled, immutable log record
///
/// Serializes to the stable record shape
/// `{"timestamp","code","level","message","context"}`.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    #[serde(serialize_with = "serialize_timestamp")]
    timestamp: DateTime<Local>,
    code: u16,
    level: &'static str,
    message: String,
    context: LogContext,
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Local>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

impl LogEntry {
    /// Build an entry, or `None` when the level falls below `threshold`
    ///
    /// The message is interpolated from `context`; the raw context is kept
    /// alongside it for structured output.
    pub fn build<L: IntoSeverity>(
        level: L,
        message: &str,
        context: LogContext,
        threshold: u16,
    ) -> Option<Self> {
        let code = log_level::normalize(level);
        if code < threshold {
            return None;
        }

        Some(Self {
            timestamp: Local::now().trunc_subsecs(0),
            code,
            level: log_level::label(code),
            message: interpolate(message, &context),
            context,
        })
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS`
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Canonical numeric level
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Level label, `UNKNOWN` for codes between tiers
    pub fn level(&self) -> &'static str {
        self.level
    }

    /// Message after interpolation
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_build_below_threshold_is_suppressed() {
        assert!(LogEntry::build("info", "hidden", LogContext::new(), 300).is_none());
        assert!(LogEntry::build(LogLevel::Warning, "shown", LogContext::new(), 300).is_some());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let entry = LogEntry::build(300, "edge", LogContext::new(), 300).unwrap();
        assert_eq!(entry.code(), 300);
        assert_eq!(entry.level(), "WARNING");
    }

    #[test]
    fn test_unknown_level_only_passes_zero_threshold() {
        assert!(LogEntry::build("bogus", "m", LogContext::new(), 1).is_none());

        let entry = LogEntry::build("bogus", "m", LogContext::new(), 0).unwrap();
        assert_eq!(entry.code(), 0);
        assert_eq!(entry.level(), "UNKNOWN");
    }

    #[test]
    fn test_build_interpolates_and_keeps_context() {
        let context = LogContext::new().with_field("user", "alice");
        let entry = LogEntry::build("notice", "hello {user}", context.clone(), 0).unwrap();

        assert_eq!(entry.message(), "hello alice");
        assert_eq!(entry.context(), &context);
        assert_eq!(entry.level(), "NOTICE");
    }

    #[test]
    fn test_serialized_shape() {
        let context = LogContext::new().with_field("key", "value");
        let entry = LogEntry::build(200, "Test", context, 0).unwrap();

        let json: serde_json::Value = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["code"], 200);
        assert_eq!(json["level"], "INFO");
        assert_eq!(json["message"], "Test");
        assert_eq!(json["context"]["key"], "value");
        assert_eq!(json["timestamp"], entry.formatted_timestamp());
        assert_eq!(entry.formatted_timestamp().len(), "2025-01-01 00:00:00".len());
    }
}
