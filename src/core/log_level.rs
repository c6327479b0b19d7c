//! Log level definitions
//!
//! The single source of truth for the numeric severity scale. Every other
//! component (entry builder, sinks, config) resolves levels through here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Code assigned to level names that are not in the table
pub const UNKNOWN: u16 = 0;

/// Lowest tier; numeric input is clamped up to this value
pub const MIN_CODE: u16 = 100;

/// Highest tier; numeric input is clamped down to this value
pub const MAX_CODE: u16 = 600;

/// Label returned for codes that do not sit exactly on a tier
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u16)]
pub enum LogLevel {
    Debug = 100,
    Info = 200,
    Notice = 250,
    Warning = 300,
    Error = 400,
    Critical = 500,
    Alert = 550,
    Emergency = 600,
}

impl LogLevel {
    /// All tiers in ascending order
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Notice,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
        LogLevel::Alert,
        LogLevel::Emergency,
    ];

    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Notice => "NOTICE",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Alert => "ALERT",
            LogLevel::Emergency => "EMERGENCY",
        }
    }

    /// Exact inverse of [`LogLevel::code`]; anything between tiers is `None`
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.code() == code)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => BrightBlack,
            LogLevel::Info => Green,
            LogLevel::Notice => Cyan,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Critical => BrightRed,
            LogLevel::Alert => Magenta,
            LogLevel::Emergency => BrightMagenta,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "notice" => Ok(LogLevel::Notice),
            "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "critical" => Ok(LogLevel::Critical),
            "alert" => Ok(LogLevel::Alert),
            "emergency" => Ok(LogLevel::Emergency),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Anything that can be resolved to a numeric severity
///
/// Names resolve case-insensitively (unknown names become [`UNKNOWN`]),
/// integers are clamped into `[MIN_CODE, MAX_CODE]`.
pub trait IntoSeverity {
    fn severity(&self) -> u16;
}

impl IntoSeverity for LogLevel {
    fn severity(&self) -> u16 {
        self.code()
    }
}

impl IntoSeverity for str {
    fn severity(&self) -> u16 {
        self.parse::<LogLevel>().map_or(UNKNOWN, LogLevel::code)
    }
}

impl IntoSeverity for String {
    fn severity(&self) -> u16 {
        self.as_str().severity()
    }
}

impl<T: IntoSeverity + ?Sized> IntoSeverity for &T {
    fn severity(&self) -> u16 {
        (**self).severity()
    }
}

macro_rules! impl_numeric_severity {
    ($($ty:ty),*) => {
        $(
            impl IntoSeverity for $ty {
                fn severity(&self) -> u16 {
                    clamp(i64::try_from(*self).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

impl_numeric_severity!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

fn clamp(value: i64) -> u16 {
    // Bounds fit in u16, so the cast after clamping is lossless
    value.clamp(i64::from(MIN_CODE), i64::from(MAX_CODE)) as u16
}

/// Resolve a level name, [`LogLevel`] or integer to its numeric code
pub fn normalize<L: IntoSeverity>(level: L) -> u16 {
    level.severity()
}

/// Human-readable label for a code; only exact tiers are labelled
pub fn label(code: u16) -> &'static str {
    LogLevel::from_code(code).map_or(UNKNOWN_LABEL, |level| level.to_str())
}
