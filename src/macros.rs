//! Logging macros with inline context fields.
//!
//! Each macro takes a logger, a message template and any number of
//! `key = value` pairs. The pairs become the entry's context, so they both
//! fill `{key}` placeholders and appear in structured output. The context is
//! only built when the level passes the logger's threshold.
//!
//! # Examples
//!
//! ```
//! use tiered_logger::prelude::*;
//! use tiered_logger::{info, warning};
//!
//! let logger = Logger::new(DiscardSink::new());
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With context
//! let port = 8080;
//! info!(logger, "Server listening on port {port}", port = port)?;
//!
//! warning!(logger, "Retry {attempt} of {max}", attempt = 3, max = 5)?;
//! # Ok::<(), tiered_logger::LoggerError>(())
//! ```

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use tiered_logger::prelude::*;
/// # let logger = Logger::new(DiscardSink::new());
/// use tiered_logger::log;
/// log!(logger, LogLevel::Info, "Simple message")?;
/// log!(logger, "error", "Error code: {code}", code = 500)?;
/// log!(logger, 250, "Numeric level")?;
/// # Ok::<(), tiered_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr $(, $key:ident = $value:expr)* $(,)?) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(&level) {
            #[allow(unused_mut)]
            let mut context = $crate::LogContext::new();
            $( context.add_field(stringify!($key), $value); )*
            logger.log(level, $message, context)
        } else {
            logger.log(level, $message, $crate::LogContext::new())
        }
    }};
}

/// Log a debug-level message.
///
/// ```
/// # use tiered_logger::prelude::*;
/// # let logger = Logger::new(DiscardSink::new());
/// use tiered_logger::debug;
/// debug!(logger, "Counter value: {n}", n = 10)?;
/// # Ok::<(), tiered_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use tiered_logger::prelude::*;
/// # let logger = Logger::new(DiscardSink::new());
/// use tiered_logger::warning;
/// warning!(logger, "Low disk space on {mount}", mount = "/var")?;
/// # Ok::<(), tiered_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Alert, $($arg)+)
    };
}

/// Log an emergency-level message.
///
/// ```
/// # use tiered_logger::prelude::*;
/// # let logger = Logger::new(DiscardSink::new());
/// use tiered_logger::emergency;
/// emergency!(logger, "Unable to recover: {reason}", reason = "disk full")?;
/// # Ok::<(), tiered_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Emergency, $($arg)+)
    };
}
