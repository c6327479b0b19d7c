//! Console stream sink

use crate::core::{LogEntry, OutputFormat, Result, Sink};
#[cfg(feature = "console")]
use colored::Colorize;
use parking_lot::Mutex;
use std::io::{self, Write};

enum StreamTarget {
    Stdout,
    Stderr,
    Writer(Mutex<Box<dyn Write + Send>>),
}

/// Writes entries to stdout, stderr or any `Write` implementation
///
/// Console output is best-effort: I/O errors are swallowed and `write`
/// always returns `Ok(())`.
///
/// # Example
///
/// ```
/// use tiered_logger::sinks::StreamSink;
/// use tiered_logger::OutputFormat;
///
/// let sink = StreamSink::stdout().with_format(OutputFormat::Text);
/// ```
pub struct StreamSink {
    target: StreamTarget,
    format: OutputFormat,
    use_colors: bool,
}

impl StreamSink {
    pub fn stdout() -> Self {
        Self::with_target(StreamTarget::Stdout)
    }

    pub fn stderr() -> Self {
        Self::with_target(StreamTarget::Stderr)
    }

    /// Write to a caller-supplied writer, e.g. an in-memory buffer
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self::with_target(StreamTarget::Writer(Mutex::new(writer)))
    }

    fn with_target(target: StreamTarget) -> Self {
        Self {
            target,
            format: OutputFormat::default(),
            use_colors: false,
        }
    }

    /// Set the output format for this sink
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Colour the level label in text output (no effect on structured output)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render an entry exactly as it would be written, without the newline
    pub fn render(&self, entry: &LogEntry) -> Result<String> {
        match self.format {
            OutputFormat::Text if self.use_colors => {
                OutputFormat::format_text(entry, &self.colored_level(entry))
            }
            format => format.format(entry),
        }
    }

    #[cfg(feature = "console")]
    fn colored_level(&self, entry: &LogEntry) -> String {
        match crate::core::LogLevel::from_code(entry.code()) {
            Some(level) => entry.level().color(level.color_code()).to_string(),
            None => entry.level().to_string(),
        }
    }

    #[cfg(not(feature = "console"))]
    fn colored_level(&self, entry: &LogEntry) -> String {
        entry.level().to_string()
    }

    fn emit(&self, line: &str) -> io::Result<()> {
        match &self.target {
            StreamTarget::Stdout => writeln!(io::stdout().lock(), "{}", line),
            StreamTarget::Stderr => writeln!(io::stderr().lock(), "{}", line),
            StreamTarget::Writer(writer) => {
                let mut writer = writer.lock();
                writeln!(writer, "{}", line)?;
                writer.flush()
            }
        }
    }
}

impl Sink for StreamSink {
    fn write(&self, entry: &LogEntry) -> Result<()> {
        if let Ok(line) = self.render(entry) {
            let _ = self.emit(&line);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            StreamTarget::Stdout => "stdout",
            StreamTarget::Stderr => "stderr",
            StreamTarget::Writer(_) => "stream",
        }
    }
}
