//! Sink implementations

pub mod discard;
pub mod file;
pub mod rotation;
pub mod stream;

pub use discard::DiscardSink;
pub use file::FileSink;
pub use rotation::{ArchiveSuffix, RotationPolicy};
pub use stream::StreamSink;

pub use crate::core::Sink;
