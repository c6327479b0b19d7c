//! Routing of built entries to a sink
//!
//! Synchronous dispatch writes in the caller's thread and returns the sink's
//! result. Asynchronous dispatch enqueues onto a bounded channel drained by a
//! dedicated worker thread and returns immediately. The async path never
//! blocks, never retries and never reports the sink's outcome to the caller;
//! entries still queued when the process exits are lost unless
//! [`Dispatcher::shutdown`] ran first.

use super::{error::Result, log_entry::LogEntry, metrics::LoggerMetrics, sink::Sink};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default capacity of the async queue
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// How entries reach the sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Write in the calling thread and report the result
    #[default]
    Sync,
    /// Hand off to a background worker and return immediately
    Async,
}

/// Sync holds the sink it writes to; the async worker owns its own handle
pub enum Dispatcher {
    Sync(Arc<dyn Sink>),
    Async(AsyncWorker),
}

impl Dispatcher {
    /// Create a dispatcher; `Async` spawns its worker immediately
    pub fn new(
        mode: DispatchMode,
        sink: Arc<dyn Sink>,
        metrics: Arc<LoggerMetrics>,
        capacity: usize,
    ) -> Self {
        match mode {
            DispatchMode::Sync => Dispatcher::Sync(sink),
            DispatchMode::Async => Dispatcher::Async(AsyncWorker::spawn(sink, metrics, capacity)),
        }
    }

    pub fn mode(&self) -> DispatchMode {
        match self {
            Dispatcher::Sync(_) => DispatchMode::Sync,
            Dispatcher::Async(_) => DispatchMode::Async,
        }
    }

    pub fn dispatch(&self, entry: LogEntry, metrics: &LoggerMetrics) -> Result<()> {
        match self {
            Dispatcher::Sync(sink) => {
                let result = sink.write(&entry);
                match &result {
                    Ok(()) => metrics.record_written(),
                    Err(_) => metrics.record_failed(),
                };
                result
            }
            Dispatcher::Async(worker) => {
                worker.enqueue(entry, metrics);
                Ok(())
            }
        }
    }

    /// Drain the async queue, waiting at most `timeout`
    ///
    /// Returns `true` when every queued entry reached the sink. Entries logged
    /// after shutdown are dropped. A no-op for synchronous dispatch.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        match self {
            Dispatcher::Sync(_) => true,
            Dispatcher::Async(worker) => worker.shutdown(timeout),
        }
    }
}

/// Background thread consuming entries from a bounded queue
pub struct AsyncWorker {
    sender: Option<Sender<LogEntry>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl AsyncWorker {
    fn spawn(sink: Arc<dyn Sink>, metrics: Arc<LoggerMetrics>, capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity.max(1));

        let handle = thread::Builder::new()
            .name("log-dispatch".to_string())
            .spawn(move || Self::run(receiver, sink, metrics));

        match handle {
            Ok(handle) => Self {
                sender: Some(sender),
                handle: Some(handle),
            },
            Err(e) => {
                // Without a worker every enqueue fails and is counted as dropped
                eprintln!("[LOGGER ERROR] Failed to spawn async dispatch thread: {}", e);
                Self {
                    sender: None,
                    handle: None,
                }
            }
        }
    }

    fn run(receiver: Receiver<LogEntry>, sink: Arc<dyn Sink>, metrics: Arc<LoggerMetrics>) {
        // Ends once every sender is dropped and the queue is empty
        for entry in receiver {
            match sink.write(&entry) {
                Ok(()) => metrics.record_written(),
                Err(_) => metrics.record_failed(),
            };
        }
    }

    fn enqueue(&self, entry: LogEntry, metrics: &LoggerMetrics) {
        let Some(sender) = &self.sender else {
            metrics.record_dropped();
            return;
        };

        match sender.try_send(entry) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => {
                metrics.record_dropped();
            }
        }
    }

    fn shutdown(&mut self, timeout: Duration) -> bool {
        // Close the channel so the worker exits after draining
        drop(self.sender.take());

        let Some(handle) = self.handle.take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[LOGGER ERROR] Async dispatch thread panicked: {:?}", e);
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Async dispatch thread did not drain within {:?}. \
                     Some logs may be lost.",
                    timeout
                );
                return false;
            }

            thread::sleep(Duration::from_millis(5));
        }
    }
}

impl Drop for AsyncWorker {
    fn drop(&mut self) {
        // Close the queue but do not wait: the worker keeps draining for as
        // long as the process lives. Call `shutdown` to wait for delivery.
        drop(self.sender.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogContext, LoggerError};
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CollectingSink {
        messages: Mutex<Vec<String>>,
    }

    impl Sink for CollectingSink {
        fn write(&self, entry: &LogEntry) -> Result<()> {
            self.messages.lock().push(entry.message().to_string());
            Ok(())
        }

        fn name(&self) -> &str {
            "collecting"
        }
    }

    struct FailingSink {
        calls: AtomicUsize,
    }

    impl Sink for FailingSink {
        fn write(&self, _entry: &LogEntry) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(LoggerError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk on fire",
            )))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct SlowSink;

    impl Sink for SlowSink {
        fn write(&self, _entry: &LogEntry) -> Result<()> {
            thread::sleep(Duration::from_millis(50));
            Ok(())
        }

        fn name(&self) -> &str {
            "slow"
        }
    }

    fn entry(message: &str) -> LogEntry {
        LogEntry::build(200, message, LogContext::new(), 0).unwrap()
    }

    #[test]
    fn test_sync_dispatch_reports_errors() {
        let sink: Arc<dyn Sink> = Arc::new(FailingSink {
            calls: AtomicUsize::new(0),
        });
        let metrics = Arc::new(LoggerMetrics::new());
        let dispatcher = Dispatcher::new(DispatchMode::Sync, Arc::clone(&sink), Arc::clone(&metrics), 8);

        assert!(dispatcher.dispatch(entry("x"), &metrics).is_err());
        assert_eq!(metrics.failed_count(), 1);
    }

    #[test]
    fn test_sync_dispatch_writes_to_held_sink() {
        let collecting = Arc::new(CollectingSink::default());
        let metrics = LoggerMetrics::new();
        let dispatcher = Dispatcher::new(
            DispatchMode::Sync,
            collecting.clone(),
            Arc::new(LoggerMetrics::new()),
            8,
        );

        dispatcher.dispatch(entry("held"), &metrics).unwrap();

        assert_eq!(*collecting.messages.lock(), vec!["held".to_string()]);
        assert_eq!(metrics.written_count(), 1);
    }

    #[test]
    fn test_async_dispatch_hides_errors() {
        let failing = Arc::new(FailingSink {
            calls: AtomicUsize::new(0),
        });
        let sink: Arc<dyn Sink> = failing.clone();
        let metrics = Arc::new(LoggerMetrics::new());
        let mut dispatcher =
            Dispatcher::new(DispatchMode::Async, Arc::clone(&sink), Arc::clone(&metrics), 8);

        assert!(dispatcher.dispatch(entry("x"), &metrics).is_ok());
        assert!(dispatcher.shutdown(Duration::from_secs(5)));

        assert_eq!(failing.calls.load(Ordering::SeqCst), 1);
        assert_eq!(metrics.failed_count(), 1);
    }

    #[test]
    fn test_async_delivers_in_queue_order() {
        let collecting = Arc::new(CollectingSink::default());
        let sink: Arc<dyn Sink> = collecting.clone();
        let metrics = Arc::new(LoggerMetrics::new());
        let mut dispatcher =
            Dispatcher::new(DispatchMode::Async, Arc::clone(&sink), Arc::clone(&metrics), 64);

        for i in 0..20 {
            dispatcher
                .dispatch(entry(&format!("m{}", i)), &metrics)
                .unwrap();
        }
        assert!(dispatcher.shutdown(Duration::from_secs(5)));

        let messages = collecting.messages.lock();
        let expected: Vec<String> = (0..20).map(|i| format!("m{}", i)).collect();
        assert_eq!(*messages, expected);
        assert_eq!(metrics.written_count(), 20);
    }

    #[test]
    fn test_full_queue_drops_without_blocking() {
        let sink: Arc<dyn Sink> = Arc::new(SlowSink);
        let metrics = Arc::new(LoggerMetrics::new());
        let mut dispatcher =
            Dispatcher::new(DispatchMode::Async, Arc::clone(&sink), Arc::clone(&metrics), 1);

        let start = Instant::now();
        for i in 0..10 {
            dispatcher
                .dispatch(entry(&format!("m{}", i)), &metrics)
                .unwrap();
        }
        assert!(start.elapsed() < Duration::from_millis(250));
        assert!(metrics.dropped_count() > 0);

        assert!(dispatcher.shutdown(Duration::from_secs(5)));
        assert_eq!(metrics.written_count() + metrics.dropped_count(), 10);
    }

    #[test]
    fn test_dispatch_after_shutdown_is_dropped() {
        let sink: Arc<dyn Sink> = Arc::new(CollectingSink::default());
        let metrics = Arc::new(LoggerMetrics::new());
        let mut dispatcher =
            Dispatcher::new(DispatchMode::Async, Arc::clone(&sink), Arc::clone(&metrics), 8);

        assert!(dispatcher.shutdown(Duration::from_secs(5)));
        assert!(dispatcher.dispatch(entry("late"), &metrics).is_ok());
        assert_eq!(metrics.dropped_count(), 1);
    }

    #[test]
    fn test_sync_shutdown_is_noop() {
        let sink: Arc<dyn Sink> = Arc::new(CollectingSink::default());
        let mut dispatcher =
            Dispatcher::new(DispatchMode::Sync, sink, Arc::new(LoggerMetrics::new()), 8);
        assert_eq!(dispatcher.mode(), DispatchMode::Sync);
        assert!(dispatcher.shutdown(Duration::from_millis(10)));
    }
}
