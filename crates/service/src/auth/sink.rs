use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

use tracing::error;

use super::domain::LogEntry;

/// Destination for auth diagnostic entries.
///
/// Implementations must not panic: logging may never become the cause of a
/// user-facing failure. A sink that cannot serialize an entry degrades to a
/// partial record instead of propagating the problem.
pub trait LogSink: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

/// Structured emission through the `tracing` pipeline. Production default.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, entry: &LogEntry) {
        match serde_json::to_string(entry) {
            Ok(json) => error!(entry = %json, "auth error"),
            Err(e) => error!(
                timestamp = %entry.timestamp.to_rfc3339(),
                message = %entry.message,
                serialize_error = %e,
                "auth error (entry not serializable)"
            ),
        }
    }
}

/// Captures entries in memory so tests can observe logging without touching
/// global I/O. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl BufferSink {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for BufferSink {
    fn log(&self, entry: &LogEntry) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(entry.clone());
        }
    }
}

/// Queue-and-return sink: hands entries to a background writer thread so the
/// caller never stalls on logging I/O. Entries are dropped, not blocked on,
/// once the writer is gone.
pub struct ChannelSink {
    tx: Mutex<Sender<LogEntry>>,
}

impl ChannelSink {
    /// Spawn the writer thread around an inner sink.
    pub fn spawn<S: LogSink + 'static>(inner: S) -> Self {
        let (tx, rx) = mpsc::channel::<LogEntry>();
        thread::spawn(move || {
            for entry in rx {
                inner.log(&entry);
            }
        });
        Self { tx: Mutex::new(tx) }
    }
}

impl LogSink for ChannelSink {
    fn log(&self, entry: &LogEntry) {
        if let Ok(tx) = self.tx.lock() {
            let _ = tx.send(entry.clone());
        }
    }
}
