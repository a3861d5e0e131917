//! Write metrics for backends
//!
//! Writes are fire-and-forget, so these counters are the only place a
//! failed console or file write leaves a trace besides stderr.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracked by backends that touch real I/O
///
/// # Example
///
/// ```
/// use termlog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written(12);
/// metrics.record_failed();
///
/// assert_eq!(metrics.writes(), 1);
/// assert_eq!(metrics.bytes_written(), 12);
/// assert_eq!(metrics.failed_writes(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Number of successful writes
    writes: AtomicU64,

    /// Total bytes handed to the underlying writer
    bytes_written: AtomicU64,

    /// Number of writes the underlying writer rejected
    failed_writes: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            writes: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Record a successful write of `len` bytes
    #[inline]
    pub fn record_written(&self, len: usize) {
        self.writes.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(len as u64, Ordering::Relaxed);
    }

    /// Record a failed write, returning the previous failure count
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }

    /// Percentage of writes that failed (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_writes() as f64;
        let total = failed + self.writes() as f64;
        if total == 0.0 {
            0.0
        } else {
            failed / total * 100.0
        }
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
