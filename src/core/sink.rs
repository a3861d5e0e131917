//! Byte sink capability shared by every backend

/// Destination that accepts raw bytes
///
/// Writes are fire-and-forget: implementations swallow I/O failures
/// (recording them in their own metrics) rather than returning them.
pub trait LogSink: Send + Sync {
    fn write(&self, bytes: &[u8]);
    fn name(&self) -> &str;

    /// Whether text written here should carry color escapes
    fn use_colors(&self) -> bool {
        true
    }

    fn write_str(&self, text: &str) {
        self.write(text.as_bytes());
    }
}
