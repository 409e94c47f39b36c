//! Tracing/logging (shared setup).

/// Initialize process-wide tracing with the default (JSON) format.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init(LogFormat::default());
}

/// Initialize process-wide tracing with an explicit output format.
pub fn init_with(format: LogFormat) {
    subscriber::init(format);
}

/// Subscriber configuration (filters, formatting).
pub mod subscriber;

pub use subscriber::{LogFormat, UnknownLogFormat};
