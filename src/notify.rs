//! Transient user notifications
//!
//! The dispatcher and the auth flow surface every application and transport
//! failure to the user as a side effect, whether or not the caller inspects
//! the returned error. Components hold an [`Sink`] trait object so tests can
//! capture notices instead of printing them.

use std::sync::Arc;

use colored::Colorize;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

/// A single transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub text: String,
}

/// Destination for notices
pub trait Sink: Send + Sync {
    fn emit(&self, notice: Notice);
}

/// Convenience handle wrapping an `Arc<dyn Sink>`
#[derive(Clone)]
pub struct Notifier {
    sink: Arc<dyn Sink>,
}

impl Notifier {
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self { sink }
    }

    /// Notifier writing colored lines to stderr
    pub fn stderr() -> Self {
        Self::new(Arc::new(StderrSink))
    }

    pub fn success(&self, text: impl Into<String>) {
        self.sink.emit(Notice {
            level: Level::Success,
            text: text.into(),
        });
    }

    pub fn warn(&self, text: impl Into<String>) {
        self.sink.emit(Notice {
            level: Level::Warning,
            text: text.into(),
        });
    }

    pub fn error(&self, text: impl Into<String>) {
        self.sink.emit(Notice {
            level: Level::Error,
            text: text.into(),
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Default sink: colored, non-blocking lines on stderr so notices never mix
/// with formatted stdout output.
pub struct StderrSink;

impl Sink for StderrSink {
    fn emit(&self, notice: Notice) {
        match notice.level {
            Level::Success => eprintln!("{} {}", "✓".green(), notice.text),
            Level::Warning => eprintln!("{} {}", "⚠".yellow(), notice.text.yellow()),
            Level::Error => eprintln!("{} {}", "✗".red(), notice.text.red()),
        }
    }
}

/// Capturing sink for tests
#[cfg(test)]
pub mod capture {
    use std::sync::Mutex;

    use super::{Notice, Notifier, Sink};

    /// Records every emitted notice for later assertions.
    #[derive(Default)]
    pub struct CaptureSink {
        notices: Mutex<Vec<Notice>>,
    }

    impl CaptureSink {
        pub fn notices(&self) -> Vec<Notice> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl Sink for CaptureSink {
        fn emit(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }
    }

    /// A notifier plus a handle to what it captured.
    pub fn capturing() -> (Notifier, std::sync::Arc<CaptureSink>) {
        let sink = std::sync::Arc::new(CaptureSink::default());
        (Notifier::new(sink.clone()), sink)
    }
}

#[cfg(test)]
mod tests {
    use super::capture::capturing;
    use super::*;

    #[test]
    fn test_capture_sink_records_in_order() {
        let (notifier, sink) = capturing();

        notifier.success("logged in");
        notifier.warn("unauthorized");
        notifier.error("network error");

        let notices = sink.notices();
        assert_eq!(notices.len(), 3);
        assert_eq!(notices[0].level, Level::Success);
        assert_eq!(notices[1].text, "unauthorized");
        assert_eq!(notices[2].level, Level::Error);
    }

    #[test]
    fn test_notifier_clone_shares_sink() {
        let (notifier, sink) = capturing();
        let other = notifier.clone();

        notifier.warn("one");
        other.warn("two");

        assert_eq!(sink.notices().len(), 2);
    }
}
