//! User notifications as an injected capability.
//!
//! Controllers never talk to a toast system or console directly; they receive
//! a [`Notifier`] so the browser pages, the CLI and the tests can each supply
//! their own.

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// A short user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

pub trait Notifier {
    /// Show a message to the user.
    fn notify(&self, notice: Notice);

    /// Record a diagnostic entry for a failed call.
    fn log(&self, context: &str, error: &ApiError);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }

    fn log(&self, context: &str, error: &ApiError) {
        (**self).log(context, error)
    }
}

/// Log `error` under `fallback` and show its message, or `fallback` when the
/// error carries no text.
pub fn handle_api_error<N: Notifier + ?Sized>(notifier: &N, error: &ApiError, fallback: &str) {
    notifier.log(fallback, error);
    let message = error.to_string();
    if message.trim().is_empty() {
        notifier.notify(Notice::error(fallback));
    } else {
        notifier.notify(Notice::error(message));
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Notifier that remembers every call.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub notices: RefCell<Vec<Notice>>,
        pub logs: RefCell<Vec<(String, ApiError)>>,
    }

    impl RecordingNotifier {
        pub fn notices(&self) -> Vec<Notice> {
            self.notices.borrow().clone()
        }

        pub fn log_contexts(&self) -> Vec<String> {
            self.logs.borrow().iter().map(|(c, _)| c.clone()).collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }

        fn log(&self, context: &str, error: &ApiError) {
            self.logs
                .borrow_mut()
                .push((context.to_string(), error.clone()));
        }
    }
}
