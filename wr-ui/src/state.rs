//! Application state managed via Dioxus context.
//!
//! `AppState` holds the toast list shared by every component of a page. It is
//! provided with `use_context_provider(AppState::new)` and implements
//! [`Notifier`], so controllers report to the user through it.

use dioxus::prelude::*;
use wr_core::error::ApiError;
use wr_core::notify::{Notice, NoticeKind, Notifier};

/// A notice on screen, identified for dismissal.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Shared state for all weather report pages.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Toasts in the order they were raised
    pub toasts: Signal<Vec<Toast>>,
    /// Id handed to the next toast
    pub next_toast_id: Signal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_toast_id: Signal::new(1),
        }
    }

    /// Show `notice` and return its toast id.
    pub fn push_toast(&self, notice: Notice) -> u64 {
        let mut next_toast_id = self.next_toast_id;
        let mut toasts = self.toasts;
        let id = *next_toast_id.peek();
        next_toast_id.set(id + 1);
        toasts.write().push(Toast { id, notice });
        id
    }

    pub fn dismiss_toast(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|toast| toast.id != id);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for AppState {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => log::info!("{}", notice.message),
            NoticeKind::Warning => log::warn!("{}", notice.message),
            NoticeKind::Error => log::error!("{}", notice.message),
        }
        self.push_toast(notice);
    }

    fn log(&self, context: &str, error: &ApiError) {
        log::error!("{}: {:?}", context, error);
    }
}
