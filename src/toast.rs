//! Short-lived notifications shown over the dashboard

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::time::Instant;
use strum::Display;

use crate::config::{MAX_TOASTS, TOAST_DURATION_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Local>,
    shown_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            created_at: Local::now(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed().as_millis() >= TOAST_DURATION_MS
    }
}

#[derive(Debug, Default)]
pub struct Toaster {
    toasts: VecDeque<Toast>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(Toast::new(ToastKind::Success, title, description));
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(Toast::new(ToastKind::Error, title, description));
    }

    /// Drop expired toasts, returns true if anything was removed.
    pub fn prune_expired(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        before != self.toasts.len()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
