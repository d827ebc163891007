//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Components push messages through the injected `Toasts` service instead of
//! a global; `ToastQueue` itself is a plain model so ordering and capacity
//! rules are testable without a reactive runtime.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use leptos::prelude::*;

/// Most toasts kept on screen; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// How long a toast of this kind stays up before auto-dismissal.
    pub fn duration(self) -> Duration {
        match self {
            Self::Success => Duration::from_secs(2),
            Self::Error => Duration::from_secs(4),
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, kind, message: message.into() });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    /// Visible toasts, oldest first.
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Notification service provided via context.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self { queue: RwSignal::new(ToastQueue::default()) }
    }

    pub fn error(self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn success(self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    /// Queue a toast and, in the browser, schedule its auto-dismissal.
    pub fn push(self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let message = message.into();
        let id = self.queue.try_update(|queue| queue.push(kind, message)).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(kind.duration()).await;
            self.dismiss(id);
        });

        id
    }

    pub fn dismiss(self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }

    /// Tracked snapshot of the visible toasts.
    pub fn items(self) -> Vec<Toast> {
        self.queue.with(|queue| queue.items().to_vec())
    }
}
