//! Toast notification queue.
//!
//! # Design
//! - Bounded; the oldest toast is dropped when the limit is reached.
//! - Ids are monotonic so the host can dismiss a specific toast after its
//!   timer fires even if newer ones arrived.

/// Default number of toasts kept on screen.
pub const DEFAULT_TOAST_LIMIT: usize = 4;

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

impl ToastKind {
    /// CSS modifier for the toast.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identifier.
    pub id: u64,
    /// Display text.
    pub message: String,
    /// Severity.
    pub kind: ToastKind,
}

/// Queue of visible toasts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notifications {
    toasts: Vec<Toast>,
    next_id: u64,
    limit: usize,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::with_limit(DEFAULT_TOAST_LIMIT)
    }
}

impl Notifications {
    /// Empty queue holding at most `limit` toasts (minimum one).
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            limit: limit.max(1),
        }
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        if self.toasts.len() > self.limit {
            let overflow = self.toasts.len() - self.limit;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_caps_queue_and_drops_oldest() {
        let mut queue = Notifications::with_limit(2);
        let first = queue.push(ToastKind::Info, "one");
        let second = queue.push(ToastKind::Success, "two");
        let third = queue.push(ToastKind::Error, "three");
        assert!(first < second && second < third);
        let ids: Vec<u64> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second, third]);
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let mut queue = Notifications::default();
        let keep = queue.push(ToastKind::Info, "keep");
        let drop = queue.push(ToastKind::Info, "drop");
        queue.dismiss(drop);
        queue.dismiss(999);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, keep);
    }
}
