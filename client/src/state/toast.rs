//! Transient notification queue.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum toasts shown at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id (for scheduling dismissal).
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, message: message.into(), kind });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
        id
    }

    /// Remove toast `id`; unknown ids (already dismissed) are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
