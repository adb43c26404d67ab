//! Toast notification stack.
//!
//! DESIGN
//! ======
//! Newest first, capped at [`MAX_TOASTS`]. Each toast gets a monotonically
//! increasing id so timed dismissal never removes a newer toast.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use feed::Notice;

/// Toasts visible at once.
pub const MAX_TOASTS: usize = 3;
/// Auto-dismiss delay.
pub const TOAST_TTL_MS: u64 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Show `notice` on top and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.insert(0, Toast { id, notice });
        self.toasts.truncate(MAX_TOASTS);
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
