use std::sync::atomic::{AtomicBool, Ordering};

/// Shared boolean for UI-facing state such as the loading indicator.
///
/// Last write wins and is visible to the next read.
#[derive(Debug, Default)]
pub struct Flag(AtomicBool);

impl Flag {
    /// Flag with an initial value.
    #[must_use]
    pub const fn new(value: bool) -> Self {
        Self(AtomicBool::new(value))
    }

    /// Current value.
    pub fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Overwrite the value.
    pub fn set(&self, value: bool) {
        self.0.store(value, Ordering::SeqCst);
    }

    /// Flip the value and return the new one.
    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::SeqCst)
    }
}
