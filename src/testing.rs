//! Test doubles shared by the unit tests

use std::cell::Cell;
use std::rc::Rc;

/// Stands in for a browser timer handle: counts live instances, and
/// "cancels" itself on drop like `gloo_timers` handles do.
pub struct FakeTimer {
    live: Rc<Cell<usize>>,
    pub label: &'static str,
    pub delay_ms: u32,
}

impl FakeTimer {
    pub fn new(live: &Rc<Cell<usize>>) -> Self {
        Self::labeled(live, "", 0)
    }

    pub fn labeled(live: &Rc<Cell<usize>>, label: &'static str, delay_ms: u32) -> Self {
        live.set(live.get() + 1);
        Self {
            live: live.clone(),
            label,
            delay_ms,
        }
    }
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}
