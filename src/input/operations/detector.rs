// Current input method, owned for the app's lifetime

use crate::input::pure::method::next_method;
use crate::input::types::{InputMethod, PlatformEvent};

/// Tracks the single current input method. Starts as mouse.
#[derive(Debug, Default)]
pub struct InputMethodDetector {
    current: InputMethod,
    changes: u64,
}

impl InputMethodDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> InputMethod {
        self.current
    }

    /// Number of times the method has changed; lets views redraw glyphs only on change
    pub fn changes(&self) -> u64 {
        self.changes
    }

    /// Apply one event. Returns true when the method changed.
    pub fn observe(&mut self, event: &PlatformEvent) -> bool {
        let Some(method) = next_method(event) else {
            return false;
        };
        if method == self.current {
            return false;
        }
        tracing::debug!("input: {:?} -> {:?}", self.current, method);
        self.current = method;
        self.changes += 1;
        true
    }

    pub fn observe_all<'a>(&mut self, events: impl IntoIterator<Item = &'a PlatformEvent>) -> bool {
        let mut changed = false;
        for event in events {
            changed |= self.observe(event);
        }
        changed
    }
}
