//! UI state - cursor blink

use std::time::{Duration, Instant};

/// Default blink half-period
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Blink state of the visual cursor.
///
/// Restarting is stop-then-start: the cursor becomes visible and the phase
/// begins again, so repeated restarts are idempotent.
#[derive(Debug, Clone)]
pub struct CursorBlink {
    /// Whether the cursor is currently visible
    pub visible: bool,
    /// Whether blinking is running (the editor is focused)
    pub active: bool,
    /// Timestamp of last blink state change
    pub last_toggle: Instant,
    /// Time between visibility toggles
    pub interval: Duration,
}

impl CursorBlink {
    /// Inactive, hidden cursor
    pub fn new(interval: Duration) -> Self {
        Self {
            visible: false,
            active: false,
            last_toggle: Instant::now(),
            interval,
        }
    }

    /// Start (or restart) blinking with a freshly visible cursor
    pub fn activate(&mut self, now: Instant) {
        self.active = true;
        self.visible = true;
        self.last_toggle = now;
    }

    /// Stop blinking and hide the cursor
    pub fn deactivate(&mut self) {
        self.active = false;
        self.visible = false;
    }

    /// Advance the blink; returns true if visibility changed (needs repaint)
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.active {
            return false;
        }
        if now.saturating_duration_since(self.last_toggle) >= self.interval {
            self.visible = !self.visible;
            self.last_toggle = now;
            true
        } else {
            false
        }
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new(DEFAULT_BLINK_INTERVAL)
    }
}
