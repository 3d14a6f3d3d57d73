//! Snap resolution and gesture debouncing
//!
//! The resolver quantizes scroll progress into one of `snap_count` sections
//! and owns the two stateful input behaviors:
//!
//! - `is_scrolling`: set synchronously on every scroll event, cleared only
//!   after [`QUIET_PERIOD`] with no further events. The deadline is replaced
//!   on each event, so a continuous gesture stays "scrolling" throughout.
//! - Wheel coalescing: while a gesture is in flight, further wheel events
//!   are ignored so a fast flick cannot overshoot past the adjacent snap.
//!
//! All entry points take an explicit `Instant`; the owner polls the
//! debounce once per frame.

use std::time::{Duration, Instant};

use crate::state::ScrollState;

/// Quiet interval after which an in-flight gesture is considered finished
pub const QUIET_PERIOD: Duration = Duration::from_millis(150);

/// Request for the scroll signal producer to smooth-scroll to an offset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Target snap index
    pub snap: usize,
    /// Absolute scroll offset of that snap in pixels
    pub offset: f32,
}

/// Emitted when the resolved snap index changes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapChange {
    pub from: usize,
    pub to: usize,
}

/// Maps scroll position to a snap index and drives step navigation
#[derive(Clone, Debug)]
pub struct SnapResolver {
    snap_count: usize,
    state: ScrollState,
    current_snap: usize,
    scrolling: bool,
    quiet_deadline: Option<Instant>,
}

impl SnapResolver {
    /// Create a resolver for `snap_count` sections.
    ///
    /// `snap_count` must be at least 1; the catalog fixes it at creation
    /// time, so a zero here is a programming error.
    pub fn new(snap_count: usize, max_scroll: f32) -> Self {
        assert!(snap_count >= 1, "snap_count must be at least 1");
        Self {
            snap_count,
            state: ScrollState::new(max_scroll),
            current_snap: 0,
            scrolling: false,
            quiet_deadline: None,
        }
    }

    pub fn snap_count(&self) -> usize {
        self.snap_count
    }

    pub fn current_snap(&self) -> usize {
        self.current_snap
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    pub fn progress(&self) -> f32 {
        self.state.progress()
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.state
    }

    /// Update the scrollable extent (viewport resize)
    pub fn set_max_scroll(&mut self, max: f32) {
        self.state.set_max_scroll(max);
    }

    /// Record a scroll event.
    ///
    /// Marks the gesture in flight, resets the quiet deadline, and
    /// recomputes the snap index. Returns the snap change, if any.
    pub fn on_scroll(&mut self, y: f32, now: Instant) -> Option<SnapChange> {
        self.scrolling = true;
        self.quiet_deadline = Some(now + QUIET_PERIOD);
        self.state.set_scroll(y);

        let resolved = self.resolve_index();
        if resolved != self.current_snap {
            let change = SnapChange {
                from: self.current_snap,
                to: resolved,
            };
            self.current_snap = resolved;
            log::debug!("snap {} -> {}", change.from, change.to);
            Some(change)
        } else {
            None
        }
    }

    /// Handle a wheel gesture.
    ///
    /// Coalesced to a no-op while a gesture is already in flight; otherwise
    /// steps one snap in the wheel direction, clamped at the boundaries.
    pub fn on_wheel(&mut self, delta_y: f32) -> Option<ScrollRequest> {
        if self.scrolling {
            return None;
        }

        let direction: i32 = if delta_y > 0.0 { 1 } else { -1 };
        let next = step_clamped(self.current_snap, direction, self.snap_count);
        if next == self.current_snap {
            return None;
        }
        self.scroll_to_snap(next)
    }

    /// Handle a navigation key (Down/Space forward, Up backward)
    pub fn on_key_step(&mut self, direction: i32) -> Option<ScrollRequest> {
        let next = step_clamped(self.current_snap, direction, self.snap_count);
        self.scroll_to_snap(next)
    }

    /// Request a smooth scroll to the given snap.
    ///
    /// Out-of-range indices are silently ignored.
    pub fn scroll_to_snap(&self, index: usize) -> Option<ScrollRequest> {
        if index >= self.snap_count {
            return None;
        }
        Some(ScrollRequest {
            snap: index,
            offset: self.snap_offset(index),
        })
    }

    /// Absolute scroll offset of a snap: `index/(count-1) * max_scroll`
    fn snap_offset(&self, index: usize) -> f32 {
        if self.snap_count <= 1 {
            return 0.0;
        }
        index as f32 / (self.snap_count - 1) as f32 * self.state.max_scroll
    }

    /// Drain the debounce. Returns true when the quiet period elapsed and
    /// the gesture was marked finished on this poll.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.quiet_deadline {
            Some(deadline) if now >= deadline => {
                self.quiet_deadline = None;
                self.scrolling = false;
                true
            }
            _ => false,
        }
    }

    fn resolve_index(&self) -> usize {
        let raw = (self.state.progress() * (self.snap_count - 1) as f32).round() as i64;
        raw.clamp(0, self.snap_count as i64 - 1) as usize
    }
}

fn step_clamped(current: usize, direction: i32, count: usize) -> usize {
    let next = current as i64 + direction as i64;
    next.clamp(0, count as i64 - 1) as usize
}
