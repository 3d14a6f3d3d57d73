//! Input translation and the scroll signal producer
//!
//! The window gives us wheel deltas and key presses; the engine wants a
//! scroll position stream plus discrete navigation events. [`ScrollFeed`]
//! is the producer half: it owns the authoritative scroll offset, clamps
//! it to the scrollable extent, and implements the smooth-scroll-to
//! primitive the engine's snap requests rely on.

use winit::event::MouseScrollDelta;
use winit::keyboard::{Key, NamedKey};

use parallax_scroll::{NavKey, SmoothScroll};

/// Pixels per wheel line tick
const LINE_HEIGHT: f32 = 40.0;

/// Fraction of the remaining distance covered per smooth-scroll frame
const SMOOTH_SPEED: f32 = 0.2;

/// The scroll signal producer: authoritative scroll offset + animator
pub struct ScrollFeed {
    smooth: SmoothScroll,
    max_scroll: f32,
}

impl ScrollFeed {
    pub fn new(max_scroll: f32) -> Self {
        Self {
            smooth: SmoothScroll::new(SMOOTH_SPEED),
            max_scroll: max_scroll.max(0.0),
        }
    }

    pub fn position(&self) -> f32 {
        self.smooth.position()
    }

    pub fn set_max_scroll(&mut self, max: f32) {
        self.max_scroll = max.max(0.0);
        if self.smooth.position() > self.max_scroll {
            self.smooth.jump_to(self.max_scroll);
        }
    }

    /// Smooth-scroll to an absolute offset (snap navigation)
    pub fn scroll_to(&mut self, offset: f32) {
        self.smooth.scroll_to(offset.clamp(0.0, self.max_scroll));
    }

    /// Immediate relative scroll (continuous mode wheel handling).
    /// Returns the new position.
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        let next = (self.smooth.position() + delta).clamp(0.0, self.max_scroll);
        self.smooth.jump_to(next);
        next
    }

    /// Advance the smooth-scroll animation one frame. Returns the new
    /// position while animating.
    pub fn tick(&mut self) -> Option<f32> {
        self.smooth.tick()
    }
}

/// Wheel delta in pixels, positive = scroll down
pub fn wheel_delta(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    }
}

/// Map a key press to a navigation key, if it is one
pub fn nav_key(key: &Key) -> Option<NavKey> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some(NavKey::Up),
        Key::Named(NamedKey::ArrowDown) => Some(NavKey::Down),
        Key::Named(NamedKey::Space) => Some(NavKey::Space),
        _ => None,
    }
}

/// Clamp the surface size the way the original clamped device pixel ratio
/// to 2: above that, render at a reduced internal resolution.
pub fn clamped_surface_size(width: u32, height: u32, scale_factor: f64) -> (u32, u32) {
    if scale_factor <= 2.0 {
        return (width, height);
    }
    let shrink = 2.0 / scale_factor;
    (
        ((width as f64 * shrink) as u32).max(1),
        ((height as f64 * shrink) as u32).max(1),
    )
}
