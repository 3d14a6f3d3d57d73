//! Scroll input events
//!
//! The runtime translates window events into these before handing them to
//! the engine; nothing here touches the scene directly.

use serde::{Deserialize, Serialize};

/// Navigation keys the engine responds to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavKey {
    /// ArrowUp - retreat one snap
    Up,
    /// ArrowDown - advance one snap
    Down,
    /// Space - advance one snap
    Space,
}

/// A single scroll-related input event
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScrollEvent {
    /// Absolute scroll offset changed (pixels)
    Position {
        /// New scroll offset
        y: f32,
    },

    /// Wheel gesture; only the sign of the delta matters
    Wheel {
        /// Vertical wheel delta (positive = forward/down)
        delta_y: f32,
    },

    /// Navigation key pressed
    Key(NavKey),

    /// Viewport resized
    Resize {
        /// New viewport width in pixels
        width: u32,
        /// New viewport height in pixels
        height: u32,
    },
}

impl ScrollEvent {
    /// Wheel direction: +1 forward, -1 backward.
    ///
    /// Only strictly positive deltas count as forward (`delta > 0`).
    pub fn wheel_direction(&self) -> Option<i32> {
        match self {
            Self::Wheel { delta_y } => Some(if *delta_y > 0.0 { 1 } else { -1 }),
            _ => None,
        }
    }

    /// Keyboard step direction: +1 forward, -1 backward
    pub fn key_direction(&self) -> Option<i32> {
        match self {
            Self::Key(NavKey::Down) | Self::Key(NavKey::Space) => Some(1),
            Self::Key(NavKey::Up) => Some(-1),
            _ => None,
        }
    }
}
