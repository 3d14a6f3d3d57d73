//! # parallax_scroll - Scroll signal handling
//!
//! Turns raw scroll/wheel/keyboard input into a stable animation state:
//! - Normalized scroll progress with divide-by-zero safety
//! - Snap index resolution with round-to-nearest section mapping
//! - Wheel gesture coalescing and keyboard step navigation
//! - The 150 ms quiet-period debounce behind `is_scrolling`
//! - A smooth-scroll animator for programmatic snap jumps
//!
//! Everything is clocked explicitly with [`std::time::Instant`] so the
//! debounce is deterministic under test.

pub mod events;
pub mod smooth;
pub mod snap;
pub mod state;

pub use events::{NavKey, ScrollEvent};
pub use smooth::SmoothScroll;
pub use snap::{ScrollRequest, SnapChange, SnapResolver, QUIET_PERIOD};
pub use state::ScrollState;
