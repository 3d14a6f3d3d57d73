//! # parallax_engine - Scroll-driven animation engine
//!
//! The per-frame core that turns scroll state into scene motion:
//! - Four procedural motion profiles, applied only to visible objects
//! - Entrance and camera transitions as generation-counted state objects
//! - Discrete (snap) and continuous configurations of one engine
//! - A render-sink seam so the graphics backend stays an opaque collaborator
//! - Deterministic lifecycle: a stopped engine ignores ticks and events
//!
//! Everything runs on one thread. Input handlers write scroll state and
//! enqueue intents; only [`Engine::tick`] mutates the scene.

pub mod continuous;
pub mod driver;
pub mod engine;
pub mod motion;
pub mod sink;
pub mod transition;

pub use driver::{AnimationDriver, DriveMode};
pub use engine::{Engine, EngineConfig, EngineMode};
pub use sink::{NullSink, RenderSink};
pub use transition::{CameraTransition, ScaleTransition, StepResult};

pub mod prelude {
    pub use crate::engine::{Engine, EngineConfig, EngineMode};
    pub use crate::sink::RenderSink;
}
