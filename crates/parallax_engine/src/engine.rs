//! Engine facade
//!
//! Owns the scene, the snap resolver, and the animation driver, and wires
//! them to the outside world. Input events only write scroll state or
//! enqueue intents (snap changes, resizes); all scene mutation happens
//! inside [`Engine::tick`], on the single render thread.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use parallax_scene::SceneState;
use parallax_scroll::{NavKey, ScrollEvent, ScrollRequest, SnapResolver};

use crate::continuous;
use crate::driver::{AnimationDriver, DriveMode};
use crate::sink::RenderSink;

/// Engine variant selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineMode {
    /// Scroll quantized into snap sections, one object per section
    Discrete,
    /// Scroll mapped linearly onto transforms, no quantization
    Continuous,
}

impl Default for EngineMode {
    fn default() -> Self {
        Self::Discrete
    }
}

impl std::fmt::Display for EngineMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discrete => write!(f, "discrete"),
            Self::Continuous => write!(f, "continuous"),
        }
    }
}

impl std::str::FromStr for EngineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "discrete" | "snap" => Ok(Self::Discrete),
            "continuous" | "linear" => Ok(Self::Continuous),
            _ => Err(format!("Unknown engine mode: {}", s)),
        }
    }
}

/// Engine construction parameters
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    pub mode: EngineMode,
    /// Seed for the particle field layout
    pub seed: u32,
    /// Initial viewport size in pixels
    pub viewport: (u32, u32),
    /// Scroll offset applied by the initial state sync
    pub start_scroll: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: EngineMode::Discrete,
            seed: 0x5eed,
            viewport: (1280, 720),
            start_scroll: 0.0,
        }
    }
}

/// The scroll-driven animation engine
pub struct Engine {
    mode: EngineMode,
    scene: SceneState,
    driver: AnimationDriver,
    /// Present only in discrete mode
    resolver: Option<SnapResolver>,
    viewport: (u32, u32),
    /// Snap change awaiting the next frame boundary; latest writer wins
    pending_snap: Option<usize>,
    pending_resize: Option<(u32, u32)>,
    start_scroll: f32,
    stopped: bool,
    frame: u64,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        log::info!(
            "Creating engine: mode={}, seed={:#x}, viewport={}x{}",
            config.mode,
            config.seed,
            config.viewport.0,
            config.viewport.1
        );

        let (scene, driver, resolver) = match config.mode {
            EngineMode::Discrete => {
                let scene = SceneState::discrete(config.seed);
                let resolver = SnapResolver::new(
                    scene.objects.len(),
                    max_scroll_for(scene.objects.len(), config.viewport.1),
                );
                (scene, AnimationDriver::new(DriveMode::Discrete), Some(resolver))
            }
            EngineMode::Continuous => (
                SceneState::continuous(config.seed),
                AnimationDriver::new(DriveMode::Continuous),
                None,
            ),
        };

        Self {
            mode: config.mode,
            scene,
            driver,
            resolver,
            viewport: config.viewport,
            pending_snap: None,
            pending_resize: None,
            start_scroll: config.start_scroll,
            stopped: false,
            frame: 0,
        }
    }

    /// Initial state sync: apply one synthetic scroll event so the engine
    /// reflects the starting offset before the first frame.
    pub fn start(&mut self, now: Instant) {
        let y = self.start_scroll;
        self.handle_event(ScrollEvent::Position { y }, now);
        log::info!("Engine started at scroll offset {}", y);
    }

    pub fn mode(&self) -> EngineMode {
        self.mode
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Current viewport size in pixels
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Current snap index (discrete-mode surface)
    pub fn snap_index(&self) -> Option<usize> {
        self.resolver.as_ref().map(|r| r.current_snap())
    }

    /// Number of snap sections (discrete-mode surface)
    pub fn snap_count(&self) -> Option<usize> {
        self.resolver.as_ref().map(|r| r.snap_count())
    }

    pub fn is_scrolling(&self) -> bool {
        self.resolver.as_ref().is_some_and(|r| r.is_scrolling())
    }

    /// Title and blurb for a snap's object, for the navigation overlay
    pub fn snap_info(&self, index: usize) -> Option<(&'static str, &'static str)> {
        self.scene.objects.get(index).map(|o| (o.name, o.blurb))
    }

    /// Request a smooth scroll to a snap. Out of range (or continuous
    /// mode) is a silent no-op.
    pub fn scroll_to_snap(&self, index: usize) -> Option<ScrollRequest> {
        self.resolver.as_ref().and_then(|r| r.scroll_to_snap(index))
    }

    /// Feed one input event.
    ///
    /// Never mutates transforms directly beyond what the event semantics
    /// define; snap changes and resizes are enqueued and realized on the
    /// next tick. Returns a scroll request when the producer should
    /// smooth-scroll somewhere.
    pub fn handle_event(&mut self, event: ScrollEvent, now: Instant) -> Option<ScrollRequest> {
        if self.stopped {
            return None;
        }

        match event {
            ScrollEvent::Position { y } => {
                match self.mode {
                    EngineMode::Discrete => {
                        let resolver = self.resolver.as_mut()?;
                        if let Some(change) = resolver.on_scroll(y, now) {
                            // Enqueued, not applied: the driver realizes the
                            // change at the next frame boundary
                            self.pending_snap = Some(change.to);
                            let (count, obj) = (self.scene.objects.len(), &self.scene.objects[change.to]);
                            log::info!("snap {}/{}: {}", change.to + 1, count, obj.name);
                        }
                    }
                    EngineMode::Continuous => {
                        let n = continuous::normalize(y);
                        continuous::apply_scroll(&mut self.scene, n);
                        self.driver
                            .set_particle_oscillation(continuous::oscillation_damping(n));
                    }
                }
                None
            }

            ScrollEvent::Wheel { delta_y } => match self.mode {
                EngineMode::Discrete => self.resolver.as_mut()?.on_wheel(delta_y),
                // Continuous mode has no step navigation; the producer
                // feeds wheel motion back as plain positions.
                EngineMode::Continuous => None,
            },

            ScrollEvent::Key(key) => match self.mode {
                EngineMode::Discrete => {
                    let direction = match key {
                        NavKey::Down | NavKey::Space => 1,
                        NavKey::Up => -1,
                    };
                    self.resolver.as_mut()?.on_key_step(direction)
                }
                EngineMode::Continuous => None,
            },

            ScrollEvent::Resize { width, height } => {
                self.viewport = (width, height);
                self.pending_resize = Some((width, height));
                if let Some(resolver) = self.resolver.as_mut() {
                    resolver.set_max_scroll(max_scroll_for(self.scene.objects.len(), height));
                }
                log::debug!("viewport resized to {}x{}", width, height);
                None
            }
        }
    }

    /// Advance one frame and draw. A stopped engine ignores ticks, so no
    /// transition can run after teardown.
    pub fn tick(&mut self, dt: f32, now: Instant, sink: &mut dyn RenderSink) {
        if self.stopped {
            return;
        }

        if let Some(resolver) = self.resolver.as_mut() {
            resolver.poll(now);
        }

        if let Some((width, height)) = self.pending_resize.take() {
            sink.resize_surface(width, height);
            sink.update_projection(aspect_ratio(width, height));
        }

        if let Some(snap) = self.pending_snap.take() {
            self.driver.on_snap_change(&mut self.scene, snap);
        }

        self.driver.tick(&mut self.scene, dt);
        sink.draw(&self.scene);
        self.frame += 1;
    }

    /// Stop the engine. Idempotent; every later event or tick is a no-op.
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            log::info!("Engine stopped after {} frames", self.frame);
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// Scrollable extent for `count` full-viewport sections
fn max_scroll_for(count: usize, viewport_height: u32) -> f32 {
    count.saturating_sub(1) as f32 * viewport_height as f32
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height > 0 {
        width as f32 / height as f32
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::NullSink;
    use std::time::Duration;

    const DT: f32 = 1.0 / 60.0;

    fn discrete_engine() -> Engine {
        Engine::new(EngineConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let mut engine = discrete_engine();
        engine.start(Instant::now());
        assert_eq!(engine.snap_index(), Some(0));
        assert_eq!(engine.snap_count(), Some(4));
        assert_eq!(engine.scene().active_object(), Some(0));
    }

    #[test]
    fn test_resize_reaches_sink_on_next_tick() {
        let mut engine = discrete_engine();
        let mut sink = NullSink::default();
        let now = Instant::now();

        engine.handle_event(ScrollEvent::Resize { width: 800, height: 600 }, now);
        assert_eq!(sink.resizes, 0);
        engine.tick(DT, now, &mut sink);
        assert_eq!(sink.resizes, 1);
        assert_eq!(sink.draws, 1);
    }

    #[test]
    fn test_wheel_produces_request_then_coalesces() {
        let mut engine = discrete_engine();
        let now = Instant::now();

        let req = engine
            .handle_event(ScrollEvent::Wheel { delta_y: 1.0 }, now)
            .unwrap();
        assert_eq!(req.snap, 1);

        // Producer starts scrolling; further wheels are coalesced
        engine.handle_event(ScrollEvent::Position { y: 50.0 }, now);
        assert!(engine.is_scrolling());
        assert_eq!(engine.handle_event(ScrollEvent::Wheel { delta_y: 1.0 }, now), None);
    }

    #[test]
    fn test_keyboard_steps_and_clamps() {
        let mut engine = discrete_engine();
        let now = Instant::now();

        let req = engine
            .handle_event(ScrollEvent::Key(NavKey::Space), now)
            .unwrap();
        assert_eq!(req.snap, 1);

        // Up from snap 0 re-requests snap 0 (clamped)
        let req = engine.handle_event(ScrollEvent::Key(NavKey::Up), now).unwrap();
        assert_eq!(req.snap, 0);
    }

    #[test]
    fn test_scroll_to_snap_out_of_range_silent() {
        let engine = discrete_engine();
        assert!(engine.scroll_to_snap(4).is_none());
        assert!(engine.scroll_to_snap(usize::MAX).is_none());
    }

    #[test]
    fn test_snap_info() {
        let engine = discrete_engine();
        let (name, _) = engine.snap_info(0).unwrap();
        assert_eq!(name, "Rotating Torus");
        assert!(engine.snap_info(4).is_none());
    }

    #[test]
    fn test_stopped_engine_ignores_everything() {
        let mut engine = discrete_engine();
        let mut sink = NullSink::default();
        let now = Instant::now();

        engine.stop();
        assert!(engine.is_stopped());
        assert_eq!(engine.handle_event(ScrollEvent::Wheel { delta_y: 1.0 }, now), None);
        engine.tick(DT, now, &mut sink);
        assert_eq!(sink.draws, 0);
        assert_eq!(engine.frame(), 0);
    }

    #[test]
    fn test_quiet_period_polled_by_tick() {
        let mut engine = discrete_engine();
        let mut sink = NullSink::default();
        let now = Instant::now();

        engine.handle_event(ScrollEvent::Position { y: 10.0 }, now);
        assert!(engine.is_scrolling());

        engine.tick(DT, now + Duration::from_millis(200), &mut sink);
        assert!(!engine.is_scrolling());
    }

    #[test]
    fn test_continuous_engine_has_no_snap_surface() {
        let config = EngineConfig {
            mode: EngineMode::Continuous,
            ..Default::default()
        };
        let mut engine = Engine::new(config);
        let now = Instant::now();

        assert_eq!(engine.snap_index(), None);
        assert_eq!(engine.snap_count(), None);
        assert!(!engine.is_scrolling());
        assert!(engine.scroll_to_snap(0).is_none());
        assert_eq!(engine.handle_event(ScrollEvent::Wheel { delta_y: 1.0 }, now), None);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("discrete".parse::<EngineMode>().unwrap(), EngineMode::Discrete);
        assert_eq!("LINEAR".parse::<EngineMode>().unwrap(), EngineMode::Continuous);
        assert!("hybrid".parse::<EngineMode>().is_err());
    }
}
