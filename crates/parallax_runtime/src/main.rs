//! Parallax runtime
//!
//! Binds the scroll engine to a window: winit event loop, wgpu presenter,
//! and input translation. When no display or GPU surface is available the
//! runtime falls back to a headless demo drive of the engine instead of
//! starting a frame loop it cannot present.
//!
//! Run with: cargo run --bin parallax

mod config;
mod input;
mod presenter;

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use parallax_engine::{Engine, EngineConfig, EngineMode, NullSink};
use parallax_scene::SNAP_COUNT;
use parallax_scroll::ScrollEvent;

use crate::config::BootConfig;
use crate::input::ScrollFeed;
use crate::presenter::{Presenter, PresenterError};

/// Virtual page length used in continuous mode, in viewport heights
const CONTINUOUS_PAGE_HEIGHTS: f32 = 10.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BootConfig::load();
    config.print_summary();

    if let Err(e) = run_windowed(&config) {
        log::warn!("Windowed mode unavailable: {}", e);
        run_headless(&config);
    }
}

/// Scrollable extent for the current mode and viewport height
fn scroll_extent(mode: EngineMode, viewport_height: u32) -> f32 {
    match mode {
        EngineMode::Discrete => (SNAP_COUNT - 1) as f32 * viewport_height as f32,
        EngineMode::Continuous => CONTINUOUS_PAGE_HEIGHTS * viewport_height as f32,
    }
}

fn run_windowed(config: &BootConfig) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    /// Application state for windowed mode
    struct WindowedApp {
        config: BootConfig,
        window: Option<Arc<Window>>,
        presenter: Option<Presenter>,
        engine: Option<Engine>,
        feed: ScrollFeed,
        last_frame: Instant,
        setup_error: Option<PresenterError>,
    }

    impl WindowedApp {
        fn new(config: BootConfig) -> Self {
            let extent = scroll_extent(config.engine.mode, config.display.height);
            Self {
                config,
                window: None,
                presenter: None,
                engine: None,
                feed: ScrollFeed::new(extent),
                last_frame: Instant::now(),
                setup_error: None,
            }
        }
    }

    impl ApplicationHandler for WindowedApp {
        fn resumed(&mut self, event_loop: &ActiveEventLoop) {
            if self.window.is_some() {
                return;
            }

            let attrs = WindowAttributes::default()
                .with_title("Parallax")
                .with_inner_size(LogicalSize::new(
                    self.config.display.width,
                    self.config.display.height,
                ));

            let window = match event_loop.create_window(attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            // The engine must not start when the surface cannot be acquired
            let presenter = match pollster::block_on(Presenter::new(window.clone())) {
                Ok(presenter) => presenter,
                Err(e) => {
                    log::error!("Presenter setup failed: {}", e);
                    self.setup_error = Some(e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            let (width, height) =
                input::clamped_surface_size(size.width, size.height, window.scale_factor());
            log::info!(
                "Surface ready: {}x{}, aspect {:.3}",
                width,
                height,
                presenter.aspect()
            );

            let mut engine = Engine::new(EngineConfig {
                mode: self.config.engine.mode,
                seed: self.config.engine.seed,
                viewport: (width, height),
                start_scroll: 0.0,
            });
            engine.start(Instant::now());

            self.feed
                .set_max_scroll(scroll_extent(engine.mode(), height));
            self.last_frame = Instant::now();
            self.window = Some(window.clone());
            self.presenter = Some(presenter);
            self.engine = Some(engine);

            window.request_redraw();
        }

        fn window_event(
            &mut self,
            event_loop: &ActiveEventLoop,
            _window_id: WindowId,
            event: WindowEvent,
        ) {
            let (Some(window), Some(engine), Some(presenter)) = (
                self.window.as_ref(),
                self.engine.as_mut(),
                self.presenter.as_mut(),
            ) else {
                return;
            };

            match event {
                WindowEvent::CloseRequested => {
                    // Stop the loop and detach before the presenter drops
                    engine.stop();
                    event_loop.exit();
                }

                WindowEvent::Resized(size) => {
                    let (width, height) = input::clamped_surface_size(
                        size.width,
                        size.height,
                        window.scale_factor(),
                    );
                    engine.handle_event(
                        ScrollEvent::Resize { width, height },
                        Instant::now(),
                    );
                    self.feed
                        .set_max_scroll(scroll_extent(engine.mode(), height));
                }

                WindowEvent::MouseWheel { delta, .. } => {
                    let now = Instant::now();
                    let delta_y = input::wheel_delta(delta);
                    match engine.mode() {
                        EngineMode::Discrete => {
                            if let Some(req) =
                                engine.handle_event(ScrollEvent::Wheel { delta_y }, now)
                            {
                                self.feed.scroll_to(req.offset);
                            }
                        }
                        EngineMode::Continuous => {
                            let y = self.feed.scroll_by(delta_y);
                            engine.handle_event(ScrollEvent::Position { y }, now);
                        }
                    }
                }

                WindowEvent::KeyboardInput { event, .. } => {
                    if !event.state.is_pressed() {
                        return;
                    }
                    if let Some(key) = input::nav_key(&event.logical_key) {
                        if let Some(req) =
                            engine.handle_event(ScrollEvent::Key(key), Instant::now())
                        {
                            self.feed.scroll_to(req.offset);
                        }
                    }
                }

                WindowEvent::RedrawRequested => {
                    let now = Instant::now();
                    let dt = (now - self.last_frame).as_secs_f32().min(0.1);
                    self.last_frame = now;

                    if let Some(y) = self.feed.tick() {
                        engine.handle_event(ScrollEvent::Position { y }, now);
                    }

                    engine.tick(dt, now, presenter);
                    window.request_redraw();
                }

                _ => {}
            }
        }

        fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
            if let Some(window) = self.window.as_ref() {
                window.request_redraw();
            }
        }
    }

    let mut app = WindowedApp::new(*config);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.setup_error.take() {
        return Err(e.into());
    }
    Ok(())
}

/// Drive the engine through a scripted tour without a window. Used when no
/// display server or GPU surface is available.
fn run_headless(config: &BootConfig) {
    log::info!("Running headless demo drive");

    let mut engine = Engine::new(EngineConfig {
        mode: config.engine.mode,
        seed: config.engine.seed,
        viewport: (config.display.width, config.display.height),
        start_scroll: 0.0,
    });
    let mut sink = NullSink::default();
    let mut feed = ScrollFeed::new(scroll_extent(engine.mode(), config.display.height));

    let start = Instant::now();
    engine.start(start);

    let dt = 1.0 / 60.0;
    let mut now = start;
    let frame_step = std::time::Duration::from_micros(16_667);

    match engine.mode() {
        EngineMode::Discrete => {
            for target in [1usize, 2, 3, 0] {
                if let Some(req) = engine.scroll_to_snap(target) {
                    feed.scroll_to(req.offset);
                }
                for _ in 0..90 {
                    now += frame_step;
                    if let Some(y) = feed.tick() {
                        engine.handle_event(ScrollEvent::Position { y }, now);
                    }
                    engine.tick(dt, now, &mut sink);
                }
            }
        }
        EngineMode::Continuous => {
            for step in 1..=360u32 {
                now += frame_step;
                let y = feed.scroll_by(10.0);
                engine.handle_event(ScrollEvent::Position { y }, now);
                engine.tick(dt, now, &mut sink);
                if step % 60 == 0 {
                    let cam = engine.scene().camera.position;
                    log::info!("scroll {:.0}px, camera y {:.2}", y, cam.y);
                }
            }
        }
    }

    engine.stop();
    log::info!("Headless drive complete: {} frames drawn", sink.draws);
}
