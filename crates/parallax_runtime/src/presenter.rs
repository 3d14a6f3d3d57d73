//! Desktop presenter - connects the engine to the GPU via wgpu
//!
//! The engine treats this as an opaque render sink: it receives one draw
//! per frame plus resize notifications. The draw clears the surface to the
//! scene's ambient clear color; mesh rendering is out of scope for the
//! engine, so the pipeline stays a single clear pass.

use std::sync::Arc;

use thiserror::Error;
use winit::window::Window;

use parallax_engine::RenderSink;
use parallax_scene::SceneState;

/// Setup failures reported to the caller. The engine's frame loop must not
/// start when presenter creation fails.
#[derive(Debug, Error)]
pub enum PresenterError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("failed to acquire device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// wgpu presenter bound to a winit window
pub struct Presenter {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    aspect: f32,
}

impl Presenter {
    /// Create a presenter for the window. Fails cleanly when no surface,
    /// adapter, or device is available.
    pub async fn new(window: Arc<Window>) -> Result<Self, PresenterError> {
        log::info!("Creating presenter...");

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(PresenterError::NoAdapter)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("parallax_device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(caps.formats[0]);

        let size = window.inner_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        log::info!(
            "Presenter initialized: {}x{}, format: {:?}",
            config.width,
            config.height,
            format
        );

        Ok(Self {
            surface,
            device,
            queue,
            aspect: config.width as f32 / config.height as f32,
            config,
        })
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    fn render(&mut self, scene: &SceneState) {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                log::warn!("Dropping frame: {}", e);
                return;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let clear = scene.ambient.clear_color;
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("parallax_frame"),
            });

        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("clear_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: clear.r as f64,
                        g: clear.g as f64,
                        b: clear.b as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
    }
}

impl RenderSink for Presenter {
    fn draw(&mut self, scene: &SceneState) {
        self.render(scene);
    }

    fn update_projection(&mut self, aspect: f32) {
        self.aspect = aspect;
        log::debug!("Projection aspect updated to {:.3}", aspect);
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            log::debug!("Surface resized to {}x{}", width, height);
        }
    }
}
