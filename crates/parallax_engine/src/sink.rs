//! Render sink seam
//!
//! The engine treats the renderer as an opaque sink: one draw per frame,
//! plus projection/surface updates on resize. The wgpu presenter in the
//! runtime implements this; tests use [`NullSink`].

use parallax_scene::SceneState;

/// Receiver of per-frame draw calls and resize notifications
pub trait RenderSink {
    /// Draw the scene. Called exactly once per engine tick.
    fn draw(&mut self, scene: &SceneState);

    /// The viewport aspect ratio changed
    fn update_projection(&mut self, aspect: f32);

    /// The surface itself changed size
    fn resize_surface(&mut self, width: u32, height: u32);
}

/// Sink that counts calls and discards everything else
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink {
    pub draws: u64,
    pub resizes: u64,
}

impl RenderSink for NullSink {
    fn draw(&mut self, _scene: &SceneState) {
        self.draws += 1;
    }

    fn update_projection(&mut self, _aspect: f32) {}

    fn resize_surface(&mut self, _width: u32, _height: u32) {
        self.resizes += 1;
    }
}
