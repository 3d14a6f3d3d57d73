//! Per-frame animation driver
//!
//! The only writer of object transforms. Each tick advances the time
//! accumulator by the real elapsed step, animates the visible objects and
//! the particle field, and steps whichever transitions are in flight.
//! Invisible objects are frozen: no wasted work, and they re-enter with a
//! consistent snapshot.

use parallax_scene::{snap_camera_target, SceneState};

use crate::motion;
use crate::transition::{CameraTransition, ScaleTransition};

/// Which configuration the driver runs in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriveMode {
    /// Snap-quantized: one visible object, entrance/camera transitions
    Discrete,
    /// Scroll maps linearly onto transforms; profiles own rotation only
    Continuous,
}

/// Advances the scene once per rendered frame
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    mode: DriveMode,
    /// Monotonic time accumulator in seconds
    t: f32,
    /// Oscillation attenuation for the particle shimmer (continuous mode)
    particle_oscillation: f32,
    scale_transition: ScaleTransition,
    camera_transition: CameraTransition,
}

impl AnimationDriver {
    pub fn new(mode: DriveMode) -> Self {
        Self {
            mode,
            t: 0.0,
            particle_oscillation: 1.0,
            scale_transition: ScaleTransition::new(),
            camera_transition: CameraTransition::new(),
        }
    }

    pub fn mode(&self) -> DriveMode {
        self.mode
    }

    pub fn time(&self) -> f32 {
        self.t
    }

    /// Attenuate the particle shimmer by scroll depth (continuous mode)
    pub fn set_particle_oscillation(&mut self, factor: f32) {
        self.particle_oscillation = factor;
    }

    /// React to a snap change: swap visibility, snap the ambient colors,
    /// and start the entrance and camera glides. Any in-flight transition
    /// is superseded.
    pub fn on_snap_change(&mut self, scene: &mut SceneState, snap: usize) {
        scene.set_active_object(snap);
        scene.ambient.apply_snap(snap);
        self.scale_transition.begin(scene, snap);
        self.camera_transition.begin(snap_camera_target(snap));
    }

    /// Advance one frame: `dt` is the real elapsed time in seconds
    pub fn tick(&mut self, scene: &mut SceneState, dt: f32) {
        self.t += dt;

        let drive_pose = self.mode == DriveMode::Discrete;
        for obj in scene.objects.iter_mut().filter(|o| o.visible) {
            motion::animate_object(&mut obj.transform, obj.motion, self.t, drive_pose);
        }

        for (index, particle) in scene.particles.iter_mut().enumerate() {
            motion::animate_particle(particle, index, self.t, self.particle_oscillation);
        }

        self.scale_transition.step(scene);
        self.camera_transition.step(scene);
    }

    pub fn scale_transition(&self) -> &ScaleTransition {
        &self.scale_transition
    }

    pub fn camera_transition(&self) -> &CameraTransition {
        &self.camera_transition
    }
}
