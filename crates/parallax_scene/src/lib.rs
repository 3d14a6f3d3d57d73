//! # parallax_scene - Scene state for the scroll engine
//!
//! The single source of mutable visual truth: the showcase object catalog,
//! the background particle field, the camera pose, and the ambient
//! fog/clear colors. Created once at engine initialization and mutated
//! every frame by the animation driver; nothing else writes to it.

pub mod ambient;
pub mod camera;
pub mod object;
pub mod particles;

pub use ambient::{continuous_color, Ambient, LightRig, FOG_FAR, FOG_NEAR, SNAP_COLORS};
pub use camera::{
    snap_camera_target, CameraState, FAR_PLANE, FOV_Y_DEGREES, NEAR_PLANE, SNAP_CAMERA_POSITIONS,
};
pub use object::{Geometry, MotionProfile, ObjectTransform, RenderObject};
pub use particles::{spawn_field, BackgroundParticle, FIELD_HALF_EXTENT, PARTICLE_COUNT};

use parallax_math::SeededRng;

/// Number of snap sections in discrete mode, fixed by the catalog
pub const SNAP_COUNT: usize = 4;

/// Complete mutable scene state
#[derive(Clone, Debug)]
pub struct SceneState {
    pub objects: Vec<RenderObject>,
    pub particles: Vec<BackgroundParticle>,
    pub camera: CameraState,
    pub ambient: Ambient,
    pub lights: LightRig,
}

impl SceneState {
    /// Discrete-mode scene: the four-object catalog, object 0 visible
    pub fn discrete(seed: u32) -> Self {
        let mut rng = SeededRng::new(seed);
        Self {
            objects: object::catalog(),
            particles: particles::spawn_field(&mut rng),
            camera: CameraState::new(),
            ambient: Ambient::new(),
            lights: LightRig::default(),
        }
    }

    /// Continuous-mode scene: a single always-visible object
    pub fn continuous(seed: u32) -> Self {
        let mut rng = SeededRng::new(seed);
        Self {
            objects: object::continuous_object(),
            particles: particles::spawn_field(&mut rng),
            camera: CameraState::new(),
            ambient: Ambient::new(),
            lights: LightRig::default(),
        }
    }

    /// Make exactly the object at `index` visible.
    ///
    /// Indices come from the snap resolver, which clamps them; an
    /// out-of-range index is a programming error, not a runtime case.
    pub fn set_active_object(&mut self, index: usize) {
        debug_assert!(index < self.objects.len());
        for obj in &mut self.objects {
            obj.visible = obj.id == index;
        }
    }

    /// Index of the currently visible object, if exactly one is visible
    pub fn active_object(&self) -> Option<usize> {
        let mut active = None;
        for obj in &self.objects {
            if obj.visible {
                if active.is_some() {
                    return None;
                }
                active = Some(obj.id);
            }
        }
        active
    }

    /// Number of visible objects
    pub fn visible_count(&self) -> usize {
        self.objects.iter().filter(|o| o.visible).count()
    }
}
