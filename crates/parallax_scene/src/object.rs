//! Showcase object catalog
//!
//! Four objects, each with a distinct procedural motion profile and a
//! geometry descriptor. Descriptors are plain data for the renderer
//! binding; no mesh authoring happens here.

use parallax_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// Procedural animation rule applied to an object each frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionProfile {
    /// Steady multi-axis rotation
    Rotate,
    /// Breathing scale with a floating bob
    PulseScale,
    /// Multi-axis rotation plus planar figure motion
    Dance,
    /// Orbit-like sweep with a slight scale shimmer
    Spiral,
}

/// Geometry construction parameters, consumed by the renderer binding
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Torus { radius: f32, tube: f32 },
    Sphere { radius: f32 },
    Cube { size: f32 },
    Dodecahedron { radius: f32 },
}

/// Position, Euler rotation, and uniform scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectTransform {
    pub position: Vec3,
    /// Euler angles in radians
    pub rotation: Vec3,
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

/// One showcase object
#[derive(Clone, Debug)]
pub struct RenderObject {
    /// Stable index into the catalog
    pub id: usize,
    /// Display title for the navigation overlay
    pub name: &'static str,
    /// One-line description for the navigation overlay
    pub blurb: &'static str,
    pub geometry: Geometry,
    /// Base material color
    pub color: Color,
    pub motion: MotionProfile,
    pub transform: ObjectTransform,
    pub visible: bool,
}

impl RenderObject {
    fn new(
        id: usize,
        name: &'static str,
        blurb: &'static str,
        geometry: Geometry,
        color: Color,
        motion: MotionProfile,
    ) -> Self {
        Self {
            id,
            name,
            blurb,
            geometry,
            color,
            motion,
            transform: ObjectTransform::default(),
            visible: false,
        }
    }
}

/// Build the fixed four-object catalog. Only object 0 starts visible.
pub fn catalog() -> Vec<RenderObject> {
    let mut objects = vec![
        RenderObject::new(
            0,
            "Rotating Torus",
            "Classic rotating geometry with smooth animations",
            Geometry::Torus { radius: 1.5, tube: 0.6 },
            Color::from_hex(0x00ff88),
            MotionProfile::Rotate,
        ),
        RenderObject::new(
            1,
            "Pulsating Sphere",
            "Dynamic scaling sphere with floating movement",
            Geometry::Sphere { radius: 1.8 },
            Color::from_hex(0xff4444),
            MotionProfile::PulseScale,
        ),
        RenderObject::new(
            2,
            "Dancing Cube",
            "Multi-axis rotating cube with position dancing",
            Geometry::Cube { size: 2.5 },
            Color::from_hex(0x4444ff),
            MotionProfile::Dance,
        ),
        RenderObject::new(
            3,
            "Spiraling Dodecahedron",
            "Complex geometry with spiral motion patterns",
            Geometry::Dodecahedron { radius: 2.0 },
            Color::from_hex(0xff44ff),
            MotionProfile::Spiral,
        ),
    ];
    objects[0].visible = true;
    objects
}

/// Build the single always-visible object used in continuous mode
pub fn continuous_object() -> Vec<RenderObject> {
    let mut objects = vec![RenderObject::new(
        0,
        "Rotating Torus",
        "Classic rotating geometry with smooth animations",
        Geometry::Torus { radius: 1.5, tube: 0.6 },
        Color::from_hex(0x00ff88),
        MotionProfile::Rotate,
    )];
    objects[0].visible = true;
    objects
}
