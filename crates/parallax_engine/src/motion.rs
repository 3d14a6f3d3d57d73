//! Per-frame procedural motion rules
//!
//! Each profile is a pure function of the time accumulator `t`. Rotation
//! deltas ACCUMULATE every frame; position and scale, where a profile
//! drives them, are ABSOLUTE functions of `t` recomputed from scratch.
//! That asymmetry is load bearing: accumulating position would drift,
//! recomputing rotation would freeze it. Fields a profile does not drive
//! (the torus' pose, the cube's scale) are left untouched, which is what
//! lets the entrance transition own the scale of those objects.

use parallax_math::Vec3;
use parallax_scene::{BackgroundParticle, MotionProfile, ObjectTransform};

/// Apply one frame of a motion profile to an object transform.
///
/// `drive_pose` selects whether the profile may write position and scale
/// (discrete mode) or only rotation (continuous mode, where the scroll
/// signal owns position and scale).
pub fn animate_object(
    transform: &mut ObjectTransform,
    profile: MotionProfile,
    t: f32,
    drive_pose: bool,
) {
    match profile {
        MotionProfile::Rotate => {
            transform.rotation += Vec3::new(0.01, 0.01, 0.005);
        }
        MotionProfile::PulseScale => {
            transform.rotation.y += 0.02;
            if drive_pose {
                transform.position.y = (t * 1.5).sin() * 0.5;
                transform.scale = 1.0 + (t * 2.0).sin() * 0.3;
            }
        }
        MotionProfile::Dance => {
            transform.rotation += Vec3::new(0.02, 0.03, 0.01);
            if drive_pose {
                transform.position.x = (t * 1.2).sin() * 0.8;
                transform.position.y = (t * 1.8).cos() * 0.6;
            }
        }
        MotionProfile::Spiral => {
            transform.rotation += Vec3::new(0.015, 0.025, 0.0);
            if drive_pose {
                transform.position.x = t.sin() * 1.2;
                transform.position.z = t.cos() * 0.5;
                transform.scale = 1.0 + (t * 3.0).sin() * 0.1;
            }
        }
    }
}

/// Apply one frame of drift to a background particle.
///
/// Rotation rates vary with the particle index so the field does not move
/// in lockstep; the vertical shimmer is scaled by `oscillation` (1.0 in
/// discrete mode, attenuated by scroll depth in continuous mode).
pub fn animate_particle(particle: &mut BackgroundParticle, index: usize, t: f32, oscillation: f32) {
    particle.rotation.x += 0.01 * ((index % 3) as f32 + 1.0);
    particle.rotation.y += 0.01 * ((index % 2) as f32 + 1.0);
    particle.position.y += (t + index as f32).sin() * 0.01 * oscillation;
}
