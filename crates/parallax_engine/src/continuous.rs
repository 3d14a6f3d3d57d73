//! Continuous-mode scroll application
//!
//! No snap index, no debounce: every scroll event maps the normalized
//! value `n = scroll_y * 0.001` straight onto the scene. Camera and object
//! pose are absolute functions of `n`; the particle drift is cumulative,
//! so it depends on the event history, not just the latest position.

use parallax_scene::SceneState;

/// Scroll pixels to normalized depth
pub const SCROLL_NORMALIZE: f32 = 0.001;

/// Normalized (unclamped) scroll depth for a pixel offset
pub fn normalize(scroll_y: f32) -> f32 {
    scroll_y * SCROLL_NORMALIZE
}

/// Apply one scroll event at depth `n` to the scene
pub fn apply_scroll(scene: &mut SceneState, n: f32) {
    scene.camera.position.y = -n * 2.0;
    scene.camera.pitch = n * 0.1;

    for obj in &mut scene.objects {
        obj.transform.position.y = -n * 0.5;
        obj.transform.scale = 1.0 + n * 0.1;
    }

    for (index, particle) in scene.particles.iter_mut().enumerate() {
        particle.position.y -= n * (0.1 + index as f32 * 0.001);
        particle.rotation.z += n * 0.01;
    }

    scene.ambient.apply_continuous(n);
}

/// Attenuation for the per-frame particle shimmer at depth `n`
pub fn oscillation_damping(n: f32) -> f32 {
    1.0 / (1.0 + n.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(1000.0), 1.0);
        assert_eq!(normalize(0.0), 0.0);
    }

    #[test]
    fn test_camera_and_object_absolute_in_n() {
        let mut scene = SceneState::continuous(1);
        apply_scroll(&mut scene, 1.0);
        assert!((scene.camera.position.y - -2.0).abs() < 1e-6);
        assert!((scene.camera.pitch - 0.1).abs() < 1e-6);
        assert!((scene.objects[0].transform.position.y - -0.5).abs() < 1e-6);
        assert!((scene.objects[0].transform.scale - 1.1).abs() < 1e-6);

        // Re-applying the same depth changes nothing (absolute, not cumulative)
        apply_scroll(&mut scene, 1.0);
        assert!((scene.camera.position.y - -2.0).abs() < 1e-6);
        assert!((scene.objects[0].transform.scale - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_particle_drift_is_cumulative() {
        let mut scene = SceneState::continuous(1);
        let start = scene.particles[0].position.y;
        apply_scroll(&mut scene, 1.0);
        let after_one = scene.particles[0].position.y;
        apply_scroll(&mut scene, 1.0);
        let after_two = scene.particles[0].position.y;

        assert!(after_one < start);
        assert!(after_two < after_one);
        assert!((start - after_one - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_particle_drift_rate_grows_with_index() {
        let mut scene = SceneState::continuous(1);
        let start: Vec<f32> = scene.particles.iter().map(|p| p.position.y).collect();
        apply_scroll(&mut scene, 2.0);
        let drop0 = start[0] - scene.particles[0].position.y;
        let drop49 = start[49] - scene.particles[49].position.y;
        assert!(drop49 > drop0);
        assert!((drop0 - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_ambient_follows_scroll() {
        let mut scene = SceneState::continuous(1);
        apply_scroll(&mut scene, 0.0);
        let shallow = scene.ambient.clear_color;
        apply_scroll(&mut scene, 4.0);
        let deep = scene.ambient.clear_color;
        assert_ne!(shallow, deep);
        assert_eq!(scene.ambient.fog_color, scene.ambient.clear_color);
    }

    #[test]
    fn test_oscillation_damping() {
        assert_eq!(oscillation_damping(0.0), 1.0);
        assert!((oscillation_damping(1.0) - 0.5).abs() < 1e-6);
        // Negative depth (overscroll bounce) never amplifies
        assert_eq!(oscillation_damping(-2.0), 1.0);
    }
}
