//! Ambient scene parameters: fog, clear color, and the static light rig

use parallax_math::Color;

/// Fog near distance (constant)
pub const FOG_NEAR: f32 = 1.0;
/// Fog far distance (constant)
pub const FOG_FAR: f32 = 100.0;

/// Per-snap (clear, fog) colors: deep blue, deep red, blue-purple, magenta
pub const SNAP_COLORS: [(u32, u32); 4] = [
    (0x000428, 0x000428),
    (0x280004, 0x280004),
    (0x000428, 0x000040),
    (0x280028, 0x280028),
];

/// Fog and clear color state
#[derive(Clone, Copy, Debug)]
pub struct Ambient {
    pub fog_color: Color,
    pub clear_color: Color,
    pub fog_near: f32,
    pub fog_far: f32,
}

impl Ambient {
    pub fn new() -> Self {
        let (clear, fog) = SNAP_COLORS[0];
        Self {
            fog_color: Color::from_hex(fog),
            clear_color: Color::from_hex(clear),
            fog_near: FOG_NEAR,
            fog_far: FOG_FAR,
        }
    }

    /// Snap both colors to the table entry. Deliberately immediate: the
    /// camera and object scale smooth across snap changes, colors do not.
    pub fn apply_snap(&mut self, snap: usize) {
        let (clear, fog) = SNAP_COLORS[snap];
        self.clear_color = Color::from_hex(clear);
        self.fog_color = Color::from_hex(fog);
    }

    /// Continuous-mode color ramp: both colors follow a single HSL function
    /// of the normalized scroll value.
    pub fn apply_continuous(&mut self, n: f32) {
        let color = continuous_color(n);
        self.clear_color = color;
        self.fog_color = color;
    }
}

impl Default for Ambient {
    fn default() -> Self {
        Self::new()
    }
}

/// Hue drifts from blue-violet, lightness rises gently with scroll depth
pub fn continuous_color(n: f32) -> Color {
    Color::from_hsl(0.6 + n * 0.1, 0.7, 0.1 + n * 0.05)
}

/// Static light rig. These exist for the renderer and never change.
#[derive(Clone, Copy, Debug)]
pub struct LightRig {
    pub ambient_color: Color,
    pub ambient_intensity: f32,
    pub directional_color: Color,
    pub directional_intensity: f32,
    pub directional_position: [f32; 3],
    pub point_color: Color,
    pub point_intensity: f32,
    pub point_position: [f32; 3],
    pub point_range: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient_color: Color::from_hex(0x404040),
            ambient_intensity: 0.6,
            directional_color: Color::WHITE,
            directional_intensity: 1.0,
            directional_position: [5.0, 5.0, 5.0],
            point_color: Color::from_hex(0x00ff88),
            point_intensity: 1.0,
            point_position: [0.0, 0.0, 10.0],
            point_range: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_ambient_is_first_snap() {
        let a = Ambient::new();
        assert_eq!(a.fog_color.to_hex(), 0x000428);
        assert_eq!(a.clear_color.to_hex(), 0x000428);
        assert_eq!(a.fog_near, 1.0);
        assert_eq!(a.fog_far, 100.0);
    }

    #[test]
    fn test_apply_snap_is_immediate() {
        let mut a = Ambient::new();
        a.apply_snap(3);
        assert_eq!(a.fog_color.to_hex(), 0x280028);
        assert_eq!(a.clear_color.to_hex(), 0x280028);
    }

    #[test]
    fn test_snap_two_has_distinct_fog_and_clear() {
        let mut a = Ambient::new();
        a.apply_snap(2);
        assert_eq!(a.clear_color.to_hex(), 0x000428);
        assert_eq!(a.fog_color.to_hex(), 0x000040);
    }

    #[test]
    fn test_continuous_color_at_zero() {
        let c = continuous_color(0.0);
        let expected = parallax_math::Color::from_hsl(0.6, 0.7, 0.1);
        assert_eq!(c, expected);
    }

    #[test]
    fn test_continuous_lightness_rises() {
        let shallow = continuous_color(0.0);
        let deep = continuous_color(4.0);
        let lum = |c: Color| c.r + c.g + c.b;
        assert!(lum(deep) > lum(shallow));
    }
}
