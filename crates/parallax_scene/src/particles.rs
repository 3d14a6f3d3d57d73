//! Decorative background particle field

use parallax_math::{Color, SeededRng, Vec3};

/// Number of background particles
pub const PARTICLE_COUNT: usize = 50;

/// Half-extent of the cube the particles spawn in
pub const FIELD_HALF_EXTENT: f32 = 10.0;

/// Sphere radius of a single particle (renderer descriptor)
pub const PARTICLE_RADIUS: f32 = 0.1;

/// One floating background particle. Purely decorative.
#[derive(Clone, Debug)]
pub struct BackgroundParticle {
    pub position: Vec3,
    /// Euler angles in radians
    pub rotation: Vec3,
    pub color: Color,
}

/// Spawn the particle field from a seeded random source.
///
/// Positions are uniform in a cube of half-extent [`FIELD_HALF_EXTENT`];
/// hues are uniform in [0, 1) at saturation 0.7, lightness 0.5.
pub fn spawn_field(rng: &mut SeededRng) -> Vec<BackgroundParticle> {
    (0..PARTICLE_COUNT)
        .map(|_| {
            let color = Color::from_hsl(rng.next_f32(), 0.7, 0.5);
            BackgroundParticle {
                position: Vec3::new(
                    rng.next_centered(FIELD_HALF_EXTENT),
                    rng.next_centered(FIELD_HALF_EXTENT),
                    rng.next_centered(FIELD_HALF_EXTENT),
                ),
                rotation: Vec3::ZERO,
                color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_size() {
        let mut rng = SeededRng::new(1);
        assert_eq!(spawn_field(&mut rng).len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_positions_within_cube() {
        let mut rng = SeededRng::new(99);
        for p in spawn_field(&mut rng) {
            assert!(p.position.x.abs() <= FIELD_HALF_EXTENT);
            assert!(p.position.y.abs() <= FIELD_HALF_EXTENT);
            assert!(p.position.z.abs() <= FIELD_HALF_EXTENT);
        }
    }

    #[test]
    fn test_deterministic_layout_under_seed() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(42);
        let fa = spawn_field(&mut a);
        let fb = spawn_field(&mut b);
        for (x, y) in fa.iter().zip(fb.iter()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.color, y.color);
        }
    }
}
