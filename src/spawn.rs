//! Randomized draws used when spawning and wrapping particles.
//!
//! Every value a reset assigns comes from here: position inside the surface,
//! velocity components, radius, and hue. The draws match the original effect:
//! velocity components uniform in `[-max, max)`, radius uniform in a small
//! range, hue uniform around the full circle.

use crate::Vec2;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Source of the random draws behind particle resets.
///
/// Wraps a small, fast RNG. Use [`Spawner::seeded`] for deterministic fields
/// in tests; [`Spawner::new`] mixes the clock so separate fields differ.
#[derive(Debug)]
pub struct Spawner {
    rng: SmallRng,
}

impl Spawner {
    /// Create a spawner with a clock-mixed seed.
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::seeded(seed)
    }

    /// Create a spawner with a fixed seed. Identical seeds produce identical
    /// draw sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform position in `[0, width) x [0, height)`.
    ///
    /// Both dimensions must be positive.
    pub fn position_in(&mut self, width: f32, height: f32) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(0.0..width),
            self.rng.gen_range(0.0..height),
        )
    }

    /// Velocity with both components uniform in `[-max_speed, max_speed)`.
    ///
    /// A non-positive `max_speed` yields a zero velocity.
    pub fn velocity(&mut self, max_speed: f32) -> Vec2 {
        if max_speed <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            self.rng.gen_range(-max_speed..max_speed),
            self.rng.gen_range(-max_speed..max_speed),
        )
    }

    /// Uniform radius in `range`.
    pub fn size(&mut self, range: &Range<f32>) -> f32 {
        self.rng.gen_range(range.clone())
    }

    /// Uniform hue in `[0, 360)` degrees.
    pub fn hue(&mut self) -> f32 {
        self.rng.gen_range(0.0..360.0)
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert HSL to RGB.
///
/// * `hue` - degrees, wraps outside `[0, 360)`
/// * `saturation` - 0.0 (gray) to 1.0 (vivid)
/// * `lightness` - 0.0 (black) through 0.5 (pure hue) to 1.0 (white)
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Vec3 {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_within_bounds() {
        let mut spawner = Spawner::seeded(1);
        for _ in 0..1000 {
            let pos = spawner.position_in(800.0, 600.0);
            assert!(pos.x >= 0.0 && pos.x < 800.0);
            assert!(pos.y >= 0.0 && pos.y < 600.0);
        }
    }

    #[test]
    fn test_velocity_within_range() {
        let mut spawner = Spawner::seeded(2);
        for _ in 0..1000 {
            let vel = spawner.velocity(0.25);
            assert!(vel.x >= -0.25 && vel.x < 0.25);
            assert!(vel.y >= -0.25 && vel.y < 0.25);
        }
    }

    #[test]
    fn test_velocity_zero_max_speed() {
        let mut spawner = Spawner::seeded(3);
        assert_eq!(spawner.velocity(0.0), Vec2::ZERO);
        assert_eq!(spawner.velocity(-1.0), Vec2::ZERO);
    }

    #[test]
    fn test_size_within_range() {
        let mut spawner = Spawner::seeded(4);
        for _ in 0..1000 {
            let size = spawner.size(&(1.0..3.0));
            assert!(size >= 1.0 && size < 3.0);
        }
    }

    #[test]
    fn test_hue_within_circle() {
        let mut spawner = Spawner::seeded(5);
        for _ in 0..1000 {
            let hue = spawner.hue();
            assert!(hue >= 0.0 && hue < 360.0);
        }
    }

    #[test]
    fn test_seeded_spawners_match() {
        let mut a = Spawner::seeded(7);
        let mut b = Spawner::seeded(7);
        for _ in 0..100 {
            assert_eq!(a.position_in(100.0, 100.0), b.position_in(100.0, 100.0));
        }
    }

    #[test]
    fn test_hsl_to_rgb_pastel_red() {
        // hsl(0, 100%, 75%) - the effect's palette at hue zero
        let rgb = hsl_to_rgb(0.0, 1.0, 0.75);
        assert!((rgb.x - 1.0).abs() < 0.001);
        assert!((rgb.y - 0.5).abs() < 0.001);
        assert!((rgb.z - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_hsl_to_rgb_pastel_yellow() {
        let rgb = hsl_to_rgb(60.0, 1.0, 0.75);
        assert!((rgb.x - 1.0).abs() < 0.001);
        assert!((rgb.y - 1.0).abs() < 0.001);
        assert!((rgb.z - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_hsl_to_rgb_pastel_green_and_blue() {
        let green = hsl_to_rgb(120.0, 1.0, 0.75);
        assert!((green.x - 0.5).abs() < 0.001);
        assert!((green.y - 1.0).abs() < 0.001);
        assert!((green.z - 0.5).abs() < 0.001);

        let blue = hsl_to_rgb(240.0, 1.0, 0.75);
        assert!((blue.x - 0.5).abs() < 0.001);
        assert!((blue.y - 0.5).abs() < 0.001);
        assert!((blue.z - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_hsl_to_rgb_wraps_hue() {
        let a = hsl_to_rgb(30.0, 1.0, 0.75);
        let b = hsl_to_rgb(390.0, 1.0, 0.75);
        assert!((a - b).abs().max_element() < 0.001);
    }

    #[test]
    fn test_hsl_to_rgb_extremes() {
        let black = hsl_to_rgb(180.0, 1.0, 0.0);
        assert!(black.max_element() < 0.001);

        let white = hsl_to_rgb(180.0, 1.0, 1.0);
        assert!(white.min_element() > 0.999);
    }
}
