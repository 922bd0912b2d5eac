//! Field configuration.
//!
//! [`FieldConfig`] collects everything that was an inline constant in the
//! original effect. The defaults reproduce it exactly: 120 particles drifting
//! at up to a quarter pixel per tick, 1-3 px discs in full-saturation pastel
//! hues, fading into a near-black purple at alpha 0.2 with a 10 px glow.
//!
//! # Usage
//!
//! ```ignore
//! let config = FieldConfig::default()
//!     .with_particle_count(300)
//!     .with_fade(Vec3::new(0.0, 0.02, 0.1), 0.15)
//!     .with_glow_radius(16.0);
//! ```

use glam::Vec3;
use std::ops::Range;

/// Configuration for a particle field and its rendered look.
///
/// All setters clamp out-of-range values instead of erroring; the effect has
/// no failure modes and its configuration keeps that property.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Number of particles. Fixed for the lifetime of a field.
    pub particle_count: usize,
    /// Upper bound for the magnitude of each velocity component, px/tick.
    pub max_speed: f32,
    /// Disc radius range in pixels.
    pub size_range: Range<f32>,
    /// HSL saturation applied to every particle, `[0, 1]`.
    pub saturation: f32,
    /// HSL lightness applied to every particle, `[0, 1]`.
    pub lightness: f32,
    /// RGB of the overlay painted each tick over the previous frame.
    pub fade_color: Vec3,
    /// Opacity of that overlay. Higher fades trails faster.
    pub fade_alpha: f32,
    /// Width of the soft halo around each disc, in pixels.
    pub glow_radius: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 120,
            max_speed: 0.25,
            size_range: 1.0..3.0,
            saturation: 1.0,
            lightness: 0.75,
            fade_color: Vec3::new(30.0 / 255.0, 0.0, 50.0 / 255.0),
            fade_alpha: 0.2,
            glow_radius: 10.0,
        }
    }
}

impl FieldConfig {
    /// Create a config with the original effect's constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the particle count. Clamped to at least 1.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count.max(1);
        self
    }

    /// Set the per-component speed bound in pixels per tick.
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed.max(0.0);
        self
    }

    /// Set the disc radius range in pixels. Degenerate ranges are widened.
    pub fn with_size_range(mut self, range: Range<f32>) -> Self {
        let lo = range.start.max(0.05);
        let hi = range.end.max(lo + 0.05);
        self.size_range = lo..hi;
        self
    }

    /// Set the HSL saturation and lightness shared by all particles.
    pub fn with_color(mut self, saturation: f32, lightness: f32) -> Self {
        self.saturation = saturation.clamp(0.0, 1.0);
        self.lightness = lightness.clamp(0.0, 1.0);
        self
    }

    /// Set the fade overlay color and opacity.
    ///
    /// The overlay is painted over the previous frame every tick instead of
    /// clearing it, which is what turns motion into trails.
    pub fn with_fade(mut self, color: Vec3, alpha: f32) -> Self {
        self.fade_color = color.clamp(Vec3::ZERO, Vec3::ONE);
        self.fade_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set the glow halo width in pixels.
    pub fn with_glow_radius(mut self, radius: f32) -> Self {
        self.glow_radius = radius.max(0.0);
        self
    }
}
