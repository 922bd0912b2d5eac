//! The particle field: a fixed-size set of drifting particles with
//! wrap-by-reset bounds behavior.
//!
//! [`ParticleField`] owns the particle collection, the surface bounds, and
//! the RNG behind resets. One [`tick`](ParticleField::tick) advances every
//! particle by its velocity and re-randomizes any that left the bounds; the
//! original effect never clamps or bounces, it redraws the particle from
//! scratch. Driving `tick` is the caller's business: the windowed runner
//! calls it once per frame, and headless embeddings can call it at whatever
//! cadence they like.

use crate::config::FieldConfig;
use crate::particle::{Particle, ParticleInstance};
use crate::spawn::{hsl_to_rgb, Spawner};

/// A fixed-size collection of particles drifting inside a rectangle.
///
/// The particle count is set at construction and never changes; particles
/// whose advance leaves `[0, width] x [0, height]` are reset to fresh random
/// state inside the bounds. All operations are infallible.
#[derive(Debug)]
pub struct ParticleField {
    config: FieldConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    spawner: Spawner,
}

impl ParticleField {
    /// Create a field with randomly placed particles.
    ///
    /// Dimensions are in pixels and must be positive.
    pub fn new(config: FieldConfig, width: f32, height: f32) -> Self {
        Self::build(config, width, height, Spawner::new())
    }

    /// Create a field whose random draws are fully determined by `seed`.
    pub fn seeded(config: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        Self::build(config, width, height, Spawner::seeded(seed))
    }

    /// Create a field with explicit initial particles.
    ///
    /// `spawn` is called once per index; later wrap resets still use the
    /// field's own RNG. Useful for scripted placements in tests and demos.
    pub fn from_spawner(
        config: FieldConfig,
        width: f32,
        height: f32,
        mut spawn: impl FnMut(usize) -> Particle,
    ) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "field dimensions must be positive"
        );
        let particles = (0..config.particle_count).map(&mut spawn).collect();
        Self {
            config,
            width,
            height,
            particles,
            spawner: Spawner::new(),
        }
    }

    fn build(config: FieldConfig, width: f32, height: f32, mut spawner: Spawner) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "field dimensions must be positive"
        );
        let particles = (0..config.particle_count)
            .map(|_| Self::spawn_particle(&mut spawner, &config, width, height))
            .collect();
        Self {
            config,
            width,
            height,
            particles,
            spawner,
        }
    }

    /// Fresh random particle inside the given bounds. Used at construction
    /// and whenever a particle wraps.
    fn spawn_particle(
        spawner: &mut Spawner,
        config: &FieldConfig,
        width: f32,
        height: f32,
    ) -> Particle {
        Particle {
            position: spawner.position_in(width, height),
            velocity: spawner.velocity(config.max_speed),
            size: spawner.size(&config.size_range),
            hue: spawner.hue(),
        }
    }

    /// Advance every particle by one tick.
    ///
    /// Each particle moves by its velocity; any that ends up outside the
    /// inclusive bounds on either axis is reset to fresh random state. After
    /// this returns, every position lies within `[0, width] x [0, height]`.
    pub fn tick(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.position += particle.velocity;
            let out = particle.position.x < 0.0
                || particle.position.x > width
                || particle.position.y < 0.0
                || particle.position.y > height;
            if out {
                *particle = Self::spawn_particle(&mut self.spawner, &self.config, width, height);
            }
        }
    }

    /// Record new surface bounds.
    ///
    /// Only the stored dimensions change; particles are not rescaled, so
    /// after a shrink some may sit outside the new bounds until the tick
    /// that moves them wraps them. Non-positive dimensions are ignored
    /// (minimized windows report a 0x0 surface).
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.width = width;
            self.height = height;
        } else {
            log::debug!("ignoring resize to {width}x{height}");
        }
    }

    /// Convert the particles into render instances, reusing `out`.
    ///
    /// The output length always equals [`len`](ParticleField::len).
    pub fn fill_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.extend(self.particles.iter().map(|p| ParticleInstance {
            position: p.position,
            radius: p.size,
            color: hsl_to_rgb(p.hue, self.config.saturation, self.config.lightness),
        }));
    }

    /// The particles, in the fixed iteration order `tick` uses.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles. Constant for the lifetime of the field.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field holds no particles. Never true for constructed
    /// fields, provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current surface width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Current surface height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The configuration the field was built with.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
