//! # driftfield
//!
//! A drifting glow-particle backdrop for the desktop.
//!
//! driftfield scatters soft glowing discs across a borderless window kept
//! underneath every other window, nudges them a fraction of a pixel per
//! frame, and dims each frame through a translucent veil instead of
//! clearing it, so every particle drags a slowly fading trail.
//!
//! ## Quick Start
//!
//! ```no_run
//! use driftfield::Backdrop;
//!
//! fn main() {
//!     env_logger::init();
//!     Backdrop::new().run().unwrap();
//! }
//! ```
//!
//! ## Configuration
//!
//! Every constant of the effect can be overridden through [`FieldConfig`]:
//!
//! ```no_run
//! use driftfield::{Backdrop, FieldConfig, Vec3};
//!
//! let config = FieldConfig::default()
//!     .with_particle_count(300)
//!     .with_fade(Vec3::new(0.0, 0.02, 0.10), 0.15)
//!     .with_glow_radius(16.0);
//!
//! Backdrop::new().with_config(config).run().unwrap();
//! ```
//!
//! ## Stopping from outside
//!
//! [`Backdrop::run`] blocks for the lifetime of the window. To stop the
//! backdrop from another thread, take a [`StopHandle`]:
//!
//! ```no_run
//! use std::time::Duration;
//! use driftfield::Backdrop;
//!
//! Backdrop::new()
//!     .run_with_handle(|handle| {
//!         std::thread::spawn(move || {
//!             std::thread::sleep(Duration::from_secs(30));
//!             handle.stop();
//!         });
//!     })
//!     .unwrap();
//! ```
//!
//! ## Headless use
//!
//! The simulation carries no GPU dependency of its own: a
//! [`ParticleField`] can be ticked directly, which is also how the tests
//! drive it.
//!
//! ```
//! use driftfield::{FieldConfig, ParticleField};
//!
//! let mut field = ParticleField::seeded(FieldConfig::default(), 800.0, 600.0, 42);
//! for _ in 0..600 {
//!     field.tick();
//! }
//! assert_eq!(field.len(), 120);
//! ```

mod backdrop;
pub mod config;
mod error;
pub mod field;
mod gpu;
mod particle;
pub mod shader;
pub mod spawn;
pub mod time;
mod window;

pub use backdrop::{Backdrop, Control, StopHandle};
pub use bytemuck;
pub use config::FieldConfig;
pub use error::{GpuError, RunError};
pub use field::ParticleField;
pub use glam::{Vec2, Vec3};
pub use gpu::GpuState;
pub use particle::{Particle, ParticleInstance};
pub use spawn::Spawner;
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```no_run
/// use driftfield::prelude::*;
///
/// Backdrop::new().with_particle_count(200).run().unwrap();
/// ```
pub mod prelude {
    pub use crate::backdrop::{Backdrop, StopHandle};
    pub use crate::config::FieldConfig;
    pub use crate::field::ParticleField;
    pub use crate::particle::{Particle, ParticleInstance};
    pub use crate::spawn::Spawner;
    pub use crate::time::FrameClock;
    pub use crate::{Vec2, Vec3};
}
