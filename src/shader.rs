//! WGSL sources for the three render passes.
//!
//! The field draws in two passes on a persistent accumulation texture
//! (fade veil, then instanced particles) and a third pass blits the
//! result to the surface. Keeping the sources here lets tests validate
//! them with naga without touching the GPU.

/// Fullscreen fade pass drawn over the accumulation texture.
pub const FADE_SOURCE: &str = include_str!("fade.wgsl");

/// Instanced particle pass with core disc and glow halo.
pub const PARTICLE_SOURCE: &str = include_str!("particle.wgsl");

/// Fullscreen blit from the accumulation texture to the surface.
pub const BLIT_SOURCE: &str = include_str!("blit.wgsl");
