//! The simulated entity and its GPU-side layout.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// A single drifting particle.
///
/// Positions and sizes are in surface pixels; velocity is applied once per
/// tick (the effect is frame-paced, not time-scaled). The color is stored as
/// a hue in degrees and combined with the field's fixed saturation and
/// lightness when converted for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in pixels, inside `[0, width] x [0, height]` between ticks.
    pub position: Vec2,
    /// Displacement in pixels per tick.
    pub velocity: Vec2,
    /// Disc radius in pixels.
    pub size: f32,
    /// Hue in degrees, `[0, 360)`.
    pub hue: f32,
}

/// Per-particle vertex data, one entry per instance in the vertex buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Disc center in surface pixels.
    pub position: Vec2,
    /// Disc radius in pixels.
    pub radius: f32,
    /// Resolved RGB color, each channel in `[0, 1]`.
    pub color: Vec3,
}

impl ParticleInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x2,
        },
        wgpu::VertexAttribute {
            offset: 8,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32,
        },
        wgpu::VertexAttribute {
            offset: 12,
            shader_location: 2,
            format: wgpu::VertexFormat::Float32x3,
        },
    ];

    /// Vertex buffer layout for the particle render pipeline.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
