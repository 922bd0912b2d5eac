//! Drives the simulation without a window.
//!
//! The field is plain CPU state, so it runs anywhere: this seeds one,
//! ticks it through a simulated minute of frames, and prints a summary.

use driftfield::{FieldConfig, ParticleField};

fn main() {
    env_logger::init();

    let mut field = ParticleField::seeded(FieldConfig::default(), 800.0, 600.0, 42);

    // A minute of frames at 60 fps.
    for _ in 0..3600 {
        field.tick();
    }

    let particles = field.particles();
    let mean = particles
        .iter()
        .fold(driftfield::Vec2::ZERO, |acc, p| acc + p.position)
        / particles.len() as f32;
    let mean_size = particles.iter().map(|p| p.size).sum::<f32>() / particles.len() as f32;

    println!(
        "{} particles on {}x{} after 3600 ticks",
        field.len(),
        field.width(),
        field.height()
    );
    println!("mean position ({:.1}, {:.1})", mean.x, mean.y);
    println!("mean radius {:.2} px", mean_size);

    for p in particles.iter().take(5) {
        println!(
            "  pos ({:6.1}, {:6.1})  vel ({:+.3}, {:+.3})  r {:.2}  hue {:5.1}",
            p.position.x, p.position.y, p.velocity.x, p.velocity.y, p.size, p.hue
        );
    }
}
