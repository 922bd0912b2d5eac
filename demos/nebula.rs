//! A denser, bluer variant that stops itself after thirty seconds.
//!
//! Demonstrates a fully customized configuration and stopping the
//! backdrop from another thread through a `StopHandle`.

use std::thread;
use std::time::Duration;

use driftfield::{Backdrop, FieldConfig, Vec3};

fn main() {
    env_logger::init();

    let config = FieldConfig::default()
        .with_particle_count(400)
        .with_max_speed(0.6)
        .with_size_range(0.5..2.0)
        .with_color(0.6, 0.8)
        // A colder fade with lower alpha leaves much longer trails.
        .with_fade(Vec3::new(0.0, 0.01, 0.05), 0.08)
        .with_glow_radius(18.0);

    let result = Backdrop::new()
        .with_config(config)
        .with_title("nebula")
        .run_with_handle(|handle| {
            thread::spawn(move || {
                thread::sleep(Duration::from_secs(30));
                handle.stop();
            });
        });

    if let Err(e) = result {
        eprintln!("nebula failed: {}", e);
    }
}
