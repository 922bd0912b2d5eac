//! The stock backdrop: 120 pastel particles over deep purple.
//!
//! Run with: `cargo run --example backdrop`

use driftfield::Backdrop;

fn main() {
    env_logger::init();

    if let Err(e) = Backdrop::new().with_title("driftfield backdrop").run() {
        eprintln!("backdrop failed: {}", e);
    }
}
