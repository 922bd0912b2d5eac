use std::process;

use driftfield::Backdrop;

fn main() {
    env_logger::init();

    if let Err(e) = Backdrop::new().run() {
        eprintln!("driftfield: {}", e);
        process::exit(1);
    }
}
