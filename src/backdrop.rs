//! The backdrop runner.
//!
//! [`Backdrop`] owns a [`FieldConfig`] and drives the whole effect: it
//! opens a borderless always-on-bottom window, ticks the field once per
//! frame, and renders until the window closes or a [`StopHandle`] asks
//! it to stop.

use winit::event_loop::{ControlFlow, EventLoop, EventLoopProxy};

use crate::config::FieldConfig;
use crate::error::RunError;
use crate::window::App;

/// Control messages injected into the running event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Shut the loop down cleanly.
    Stop,
}

/// Stops a running backdrop from another thread.
///
/// Cloneable and cheap. Dropping a handle does not stop anything; the
/// backdrop keeps running until [`stop`](StopHandle::stop) is called or
/// its window closes.
#[derive(Debug, Clone)]
pub struct StopHandle {
    proxy: EventLoopProxy<Control>,
}

impl StopHandle {
    /// Ask the backdrop to shut down.
    ///
    /// Safe to call more than once; a no-op once the loop has exited.
    pub fn stop(&self) {
        let _ = self.proxy.send_event(Control::Stop);
    }
}

/// Builder and runner for a drifting particle backdrop.
///
/// ```no_run
/// use driftfield::Backdrop;
///
/// Backdrop::new().run().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Backdrop {
    config: FieldConfig,
    title: String,
    seed: Option<u64>,
}

impl Backdrop {
    /// Create a backdrop with the default field configuration.
    pub fn new() -> Self {
        Self {
            config: FieldConfig::default(),
            title: "driftfield".to_string(),
            seed: None,
        }
    }

    /// Replace the whole field configuration.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Shorthand for changing only the particle count.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.config = self.config.with_particle_count(count);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Seed the spawner, making every run reproduce the same field.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the backdrop. Blocks until the window closes.
    pub fn run(self) -> Result<(), RunError> {
        self.run_inner(None)
    }

    /// Run the backdrop, handing a [`StopHandle`] to `hook` before the
    /// loop starts. Blocks until the window closes or the handle fires.
    pub fn run_with_handle<F>(self, hook: F) -> Result<(), RunError>
    where
        F: FnOnce(StopHandle) + 'static,
    {
        self.run_inner(Some(Box::new(hook)))
    }

    fn run_inner(self, hook: Option<Box<dyn FnOnce(StopHandle)>>) -> Result<(), RunError> {
        let event_loop = EventLoop::<Control>::with_user_event().build()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        if let Some(hook) = hook {
            hook(StopHandle {
                proxy: event_loop.create_proxy(),
            });
        }

        let mut app = App::new(self.config, self.title, self.seed);
        event_loop.run_app(&mut app)?;

        match app.take_error() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let backdrop = Backdrop::new();
        assert_eq!(backdrop.title, "driftfield");
        assert_eq!(backdrop.seed, None);
        assert_eq!(backdrop.config.particle_count, 120);
    }

    #[test]
    fn test_builder_overrides() {
        let backdrop = Backdrop::new()
            .with_particle_count(40)
            .with_title("night sky")
            .with_seed(7);
        assert_eq!(backdrop.config.particle_count, 40);
        assert_eq!(backdrop.title, "night sky");
        assert_eq!(backdrop.seed, Some(7));
    }

    #[test]
    fn test_with_config_replaces_everything() {
        let config = FieldConfig::default()
            .with_particle_count(3)
            .with_glow_radius(0.0);
        let backdrop = Backdrop::new().with_config(config);
        assert_eq!(backdrop.config.particle_count, 3);
        assert_eq!(backdrop.config.glow_radius, 0.0);
    }
}
