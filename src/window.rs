//! Window lifecycle and the per-frame body of the event loop.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId, WindowLevel},
};

use crate::backdrop::Control;
use crate::config::FieldConfig;
use crate::error::RunError;
use crate::field::ParticleField;
use crate::gpu::GpuState;
use crate::particle::ParticleInstance;
use crate::time::FrameClock;

const FPS_LOG_INTERVAL: u64 = 300;

/// Application state driven by the winit event loop.
///
/// The window, GPU state, and field are created lazily in `resumed`;
/// surfaces only exist once the application is active.
pub struct App {
    config: FieldConfig,
    title: String,
    seed: Option<u64>,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    field: Option<ParticleField>,
    clock: FrameClock,
    instances: Vec<ParticleInstance>,
    error: Option<RunError>,
}

impl App {
    pub fn new(config: FieldConfig, title: String, seed: Option<u64>) -> Self {
        Self {
            config,
            title,
            seed,
            window: None,
            gpu: None,
            field: None,
            clock: FrameClock::new(),
            instances: Vec::new(),
            error: None,
        }
    }

    /// Take the error that ended the loop, if any.
    pub fn take_error(&mut self) -> Option<RunError> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: RunError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler<Control> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        // Borderless, maximized, and kept under every other window: the
        // field is a backdrop, not an application window.
        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_decorations(false)
            .with_maximized(true)
            .with_window_level(WindowLevel::AlwaysOnBottom);

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, RunError::Window(e)),
        };

        let size = window.inner_size();
        log::info!(
            "starting field: {} particles on {}x{}",
            self.config.particle_count,
            size.width,
            size.height
        );

        let width = size.width.max(1) as f32;
        let height = size.height.max(1) as f32;
        let field = match self.seed {
            Some(seed) => ParticleField::seeded(self.config.clone(), width, height, seed),
            None => ParticleField::new(self.config.clone(), width, height),
        };

        let gpu = match pollster::block_on(GpuState::new(window.clone(), &self.config)) {
            Ok(gpu) => gpu,
            Err(e) => return self.fail(event_loop, RunError::Gpu(e)),
        };

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(gpu);
        self.field = Some(field);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                log::debug!(
                    "resized to {}x{}",
                    physical_size.width,
                    physical_size.height
                );
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                if let Some(field) = &mut self.field {
                    field.resize(physical_size.width as f32, physical_size.height as f32);
                }
            }
            WindowEvent::RedrawRequested => {
                self.clock.tick();

                if let (Some(gpu), Some(field)) = (&mut self.gpu, &mut self.field) {
                    field.tick();
                    field.fill_instances(&mut self.instances);

                    match gpu.render(&self.instances) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu.resize(gpu.size())
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("surface out of memory");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("render error: {:?}", e),
                    }
                }

                if self.clock.frame() % FPS_LOG_INTERVAL == 0 {
                    log::trace!("{:.1} fps, frame {}", self.clock.fps(), self.clock.frame());
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: Control) {
        match event {
            Control::Stop => {
                log::debug!("stop requested");
                event_loop.exit();
            }
        }
    }
}
