use std::path::Path;

use color_eyre::{Report, Result};
use glium::backend::glutin::SimpleWindowBuilder;
use glium::glutin::surface::WindowSurface;
use glium::{Display, Program};
use log::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::application::Application;
use crate::shader::{ShaderProgramSource, parse_shader};

pub struct OpenGLContext<A: Application> {
    pub window: Option<Window>,
    pub display: Option<Display<WindowSurface>>,
    pub application: Option<A>,
    config: A::Config,
    window_attributes: WindowAttributes,
    error: Option<Report>,
}

impl<A: Application> OpenGLContext<A> {
    pub fn new(config: A::Config, window_attributes: WindowAttributes) -> Self {
        Self {
            window: None,
            display: None,
            application: None,
            config,
            window_attributes,
            error: None,
        }
    }

    /// The error that stopped the application from starting, if any.
    pub fn take_error(&mut self) -> Option<Report> {
        self.error.take()
    }
}

impl<A: Application> ApplicationHandler for OpenGLContext<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (window, display) = SimpleWindowBuilder::new()
            .set_window_builder(self.window_attributes.clone())
            .build(event_loop);

        log_context_info(&display);

        match A::new(&self.config, &window, &display, event_loop) {
            Ok(application) => self.application = Some(application),
            Err(err) => {
                error!("Failed to start application: {err:#}");
                self.error = Some(err);
                event_loop.exit();
            }
        }

        self.window = Some(window);
        self.display = Some(display);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(window), Some(display), Some(application)) = (
            self.window.as_ref(),
            self.display.as_ref(),
            self.application.as_mut(),
        ) else {
            return;
        };

        if window_id != window.id() {
            return;
        }

        application.window_event(event, event_loop, window, display);
    }

    fn device_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let (Some(window), Some(display), Some(application)) = (
            self.window.as_ref(),
            self.display.as_ref(),
            self.application.as_mut(),
        ) else {
            return;
        };

        application.device_event(event, event_loop, window, display);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Render continuously rather than only on damage
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

fn log_context_info(display: &Display<WindowSurface>) {
    info!("OpenGL {}", display.get_opengl_version_string());
    debug!(
        "Renderer: {} ({})",
        display.get_opengl_renderer_string(),
        display.get_opengl_vendor_string()
    );
}

/// Compiles and links both stages. A failure is logged and yields `None` so
/// the caller can keep running without the program.
pub fn new_program_from_source(
    source: &ShaderProgramSource,
    display: &Display<WindowSurface>,
) -> Option<Program> {
    match Program::from_source(display, &source.vertex, &source.fragment, None) {
        Ok(program) => {
            debug!("Linked shader program");
            Some(program)
        }
        Err(err) => {
            error!("Failed to build shader program: {err}");
            None
        }
    }
}

pub fn new_program<P: AsRef<Path>>(
    shader_path: P,
    display: &Display<WindowSurface>,
) -> Result<Option<Program>> {
    let source = parse_shader(shader_path)?;

    Ok(new_program_from_source(&source, display))
}
