use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::index::{NoIndices, PrimitiveType};
use glium::uniforms::EmptyUniforms;
use glium::{Display, DrawParameters, Program, Surface, VertexBuffer};
use log::{error, info, warn};
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use common::application::{self, Application};
use common::colors::{self, Color, ColorExt};
use common::config::WindowConfig;
use common::context;
use common::vertex::{Position2, TRIANGLE};

/// Draws a single triangle with a shader loaded from a combined shader file.
#[derive(Parser, Clone, Debug)]
#[command(version, about)]
pub struct TriangleConfig {
    #[command(flatten)]
    pub window: WindowConfig,

    /// File holding both stages, each introduced by a `#shader vertex` or `#shader fragment` line
    #[arg(long, default_value = "assets/shaders/basic.shader")]
    pub shader: PathBuf,

    /// Clear colour behind the triangle, by name or hex code
    #[arg(long, default_value = "black", value_parser = colors::parse_color)]
    pub background: Color,
}

pub struct Triangle {
    // None when the shader failed to build, the frame is then only cleared
    program: Option<Program>,
    vertex_buffer: VertexBuffer<Position2>,
    background: (f32, f32, f32, f32),
}

impl Application for Triangle {
    type Config = TriangleConfig;

    fn new(
        config: &TriangleConfig,
        _window: &Window,
        display: &Display<WindowSurface>,
        _event_loop: &ActiveEventLoop,
    ) -> Result<Self> {
        let vertex_buffer = VertexBuffer::immutable(display, &TRIANGLE)?;

        let program = context::new_program(&config.shader, display)?;
        match program {
            Some(_) => info!("Loaded shader {}", config.shader.display()),
            None => warn!("Continuing without a shader program"),
        }

        Ok(Self {
            program,
            vertex_buffer,
            background: config.background.to_rgba_components_tuple(),
        })
    }

    fn window_event(
        &mut self,
        event: WindowEvent,
        event_loop: &ActiveEventLoop,
        _window: &Window,
        display: &Display<WindowSurface>,
    ) {
        if application::is_exit_request(&event) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(new_size) => display.resize((new_size.width, new_size.height)),
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.render(display) {
                    error!("Failed to render frame: {err}");
                }
            }
            _ => (),
        };
    }
}

impl Triangle {
    fn render(&self, display: &Display<WindowSurface>) -> Result<()> {
        let (red, green, blue, alpha) = self.background;

        let mut target = display.draw();
        target.clear_color(red, green, blue, alpha);

        let drawn = match &self.program {
            Some(program) => target.draw(
                &self.vertex_buffer,
                &NoIndices(PrimitiveType::TrianglesList),
                program,
                &EmptyUniforms,
                &DrawParameters::default(),
            ),
            None => Ok(()),
        };

        // The frame must be finished even if the draw failed
        target.finish()?;
        drawn?;

        Ok(())
    }
}
