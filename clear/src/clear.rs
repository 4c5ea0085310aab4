use clap::Parser;
use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::{Display, Surface};
use log::{error, info};
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use common::application::{self, Application};
use common::colors::{self, Color, ColorExt};
use common::config::WindowConfig;

/// Clears the window to a solid colour every frame.
#[derive(Parser, Clone, Debug)]
#[command(version, about)]
pub struct ClearConfig {
    #[command(flatten)]
    pub window: WindowConfig,

    /// Clear colour, by name or hex code
    #[arg(long, default_value = "red", value_parser = colors::parse_color)]
    pub color: Color,
}

pub struct Clear {
    color: (f32, f32, f32, f32),
}

impl Application for Clear {
    type Config = ClearConfig;

    fn new(
        config: &ClearConfig,
        _window: &Window,
        _display: &Display<WindowSurface>,
        _event_loop: &ActiveEventLoop,
    ) -> Result<Self> {
        let color = config.color.to_rgba_components_tuple();
        info!("Clearing to {color:?}");

        Ok(Self { color })
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

impl Clear {
    fn render(&self, display: &Display<WindowSurface>) -> Result<()> {
        let mut target = display.draw();
        target.clear_color(self.color.0, self.color.1, self.color.2, self.color.3);
        target.finish()?;

        Ok(())
    }
}
