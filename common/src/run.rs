use color_eyre::Result;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowAttributes;

use crate::application::Application;
use crate::context::OpenGLContext;

pub fn run<A: Application>(config: A::Config, window_attributes: WindowAttributes) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut opengl_context = OpenGLContext::<A>::new(config, window_attributes);
    event_loop.run_app(&mut opengl_context)?;

    match opengl_context.take_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
