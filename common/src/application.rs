use color_eyre::Result;
use glium::Display;
use glium::glutin::surface::WindowSurface;
use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

pub trait Application: Sized {
    type Config;

    fn new(
        config: &Self::Config,
        window: &Window,
        display: &Display<WindowSurface>,
        event_loop: &ActiveEventLoop,
    ) -> Result<Self>;

    fn window_event(
        &mut self,
        event: WindowEvent,
        event_loop: &ActiveEventLoop,
        window: &Window,
        display: &Display<WindowSurface>,
    );

    #[allow(unused_variables)]
    fn device_event(
        &mut self,
        event: DeviceEvent,
        event_loop: &ActiveEventLoop,
        window: &Window,
        display: &Display<WindowSurface>,
    ) {
    }
}

/// Window close button or Escape.
pub fn is_exit_request(event: &WindowEvent) -> bool {
    match event {
        WindowEvent::CloseRequested => true,
        WindowEvent::KeyboardInput { event, .. } => {
            event.state == ElementState::Pressed
                && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::PhysicalSize;

    use super::*;

    #[test]
    fn close_requested_exits() {
        assert!(is_exit_request(&WindowEvent::CloseRequested));
    }

    #[test]
    fn other_events_do_not_exit() {
        assert!(!is_exit_request(&WindowEvent::RedrawRequested));
        assert!(!is_exit_request(&WindowEvent::Resized(PhysicalSize::new(640, 480))));
        assert!(!is_exit_request(&WindowEvent::Focused(false)));
    }
}
