use glboot::glow::{Context, HasContext};
use glboot::logging::init_logging;
use glboot::{BootstrapError, Scene, SceneError};

/// Nothing but the window, the context and a cleared framebuffer.
struct ClearWindow;

impl Scene for ClearWindow {
    fn init(gl: &Context) -> Result<Self, SceneError> {
        unsafe { gl.clear_color(0.2, 0.2, 0.5, 1.0) };
        Ok(ClearWindow)
    }

    fn display(&mut self, _gl: &Context) {}
}

fn main() -> Result<(), BootstrapError> {
    init_logging(None);
    ClearWindow::sdl2_window("Hello World").start()
}
