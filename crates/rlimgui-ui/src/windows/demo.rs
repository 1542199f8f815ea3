use crate::widgets::WindowHost;
use crate::window::GuiWindow;

/// Shows the GUI library's built-in demo window.
#[derive(Debug)]
pub struct DemoWindow {
    open: bool,
}

impl DemoWindow {
    pub fn new() -> Self {
        Self { open: true }
    }
}

impl Default for DemoWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: WindowHost + ?Sized> GuiWindow<R> for DemoWindow {
    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn draw(&mut self, renderer: &mut R) {
        renderer.widgets().show_demo_window(&mut self.open);
    }
}
