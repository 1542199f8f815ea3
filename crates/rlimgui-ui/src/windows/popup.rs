use glam::Vec2;

use crate::widgets::{WindowFlags, WindowHost};
use crate::window::{GuiWindow, WindowId};

/// Modal popup with a message and an OK button.
#[derive(Debug)]
pub struct PopupWindow {
    id: WindowId,
    title: String,
    message: String,
    open: bool,
}

impl PopupWindow {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: WindowId::new(),
            title: title.into(),
            message: message.into(),
            open: true,
        }
    }

    pub fn id(&self) -> &WindowId {
        &self.id
    }
}

impl<R: WindowHost + ?Sized> GuiWindow<R> for PopupWindow {
    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn draw(&mut self, renderer: &mut R) {
        let ui = renderer.widgets();
        let label = self.id.label(&self.title);
        ui.open_popup(&label);
        if ui.begin_popup_modal(&label, &mut self.open, WindowFlags::ALWAYS_AUTO_RESIZE) {
            ui.text(&self.message);
            let width = ui.window_width();
            if ui.button("OK", Vec2::new(width - 18.0, 30.0)) {
                self.open = false;
            }
            ui.end_popup();
        }
    }
}
