use std::fmt;

use glam::Vec2;

use crate::widgets::{WindowFlags, WindowHost};
use crate::window::{GuiWindow, WindowId};

type ChoiceCallback = Box<dyn FnMut(bool)>;

/// Modal popup asking a yes/no question.
///
/// The callback receives `true` for Yes and `false` for No; the window
/// closes itself once a choice is made.
pub struct ChoiceWindow {
    id: WindowId,
    title: String,
    message: String,
    open: bool,
    on_closed: Option<ChoiceCallback>,
}

impl ChoiceWindow {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: WindowId::new(),
            title: title.into(),
            message: message.into(),
            open: true,
            on_closed: None,
        }
    }

    /// Sets the callback invoked with the user's choice.
    #[must_use]
    pub fn on_closed(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_closed = Some(Box::new(callback));
        self
    }

    pub fn id(&self) -> &WindowId {
        &self.id
    }

    fn chosen(&mut self, choice: bool) {
        self.open = false;
        if let Some(callback) = self.on_closed.as_mut() {
            callback(choice);
        }
    }
}

impl fmt::Debug for ChoiceWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceWindow")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

impl<R: WindowHost + ?Sized> GuiWindow<R> for ChoiceWindow {
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
            let split = ui.window_width() / 2.0;
            let size = Vec2::new(split - 12.0, 30.0);
            let yes = ui.button("Yes", size);
            ui.same_line();
            let no = ui.button("No", size);
            ui.end_popup();

            if yes {
                self.chosen(true);
            } else if no {
                self.chosen(false);
            }
        }
    }
}
