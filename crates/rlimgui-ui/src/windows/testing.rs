//! Recording widget host shared by the window tests.

use std::collections::HashSet;

use glam::Vec2;
use rlimgui_core::TextureId;
use rlimgui_render::{TextureError, TextureResult};

use crate::widgets::{WindowFlags, WindowHost, Widgets};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Begin(String),
    End,
    OpenPopup(String),
    BeginPopupModal(String),
    EndPopup,
    BeginTable(String),
    EndTable,
    Text(String),
    Button(String, Vec2),
    Image(TextureId),
    Separator,
    DemoWindow,
    LoadTexture(String),
}

#[derive(Default)]
pub struct TestHost {
    pub ops: Vec<Op>,
    clicks: HashSet<String>,
    pub fail_texture_loads: bool,
    next_texture: u64,
}

impl TestHost {
    /// A host whose texture loads all fail.
    pub fn failing() -> Self {
        Self {
            fail_texture_loads: true,
            ..Self::default()
        }
    }

    /// Makes the next button with this label report a click.
    pub fn click(&mut self, label: &str) {
        self.clicks.insert(label.to_string());
    }

    pub fn count(&self, f: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| f(op)).count()
    }
}

impl Widgets for TestHost {
    fn begin(&mut self, label: &str, _open: &mut bool, _flags: WindowFlags) -> bool {
        self.ops.push(Op::Begin(label.to_string()));
        true
    }

    fn end(&mut self) {
        self.ops.push(Op::End);
    }

    fn open_popup(&mut self, label: &str) {
        self.ops.push(Op::OpenPopup(label.to_string()));
    }

    fn begin_popup_modal(&mut self, label: &str, _open: &mut bool, flags: WindowFlags) -> bool {
        assert!(flags.contains(WindowFlags::ALWAYS_AUTO_RESIZE));
        self.ops.push(Op::BeginPopupModal(label.to_string()));
        true
    }

    fn end_popup(&mut self) {
        self.ops.push(Op::EndPopup);
    }

    fn begin_table(&mut self, id: &str, _columns: usize) -> bool {
        self.ops.push(Op::BeginTable(id.to_string()));
        true
    }

    fn table_next_row(&mut self) {}

    fn table_next_column(&mut self) {}

    fn end_table(&mut self) {
        self.ops.push(Op::EndTable);
    }

    fn text(&mut self, text: &str) {
        self.ops.push(Op::Text(text.to_string()));
    }

    fn button(&mut self, label: &str, size: Vec2) -> bool {
        self.ops.push(Op::Button(label.to_string(), size));
        self.clicks.remove(label)
    }

    fn same_line(&mut self) {}

    fn separator(&mut self) {
        self.ops.push(Op::Separator);
    }

    fn image(&mut self, texture: TextureId, _size: Vec2) {
        self.ops.push(Op::Image(texture));
    }

    fn window_width(&self) -> f32 {
        400.0
    }

    fn show_demo_window(&mut self, _open: &mut bool) {
        self.ops.push(Op::DemoWindow);
    }
}

impl WindowHost for TestHost {
    fn widgets(&mut self) -> &mut dyn Widgets {
        self
    }

    fn load_texture(&mut self, _bytes: &[u8], format_hint: &str) -> TextureResult<TextureId> {
        self.ops.push(Op::LoadTexture(format_hint.to_string()));
        if self.fail_texture_loads {
            return Err(TextureError::UnknownFormat(format_hint.to_string()));
        }
        self.next_texture += 1;
        Ok(TextureId(self.next_texture))
    }
}
