//! The slice of the GUI library's widget API the built-in windows draw with.

use glam::Vec2;
use rlimgui_core::TextureId;
use rlimgui_render::TextureResult;

/// Window flags passed through to the GUI library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowFlags(pub u32);

impl WindowFlags {
    pub const NONE: Self = Self(0);
    /// Resize the window to fit its content every frame.
    pub const ALWAYS_AUTO_RESIZE: Self = Self(1 << 6);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for WindowFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Immediate-mode widget calls.
///
/// Mirrors the GUI library's API: `begin*` calls return whether the content
/// is visible, and the `open` flags are cleared when the user closes the
/// window through its title bar.
pub trait Widgets {
    /// Begins a window. [`Widgets::end`] must be called whatever this returns.
    fn begin(&mut self, label: &str, open: &mut bool, flags: WindowFlags) -> bool;

    fn end(&mut self);

    fn open_popup(&mut self, label: &str);

    /// Begins a modal popup. [`Widgets::end_popup`] is only called when this returns true.
    fn begin_popup_modal(&mut self, label: &str, open: &mut bool, flags: WindowFlags) -> bool;

    fn end_popup(&mut self);

    /// Begins a table. [`Widgets::end_table`] is only called when this returns true.
    fn begin_table(&mut self, id: &str, columns: usize) -> bool;

    fn table_next_row(&mut self);

    fn table_next_column(&mut self);

    fn end_table(&mut self);

    fn text(&mut self, text: &str);

    /// Returns true when clicked this frame.
    fn button(&mut self, label: &str, size: Vec2) -> bool;

    fn same_line(&mut self);

    fn separator(&mut self);

    fn image(&mut self, texture: TextureId, size: Vec2);

    /// Width of the window currently being built.
    fn window_width(&self) -> f32;

    /// The GUI library's own demo window.
    fn show_demo_window(&mut self, open: &mut bool);
}

/// What a window's draw callback can reach on the renderer.
pub trait WindowHost {
    fn widgets(&mut self) -> &mut dyn Widgets;

    /// Decodes an image, uploads it and binds it for use in [`Widgets::image`].
    fn load_texture(&mut self, bytes: &[u8], format_hint: &str) -> TextureResult<TextureId>;
}
