//! GUI library contract.
//!
//! [`GuiIo`] is the per-frame IO object the input pump writes into;
//! [`GuiContext`] adds context lifecycle, the font atlas and frame rendering.
//! An adapter over the actual immediate-mode GUI library implements both.

use glam::Vec2;

use crate::cursor::GuiMouseCursor;
use crate::draw::{DrawData, TextureId};
use crate::keys::GuiKey;
use crate::mouse::GuiMouseButton;

/// IO flags the input pump reads back from the GUI library each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IoState {
    /// The GUI library wants the OS cursor moved to `mouse_pos`.
    pub want_set_mouse_pos: bool,
    /// Mouse position as last known by the GUI library.
    pub mouse_pos: Vec2,
    /// The GUI library draws its own software cursor.
    pub mouse_draw_cursor: bool,
    /// The application asked the bridge not to touch the OS cursor.
    pub no_mouse_cursor_change: bool,
}

/// Initial configuration applied to a freshly created GUI context.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextSetup {
    /// Advertise that the backend can change the OS cursor shape.
    pub has_mouse_cursors: bool,
    /// Persistent settings file; `None` disables it.
    pub ini_filename: Option<String>,
    pub display_size: Vec2,
    pub framebuffer_scale: Vec2,
    pub mouse_pos: Vec2,
    /// Add the GUI library's built-in font to the atlas.
    pub load_default_font: bool,
    pub platform_name: String,
    pub renderer_name: String,
}

/// RGBA32 font atlas bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontAtlasImage {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 pixels, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

/// Clipboard callbacks installed into the GUI library.
///
/// The GUI library cannot cope with an absent clipboard, so `get` always
/// yields a string.
pub trait ClipboardBackend {
    fn get(&mut self) -> String;

    fn set(&mut self, text: &str);
}

/// Per-frame IO state of the GUI library.
pub trait GuiIo {
    fn io_state(&self) -> IoState;

    fn set_display_size(&mut self, size: Vec2);

    fn set_framebuffer_scale(&mut self, scale: Vec2);

    fn set_delta_time(&mut self, delta: f32);

    fn add_mouse_pos_event(&mut self, pos: Vec2);

    fn add_mouse_button_event(&mut self, button: GuiMouseButton, down: bool);

    fn add_mouse_wheel_event(&mut self, wheel: Vec2);

    fn add_key_event(&mut self, key: GuiKey, down: bool);

    fn add_focus_event(&mut self, focused: bool);

    fn add_input_character(&mut self, c: char);

    /// Cursor shape the GUI library wants for this frame.
    fn mouse_cursor(&self) -> GuiMouseCursor;
}

/// One GUI library context.
pub trait GuiContext: GuiIo {
    /// Makes this context the GUI library's active context.
    fn make_current(&mut self);

    /// Applies the initial context configuration.
    fn configure(&mut self, setup: &ContextSetup);

    fn set_clipboard_backend(&mut self, backend: Box<dyn ClipboardBackend>);

    /// Builds (if needed) and returns the font atlas as RGBA32.
    fn font_atlas_rgba32(&mut self) -> FontAtlasImage;

    /// Publishes the texture the font atlas was uploaded to.
    fn set_font_texture_id(&mut self, id: TextureId);

    /// Finalizes the current frame and returns its draw data.
    fn render(&mut self) -> &DrawData;
}
