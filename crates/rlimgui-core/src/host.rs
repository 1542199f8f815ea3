//! Host framework contract.
//!
//! The bridge never talks to the host framework directly; it goes through
//! these traits so the same translation code drives raylib in applications
//! and recording doubles in tests. Method names follow the host's own
//! vocabulary so the mapping to its C API stays one-to-one.

use glam::{IVec2, Vec2};

use crate::cursor::HostMouseCursor;
use crate::keys::HostKey;
use crate::mouse::HostMouseButton;

/// A texture living in the host framework.
///
/// Mirrors the host's texture record; only `id` is consumed by the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostTexture {
    /// Backend texture id.
    pub id: u32,
    pub width: i32,
    pub height: i32,
    pub mipmaps: i32,
    /// Host pixel format code.
    pub format: i32,
}

/// Scissor rectangle in framebuffer pixels with a bottom-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScissorRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Window, input and texture services of the host framework.
pub trait Platform {
    /// Whether the window is in fullscreen mode.
    fn is_window_fullscreen(&self) -> bool;

    /// Index of the monitor the window is on.
    fn current_monitor(&self) -> i32;

    /// Width and height of a monitor.
    fn monitor_size(&self, monitor: i32) -> IVec2;

    /// Client area width and height of the window.
    fn screen_size(&self) -> IVec2;

    /// Per-axis content scale of the window.
    fn window_scale_dpi(&self) -> Vec2;

    /// Duration of the last frame in seconds.
    fn frame_time(&self) -> f32;

    fn mouse_position(&self) -> IVec2;

    /// Warps the OS cursor.
    fn set_mouse_position(&mut self, position: IVec2);

    /// Whether the button went down this frame.
    fn is_mouse_button_pressed(&self, button: HostMouseButton) -> bool;

    /// Whether the button went up this frame.
    fn is_mouse_button_released(&self, button: HostMouseButton) -> bool;

    /// Wheel movement this frame, per axis.
    fn mouse_wheel_move(&self) -> Vec2;

    fn show_cursor(&mut self);

    fn hide_cursor(&mut self);

    fn set_mouse_cursor(&mut self, cursor: HostMouseCursor);

    /// Whether the key went down this frame.
    fn is_key_pressed(&self, key: HostKey) -> bool;

    /// Whether the key went up this frame.
    fn is_key_released(&self, key: HostKey) -> bool;

    fn is_window_focused(&self) -> bool;

    /// Pops the next raw key code pressed this frame.
    ///
    /// Returns `None` once the queue is drained (the host's zero sentinel).
    fn next_key_pressed(&mut self) -> Option<i32>;

    /// Pops the next Unicode code point typed this frame.
    ///
    /// Returns `None` once the queue is drained (the host's zero sentinel).
    fn next_char_pressed(&mut self) -> Option<u32>;

    /// Uploads tightly packed RGBA8 pixels as a new texture.
    fn load_texture_rgba(&mut self, width: u32, height: u32, pixels: &[u8]) -> HostTexture;

    /// Releases a texture previously returned by [`Platform::load_texture_rgba`].
    fn unload_texture(&mut self, texture: HostTexture);
}

/// Immediate-mode rasterizer of the host framework.
pub trait Rasterizer {
    /// Flushes the active render batch.
    fn draw_render_batch_active(&mut self);

    fn enable_backface_culling(&mut self);

    fn disable_backface_culling(&mut self);

    fn enable_scissor_test(&mut self);

    fn disable_scissor_test(&mut self);

    fn scissor(&mut self, rect: ScissorRect);

    /// Starts a triangle primitive.
    fn begin_triangles(&mut self);

    /// Ends the current primitive.
    fn end(&mut self);

    /// Binds a backend texture id; 0 disables texturing.
    fn set_texture(&mut self, id: u32);

    /// Returns true when `vertex_count` more vertices do not fit and the batch was flushed.
    fn check_render_batch_limit(&mut self, vertex_count: i32) -> bool;

    fn color4ub(&mut self, r: u8, g: u8, b: u8, a: u8);

    fn tex_coord2f(&mut self, u: f32, v: f32);

    fn vertex2f(&mut self, x: f32, y: f32);
}

/// Clipboard storage of the host framework.
pub trait Clipboard {
    /// Current clipboard text, or `None` when the host reports no clipboard.
    fn clipboard_text(&mut self) -> Option<String>;

    fn set_clipboard_text(&mut self, text: &str);
}
