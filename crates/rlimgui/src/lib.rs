//! rlimgui-rs: render an immediate-mode GUI inside a raylib window.
//!
//! The bridge does two things every frame: it pumps the host's input state
//! into the GUI library's event queue, and it replays the GUI library's draw
//! lists through the host's immediate-mode rasterizer.
//!
//! # Frame loop
//!
//! ```ignore
//! use rlimgui::*;
//!
//! let mut renderer = ImGuiRenderer::new(DearImGui::new(), RaylibHost, RaylibClipboard);
//! renderer.recreate_font_texture()?;
//!
//! while !window_should_close() {
//!     renderer.make_current();
//!     renderer.update();
//!     // ... build the GUI for this frame ...
//!     renderer.draw_windows();
//!     renderer.render_imgui();
//! }
//! renderer.shutdown();
//! ```
//!
//! # Architecture
//!
//! - [`rlimgui_core`]: mapping tables and the host/GUI contracts
//! - [`rlimgui_render`]: texture bridge, font atlas and draw replay
//! - [`rlimgui_ui`]: managed windows
//!
//! The GUI library is reached through [`GuiContext`]; the host through
//! [`Platform`], [`Rasterizer`] and [`Clipboard`]. With the `raylib` feature,
//! `RaylibHost` and `RaylibClipboard` implement the host side; with the
//! `imgui` feature, `DearImGui` implements the GUI side over `dear-imgui-rs`.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod clipboard;
#[cfg(feature = "imgui")]
mod imgui;
mod input;
#[cfg(feature = "raylib")]
mod raylib;
mod renderer;

pub use clipboard::HostClipboard;
#[cfg(feature = "imgui")]
pub use imgui::DearImGui;
#[cfg(feature = "raylib")]
pub use raylib::{RaylibClipboard, RaylibHost};
pub use renderer::ImGuiRenderer;

// Re-export core types
pub use rlimgui_core::{
    cursor::{gui_cursor_for, host_cursor_for, GuiMouseCursor, HostMouseCursor, CURSOR_MAP},
    draw::{DrawCmd, DrawData, DrawList, DrawVert, TextureId},
    error::{BridgeError, Result},
    gui::{ClipboardBackend, ContextSetup, FontAtlasImage, GuiContext, GuiIo, IoState},
    host::{Clipboard, HostTexture, Platform, Rasterizer, ScissorRect},
    keys::{gui_key_for, host_key_for, GuiKey, HostKey, KEY_MAP, MODIFIER_KEYS},
    mouse::{GuiMouseButton, HostMouseButton, MOUSE_BUTTON_MAP},
    options::RendererOptions,
    state::{current as current_context, ContextId},
    IVec2, Vec2, Vec4,
};

// Re-export render types
pub use rlimgui_render::{
    load_as_image, load_as_texture, pack_color, scissor_rect, ReplayStats, TextureBindings,
    TextureError, TextureResult,
};

// Re-export window types
pub use rlimgui_ui::{
    AboutWindow, ChoiceWindow, DemoWindow, GuiWindow, PopupWindow, WindowFlags, WindowHost,
    WindowId, WindowQueue, Widgets, DEFAULT_ICON,
};

/// Initializes `env_logger` from `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
