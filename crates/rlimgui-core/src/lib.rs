//! Core abstractions for rlimgui-rs.
//!
//! This crate provides the fundamental types shared by the bridge crates:
//! - Static mapping tables between host key/cursor/mouse codes and GUI library codes
//! - The host framework contract ([`Platform`], [`Rasterizer`], [`Clipboard`])
//! - The GUI library contract ([`GuiIo`], [`GuiContext`], [`ClipboardBackend`])
//! - The draw-data model replayed by the renderer
//! - Renderer options and the process-wide current-context marker

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors on small Copy types don't need must_use
#![allow(clippy::must_use_candidate)]
// Host codes are i32 on the wire and are converted at the boundary
#![allow(clippy::cast_possible_truncation)]

pub mod cursor;
pub mod draw;
pub mod error;
pub mod gui;
pub mod host;
pub mod keys;
pub mod mouse;
pub mod options;
pub mod state;

pub use cursor::{gui_cursor_for, host_cursor_for, GuiMouseCursor, HostMouseCursor, CURSOR_MAP};
pub use draw::{DrawCmd, DrawData, DrawList, DrawVert, TextureId};
pub use error::{BridgeError, Result};
pub use gui::{ClipboardBackend, ContextSetup, FontAtlasImage, GuiContext, GuiIo, IoState};
pub use host::{Clipboard, HostTexture, Platform, Rasterizer, ScissorRect};
pub use keys::{gui_key_for, host_key_for, GuiKey, HostKey, KEY_MAP, MODIFIER_KEYS};
pub use mouse::{GuiMouseButton, HostMouseButton, MOUSE_BUTTON_MAP};
pub use options::RendererOptions;
pub use state::ContextId;

// Re-export glam types for convenience
pub use glam::{IVec2, Vec2, Vec4};
