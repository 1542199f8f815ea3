//! Rendering side of rlimgui-rs.
//!
//! This crate provides:
//! - [`texture`]: decoding images into host textures and the [`TextureBindings`] arena
//! - [`font_atlas`]: the renderer-owned font atlas texture
//! - [`replay`]: replaying GUI draw data against the host's immediate-mode rasterizer

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod color;
pub mod error;
pub mod font_atlas;
pub mod replay;
pub mod texture;

pub use color::pack_color;
pub use error::{TextureError, TextureResult};
pub use font_atlas::FontTexture;
pub use replay::{render_draw_data, scissor_rect, ReplayStats};
pub use texture::{
    image_format_from_hint, load_as_image, load_as_texture, upload_rgba, TextureBindings,
};
