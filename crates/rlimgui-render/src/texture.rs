//! Texture bridge: image decoding, host upload and texture bindings.
//!
//! The GUI library carries textures as opaque numeric ids. A binding is an
//! entry in [`TextureBindings`], an arena owned by the renderer that keeps the
//! host texture record at a stable handle for as long as the binding exists.

use std::collections::HashMap;

use image::{ImageFormat, RgbaImage};
use rlimgui_core::{HostTexture, Platform, TextureId};

use crate::error::{TextureError, TextureResult};

/// Resolves a format hint such as `".png"` or `"jpg"` to a container format.
pub fn image_format_from_hint(hint: &str) -> TextureResult<ImageFormat> {
    let extension = hint.trim().trim_start_matches('.');
    ImageFormat::from_extension(extension)
        .ok_or_else(|| TextureError::UnknownFormat(hint.to_string()))
}

/// Decodes an in-memory image of the given format into RGBA8 pixels.
pub fn load_as_image(bytes: &[u8], format_hint: &str) -> TextureResult<RgbaImage> {
    let format = image_format_from_hint(format_hint)?;
    let image = image::load_from_memory_with_format(bytes, format)?;
    Ok(image.to_rgba8())
}

/// Decodes an in-memory image and uploads it as a host texture.
pub fn load_as_texture<P: Platform + ?Sized>(
    platform: &mut P,
    bytes: &[u8],
    format_hint: &str,
) -> TextureResult<HostTexture> {
    let image = load_as_image(bytes, format_hint)?;
    upload_rgba(platform, image.width(), image.height(), image.as_raw())
}

/// Uploads tightly packed RGBA8 pixels after checking them against the dimensions.
pub fn upload_rgba<P: Platform + ?Sized>(
    platform: &mut P,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> TextureResult<HostTexture> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(TextureError::SizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }
    let texture = platform.load_texture_rgba(width, height, pixels);
    log::debug!(
        "uploaded {}x{} texture as host id {}",
        width,
        height,
        texture.id
    );
    Ok(texture)
}

/// Arena of host textures addressable by [`TextureId`].
///
/// Handles start at 1 (0 is the untextured id) and are never reused, so a
/// handle that outlives its binding resolves to nothing rather than to an
/// unrelated texture. Releasing a binding does not unload the host texture;
/// the caller owns that.
#[derive(Debug)]
pub struct TextureBindings {
    textures: HashMap<TextureId, HostTexture>,
    next: u64,
}

impl Default for TextureBindings {
    fn default() -> Self {
        Self {
            textures: HashMap::new(),
            next: 1,
        }
    }
}

impl TextureBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a host texture and returns its handle.
    pub fn bind(&mut self, texture: HostTexture) -> TextureId {
        let id = TextureId(self.next);
        self.next += 1;
        self.textures.insert(id, texture);
        id
    }

    /// Host texture behind a handle.
    pub fn resolve(&self, id: TextureId) -> Option<HostTexture> {
        self.textures.get(&id).copied()
    }

    /// Backend texture id for a draw command: 0 for the untextured id and
    /// for handles that are no longer bound.
    pub fn backend_id(&self, id: TextureId) -> u32 {
        if id.is_none() {
            return 0;
        }
        match self.resolve(id) {
            Some(texture) => texture.id,
            None => {
                log::debug!("draw command references unbound texture {id:?}");
                0
            }
        }
    }

    /// Removes a binding, returning the texture it held.
    pub fn release(&mut self, id: TextureId) -> Option<HostTexture> {
        self.textures.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
