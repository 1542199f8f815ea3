//! Font atlas texture owned by a renderer.

use rlimgui_core::{FontAtlasImage, Platform, TextureId};

use crate::error::TextureResult;
use crate::texture::{upload_rgba, TextureBindings};

/// Tracks the host texture the GUI library's font atlas was uploaded to.
#[derive(Debug, Default)]
pub struct FontTexture {
    binding: Option<TextureId>,
}

impl FontTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binding of the current font texture, if one was created.
    pub fn binding(&self) -> Option<TextureId> {
        self.binding
    }

    /// Uploads `atlas` as a new texture, then releases the previous font
    /// texture (binding and host texture) if there was one.
    ///
    /// Returns the new binding, to be published as the atlas texture id.
    /// Must not run while draw data referencing the old binding is replayed.
    pub fn recreate<P: Platform + ?Sized>(
        &mut self,
        atlas: &FontAtlasImage,
        platform: &mut P,
        bindings: &mut TextureBindings,
    ) -> TextureResult<TextureId> {
        let texture = upload_rgba(platform, atlas.width, atlas.height, &atlas.pixels)?;
        self.release(platform, bindings);

        let id = bindings.bind(texture);
        self.binding = Some(id);
        log::debug!(
            "font atlas {}x{} bound as {:?} (host id {})",
            atlas.width,
            atlas.height,
            id,
            texture.id
        );
        Ok(id)
    }

    /// Unloads the font texture, if any.
    pub fn release<P: Platform + ?Sized>(&mut self, platform: &mut P, bindings: &mut TextureBindings) {
        if let Some(old) = self.binding.take() {
            if let Some(texture) = bindings.release(old) {
                platform.unload_texture(texture);
            }
        }
    }
}
