//! The bridge object tying one GUI context to one host.

use rlimgui_core::{
    state, Clipboard, ContextId, GuiContext, GuiMouseCursor, HostTexture, Platform, Rasterizer,
    RendererOptions, TextureId,
};
use rlimgui_render::{
    load_as_texture, render_draw_data, FontTexture, ReplayStats, TextureBindings, TextureResult,
};
use rlimgui_ui::{GuiWindow, WindowHost, WindowQueue, Widgets};

use crate::clipboard::HostClipboard;

/// Owns a GUI context, the host it renders to, and everything bridging them:
/// texture bindings, the font atlas texture, cursor state and managed windows.
///
/// Each renderer has its own context. Creating one makes it current; with
/// several renderers, call [`ImGuiRenderer::make_current`] before touching
/// one that is not.
///
/// Dropping the renderer runs [`ImGuiRenderer::shutdown`] if it was not
/// called, so drop it before the host window is closed.
pub struct ImGuiRenderer<G: GuiContext, H: Platform + Rasterizer> {
    id: ContextId,
    shut_down: bool,
    pub(crate) gui: G,
    pub(crate) host: H,
    textures: TextureBindings,
    font: FontTexture,
    pub(crate) last_cursor: Option<GuiMouseCursor>,
    windows: WindowQueue<ImGuiRenderer<G, H>>,
}

impl<G: GuiContext, H: Platform + Rasterizer> ImGuiRenderer<G, H> {
    /// Creates a renderer with default options and makes it current.
    pub fn new<C: Clipboard + 'static>(gui: G, host: H, clipboard: C) -> Self {
        Self::with_options(gui, host, clipboard, &RendererOptions::default())
    }

    /// Creates a renderer, configures its context from `options` and makes it current.
    ///
    /// The font atlas is not uploaded here; call
    /// [`ImGuiRenderer::recreate_font_texture`] once the host window exists.
    pub fn with_options<C: Clipboard + 'static>(
        mut gui: G,
        host: H,
        clipboard: C,
        options: &RendererOptions,
    ) -> Self {
        let id = ContextId::next();

        gui.make_current();
        state::make_current(id);
        gui.configure(&options.context_setup());
        gui.set_clipboard_backend(Box::new(HostClipboard::new(clipboard)));

        log::info!(
            "created GUI context {id} ({} / {})",
            options.platform_name,
            options.renderer_name
        );

        Self {
            id,
            shut_down: false,
            gui,
            host,
            textures: TextureBindings::new(),
            font: FontTexture::new(),
            last_cursor: None,
            windows: WindowQueue::new(),
        }
    }

    /// Makes this renderer's context the one the GUI library and the bridge act on.
    pub fn make_current(&mut self) {
        self.gui.make_current();
        state::make_current(self.id);
    }

    pub fn is_current(&self) -> bool {
        state::is_current(self.id)
    }

    pub(crate) fn warn_if_not_current(&self, operation: &str) {
        if !self.is_current() {
            log::warn!(
                "{operation} on context {} while {:?} is current",
                self.id,
                state::current()
            );
        }
    }

    /// Uploads the GUI library's font atlas and publishes its texture id.
    ///
    /// Replaces (and unloads) the previous font texture. Call after changing
    /// fonts, never between building a frame and rendering it.
    pub fn recreate_font_texture(&mut self) -> TextureResult<TextureId> {
        let atlas = self.gui.font_atlas_rgba32();
        let id = self
            .font
            .recreate(&atlas, &mut self.host, &mut self.textures)?;
        self.gui.set_font_texture_id(id);
        Ok(id)
    }

    /// Finalizes the GUI frame and draws it through the host rasterizer.
    pub fn render_imgui(&mut self) -> ReplayStats {
        self.warn_if_not_current("render_imgui");
        let data = self.gui.render();
        render_draw_data(&mut self.host, data, &self.textures)
    }

    /// Decodes an image, uploads it and binds it for use in image widgets.
    pub fn load_texture(&mut self, bytes: &[u8], format_hint: &str) -> TextureResult<TextureId> {
        let texture = load_as_texture(&mut self.host, bytes, format_hint)?;
        Ok(self.textures.bind(texture))
    }

    /// Binds a texture the caller already uploaded. The caller keeps ownership.
    pub fn bind_texture(&mut self, texture: HostTexture) -> TextureId {
        self.textures.bind(texture)
    }

    /// Drops a binding without unloading the host texture.
    pub fn unbind_texture(&mut self, id: TextureId) -> Option<HostTexture> {
        self.textures.release(id)
    }

    /// Drops a binding and unloads its host texture.
    pub fn unload_texture(&mut self, id: TextureId) {
        if let Some(texture) = self.textures.release(id) {
            self.host.unload_texture(texture);
        }
    }

    /// Releases the font texture and gives up the current-context marker.
    ///
    /// Further calls do nothing.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.font.release(&mut self.host, &mut self.textures);
        state::clear_current(self.id);
        log::info!("shut down GUI context {}", self.id);
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    pub fn gui(&self) -> &G {
        &self.gui
    }

    pub fn gui_mut(&mut self) -> &mut G {
        &mut self.gui
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn textures(&self) -> &TextureBindings {
        &self.textures
    }

    /// Binding of the font atlas texture, once created.
    pub fn font_texture(&self) -> Option<TextureId> {
        self.font.binding()
    }

    /// Managed windows. While [`ImGuiRenderer::draw_windows`] runs, this only
    /// holds windows opened during that pass.
    pub fn windows(&self) -> &WindowQueue<ImGuiRenderer<G, H>> {
        &self.windows
    }

    /// Queues a managed window; it is first drawn on the next
    /// [`ImGuiRenderer::draw_windows`].
    pub fn open_window(&mut self, window: impl GuiWindow<ImGuiRenderer<G, H>> + 'static) {
        self.windows.open(Box::new(window));
    }

    /// Draws all managed windows.
    ///
    /// Windows opened while drawing are queued behind the current ones and
    /// first drawn on the next call.
    pub fn draw_windows(&mut self) {
        let mut windows = std::mem::take(&mut self.windows);
        windows.draw(self);
        windows.absorb(&mut self.windows);
        self.windows = windows;
    }

    /// Closes every managed window; they are removed on the next draw.
    ///
    /// Called from a window's draw callback, this closes every window drawn
    /// in that pass, while windows opened later in the pass stay open.
    pub fn close_windows(&mut self) {
        self.windows.close_all();
    }
}

impl<G: GuiContext, H: Platform + Rasterizer> Drop for ImGuiRenderer<G, H> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl<G, H> WindowHost for ImGuiRenderer<G, H>
where
    G: GuiContext + Widgets,
    H: Platform + Rasterizer,
{
    fn widgets(&mut self) -> &mut dyn Widgets {
        &mut self.gui
    }

    fn load_texture(&mut self, bytes: &[u8], format_hint: &str) -> TextureResult<TextureId> {
        ImGuiRenderer::load_texture(self, bytes, format_hint)
    }
}
