//! GUI library adapter over `dear-imgui-rs`.
//!
//! Frames start lazily: the first widget call after [`GuiContext::render`]
//! (or the next `render` itself) begins a new frame, so input pumped by
//! `update` lands in the frame the application then builds.

#![allow(unsafe_code)]

use std::ffi::CString;
use std::path::PathBuf;

use dear_imgui_rs::render::{DrawCmd as ImDrawCmd, DrawData as ImDrawData, DrawVert as ImDrawVert};
use dear_imgui_rs::{sys, BackendFlags, ConfigFlags, Context, Key, MouseButton};
use glam::{Vec2, Vec4};
use rlimgui_core::{
    ClipboardBackend, ContextSetup, DrawCmd, DrawData, DrawList, DrawVert, FontAtlasImage,
    GuiContext, GuiIo, GuiKey, GuiMouseButton, GuiMouseCursor, IoState, TextureId,
};
use rlimgui_ui::{WindowFlags, Widgets};

const _: () = assert!(std::mem::size_of::<ImDrawVert>() == std::mem::size_of::<DrawVert>());

/// Owns one Dear ImGui context and exposes it through the bridge's GUI traits.
pub struct DearImGui {
    ctx: Context,
    raw: *mut sys::ImGuiContext,
    draw_data: DrawData,
    in_frame: bool,
}

impl DearImGui {
    /// Creates a fresh context. It is current until another one is created.
    pub fn new() -> Self {
        let ctx = Context::create();
        let raw = unsafe { sys::igGetCurrentContext() };
        Self {
            ctx,
            raw,
            draw_data: DrawData::default(),
            in_frame: false,
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    /// Begins a frame unless one is already being built.
    pub fn new_frame(&mut self) {
        if !self.in_frame {
            self.ctx.frame();
            self.in_frame = true;
        }
    }
}

impl Default for DearImGui {
    fn default() -> Self {
        Self::new()
    }
}

impl GuiIo for DearImGui {
    fn io_state(&self) -> IoState {
        let io = self.ctx.io();
        IoState {
            want_set_mouse_pos: io.want_set_mouse_pos(),
            mouse_pos: Vec2::from_array(io.mouse_pos()),
            mouse_draw_cursor: io.mouse_draw_cursor(),
            no_mouse_cursor_change: io
                .config_flags()
                .contains(ConfigFlags::NO_MOUSE_CURSOR_CHANGE),
        }
    }

    fn set_display_size(&mut self, size: Vec2) {
        self.ctx.io_mut().set_display_size(size.to_array());
    }

    fn set_framebuffer_scale(&mut self, scale: Vec2) {
        self.ctx.io_mut().set_display_framebuffer_scale(scale.to_array());
    }

    fn set_delta_time(&mut self, delta: f32) {
        // Dear ImGui asserts on a zero delta, which raylib reports on its first frame.
        self.ctx.io_mut().set_delta_time(delta.max(f32::EPSILON));
    }

    fn add_mouse_pos_event(&mut self, pos: Vec2) {
        self.ctx.io_mut().add_mouse_pos_event(pos.to_array());
    }

    fn add_mouse_button_event(&mut self, button: GuiMouseButton, down: bool) {
        match mouse_button(button) {
            Some(button) => self.ctx.io_mut().add_mouse_button_event(button, down),
            None => log::trace!("no Dear ImGui mouse button {}", button.0),
        }
    }

    fn add_mouse_wheel_event(&mut self, wheel: Vec2) {
        self.ctx.io_mut().add_mouse_wheel_event(wheel.to_array());
    }

    fn add_key_event(&mut self, key: GuiKey, down: bool) {
        self.ctx.io_mut().add_key_event(imgui_key(key), down);
    }

    fn add_focus_event(&mut self, focused: bool) {
        self.ctx.io_mut().add_focus_event(focused);
    }

    fn add_input_character(&mut self, c: char) {
        self.ctx.io_mut().add_input_character(c);
    }

    fn mouse_cursor(&self) -> GuiMouseCursor {
        cursor_from_raw(unsafe { sys::igGetMouseCursor() })
    }
}

impl GuiContext for DearImGui {
    fn make_current(&mut self) {
        unsafe { sys::igSetCurrentContext(self.raw) }
    }

    fn configure(&mut self, setup: &ContextSetup) {
        let ini = setup.ini_filename.as_ref().map(PathBuf::from);
        if let Err(err) = self.ctx.set_ini_filename(ini) {
            log::warn!("could not set settings file: {err}");
        }
        if let Err(err) = self.ctx.set_platform_name(Some(setup.platform_name.clone())) {
            log::warn!("could not set platform name: {err}");
        }
        if let Err(err) = self.ctx.set_renderer_name(Some(setup.renderer_name.clone())) {
            log::warn!("could not set renderer name: {err}");
        }

        let io = self.ctx.io_mut();
        let mut flags = io.backend_flags();
        flags.insert(BackendFlags::RENDERER_HAS_VTX_OFFSET);
        if setup.has_mouse_cursors {
            flags.insert(BackendFlags::HAS_MOUSE_CURSORS);
        }
        io.set_backend_flags(flags);
        io.set_display_size(setup.display_size.to_array());
        io.set_display_framebuffer_scale(setup.framebuffer_scale.to_array());
        io.add_mouse_pos_event(setup.mouse_pos.to_array());

        // The atlas falls back to the built-in font when it is built empty.
        if !setup.load_default_font {
            log::debug!("default font requested off; the atlas still adds it when empty");
        }
    }

    fn set_clipboard_backend(&mut self, backend: Box<dyn ClipboardBackend>) {
        self.ctx.set_clipboard_backend(ClipboardShim(backend));
    }

    fn font_atlas_rgba32(&mut self) -> FontAtlasImage {
        let mut fonts = self.ctx.fonts();
        fonts.build();

        let tex = unsafe { fonts.get_tex_data() };
        if tex.is_null() {
            log::warn!("font atlas has no texture data");
            return FontAtlasImage::default();
        }
        let (width, height, bpp, pixels) = unsafe {
            (
                (*tex).Width,
                (*tex).Height,
                (*tex).BytesPerPixel,
                (*tex).Pixels.cast::<u8>().cast_const(),
            )
        };
        let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
            return FontAtlasImage::default();
        };
        let texels = width as usize * height as usize;
        if pixels.is_null() || texels == 0 {
            return FontAtlasImage::default();
        }

        let pixels = match bpp {
            4 => unsafe { std::slice::from_raw_parts(pixels, texels * 4) }.to_vec(),
            1 => unsafe { std::slice::from_raw_parts(pixels, texels) }
                .iter()
                .flat_map(|&a| [255, 255, 255, a])
                .collect(),
            other => {
                log::warn!("unsupported font atlas format: {other} bytes per pixel");
                return FontAtlasImage::default();
            }
        };
        FontAtlasImage {
            width,
            height,
            pixels,
        }
    }

    fn set_font_texture_id(&mut self, id: TextureId) {
        self.ctx
            .fonts()
            .set_texture_id(dear_imgui_rs::TextureId::from(id.0));
    }

    fn render(&mut self) -> &DrawData {
        self.new_frame();
        self.in_frame = false;
        self.draw_data = convert_draw_data(self.ctx.render());
        &self.draw_data
    }
}

impl Widgets for DearImGui {
    fn begin(&mut self, label: &str, open: &mut bool, flags: WindowFlags) -> bool {
        self.new_frame();
        let label = c_string(label);
        unsafe { sys::igBegin(label.as_ptr(), open, window_flags(flags)) }
    }

    fn end(&mut self) {
        unsafe { sys::igEnd() }
    }

    fn open_popup(&mut self, label: &str) {
        self.new_frame();
        let label = c_string(label);
        unsafe { sys::igOpenPopup_Str(label.as_ptr(), 0) }
    }

    fn begin_popup_modal(&mut self, label: &str, open: &mut bool, flags: WindowFlags) -> bool {
        self.new_frame();
        let label = c_string(label);
        unsafe { sys::igBeginPopupModal(label.as_ptr(), open, window_flags(flags)) }
    }

    fn end_popup(&mut self) {
        unsafe { sys::igEndPopup() }
    }

    fn begin_table(&mut self, id: &str, columns: usize) -> bool {
        let Ok(columns) = i32::try_from(columns) else {
            return false;
        };
        let id = c_string(id);
        unsafe {
            sys::igBeginTable(
                id.as_ptr(),
                columns,
                0,
                sys::ImVec2 { x: 0.0, y: 0.0 },
                0.0,
            )
        }
    }

    fn table_next_row(&mut self) {
        unsafe { sys::igTableNextRow(0, 0.0) }
    }

    fn table_next_column(&mut self) {
        unsafe {
            sys::igTableNextColumn();
        }
    }

    fn end_table(&mut self) {
        unsafe { sys::igEndTable() }
    }

    fn text(&mut self, text: &str) {
        self.new_frame();
        let range = text.as_bytes().as_ptr_range();
        unsafe { sys::igTextUnformatted(range.start.cast(), range.end.cast()) }
    }

    fn button(&mut self, label: &str, size: Vec2) -> bool {
        self.new_frame();
        let label = c_string(label);
        unsafe { sys::igButton(label.as_ptr(), sys::ImVec2 { x: size.x, y: size.y }) }
    }

    fn same_line(&mut self) {
        unsafe { sys::igSameLine(0.0, -1.0) }
    }

    fn separator(&mut self) {
        unsafe { sys::igSeparator() }
    }

    fn image(&mut self, texture: TextureId, size: Vec2) {
        let tex_ref = sys::ImTextureRef {
            _TexData: std::ptr::null_mut(),
            _TexID: texture.0,
        };
        unsafe {
            sys::igImage(
                tex_ref,
                sys::ImVec2 { x: size.x, y: size.y },
                sys::ImVec2 { x: 0.0, y: 0.0 },
                sys::ImVec2 { x: 1.0, y: 1.0 },
            );
        }
    }

    fn window_width(&self) -> f32 {
        unsafe { sys::igGetWindowWidth() }
    }

    fn show_demo_window(&mut self, open: &mut bool) {
        self.new_frame();
        unsafe { sys::igShowDemoWindow(open) }
    }
}

/// Hands the bridge's clipboard to Dear ImGui.
struct ClipboardShim(Box<dyn ClipboardBackend>);

impl dear_imgui_rs::ClipboardBackend for ClipboardShim {
    fn get(&mut self) -> Option<String> {
        Some(self.0.get())
    }

    fn set(&mut self, value: &str) {
        self.0.set(value);
    }
}

/// Copies one frame's draw data into the bridge's model.
///
/// Lists that fail validation are dropped with a warning.
fn convert_draw_data(data: &ImDrawData) -> DrawData {
    let draw_lists = data
        .draw_lists()
        .filter_map(|list| {
            let vtx = list.vtx_buffer();
            let bytes = unsafe {
                std::slice::from_raw_parts(vtx.as_ptr().cast::<u8>(), std::mem::size_of_val(vtx))
            };
            let commands = list
                .commands()
                .filter_map(|cmd| match cmd {
                    ImDrawCmd::Elements {
                        count,
                        cmd_params,
                        raw_cmd,
                    } => {
                        let texture = unsafe { sys::ImDrawCmd_GetTexID(raw_cmd.cast_mut()) };
                        Some(DrawCmd {
                            clip_rect: Vec4::from_array(cmd_params.clip_rect),
                            texture_id: TextureId(texture),
                            vtx_offset: cmd_params.vtx_offset,
                            idx_offset: cmd_params.idx_offset,
                            elem_count: count,
                        })
                    }
                    _ => {
                        log::trace!("skipping callback draw command");
                        None
                    }
                })
                .collect();

            DrawList::from_raw(bytes, list.idx_buffer().to_vec(), commands)
                .map_err(|err| log::warn!("dropping draw list: {err}"))
                .ok()
        })
        .collect();

    DrawData {
        display_pos: Vec2::from_array(data.display_pos),
        display_size: Vec2::from_array(data.display_size),
        framebuffer_scale: Vec2::from_array(data.framebuffer_scale),
        draw_lists,
    }
}

fn c_string(text: &str) -> CString {
    CString::new(text.replace('\0', "")).unwrap_or_default()
}

fn window_flags(flags: WindowFlags) -> i32 {
    i32::try_from(flags.0).unwrap_or_default()
}

fn mouse_button(button: GuiMouseButton) -> Option<MouseButton> {
    match button.0 {
        0 => Some(MouseButton::Left),
        1 => Some(MouseButton::Right),
        2 => Some(MouseButton::Middle),
        3 => Some(MouseButton::Extra1),
        4 => Some(MouseButton::Extra2),
        _ => None,
    }
}

/// Maps Dear ImGui's `ImGuiMouseCursor` value. Busy cursors have no host
/// shape and fall back to the arrow.
fn cursor_from_raw(raw: i32) -> GuiMouseCursor {
    match raw {
        -1 => GuiMouseCursor::None,
        1 => GuiMouseCursor::TextInput,
        2 => GuiMouseCursor::ResizeAll,
        3 => GuiMouseCursor::ResizeNS,
        4 => GuiMouseCursor::ResizeEW,
        5 => GuiMouseCursor::ResizeNESW,
        6 => GuiMouseCursor::ResizeNWSE,
        7 => GuiMouseCursor::Hand,
        10 => GuiMouseCursor::NotAllowed,
        _ => GuiMouseCursor::Arrow,
    }
}

macro_rules! same_name_keys {
    ($key:expr; $($name:ident),* $(,)?) => {
        match $key {
            $(GuiKey::$name => Key::$name,)*
        }
    };
}

fn imgui_key(key: GuiKey) -> Key {
    same_name_keys!(key;
        Tab, LeftArrow, RightArrow, UpArrow, DownArrow, PageUp, PageDown, Home, End, Insert,
        Delete, Backspace, Space, Enter, Escape, LeftCtrl, LeftShift, LeftAlt, LeftSuper,
        RightCtrl, RightShift, RightAlt, RightSuper, Menu, Alpha0, Alpha1, Alpha2, Alpha3,
        Alpha4, Alpha5, Alpha6, Alpha7, Alpha8, Alpha9, A, B, C, D, E, F, G, H, I, J, K, L, M,
        N, O, P, Q, R, S, T, U, V, W, X, Y, Z, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11,
        F12, Apostrophe, Comma, Minus, Period, Slash, Semicolon, Equal, LeftBracket, Backslash,
        RightBracket, GraveAccent, CapsLock, ScrollLock, NumLock, PrintScreen, Pause, Keypad0,
        Keypad1, Keypad2, Keypad3, Keypad4, Keypad5, Keypad6, Keypad7, Keypad8, Keypad9,
        KeypadDecimal, KeypadDivide, KeypadMultiply, KeypadSubtract, KeypadAdd, KeypadEnter,
        KeypadEqual, ModCtrl, ModShift, ModAlt, ModSuper,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlimgui_core::{CURSOR_MAP, MOUSE_BUTTON_MAP};

    #[test]
    fn test_every_mapped_cursor_round_trips_through_raw_values() {
        for &(cursor, _) in CURSOR_MAP {
            let found = (-1..=10).any(|raw| cursor_from_raw(raw) == cursor);
            assert!(found, "{cursor:?} has no raw value");
        }
        assert_eq!(cursor_from_raw(8), GuiMouseCursor::Arrow);
        assert_eq!(cursor_from_raw(42), GuiMouseCursor::Arrow);
    }

    #[test]
    fn test_every_host_button_has_an_imgui_button() {
        for &(_, button) in MOUSE_BUTTON_MAP {
            assert!(mouse_button(button).is_some(), "{button:?}");
        }
        assert!(mouse_button(GuiMouseButton(5)).is_none());
    }

    #[test]
    fn test_nul_bytes_are_stripped_from_labels() {
        assert_eq!(c_string("a\0b").as_bytes(), b"ab");
    }

    #[test]
    fn test_empty_frame_renders_display_metrics() {
        let mut gui = DearImGui::new();
        gui.make_current();
        gui.set_display_size(Vec2::new(640.0, 360.0));
        gui.set_delta_time(0.0);
        let atlas = gui.font_atlas_rgba32();
        assert_eq!(atlas.pixels.len(), atlas.width as usize * atlas.height as usize * 4);

        let data = gui.render();
        assert_eq!(data.display_size, Vec2::new(640.0, 360.0));
        assert_eq!(data.framebuffer_scale, Vec2::ONE);
    }
}
