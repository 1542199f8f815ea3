//! Host implementation over raylib's C API.
//!
//! All calls assume raylib's window (and GL context) is initialized and are
//! made from the thread that created it.

#![allow(unsafe_code)]

use std::ffi::{c_void, CStr, CString};

use glam::{IVec2, Vec2};
use raylib_sys as ffi;
use rlimgui_core::{
    Clipboard, HostKey, HostMouseButton, HostMouseCursor, HostTexture, Platform, Rasterizer,
    ScissorRect,
};

const RL_TRIANGLES: i32 = 0x0004;
const PIXELFORMAT_UNCOMPRESSED_R8G8B8A8: i32 = 7;

/// Window, input, texture and rlgl access through raylib.
#[derive(Debug, Default, Clone, Copy)]
pub struct RaylibHost;

impl Platform for RaylibHost {
    fn is_window_fullscreen(&self) -> bool {
        unsafe { ffi::IsWindowFullscreen() }
    }

    fn current_monitor(&self) -> i32 {
        unsafe { ffi::GetCurrentMonitor() }
    }

    fn monitor_size(&self, monitor: i32) -> IVec2 {
        unsafe { IVec2::new(ffi::GetMonitorWidth(monitor), ffi::GetMonitorHeight(monitor)) }
    }

    fn screen_size(&self) -> IVec2 {
        unsafe { IVec2::new(ffi::GetScreenWidth(), ffi::GetScreenHeight()) }
    }

    fn window_scale_dpi(&self) -> Vec2 {
        let scale = unsafe { ffi::GetWindowScaleDPI() };
        Vec2::new(scale.x, scale.y)
    }

    fn frame_time(&self) -> f32 {
        unsafe { ffi::GetFrameTime() }
    }

    fn mouse_position(&self) -> IVec2 {
        unsafe { IVec2::new(ffi::GetMouseX(), ffi::GetMouseY()) }
    }

    fn set_mouse_position(&mut self, position: IVec2) {
        unsafe { ffi::SetMousePosition(position.x, position.y) }
    }

    fn is_mouse_button_pressed(&self, button: HostMouseButton) -> bool {
        unsafe { ffi::IsMouseButtonPressed(button.raw()) }
    }

    fn is_mouse_button_released(&self, button: HostMouseButton) -> bool {
        unsafe { ffi::IsMouseButtonReleased(button.raw()) }
    }

    fn mouse_wheel_move(&self) -> Vec2 {
        let wheel = unsafe { ffi::GetMouseWheelMoveV() };
        Vec2::new(wheel.x, wheel.y)
    }

    fn show_cursor(&mut self) {
        unsafe { ffi::ShowCursor() }
    }

    fn hide_cursor(&mut self) {
        unsafe { ffi::HideCursor() }
    }

    fn set_mouse_cursor(&mut self, cursor: HostMouseCursor) {
        unsafe { ffi::SetMouseCursor(cursor.raw()) }
    }

    fn is_key_pressed(&self, key: HostKey) -> bool {
        unsafe { ffi::IsKeyPressed(key.raw()) }
    }

    fn is_key_released(&self, key: HostKey) -> bool {
        unsafe { ffi::IsKeyReleased(key.raw()) }
    }

    fn is_window_focused(&self) -> bool {
        unsafe { ffi::IsWindowFocused() }
    }

    fn next_key_pressed(&mut self) -> Option<i32> {
        match unsafe { ffi::GetKeyPressed() } {
            0 => None,
            code => Some(code),
        }
    }

    fn next_char_pressed(&mut self) -> Option<u32> {
        match unsafe { ffi::GetCharPressed() } {
            0 => None,
            code => u32::try_from(code).ok(),
        }
    }

    fn load_texture_rgba(&mut self, width: u32, height: u32, pixels: &[u8]) -> HostTexture {
        // raylib copies the pixels to the GPU and never writes through `data`.
        let image = ffi::Image {
            data: pixels.as_ptr().cast_mut().cast::<c_void>(),
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
            mipmaps: 1,
            format: PIXELFORMAT_UNCOMPRESSED_R8G8B8A8,
        };
        let texture = unsafe { ffi::LoadTextureFromImage(image) };
        HostTexture {
            id: texture.id,
            width: texture.width,
            height: texture.height,
            mipmaps: texture.mipmaps,
            format: texture.format,
        }
    }

    fn unload_texture(&mut self, texture: HostTexture) {
        unsafe {
            ffi::UnloadTexture(ffi::Texture {
                id: texture.id,
                width: texture.width,
                height: texture.height,
                mipmaps: texture.mipmaps,
                format: texture.format,
            });
        }
    }
}

impl Rasterizer for RaylibHost {
    fn draw_render_batch_active(&mut self) {
        unsafe { ffi::rlDrawRenderBatchActive() }
    }

    fn enable_backface_culling(&mut self) {
        unsafe { ffi::rlEnableBackfaceCulling() }
    }

    fn disable_backface_culling(&mut self) {
        unsafe { ffi::rlDisableBackfaceCulling() }
    }

    fn enable_scissor_test(&mut self) {
        unsafe { ffi::rlEnableScissorTest() }
    }

    fn disable_scissor_test(&mut self) {
        unsafe { ffi::rlDisableScissorTest() }
    }

    fn scissor(&mut self, rect: ScissorRect) {
        unsafe { ffi::rlScissor(rect.x, rect.y, rect.width, rect.height) }
    }

    fn begin_triangles(&mut self) {
        unsafe { ffi::rlBegin(RL_TRIANGLES) }
    }

    fn end(&mut self) {
        unsafe { ffi::rlEnd() }
    }

    fn set_texture(&mut self, id: u32) {
        unsafe { ffi::rlSetTexture(id) }
    }

    fn check_render_batch_limit(&mut self, vertex_count: i32) -> bool {
        unsafe { ffi::rlCheckRenderBatchLimit(vertex_count) }
    }

    fn color4ub(&mut self, r: u8, g: u8, b: u8, a: u8) {
        unsafe { ffi::rlColor4ub(r, g, b, a) }
    }

    fn tex_coord2f(&mut self, u: f32, v: f32) {
        unsafe { ffi::rlTexCoord2f(u, v) }
    }

    fn vertex2f(&mut self, x: f32, y: f32) {
        unsafe { ffi::rlVertex2f(x, y) }
    }
}

/// The system clipboard as seen by raylib.
#[derive(Debug, Default, Clone, Copy)]
pub struct RaylibClipboard;

impl Clipboard for RaylibClipboard {
    fn clipboard_text(&mut self) -> Option<String> {
        let text = unsafe { ffi::GetClipboardText() };
        if text.is_null() {
            return None;
        }
        let text = unsafe { CStr::from_ptr(text) };
        Some(text.to_string_lossy().into_owned())
    }

    fn set_clipboard_text(&mut self, text: &str) {
        match CString::new(text.replace('\0', "")) {
            Ok(text) => unsafe { ffi::SetClipboardText(text.as_ptr()) },
            Err(err) => log::warn!("not setting clipboard: {err}"),
        }
    }
}
