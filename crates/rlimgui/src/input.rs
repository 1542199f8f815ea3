//! Per-frame input pump: host state in, GUI events out.

use rlimgui_core::{
    gui_key_for, host_cursor_for, GuiContext, GuiIo, GuiMouseCursor, HostKey, IoState, Platform,
    Rasterizer, KEY_MAP, MODIFIER_KEYS, MOUSE_BUTTON_MAP,
};

use crate::renderer::ImGuiRenderer;

impl<G: GuiContext, H: Platform + Rasterizer> ImGuiRenderer<G, H> {
    /// Feeds this frame's display metrics and input into the current context.
    ///
    /// Call once per frame, before building the GUI.
    pub fn update(&mut self) {
        self.warn_if_not_current("update");

        let host = &mut self.host;
        let gui = &mut self.gui;

        let display = if host.is_window_fullscreen() {
            host.monitor_size(host.current_monitor())
        } else {
            host.screen_size()
        };
        gui.set_display_size(display.as_vec2());
        gui.set_framebuffer_scale(host.window_scale_dpi());
        gui.set_delta_time(host.frame_time());

        let io = gui.io_state();
        pump_mouse(gui, host, io);
        update_cursor(gui, host, io, &mut self.last_cursor);
        pump_keyboard(gui, host);
    }
}

fn pump_mouse<G: GuiIo + ?Sized, H: Platform + ?Sized>(gui: &mut G, host: &mut H, io: IoState) {
    if io.want_set_mouse_pos {
        host.set_mouse_position(io.mouse_pos.as_ivec2());
    } else {
        gui.add_mouse_pos_event(host.mouse_position().as_vec2());
    }

    for &(host_button, gui_button) in MOUSE_BUTTON_MAP {
        if host.is_mouse_button_pressed(host_button) {
            gui.add_mouse_button_event(gui_button, true);
        } else if host.is_mouse_button_released(host_button) {
            gui.add_mouse_button_event(gui_button, false);
        }
    }

    gui.add_mouse_wheel_event(host.mouse_wheel_move());
}

/// Applies the GUI's requested cursor to the host, only when it changed
/// (or every frame while the GUI draws its own cursor).
fn update_cursor<G: GuiIo + ?Sized, H: Platform + ?Sized>(
    gui: &G,
    host: &mut H,
    io: IoState,
    last: &mut Option<GuiMouseCursor>,
) {
    if io.no_mouse_cursor_change {
        return;
    }

    let cursor = gui.mouse_cursor();
    if *last == Some(cursor) && !io.mouse_draw_cursor {
        return;
    }
    *last = Some(cursor);

    if io.mouse_draw_cursor || cursor == GuiMouseCursor::None {
        host.hide_cursor();
        return;
    }

    host.show_cursor();
    match host_cursor_for(cursor) {
        Some(shape) => host.set_mouse_cursor(shape),
        None => log::trace!("no host cursor for {cursor:?}"),
    }
}

fn pump_keyboard<G: GuiIo + ?Sized, H: Platform + ?Sized>(gui: &mut G, host: &mut H) {
    for &(left, right, modifier) in MODIFIER_KEYS {
        if host.is_key_pressed(left) || host.is_key_pressed(right) {
            gui.add_key_event(modifier, true);
        }
        if host.is_key_released(left) || host.is_key_released(right) {
            gui.add_key_event(modifier, false);
        }
    }

    gui.add_focus_event(host.is_window_focused());

    // Presses come from the host's queue, releases are polled per key.
    while let Some(code) = host.next_key_pressed() {
        match HostKey::from_raw(code).and_then(gui_key_for) {
            Some(key) => gui.add_key_event(key, true),
            None => log::trace!("dropping unmapped key code {code}"),
        }
    }

    for &(host_key, gui_key) in KEY_MAP {
        if host.is_key_released(host_key) {
            gui.add_key_event(gui_key, false);
        }
    }

    while let Some(code_point) = host.next_char_pressed() {
        match char::from_u32(code_point) {
            Some(c) => gui.add_input_character(c),
            None => log::trace!("dropping invalid code point {code_point:#x}"),
        }
    }
}
