//! Recording doubles for the host and the GUI library.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use rlimgui::{
    Clipboard, ClipboardBackend, ContextSetup, DrawCmd, DrawData, DrawList, DrawVert,
    FontAtlasImage, GuiContext, GuiIo, GuiKey, GuiMouseButton, GuiMouseCursor, HostKey,
    HostMouseButton, HostMouseCursor, HostTexture, IVec2, ImGuiRenderer, IoState, Platform,
    Rasterizer, ScissorRect, TextureId, Vec2, Vec4, WindowFlags, Widgets,
};

/// Rasterizer and cursor calls, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Flush,
    Culling(bool),
    ScissorTest(bool),
    Scissor(ScissorRect),
    Begin,
    End,
    SetTexture(u32),
    Color([u8; 4]),
    TexCoord(f32, f32),
    Vertex(f32, f32),
    ShowCursor,
    HideCursor,
    SetCursor(HostMouseCursor),
    SetMousePosition(IVec2),
}

/// Scriptable host. Edge-triggered input lasts until [`MockHost::next_frame`].
#[derive(Debug)]
pub struct MockHost {
    pub fullscreen: bool,
    pub monitor: i32,
    pub monitor_sizes: HashMap<i32, IVec2>,
    pub screen: IVec2,
    pub dpi: Vec2,
    pub frame_time: f32,
    pub focused: bool,
    pub mouse: IVec2,
    pub wheel: Vec2,
    pub buttons_pressed: HashSet<HostMouseButton>,
    pub buttons_released: HashSet<HostMouseButton>,
    pub keys_pressed: HashSet<HostKey>,
    pub keys_released: HashSet<HostKey>,
    pub key_queue: VecDeque<i32>,
    pub char_queue: VecDeque<u32>,
    pub calls: Vec<HostCall>,
    pub live_textures: HashMap<u32, HostTexture>,
    /// Shared so unloads during drop stay observable.
    pub unloaded: Rc<RefCell<Vec<u32>>>,
    next_texture: u32,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            fullscreen: false,
            monitor: 0,
            monitor_sizes: HashMap::new(),
            screen: IVec2::new(800, 480),
            dpi: Vec2::ONE,
            frame_time: 1.0 / 60.0,
            focused: true,
            mouse: IVec2::ZERO,
            wheel: Vec2::ZERO,
            buttons_pressed: HashSet::new(),
            buttons_released: HashSet::new(),
            keys_pressed: HashSet::new(),
            keys_released: HashSet::new(),
            key_queue: VecDeque::new(),
            char_queue: VecDeque::new(),
            calls: Vec::new(),
            live_textures: HashMap::new(),
            unloaded: Rc::default(),
            next_texture: 100,
        }
    }
}

impl MockHost {
    /// Press `key` this frame: queued once and reported by the edge poll.
    pub fn press_key(&mut self, key: HostKey) {
        self.keys_pressed.insert(key);
        self.key_queue.push_back(key.raw());
    }

    pub fn release_key(&mut self, key: HostKey) {
        self.keys_released.insert(key);
    }

    pub fn type_text(&mut self, text: &str) {
        self.char_queue.extend(text.chars().map(u32::from));
    }

    pub fn next_frame(&mut self) {
        self.wheel = Vec2::ZERO;
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.key_queue.clear();
        self.char_queue.clear();
        self.calls.clear();
    }

    pub fn count(&self, f: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|c| f(c)).count()
    }
}

impl Platform for MockHost {
    fn is_window_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn current_monitor(&self) -> i32 {
        self.monitor
    }

    fn monitor_size(&self, monitor: i32) -> IVec2 {
        self.monitor_sizes.get(&monitor).copied().unwrap_or(IVec2::ZERO)
    }

    fn screen_size(&self) -> IVec2 {
        self.screen
    }

    fn window_scale_dpi(&self) -> Vec2 {
        self.dpi
    }

    fn frame_time(&self) -> f32 {
        self.frame_time
    }

    fn mouse_position(&self) -> IVec2 {
        self.mouse
    }

    fn set_mouse_position(&mut self, position: IVec2) {
        self.mouse = position;
        self.calls.push(HostCall::SetMousePosition(position));
    }

    fn is_mouse_button_pressed(&self, button: HostMouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    fn is_mouse_button_released(&self, button: HostMouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    fn mouse_wheel_move(&self) -> Vec2 {
        self.wheel
    }

    fn show_cursor(&mut self) {
        self.calls.push(HostCall::ShowCursor);
    }

    fn hide_cursor(&mut self) {
        self.calls.push(HostCall::HideCursor);
    }

    fn set_mouse_cursor(&mut self, cursor: HostMouseCursor) {
        self.calls.push(HostCall::SetCursor(cursor));
    }

    fn is_key_pressed(&self, key: HostKey) -> bool {
        self.keys_pressed.contains(&key)
    }

    fn is_key_released(&self, key: HostKey) -> bool {
        self.keys_released.contains(&key)
    }

    fn is_window_focused(&self) -> bool {
        self.focused
    }

    fn next_key_pressed(&mut self) -> Option<i32> {
        self.key_queue.pop_front()
    }

    fn next_char_pressed(&mut self) -> Option<u32> {
        self.char_queue.pop_front()
    }

    fn load_texture_rgba(&mut self, width: u32, height: u32, _pixels: &[u8]) -> HostTexture {
        let texture = HostTexture {
            id: self.next_texture,
            width: width as i32,
            height: height as i32,
            mipmaps: 1,
            format: 7,
        };
        self.next_texture += 1;
        self.live_textures.insert(texture.id, texture);
        texture
    }

    fn unload_texture(&mut self, texture: HostTexture) {
        self.live_textures.remove(&texture.id);
        self.unloaded.borrow_mut().push(texture.id);
    }
}

impl Rasterizer for MockHost {
    fn draw_render_batch_active(&mut self) {
        self.calls.push(HostCall::Flush);
    }

    fn enable_backface_culling(&mut self) {
        self.calls.push(HostCall::Culling(true));
    }

    fn disable_backface_culling(&mut self) {
        self.calls.push(HostCall::Culling(false));
    }

    fn enable_scissor_test(&mut self) {
        self.calls.push(HostCall::ScissorTest(true));
    }

    fn disable_scissor_test(&mut self) {
        self.calls.push(HostCall::ScissorTest(false));
    }

    fn scissor(&mut self, rect: ScissorRect) {
        self.calls.push(HostCall::Scissor(rect));
    }

    fn begin_triangles(&mut self) {
        self.calls.push(HostCall::Begin);
    }

    fn end(&mut self) {
        self.calls.push(HostCall::End);
    }

    fn set_texture(&mut self, id: u32) {
        self.calls.push(HostCall::SetTexture(id));
    }

    fn check_render_batch_limit(&mut self, _vertex_count: i32) -> bool {
        false
    }

    fn color4ub(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.calls.push(HostCall::Color([r, g, b, a]));
    }

    fn tex_coord2f(&mut self, u: f32, v: f32) {
        self.calls.push(HostCall::TexCoord(u, v));
    }

    fn vertex2f(&mut self, x: f32, y: f32) {
        self.calls.push(HostCall::Vertex(x, y));
    }
}

/// Input events received by the GUI double, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum GuiEvent {
    MousePos(Vec2),
    MouseButton(GuiMouseButton, bool),
    Wheel(Vec2),
    Key(GuiKey, bool),
    Focus(bool),
    Char(char),
}

/// Widget calls, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetCall {
    Begin(String),
    End,
    Text(String),
    Button(String),
}

/// GUI library double: records events and widget calls, hands back scripted draw data.
#[derive(Default)]
pub struct MockGui {
    pub io: IoState,
    pub cursor: Option<GuiMouseCursor>,
    pub display_size: Vec2,
    pub framebuffer_scale: Vec2,
    pub delta_time: f32,
    pub events: Vec<GuiEvent>,
    pub setup: Option<ContextSetup>,
    pub clipboard: Option<Box<dyn ClipboardBackend>>,
    pub atlas: FontAtlasImage,
    pub font_texture_id: Option<TextureId>,
    pub draw_data: DrawData,
    pub renders: usize,
    pub made_current: usize,
    pub widgets: Vec<WidgetCall>,
}

impl MockGui {
    pub fn with_atlas(width: u32, height: u32) -> Self {
        Self {
            atlas: FontAtlasImage {
                width,
                height,
                pixels: vec![255; (width * height * 4) as usize],
            },
            ..Self::default()
        }
    }

    pub fn key_events(&self) -> Vec<(GuiKey, bool)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GuiEvent::Key(k, down) => Some((*k, *down)),
                _ => None,
            })
            .collect()
    }
}

impl GuiIo for MockGui {
    fn io_state(&self) -> IoState {
        self.io
    }

    fn set_display_size(&mut self, size: Vec2) {
        self.display_size = size;
    }

    fn set_framebuffer_scale(&mut self, scale: Vec2) {
        self.framebuffer_scale = scale;
    }

    fn set_delta_time(&mut self, delta: f32) {
        self.delta_time = delta;
    }

    fn add_mouse_pos_event(&mut self, pos: Vec2) {
        self.events.push(GuiEvent::MousePos(pos));
    }

    fn add_mouse_button_event(&mut self, button: GuiMouseButton, down: bool) {
        self.events.push(GuiEvent::MouseButton(button, down));
    }

    fn add_mouse_wheel_event(&mut self, wheel: Vec2) {
        self.events.push(GuiEvent::Wheel(wheel));
    }

    fn add_key_event(&mut self, key: GuiKey, down: bool) {
        self.events.push(GuiEvent::Key(key, down));
    }

    fn add_focus_event(&mut self, focused: bool) {
        self.events.push(GuiEvent::Focus(focused));
    }

    fn add_input_character(&mut self, c: char) {
        self.events.push(GuiEvent::Char(c));
    }

    fn mouse_cursor(&self) -> GuiMouseCursor {
        self.cursor.unwrap_or(GuiMouseCursor::Arrow)
    }
}

impl GuiContext for MockGui {
    fn make_current(&mut self) {
        self.made_current += 1;
    }

    fn configure(&mut self, setup: &ContextSetup) {
        self.setup = Some(setup.clone());
    }

    fn set_clipboard_backend(&mut self, backend: Box<dyn ClipboardBackend>) {
        self.clipboard = Some(backend);
    }

    fn font_atlas_rgba32(&mut self) -> FontAtlasImage {
        self.atlas.clone()
    }

    fn set_font_texture_id(&mut self, id: TextureId) {
        self.font_texture_id = Some(id);
    }

    fn render(&mut self) -> &DrawData {
        self.renders += 1;
        &self.draw_data
    }
}

impl Widgets for MockGui {
    fn begin(&mut self, label: &str, _open: &mut bool, _flags: WindowFlags) -> bool {
        self.widgets.push(WidgetCall::Begin(label.to_owned()));
        true
    }

    fn end(&mut self) {
        self.widgets.push(WidgetCall::End);
    }

    fn open_popup(&mut self, _label: &str) {}

    fn begin_popup_modal(&mut self, _label: &str, _open: &mut bool, _flags: WindowFlags) -> bool {
        true
    }

    fn end_popup(&mut self) {}

    fn begin_table(&mut self, _id: &str, _columns: usize) -> bool {
        true
    }

    fn table_next_row(&mut self) {}

    fn table_next_column(&mut self) {}

    fn end_table(&mut self) {}

    fn text(&mut self, text: &str) {
        self.widgets.push(WidgetCall::Text(text.to_owned()));
    }

    fn button(&mut self, label: &str, _size: Vec2) -> bool {
        self.widgets.push(WidgetCall::Button(label.to_owned()));
        false
    }

    fn same_line(&mut self) {}

    fn separator(&mut self) {}

    fn image(&mut self, _texture: TextureId, _size: Vec2) {}

    fn window_width(&self) -> f32 {
        300.0
    }

    fn show_demo_window(&mut self, _open: &mut bool) {}
}

/// Host clipboard double sharing its contents with the test.
#[derive(Debug, Clone, Default)]
pub struct SharedClipboard(pub Rc<RefCell<Option<String>>>);

impl Clipboard for SharedClipboard {
    fn clipboard_text(&mut self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set_clipboard_text(&mut self, text: &str) {
        *self.0.borrow_mut() = Some(text.to_owned());
    }
}

pub type TestRenderer = ImGuiRenderer<MockGui, MockHost>;

pub fn renderer() -> TestRenderer {
    ImGuiRenderer::new(MockGui::with_atlas(4, 2), MockHost::default(), SharedClipboard::default())
}

/// One list with the given vertices and a single command over all indices.
pub fn draw_data(verts: &[DrawVert], indices: Vec<u16>, clip: Vec4, texture: TextureId) -> DrawData {
    let cmd = DrawCmd {
        clip_rect: clip,
        texture_id: texture,
        vtx_offset: 0,
        idx_offset: 0,
        elem_count: indices.len(),
    };
    DrawData {
        display_pos: Vec2::ZERO,
        display_size: Vec2::new(800.0, 480.0),
        framebuffer_scale: Vec2::ONE,
        draw_lists: vec![DrawList {
            vtx_buffer: verts.to_vec(),
            idx_buffer: indices,
            commands: vec![cmd],
        }],
    }
}
