//! Configuration options for a renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gui::ContextSetup;

/// Options applied when a renderer creates its GUI context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererOptions {
    /// Display size assumed until the first `update`.
    pub initial_display_size: Vec2,

    /// Persistent settings file. `None` keeps the GUI library from reading or
    /// writing window layouts to disk.
    pub ini_filename: Option<String>,

    /// Whether to load the GUI library's built-in font.
    pub load_default_font: bool,

    /// Backend platform name reported to the GUI library.
    pub platform_name: String,

    /// Backend renderer name reported to the GUI library.
    pub renderer_name: String,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            initial_display_size: Vec2::new(800.0, 480.0),
            ini_filename: None,
            load_default_font: true,
            platform_name: "imgui_impl_raylib_rs".to_string(),
            renderer_name: "imgui_impl_rlgl".to_string(),
        }
    }
}

impl RendererOptions {
    /// Parses options from JSON. Missing fields take their default.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Context configuration derived from these options.
    pub fn context_setup(&self) -> ContextSetup {
        ContextSetup {
            has_mouse_cursors: true,
            ini_filename: self.ini_filename.clone(),
            display_size: self.initial_display_size,
            framebuffer_scale: Vec2::ONE,
            mouse_pos: Vec2::ZERO,
            load_default_font: self.load_default_font,
            platform_name: self.platform_name.clone(),
            renderer_name: self.renderer_name.clone(),
        }
    }
}
