use glam::Vec2;
use rlimgui_core::TextureId;

use crate::widgets::{WindowFlags, WindowHost};
use crate::window::{GuiWindow, WindowId};

const ICON_SIZE: Vec2 = Vec2::new(60.0, 60.0);

/// 32x32 PNG logo shown unless replaced with [`AboutWindow::with_icon`].
pub const DEFAULT_ICON: &[u8] = include_bytes!("../../assets/icon.png");

/// Icon state: bytes not yet uploaded, uploaded, or given up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Icon {
    Pending(&'static [u8]),
    Loaded(TextureId),
    Missing,
}

/// Informational window about the bridge and the libraries it runs on.
#[derive(Debug)]
pub struct AboutWindow {
    id: WindowId,
    open: bool,
    icon: Icon,
    versions: Vec<(String, String)>,
}

impl AboutWindow {
    pub fn new() -> Self {
        Self {
            id: WindowId::new(),
            open: true,
            icon: Icon::Pending(DEFAULT_ICON),
            versions: Vec::new(),
        }
    }

    /// Shows a PNG logo next to the project description.
    ///
    /// The image is uploaded the first time the window is drawn.
    #[must_use]
    pub fn with_icon(mut self, png: &'static [u8]) -> Self {
        self.icon = Icon::Pending(png);
        self
    }

    /// Adds a "Running `library` version `version`" line below the bridge's own.
    #[must_use]
    pub fn with_version(mut self, library: impl Into<String>, version: impl Into<String>) -> Self {
        self.versions.push((library.into(), version.into()));
        self
    }

    fn load_icon<R: WindowHost + ?Sized>(&mut self, renderer: &mut R) {
        if let Icon::Pending(bytes) = self.icon {
            self.icon = match renderer.load_texture(bytes, ".png") {
                Ok(id) => Icon::Loaded(id),
                Err(err) => {
                    log::warn!("about window icon failed to load: {err}");
                    Icon::Missing
                }
            };
        }
    }
}

impl Default for AboutWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: WindowHost + ?Sized> GuiWindow<R> for AboutWindow {
    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn draw(&mut self, renderer: &mut R) {
        self.load_icon(renderer);

        let ui = renderer.widgets();
        let label = self.id.label("About rlimgui-rs");
        if ui.begin(&label, &mut self.open, WindowFlags::ALWAYS_AUTO_RESIZE) {
            if ui.begin_table("Logo", 2) {
                ui.table_next_row();
                ui.table_next_column();
                if let Icon::Loaded(icon) = self.icon {
                    ui.image(icon, ICON_SIZE);
                }
                ui.table_next_column();
                ui.text("rlimgui-rs is an open-source ImGui renderer for raylib");
                ui.text(concat!("Licence: ", env!("CARGO_PKG_LICENSE")));
                ui.text(concat!("Source: ", env!("CARGO_PKG_REPOSITORY")));
                ui.end_table();
            }
            ui.separator();
            ui.text(concat!("Running rlimgui-rs version ", env!("CARGO_PKG_VERSION")));
            for (library, version) in &self.versions {
                ui.text(&format!("Running {library} version {version}"));
            }
        }
        ui.end();
    }
}
