//! Mouse cursor shapes on both sides of the bridge.

/// Cursor shape requested by the GUI library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuiMouseCursor {
    /// The GUI library wants no cursor at all.
    None,
    Arrow,
    TextInput,
    ResizeAll,
    ResizeNS,
    ResizeEW,
    ResizeNESW,
    ResizeNWSE,
    Hand,
    NotAllowed,
}

/// OS cursor shape understood by the host framework (raylib `MouseCursor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum HostMouseCursor {
    Default = 0,
    Arrow = 1,
    IBeam = 2,
    Crosshair = 3,
    PointingHand = 4,
    ResizeEW = 5,
    ResizeNS = 6,
    ResizeNWSE = 7,
    ResizeNESW = 8,
    ResizeAll = 9,
    NotAllowed = 10,
}

impl HostMouseCursor {
    /// Raw host cursor code.
    pub fn raw(self) -> i32 {
        self as i32
    }
}

/// GUI cursor to host cursor table. [`GuiMouseCursor::None`] is handled by
/// hiding the OS cursor and has no entry.
pub const CURSOR_MAP: &[(GuiMouseCursor, HostMouseCursor)] = &[
    (GuiMouseCursor::Arrow, HostMouseCursor::Arrow),
    (GuiMouseCursor::TextInput, HostMouseCursor::IBeam),
    (GuiMouseCursor::Hand, HostMouseCursor::PointingHand),
    (GuiMouseCursor::ResizeAll, HostMouseCursor::ResizeAll),
    (GuiMouseCursor::ResizeEW, HostMouseCursor::ResizeEW),
    (GuiMouseCursor::ResizeNESW, HostMouseCursor::ResizeNESW),
    (GuiMouseCursor::ResizeNS, HostMouseCursor::ResizeNS),
    (GuiMouseCursor::ResizeNWSE, HostMouseCursor::ResizeNWSE),
    (GuiMouseCursor::NotAllowed, HostMouseCursor::NotAllowed),
];

/// Looks up the host cursor for a GUI cursor shape.
pub fn host_cursor_for(cursor: GuiMouseCursor) -> Option<HostMouseCursor> {
    CURSOR_MAP
        .iter()
        .find(|(gui, _)| *gui == cursor)
        .map(|(_, host)| *host)
}

/// Looks up the GUI cursor shape for a host cursor.
pub fn gui_cursor_for(cursor: HostMouseCursor) -> Option<GuiMouseCursor> {
    CURSOR_MAP
        .iter()
        .find(|(_, host)| *host == cursor)
        .map(|(gui, _)| *gui)
}
