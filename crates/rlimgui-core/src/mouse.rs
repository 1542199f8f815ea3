//! Mouse buttons on both sides of the bridge.

/// A mouse button as reported by the host framework (raylib `MouseButton`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum HostMouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
    Side = 3,
    Extra = 4,
    Forward = 5,
    Back = 6,
}

impl HostMouseButton {
    /// Raw host button code.
    pub fn raw(self) -> i32 {
        self as i32
    }
}

/// Index of a mouse button in the GUI library's button array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuiMouseButton(pub i32);

impl GuiMouseButton {
    pub const LEFT: Self = Self(0);
    pub const RIGHT: Self = Self(1);
    pub const MIDDLE: Self = Self(2);

    /// Button `n` slots after this one.
    ///
    /// The auxiliary buttons have no named constant on the GUI side and are
    /// addressed as `MIDDLE + 1` and `MIDDLE + 2`, which relies on the GUI
    /// library keeping its button indices contiguous.
    pub const fn offset(self, n: i32) -> Self {
        Self(self.0 + n)
    }

    /// Raw button index.
    pub fn index(self) -> i32 {
        self.0
    }
}

/// Host buttons forwarded to the GUI library, in the order they are polled.
pub const MOUSE_BUTTON_MAP: &[(HostMouseButton, GuiMouseButton)] = &[
    (HostMouseButton::Left, GuiMouseButton::LEFT),
    (HostMouseButton::Right, GuiMouseButton::RIGHT),
    (HostMouseButton::Middle, GuiMouseButton::MIDDLE),
    (HostMouseButton::Forward, GuiMouseButton::MIDDLE.offset(1)),
    (HostMouseButton::Back, GuiMouseButton::MIDDLE.offset(2)),
];
