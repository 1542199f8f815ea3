//! Keyboard mapping between host key codes and GUI library keys.
//!
//! Host codes follow raylib's `KeyboardKey` values. The GUI side mirrors the
//! named keys of Dear ImGui's `ImGuiKey`, including the modifier pseudo-keys
//! that are fed separately from the physical left/right keys.

macro_rules! host_keys {
    ($($name:ident = $code:literal),+ $(,)?) => {
        /// A physical key as reported by the host framework.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum HostKey {
            $($name = $code),+
        }

        impl HostKey {
            /// Every key known to the bridge.
            pub const ALL: &'static [HostKey] = &[$(HostKey::$name),+];

            /// Converts a raw host key code, returning `None` for unknown codes.
            pub fn from_raw(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(HostKey::$name),)+
                    _ => None,
                }
            }

            /// Raw host key code.
            pub fn raw(self) -> i32 {
                self as i32
            }
        }
    };
}

host_keys! {
    Apostrophe = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,
    Zero = 48,
    One = 49,
    Two = 50,
    Three = 51,
    Four = 52,
    Five = 53,
    Six = 54,
    Seven = 55,
    Eight = 56,
    Nine = 57,
    Semicolon = 59,
    Equal = 61,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    LeftBracket = 91,
    Backslash = 92,
    RightBracket = 93,
    Grave = 96,
    Space = 32,
    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    Kp0 = 320,
    Kp1 = 321,
    Kp2 = 322,
    Kp3 = 323,
    Kp4 = 324,
    Kp5 = 325,
    Kp6 = 326,
    Kp7 = 327,
    Kp8 = 328,
    Kp9 = 329,
    KpDecimal = 330,
    KpDivide = 331,
    KpMultiply = 332,
    KpSubtract = 333,
    KpAdd = 334,
    KpEnter = 335,
    KpEqual = 336,
    LeftShift = 340,
    LeftControl = 341,
    LeftAlt = 342,
    LeftSuper = 343,
    RightShift = 344,
    RightControl = 345,
    RightAlt = 346,
    RightSuper = 347,
    KbMenu = 348,
}

/// A key as understood by the GUI library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuiKey {
    Tab,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,
    Backspace,
    Space,
    Enter,
    Escape,
    LeftCtrl,
    LeftShift,
    LeftAlt,
    LeftSuper,
    RightCtrl,
    RightShift,
    RightAlt,
    RightSuper,
    Menu,
    Alpha0,
    Alpha1,
    Alpha2,
    Alpha3,
    Alpha4,
    Alpha5,
    Alpha6,
    Alpha7,
    Alpha8,
    Alpha9,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Semicolon,
    Equal,
    LeftBracket,
    Backslash,
    RightBracket,
    GraveAccent,
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,
    Keypad0,
    Keypad1,
    Keypad2,
    Keypad3,
    Keypad4,
    Keypad5,
    Keypad6,
    Keypad7,
    Keypad8,
    Keypad9,
    KeypadDecimal,
    KeypadDivide,
    KeypadMultiply,
    KeypadSubtract,
    KeypadAdd,
    KeypadEnter,
    KeypadEqual,
    ModCtrl,
    ModShift,
    ModAlt,
    ModSuper,
}

/// Host key to GUI key table.
///
/// Key releases are detected by polling every entry of this table each frame,
/// so its length bounds the per-frame release scan.
pub const KEY_MAP: &[(HostKey, GuiKey)] = &[
    (HostKey::Apostrophe, GuiKey::Apostrophe),
    (HostKey::Comma, GuiKey::Comma),
    (HostKey::Minus, GuiKey::Minus),
    (HostKey::Period, GuiKey::Period),
    (HostKey::Slash, GuiKey::Slash),
    (HostKey::Zero, GuiKey::Alpha0),
    (HostKey::One, GuiKey::Alpha1),
    (HostKey::Two, GuiKey::Alpha2),
    (HostKey::Three, GuiKey::Alpha3),
    (HostKey::Four, GuiKey::Alpha4),
    (HostKey::Five, GuiKey::Alpha5),
    (HostKey::Six, GuiKey::Alpha6),
    (HostKey::Seven, GuiKey::Alpha7),
    (HostKey::Eight, GuiKey::Alpha8),
    (HostKey::Nine, GuiKey::Alpha9),
    (HostKey::Semicolon, GuiKey::Semicolon),
    (HostKey::Equal, GuiKey::Equal),
    (HostKey::A, GuiKey::A),
    (HostKey::B, GuiKey::B),
    (HostKey::C, GuiKey::C),
    (HostKey::D, GuiKey::D),
    (HostKey::E, GuiKey::E),
    (HostKey::F, GuiKey::F),
    (HostKey::G, GuiKey::G),
    (HostKey::H, GuiKey::H),
    (HostKey::I, GuiKey::I),
    (HostKey::J, GuiKey::J),
    (HostKey::K, GuiKey::K),
    (HostKey::L, GuiKey::L),
    (HostKey::M, GuiKey::M),
    (HostKey::N, GuiKey::N),
    (HostKey::O, GuiKey::O),
    (HostKey::P, GuiKey::P),
    (HostKey::Q, GuiKey::Q),
    (HostKey::R, GuiKey::R),
    (HostKey::S, GuiKey::S),
    (HostKey::T, GuiKey::T),
    (HostKey::U, GuiKey::U),
    (HostKey::V, GuiKey::V),
    (HostKey::W, GuiKey::W),
    (HostKey::X, GuiKey::X),
    (HostKey::Y, GuiKey::Y),
    (HostKey::Z, GuiKey::Z),
    (HostKey::Space, GuiKey::Space),
    (HostKey::Escape, GuiKey::Escape),
    (HostKey::Enter, GuiKey::Enter),
    (HostKey::Tab, GuiKey::Tab),
    (HostKey::Backspace, GuiKey::Backspace),
    (HostKey::Insert, GuiKey::Insert),
    (HostKey::Delete, GuiKey::Delete),
    (HostKey::Right, GuiKey::RightArrow),
    (HostKey::Left, GuiKey::LeftArrow),
    (HostKey::Down, GuiKey::DownArrow),
    (HostKey::Up, GuiKey::UpArrow),
    (HostKey::PageUp, GuiKey::PageUp),
    (HostKey::PageDown, GuiKey::PageDown),
    (HostKey::Home, GuiKey::Home),
    (HostKey::End, GuiKey::End),
    (HostKey::CapsLock, GuiKey::CapsLock),
    (HostKey::ScrollLock, GuiKey::ScrollLock),
    (HostKey::NumLock, GuiKey::NumLock),
    (HostKey::PrintScreen, GuiKey::PrintScreen),
    (HostKey::Pause, GuiKey::Pause),
    (HostKey::F1, GuiKey::F1),
    (HostKey::F2, GuiKey::F2),
    (HostKey::F3, GuiKey::F3),
    (HostKey::F4, GuiKey::F4),
    (HostKey::F5, GuiKey::F5),
    (HostKey::F6, GuiKey::F6),
    (HostKey::F7, GuiKey::F7),
    (HostKey::F8, GuiKey::F8),
    (HostKey::F9, GuiKey::F9),
    (HostKey::F10, GuiKey::F10),
    (HostKey::F11, GuiKey::F11),
    (HostKey::F12, GuiKey::F12),
    (HostKey::LeftShift, GuiKey::LeftShift),
    (HostKey::LeftControl, GuiKey::LeftCtrl),
    (HostKey::LeftAlt, GuiKey::LeftAlt),
    (HostKey::LeftSuper, GuiKey::LeftSuper),
    (HostKey::RightShift, GuiKey::RightShift),
    (HostKey::RightControl, GuiKey::RightCtrl),
    (HostKey::RightAlt, GuiKey::RightAlt),
    (HostKey::RightSuper, GuiKey::RightSuper),
    (HostKey::KbMenu, GuiKey::Menu),
    (HostKey::LeftBracket, GuiKey::LeftBracket),
    (HostKey::Backslash, GuiKey::Backslash),
    (HostKey::RightBracket, GuiKey::RightBracket),
    (HostKey::Grave, GuiKey::GraveAccent),
    (HostKey::Kp0, GuiKey::Keypad0),
    (HostKey::Kp1, GuiKey::Keypad1),
    (HostKey::Kp2, GuiKey::Keypad2),
    (HostKey::Kp3, GuiKey::Keypad3),
    (HostKey::Kp4, GuiKey::Keypad4),
    (HostKey::Kp5, GuiKey::Keypad5),
    (HostKey::Kp6, GuiKey::Keypad6),
    (HostKey::Kp7, GuiKey::Keypad7),
    (HostKey::Kp8, GuiKey::Keypad8),
    (HostKey::Kp9, GuiKey::Keypad9),
    (HostKey::KpDecimal, GuiKey::KeypadDecimal),
    (HostKey::KpDivide, GuiKey::KeypadDivide),
    (HostKey::KpMultiply, GuiKey::KeypadMultiply),
    (HostKey::KpSubtract, GuiKey::KeypadSubtract),
    (HostKey::KpAdd, GuiKey::KeypadAdd),
    (HostKey::KpEnter, GuiKey::KeypadEnter),
    (HostKey::KpEqual, GuiKey::KeypadEqual),
];

/// Left/right physical key pairs feeding each GUI modifier.
pub const MODIFIER_KEYS: &[(HostKey, HostKey, GuiKey)] = &[
    (HostKey::LeftAlt, HostKey::RightAlt, GuiKey::ModAlt),
    (HostKey::LeftShift, HostKey::RightShift, GuiKey::ModShift),
    (HostKey::LeftSuper, HostKey::RightSuper, GuiKey::ModSuper),
    (HostKey::LeftControl, HostKey::RightControl, GuiKey::ModCtrl),
];

/// Looks up the GUI key for a host key.
pub fn gui_key_for(key: HostKey) -> Option<GuiKey> {
    KEY_MAP
        .iter()
        .find(|(host, _)| *host == key)
        .map(|(_, gui)| *gui)
}

/// Looks up the host key for a GUI key.
///
/// Modifier pseudo-keys have no single host counterpart and return `None`.
pub fn host_key_for(key: GuiKey) -> Option<HostKey> {
    KEY_MAP
        .iter()
        .find(|(_, gui)| *gui == key)
        .map(|(host, _)| *host)
}
