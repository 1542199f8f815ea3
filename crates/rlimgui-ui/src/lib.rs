//! Managed windows for rlimgui-rs.
//!
//! A renderer keeps a [`WindowQueue`] of [`GuiWindow`]s and draws them once
//! per frame. The built-in windows in [`windows`] draw through the
//! [`Widgets`] contract, reached via [`WindowHost`].

#![allow(clippy::must_use_candidate)]

pub mod widgets;
pub mod window;
pub mod windows;

pub use widgets::{WindowFlags, WindowHost, Widgets};
pub use window::{GuiWindow, WindowId, WindowQueue};
pub use windows::{AboutWindow, ChoiceWindow, DemoWindow, PopupWindow, DEFAULT_ICON};
