//! Built-in windows.

mod about;
mod choice;
mod demo;
mod popup;

pub use about::{AboutWindow, DEFAULT_ICON};
pub use choice::ChoiceWindow;
pub use demo::DemoWindow;
pub use popup::PopupWindow;

#[cfg(test)]
pub(crate) mod testing;
