//! Clipboard bridge installed into every context.

use rlimgui_core::{Clipboard, ClipboardBackend};

/// Forwards the GUI library's clipboard callbacks to the host clipboard.
#[derive(Debug)]
pub struct HostClipboard<C> {
    clipboard: C,
}

impl<C: Clipboard> HostClipboard<C> {
    pub fn new(clipboard: C) -> Self {
        Self { clipboard }
    }
}

impl<C: Clipboard> ClipboardBackend for HostClipboard<C> {
    /// An empty or unavailable host clipboard reads as the empty string.
    fn get(&mut self) -> String {
        self.clipboard.clipboard_text().unwrap_or_default()
    }

    fn set(&mut self, text: &str) {
        self.clipboard.set_clipboard_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Slot(Option<String>);

    impl Clipboard for Slot {
        fn clipboard_text(&mut self) -> Option<String> {
            self.0.clone()
        }

        fn set_clipboard_text(&mut self, text: &str) {
            self.0 = Some(text.to_owned());
        }
    }

    #[test]
    fn test_empty_clipboard_reads_as_empty_string() {
        let mut backend = HostClipboard::new(Slot::default());
        assert_eq!(backend.get(), "");
    }

    #[test]
    fn test_set_then_get() {
        let mut backend = HostClipboard::new(Slot::default());
        backend.set("héllo");
        assert_eq!(backend.get(), "héllo");
    }
}
