//! Context creation, switching and the clipboard bridge.
//!
//! The current-context marker is process-wide, so these tests take a lock.

mod common;

use std::sync::Mutex;

use common::{renderer, MockGui, MockHost, SharedClipboard};
use rlimgui::{current_context, ImGuiRenderer, RendererOptions, Vec2};

static CONTEXT_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_context_lifecycle() {
    let _guard = CONTEXT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let mut first = renderer();
    assert!(first.is_current());
    assert_eq!(first.gui().made_current, 1);

    let setup = first.gui().setup.clone().unwrap();
    assert!(setup.has_mouse_cursors);
    assert_eq!(setup.ini_filename, None);
    assert_eq!(setup.display_size, Vec2::new(800.0, 480.0));
    assert_eq!(setup.framebuffer_scale, Vec2::ONE);
    assert_eq!(setup.mouse_pos, Vec2::ZERO);
    assert!(setup.load_default_font);

    let options = RendererOptions::from_json(r#"{"ini_filename": "layout.ini"}"#).unwrap();
    let mut second = ImGuiRenderer::with_options(
        MockGui::default(),
        MockHost::default(),
        SharedClipboard::default(),
        &options,
    );
    assert!(second.is_current());
    assert!(!first.is_current());
    assert_ne!(first.id(), second.id());
    assert_eq!(
        second.gui().setup.as_ref().unwrap().ini_filename.as_deref(),
        Some("layout.ini")
    );

    first.make_current();
    assert!(first.is_current());
    assert!(!second.is_current());
    assert_eq!(first.gui().made_current, 2);

    // Shutting down a renderer that is not current leaves the marker alone.
    second.shutdown();
    assert!(first.is_current());

    first.shutdown();
    assert!(!first.is_current());
}

#[test]
fn test_clipboard_bridge() {
    let _guard = CONTEXT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let clipboard = SharedClipboard::default();
    let mut r = ImGuiRenderer::new(MockGui::default(), MockHost::default(), clipboard.clone());
    let backend = r.gui_mut().clipboard.as_mut().unwrap();

    assert_eq!(backend.get(), "");

    backend.set("copied");
    assert_eq!(clipboard.0.borrow().as_deref(), Some("copied"));
    assert_eq!(backend.get(), "copied");
}

#[test]
fn test_drop_releases_like_shutdown() {
    let _guard = CONTEXT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let mut r = renderer();
    let font = r.recreate_font_texture().unwrap();
    let raw = r.textures().resolve(font).unwrap().id;
    let unloaded = r.host().unloaded.clone();
    assert_eq!(current_context(), Some(r.id()));

    drop(r);
    assert_eq!(*unloaded.borrow(), vec![raw]);
    assert_eq!(current_context(), None);
}

#[test]
fn test_shutdown_then_drop_releases_once() {
    let _guard = CONTEXT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let mut first = renderer();
    first.recreate_font_texture().unwrap();
    let unloaded = first.host().unloaded.clone();
    first.shutdown();
    first.shutdown();

    let second = renderer();
    drop(first);
    assert_eq!(unloaded.borrow().len(), 1);
    // The stale renderer must not clear a newer context's marker.
    assert!(second.is_current());
}
