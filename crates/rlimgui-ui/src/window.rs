//! Managed windows and the queue that drives them.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WINDOW_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity of a managed window.
///
/// Appended to labels so that several windows with the same title do not
/// collide inside the GUI library.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowId(String);

impl WindowId {
    pub fn new() -> Self {
        let n = NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("{n:016x}"))
    }

    /// `"{title} ##{id}"`: shows `title`, hashes on the id.
    pub fn label(&self, title: &str) -> String {
        format!("{title} ##{}", self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A window drawn once per frame while it is open.
///
/// `R` is the renderer handed to the draw callback, so window code can use
/// the bridge (load textures, open further windows) while drawing.
pub trait GuiWindow<R: ?Sized> {
    fn is_open(&self) -> bool;

    fn close(&mut self);

    fn draw(&mut self, renderer: &mut R);
}

/// Pending queue plus active list of managed windows.
///
/// Windows opened during a draw pass wait in the pending queue and are first
/// drawn on the next pass. A window whose open flag is false at the start of
/// its turn is skipped and removed once the pass completes.
pub struct WindowQueue<R: ?Sized> {
    pending: VecDeque<Box<dyn GuiWindow<R>>>,
    active: Vec<Box<dyn GuiWindow<R>>>,
    /// Set by [`WindowQueue::close_all`], consumed by [`WindowQueue::absorb`].
    close_requested: bool,
}

impl<R: ?Sized> Default for WindowQueue<R> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
            active: Vec::new(),
            close_requested: false,
        }
    }
}

impl<R: ?Sized> WindowQueue<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a window; it becomes active on the next [`WindowQueue::draw`].
    pub fn open(&mut self, window: Box<dyn GuiWindow<R>>) {
        self.pending.push_back(window);
    }

    /// Promotes pending windows, draws every open one, then drops closed ones.
    pub fn draw(&mut self, renderer: &mut R) {
        self.close_requested = false;
        self.active.extend(self.pending.drain(..));

        let mut keep = Vec::with_capacity(self.active.len());
        for window in &mut self.active {
            if window.is_open() {
                window.draw(renderer);
                keep.push(true);
            } else {
                keep.push(false);
            }
        }

        let before = self.active.len();
        let mut keep = keep.into_iter();
        self.active.retain(|_| keep.next().unwrap_or(true));
        if self.active.len() != before {
            log::debug!("removed {} closed windows", before - self.active.len());
        }
    }

    /// Moves everything queued in `other` to the back of this queue's pending list.
    ///
    /// If [`WindowQueue::close_all`] was called on `other`, every window
    /// already in this queue is closed first.
    pub fn absorb(&mut self, other: &mut WindowQueue<R>) {
        if std::mem::take(&mut other.close_requested) {
            self.close_all();
            self.close_requested = false;
        }
        self.pending.extend(other.active.drain(..));
        self.pending.extend(other.pending.drain(..));
    }

    /// Windows drawn on the last pass or still open.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Closes every window; they are removed on the next pass.
    pub fn close_all(&mut self) {
        for window in self.active.iter_mut().chain(self.pending.iter_mut()) {
            window.close();
        }
        self.close_requested = true;
    }
}
