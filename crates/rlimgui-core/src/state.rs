//! Process-wide current-context marker.
//!
//! Several renderers may coexist, each owning its own GUI context, but the
//! GUI library only has one active context at a time. The bridge assumes a
//! single rendering thread: a renderer is made current on that thread before
//! its input pump or draw replay runs.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Id of the renderer whose context is current; 0 when none is.
static CURRENT_CONTEXT: AtomicU64 = AtomicU64::new(0);

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one renderer's GUI context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

impl ContextId {
    /// Allocates a fresh, never reused id.
    pub fn next() -> Self {
        Self(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx#{}", self.0)
    }
}

/// Marks `id` as the current context.
pub fn make_current(id: ContextId) {
    CURRENT_CONTEXT.store(id.0, Ordering::Release);
}

/// Returns the current context, if any.
pub fn current() -> Option<ContextId> {
    match CURRENT_CONTEXT.load(Ordering::Acquire) {
        0 => None,
        id => Some(ContextId(id)),
    }
}

/// Returns whether `id` is the current context.
pub fn is_current(id: ContextId) -> bool {
    CURRENT_CONTEXT.load(Ordering::Acquire) == id.0
}

/// Clears the marker if `id` holds it.
pub fn clear_current(id: ContextId) {
    let _ = CURRENT_CONTEXT.compare_exchange(id.0, 0, Ordering::AcqRel, Ordering::Acquire);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_context_switching() {
        let a = ContextId::next();
        let b = ContextId::next();
        assert_ne!(a, b);

        make_current(a);
        assert!(is_current(a));
        assert_eq!(current(), Some(a));

        make_current(b);
        assert!(!is_current(a));
        assert!(is_current(b));

        // Clearing a context that is not current leaves the marker alone.
        clear_current(a);
        assert_eq!(current(), Some(b));

        clear_current(b);
        assert_eq!(current(), None);
    }
}
