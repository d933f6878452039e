//! Document scroll lock.
//!
//! The page's overflow flag is shared state with a single writer at a time:
//! whoever holds a [`ScrollLockGuard`]. The guard remembers the value it
//! replaced and puts it back when dropped.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Auto,
    Hidden,
}

/// Handle to the document's overflow flag. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct DocumentScroll {
    overflow: Rc<Cell<Overflow>>,
}

impl DocumentScroll {
    #[must_use]
    pub fn new(initial: Overflow) -> Self {
        Self {
            overflow: Rc::new(Cell::new(initial)),
        }
    }

    #[must_use]
    pub fn overflow(&self) -> Overflow {
        self.overflow.get()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.overflow() == Overflow::Hidden
    }

    /// Hide overflow until the returned guard is dropped.
    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn lock(&self) -> ScrollLockGuard {
        let previous = self.overflow.replace(Overflow::Hidden);
        tracing::debug!(?previous, "scroll locked");
        ScrollLockGuard {
            overflow: Rc::clone(&self.overflow),
            previous,
        }
    }
}

#[derive(Debug)]
pub struct ScrollLockGuard {
    overflow: Rc<Cell<Overflow>>,
    previous: Overflow,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.overflow.set(self.previous);
        tracing::debug!(restored = ?self.previous, "scroll unlocked");
    }
}
