//! Intro completion signal.
//!
//! An [`IntroSignal`] is owned by the scope that outlives the overlay and the
//! sections. It hands out [`IntroContext`] handles; only the intro's
//! completion path calls [`IntroContext::set_complete`]. A detached context,
//! one created outside any provider, always reports completion.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct IntroSignal {
    complete: Rc<Cell<bool>>,
}

impl IntroSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn context(&self) -> IntroContext {
        IntroContext {
            complete: Some(Rc::clone(&self.complete)),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete.get()
    }
}

#[derive(Debug, Clone, Default)]
pub struct IntroContext {
    complete: Option<Rc<Cell<bool>>>,
}

impl IntroContext {
    /// A context with no provider above it.
    #[must_use]
    pub fn detached() -> Self {
        Self { complete: None }
    }

    #[must_use]
    pub fn is_intro_complete(&self) -> bool {
        self.complete.as_ref().is_none_or(|flag| flag.get())
    }

    /// Flip the signal to complete. Later calls do nothing.
    pub fn set_complete(&self) {
        if let Some(flag) = &self.complete
            && !flag.replace(true)
        {
            tracing::info!("intro complete");
        }
    }
}
