//! Clipboard writes with a terminal fallback.
//!
//! The system clipboard is tried first. When it is unavailable (headless
//! session, SSH, missing display server) the text is sent to the terminal as
//! an OSC 52 sequence, which most modern terminals forward to the host
//! clipboard.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use base64::Engine;
use thiserror::Error;

/// Largest base64 payload emitted in a single OSC 52 sequence.
pub const MAX_OSC52_PAYLOAD: usize = 100_000;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard payload of {len} bytes exceeds {max} bytes")]
    TooLarge { len: usize, max: usize },
    #[error("failed to write clipboard sequence: {0}")]
    Io(#[from] io::Error),
}

pub trait ClipboardBackend {
    fn name(&self) -> &'static str;
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A handle opened on first use and kept until discarded.
struct Retained<C> {
    handle: Option<C>,
}

impl<C> Default for Retained<C> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<C> Retained<C> {
    fn get_or_open(
        &mut self,
        open: impl FnOnce() -> Result<C, ClipboardError>,
    ) -> Result<&mut C, ClipboardError> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => open()?,
        };
        Ok(self.handle.insert(handle))
    }

    fn discard(&mut self) {
        self.handle = None;
    }

    fn is_open(&self) -> bool {
        self.handle.is_some()
    }
}

fn unavailable(err: arboard::Error) -> ClipboardError {
    ClipboardError::Unavailable(err.to_string())
}

/// The desktop clipboard via `arboard`.
///
/// On X11 the copied text is served by the process that owns the selection,
/// so the `arboard::Clipboard` is kept open for as long as this backend lives.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Retained<arboard::Clipboard>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.clipboard.is_open())
            .finish()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self
            .clipboard
            .get_or_open(|| arboard::Clipboard::new().map_err(unavailable))?;
        if let Err(err) = clipboard.set_text(text.to_owned()) {
            // Reopen on the next copy.
            self.clipboard.discard();
            return Err(unavailable(err));
        }
        Ok(())
    }
}

/// Writes `ESC ] 52 ; c ; <base64> BEL` to the terminal.
#[derive(Debug)]
pub struct Osc52Clipboard<W> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

impl<W: Write> ClipboardBackend for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let sequence = osc52_sequence(text);
        if sequence.len() > MAX_OSC52_PAYLOAD {
            return Err(ClipboardError::TooLarge {
                len: sequence.len(),
                max: MAX_OSC52_PAYLOAD,
            });
        }
        self.out.write_all(sequence.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// In-process clipboard. Clones share contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
    broken: bool,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.broken {
            return Err(ClipboardError::Unavailable("no clipboard".to_string()));
        }
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { value: String },
    Failed,
}

impl CopyOutcome {
    #[must_use]
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }

    /// Toast text for this outcome.
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            Self::Copied { value } => format!("Copied: {value}"),
            Self::Failed => "Copy failed".to_string(),
        }
    }
}

/// Primary backend plus an optional fallback. One attempt each, no retry.
pub struct Copier {
    primary: Box<dyn ClipboardBackend>,
    fallback: Option<Box<dyn ClipboardBackend>>,
}

impl std::fmt::Debug for Copier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Copier")
            .field("primary", &self.primary.name())
            .field("fallback", &self.fallback.as_ref().map(|b| b.name()))
            .finish()
    }
}

impl Copier {
    pub fn new(
        primary: impl ClipboardBackend + 'static,
        fallback: Option<Box<dyn ClipboardBackend>>,
    ) -> Self {
        Self {
            primary: Box::new(primary),
            fallback,
        }
    }

    /// System clipboard, falling back to OSC 52 on stdout.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClipboard::default(), Some(Box::new(Osc52Clipboard::stdout())))
    }

    pub fn copy(&mut self, text: &str) -> CopyOutcome {
        let primary_err = match self.primary.set_text(text) {
            Ok(()) => return Self::copied(text, self.primary.name()),
            Err(err) => err,
        };
        tracing::warn!(backend = self.primary.name(), %primary_err, "clipboard write failed");

        let Some(fallback) = self.fallback.as_mut() else {
            return CopyOutcome::Failed;
        };
        match fallback.set_text(text) {
            Ok(()) => Self::copied(text, fallback.name()),
            Err(err) => {
                tracing::warn!(backend = fallback.name(), %err, "clipboard fallback failed");
                CopyOutcome::Failed
            }
        }
    }

    fn copied(text: &str, backend: &'static str) -> CopyOutcome {
        tracing::debug!(backend, "copied to clipboard");
        CopyOutcome::Copied {
            value: text.to_string(),
        }
    }
}
