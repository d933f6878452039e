//! Input handling for the Folio TUI.
//!
//! Terminal events are read on a blocking task and forwarded over a bounded
//! channel; the frame loop drains a bounded number of them per frame.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use folio_engine::{App, HitTarget};
use folio_types::{CellPoint, ContactKind, RippleOrigin, SectionId};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024;
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

#[derive(Debug)]
pub enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    /// Start reading terminal events. Must be called inside a tokio runtime.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    /// A pump fed by the caller instead of the terminal.
    #[must_use]
    pub fn from_channel(rx: mpsc::Receiver<InputMsg>) -> Self {
        Self {
            rx,
            stop: Arc::new(AtomicBool::new(false)),
            join: None,
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input into `app`. Returns `true` when the app asked to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        processed += 1;
        if apply_event(app, ev) {
            return Ok(true);
        }
    }
    if processed == MAX_EVENTS_PER_FRAME {
        debug!(backlog = input.rx.len(), "input budget exhausted for this frame");
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns `true` when the app should quit.
pub fn apply_event(app: &mut App, ev: Event) -> bool {
    match ev {
        Event::Key(key) => apply_key(app, key),
        Event::Mouse(mouse) => {
            apply_mouse(app, mouse);
            false
        }
        // The next draw re-measures the layout.
        _ => false,
    }
}

fn apply_key(app: &mut App, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        app.request_quit();
        return true;
    }

    // The overlay swallows everything except its own actions and quit.
    if app.intro_phase().is_open() {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => {
                app.dismiss_intro(RippleOrigin::Center);
            }
            KeyCode::Char('q') => {
                app.request_quit();
                return true;
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            return true;
        }
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_page_down(),
        KeyCode::PageUp => app.scroll_page_up(),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to(SectionId::Hero),
        KeyCode::End | KeyCode::Char('G') => app.scroll_by(i64::from(u32::MAX)),
        KeyCode::Char('h') | KeyCode::Left => app.prev_project(),
        KeyCode::Char('l') | KeyCode::Right => app.next_project(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = usize::from(c as u8 - b'1');
            if let Some(section) = SectionId::ALL.get(index) {
                app.activate(HitTarget::Nav(*section), None);
            }
        }
        KeyCode::Char('c') => app.activate(HitTarget::Copy(ContactKind::Line), None),
        KeyCode::Char('e') => app.activate(HitTarget::Copy(ContactKind::Email), None),
        KeyCode::Char('p') => app.activate(HitTarget::Copy(ContactKind::Phone), None),
        _ => {}
    }
    false
}

fn apply_mouse(app: &mut App, mouse: MouseEvent) {
    let point = CellPoint::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.click(point);
        }
        MouseEventKind::ScrollDown => app.scroll_down(),
        MouseEventKind::ScrollUp => app.scroll_up(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crossterm::event::{KeyEventState, MouseEvent};
    use folio_engine::{Copier, ManualClock, MemoryClipboard, SectionSpan};
    use folio_engine::folio_config::Settings;
    use folio_types::{HitBox, IntroPhase};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click(x: u16, y: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn app() -> (ManualClock, MemoryClipboard, App) {
        let clock = ManualClock::new();
        let clipboard = MemoryClipboard::new();
        let mut app = App::new(
            Settings::default(),
            Rc::new(clock.clone()),
            Copier::new(clipboard.clone(), None),
        );
        let mut top = 0;
        let spans = [20, 30, 30, 25, 20].map(|height| {
            let span = SectionSpan { top, height };
            top += height;
            span
        });
        app.set_layout(spans, 20);
        app.frame_drawn();
        (clock, clipboard, app)
    }

    #[test]
    fn enter_dismisses_intro() {
        let (clock, _, mut app) = app();
        assert!(!apply_event(&mut app, key(KeyCode::Enter)));
        assert!(app.intro_phase().is_exiting());
        clock.advance_ms(500);
        app.tick();
        assert_eq!(app.intro_phase(), IntroPhase::Closed);
    }

    #[test]
    fn keys_are_swallowed_behind_intro() {
        let (_, clipboard, mut app) = app();
        apply_event(&mut app, key(KeyCode::Char('c')));
        assert_eq!(clipboard.contents(), None);
        apply_event(&mut app, key(KeyCode::Char('l')));
        assert_eq!(app.carousel().active(), 0);
    }

    #[test]
    fn copy_and_carousel_keys_after_intro() {
        let (clock, clipboard, mut app) = app();
        apply_event(&mut app, key(KeyCode::Esc));
        clock.advance_ms(500);
        app.tick();

        apply_event(&mut app, key(KeyCode::Char('c')));
        assert_eq!(clipboard.contents().as_deref(), Some("bjsjm000"));
        apply_event(&mut app, key(KeyCode::Char('h')));
        assert_eq!(app.carousel().active(), app.resume().projects.len() - 1);
    }

    #[test]
    fn number_keys_navigate() {
        let (clock, _, mut app) = app();
        apply_event(&mut app, key(KeyCode::Enter));
        clock.advance_ms(500);
        app.tick();
        apply_event(&mut app, key(KeyCode::Char('4')));
        clock.advance_ms(120);
        app.tick();
        assert_eq!(app.location().as_str(), "/#skills");
        assert_eq!(app.scroll_offset(), 80);
    }

    #[test]
    fn left_click_hits_recorded_target() {
        let (_, _, mut app) = app();
        app.set_hits(vec![(HitBox::new(10, 5, 8, 1), HitTarget::IntroSkip)]);
        apply_event(&mut app, click(12, 5));
        assert_eq!(
            app.intro_phase().ripple_origin(),
            Some(RippleOrigin::Pointer(CellPoint::new(12, 5)))
        );
    }

    #[test]
    fn ctrl_c_quits_even_behind_intro() {
        let (_, _, mut app) = app();
        let ev = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert!(apply_event(&mut app, ev));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn handle_events_drains_channel() {
        let (tx, rx) = mpsc::channel(8);
        let mut pump = InputPump::from_channel(rx);
        let (_, _, mut app) = app();
        tx.send(InputMsg::Event(key(KeyCode::Char('x')))).await.unwrap();
        tx.send(InputMsg::Event(key(KeyCode::Char('q')))).await.unwrap();
        assert!(handle_events(&mut app, &mut pump).unwrap());
    }

    #[tokio::test]
    async fn handle_events_surfaces_reader_errors() {
        let (tx, rx) = mpsc::channel(8);
        let mut pump = InputPump::from_channel(rx);
        let (_, _, mut app) = app();
        tx.send(InputMsg::Error("boom".to_string())).await.unwrap();
        let err = handle_events(&mut app, &mut pump).unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
