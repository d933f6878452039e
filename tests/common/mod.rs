//! Shared test utilities and fixtures
//!
//! A [`Screen`] renders a real [`App`] into a vt100 virtual terminal with a
//! manual clock, so tests control time and read back what was drawn.

#![allow(dead_code)]

use std::rc::Rc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;

use folio_config::Settings;
use folio_engine::{App, Copier, HitTarget, ManualClock, MemoryClipboard};
use folio_types::{CellPoint, MotionPreference, MotionTimings, UiOptions};

use crate::vt100_backend::VT100Backend;

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 30;

pub fn settings(reduced_motion: bool) -> Settings {
    Settings {
        ui: UiOptions {
            reduced_motion,
            ..UiOptions::default()
        },
        timings: MotionTimings::default().effective(MotionPreference::from_reduced(reduced_motion)),
    }
}

pub struct Screen {
    pub clock: ManualClock,
    pub clipboard: MemoryClipboard,
    pub app: App,
    terminal: Terminal<VT100Backend>,
}

impl Screen {
    pub fn new(settings: Settings) -> Self {
        let clipboard = MemoryClipboard::new();
        Self::with_copier(settings, Copier::new(clipboard.clone(), None), clipboard)
    }

    pub fn with_copier(settings: Settings, copier: Copier, clipboard: MemoryClipboard) -> Self {
        let clock = ManualClock::new();
        let app = App::new(settings, Rc::new(clock.clone()), copier);
        let terminal =
            Terminal::new(VT100Backend::new(WIDTH, HEIGHT)).expect("failed to create terminal");
        Self {
            clock,
            clipboard,
            app,
            terminal,
        }
    }

    /// Draw without reporting the frame to the app.
    pub fn draw(&mut self) -> String {
        let app = &mut self.app;
        self.terminal
            .draw(|frame| folio_tui::draw(frame, app))
            .expect("failed to draw");
        self.terminal.backend().contents()
    }

    /// One iteration of the frame loop: tick, draw, report the frame.
    pub fn frame(&mut self) -> String {
        self.app.tick();
        let contents = self.draw();
        self.app.frame_drawn();
        contents
    }

    /// Advance the clock and run a frame.
    pub fn advance(&mut self, ms: u64) -> String {
        self.clock.advance_ms(ms);
        self.frame()
    }

    pub fn backend(&self) -> &VT100Backend {
        self.terminal.backend()
    }

    pub fn key(&mut self, code: KeyCode) -> bool {
        folio_tui::apply_event(
            &mut self.app,
            Event::Key(KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            }),
        )
    }

    pub fn click(&mut self, point: CellPoint) {
        folio_tui::apply_event(
            &mut self.app,
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: point.x,
                row: point.y,
                modifiers: KeyModifiers::NONE,
            }),
        );
    }

    /// First screen cell whose recorded hit is `target`.
    pub fn find_hit(&self, target: HitTarget) -> Option<CellPoint> {
        (0..HEIGHT)
            .flat_map(|y| (0..WIDTH).map(move |x| CellPoint::new(x, y)))
            .find(|point| self.app.hit_test(*point) == Some(target))
    }

    /// Mount, dismiss with the keyboard, and let the exit and the hero
    /// entrance finish.
    pub fn skip_intro(&mut self) -> String {
        self.draw();
        self.app.frame_drawn();
        self.key(KeyCode::Enter);
        let timings = *self.app.timings();
        self.advance(timings.intro_exit.as_millis() as u64);
        assert!(self.app.is_intro_complete());
        self.advance(timings.section_reveal.as_millis() as u64)
    }
}
