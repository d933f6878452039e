//! Application state for Folio, without any terminal dependency.
//!
//! [`App`] wires the intro sequencer, the completion signal, the router and
//! route-transition watcher, section gates, the carousel, the clipboard and
//! the toast together. The TUI drives it: input handlers call the action
//! methods, the frame loop calls [`App::tick`] and then draws from the
//! accessors.

use std::rc::Rc;
use std::time::Instant;

use folio_config::Settings;
use folio_types::{
    CellPoint, ContactKind, HitBox, IntroPhase, Location, MotionTimings, Resume,
    RouteTransitionState, SectionId, UiOptions,
};

mod carousel;
mod clipboard;
mod clock;
mod intro;
mod route;
mod router;
mod scroll_lock;
mod sections;
mod signal;
mod timer;
mod toast;

pub use carousel::Carousel;
pub use clipboard::{
    ClipboardBackend, ClipboardError, Copier, CopyOutcome, MAX_OSC52_PAYLOAD, MemoryClipboard,
    Osc52Clipboard, SystemClipboard, osc52_sequence,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use intro::{CompletionCallback, IntroSequencer, IntroState};
pub use route::RouteTransitionWatcher;
pub use router::{LocationWatch, Router};
pub use scroll_lock::{DocumentScroll, Overflow, ScrollLockGuard};
pub use sections::{Entrance, SectionSpan, Sections, Viewport};
pub use signal::{IntroContext, IntroSignal};
pub use timer::{TimerId, TimerQueue};
pub use toast::{Toast, ToastSlot};

pub use folio_config;
pub use folio_types;

/// Rows moved by a single scroll step.
pub const SCROLL_STEP: u32 = 3;

/// Something clickable recorded by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    IntroTakeLook,
    IntroSkip,
    Nav(SectionId),
    CarouselPrev,
    CarouselNext,
    CarouselDot(usize),
    Copy(ContactKind),
}

pub struct App {
    clock: Rc<dyn Clock>,
    ui: UiOptions,
    timings: MotionTimings,
    resume: &'static Resume,
    started_at: Instant,
    frames_drawn: u64,

    scroll: DocumentScroll,
    signal: IntroSignal,
    intro_ctx: IntroContext,
    intro: Option<IntroSequencer>,

    router: Router,
    nav: LocationWatch,
    route: RouteTransitionWatcher,

    sections: Sections,
    scroll_offset: u32,
    viewport_height: u32,
    carousel: Carousel,

    copier: Copier,
    toast: ToastSlot,

    hits: Vec<(HitBox, HitTarget)>,
    should_quit: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("ui", &self.ui)
            .field("intro", &self.intro)
            .field("route", &self.route.state())
            .field("scroll_offset", &self.scroll_offset)
            .field("carousel", &self.carousel)
            .finish_non_exhaustive()
    }
}

impl App {
    #[must_use]
    pub fn new(settings: Settings, clock: Rc<dyn Clock>, copier: Copier) -> Self {
        let Settings { ui, timings } = settings;
        let resume = folio_types::resume();
        let now = clock.now();

        let scroll = DocumentScroll::default();
        let signal = IntroSignal::new();
        let intro_ctx = signal.context();
        let completion = signal.context();
        let intro = IntroSequencer::new(&timings, scroll.clone())
            .with_on_complete(move || completion.set_complete());

        let router = Router::new(Location::root(), timings.link_delay);
        let nav = router.subscribe();
        let route = RouteTransitionWatcher::new(router.subscribe(), &timings);

        Self {
            clock,
            ui,
            timings,
            resume,
            started_at: now,
            frames_drawn: 0,
            scroll,
            signal,
            intro_ctx,
            intro: Some(intro),
            router,
            nav,
            route,
            sections: Sections::new(timings.section_reveal),
            scroll_offset: 0,
            viewport_height: 0,
            carousel: Carousel::new(resume.projects.len()),
            copier,
            toast: ToastSlot::new(timings.toast),
            hits: Vec::new(),
            should_quit: false,
        }
    }

    /// Real clock and the system clipboard.
    #[must_use]
    pub fn with_system(settings: Settings) -> Self {
        Self::new(settings, Rc::new(SystemClock), Copier::system())
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui
    }

    #[must_use]
    pub fn timings(&self) -> &MotionTimings {
        &self.timings
    }

    #[must_use]
    pub fn resume(&self) -> &'static Resume {
        self.resume
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Frame lifecycle
    // ------------------------------------------------------------------

    /// Called after every completed draw. The first call mounts the intro and
    /// the sections.
    pub fn frame_drawn(&mut self) {
        self.frames_drawn = self.frames_drawn.saturating_add(1);
        if self.frames_drawn > 1 {
            return;
        }
        let now = self.now();
        tracing::info!("first frame drawn, mounting");
        if let Some(intro) = self.intro.as_mut() {
            intro.mount(now);
        }
        self.sections.mount();
        self.refresh_sections(now);
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.frames_drawn > 0
    }

    /// Fire due timers and react to location changes.
    pub fn tick(&mut self) {
        let now = self.now();

        if let Some(intro) = self.intro.as_mut() {
            intro.advance(now);
            if intro.phase().is_closed() {
                self.intro = None;
            }
        }

        self.router.advance(now);
        self.route.poll(now);
        if let Some(location) = self.nav.changed()
            && let Some(section) = location.section()
        {
            self.scroll_to(section);
        }

        self.toast.advance(now);
        self.refresh_sections(now);
    }

    fn refresh_sections(&mut self, now: Instant) {
        let viewport = self.viewport();
        self.sections.update(viewport, &self.intro_ctx, now);
    }

    // ------------------------------------------------------------------
    // Intro
    // ------------------------------------------------------------------

    /// The live sequencer; `None` once the intro has closed.
    #[must_use]
    pub fn intro(&self) -> Option<&IntroSequencer> {
        self.intro.as_ref()
    }

    #[must_use]
    pub fn intro_phase(&self) -> IntroPhase {
        self.intro
            .as_ref()
            .map_or(IntroPhase::Closed, IntroSequencer::phase)
    }

    #[must_use]
    pub fn intro_context(&self) -> IntroContext {
        self.signal.context()
    }

    #[must_use]
    pub fn is_intro_complete(&self) -> bool {
        self.intro_ctx.is_intro_complete()
    }

    pub fn dismiss_intro(&mut self, origin: folio_types::RippleOrigin) -> bool {
        let now = self.now();
        let dismissed = self
            .intro
            .as_mut()
            .is_some_and(|intro| intro.dismiss(origin, now));
        if dismissed {
            self.tick();
        }
        dismissed
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll.is_locked()
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    #[must_use]
    pub fn location(&self) -> Location {
        self.router.location()
    }

    pub fn navigate(&mut self, section: SectionId) {
        let now = self.now();
        self.router.navigate(Location::for_section(section), now);
        self.tick();
    }

    #[must_use]
    pub fn route_state(&self) -> RouteTransitionState {
        self.route.state()
    }

    #[must_use]
    pub fn route_phase_started(&self) -> Option<Instant> {
        self.route.phase_started()
    }

    // ------------------------------------------------------------------
    // Scrolling and layout
    // ------------------------------------------------------------------

    /// Record where each section landed in the last layout pass.
    pub fn set_layout(&mut self, spans: [SectionSpan; 5], viewport_height: u32) {
        self.sections.set_spans(spans);
        self.viewport_height = viewport_height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport {
            top: self.scroll_offset,
            height: self.viewport_height,
        }
    }

    #[must_use]
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    #[must_use]
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    #[must_use]
    pub fn max_scroll(&self) -> u32 {
        self.sections
            .document_height()
            .saturating_sub(self.viewport_height)
    }

    /// Scroll by `delta` rows. Ignored while the intro holds the scroll lock.
    pub fn scroll_by(&mut self, delta: i64) {
        if self.scroll.is_locked() {
            return;
        }
        let target = i64::from(self.scroll_offset).saturating_add(delta);
        self.scroll_offset = target.clamp(0, i64::from(self.max_scroll())) as u32;
        let now = self.now();
        self.refresh_sections(now);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_by(-i64::from(SCROLL_STEP));
    }

    pub fn scroll_down(&mut self) {
        self.scroll_by(i64::from(SCROLL_STEP));
    }

    pub fn scroll_page_up(&mut self) {
        self.scroll_by(-i64::from(self.viewport_height.max(1)));
    }

    pub fn scroll_page_down(&mut self) {
        self.scroll_by(i64::from(self.viewport_height.max(1)));
    }

    pub fn scroll_to(&mut self, section: SectionId) {
        let top = self.sections.span(section).top;
        self.scroll_by(i64::from(top) - i64::from(self.scroll_offset));
    }

    /// The section at the top of the viewport.
    #[must_use]
    pub fn current_section(&self) -> Option<SectionId> {
        self.sections.section_at(self.scroll_offset)
    }

    // ------------------------------------------------------------------
    // Projects carousel
    // ------------------------------------------------------------------

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn next_project(&mut self) {
        let now = self.now();
        self.carousel.next(now);
    }

    pub fn prev_project(&mut self) {
        let now = self.now();
        self.carousel.prev(now);
    }

    pub fn select_project(&mut self, index: usize) {
        let now = self.now();
        self.carousel.select(index, now);
    }

    // ------------------------------------------------------------------
    // Contact
    // ------------------------------------------------------------------

    /// Copy a contact value and show the outcome as a toast. Link-only
    /// contacts have nothing to copy and return `None`.
    pub fn copy_contact(&mut self, kind: ContactKind) -> Option<CopyOutcome> {
        let item = self.resume.profile.contacts.item(kind)?;
        let value = item.copy?;
        Some(self.copy_text(value))
    }

    pub fn copy_text(&mut self, text: &str) -> CopyOutcome {
        let outcome = self.copier.copy(text);
        let now = self.now();
        self.toast.show(outcome.notice(), now);
        outcome
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.current()
    }

    // ------------------------------------------------------------------
    // Hit testing
    // ------------------------------------------------------------------

    /// Replace the click targets recorded during the last draw.
    pub fn set_hits(&mut self, hits: Vec<(HitBox, HitTarget)>) {
        self.hits = hits;
    }

    /// Topmost target under `point`; later entries are drawn on top.
    #[must_use]
    pub fn hit_test(&self, point: CellPoint) -> Option<HitTarget> {
        self.hits
            .iter()
            .rev()
            .find(|(hit, _)| hit.contains(point))
            .map(|(_, target)| *target)
    }

    /// Act on a click at `point`. Returns `true` if something was hit.
    pub fn click(&mut self, point: CellPoint) -> bool {
        let Some(target) = self.hit_test(point) else {
            return false;
        };
        self.activate(target, Some(point));
        true
    }

    pub fn activate(&mut self, target: HitTarget, point: Option<CellPoint>) {
        use folio_types::RippleOrigin;

        // While the overlay is up only its own buttons respond.
        if self.intro_phase().is_open()
            && !matches!(target, HitTarget::IntroTakeLook | HitTarget::IntroSkip)
        {
            return;
        }
        match target {
            HitTarget::IntroTakeLook | HitTarget::IntroSkip => {
                let origin = point.map_or(RippleOrigin::Center, RippleOrigin::Pointer);
                self.dismiss_intro(origin);
            }
            HitTarget::Nav(section) => self.navigate(section),
            HitTarget::CarouselPrev => self.prev_project(),
            HitTarget::CarouselNext => self.next_project(),
            HitTarget::CarouselDot(index) => self.select_project(index),
            HitTarget::Copy(kind) => {
                self.copy_contact(kind);
            }
        }
    }
}

#[cfg(test)]
mod tests;
