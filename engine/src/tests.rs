//! Unit tests for the engine crate.

use std::time::Duration;

use folio_config::{EnvOverrides, Settings};
use folio_types::{MotionPreference, RippleOrigin, RoutePhase};

use super::*;

struct Harness {
    clock: ManualClock,
    clipboard: MemoryClipboard,
    app: App,
}

fn settings(reduced: bool) -> Settings {
    let ui = UiOptions {
        reduced_motion: reduced,
        ..UiOptions::default()
    };
    Settings {
        ui,
        timings: MotionTimings::default().effective(MotionPreference::from_reduced(reduced)),
    }
}

fn harness_with(settings: Settings, copier: Copier, clipboard: MemoryClipboard) -> Harness {
    let clock = ManualClock::new();
    let mut app = App::new(settings, Rc::new(clock.clone()), copier);
    app.set_layout(layout(), 20);
    Harness {
        clock,
        clipboard,
        app,
    }
}

fn test_harness(reduced: bool) -> Harness {
    let clipboard = MemoryClipboard::new();
    let copier = Copier::new(clipboard.clone(), None);
    harness_with(settings(reduced), copier, clipboard)
}

fn layout() -> [SectionSpan; 5] {
    let mut top = 0;
    [20, 30, 30, 25, 20].map(|height| {
        let span = SectionSpan { top, height };
        top += height;
        span
    })
}

impl Harness {
    fn advance(&mut self, ms: u64) {
        self.clock.advance_ms(ms);
        self.app.tick();
    }

    /// Mount, dismiss the intro and wait out its exit.
    fn skip_intro(&mut self) {
        self.app.frame_drawn();
        self.app.dismiss_intro(RippleOrigin::Center);
        self.advance(1000);
        assert!(self.app.is_intro_complete());
    }
}

#[test]
fn intro_is_pending_until_first_frame() {
    let mut h = test_harness(false);
    assert_eq!(h.app.intro_phase(), IntroPhase::Pending);
    assert!(!h.app.is_scroll_locked());
    h.advance(10_000);
    assert_eq!(h.app.intro_phase(), IntroPhase::Pending);
    h.app.frame_drawn();
    assert_eq!(h.app.intro_phase(), IntroPhase::Open);
}

#[test]
fn autoclose_completes_without_interaction() {
    let mut h = test_harness(false);
    h.app.frame_drawn();
    h.advance(3000);
    assert!(h.app.intro_phase().is_exiting());
    assert!(!h.app.is_intro_complete());
    h.advance(500);
    assert_eq!(h.app.intro_phase(), IntroPhase::Closed);
    assert!(h.app.intro().is_none());
    assert!(h.app.is_intro_complete());
}

#[test]
fn click_and_autoclose_complete_once() {
    let mut h = test_harness(false);
    h.app.frame_drawn();
    h.app.set_hits(vec![(HitBox::new(10, 10, 12, 1), HitTarget::IntroTakeLook)]);

    h.advance(2950);
    assert!(h.app.click(CellPoint::new(12, 10)));
    let origin = h.app.intro().and_then(|intro| intro.state().ripple_origin);
    assert_eq!(origin, Some(RippleOrigin::Pointer(CellPoint::new(12, 10))));

    // A second click still hits the button but no longer changes anything.
    assert!(h.app.click(CellPoint::new(20, 10)));
    let origin = h.app.intro().and_then(|intro| intro.state().ripple_origin);
    assert_eq!(origin, Some(RippleOrigin::Pointer(CellPoint::new(12, 10))));

    let ctx = h.app.intro_context();
    let mut flips = 0;
    let mut was_complete = ctx.is_intro_complete();
    for _ in 0..100 {
        h.advance(50);
        let complete = ctx.is_intro_complete();
        if complete && !was_complete {
            flips += 1;
        }
        was_complete = complete;
    }
    assert_eq!(flips, 1);
    assert_eq!(h.app.intro_phase(), IntroPhase::Closed);
}

#[test]
fn reduced_motion_completes_immediately() {
    let mut h = test_harness(true);
    h.app.frame_drawn();
    assert_eq!(h.app.intro_phase(), IntroPhase::Open);
    assert!(h.app.dismiss_intro(RippleOrigin::Center));
    assert!(h.app.is_intro_complete());
    assert!(!h.app.is_scroll_locked());
}

#[test]
fn scroll_is_locked_while_intro_is_open() {
    let mut h = test_harness(false);
    h.app.frame_drawn();
    assert!(h.app.is_scroll_locked());
    h.app.scroll_down();
    assert_eq!(h.app.scroll_offset(), 0);

    h.app.dismiss_intro(RippleOrigin::Center);
    h.advance(500);
    assert!(!h.app.is_scroll_locked());
    h.app.scroll_down();
    assert_eq!(h.app.scroll_offset(), SCROLL_STEP);
}

#[test]
fn hero_entrance_waits_for_intro() {
    let mut h = test_harness(false);
    h.app.frame_drawn();
    h.app.tick();
    assert!(!h.app.sections().should_animate(SectionId::Hero));
    h.app.dismiss_intro(RippleOrigin::Center);
    h.advance(500);
    assert!(h.app.sections().should_animate(SectionId::Hero));
}

#[test]
fn navigation_waits_for_link_delay_then_covers() {
    let mut h = test_harness(false);
    h.skip_intro();

    h.app.navigate(SectionId::Projects);
    assert_eq!(h.app.route_state().phase, RoutePhase::Idle);
    h.advance(120);
    assert_eq!(h.app.location().as_str(), "/#projects");
    assert_eq!(h.app.route_state().phase, RoutePhase::Cover);
    assert_eq!(h.app.scroll_offset(), 20);

    h.advance(520);
    assert_eq!(h.app.route_state().phase, RoutePhase::Reveal);
    h.advance(480);
    assert_eq!(h.app.route_state().phase, RoutePhase::Idle);
}

#[test]
fn navigation_mid_reveal_restarts_cycle() {
    let mut h = test_harness(false);
    h.skip_intro();
    h.app.navigate(SectionId::Projects);
    h.advance(120);
    h.advance(600);
    assert_eq!(h.app.route_state().phase, RoutePhase::Reveal);

    h.app.navigate(SectionId::Contact);
    h.advance(120);
    assert_eq!(h.app.route_state().phase, RoutePhase::Cover);
    // Past the first cycle's idle deadline.
    h.advance(300);
    assert_eq!(h.app.route_state().phase, RoutePhase::Cover);
    h.advance(220);
    assert_eq!(h.app.route_state().phase, RoutePhase::Reveal);
}

#[test]
fn reduced_motion_navigation_is_immediate() {
    let mut h = test_harness(true);
    h.app.frame_drawn();
    h.app.dismiss_intro(RippleOrigin::Center);
    h.app.navigate(SectionId::Skills);
    assert_eq!(h.app.location().as_str(), "/#skills");
    assert_eq!(h.app.route_state().phase, RoutePhase::Idle);
    assert_eq!(h.app.current_section(), Some(SectionId::Skills));
}

#[test]
fn copy_line_id_reaches_clipboard() {
    let mut h = test_harness(false);
    let outcome = h.app.copy_contact(ContactKind::Line);
    assert_eq!(
        outcome,
        Some(CopyOutcome::Copied {
            value: "bjsjm000".to_string()
        })
    );
    assert_eq!(h.clipboard.contents().as_deref(), Some("bjsjm000"));
    assert_eq!(h.app.toast().map(|t| t.message.as_str()), Some("Copied: bjsjm000"));

    h.advance(1599);
    assert!(h.app.toast().is_some());
    h.advance(1);
    assert!(h.app.toast().is_none());
}

#[test]
fn copy_without_any_clipboard_reports_failure() {
    let copier = Copier::new(
        MemoryClipboard::unavailable(),
        Some(Box::new(MemoryClipboard::unavailable())),
    );
    let mut h = harness_with(settings(false), copier, MemoryClipboard::new());
    assert_eq!(h.app.copy_contact(ContactKind::Email), Some(CopyOutcome::Failed));
    assert_eq!(h.app.toast().map(|t| t.message.as_str()), Some("Copy failed"));
}

#[test]
fn copy_falls_back_when_system_clipboard_fails() {
    let fallback = MemoryClipboard::new();
    let copier = Copier::new(MemoryClipboard::unavailable(), Some(Box::new(fallback.clone())));
    let mut h = harness_with(settings(false), copier, fallback);
    assert!(h.app.copy_contact(ContactKind::Line).is_some_and(|o| o.is_copied()));
    assert_eq!(h.clipboard.contents().as_deref(), Some("bjsjm000"));
}

#[test]
fn link_contacts_have_nothing_to_copy() {
    let mut h = test_harness(false);
    assert_eq!(h.app.copy_contact(ContactKind::GitHub), None);
    assert!(h.app.toast().is_none());
}

#[test]
fn clicks_behind_open_intro_are_ignored() {
    let mut h = test_harness(false);
    h.app.frame_drawn();
    h.app.set_hits(vec![(HitBox::new(0, 0, 5, 1), HitTarget::CarouselNext)]);
    assert!(h.app.click(CellPoint::new(1, 0)));
    assert_eq!(h.app.carousel().active(), 0);

    h.app.dismiss_intro(RippleOrigin::Center);
    h.advance(500);
    h.app.click(CellPoint::new(1, 0));
    assert_eq!(h.app.carousel().active(), 1);
}

#[test]
fn hit_test_prefers_topmost() {
    let mut h = test_harness(false);
    h.app.set_hits(vec![
        (HitBox::new(0, 0, 10, 10), HitTarget::Nav(SectionId::Hero)),
        (HitBox::new(2, 2, 2, 1), HitTarget::Copy(ContactKind::Line)),
    ]);
    assert_eq!(
        h.app.hit_test(CellPoint::new(2, 2)),
        Some(HitTarget::Copy(ContactKind::Line))
    );
    assert_eq!(
        h.app.hit_test(CellPoint::new(8, 8)),
        Some(HitTarget::Nav(SectionId::Hero))
    );
    assert_eq!(h.app.hit_test(CellPoint::new(20, 20)), None);
}

#[test]
fn scroll_clamps_to_document() {
    let mut h = test_harness(false);
    h.skip_intro();
    h.app.scroll_by(10_000);
    assert_eq!(h.app.scroll_offset(), h.app.max_scroll());
    assert_eq!(h.app.max_scroll(), 125 - 20);
    h.app.scroll_page_up();
    assert_eq!(h.app.scroll_offset(), 125 - 40);
    h.app.scroll_by(-10_000);
    assert_eq!(h.app.scroll_offset(), 0);
}

#[test]
fn settings_flow_from_environment() {
    let env = EnvOverrides {
        reduced_motion: Some(true),
    };
    let settings = Settings::resolve(None, env);
    let mut h = harness_with(settings, Copier::new(MemoryClipboard::new(), None), MemoryClipboard::new());
    assert!(h.app.ui_options().reduced_motion);
    assert_eq!(h.app.timings().intro_exit, Duration::ZERO);
    h.app.frame_drawn();
    h.advance(3000);
    assert!(h.app.is_intro_complete());
}
