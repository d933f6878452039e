//! Navigation through the nav bar and number keys, and the route cover.

use crossterm::event::KeyCode;
use folio_engine::HitTarget;
use folio_types::{RoutePhase, SectionId};

use crate::common::{HEIGHT, Screen, settings};

#[test]
fn nav_click_covers_then_reveals_target() {
    let mut screen = Screen::new(settings(false));
    screen.skip_intro();

    let link = screen
        .find_hit(HitTarget::Nav(SectionId::Experience))
        .expect("nav link recorded");
    screen.click(link);
    assert_eq!(screen.app.location().as_str(), "/");

    screen.advance(120);
    assert_eq!(screen.app.location().as_str(), "/#experience");
    assert_eq!(screen.app.route_state().phase, RoutePhase::Cover);
    assert_eq!(screen.app.current_section(), Some(SectionId::Experience));

    screen.advance(300);
    let middle = screen.backend().row_text(HEIGHT / 2);
    assert!(middle.contains("Loading next scene"), "{middle}");

    screen.advance(220);
    assert_eq!(screen.app.route_state().phase, RoutePhase::Reveal);
    screen.advance(480);
    assert_eq!(screen.app.route_state().phase, RoutePhase::Idle);

    let contents = screen.advance(700);
    assert!(!contents.contains("Loading next scene"));
    assert!(contents.contains("Experience Timeline"), "{contents}");
    assert!(contents.contains("/#experience"));
}

#[test]
fn number_key_navigates_and_highlights_nav() {
    let mut screen = Screen::new(settings(false));
    screen.skip_intro();

    screen.key(KeyCode::Char('2'));
    screen.advance(120);
    assert_eq!(screen.app.location().as_str(), "/#projects");
    assert_eq!(screen.app.current_section(), Some(SectionId::Projects));
    let contents = screen.advance(2000);
    assert!(contents.contains("Projects Showcase"), "{contents}");
    assert!(contents.contains("Smart Farm"), "{contents}");
}

#[test]
fn reduced_motion_navigation_skips_the_cover() {
    let mut screen = Screen::new(settings(true));
    screen.skip_intro();

    screen.key(KeyCode::Char('3'));
    assert_eq!(screen.app.location().as_str(), "/#experience");
    assert_eq!(screen.app.route_state().phase, RoutePhase::Idle);
    let contents = screen.frame();
    assert!(!contents.contains("Loading next scene"));
    assert!(contents.contains("Experience Timeline"), "{contents}");
}

#[test]
fn carousel_controls_change_the_card() {
    let mut screen = Screen::new(settings(false));
    screen.skip_intro();
    screen.key(KeyCode::Char('2'));
    screen.advance(120);
    screen.advance(2000);

    let next = screen
        .find_hit(HitTarget::CarouselNext)
        .expect("next control recorded");
    screen.click(next);
    assert_eq!(screen.app.carousel().active(), 1);
    let contents = screen.frame();
    assert!(contents.contains("5G Auto Bus"), "{contents}");

    let last_dot = screen
        .find_hit(HitTarget::CarouselDot(6))
        .expect("dot recorded");
    screen.click(last_dot);
    assert_eq!(screen.app.carousel().active(), 6);
    screen.key(KeyCode::Right);
    assert_eq!(screen.app.carousel().active(), 0);
}

#[test]
fn scrolling_is_ignored_behind_the_intro() {
    let mut screen = Screen::new(settings(false));
    screen.draw();
    screen.app.frame_drawn();
    screen.key(KeyCode::Char('j'));
    assert_eq!(screen.app.scroll_offset(), 0);
    screen.key(KeyCode::Enter);
    screen.advance(500);
    screen.key(KeyCode::Char('j'));
    assert_eq!(screen.app.scroll_offset(), 3);
}
