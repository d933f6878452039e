//! Intro overlay rendering and dismissal.

use folio_engine::HitTarget;
use folio_types::{CellPoint, IntroPhase, RippleOrigin};

use crate::common::{Screen, settings};

#[test]
fn static_intro_is_drawn_before_first_frame() {
    let mut screen = Screen::new(settings(false));
    let contents = screen.draw();
    assert_eq!(screen.app.intro_phase(), IntroPhase::Pending);
    assert!(contents.contains("Hi, recruiter"), "{contents}");
    assert!(contents.contains("Hi, I'm Rachabhas Vongbuntoon"), "{contents}");
    assert!(contents.contains("Let's take a look at my portfolio here."));
    assert!(contents.contains("Take a look"));
    assert!(contents.contains("Skip"));
}

#[test]
fn name_is_revealed_letter_by_letter() {
    let mut screen = Screen::new(settings(false));
    screen.draw();
    screen.app.frame_drawn();

    let contents = screen.frame();
    assert!(!contents.contains("Rachabhas"), "{contents}");

    // 600 ms delay, then 50 ms per letter.
    let contents = screen.advance(650);
    assert!(contents.contains("Hi"), "{contents}");
    assert!(!contents.contains("Rachabhas"), "{contents}");

    let contents = screen.advance(1500);
    assert!(contents.contains("Hi, I'm Rachabhas Vongbuntoon"), "{contents}");
    assert!(contents.contains("Preparing something amazing"));
}

#[test]
fn clicking_take_a_look_runs_exit_then_closes() {
    let mut screen = Screen::new(settings(false));
    screen.draw();
    screen.app.frame_drawn();
    screen.frame();

    let button = screen
        .find_hit(HitTarget::IntroTakeLook)
        .expect("take-a-look button recorded");
    screen.click(button);
    assert_eq!(
        screen.app.intro_phase(),
        IntroPhase::Exiting {
            ripple: RippleOrigin::Pointer(button)
        }
    );
    assert!(screen.app.is_scroll_locked());

    let contents = screen.advance(300);
    assert!(contents.contains("Loading portfolio"), "{contents}");
    assert!(!screen.app.is_intro_complete());

    screen.advance(200);
    assert_eq!(screen.app.intro_phase(), IntroPhase::Closed);
    assert!(screen.app.is_intro_complete());
    assert!(!screen.app.is_scroll_locked());

    let contents = screen.advance(700);
    assert!(contents.contains("View Projects"), "{contents}");
    assert!(contents.contains("Rachabhas Vongbuntoon"));
    assert!(!contents.contains("Take a look"));
}

#[test]
fn autoclose_dismisses_without_input() {
    let mut screen = Screen::new(settings(false));
    screen.draw();
    screen.app.frame_drawn();
    screen.advance(2999);
    assert!(screen.app.intro_phase().is_open());
    assert!(!screen.app.intro_phase().is_exiting());
    screen.advance(1);
    assert!(screen.app.intro_phase().is_exiting());
    screen.advance(500);
    assert!(screen.app.is_intro_complete());
}

#[test]
fn reduced_motion_skip_closes_on_the_same_frame() {
    let mut screen = Screen::new(settings(true));
    screen.draw();
    screen.app.frame_drawn();
    let contents = screen.frame();
    // Letters and progress are drawn complete.
    assert!(contents.contains("Hi, I'm Rachabhas Vongbuntoon"), "{contents}");

    let skip = screen.find_hit(HitTarget::IntroSkip).expect("skip button recorded");
    screen.click(skip);
    assert!(screen.app.is_intro_complete());
    let contents = screen.frame();
    assert!(contents.contains("View Projects"), "{contents}");
}

#[test]
fn clicks_outside_buttons_do_nothing() {
    let mut screen = Screen::new(settings(false));
    screen.draw();
    screen.app.frame_drawn();
    screen.frame();
    screen.click(CellPoint::new(0, 0));
    assert_eq!(screen.app.intro_phase(), IntroPhase::Open);
}
