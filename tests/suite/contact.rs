//! Copy actions and the toast they raise.

use crossterm::event::KeyCode;
use folio_engine::{Copier, HitTarget, MemoryClipboard};
use folio_types::ContactKind;

use crate::common::{Screen, settings};

fn open_contact(screen: &mut Screen) -> String {
    screen.skip_intro();
    screen.key(KeyCode::Char('5'));
    screen.advance(120);
    screen.advance(1300)
}

#[test]
fn contact_section_lists_channels() {
    let mut screen = Screen::new(settings(false));
    let contents = open_contact(&mut screen);
    assert_eq!(screen.app.location().as_str(), "/#contact");
    assert!(contents.contains("Direct channels"), "{contents}");
    assert!(contents.contains("bjsjm000"), "{contents}");
}

#[test]
fn clicking_copy_shows_toast_then_hides_it() {
    let mut screen = Screen::new(settings(false));
    open_contact(&mut screen);

    let button = screen
        .find_hit(HitTarget::Copy(ContactKind::Line))
        .expect("copy button recorded");
    screen.click(button);
    assert_eq!(screen.clipboard.contents().as_deref(), Some("bjsjm000"));

    let contents = screen.frame();
    assert!(contents.contains("Copied: bjsjm000"), "{contents}");

    let contents = screen.advance(1599);
    assert!(contents.contains("Copied: bjsjm000"));
    let contents = screen.advance(1);
    assert!(!contents.contains("Copied: bjsjm000"), "{contents}");
}

#[test]
fn copy_key_works_from_anywhere_after_intro() {
    let mut screen = Screen::new(settings(false));
    screen.skip_intro();
    screen.key(KeyCode::Char('e'));
    let email = screen
        .app
        .resume()
        .profile
        .contacts
        .item(ContactKind::Email)
        .expect("email contact")
        .value;
    assert_eq!(screen.clipboard.contents().as_deref(), Some(email));
    let contents = screen.frame();
    assert!(contents.contains("Copied:"), "{contents}");
}

#[test]
fn failed_copy_reports_failure() {
    let clipboard = MemoryClipboard::unavailable();
    let mut screen = Screen::with_copier(
        settings(false),
        Copier::new(clipboard.clone(), None),
        clipboard,
    );
    screen.skip_intro();
    screen.key(KeyCode::Char('p'));
    assert_eq!(screen.clipboard.contents(), None);
    let contents = screen.frame();
    assert!(contents.contains("Copy failed"), "{contents}");
}
