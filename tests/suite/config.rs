//! Config files flowing through to what is drawn.

use std::fs;

use crossterm::event::KeyCode;
use folio_config::{EnvOverrides, FolioConfig, Settings};
use folio_types::IntroPhase;

use crate::common::Screen;

fn load(contents: &str) -> FolioConfig {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    FolioConfig::load_from(&path)
        .expect("config parses")
        .expect("config exists")
}

#[test]
fn reduced_motion_and_ascii_from_file() {
    let config = load("[app]\nreduced_motion = true\nascii_only = true\n");
    let settings = Settings::resolve(Some(&config), EnvOverrides::default());
    assert!(settings.ui.reduced_motion);
    assert!(settings.ui.ascii_only);

    let mut screen = Screen::new(settings);
    let contents = screen.frame();
    assert!(contents.contains("Hi, recruiter"), "{contents}");
    assert!(!contents.contains('👋'));
    assert!(contents.contains("Rachabhas"), "{contents}");

    screen.key(KeyCode::Enter);
    assert_eq!(screen.app.intro_phase(), IntroPhase::Closed);
    let contents = screen.frame();
    assert!(contents.contains("View Projects"), "{contents}");
}

#[test]
fn zero_autoclose_keeps_intro_open() {
    let config = load("[motion]\nintro_autoclose = 0\n");
    let settings = Settings::resolve(Some(&config), EnvOverrides::default());
    let mut screen = Screen::new(settings);
    screen.frame();
    screen.advance(10_000);
    assert_eq!(screen.app.intro_phase(), IntroPhase::Open);
}

#[test]
fn environment_overrides_file() {
    let config = load("[app]\nreduced_motion = true\n");
    let settings = Settings::resolve(
        Some(&config),
        EnvOverrides {
            reduced_motion: Some(false),
        },
    );
    assert!(!settings.ui.reduced_motion);
    assert_eq!(settings.timings, Settings::default().timings);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app\nreduced_motion = ").expect("write config");
    let err = FolioConfig::load_from(&path).expect_err("parse error");
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn missing_file_is_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let loaded = FolioConfig::load_from(&dir.path().join("config.toml")).expect("no error");
    assert!(loaded.is_none());
}
