use arrow_overlay::indicator::Shade;
use arrow_overlay::settings::{contrasting, Settings};
use eframe::egui::{vec2, Color32};
use tempfile::tempdir;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let s = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(s, Settings::default());
    assert_eq!(s.color(Shade::Active), Color32::BLACK);
    assert_eq!(s.color(Shade::Inactive), Color32::WHITE);
    assert_eq!(s.fallback_screen(), vec2(1920.0, 1080.0));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "active_color": [255, 0, 0], "debug_logging": true }"#).unwrap();
    let s = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(s.color(Shade::Active), Color32::from_rgb(255, 0, 0));
    assert_eq!(s.color(Shade::Inactive), Color32::WHITE);
    assert!(s.debug_logging);
    assert_eq!(s.window_size, 50.0);
}

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut s = Settings::default();
    s.glyph_size = 30.0;
    s.log_file = Some(dir.path().join("overlay.log"));
    s.save(path.to_str().unwrap()).unwrap();
    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded, s);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Settings::load(path.to_str().unwrap()).is_err());
}

#[test]
fn glyph_contrasts_with_background() {
    assert_eq!(contrasting(Color32::BLACK), Color32::WHITE);
    assert_eq!(contrasting(Color32::WHITE), Color32::BLACK);
    assert_eq!(contrasting(Color32::from_rgb(0, 0, 200)), Color32::WHITE);
}
