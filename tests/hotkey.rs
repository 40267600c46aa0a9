use arrow_overlay::direction::Direction;
use arrow_overlay::hotkey::{tracked_direction, ChordMatcher, Hotkey, RESET_HOTKEY};
use rdev::Key;

fn press_all(m: &mut ChordMatcher, keys: &[Key]) -> bool {
    keys.iter().fold(false, |fired, k| m.update(*k, true) || fired)
}

#[test]
fn reset_chord_is_ctrl_alt_r() {
    assert_eq!(RESET_HOTKEY.key, Key::KeyR);
    assert!(RESET_HOTKEY.ctrl && RESET_HOTKEY.alt && !RESET_HOTKEY.shift);
    assert_eq!(Hotkey::default(), RESET_HOTKEY);
}

#[test]
fn arrows_and_wasd_share_directions() {
    assert_eq!(tracked_direction(Key::UpArrow), Some(Direction::Up));
    assert_eq!(tracked_direction(Key::KeyW), Some(Direction::Up));
    assert_eq!(tracked_direction(Key::DownArrow), Some(Direction::Down));
    assert_eq!(tracked_direction(Key::KeyS), Some(Direction::Down));
    assert_eq!(tracked_direction(Key::LeftArrow), Some(Direction::Left));
    assert_eq!(tracked_direction(Key::KeyA), Some(Direction::Left));
    assert_eq!(tracked_direction(Key::RightArrow), Some(Direction::Right));
    assert_eq!(tracked_direction(Key::KeyD), Some(Direction::Right));
    assert_eq!(tracked_direction(Key::KeyQ), None);
    assert_eq!(tracked_direction(Key::Space), None);
}

#[test]
fn chord_fires_once_until_released() {
    let mut m = ChordMatcher::new(Hotkey::default());
    assert!(!m.update(Key::ControlLeft, true));
    assert!(!m.update(Key::Alt, true));
    assert!(m.update(Key::KeyR, true));
    // key repeat while held
    assert!(!m.update(Key::KeyR, true));
    assert!(!m.update(Key::KeyR, false));
    assert!(m.update(Key::KeyR, true));
}

#[test]
fn chord_needs_every_modifier() {
    let mut m = ChordMatcher::new(Hotkey::default());
    assert!(!m.update(Key::ControlLeft, true));
    assert!(!m.update(Key::KeyR, true));
    assert!(!m.update(Key::KeyR, false));
    assert!(!m.update(Key::ControlLeft, false));
    assert!(!m.update(Key::Alt, true));
    assert!(!m.update(Key::KeyR, true));
}

#[test]
fn extra_modifier_blocks_chord() {
    let mut m = ChordMatcher::new(Hotkey::default());
    assert!(!press_all(
        &mut m,
        &[Key::ControlLeft, Key::Alt, Key::ShiftLeft, Key::KeyR]
    ));
    // dropping the extra modifier completes the exact chord
    assert!(m.update(Key::ShiftLeft, false));
}

#[test]
fn either_control_key_keeps_chord_armed() {
    let mut m = ChordMatcher::new(Hotkey::default());
    assert!(!press_all(&mut m, &[Key::ControlLeft, Key::ControlRight, Key::Alt]));
    assert!(!m.update(Key::ControlRight, false));
    assert!(m.update(Key::KeyR, true));
}

#[test]
fn alt_gr_counts_as_alt() {
    let mut m = ChordMatcher::new(Hotkey::default());
    assert!(press_all(&mut m, &[Key::ControlRight, Key::AltGr, Key::KeyR]));
}
