use crate::direction::Direction;
pub use rdev::Key;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotkey {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

/// Chord that snaps every indicator back to its starting position.
pub const RESET_HOTKEY: Hotkey = Hotkey {
    key: Key::KeyR,
    ctrl: true,
    shift: false,
    alt: true,
};

impl Default for Hotkey {
    fn default() -> Self {
        RESET_HOTKEY
    }
}

/// Direction lit up by `key`, if any.
///
/// WASD drives the arrow indicators; there are no separate WASD windows.
pub fn tracked_direction(key: Key) -> Option<Direction> {
    match key {
        Key::UpArrow | Key::KeyW => Some(Direction::Up),
        Key::DownArrow | Key::KeyS => Some(Direction::Down),
        Key::LeftArrow | Key::KeyA => Some(Direction::Left),
        Key::RightArrow | Key::KeyD => Some(Direction::Right),
        _ => None,
    }
}

/// Modifier keys currently held, left and right sides tracked apart.
#[derive(Debug, Clone, Copy, Default)]
struct HeldModifiers {
    ctrl_left: bool,
    ctrl_right: bool,
    shift_left: bool,
    shift_right: bool,
    alt: bool,
    alt_gr: bool,
}

impl HeldModifiers {
    fn update(&mut self, key: Key, pressed: bool) {
        match key {
            Key::ControlLeft => self.ctrl_left = pressed,
            Key::ControlRight => self.ctrl_right = pressed,
            Key::ShiftLeft => self.shift_left = pressed,
            Key::ShiftRight => self.shift_right = pressed,
            Key::Alt => self.alt = pressed,
            Key::AltGr => self.alt_gr = pressed,
            _ => {}
        }
    }

    fn ctrl(&self) -> bool {
        self.ctrl_left || self.ctrl_right
    }

    fn shift(&self) -> bool {
        self.shift_left || self.shift_right
    }

    fn alt(&self) -> bool {
        self.alt || self.alt_gr
    }
}

/// Edge-triggered matcher for a modifier chord.
///
/// Fires once when exactly the chord's modifiers and its key are held, and
/// re-arms only after the chord is broken.
#[derive(Debug, Clone)]
pub struct ChordMatcher {
    hotkey: Hotkey,
    held: HeldModifiers,
    watch_pressed: bool,
    triggered: bool,
}

impl ChordMatcher {
    pub fn new(hotkey: Hotkey) -> Self {
        Self {
            hotkey,
            held: HeldModifiers::default(),
            watch_pressed: false,
            triggered: false,
        }
    }

    /// Feed one key edge; returns `true` when the chord fires.
    pub fn update(&mut self, key: Key, pressed: bool) -> bool {
        self.held.update(key, pressed);
        if key == self.hotkey.key {
            self.watch_pressed = pressed;
        }

        let combo = self.watch_pressed
            && self.held.ctrl() == self.hotkey.ctrl
            && self.held.shift() == self.hotkey.shift
            && self.held.alt() == self.hotkey.alt;
        if combo {
            if !self.triggered {
                self.triggered = true;
                tracing::debug!(held = ?self.held, "hotkey match");
                return true;
            }
        } else {
            if self.triggered {
                tracing::debug!("combo released");
            }
            self.triggered = false;
        }
        false
    }
}
