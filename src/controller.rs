use crate::direction::{Direction, DirectionMap};
use crate::hotkey::{tracked_direction, Key};
use crate::indicator::{IndicatorWindow, Shade};
use crate::input::{InputEvent, InputSource, KeyEdge, Subscription};
use crate::layout::initial_positions;
use eframe::egui::Vec2;
use std::sync::mpsc::Receiver;

/// Owns the four indicators and routes input events to them.
pub struct OverlayController {
    windows: DirectionMap<IndicatorWindow>,
    subscription: Option<Subscription>,
}

impl OverlayController {
    /// Lay out one indicator per direction for a screen of `screen` points.
    pub fn new(screen: Vec2, window_size: f32) -> Self {
        let positions = initial_positions(screen, window_size);
        let windows =
            DirectionMap::from_fn(|dir| IndicatorWindow::new(dir, positions[dir].x, positions[dir].y));
        tracing::info!(width = screen.x, height = screen.y, "indicator layout computed");
        Self {
            windows,
            subscription: None,
        }
    }

    pub fn subscribe(&mut self, source: &InputSource) {
        self.attach(source.subscribe());
    }

    /// Take over an existing subscription, e.g. one opened before the
    /// screen size was known. Events queued on it are kept.
    pub fn attach(&mut self, subscription: Subscription) {
        self.subscription = Some(subscription);
    }

    pub fn unsubscribe(&mut self) {
        // dropping the subscription removes it from the source
        self.subscription = None;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn window(&self, dir: Direction) -> &IndicatorWindow {
        &self.windows[dir]
    }

    pub fn window_mut(&mut self, dir: Direction) -> &mut IndicatorWindow {
        &mut self.windows[dir]
    }

    pub fn windows(&self) -> impl Iterator<Item = &IndicatorWindow> {
        self.windows.values()
    }

    pub fn windows_mut(&mut self) -> impl Iterator<Item = &mut IndicatorWindow> {
        self.windows.values_mut()
    }

    /// Returns `true` if a window changed.
    pub fn on_key_down(&mut self, key: Key) -> bool {
        self.shade_for(key, Shade::Active)
    }

    pub fn on_key_up(&mut self, key: Key) -> bool {
        self.shade_for(key, Shade::Inactive)
    }

    fn shade_for(&mut self, key: Key, shade: Shade) -> bool {
        match tracked_direction(key) {
            Some(dir) => {
                let changed = self.windows[dir].set_background(shade);
                if changed {
                    tracing::trace!(?key, %dir, ?shade, "indicator shade changed");
                }
                changed
            }
            None => false,
        }
    }

    pub fn on_reset_hotkey(&mut self) {
        tracing::info!("resetting indicator positions");
        for window in self.windows.values_mut() {
            window.reset_position();
        }
    }

    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key {
                key,
                edge: KeyEdge::Down,
            } => self.on_key_down(key),
            InputEvent::Key {
                key,
                edge: KeyEdge::Up,
            } => self.on_key_up(key),
            InputEvent::ResetHotkey => {
                self.on_reset_hotkey();
                true
            }
        }
    }

    /// Apply everything queued on the controller's own subscription.
    pub fn drain(&mut self) -> bool {
        let Some(sub) = self.subscription.take() else {
            return false;
        };
        let changed = self.drain_from(sub.receiver());
        self.subscription = Some(sub);
        changed
    }

    /// Apply everything queued on `rx`.
    pub fn drain_from(&mut self, rx: &Receiver<InputEvent>) -> bool {
        let mut changed = false;
        for ev in rx.try_iter() {
            changed |= self.handle(ev);
        }
        changed
    }
}
