use crate::direction::Direction;
use crate::error::Result;
use eframe::egui::{Pos2, Vec2};

/// Background state of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shade {
    #[default]
    Inactive,
    Active,
}

/// Cursor and window origin captured when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub cursor: Pos2,
    pub origin: Pos2,
}

/// Model behind one borderless arrow window.
///
/// Coordinates are absolute screen positions in egui points. The GUI layer
/// reads [`IndicatorWindow::position`] and moves the native window to match.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorWindow {
    direction: Direction,
    initial: Pos2,
    position: Pos2,
    shade: Shade,
    drag: Option<DragSession>,
}

impl IndicatorWindow {
    pub fn new(direction: Direction, x: f32, y: f32) -> Self {
        let initial = Pos2::new(x, y);
        tracing::debug!(%direction, ?initial, "indicator created");
        Self {
            direction,
            initial,
            position: initial,
            shade: Shade::Inactive,
            drag: None,
        }
    }

    /// Build a window from a free-form label, e.g. `"Left Window"`.
    pub fn from_label(label: &str, x: f32, y: f32) -> Result<Self> {
        Ok(Self::new(Direction::from_label(label)?, x, y))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn glyph(&self) -> char {
        self.direction.glyph()
    }

    pub fn title(&self) -> String {
        format!("{} Window", self.direction)
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn initial_position(&self) -> Pos2 {
        self.initial
    }

    pub fn shade(&self) -> Shade {
        self.shade
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns `true` when the shade actually changed.
    pub fn set_background(&mut self, shade: Shade) -> bool {
        if self.shade == shade {
            return false;
        }
        self.shade = shade;
        true
    }

    pub fn begin_drag(&mut self, cursor: Pos2) {
        self.drag = Some(DragSession {
            cursor,
            origin: self.position,
        });
    }

    /// Move the window by the cursor delta since [`begin_drag`].
    ///
    /// Returns the new position, or `None` if no drag is in progress.
    ///
    /// [`begin_drag`]: IndicatorWindow::begin_drag
    pub fn continue_drag(&mut self, cursor: Pos2) -> Option<Pos2> {
        let session = self.drag?;
        let delta: Vec2 = cursor - session.cursor;
        self.position = session.origin + delta;
        Some(self.position)
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn reset_position(&mut self) {
        self.drag = None;
        self.position = self.initial;
    }
}
