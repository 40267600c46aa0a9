use crate::direction::{Direction, DirectionMap};
use eframe::egui::{Pos2, Vec2};

/// Default edge length of an indicator window.
pub const WINDOW_SIZE: f32 = 50.0;
/// Gap kept between the lowest row and the bottom edge of the screen.
pub const BOTTOM_LIFT: f32 = 40.0;

/// Starting positions for the inverted-T arrow cluster in the bottom left
/// corner of a screen of the given size.
///
/// With 50px windows on a 1920x1080 screen this yields Left (0, 990),
/// Down (50, 990), Up (50, 940) and Right (100, 990).
pub fn initial_positions(screen: Vec2, window_size: f32) -> DirectionMap<Pos2> {
    let bottom_row = screen.y - window_size - BOTTOM_LIFT;
    let top_row = bottom_row - window_size;
    DirectionMap::from_fn(|dir| match dir {
        Direction::Left => Pos2::new(0.0, bottom_row),
        Direction::Down => Pos2::new(window_size, bottom_row),
        Direction::Up => Pos2::new(window_size, top_row),
        Direction::Right => Pos2::new(window_size * 2.0, bottom_row),
    })
}
