use arrow_overlay::direction::Direction;
use arrow_overlay::indicator::{IndicatorWindow, Shade};
use arrow_overlay::OverlayError;
use eframe::egui::pos2;

#[test]
fn new_window_starts_idle_at_initial_position() {
    let w = IndicatorWindow::new(Direction::Down, 50.0, 990.0);
    assert_eq!(w.position(), pos2(50.0, 990.0));
    assert_eq!(w.initial_position(), pos2(50.0, 990.0));
    assert_eq!(w.shade(), Shade::Inactive);
    assert_eq!(w.glyph(), '↓');
    assert_eq!(w.title(), "Down Window");
}

#[test]
fn from_label_rejects_unknown_direction() {
    assert!(matches!(
        IndicatorWindow::from_label("Diagonal", 0.0, 0.0),
        Err(OverlayError::InvalidDirection(_))
    ));
    let w = IndicatorWindow::from_label("Right Window", 100.0, 990.0).unwrap();
    assert_eq!(w.direction(), Direction::Right);
}

#[test]
fn drag_moves_by_cursor_delta() {
    let mut w = IndicatorWindow::new(Direction::Left, 0.0, 990.0);
    w.begin_drag(pos2(10.0, 1000.0));
    assert_eq!(w.continue_drag(pos2(25.0, 995.0)), Some(pos2(15.0, 985.0)));
    assert_eq!(w.continue_drag(pos2(40.0, 990.0)), Some(pos2(30.0, 980.0)));
    assert_eq!(w.position(), pos2(30.0, 980.0));
}

#[test]
fn drag_without_session_is_ignored() {
    let mut w = IndicatorWindow::new(Direction::Up, 50.0, 940.0);
    assert_eq!(w.continue_drag(pos2(500.0, 500.0)), None);
    assert_eq!(w.position(), pos2(50.0, 940.0));

    w.begin_drag(pos2(0.0, 0.0));
    w.end_drag();
    assert!(!w.is_dragging());
    assert_eq!(w.continue_drag(pos2(20.0, 20.0)), None);
    assert_eq!(w.position(), pos2(50.0, 940.0));
}

#[test]
fn each_drag_uses_its_own_reference() {
    let mut w = IndicatorWindow::new(Direction::Right, 100.0, 990.0);
    w.begin_drag(pos2(0.0, 0.0));
    w.continue_drag(pos2(10.0, 0.0));
    w.end_drag();

    // second drag starts far away; only its own delta applies
    w.begin_drag(pos2(300.0, 300.0));
    w.continue_drag(pos2(305.0, 298.0));
    assert_eq!(w.position(), pos2(115.0, 988.0));
}

#[test]
fn reset_restores_initial_position() {
    let mut w = IndicatorWindow::new(Direction::Left, 0.0, 990.0);
    w.begin_drag(pos2(0.0, 0.0));
    w.continue_drag(pos2(-40.0, 12.0));
    w.continue_drag(pos2(333.0, -7.0));
    w.reset_position();
    assert_eq!(w.position(), pos2(0.0, 990.0));
    assert!(!w.is_dragging());
    w.reset_position();
    assert_eq!(w.position(), pos2(0.0, 990.0));
}

#[test]
fn set_background_reports_changes() {
    let mut w = IndicatorWindow::new(Direction::Up, 0.0, 0.0);
    assert!(w.set_background(Shade::Active));
    assert!(!w.set_background(Shade::Active));
    assert!(w.set_background(Shade::Inactive));
}
