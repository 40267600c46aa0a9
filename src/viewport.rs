use crate::indicator::IndicatorWindow;
use eframe::egui::{self, Pos2};

/// The parts of [`egui::Context`] the indicators need, so positioning can be
/// exercised without a live window.
pub trait ViewportCtx {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);
    fn request_repaint(&self);
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

/// Move the native window to the model position if it differs from the
/// last position sent.
pub fn sync_position<C: ViewportCtx>(ctx: &C, window: &IndicatorWindow, last_sent: &mut Option<Pos2>) {
    let pos = window.position();
    if *last_sent == Some(pos) {
        return;
    }
    tracing::trace!(dir = %window.direction(), x = pos.x, y = pos.y, "moving indicator");
    ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos));
    *last_sent = Some(pos);
}
