use crate::controller::OverlayController;
use crate::direction::{Direction, DirectionMap};
use crate::indicator::IndicatorWindow;
use crate::input::{InputSource, Subscription};
use crate::settings::{contrasting, Settings};
use crate::viewport::sync_position;
use eframe::egui;

/// Frames to wait for the monitor size before using the fallback screen.
pub const MONITOR_WAIT_FRAMES: u32 = 10;

/// Decides which screen size the layout is computed from.
///
/// The monitor size only shows up in the viewport info after a few frames on
/// some backends, so [`ScreenWait::resolve`] holds off for
/// [`MONITOR_WAIT_FRAMES`] frames before settling for the fallback.
#[derive(Debug, Default, Clone)]
pub struct ScreenWait {
    frames_waited: u32,
}

impl ScreenWait {
    /// `None` means "ask again next frame".
    pub fn resolve(&mut self, monitor: Option<egui::Vec2>, fallback: egui::Vec2) -> Option<egui::Vec2> {
        match monitor {
            Some(size) if size.x > 0.0 && size.y > 0.0 => Some(size),
            _ if self.frames_waited < MONITOR_WAIT_FRAMES => {
                self.frames_waited += 1;
                None
            }
            _ => {
                tracing::warn!("monitor size unavailable; using fallback screen size");
                Some(fallback)
            }
        }
    }
}

pub struct OverlayApp {
    settings: Settings,
    source: InputSource,
    pending: Option<Subscription>,
    controller: Option<OverlayController>,
    last_sent: DirectionMap<Option<egui::Pos2>>,
    screen_wait: ScreenWait,
    closing: bool,
}

impl OverlayApp {
    /// Subscribes to `source` right away so no key edge is lost while the
    /// layout waits for the monitor size.
    pub fn new(ctx: &egui::Context, settings: Settings, source: InputSource) -> Self {
        let waker_ctx = ctx.clone();
        source.set_waker(move || waker_ctx.request_repaint());
        let pending = Some(source.subscribe());
        Self {
            settings,
            source,
            pending,
            controller: None,
            last_sent: DirectionMap::from_fn(|_| None),
            screen_wait: ScreenWait::default(),
            closing: false,
        }
    }

    fn ensure_controller(&mut self, ctx: &egui::Context) -> bool {
        if self.controller.is_some() {
            return true;
        }
        let monitor = ctx.input(|i| i.viewport().monitor_size);
        let Some(screen) = self
            .screen_wait
            .resolve(monitor, self.settings.fallback_screen())
        else {
            ctx.request_repaint();
            return false;
        };

        let mut controller = OverlayController::new(screen, self.settings.window_size);
        match self.pending.take() {
            Some(sub) => controller.attach(sub),
            None => controller.subscribe(&self.source),
        }
        self.controller = Some(controller);
        true
    }
}

impl eframe::App for OverlayApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(err) = self.source.failure() {
            if !self.closing {
                tracing::error!("{err}; closing overlay");
                self.closing = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |_ui| {});

        if !self.ensure_controller(ctx) {
            return;
        }
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        controller.drain();

        for dir in Direction::ALL {
            show_indicator(
                ctx,
                &self.settings,
                controller.window_mut(dir),
                &mut self.last_sent[dir],
            );
        }
    }
}

fn show_indicator(
    ctx: &egui::Context,
    settings: &Settings,
    window: &mut IndicatorWindow,
    last_sent: &mut Option<egui::Pos2>,
) {
    let size = settings.window_size;
    let builder = egui::ViewportBuilder::default()
        .with_title(window.title())
        .with_inner_size([size, size])
        .with_position(window.initial_position())
        .with_decorations(false)
        .with_resizable(false)
        .with_always_on_top()
        .with_taskbar(false);
    let id = egui::ViewportId::from_hash_of(("indicator", window.direction().name()));

    ctx.show_viewport_immediate(id, builder, |ctx, _class| {
        sync_position(ctx, window, last_sent);
        let bg = settings.color(window.shade());
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(bg))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                drag_surface(ui, window);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    window.glyph(),
                    egui::FontId::proportional(settings.glyph_size),
                    contrasting(bg),
                );
            });
        // the drag may have moved the model this frame
        sync_position(ctx, window, last_sent);
    });
}

/// Make the whole of `ui` a drag handle for `window`.
pub fn drag_surface(ui: &mut egui::Ui, window: &mut IndicatorWindow) -> egui::Response {
    let response = ui.interact(ui.max_rect(), ui.id().with("drag"), egui::Sense::drag());
    handle_drag(ui.ctx(), &response, window);
    response
}

fn handle_drag(ctx: &egui::Context, response: &egui::Response, window: &mut IndicatorWindow) {
    // pointer positions are window-local; anchor them at the window's
    // current screen origin
    let origin = ctx
        .input(|i| i.viewport().inner_rect.or(i.viewport().outer_rect))
        .map(|r| r.min)
        .unwrap_or_else(|| window.position());
    let to_screen = |local: egui::Pos2| origin + local.to_vec2();

    if response.drag_started() {
        // egui reports the start only once the pointer passed the drag
        // threshold; the reference is the point where the button went down
        let press = ctx
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(p) = press {
            window.begin_drag(to_screen(p));
        }
    }
    if response.dragged() {
        if let Some(p) = response.interact_pointer_pos() {
            window.continue_drag(to_screen(p));
        }
    }
    if response.drag_stopped() {
        window.end_drag();
        tracing::debug!(dir = %window.direction(), pos = ?window.position(), "indicator dropped");
    }
}
