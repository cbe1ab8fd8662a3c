use cellsort_core::consts::POLL_INTERVAL;
use cellsort_core::session::{Notice, Session};

use crate::convert::display_color_image;
use crate::events::EventQueue;
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::summary;

pub struct CellsortApp {
    pub session: Session,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub events: EventQueue,
    window_sized: bool,
    closing: bool,
}

impl CellsortApp {
    pub fn new(session: Session, opening: Vec<Notice>) -> Self {
        let mut app = Self {
            session,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            events: EventQueue::default(),
            window_sized: false,
            closing: false,
        };
        app.add_notices(opening);
        app
    }

    fn add_notices(&mut self, notices: Vec<Notice>) {
        for notice in notices {
            self.ui_state.add_log(notice.to_string());
        }
    }

    /// Size the window to a fraction of the monitor once its size is known.
    fn size_window(&mut self, ctx: &egui::Context) {
        if self.window_sized {
            return;
        }
        let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) else {
            return;
        };
        let display = &self.session.config().display;
        let size = egui::vec2(
            monitor.x * display.window_width_fraction,
            monitor.y * display.window_height_fraction,
        );
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
        self.window_sized = true;
    }

    /// Upload the current image when the session has moved to a new one.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let Some(image) = self.session.current() else {
            self.viewport.clear();
            return;
        };
        if self.viewport.shown == Some(image.ordinal) {
            return;
        }

        let color_image = display_color_image(&image.image, image.scale);
        let size = color_image.size;
        let texture = ctx.load_texture("grid-image", color_image, egui::TextureOptions::LINEAR);
        self.viewport.texture = Some(texture);
        self.viewport.display_size = Some(size);
        self.viewport.shown = Some(image.ordinal);
    }

    fn finish(&mut self, ctx: &egui::Context) {
        if self.closing {
            return;
        }
        self.closing = true;
        summary::print_session_summary(&self.session);
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl eframe::App for CellsortApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.size_window(ctx);

        // Closing the window goes through the exit path so the open image
        // is exported first.
        if ctx.input(|i| i.viewport().close_requested()) && !self.session.is_finished() {
            let notices = self.session.terminate();
            self.add_notices(notices);
        }

        self.sync_texture(ctx);

        panels::header::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        // One polling tick: queue everything that arrived, apply one event.
        self.events.collect(ctx, self.viewport.surface);
        let event = self.events.poll();
        let notices = self.session.step(event);
        if !notices.is_empty() {
            self.add_notices(notices);
            ctx.request_repaint();
        }

        if self.session.is_finished() {
            self.finish(ctx);
        } else if self.events.is_empty() {
            ctx.request_repaint_after(POLL_INTERVAL);
        } else {
            ctx.request_repaint();
        }
    }
}
