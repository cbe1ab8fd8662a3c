use crate::app::CellsortApp;
use crate::panels::grid_interaction;
use crate::states::DisplaySurface;

pub fn show(ctx: &egui::Context, app: &mut CellsortApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_info = app
            .viewport
            .texture
            .as_ref()
            .zip(app.viewport.display_size)
            .map(|(t, size)| (t.id(), egui::vec2(size[0] as f32, size[1] as f32)));

        let (Some((texture_id, display_size)), Some(image)) = (texture_info, app.session.current())
        else {
            app.viewport.surface = None;
            show_placeholder(ui);
            return;
        };

        let surface = DisplaySurface {
            rect: grid_interaction::fit_rect(rect, display_size),
            size: display_size,
        };
        ui.allocate_rect(rect, egui::Sense::click());

        draw_image(ui, texture_id, surface.rect);
        grid_interaction::draw_grid_overlay(ui, image, app.session.config(), surface);
        grid_interaction::update_cursor(ctx, ui, surface, image.armed.is_some());

        app.viewport.surface = Some(surface);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("No image loaded")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
