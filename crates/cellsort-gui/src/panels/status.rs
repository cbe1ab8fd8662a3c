use crate::app::CellsortApp;

pub fn show(ctx: &egui::Context, app: &CellsortApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(image) = app.session.current() {
                ui.label(format!("{}x{}", image.image.width(), image.image.height()));
                ui.separator();
                ui.label(format!("Scale: {:.0}%", image.scale.factor() * 100.0));
                ui.separator();
                ui.label(format!("Grid: {}x{}", image.geometry.rows, image.geometry.cols));
                ui.separator();
            }
            for (label, count) in app.session.counters().iter() {
                ui.label(format!("{label}: {count}"));
            }
            ui.separator();
            ui.label(format!("Output: {}", app.session.output().root().display()));
        });

        ui.add_space(2.0);
    });
}
