use crate::app::CellsortApp;

const BAND_COLOR: egui::Color32 = egui::Color32::from_gray(50);

/// Instruction band: key bindings, image position and armed label.
pub fn show(ctx: &egui::Context, app: &CellsortApp) {
    let frame = egui::Frame::side_top_panel(&ctx.style()).fill(BAND_COLOR);

    egui::TopBottomPanel::top("header").frame(frame).show(ctx, |ui| {
        ui.add_space(2.0);
        ui.label(
            egui::RichText::new(app.session.config().instructions())
                .color(egui::Color32::WHITE)
                .size(15.0),
        );

        if let Some(image) = app.session.current() {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "Image {} of {}  |  File: {}",
                        image.ordinal + 1,
                        image.total,
                        image.file_name
                    ))
                    .color(egui::Color32::from_gray(200)),
                );
                ui.separator();

                let armed = match image.armed {
                    Some(ref label) => {
                        let [r, g, b] = app
                            .session
                            .config()
                            .label_color(label)
                            .unwrap_or([255, 255, 255]);
                        egui::RichText::new(label.as_str()).color(egui::Color32::from_rgb(r, g, b))
                    }
                    None => egui::RichText::new("none").color(egui::Color32::from_gray(140)),
                };
                ui.label(egui::RichText::new("Label:").color(egui::Color32::from_gray(200)));
                ui.label(armed.strong());
                ui.separator();
                let per_label: Vec<String> = app
                    .session
                    .config()
                    .labels
                    .iter()
                    .map(|l| format!("{} {}", l.name, image.selection.count_of(&l.name)))
                    .collect();
                ui.label(
                    egui::RichText::new(format!(
                        "Selected: {} ({})",
                        image.selection.len(),
                        per_label.join(", ")
                    ))
                    .color(egui::Color32::from_gray(200)),
                );
            });
        }
        ui.add_space(2.0);
    });
}
