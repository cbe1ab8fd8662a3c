use cellsort_core::config::SessionConfig;
use cellsort_core::grid::Point;
use cellsort_core::session::ImageContext;

use crate::states::DisplaySurface;

const SELECTED_STROKE: f32 = 3.0;
const UNSELECTED_STROKE: f32 = 1.0;
/// Offset of the index label from the cell's top-left corner, display pixels.
const INDEX_OFFSET: (i32, i32) = (5, 40);

/// Convert screen coordinates to display-space pixels of the downscaled image.
pub fn screen_to_display(pos: egui::Pos2, img_rect: egui::Rect, display_size: egui::Vec2) -> Point {
    Point::new(
        ((pos.x - img_rect.left()) * display_size.x / img_rect.width()) as i32,
        ((pos.y - img_rect.top()) * display_size.y / img_rect.height()) as i32,
    )
}

/// Convert display-space pixels to screen coordinates.
pub fn display_to_screen(p: Point, img_rect: egui::Rect, display_size: egui::Vec2) -> egui::Pos2 {
    egui::pos2(
        p.x as f32 * img_rect.width() / display_size.x + img_rect.left(),
        p.y as f32 * img_rect.height() / display_size.y + img_rect.top(),
    )
}

/// Largest rect with the image's aspect ratio that fits `available`, centered.
pub fn fit_rect(available: egui::Rect, display_size: egui::Vec2) -> egui::Rect {
    let zoom = (available.width() / display_size.x).min(available.height() / display_size.y);
    egui::Rect::from_center_size(available.center(), display_size * zoom)
}

fn label_color(config: &SessionConfig, image: &ImageContext, cell: usize) -> Option<egui::Color32> {
    let label = image.selection.get(cell)?;
    let [r, g, b] = config.label_color(label).unwrap_or([255, 255, 0]);
    Some(egui::Color32::from_rgb(r, g, b))
}

/// Outline every cell and write its index. Selected cells are drawn last so
/// their colored borders sit on top of the neutral ones.
pub fn draw_grid_overlay(
    ui: &egui::Ui,
    image: &ImageContext,
    config: &SessionConfig,
    surface: DisplaySurface,
) {
    let painter = ui.painter_at(surface.rect);
    let cells = image.geometry.cells.iter().enumerate();
    let (unselected, selected): (Vec<_>, Vec<_>) =
        cells.partition(|(i, _)| image.selection.get(*i).is_none());

    for (index, cell) in unselected.into_iter().chain(selected) {
        let top_left = image.scale.to_display(Point::new(cell.x1 as i32, cell.y1 as i32));
        let bottom_right = image.scale.to_display(Point::new(cell.x2 as i32, cell.y2 as i32));
        let rect = egui::Rect::from_min_max(
            display_to_screen(top_left, surface.rect, surface.size),
            display_to_screen(bottom_right, surface.rect, surface.size),
        );

        let (stroke, text_color, font_size) = match label_color(config, image, index) {
            Some(color) => (egui::Stroke::new(SELECTED_STROKE, color), color, 16.0),
            None => (
                egui::Stroke::new(UNSELECTED_STROKE, egui::Color32::from_gray(200)),
                egui::Color32::from_gray(180),
                13.0,
            ),
        };
        painter.rect_stroke(rect, 0.0, stroke, egui::epaint::StrokeKind::Inside);

        let anchor = Point::new(top_left.x + INDEX_OFFSET.0, top_left.y + INDEX_OFFSET.1);
        painter.text(
            display_to_screen(anchor, surface.rect, surface.size),
            egui::Align2::LEFT_BOTTOM,
            index.to_string(),
            egui::FontId::proportional(font_size),
            text_color,
        );
    }
}

/// Crosshair over the image while a label is armed.
pub fn update_cursor(ctx: &egui::Context, ui: &egui::Ui, surface: DisplaySurface, armed: bool) {
    if !armed {
        return;
    }
    if let Some(hover) = ui.input(|i| i.pointer.hover_pos()) {
        if surface.rect.contains(hover) {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_display_roundtrip_on_stretched_surface() {
        // 900x900 display image stretched into a 450x450 screen rect.
        let rect = egui::Rect::from_min_size(egui::pos2(100.0, 20.0), egui::vec2(450.0, 450.0));
        let size = egui::vec2(900.0, 900.0);

        let p = screen_to_display(egui::pos2(150.0, 70.0), rect, size);
        assert_eq!(p, Point::new(100, 100));
        let back = display_to_screen(p, rect, size);
        assert!((back.x - 150.0).abs() < 1e-3 && (back.y - 70.0).abs() < 1e-3);
    }

    #[test]
    fn fit_rect_preserves_aspect() {
        let available = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1000.0, 500.0));
        let fitted = fit_rect(available, egui::vec2(900.0, 900.0));
        assert!((fitted.width() - 500.0).abs() < 1e-2);
        assert!((fitted.height() - 500.0).abs() < 1e-2);
        assert!((fitted.center() - available.center()).length() < 1e-3);
    }
}
