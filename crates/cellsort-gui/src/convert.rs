use cellsort_core::scale::DisplayScale;
use image::imageops::FilterType;
use image::DynamicImage;

/// Downscale an image to its display size and convert it to an egui ColorImage.
pub fn display_color_image(image: &DynamicImage, scale: DisplayScale) -> egui::ColorImage {
    let (w, h) = scale.display_size(image.width(), image.height());

    let rgba = if (w, h) == (image.width(), image.height()) {
        image.to_rgba8()
    } else {
        image.resize_exact(w, h, FilterType::Triangle).to_rgba8()
    };

    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], rgba.as_raw())
}
