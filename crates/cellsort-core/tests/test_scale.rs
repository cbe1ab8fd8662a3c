use approx::assert_relative_eq;

use cellsort_core::grid::{GridGeometry, Point};
use cellsort_core::scale::DisplayScale;

#[test]
fn test_scale_limited_by_height() {
    let scale = DisplayScale::compute(1200, 1200, 1600, 900);
    assert_relative_eq!(scale.factor(), 0.75);
}

#[test]
fn test_scale_limited_by_width() {
    let scale = DisplayScale::compute(3200, 900, 1600, 900);
    assert_relative_eq!(scale.factor(), 0.5);
}

#[test]
fn test_small_image_keeps_native_size() {
    let scale = DisplayScale::compute(640, 480, 1600, 900);
    assert_eq!(scale, DisplayScale::NATIVE);
    assert_eq!(scale.display_size(640, 480), (640, 480));
}

#[test]
fn test_click_maps_back_to_first_cell() {
    let scale = DisplayScale::compute(1200, 1200, 1600, 900);
    let original = scale.to_original(Point::new(100, 100));
    assert_eq!(original, Point::new(133, 133));

    let geometry = GridGeometry::new(1200, 1200, 6, 6);
    assert_eq!(geometry.locate(original), Some(0));
}

#[test]
fn test_to_display_truncates() {
    let scale = DisplayScale::compute(1200, 1200, 1600, 900);
    assert_eq!(scale.to_display(Point::new(199, 201)), Point::new(149, 150));
    assert_eq!(scale.display_size(1200, 1200), (900, 900));
}

#[test]
fn test_round_trip_stays_in_cell_for_centers() {
    let geometry = GridGeometry::new(4000, 3000, 6, 6);
    let scale = DisplayScale::compute(4000, 3000, 1600, 900);
    for (i, cell) in geometry.cells.iter().enumerate() {
        let shown = scale.to_display(cell.center());
        assert_eq!(geometry.locate(scale.to_original(shown)), Some(i));
    }
}
