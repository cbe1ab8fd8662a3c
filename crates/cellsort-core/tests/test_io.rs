mod common;

use std::fs;

use cellsort_core::error::CellsortError;
use cellsort_core::input::{base_name, has_accepted_extension, list_images, load_image};
use cellsort_core::output::OutputSession;

use common::{damaged, healthy, write_png};

fn default_extensions() -> Vec<String> {
    vec!["jpg".into(), "jpeg".into(), "png".into()]
}

#[test]
fn test_list_images_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["c.PNG", "a.jpg", "b.JPEG", "notes.txt", "d.tif"] {
        fs::write(dir.path().join(name), b"x").unwrap();
    }
    fs::create_dir(dir.path().join("nested.png")).unwrap();

    let images = list_images(dir.path(), &default_extensions()).unwrap();
    let names: Vec<String> = images
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.jpg", "b.JPEG", "c.PNG"]);
}

#[test]
fn test_missing_input_dir_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = list_images(&dir.path().join("nope"), &default_extensions());
    assert!(matches!(result, Err(CellsortError::InputDirectory { .. })));
}

#[test]
fn test_extension_with_leading_dot() {
    let exts = vec![".png".to_string()];
    assert!(has_accepted_extension(std::path::Path::new("x.Png"), &exts));
    assert!(!has_accepted_extension(std::path::Path::new("x"), &exts));
}

#[test]
fn test_base_name_strips_extension() {
    assert_eq!(base_name(std::path::Path::new("/in/IMG_01.final.jpg")), "IMG_01.final");
}

#[test]
fn test_load_image_sniffs_format() {
    let dir = tempfile::tempdir().unwrap();
    let png = write_png(dir.path(), "real.png", 12, 8);
    let misnamed = dir.path().join("real.jpg");
    fs::rename(&png, &misnamed).unwrap();

    let image = load_image(&misnamed).unwrap();
    assert_eq!((image.width(), image.height()), (12, 8));
}

#[test]
fn test_output_session_layout() {
    let dir = tempfile::tempdir().unwrap();
    let output =
        OutputSession::create(dir.path(), &[healthy(), damaged()], "2025-04-19_10-30-00").unwrap();

    assert_eq!(output.root(), dir.path().join("session_2025-04-19_10-30-00"));
    assert!(output.label_dir(&healthy()).is_dir());
    assert!(output.label_dir(&damaged()).is_dir());
}

#[test]
fn test_output_session_create_now_uses_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let output = OutputSession::create_now(dir.path(), &[healthy()]).unwrap();
    let name = output.root().file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("session_"));
    // session_YYYY-MM-DD_HH-MM-SS
    assert_eq!(name.len(), "session_".len() + 19);
}

#[test]
fn test_output_session_unwritable_base() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("occupied");
    fs::write(&file, b"x").unwrap();

    let result = OutputSession::create(&file, &[healthy()], "stamp");
    assert!(matches!(result, Err(CellsortError::OutputSession { .. })));
}
