use image::{GrayImage, Luma, Rgb, RgbImage};
use ndarray::Array2;

use artscope_core::error::ArtscopeError;
use artscope_core::io::{load_raster, probe_image, save_mask_png};

#[test]
fn test_load_rgb_png_round_trip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("art.png");

    let mut img = RgbImage::new(4, 3);
    for row in 0..3u32 {
        for col in 0..4u32 {
            img.put_pixel(col, row, Rgb([(row * 50) as u8, (col * 40) as u8, 200]));
        }
    }
    img.save(&path).expect("write test png");

    let raster = load_raster(&path).expect("decode png");
    assert_eq!(raster.height(), 3);
    assert_eq!(raster.width(), 4);
    assert_eq!(raster.data()[[2, 1, 0]], 100);
    assert_eq!(raster.data()[[0, 3, 1]], 120);
    assert_eq!(raster.data()[[1, 2, 2]], 200);
}

#[test]
fn test_load_grayscale_png_expands_to_rgb() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("gray.png");

    let mut img = GrayImage::new(4, 4);
    for row in 0..4u32 {
        for col in 0..4u32 {
            img.put_pixel(col, row, Luma([(row * 60 + col) as u8]));
        }
    }
    img.save(&path).expect("write test png");

    let raster = load_raster(&path).expect("decode png");
    for row in 0..4 {
        for col in 0..4 {
            let r = raster.data()[[row, col, 0]];
            assert_eq!(r, raster.data()[[row, col, 1]]);
            assert_eq!(r, raster.data()[[row, col, 2]]);
        }
    }
}

#[test]
fn test_load_rejects_degenerate_image() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("tiny.png");

    RgbImage::new(1, 1).save(&path).expect("write test png");

    let err = load_raster(&path).unwrap_err();
    assert!(matches!(err, ArtscopeError::InvalidDimensions { .. }));
}

#[test]
fn test_save_mask_png_round_trip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("mask.png");

    let mask = Array2::from_shape_fn((5, 5), |(row, col)| row == col);
    save_mask_png(&mask, &path).expect("write mask");

    let img = image::open(&path).expect("re-open mask").to_luma8();
    assert_eq!(img.dimensions(), (5, 5));
    for row in 0..5u32 {
        for col in 0..5u32 {
            let expected = if row == col { 255 } else { 0 };
            assert_eq!(img.get_pixel(col, row).0[0], expected);
        }
    }
}

#[test]
fn test_probe_reports_metadata() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("probe.png");
    RgbImage::new(7, 5).save(&path).expect("write test png");

    let info = probe_image(&path).expect("probe png");
    assert_eq!(info.width, 7);
    assert_eq!(info.height, 5);
    assert_eq!(info.format, Some(image::ImageFormat::Png));
}
