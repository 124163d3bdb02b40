// End-to-end tests: PNG fixtures on disk -> probe -> outcomes and report text
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, Rgba};
use png_alpha_probe::error::AppError;
use png_alpha_probe::probe::{AlphaProbe, ColorMode, FileOutcome, ProbeConfig, ProbeError, report};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock error")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("png-alpha-probe-{tag}-{nanos}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_png(path: &Path, image: DynamicImage) {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    std::fs::write(path, bytes).expect("write png");
}

/// Left half transparent, right half opaque.
fn mask_image() -> DynamicImage {
    DynamicImage::ImageRgba8(ImageBuffer::from_fn(8, 4, |x, _| {
        Rgba([255, 255, 255, if x < 4 { 0 } else { 255 }])
    }))
}

/// Horizontal alpha gradient.
fn gradient_image() -> DynamicImage {
    DynamicImage::ImageRgba8(ImageBuffer::from_fn(8, 4, |x, _| {
        Rgba([0, 0, 0, (x * 32).min(255) as u8])
    }))
}

fn opaque_rgb_image() -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_pixel(3, 3, Rgb([9, 9, 9])))
}

#[test]
fn directory_batch_survives_bad_files() {
    let dir = unique_temp_dir("batch");
    write_png(&dir.join("a_mask.png"), mask_image());
    std::fs::write(dir.join("b_corrupt.png"), b"\x89PNG\r\n\x1a\n garbage").expect("write");
    write_png(&dir.join("c_gradient.png"), gradient_image());
    write_png(&dir.join("d_rgb.png"), opaque_rgb_image());
    std::fs::write(dir.join("notes.txt"), b"ignored").expect("write");

    let probe = AlphaProbe::new(ProbeConfig::default());
    let outcomes = probe.analyze_directory(&dir).expect("directory exists");

    assert_eq!(outcomes.len(), 4);

    let mask = outcomes[0].report().expect("mask analyzed");
    assert_eq!(mask.file_name, "a_mask.png");
    assert_eq!(mask.color_mode(), ColorMode::RgbAlpha);
    let alpha = mask.classification.as_ref().expect("has alpha");
    assert!(alpha.is_pure_mask);
    assert_eq!(alpha.transparent_ratio, 50.0);
    assert_eq!(alpha.opaque_ratio, 50.0);

    assert!(matches!(
        &outcomes[1],
        FileOutcome::Failed { error: ProbeError::Decode(_), .. }
    ));

    let gradient = outcomes[2].report().expect("gradient analyzed");
    let alpha = gradient.classification.as_ref().expect("has alpha");
    assert!(!alpha.is_pure_mask);
    assert_eq!(alpha.distinct_value_count, 8);

    let rgb = outcomes[3].report().expect("rgb analyzed");
    assert_eq!(rgb.color_mode(), ColorMode::NoAlpha);
    assert!(rgb.classification.is_none());

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn missing_asset_directory_aborts_the_run() {
    let probe = AlphaProbe::new(ProbeConfig::default());
    let result = probe.analyze_directory(Path::new("/no/such/assets/image"));

    assert!(matches!(result, Err(AppError::Directory(_))));
}

#[test]
fn comparison_classifies_both_sides_independently() {
    let original = unique_temp_dir("original");
    let new = unique_temp_dir("new");
    write_png(&original.join("background.png"), mask_image());
    write_png(&new.join("background.png"), gradient_image());
    write_png(&new.join("background1.png"), mask_image());

    let probe = AlphaProbe::new(ProbeConfig::default());
    let rows = probe.compare_directories(&original, &new, &["background.png", "background1.png"]);

    let first = &rows[0];
    let before = first.original.report().and_then(|r| r.classification.as_ref());
    let after = first.new.report().and_then(|r| r.classification.as_ref());
    assert!(before.expect("original has alpha").is_pure_mask);
    assert!(!after.expect("new has alpha").is_pure_mask);

    let second = &rows[1];
    assert!(matches!(second.original, FileOutcome::Missing(_)));
    assert!(second.new.report().is_some());

    let text = report::render_comparison(second);
    assert!(text.contains("原项目: ❌ 不存在"));
    assert!(text.contains("新项目: ✓ 纯遮罩"));

    let _ = std::fs::remove_dir_all(original);
    let _ = std::fs::remove_dir_all(new);
}
